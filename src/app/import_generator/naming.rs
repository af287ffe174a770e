//! Import-name derivation and resource-type case conversion.
//!
//! Pulumi requires a logical name per imported resource. AWS rarely provides
//! one directly, so the name is derived from the raw record with a fixed
//! precedence: an explicit `Name` attribute wins, then the value of a `Name`
//! tag with the resource id appended, then a synthetic `import-<id>` fallback.

/// Derive the logical import name for a raw resource record.
pub fn derive_import_name(raw: &serde_json::Value, resource_id: &str) -> String {
    // A Name attribute is assumed unique (e.g. an S3 bucket name), so it is
    // used verbatim.
    if let Some(name) = raw.get("Name").and_then(|v| v.as_str()) {
        return name.to_string();
    }

    // Name tag values have no uniqueness requirement; append the resource id
    // so plan names stay distinct. First matching tag wins.
    if let Some(tags) = raw.get("Tags").and_then(|v| v.as_array()) {
        for tag in tags {
            if let (Some(key), Some(value)) = (
                tag.get("Key").and_then(|k| k.as_str()),
                tag.get("Value").and_then(|v| v.as_str()),
            ) {
                if key == "Name" {
                    return format!("{}-{}", value, resource_id);
                }
            }
        }
    }

    format!("import-{}", resource_id)
}

/// Convert a snake_case resource type name to PascalCase (`route_table` →
/// `RouteTable`).
pub fn pascal_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Convert a snake_case resource type name to camelCase (`nat_gateway` →
/// `natGateway`).
pub fn camel_case(snake: &str) -> String {
    let pascal = pascal_case(snake);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build the Pulumi type token for an EC2-family resource type name, e.g.
/// `vpc` → `aws:ec2/vpc:Vpc`.
pub fn pulumi_type_token(snake: &str) -> String {
    format!("aws:ec2/{}:{}", camel_case(snake), pascal_case(snake))
}
