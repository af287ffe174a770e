//! Import plan generation for AWS EC2-family networking resources.
//!
//! Enumerates VPCs, subnets, route tables, NAT gateways, internet gateways,
//! route table associations, and EC2 instances through the EC2 describe APIs
//! and turns each raw record into a Pulumi import descriptor. The core
//! transformation is [`generate_import_resources`]; the per-kind wiring lives
//! in [`registry::ResourceKind`] and the describe calls in
//! [`aws_services::Ec2Service`].

pub mod aws_services;
pub mod naming;
pub mod registry;
pub mod sdk_errors;
pub mod state;

pub use aws_services::Ec2Service;
pub use registry::ResourceKind;
pub use state::{ImportPlan, ImportResource};

use anyhow::{Context, Result};
use serde_json::Value;

/// Orchestrates the describe calls and descriptor generation for one account
/// and region.
pub struct ImportGenerator {
    ec2: Ec2Service,
}

impl ImportGenerator {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            ec2: Ec2Service::new(config),
        }
    }

    /// Build the full import plan: one pass over every registered resource
    /// kind, then the route table association pass.
    pub async fn generate_plan(&self) -> Result<ImportPlan> {
        let mut resources = Vec::new();
        let mut route_tables: Vec<Value> = Vec::new();

        for kind in ResourceKind::ALL {
            let records = self
                .ec2
                .list(kind)
                .await
                .with_context(|| format!("listing {} resources", kind.snake_name()))?;
            tracing::info!(
                "Listed {} {} record(s)",
                records.len(),
                kind.snake_name()
            );

            let entries = generate_import_resources(
                &records,
                |record| extract_id_field(record, kind.id_field()),
                kind.type_token(),
            )?;
            resources.extend(entries);

            // Associations ride along in the DescribeRouteTables payload, so
            // keep it for the association pass instead of describing twice.
            if kind == ResourceKind::RouteTable {
                route_tables = records;
            }
        }

        resources.extend(route_table_association_resources(&route_tables));

        Ok(ImportPlan { resources })
    }
}

/// Generate one import descriptor per raw record, in input order.
///
/// `extract_id` failures propagate and abort the run; a record that the id
/// extractor accepts always yields exactly one descriptor.
pub fn generate_import_resources<F>(
    records: &[Value],
    extract_id: F,
    type_token: &str,
) -> Result<Vec<ImportResource>>
where
    F: Fn(&Value) -> Result<String>,
{
    let mut resources = Vec::with_capacity(records.len());
    for record in records {
        let id = extract_id(record)?;
        let name = naming::derive_import_name(record, &id);
        resources.push(ImportResource::new(type_token, name, id));
    }
    Ok(resources)
}

/// Read a required string field from a raw record.
pub fn extract_id_field(record: &Value, field: &str) -> Result<String> {
    record
        .get(field)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .with_context(|| format!("resource record has no {} field", field))
}

/// Generate descriptors for the subnet associations of the given route
/// tables.
///
/// The import id is composite (`<subnetId>/<routeTableId>`). Associations
/// without a `SubnetId` are skipped; that shape is the main-table association,
/// which cannot be imported as a subnet binding.
pub fn route_table_association_resources(route_tables: &[Value]) -> Vec<ImportResource> {
    let mut resources = Vec::new();

    for route_table in route_tables {
        let route_table_id = match route_table.get("RouteTableId").and_then(|v| v.as_str()) {
            Some(id) => id,
            None => continue,
        };

        if let Some(associations) = route_table.get("Associations").and_then(|v| v.as_array()) {
            for association in associations {
                let subnet_id = match association.get("SubnetId").and_then(|v| v.as_str()) {
                    Some(id) => id,
                    None => continue,
                };
                let association_id = association
                    .get("RouteTableAssociationId")
                    .and_then(|v| v.as_str())
                    .unwrap_or("unknown-association");

                resources.push(ImportResource::new(
                    registry::ROUTE_TABLE_ASSOCIATION_TOKEN,
                    format!("import-{}", association_id),
                    format!("{}/{}", subnet_id, route_table_id),
                ));
            }
        }
    }

    resources
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_generate_preserves_count_and_order() {
        let records = vec![
            json!({"VpcId": "vpc-1"}),
            json!({"VpcId": "vpc-2", "Tags": [{"Key": "Name", "Value": "two"}]}),
            json!({"VpcId": "vpc-3", "Name": "three"}),
        ];

        let resources = generate_import_resources(
            &records,
            |record| extract_id_field(record, "VpcId"),
            "aws:ec2/vpc:Vpc",
        )
        .unwrap();

        assert_eq!(resources.len(), records.len());
        assert_eq!(
            resources,
            vec![
                ImportResource::new("aws:ec2/vpc:Vpc", "import-vpc-1", "vpc-1"),
                ImportResource::new("aws:ec2/vpc:Vpc", "two-vpc-2", "vpc-2"),
                ImportResource::new("aws:ec2/vpc:Vpc", "three", "vpc-3"),
            ]
        );
    }

    #[test]
    fn test_generate_propagates_missing_id() {
        let records = vec![json!({"VpcId": "vpc-1"}), json!({"CidrBlock": "10.0.0.0/16"})];

        let result = generate_import_resources(
            &records,
            |record| extract_id_field(record, "VpcId"),
            "aws:ec2/vpc:Vpc",
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("VpcId"));
    }

    #[test]
    fn test_association_with_subnet_yields_composite_id() {
        let route_tables = vec![json!({
            "RouteTableId": "rtb-1",
            "Associations": [
                {"RouteTableAssociationId": "rtbassoc-1", "SubnetId": "subnet-5"},
            ],
        })];

        let resources = route_table_association_resources(&route_tables);
        assert_eq!(
            resources,
            vec![ImportResource::new(
                registry::ROUTE_TABLE_ASSOCIATION_TOKEN,
                "import-rtbassoc-1",
                "subnet-5/rtb-1",
            )]
        );
    }

    #[test]
    fn test_association_without_subnet_is_skipped() {
        let route_tables = vec![json!({
            "RouteTableId": "rtb-1",
            "Associations": [
                {"RouteTableAssociationId": "rtbassoc-main", "Main": true},
            ],
        })];

        assert!(route_table_association_resources(&route_tables).is_empty());
    }

    #[test]
    fn test_route_table_without_associations() {
        let route_tables = vec![json!({"RouteTableId": "rtb-2"})];
        assert!(route_table_association_resources(&route_tables).is_empty());
    }
}
