use serde::{Deserialize, Serialize};

/// One entry of a Pulumi bulk-import file, binding a configuration resource
/// to an already-existing AWS resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResource {
    /// Pulumi type token, e.g. `aws:ec2/vpc:Vpc`.
    #[serde(rename = "type")]
    pub type_token: String,
    /// Logical resource name. Unique within a plan on a best-effort basis:
    /// names derived from a `Name` tag get the resource id appended.
    pub name: String,
    /// Provider resource id. Composite for route table associations
    /// (`<subnetId>/<routeTableId>`).
    pub id: String,
}

impl ImportResource {
    pub fn new(
        type_token: impl Into<String>,
        name: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            type_token: type_token.into(),
            name: name.into(),
            id: id.into(),
        }
    }
}

/// The full import plan, in the file format accepted by `pulumi import --file`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportPlan {
    pub resources: Vec<ImportResource>,
}

impl ImportPlan {
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_import_resource_serializes_with_type_key() {
        let resource = ImportResource::new("aws:ec2/vpc:Vpc", "web-vpc", "vpc-123");
        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "aws:ec2/vpc:Vpc",
                "name": "web-vpc",
                "id": "vpc-123",
            })
        );
    }

    #[test]
    fn test_plan_round_trips() {
        let plan = ImportPlan {
            resources: vec![ImportResource::new(
                "aws:ec2/subnet:Subnet",
                "public-subnet-9",
                "subnet-9",
            )],
        };
        let serialized = serde_json::to_string(&plan).unwrap();
        let parsed: ImportPlan = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, plan);
    }
}
