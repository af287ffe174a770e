//! Resource-kind registry.
//!
//! The supported EC2-family resource kinds and everything the generator needs
//! to know about each one: which describe operation backs it, which field of
//! the raw record carries the resource id, and the Pulumi type token. Keeping
//! these as pinned values (rather than deriving them from the type name at
//! runtime) makes the naming-convention assumption explicit and testable; the
//! unit tests assert every pinned value against the case-conversion helpers.

/// Pulumi type token for route table associations, which are generated from
/// the route table payload rather than their own describe call.
pub const ROUTE_TABLE_ASSOCIATION_TOKEN: &str =
    "aws:ec2/routeTableAssociation:RouteTableAssociation";

/// EC2-family resource kinds this tool imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Vpc,
    Subnet,
    RouteTable,
    NatGateway,
    InternetGateway,
    Instance,
}

impl ResourceKind {
    /// All kinds, in plan output order.
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Vpc,
        ResourceKind::Subnet,
        ResourceKind::RouteTable,
        ResourceKind::NatGateway,
        ResourceKind::InternetGateway,
        ResourceKind::Instance,
    ];

    /// snake_case type name, as a configuration list would spell it.
    pub fn snake_name(self) -> &'static str {
        match self {
            ResourceKind::Vpc => "vpc",
            ResourceKind::Subnet => "subnet",
            ResourceKind::RouteTable => "route_table",
            ResourceKind::NatGateway => "nat_gateway",
            ResourceKind::InternetGateway => "internet_gateway",
            ResourceKind::Instance => "instance",
        }
    }

    /// Field of the raw record that carries the resource id.
    pub fn id_field(self) -> &'static str {
        match self {
            ResourceKind::Vpc => "VpcId",
            ResourceKind::Subnet => "SubnetId",
            ResourceKind::RouteTable => "RouteTableId",
            ResourceKind::NatGateway => "NatGatewayId",
            ResourceKind::InternetGateway => "InternetGatewayId",
            ResourceKind::Instance => "InstanceId",
        }
    }

    /// Pulumi type token for import descriptors of this kind.
    pub fn type_token(self) -> &'static str {
        match self {
            ResourceKind::Vpc => "aws:ec2/vpc:Vpc",
            ResourceKind::Subnet => "aws:ec2/subnet:Subnet",
            ResourceKind::RouteTable => "aws:ec2/routeTable:RouteTable",
            ResourceKind::NatGateway => "aws:ec2/natGateway:NatGateway",
            ResourceKind::InternetGateway => "aws:ec2/internetGateway:InternetGateway",
            ResourceKind::Instance => "aws:ec2/instance:Instance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::import_generator::naming;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_type_tokens_follow_case_convention() {
        for kind in ResourceKind::ALL {
            assert_eq!(
                kind.type_token(),
                naming::pulumi_type_token(kind.snake_name()),
                "type token for {:?} diverges from the case convention",
                kind
            );
        }
    }

    #[test]
    fn test_id_fields_follow_case_convention() {
        for kind in ResourceKind::ALL {
            assert_eq!(
                kind.id_field(),
                format!("{}Id", naming::pascal_case(kind.snake_name())),
                "id field for {:?} diverges from the case convention",
                kind
            );
        }
    }

    #[test]
    fn test_all_covers_every_kind_once() {
        for kind in ResourceKind::ALL {
            assert_eq!(
                ResourceKind::ALL.iter().filter(|k| **k == kind).count(),
                1
            );
        }
    }
}
