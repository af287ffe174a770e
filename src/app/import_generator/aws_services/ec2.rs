//! EC2 describe calls and conversion of SDK response types into wire-shape
//! JSON records.
//!
//! The generator works over untyped records keyed the way the EC2 API itself
//! keys them (`VpcId`, `Tags`, `Associations`, ...), so each list method
//! converts the typed SDK structs field by field. The conversion is faithful:
//! no synthetic fields are added, which matters because the naming rules
//! distinguish a genuine `Name` attribute from a `Name` tag.

use anyhow::{Context, Result};
use aws_sdk_ec2 as ec2;
use serde_json::{Map, Value};

use super::super::registry::ResourceKind;

pub struct Ec2Service {
    client: ec2::Client,
}

impl Ec2Service {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: ec2::Client::new(config),
        }
    }

    /// Dispatch to the describe operation backing a resource kind.
    pub async fn list(&self, kind: ResourceKind) -> Result<Vec<Value>> {
        match kind {
            ResourceKind::Vpc => self.list_vpcs().await,
            ResourceKind::Subnet => self.list_subnets().await,
            ResourceKind::RouteTable => self.list_route_tables().await,
            ResourceKind::NatGateway => self.list_nat_gateways().await,
            ResourceKind::InternetGateway => self.list_internet_gateways().await,
            ResourceKind::Instance => self.list_instances().await,
        }
    }

    pub async fn list_vpcs(&self) -> Result<Vec<Value>> {
        let response = self
            .client
            .describe_vpcs()
            .send()
            .await
            .context("DescribeVpcs failed")?;

        let mut vpcs = Vec::new();
        if let Some(vpc_list) = response.vpcs {
            for vpc in &vpc_list {
                vpcs.push(Self::vpc_to_json(vpc));
            }
        }

        Ok(vpcs)
    }

    pub async fn list_subnets(&self) -> Result<Vec<Value>> {
        let response = self
            .client
            .describe_subnets()
            .send()
            .await
            .context("DescribeSubnets failed")?;

        let mut subnets = Vec::new();
        if let Some(subnet_list) = response.subnets {
            for subnet in &subnet_list {
                subnets.push(Self::subnet_to_json(subnet));
            }
        }

        Ok(subnets)
    }

    pub async fn list_route_tables(&self) -> Result<Vec<Value>> {
        let response = self
            .client
            .describe_route_tables()
            .send()
            .await
            .context("DescribeRouteTables failed")?;

        let mut route_tables = Vec::new();
        if let Some(route_table_list) = response.route_tables {
            for route_table in &route_table_list {
                route_tables.push(Self::route_table_to_json(route_table));
            }
        }

        Ok(route_tables)
    }

    pub async fn list_nat_gateways(&self) -> Result<Vec<Value>> {
        let response = self
            .client
            .describe_nat_gateways()
            .send()
            .await
            .context("DescribeNatGateways failed")?;

        let mut nat_gateways = Vec::new();
        if let Some(nat_gateway_list) = response.nat_gateways {
            for nat_gateway in &nat_gateway_list {
                nat_gateways.push(Self::nat_gateway_to_json(nat_gateway));
            }
        }

        Ok(nat_gateways)
    }

    pub async fn list_internet_gateways(&self) -> Result<Vec<Value>> {
        let response = self
            .client
            .describe_internet_gateways()
            .send()
            .await
            .context("DescribeInternetGateways failed")?;

        let mut igws = Vec::new();
        if let Some(igw_list) = response.internet_gateways {
            for igw in &igw_list {
                igws.push(Self::internet_gateway_to_json(igw));
            }
        }

        Ok(igws)
    }

    /// List EC2 instances, flattening every reservation on every page.
    pub async fn list_instances(&self) -> Result<Vec<Value>> {
        let mut instances = Vec::new();
        let mut paginator = self.client.describe_instances().into_paginator().send();

        while let Some(result) = paginator
            .try_next()
            .await
            .context("DescribeInstances failed")?
        {
            let reservations = result.reservations.unwrap_or_default();
            for reservation in &reservations {
                if let Some(reservation_instances) = &reservation.instances {
                    for instance in reservation_instances {
                        instances.push(Self::instance_to_json(instance));
                    }
                }
            }
        }

        Ok(instances)
    }

    fn vpc_to_json(vpc: &ec2::types::Vpc) -> Value {
        let mut json = Map::new();

        insert_string(&mut json, "VpcId", vpc.vpc_id.as_deref());
        insert_string(&mut json, "CidrBlock", vpc.cidr_block.as_deref());
        insert_string(&mut json, "State", vpc.state.as_ref().map(|s| s.as_str()));
        if let Some(is_default) = vpc.is_default {
            json.insert("IsDefault".to_string(), Value::Bool(is_default));
        }
        insert_tags(&mut json, vpc.tags.as_deref());

        Value::Object(json)
    }

    fn subnet_to_json(subnet: &ec2::types::Subnet) -> Value {
        let mut json = Map::new();

        insert_string(&mut json, "SubnetId", subnet.subnet_id.as_deref());
        insert_string(&mut json, "VpcId", subnet.vpc_id.as_deref());
        insert_string(&mut json, "CidrBlock", subnet.cidr_block.as_deref());
        insert_string(
            &mut json,
            "AvailabilityZone",
            subnet.availability_zone.as_deref(),
        );
        insert_string(
            &mut json,
            "State",
            subnet.state.as_ref().map(|s| s.as_str()),
        );
        if let Some(map_public_ip) = subnet.map_public_ip_on_launch {
            json.insert(
                "MapPublicIpOnLaunch".to_string(),
                Value::Bool(map_public_ip),
            );
        }
        insert_tags(&mut json, subnet.tags.as_deref());

        Value::Object(json)
    }

    fn route_table_to_json(route_table: &ec2::types::RouteTable) -> Value {
        let mut json = Map::new();

        insert_string(
            &mut json,
            "RouteTableId",
            route_table.route_table_id.as_deref(),
        );
        insert_string(&mut json, "VpcId", route_table.vpc_id.as_deref());

        if let Some(associations) = &route_table.associations {
            let associations_json: Vec<Value> = associations
                .iter()
                .map(|association| {
                    let mut assoc_json = Map::new();
                    insert_string(
                        &mut assoc_json,
                        "RouteTableAssociationId",
                        association.route_table_association_id.as_deref(),
                    );
                    insert_string(
                        &mut assoc_json,
                        "RouteTableId",
                        association.route_table_id.as_deref(),
                    );
                    insert_string(&mut assoc_json, "SubnetId", association.subnet_id.as_deref());
                    insert_string(
                        &mut assoc_json,
                        "GatewayId",
                        association.gateway_id.as_deref(),
                    );
                    if let Some(main) = association.main {
                        assoc_json.insert("Main".to_string(), Value::Bool(main));
                    }
                    Value::Object(assoc_json)
                })
                .collect();
            json.insert(
                "Associations".to_string(),
                Value::Array(associations_json),
            );
        }

        if let Some(routes) = &route_table.routes {
            let routes_json: Vec<Value> = routes
                .iter()
                .map(|route| {
                    let mut route_json = Map::new();
                    insert_string(
                        &mut route_json,
                        "DestinationCidrBlock",
                        route.destination_cidr_block.as_deref(),
                    );
                    insert_string(&mut route_json, "GatewayId", route.gateway_id.as_deref());
                    insert_string(
                        &mut route_json,
                        "NatGatewayId",
                        route.nat_gateway_id.as_deref(),
                    );
                    Value::Object(route_json)
                })
                .collect();
            json.insert("Routes".to_string(), Value::Array(routes_json));
        }

        insert_tags(&mut json, route_table.tags.as_deref());

        Value::Object(json)
    }

    fn nat_gateway_to_json(nat_gateway: &ec2::types::NatGateway) -> Value {
        let mut json = Map::new();

        insert_string(
            &mut json,
            "NatGatewayId",
            nat_gateway.nat_gateway_id.as_deref(),
        );
        insert_string(&mut json, "SubnetId", nat_gateway.subnet_id.as_deref());
        insert_string(&mut json, "VpcId", nat_gateway.vpc_id.as_deref());
        insert_string(
            &mut json,
            "State",
            nat_gateway.state.as_ref().map(|s| s.as_str()),
        );
        insert_tags(&mut json, nat_gateway.tags.as_deref());

        Value::Object(json)
    }

    fn internet_gateway_to_json(igw: &ec2::types::InternetGateway) -> Value {
        let mut json = Map::new();

        insert_string(
            &mut json,
            "InternetGatewayId",
            igw.internet_gateway_id.as_deref(),
        );

        if let Some(attachments) = &igw.attachments {
            let attachments_json: Vec<Value> = attachments
                .iter()
                .map(|attachment| {
                    let mut attach_json = Map::new();
                    insert_string(&mut attach_json, "VpcId", attachment.vpc_id.as_deref());
                    insert_string(
                        &mut attach_json,
                        "State",
                        attachment.state.as_ref().map(|s| s.as_str()),
                    );
                    Value::Object(attach_json)
                })
                .collect();
            json.insert(
                "Attachments".to_string(),
                Value::Array(attachments_json),
            );
        }

        insert_tags(&mut json, igw.tags.as_deref());

        Value::Object(json)
    }

    fn instance_to_json(instance: &ec2::types::Instance) -> Value {
        let mut json = Map::new();

        insert_string(&mut json, "InstanceId", instance.instance_id.as_deref());
        insert_string(
            &mut json,
            "InstanceType",
            instance.instance_type.as_ref().map(|t| t.as_str()),
        );
        insert_string(
            &mut json,
            "State",
            instance
                .state
                .as_ref()
                .and_then(|s| s.name.as_ref())
                .map(|n| n.as_str()),
        );
        insert_string(&mut json, "VpcId", instance.vpc_id.as_deref());
        insert_string(&mut json, "SubnetId", instance.subnet_id.as_deref());
        insert_string(
            &mut json,
            "PrivateIpAddress",
            instance.private_ip_address.as_deref(),
        );
        insert_string(
            &mut json,
            "PublicIpAddress",
            instance.public_ip_address.as_deref(),
        );
        insert_tags(&mut json, instance.tags.as_deref());

        Value::Object(json)
    }
}

fn insert_string(json: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        json.insert(key.to_string(), Value::String(value.to_string()));
    }
}

fn insert_tags(json: &mut Map<String, Value>, tags: Option<&[ec2::types::Tag]>) {
    let Some(tags) = tags else { return };
    if tags.is_empty() {
        return;
    }

    let tags_json: Vec<Value> = tags
        .iter()
        .map(|tag| {
            let mut tag_json = Map::new();
            insert_string(&mut tag_json, "Key", tag.key.as_deref());
            insert_string(&mut tag_json, "Value", tag.value.as_deref());
            Value::Object(tag_json)
        })
        .collect();
    json.insert("Tags".to_string(), Value::Array(tags_json));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn tag(key: &str, value: &str) -> ec2::types::Tag {
        ec2::types::Tag::builder().key(key).value(value).build()
    }

    #[test]
    fn test_vpc_to_json_keeps_wire_shape() {
        let vpc = ec2::types::Vpc::builder()
            .vpc_id("vpc-123")
            .cidr_block("10.0.0.0/16")
            .state(ec2::types::VpcState::Available)
            .tags(tag("Name", "web-vpc"))
            .build();

        let converted = Ec2Service::vpc_to_json(&vpc);
        assert_eq!(
            converted,
            json!({
                "VpcId": "vpc-123",
                "CidrBlock": "10.0.0.0/16",
                "State": "available",
                "Tags": [{"Key": "Name", "Value": "web-vpc"}],
            })
        );
    }

    #[test]
    fn test_conversion_adds_no_synthetic_name() {
        // The naming precedence relies on `Name` only appearing when the API
        // actually returned one.
        let subnet = ec2::types::Subnet::builder()
            .subnet_id("subnet-9")
            .tags(tag("Name", "public"))
            .build();

        let converted = Ec2Service::subnet_to_json(&subnet);
        assert!(converted.get("Name").is_none());
        assert_eq!(converted["SubnetId"], "subnet-9");
    }

    #[test]
    fn test_route_table_to_json_carries_associations() {
        let route_table = ec2::types::RouteTable::builder()
            .route_table_id("rtb-1")
            .vpc_id("vpc-1")
            .associations(
                ec2::types::RouteTableAssociation::builder()
                    .route_table_association_id("rtbassoc-1")
                    .route_table_id("rtb-1")
                    .subnet_id("subnet-5")
                    .build(),
            )
            .associations(
                ec2::types::RouteTableAssociation::builder()
                    .route_table_association_id("rtbassoc-2")
                    .route_table_id("rtb-1")
                    .main(true)
                    .build(),
            )
            .build();

        let converted = Ec2Service::route_table_to_json(&route_table);
        let associations = converted["Associations"].as_array().unwrap();
        assert_eq!(associations.len(), 2);
        assert_eq!(associations[0]["SubnetId"], "subnet-5");
        assert!(associations[1].get("SubnetId").is_none());
        assert_eq!(associations[1]["Main"], true);
    }

    #[test]
    fn test_instance_to_json_flattens_state() {
        let instance = ec2::types::Instance::builder()
            .instance_id("i-0abc")
            .state(
                ec2::types::InstanceState::builder()
                    .name(ec2::types::InstanceStateName::Running)
                    .build(),
            )
            .build();

        let converted = Ec2Service::instance_to_json(&instance);
        assert_eq!(converted["InstanceId"], "i-0abc");
        assert_eq!(converted["State"], "running");
    }
}
