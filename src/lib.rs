//! awsimport - Pulumi bulk-import plan generator for EC2 networking resources
//!
//! Enumerates the EC2-family resources of one AWS account and region (VPCs,
//! subnets, route tables, NAT gateways, internet gateways, route table
//! associations, EC2 instances) and emits a `pulumi import --file` plan on
//! stdout, so an existing environment can be adopted into Pulumi without
//! recreating anything.
//!
//! The interesting part is the name derivation: Pulumi needs a logical name
//! per resource, AWS mostly doesn't have one, so names come from a `Name`
//! attribute when present, a `Name` tag (suffixed with the resource id for
//! uniqueness) otherwise, and a synthetic `import-<id>` as the last resort.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
