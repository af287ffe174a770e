//! Core application modules.
//!
//! - [`import_generator`] - EC2 resource enumeration and Pulumi import plan
//!   generation

pub mod import_generator;

pub use import_generator::ImportGenerator;
