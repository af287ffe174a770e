pub mod ec2;

pub use ec2::Ec2Service;
