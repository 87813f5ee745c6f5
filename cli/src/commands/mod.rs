//! Command implementations

pub mod add_hosts;
pub mod available_hosts;
pub mod create_cloud;
pub mod register;
pub mod terminate_cloud;
pub mod wait_for_cloud;

pub use add_hosts::AddHostsArgs;
pub use create_cloud::CreateCloudArgs;
pub use terminate_cloud::TerminateCloudArgs;
pub use wait_for_cloud::WaitForCloudArgs;
