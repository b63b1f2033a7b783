//! CloudFormation access layer
//!
//! Defines the query capability the lookup layer depends on and the
//! production implementation backed by the AWS SDK.

pub mod api;
pub mod sdk;

pub use api::{CloudFormationApi, Export, ExportPage, Output, Stack};
pub use sdk::SdkCloudFormation;
