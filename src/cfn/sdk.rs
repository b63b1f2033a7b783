//! AWS SDK backed implementation of [`CloudFormationApi`]

use crate::cfn::api::{CloudFormationApi, Export, ExportPage, Output, Stack};
use crate::error::{StackrefError, StackrefResult};
use async_trait::async_trait;
use aws_sdk_cloudformation::Client;
use tracing::debug;

/// CloudFormation accessor backed by `aws_sdk_cloudformation`
///
/// A thin translation layer: every call maps to one SDK call, SDK
/// failures become transport errors, and the all-optional SDK shapes
/// are flattened into the crate's domain types (absent strings become
/// empty, matching `aws.ToString` semantics).
pub struct SdkCloudFormation {
    client: Client,
}

impl SdkCloudFormation {
    /// Wrap an already-configured SDK client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from a resolved AWS configuration
    pub fn from_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(config))
    }
}

#[async_trait]
impl CloudFormationApi for SdkCloudFormation {
    async fn describe_stack(&self, name: &str) -> StackrefResult<Stack> {
        debug!("DescribeStacks {}", name);
        let out = self
            .client
            .describe_stacks()
            .stack_name(name)
            .send()
            .await
            .map_err(|e| StackrefError::describe_stacks(name, e))?;

        let stack = out
            .stacks()
            .first()
            .ok_or_else(|| StackrefError::StackNotFound(name.to_string()))?;

        Ok(Stack {
            name: stack.stack_name().unwrap_or_default().to_string(),
            outputs: stack
                .outputs()
                .iter()
                .map(|o| Output {
                    key: o.output_key().unwrap_or_default().to_string(),
                    value: o.output_value().unwrap_or_default().to_string(),
                })
                .collect(),
        })
    }

    async fn list_exports(&self, next_token: Option<&str>) -> StackrefResult<ExportPage> {
        debug!("ListExports token={:?}", next_token);
        let out = self
            .client
            .list_exports()
            .set_next_token(next_token.map(str::to_string))
            .send()
            .await
            .map_err(StackrefError::list_exports)?;

        Ok(ExportPage {
            exports: out
                .exports()
                .iter()
                .map(|e| Export {
                    name: e.name().unwrap_or_default().to_string(),
                    value: e.value().unwrap_or_default().to_string(),
                })
                .collect(),
            next_token: out.next_token().map(str::to_string),
        })
    }
}
