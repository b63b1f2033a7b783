//! Test doubles shared by the adapter tests

use crate::cfn::{CloudFormationApi, Export, ExportPage, Output, Stack};
use crate::error::{StackrefError, StackrefResult};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Fixed-data CloudFormation with call counters
#[derive(Default)]
pub(crate) struct StaticCfn {
    pub stacks: Vec<Stack>,
    pub exports: Vec<Export>,
    pub describe_calls: Arc<AtomicUsize>,
    pub list_calls: Arc<AtomicUsize>,
}

impl StaticCfn {
    /// One stack (`test-stack` with `test-key` = `test-value`) and one
    /// export (`test-export` = `test-export-value`)
    pub fn sample() -> Self {
        Self {
            stacks: vec![Stack {
                name: "test-stack".to_string(),
                outputs: vec![Output {
                    key: "test-key".to_string(),
                    value: "test-value".to_string(),
                }],
            }],
            exports: vec![Export {
                name: "test-export".to_string(),
                value: "test-export-value".to_string(),
            }],
            ..Self::default()
        }
    }
}

#[async_trait]
impl CloudFormationApi for StaticCfn {
    async fn describe_stack(&self, name: &str) -> StackrefResult<Stack> {
        self.describe_calls.fetch_add(1, Ordering::SeqCst);
        self.stacks
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| StackrefError::StackNotFound(name.to_string()))
    }

    async fn list_exports(&self, _next_token: Option<&str>) -> StackrefResult<ExportPage> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(ExportPage {
            exports: self.exports.clone(),
            next_token: None,
        })
    }
}
