//! Lookup operations over CloudFormation stacks and exports
//!
//! `App` resolves output values by stack name + key and export values
//! by name, memoizing the raw remote results per process run so that
//! repeated lookups against the same stack or the export set do not
//! re-issue remote calls.

pub mod cache;

pub use cache::LookupCache;

use crate::cfn::{CloudFormationApi, Export, Stack};
use crate::error::{StackrefError, StackrefResult};
use std::sync::Arc;
use tracing::debug;

/// Application instance: a CloudFormation accessor plus an optional
/// lookup cache
///
/// Created once per CLI invocation or render session and shared by
/// reference (`Arc<App>`) across all lookups issued against it. With
/// `cache: None` every call fetches fresh; that is a supported mode,
/// not an error.
pub struct App {
    client: Box<dyn CloudFormationApi>,
    cache: Option<LookupCache>,
}

impl App {
    /// Create an application instance
    pub fn new(client: Box<dyn CloudFormationApi>, cache: Option<LookupCache>) -> Self {
        Self { client, cache }
    }

    /// Look up one output value in the named stack
    ///
    /// Keys match exactly (case-sensitive); the first matching output
    /// wins when the stack carries duplicate keys.
    pub async fn lookup_output(&self, stack_name: &str, output_key: &str) -> StackrefResult<String> {
        let stack = self.stack(stack_name).await?;
        stack
            .outputs
            .iter()
            .find(|o| o.key == output_key)
            .map(|o| o.value.clone())
            .ok_or_else(|| StackrefError::OutputKeyNotFound {
                stack: stack_name.to_string(),
                key: output_key.to_string(),
            })
    }

    /// List all output keys of the named stack, in service order,
    /// duplicates preserved
    pub async fn list_output_keys(&self, stack_name: &str) -> StackrefResult<Vec<String>> {
        let stack = self.stack(stack_name).await?;
        Ok(stack.outputs.iter().map(|o| o.key.clone()).collect())
    }

    /// Look up one exported value by name
    pub async fn lookup_export(&self, name: &str) -> StackrefResult<String> {
        let exports = self.exports().await?;
        exports
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.clone())
            .ok_or_else(|| StackrefError::ExportNotFound(name.to_string()))
    }

    /// List the names of all exports, in fetch order
    pub async fn list_export_names(&self) -> StackrefResult<Vec<String>> {
        let exports = self.exports().await?;
        Ok(exports.iter().map(|e| e.name.clone()).collect())
    }

    async fn stack(&self, name: &str) -> StackrefResult<Arc<Stack>> {
        let Some(cache) = &self.cache else {
            return Ok(Arc::new(self.client.describe_stack(name).await?));
        };

        if let Some(stack) = cache.stack(name) {
            debug!("stack {} served from cache", name);
            return Ok(stack);
        }

        // Failures are never stored; a later call retries the fetch.
        let stack = self.client.describe_stack(name).await?;
        Ok(cache.store_stack(name, stack))
    }

    async fn exports(&self) -> StackrefResult<Arc<[Export]>> {
        let Some(cache) = &self.cache else {
            return Ok(self.fetch_exports().await?.into());
        };

        if let Some(exports) = cache.exports() {
            debug!("exports served from cache");
            return Ok(exports);
        }

        let exports = self.fetch_exports().await?;
        Ok(cache.store_exports(exports))
    }

    /// Fetch the complete export set, following continuation tokens
    /// until exhausted. Any page failure fails the whole fetch and the
    /// pages accumulated so far are discarded.
    async fn fetch_exports(&self) -> StackrefResult<Vec<Export>> {
        let mut exports = Vec::new();
        let mut next_token: Option<String> = None;
        loop {
            let page = self.client.list_exports(next_token.as_deref()).await?;
            exports.extend(page.exports);
            match page.next_token {
                Some(token) => next_token = Some(token),
                None => break,
            }
        }
        debug!("fetched {} exports", exports.len());
        Ok(exports)
    }
}
