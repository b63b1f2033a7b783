//! CloudFormation query abstraction
//!
//! Provides a trait for the two read operations the lookup layer needs,
//! so it can be backed by the real AWS SDK client in production and by
//! in-memory fakes in tests.

use crate::error::StackrefResult;
use async_trait::async_trait;

/// A stack description, reduced to what lookups need.
///
/// Immutable once fetched: the lookup layer never refreshes a stack it
/// has already seen within one process run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    /// Stack name, unique within the target account/region
    pub name: String,
    /// Outputs in the order CloudFormation returned them
    pub outputs: Vec<Output>,
}

/// A single stack output.
///
/// CloudFormation does not guarantee key uniqueness; lookups take the
/// first match in sequence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub key: String,
    pub value: String,
}

/// An account-wide export (`Fn::ImportValue` source).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub name: String,
    pub value: String,
}

/// One page of a paginated `ListExports` response.
#[derive(Debug, Clone, Default)]
pub struct ExportPage {
    pub exports: Vec<Export>,
    /// Continuation token; `None` on the final page
    pub next_token: Option<String>,
}

/// Abstract CloudFormation read interface
///
/// Implementations must not retry or cache; both concerns belong to the
/// caller. Each method maps to a single remote call.
#[async_trait]
pub trait CloudFormationApi: Send + Sync {
    /// Describe the stack with exactly the given name
    ///
    /// Returns `StackrefError::StackNotFound` when the service reports
    /// zero matching stacks, and a transport error for any failure to
    /// communicate with the service.
    async fn describe_stack(&self, name: &str) -> StackrefResult<Stack>;

    /// Fetch one page of exports, starting from `next_token`
    ///
    /// Pass `None` for the first page; follow `ExportPage::next_token`
    /// until it is `None`.
    async fn list_exports(&self, next_token: Option<&str>) -> StackrefResult<ExportPage>;
}
