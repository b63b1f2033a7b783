//! Error types for stackref
//!
//! All modules use `StackrefResult<T>` as their return type.

use thiserror::Error;

/// Boxed source for errors raised while talking to CloudFormation.
pub type TransportSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for stackref operations
pub type StackrefResult<T> = Result<T, StackrefError>;

/// All errors that can occur in stackref
#[derive(Error, Debug)]
pub enum StackrefError {
    // Lookup errors: the remote data was fetched but the requested
    // name/key is absent. Messages always carry the identifier.
    #[error("stack {0} is not found")]
    StackNotFound(String),

    #[error("outputKey {key} is not found in stack {stack}")]
    OutputKeyNotFound { stack: String, key: String },

    #[error("{0} is not found in exports")]
    ExportNotFound(String),

    // Transport errors: communication with CloudFormation failed.
    // The underlying cause is preserved as the source.
    #[error("failed to describe stack {stack}")]
    DescribeStacks {
        stack: String,
        #[source]
        source: TransportSource,
    },

    #[error("failed to list exports")]
    ListExports {
        #[source]
        source: TransportSource,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StackrefError {
    /// Create a transport error for a failed DescribeStacks call
    pub fn describe_stacks(stack: impl Into<String>, source: impl Into<TransportSource>) -> Self {
        Self::DescribeStacks {
            stack: stack.into(),
            source: source.into(),
        }
    }

    /// Create a transport error for a failed ListExports call
    pub fn list_exports(source: impl Into<TransportSource>) -> Self {
        Self::ListExports {
            source: source.into(),
        }
    }

    /// True for errors where the remote call succeeded but the
    /// requested stack, key, or export name does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StackNotFound(_) | Self::OutputKeyNotFound { .. } | Self::ExportNotFound(_)
        )
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::DescribeStacks { .. } | Self::ListExports { .. } => {
                Some("Check AWS credentials, AWS_REGION and AWS_PROFILE")
            }
            Self::StackNotFound(_) => Some("Stack names are region-scoped; check --region"),
            _ => None,
        }
    }
}
