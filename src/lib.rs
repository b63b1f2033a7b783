//! stackref - CloudFormation output/export lookup
//!
//! Resolves stack output values and account-wide exported values from
//! CloudFormation, memoizing the raw remote results for the lifetime
//! of one process run. Besides the CLI, the lookups are exposed as
//! minijinja template functions and QuickJS native functions for
//! template-rendering and config-generation pipelines.

pub mod cfn;
pub mod cli;
pub mod error;
pub mod lookup;
pub mod script;
pub mod template;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{StackrefError, StackrefResult};
pub use lookup::{App, LookupCache};
