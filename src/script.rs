//! QuickJS native-function registry
//!
//! Exposes `cfn_output(stackName, outputKey)` and `cfn_export(name)` as
//! async globals in a QuickJS runtime, for config-generation scripts.
//! Both parameters are strictly string-typed: a non-string argument is
//! rejected with a `TypeError` before the lookup layer runs. A failed
//! lookup rejects the returned promise.

use crate::lookup::App;
use rquickjs::{async_with, function::Async, AsyncContext, AsyncRuntime, Function};
use std::sync::Arc;
use tracing::debug;

/// Create a QuickJS runtime with the lookup functions installed
///
/// Both functions delegate to the same `App`, so one runtime shares one
/// cache across all script evaluations.
pub async fn create_runtime(app: Arc<App>) -> rquickjs::Result<(AsyncRuntime, AsyncContext)> {
    let runtime = AsyncRuntime::new()?;
    let context = AsyncContext::full(&runtime).await?;
    register_globals(&context, app).await?;
    Ok((runtime, context))
}

/// Install `cfn_output` and `cfn_export` as globals on an existing
/// context
pub async fn register_globals(context: &AsyncContext, app: Arc<App>) -> rquickjs::Result<()> {
    async_with!(context => |ctx| {
        let output_app = Arc::clone(&app);
        ctx.globals().set(
            "cfn_output",
            Function::new(
                ctx.clone(),
                Async(move |stack_name: String, output_key: String| {
                    let app = Arc::clone(&output_app);
                    async move {
                        match app.lookup_output(&stack_name, &output_key).await {
                            Ok(value) => Ok::<String, rquickjs::Error>(value),
                            Err(e) => {
                                debug!("cfn_output({}, {}) failed: {}", stack_name, output_key, e);
                                Err(rquickjs::Error::Exception)
                            }
                        }
                    }
                }),
            ),
        )?;

        ctx.globals().set(
            "cfn_export",
            Function::new(
                ctx.clone(),
                Async(move |name: String| {
                    let app = Arc::clone(&app);
                    async move {
                        match app.lookup_export(&name).await {
                            Ok(value) => Ok::<String, rquickjs::Error>(value),
                            Err(e) => {
                                debug!("cfn_export({}) failed: {}", name, e);
                                Err(rquickjs::Error::Exception)
                            }
                        }
                    }
                }),
            ),
        )?;

        Ok::<_, rquickjs::Error>(())
    })
    .await
}
