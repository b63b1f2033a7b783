//! Template function registry
//!
//! Registers `cfn_output(stack_name, output_key)` and
//! `cfn_export(name)` on a minijinja environment so templates can splat
//! live stack values into rendered text. A failed lookup becomes a
//! `minijinja::Error`, which aborts the render and propagates out of
//! arbitrarily nested includes.

use crate::lookup::App;
use minijinja::{Environment, Error, ErrorKind};
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Register the lookup functions on a template environment
///
/// Template functions are synchronous, so lookups are driven to
/// completion on the given runtime handle. All functions registered
/// from one call share the `App` and therefore its cache.
pub fn register_functions(env: &mut Environment<'_>, app: Arc<App>, handle: Handle) {
    let output_app = Arc::clone(&app);
    let output_handle = handle.clone();
    env.add_function(
        "cfn_output",
        move |stack_name: String, output_key: String| -> Result<String, Error> {
            wait(&output_handle, output_app.lookup_output(&stack_name, &output_key)).map_err(
                |e| {
                    Error::new(
                        ErrorKind::InvalidOperation,
                        format!("failed to lookup {output_key} in stack {stack_name}"),
                    )
                    .with_source(e)
                },
            )
        },
    );

    env.add_function("cfn_export", move |name: String| -> Result<String, Error> {
        wait(&handle, app.lookup_export(&name)).map_err(|e| {
            Error::new(
                ErrorKind::InvalidOperation,
                format!("failed to lookup {name} in exports"),
            )
            .with_source(e)
        })
    });
}

/// Block the rendering thread on an async lookup.
///
/// `block_in_place` is required when the render itself runs on a
/// runtime worker thread; from a plain thread, blocking directly on the
/// handle suffices.
fn wait<F: Future>(handle: &Handle, fut: F) -> F::Output {
    if Handle::try_current().is_ok() {
        tokio::task::block_in_place(|| handle.block_on(fut))
    } else {
        handle.block_on(fut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{App, LookupCache};
    use crate::testing::StaticCfn;
    use minijinja::context;
    use std::sync::atomic::Ordering;

    fn env_with_sample(client: StaticCfn) -> Environment<'static> {
        let app = Arc::new(App::new(Box::new(client), Some(LookupCache::new())));
        let mut env = Environment::new();
        register_functions(&mut env, app, Handle::current());
        env
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn renders_output_and_export() {
        let env = env_with_sample(StaticCfn::sample());
        let rendered = env
            .render_str(
                r#"{{ cfn_output("test-stack", "test-key") }}/{{ cfn_export("test-export") }}"#,
                context! {},
            )
            .unwrap();
        assert_eq!(rendered, "test-value/test-export-value");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn renders_template_read_from_disk() {
        let env = env_with_sample(StaticCfn::sample());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.tmpl");
        std::fs::write(
            &path,
            "endpoint = {{ cfn_output(\"test-stack\", \"test-key\") }}\n",
        )
        .unwrap();

        let source = std::fs::read_to_string(&path).unwrap();
        let rendered = env.render_str(&source, context! {}).unwrap();
        assert_eq!(rendered, "endpoint = test-value\n");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn failed_lookup_aborts_render() {
        let env = env_with_sample(StaticCfn::sample());
        let err = env
            .render_str(r#"{{ cfn_output("test-stack", "missing-key") }}"#, context! {})
            .unwrap_err();
        assert!(err.to_string().contains("missing-key"), "got: {err}");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn failure_unwinds_nested_renders() {
        let mut env = env_with_sample(StaticCfn::sample());
        env.add_template("inner", r#"{{ cfn_export("absent") }}"#)
            .unwrap();
        env.add_template("outer", r#"before {% include "inner" %} after"#)
            .unwrap();
        let err = env.get_template("outer").unwrap().render(context! {}).unwrap_err();

        // the lookup failure surfaces somewhere in the chain
        let mut cause: Option<&dyn std::error::Error> = Some(&err);
        let mut found = false;
        while let Some(e) = cause {
            if e.to_string().contains("absent") {
                found = true;
                break;
            }
            cause = e.source();
        }
        assert!(found, "got: {err:#}");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn renders_share_one_cache() {
        let client = StaticCfn::sample();
        let describes = Arc::clone(&client.describe_calls);
        let env = env_with_sample(client);

        let source = r#"{{ cfn_output("test-stack", "test-key") }}"#;
        env.render_str(source, context! {}).unwrap();
        env.render_str(source, context! {}).unwrap();

        assert_eq!(describes.load(Ordering::SeqCst), 1);
    }
}
