//! # Demo: interfaces
//!
//! A provider component implements a named interface (a settings store); a
//! consumer looks it up by name during its own node, downcasts to the
//! concrete type, and registers a deferred callback that flushes the store on
//! the way out — the original motivation for the termination stack.
//!
//! ## Run
//! ```bash
//! cargo run --example interfaces
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use stagevisor::{
    stages, Component, ComponentFn, ComponentRef, ComponentSpec, Config, ContextRef, ExecSpec,
    NodeError, Orchestrator,
};

/// In-memory settings store, exposed to other components as interface
/// `"SETTINGS"`.
struct SettingsStore {
    entries: Mutex<Vec<(String, String)>>,
}

impl SettingsStore {
    fn put(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string()));
    }

    fn flush(&self) {
        for (key, value) in self.entries.lock().unwrap().drain(..) {
            println!("[settings] flushed {key}={value}");
        }
    }
}

#[async_trait]
impl Component for SettingsStore {
    fn name(&self) -> &str {
        "settings-store"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn spec(&self) -> ComponentSpec {
        ComponentSpec::new()
            .executes(["RESET_SETTINGS"])
            .requires([stages::RESET, "RESET_SETTINGS", stages::CONNECT])
            .implements("SETTINGS")
    }

    async fn perform(&self, node: &str, ctx: ContextRef) -> Result<(), NodeError> {
        println!("[settings] performing {node}");
        self.entries.lock().unwrap().clear();

        // Flush at shutdown, whatever else happens in between.
        let store = ctx.require_interface("SETTINGS")?;
        ctx.defer("flush-settings", move || async move {
            let store = store
                .as_any()
                .downcast_ref::<SettingsStore>()
                .ok_or_else(|| NodeError::fail("SETTINGS is not a SettingsStore"))?;
            store.flush();
            Ok(())
        });
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store: ComponentRef = Arc::new(SettingsStore {
        entries: Mutex::new(Vec::new()),
    });

    // The consumer only knows the interface name, not the concrete type link.
    let writer: ComponentRef = ComponentFn::arc(
        "writer",
        ComponentSpec::new().executes([stages::UP]),
        |_node: String, ctx: ContextRef| async move {
            let store = ctx.require_interface("SETTINGS")?;
            let store = store
                .as_any()
                .downcast_ref::<SettingsStore>()
                .ok_or_else(|| NodeError::fail("SETTINGS is not a SettingsStore"))?;
            store.put("theme", "dark");
            store.put("volume", "11");
            println!("[writer] wrote two settings");
            Ok::<_, NodeError>(())
        },
    );

    let orchestrator = Orchestrator::builder(Config::default())
        .with_components(vec![store, writer])
        .build();

    let report = orchestrator.run(ExecSpec::new()).await?;
    println!("{report}");
    Ok(())
}
