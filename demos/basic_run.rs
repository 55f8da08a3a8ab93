//! # Demo: basic_run
//!
//! Minimal run: one component owning one extra node, anchored between two
//! built-in milestones, with the LogWriter subscriber printing every event.
//!
//! ## Flow
//! ```text
//! ComponentSpec ──► Orchestrator::run()
//!     ├─► seed CLEAR → … → SHUTDOWN backbone
//!     ├─► Discovery (1 component)
//!     ├─► Kahn schedule
//!     ├─► dispatch SAY_HELLO between ACTIVATE and UP
//!     └─► RunReport (clean)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic_run --features logging
//! ```

use std::sync::Arc;

use stagevisor::{
    stages, ComponentFn, ComponentRef, ComponentSpec, Config, ContextRef, ExecSpec, LogWriter,
    NodeError, Orchestrator, Subscribe,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Default configuration: the full built-in milestone chain.
    let cfg = Config::default();

    // 2. A component owning one node, ordered between ACTIVATE and UP.
    let hello: ComponentRef = ComponentFn::arc(
        "hello",
        ComponentSpec::new()
            .executes(["SAY_HELLO"])
            .requires([stages::ACTIVATE, "SAY_HELLO", stages::UP]),
        |node: String, _ctx: ContextRef| async move {
            println!("[hello] performing {node}");
            Ok::<_, NodeError>(())
        },
    );

    // 3. Print every run event.
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter::new())];

    // 4. Assemble and run.
    let orchestrator = Orchestrator::builder(cfg)
        .with_components(vec![hello])
        .with_subscribers(subs)
        .build();

    let report = orchestrator.run(ExecSpec::new()).await?;
    println!("{report}");
    Ok(())
}
