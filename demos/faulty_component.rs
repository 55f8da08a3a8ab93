//! # Demo: faulty_component
//!
//! Shows the error-aggregation contract: a node that fails does not stop the
//! run, a termination callback that fails does not stop the unwinding, and
//! everything captured is reported together at the very end.
//!
//! ## Run
//! ```bash
//! cargo run --example faulty_component
//! ```

use std::process::ExitCode;

use stagevisor::{
    stages, ComponentFn, ComponentRef, ComponentSpec, Config, ContextRef, ExecSpec, NodeError,
    Orchestrator,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let flaky: ComponentRef = ComponentFn::arc(
        "flaky",
        ComponentSpec::new()
            .executes(["FLAKY_CONNECT"])
            .requires([stages::CONNECT, "FLAKY_CONNECT", stages::ACTIVATE]),
        |_node: String, ctx: ContextRef| async move {
            ctx.defer("flaky-disconnect", || async {
                Err(NodeError::fail("disconnect timed out"))
            });
            Err::<(), NodeError>(NodeError::fail("connection refused"))
        },
    );

    // Runs even though flaky failed earlier in the schedule.
    let steady: ComponentRef = ComponentFn::arc(
        "steady",
        ComponentSpec::new().executes([stages::UP]),
        |_node: String, _ctx: ContextRef| async move {
            println!("[steady] still running");
            Ok::<_, NodeError>(())
        },
    );

    let orchestrator = Orchestrator::builder(Config::default())
        .with_components(vec![flaky, steady])
        .build();

    let report = orchestrator.run(ExecSpec::new()).await?;
    // Both faults, in capture order: the node failure, then the callback one.
    print!("{report}");

    // The orchestrator never turns faults into a process exit code; that
    // decision belongs here.
    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
