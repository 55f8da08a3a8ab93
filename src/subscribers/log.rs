//! # LogWriter — simple event printer.
//!
//! A minimal subscriber that prints incoming [`Event`]s to stdout.
//! Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [run-starting]
//! [discovered] components=3
//! [scheduled] nodes=14
//! [node-starting] node="READ_SETTINGS" component="settings"
//! [node-failed] node="READ_SETTINGS" component="settings" err="file not found"
//! [node-skipped] node="CONNECT"
//! [terminating] callbacks=1
//! [callback-failed] callback="save-settings" err="disk full"
//! [run-completed] faults=2
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Event writer subscriber.
///
/// Enabled via the `logging` feature. Prints human-readable event
/// descriptions to stdout for debugging and demonstration purposes. Not
/// intended for production use — implement a custom [`Subscribe`] for
/// structured logging or metrics collection.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::RunStarting => {
                println!("[run-starting]");
            }
            EventKind::DiscoveryCompleted => {
                println!("[discovered] components={:?}", e.count);
            }
            EventKind::ScheduleResolved => {
                println!("[scheduled] nodes={:?}", e.count);
            }
            EventKind::NodeStarting => {
                println!(
                    "[node-starting] node={:?} component={:?}",
                    e.node, e.component
                );
            }
            EventKind::NodeCompleted => {
                println!(
                    "[node-completed] node={:?} component={:?}",
                    e.node, e.component
                );
            }
            EventKind::NodeSkipped => {
                println!("[node-skipped] node={:?}", e.node);
            }
            EventKind::NodeFailed => {
                println!(
                    "[node-failed] node={:?} component={:?} err={:?}",
                    e.node, e.component, e.error
                );
            }
            EventKind::TerminationStarting => {
                println!("[terminating] callbacks={:?}", e.count);
            }
            EventKind::CallbackFailed => {
                println!("[callback-failed] callback={:?} err={:?}", e.callback, e.error);
            }
            EventKind::ExitRequested => {
                println!(
                    "[exit-requested] node={:?} component={:?} err={:?}",
                    e.node, e.component, e.error
                );
            }
            EventKind::RunCompleted => {
                println!("[run-completed] faults={:?}", e.count);
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
