//! # Fault records and the end-of-run report.
//!
//! Ordinary errors raised by node entry points and termination callbacks are
//! never propagated mid-run: the orchestrator captures each as a
//! [`FaultRecord`] and carries on, because later failures are often
//! independent and all of them are diagnostically useful. The ordered log is
//! returned as a [`RunReport`] once the run completes.
//!
//! A run with faults still completes from the orchestrator's point of view;
//! turning a non-clean report into a process exit code is the caller's
//! decision.

use std::fmt;
use std::time::SystemTime;

use crate::error::NodeError;

/// Which phase a fault was captured in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaultPhase {
    /// A node's execution entry point failed.
    Execute {
        /// The node that was firing.
        node: String,
        /// The owning component.
        component: String,
    },
    /// A deferred termination callback failed.
    Terminate {
        /// The label given at registration.
        callback: String,
    },
}

/// One captured error, with enough context to reproduce the diagnostic.
#[derive(Debug, Clone)]
pub struct FaultRecord {
    /// Where in the run the error was captured.
    pub phase: FaultPhase,
    /// The captured error.
    pub error: NodeError,
    /// Capture timestamp.
    pub at: SystemTime,
}

impl FaultRecord {
    pub(crate) fn execute(node: &str, component: &str, error: NodeError) -> Self {
        Self {
            phase: FaultPhase::Execute {
                node: node.to_string(),
                component: component.to_string(),
            },
            error,
            at: SystemTime::now(),
        }
    }

    pub(crate) fn terminate(callback: &str, error: NodeError) -> Self {
        Self {
            phase: FaultPhase::Terminate {
                callback: callback.to_string(),
            },
            error,
            at: SystemTime::now(),
        }
    }
}

impl fmt::Display for FaultRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.phase {
            FaultPhase::Execute { node, component } => {
                write!(
                    f,
                    "[execute] node={node:?} component={component:?}: {}",
                    self.error
                )
            }
            FaultPhase::Terminate { callback } => {
                write!(f, "[terminate] callback={callback:?}: {}", self.error)
            }
        }
    }
}

/// # Ordered log of everything that went wrong during a run.
///
/// Faults appear in capture order: execution faults first (schedule order),
/// then termination faults (reverse registration order). `Display` renders
/// the full human-readable report.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    faults: Vec<FaultRecord>,
}

impl RunReport {
    pub(crate) fn new(faults: Vec<FaultRecord>) -> Self {
        Self { faults }
    }

    /// Captured faults, in capture order.
    pub fn faults(&self) -> &[FaultRecord] {
        &self.faults
    }

    /// True if nothing failed.
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }

    /// Number of captured faults.
    pub fn len(&self) -> usize {
        self.faults.len()
    }

    /// True if no fault was captured. Same as [`RunReport::is_clean`];
    /// present for collection-like ergonomics.
    pub fn is_empty(&self) -> bool {
        self.faults.is_empty()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.faults.is_empty() {
            return write!(f, "run completed: no faults");
        }
        writeln!(f, "run completed with {} fault(s):", self.faults.len())?;
        for (i, fault) in self.faults.iter().enumerate() {
            writeln!(f, "  {}. {fault}", i + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_renders_every_fault_in_order() {
        let report = RunReport::new(vec![
            FaultRecord::execute("X", "xc", NodeError::fail("boom")),
            FaultRecord::terminate("save", NodeError::fail("disk full")),
        ]);
        assert!(!report.is_clean());
        assert_eq!(report.len(), 2);

        let text = report.to_string();
        let x = text.find("node=\"X\"").expect("execute fault rendered");
        let save = text.find("callback=\"save\"").expect("terminate fault rendered");
        assert!(x < save, "capture order preserved in {text}");
    }

    #[test]
    fn clean_report() {
        let report = RunReport::default();
        assert!(report.is_clean());
        assert_eq!(report.to_string(), "run completed: no faults");
    }
}
