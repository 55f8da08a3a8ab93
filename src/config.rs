//! # Orchestrator configuration.
//!
//! Provides [`Config`], the per-orchestrator settings, and the [`stages`]
//! module with the built-in milestone names.
//!
//! The milestone chain is the backbone of every run: it is seeded into the
//! execution graph as one ordering sequence before Discovery, so every
//! component-declared sequence that touches a milestone is transitively
//! ordered against the whole chain. The exact names are configuration, not
//! scheduler logic — replace [`Config::stages`] to rename or reshape the
//! backbone (an empty chain is valid and seeds nothing).

/// Built-in milestone node names, in backbone order.
///
/// Components reference these in their declared sequences to anchor their own
/// nodes against the global lifecycle, e.g.
/// `[stages::RESET, "RESET_SETTINGS", stages::ARGPARSE]`.
pub mod stages {
    /// Drop references from the previous run; nothing is allocated yet.
    pub const CLEAR: &str = "CLEAR";
    /// Construct fresh state for this run.
    pub const RESET: &str = "RESET";
    /// Command-line argument collection point.
    pub const ARGPARSE: &str = "ARGPARSE";
    /// Establish connections to external resources.
    pub const CONNECT: &str = "CONNECT";
    /// Bring subsystems to operational state.
    pub const ACTIVATE: &str = "ACTIVATE";
    /// The application's main moment; a runner component typically owns this.
    pub const UP: &str = "UP";
    /// Wind down ongoing activity.
    pub const COOLDOWN: &str = "COOLDOWN";
    /// Undo ACTIVATE.
    pub const DEACTIVATE: &str = "DEACTIVATE";
    /// Undo CONNECT.
    pub const DISCONNECT: &str = "DISCONNECT";
    /// Final milestone; last chance to touch anything.
    pub const SHUTDOWN: &str = "SHUTDOWN";

    /// The default backbone chain, in order.
    pub const CHAIN: [&str; 10] = [
        CLEAR, RESET, ARGPARSE, CONNECT, ACTIVATE, UP, COOLDOWN, DEACTIVATE, DISCONNECT, SHUTDOWN,
    ];
}

/// Global configuration for the orchestrator.
///
/// ## Field semantics
/// - `stages`: milestone chain seeded as one sequence at the start of every
///   run. Empty = no backbone (components provide all ordering themselves).
#[derive(Clone, Debug)]
pub struct Config {
    /// Built-in milestone chain, seeded in order.
    pub stages: Vec<String>,
}

impl Config {
    /// Returns a configuration with a custom milestone chain.
    pub fn with_stages<I, S>(stages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stages: stages.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for Config {
    /// Default configuration: the full built-in chain
    /// `CLEAR → RESET → ARGPARSE → CONNECT → ACTIVATE → UP → COOLDOWN →
    /// DEACTIVATE → DISCONNECT → SHUTDOWN`.
    fn default() -> Self {
        Self::with_stages(stages::CHAIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chain_is_the_full_backbone() {
        let cfg = Config::default();
        assert_eq!(cfg.stages.len(), 10);
        assert_eq!(cfg.stages.first().map(String::as_str), Some(stages::CLEAR));
        assert_eq!(cfg.stages.last().map(String::as_str), Some(stages::SHUTDOWN));
    }

    #[test]
    fn custom_chain_replaces_the_backbone() {
        let cfg = Config::with_stages(["BOOT", "RUN", "HALT"]);
        assert_eq!(cfg.stages, ["BOOT", "RUN", "HALT"]);
    }
}
