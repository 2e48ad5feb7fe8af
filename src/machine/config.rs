//! Machine configuration.

use serde::{Deserialize, Serialize};

/// Strategy for handling kind coverage violations at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationStrategy {
    /// Refuse to build the machine
    #[default]
    Abort,

    /// Build the machine but log a warning per violation
    IgnoreAndLog,
}

/// Options applied when a [`StateMachine`](super::StateMachine) is built.
///
/// Deserializable so a host application can load it with its own config
/// files; missing fields take their defaults.
///
/// ```rust
/// use stateline::machine::{MachineConfig, ViolationStrategy};
///
/// let config = MachineConfig::new().on_violation(ViolationStrategy::IgnoreAndLog);
/// assert_eq!(config.on_violation, ViolationStrategy::IgnoreAndLog);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub on_violation: ViolationStrategy,
}

impl MachineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coverage violation strategy.
    pub fn on_violation(mut self, strategy: ViolationStrategy) -> Self {
        self.on_violation = strategy;
        self
    }
}
