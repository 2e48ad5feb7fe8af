//! Entry and exit hooks of state types.

/// Hooks run when a machine enters or leaves a state.
///
/// Both default to doing nothing, so a state without hooks declares so
/// with an empty impl:
///
/// ```rust
/// use stateline::machine::Lifecycle;
///
/// struct Idle;
///
/// impl Lifecycle for Idle {}
/// ```
pub trait Lifecycle {
    /// Runs after the state became active.
    fn on_entry(&mut self) {}

    /// Runs before the state is replaced or the machine is dropped.
    fn on_exit(&mut self) {}
}
