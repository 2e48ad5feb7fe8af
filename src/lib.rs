//! Stateline: finite state machines over closed sets of state and event types
//!
//! The states and events of a machine are plain Rust types grouped into
//! closed sets by the [`variant!`] macro. Transitions name their source,
//! event and destination by type, so a kind outside the sets, or a guard
//! or action with an unsupported signature, does not compile.
//!
//! # Core Concepts
//!
//! - **Containers**: kind lists and the maps built over them
//! - **Variant**: tagged storage for exactly one member of a set
//! - **Transitions**: guarded actions grouped into rows and tables
//! - **Machine**: the engine dispatching events through a table
//!
//! # Example
//!
//! ```rust
//! use stateline::prelude::*;
//! use stateline::{transition_table, variant};
//!
//! pub struct Locked;
//! pub struct Unlocked;
//! pub struct Coin(pub u32);
//! pub struct Push;
//!
//! impl Lifecycle for Locked {}
//! impl Lifecycle for Unlocked {}
//!
//! variant! { pub enum Turnstile: dyn Lifecycle { Locked, Unlocked } }
//! variant! { pub enum Input { Coin, Push } }
//!
//! fn enough(coin: &Coin) -> bool {
//!     coin.0 >= 25
//! }
//!
//! let table = transition_table! {
//!     Turnstile, Input;
//!     Locked, Coin, enough, (|| Unlocked), Unlocked;
//!     Locked, Push, _, _, _;
//!     Unlocked, Push, _, (|| Locked), Locked;
//! }
//! .unwrap();
//!
//! let mut machine = StateMachine::new(table, Locked).unwrap();
//!
//! assert_eq!(machine.process_event(Push).unwrap(), ProcessStatus::EventIgnored);
//! assert_eq!(machine.process_event(Coin(10)).unwrap(), ProcessStatus::GuardFailure);
//! assert_eq!(machine.process_event(Coin(25)).unwrap(), ProcessStatus::Completed);
//! assert_eq!(machine.process_event(Coin(25)).unwrap(), ProcessStatus::UndefinedTransition);
//! assert!(machine.is_state::<Unlocked>());
//! ```

pub mod containers;
pub mod machine;
pub mod transition;
pub mod variant;

/// Commonly used types.
pub mod prelude {
    pub use crate::containers::{Kind, KindList};
    pub use crate::machine::{
        Lifecycle, MachineConfig, MachineError, ProcessStatus, StateMachine, ViolationStrategy,
    };
    pub use crate::transition::{
        event, make_transition, state, BuildError, Placeholder, Table, TableBuilder, Transition,
    };
    pub use crate::variant::{Variant, VariantAccessError};
}
