//! Transitions, rows and tables.
//!
//! A [`Transition`] binds a `(source, event)` [`Key`] to a guard, an action
//! and a destination. Transitions sharing a key form a [`Row`], evaluated
//! in declaration order. A [`Table`] holds one row per key and is built
//! once, up front:
//!
//! - with [`make_table`] from explicit rows
//! - with [`Table::from_transitions`] or [`TableBuilder`] from a flat list
//! - with the [`transition_table!`](crate::transition_table!) macro
//!
//! Guards and actions may take no argument, the source state, the event,
//! or both; [`Placeholder`] fills any slot with "always", "nothing" or
//! "stay".

mod action;
mod builder;
mod callable;
mod definition;
mod error;
mod guard;
mod key;
mod macros;
mod row;
mod table;
mod tag;

pub use action::Action;
pub use builder::TableBuilder;
pub use callable::{
    ActionFn, Always, Destination, EventArg, GuardFn, NoArgs, Pass, SourceArg, SourceEventArgs,
};
pub use definition::{make_transition, Transition};
pub use error::BuildError;
pub use guard::Guard;
pub use key::Key;
pub use row::{make_row, Row};
pub use table::{make_table, Table};
pub use tag::{event, state, EventTag, Placeholder, StateTag};
