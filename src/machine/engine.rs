//! State machine that dispatches events through a transition table.

use super::config::{MachineConfig, ViolationStrategy};
use super::coverage::check_coverage;
use super::error::MachineError;
use super::lifecycle::Lifecycle;
use super::status::ProcessStatus;
use crate::containers::{Kind, KindList};
use crate::transition::{Key, Table};
use crate::variant::{Alternative, Alternatives, Variant};
use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use stillwater::validation::Validation;
use tracing::{debug, trace, warn};

/// A running machine over a transition table.
///
/// The machine owns its current state, held in a [`Variant`] over the
/// state set `SV`. The table can be owned, borrowed, or shared through an
/// `Arc`: any `T: Borrow<Table<SV, EV>>` works, so one table can drive
/// many machines.
///
/// # Example
///
/// ```rust
/// use stateline::machine::{Lifecycle, ProcessStatus, StateMachine};
/// use stateline::{transition_table, variant};
///
/// pub struct Off;
/// pub struct On;
/// pub struct Flip;
///
/// impl Lifecycle for Off {}
/// impl Lifecycle for On {}
///
/// variant! { pub enum Switch: dyn Lifecycle { Off, On } }
/// variant! { pub enum Input { Flip } }
///
/// let table = transition_table! {
///     Switch, Input;
///     Off, Flip, _, (|| On), On;
///     On, Flip, _, (|| Off), Off;
/// }
/// .unwrap();
///
/// let mut machine = StateMachine::new(table, Off).unwrap();
/// assert_eq!(machine.process_event(Flip).unwrap(), ProcessStatus::Completed);
/// assert!(machine.is_state::<On>());
/// ```
pub struct StateMachine<SV, EV, T = Table<SV, EV>>
where
    SV: Alternatives,
    SV::Dyn: Lifecycle,
    EV: Alternatives,
    T: Borrow<Table<SV, EV>>,
{
    table: T,
    state: Variant<SV>,
    _events: PhantomData<fn(EV)>,
}

impl<SV, EV, T> StateMachine<SV, EV, T>
where
    SV: Alternatives,
    SV::Dyn: Lifecycle,
    EV: Alternatives,
    T: Borrow<Table<SV, EV>>,
{
    /// Start a machine in `initial` with the default configuration.
    pub fn new<I: Alternative<SV>>(table: T, initial: I) -> Result<Self, MachineError> {
        Self::with_config(table, initial, &MachineConfig::default())
    }

    /// Start a machine in `initial`.
    ///
    /// `initial` must be of the source kind of the table's first row.
    /// Declared kinds missing from the table abort construction unless the
    /// config says to log them instead. The entry hook of `initial` runs
    /// once the machine holds it.
    pub fn with_config<I: Alternative<SV>>(
        table: T,
        initial: I,
        config: &MachineConfig,
    ) -> Result<Self, MachineError> {
        let borrowed: &Table<SV, EV> = table.borrow();
        let expected = borrowed.initial_state();
        let found = I::kind();
        if expected != found {
            return Err(MachineError::InitialStateMismatch { expected, found });
        }

        if let Validation::Failure(violations) = check_coverage(borrowed) {
            match config.on_violation {
                ViolationStrategy::Abort => {
                    return Err(MachineError::Coverage(violations.iter().cloned().collect()));
                }
                ViolationStrategy::IgnoreAndLog => {
                    for violation in violations.iter() {
                        warn!(%violation, "ignoring kind coverage violation");
                    }
                }
            }
        }

        let mut state: Variant<SV> = Variant::new();
        state.set(initial);
        state.visit_mut(|state| state.on_entry())?;

        debug!(
            initial = %found,
            states = SV::SIZE,
            events = EV::SIZE,
            "state machine started"
        );
        Ok(Self {
            table,
            state,
            _events: PhantomData,
        })
    }

    /// Dispatch `event` against the current state.
    ///
    /// Looks up the row for the current state and the event kind, then
    /// fires the first transition whose guard passes. External transitions
    /// run the exit hook, the action, then the entry hook of the new state.
    /// If the action panics after the exit hook ran, the old state stays
    /// in place; nothing is rolled back.
    pub fn process_event<E: Alternative<EV>>(
        &mut self,
        event: E,
    ) -> Result<ProcessStatus, MachineError> {
        let source = self
            .state
            .active_kind()
            .ok_or(MachineError::BadStateAccess)?;
        let key = Key::new(source, E::kind());

        let table: &Table<SV, EV> = self.table.borrow();
        let Some(row) = table.row_for(&key) else {
            return Ok(record(key, ProcessStatus::UndefinedTransition));
        };

        let mut event = event.wrap();
        let current = self
            .state
            .as_alternatives_mut()
            .ok_or(MachineError::BadStateAccess)?;
        let Some(index) = row.find_transition(current, &event) else {
            return Ok(record(key, ProcessStatus::GuardFailure));
        };
        let Some(transition) = row.transition(index) else {
            return Ok(record(key, ProcessStatus::GuardFailure));
        };

        if transition.is_internal() {
            if transition.ignores_event() {
                return Ok(record(key, ProcessStatus::EventIgnored));
            }
            transition.invoke_action(current, &mut event)?;
            return Ok(record(key, ProcessStatus::Completed));
        }

        current.as_dyn_mut().on_exit();
        if let Some(next) = transition.invoke_action(current, &mut event)? {
            self.state.set_alternatives(next).as_dyn_mut().on_entry();
        }
        trace!(from = %source, to = ?self.state.active_kind(), "state changed");
        Ok(record(key, ProcessStatus::Completed))
    }

    /// Whether the current state is of kind `S`.
    pub fn is_state<S: Alternative<SV>>(&self) -> bool {
        self.state.holds::<S>()
    }

    /// The current state, if it is of kind `S`.
    pub fn state<S: Alternative<SV>>(&self) -> Option<&S> {
        self.state.get_if::<S>()
    }

    pub fn current_kind(&self) -> Option<Kind> {
        self.state.active_kind()
    }

    pub fn table(&self) -> &Table<SV, EV> {
        self.table.borrow()
    }

    pub fn state_types(&self) -> KindList {
        self.table().state_types()
    }

    pub fn event_types(&self) -> KindList {
        self.table().event_types()
    }
}

fn record(key: Key, status: ProcessStatus) -> ProcessStatus {
    trace!(%key, %status, "processed event");
    status
}

impl<SV, EV, T> Drop for StateMachine<SV, EV, T>
where
    SV: Alternatives,
    SV::Dyn: Lifecycle,
    EV: Alternatives,
    T: Borrow<Table<SV, EV>>,
{
    fn drop(&mut self) {
        // Vacant only if construction never completed.
        let _ = self.state.visit_mut(|state| state.on_exit());
    }
}

impl<SV, EV, T> fmt::Debug for StateMachine<SV, EV, T>
where
    SV: Alternatives,
    SV::Dyn: Lifecycle,
    EV: Alternatives,
    T: Borrow<Table<SV, EV>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("state", &self.state.active_kind())
            .field("table", self.table())
            .finish()
    }
}
