//! Builder for constructing transition tables.

use super::callable::{ActionFn, Destination, GuardFn};
use super::definition::{make_transition, Transition};
use super::error::BuildError;
use super::table::Table;
use super::tag::{EventTag, StateTag};
use crate::variant::{Alternative, Alternatives};

/// Accumulates transitions, then builds an immutable [`Table`].
///
/// Transitions are folded into the table in the order they were added, so
/// the first one added for a key has the highest priority.
///
/// # Example
///
/// ```rust
/// use stateline::transition::{event, state, Placeholder, TableBuilder};
/// use stateline::variant;
///
/// pub struct Green;
/// pub struct Yellow;
/// pub struct Red;
/// pub struct Timer;
///
/// variant! { pub enum Light { Green, Yellow, Red } }
/// variant! { pub enum Input { Timer } }
///
/// let table = TableBuilder::<Light, Input>::new()
///     .transition(state::<Green>(), event::<Timer>(), Placeholder, || Yellow, state::<Yellow>())
///     .transition(state::<Yellow>(), event::<Timer>(), Placeholder, || Red, state::<Red>())
///     .transition(state::<Red>(), event::<Timer>(), Placeholder, || Green, state::<Green>())
///     .build()
///     .unwrap();
///
/// assert_eq!(table.size(), 3);
/// ```
pub struct TableBuilder<SV, EV> {
    transitions: Vec<Transition<SV, EV>>,
}

impl<SV: Alternatives, EV: Alternatives> TableBuilder<SV, EV> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Add a transition from its five parts.
    pub fn transition<S, E, G, GM, A, AM, D>(
        self,
        source: StateTag<S>,
        event: EventTag<E>,
        guard: G,
        action: A,
        destination: D,
    ) -> Self
    where
        S: Alternative<SV>,
        E: Alternative<EV>,
        G: GuardFn<S, E, GM>,
        GM: 'static,
        D: Destination<SV>,
        A: ActionFn<S, E, D::Output, AM>,
        AM: 'static,
    {
        self.add_transition(make_transition(source, event, guard, action, destination))
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<SV, EV>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple pre-built transitions at once.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<SV, EV>>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Build the table.
    /// Returns an error if no transition was added.
    pub fn build(self) -> Result<Table<SV, EV>, BuildError> {
        Table::from_transitions(self.transitions)
    }
}

impl<SV: Alternatives, EV: Alternatives> Default for TableBuilder<SV, EV> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::Kind;
    use crate::transition::{event, state, Key, Placeholder};

    struct Draft;
    struct Review;
    struct Published;
    struct Submit;
    struct Approve {
        approvals: u32,
    }

    crate::variant! {
        enum Document { Draft, Review, Published }
    }

    crate::variant! {
        enum Step { Submit, Approve }
    }

    #[test]
    fn builder_requires_transitions() {
        let result = TableBuilder::<Document, Step>::new().build();

        assert!(matches!(result, Err(BuildError::NoTransitions)));
    }

    #[test]
    fn fluent_api_builds_table() {
        let table = TableBuilder::<Document, Step>::new()
            .transition(
                state::<Draft>(),
                event::<Submit>(),
                Placeholder,
                || Review,
                state::<Review>(),
            )
            .transition(
                state::<Review>(),
                event::<Approve>(),
                |approve: &Approve| approve.approvals >= 2,
                || Published,
                state::<Published>(),
            )
            .transition(
                state::<Review>(),
                event::<Approve>(),
                Placeholder,
                Placeholder,
                Placeholder,
            )
            .build()
            .unwrap();

        assert_eq!(table.size(), 2);
        assert_eq!(table.initial_state(), Kind::of::<Draft>());
        assert_eq!(
            table.row_for(&Key::of::<Review, Approve>()).map(|row| row.size()),
            Some(2)
        );
    }

    #[test]
    fn builder_accepts_prebuilt_transitions() {
        let submit = make_transition(
            state::<Draft>(),
            event::<Submit>(),
            Placeholder,
            || Review,
            state::<Review>(),
        );
        let resubmit = make_transition(
            state::<Review>(),
            event::<Submit>(),
            Placeholder,
            Placeholder,
            Placeholder,
        );

        let table = TableBuilder::<Document, Step>::default()
            .add_transition(submit)
            .transitions([resubmit])
            .build()
            .unwrap();

        assert_eq!(table.size(), 2);
        assert_eq!(table.event_types().len(), 1);
    }
}
