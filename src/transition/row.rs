//! Rows: ordered transitions sharing one key.

use super::definition::Transition;
use super::error::BuildError;
use super::key::Key;
use crate::containers::KindList;
use crate::variant::Alternatives;
use std::fmt;

/// Transitions sharing a `(source, event)` key, in priority order.
///
/// The first transition whose guard passes wins; later ones are fallbacks.
pub struct Row<SV, EV> {
    key: Key,
    transitions: Vec<Transition<SV, EV>>,
}

/// Build a row from `first` followed by `others`.
///
/// Every transition must carry the key of `first`.
pub fn make_row<SV, EV, I>(first: Transition<SV, EV>, others: I) -> Result<Row<SV, EV>, BuildError>
where
    SV: Alternatives,
    EV: Alternatives,
    I: IntoIterator<Item = Transition<SV, EV>>,
{
    others
        .into_iter()
        .try_fold(Row::single(first), |row, transition| row.append(transition))
}

impl<SV: Alternatives, EV: Alternatives> Row<SV, EV> {
    /// Row holding only `transition`.
    pub fn single(transition: Transition<SV, EV>) -> Self {
        Row {
            key: transition.key(),
            transitions: vec![transition],
        }
    }

    /// Return the row with `transition` appended last.
    pub fn append(mut self, transition: Transition<SV, EV>) -> Result<Self, BuildError> {
        if transition.key() != self.key {
            return Err(BuildError::KeyMismatch {
                expected: self.key,
                found: transition.key(),
            });
        }
        self.push(transition);
        Ok(self)
    }

    pub(crate) fn push(&mut self, transition: Transition<SV, EV>) {
        debug_assert_eq!(transition.key(), self.key);
        self.transitions.push(transition);
    }

    pub fn key(&self) -> Key {
        self.key
    }

    /// Number of transitions.
    pub fn size(&self) -> usize {
        self.transitions.len()
    }

    pub fn transitions(&self) -> &[Transition<SV, EV>] {
        &self.transitions
    }

    pub fn transition(&self, index: usize) -> Option<&Transition<SV, EV>> {
        self.transitions.get(index)
    }

    /// Index of the first transition whose guard passes.
    pub fn find_transition(&self, source: &SV, event: &EV) -> Option<usize> {
        self.transitions
            .iter()
            .position(|transition| transition.invoke_guard(source, event))
    }

    /// Distinct destination kinds, internal transitions skipped.
    pub fn destination_types(&self) -> KindList {
        self.transitions
            .iter()
            .filter_map(Transition::destination)
            .collect::<KindList>()
            .make_unique()
    }
}

impl<SV, EV> fmt::Debug for Row<SV, EV> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("key", &self.key)
            .field("transitions", &self.transitions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::Kind;
    use crate::transition::{event, make_transition, state, Placeholder};

    struct Cold;
    struct Warm;
    struct Hot;
    struct Heat(u32);
    struct Vent;

    crate::variant! {
        enum Temperature { Cold, Warm, Hot }
    }

    crate::variant! {
        enum Control { Heat, Vent }
    }

    type T = Transition<Temperature, Control>;

    fn to_warm() -> T {
        make_transition(
            state::<Cold>(),
            event::<Heat>(),
            |heat: &Heat| heat.0 < 10,
            || Warm,
            state::<Warm>(),
        )
    }

    fn to_hot() -> T {
        make_transition(
            state::<Cold>(),
            event::<Heat>(),
            Placeholder,
            || Hot,
            state::<Hot>(),
        )
    }

    fn stay_cold() -> T {
        make_transition(
            state::<Cold>(),
            event::<Heat>(),
            Placeholder,
            Placeholder,
            Placeholder,
        )
    }

    #[test]
    fn make_row_keeps_declaration_order() {
        let row = make_row(to_warm(), [to_hot(), stay_cold()]).unwrap();

        assert_eq!(row.size(), 3);
        assert_eq!(row.key(), Key::of::<Cold, Heat>());
        assert_eq!(row.transition(1).and_then(Transition::destination), Some(Kind::of::<Hot>()));
        assert!(row.transition(2).unwrap().is_internal());
    }

    #[test]
    fn make_row_rejects_foreign_key() {
        let vent: T = make_transition(
            state::<Cold>(),
            event::<Vent>(),
            Placeholder,
            Placeholder,
            Placeholder,
        );

        let error = make_row(to_warm(), [vent]).unwrap_err();

        assert_eq!(
            error,
            BuildError::KeyMismatch {
                expected: Key::of::<Cold, Heat>(),
                found: Key::of::<Cold, Vent>(),
            }
        );
    }

    #[test]
    fn append_adds_one_transition_last() {
        let row = Row::single(to_warm());
        let before = row.size();

        let row = row.append(stay_cold()).unwrap();

        assert_eq!(row.size(), before + 1);
        assert!(row.transitions().last().unwrap().ignores_event());
    }

    #[test]
    fn find_transition_returns_first_passing_guard() {
        let row = make_row(to_warm(), [to_hot()]).unwrap();
        let cold = Temperature::Cold(Cold);

        assert_eq!(row.find_transition(&cold, &Control::Heat(Heat(3))), Some(0));
        assert_eq!(row.find_transition(&cold, &Control::Heat(Heat(30))), Some(1));
    }

    #[test]
    fn find_transition_reports_no_match() {
        let row = Row::single(to_warm());

        assert_eq!(
            row.find_transition(&Temperature::Cold(Cold), &Control::Heat(Heat(30))),
            None
        );
    }

    #[test]
    fn destination_types_skip_internal_and_repeats() {
        let row = make_row(to_warm(), [stay_cold(), to_hot(), to_warm()]).unwrap();

        assert_eq!(
            row.destination_types(),
            KindList::from(vec![Kind::of::<Warm>(), Kind::of::<Hot>()])
        );
    }
}
