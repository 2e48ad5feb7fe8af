//! Kind coverage checks using Validation.
//!
//! A machine's state set must list exactly the states its table mentions,
//! and its event set exactly the events. Kinds outside the sets are
//! already rejected at compile time; this check finds declared kinds the
//! table never uses. Every violation is reported, not just the first.

use crate::containers::{Kind, KindList};
use crate::transition::Table;
use crate::variant::Alternatives;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A declared kind missing from the table.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CoverageViolation {
    #[error("State '{kind}' is declared but does not appear in the table")]
    UnusedState { kind: Kind },

    #[error("Event '{kind}' is declared but does not appear in the table")]
    UnusedEvent { kind: Kind },
}

/// Check that every declared state and event kind appears in `table`.
/// Returns Validation::Failure with ALL violations if any fail.
pub fn check_coverage<SV, EV>(table: &Table<SV, EV>) -> Validation<(), NonEmptyVec<CoverageViolation>>
where
    SV: Alternatives,
    EV: Alternatives,
{
    let states = table.state_types();
    let events = table.event_types();

    let state_checks = covered(&SV::kinds(), &states, |kind| CoverageViolation::UnusedState { kind });
    let event_checks = covered(&EV::kinds(), &events, |kind| CoverageViolation::UnusedEvent { kind });

    let checks: Vec<_> = state_checks.into_iter().chain(event_checks).collect();
    Validation::all_vec(checks).map(|_| ())
}

fn covered<F>(
    declared: &KindList,
    used: &KindList,
    violation: F,
) -> Vec<Validation<(), NonEmptyVec<CoverageViolation>>>
where
    F: Fn(Kind) -> CoverageViolation,
{
    declared
        .iter()
        .map(|kind| {
            if used.contains(kind) {
                Validation::success(())
            } else {
                Validation::fail(violation(*kind))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::{event, state, Placeholder, TableBuilder};

    struct Ready;
    struct Done;
    struct Spare;
    struct Go;
    struct Halt;
    struct Unused;

    crate::variant! {
        enum Full { Ready, Done }
    }

    crate::variant! {
        enum Extra { Ready, Done, Spare }
    }

    crate::variant! {
        enum Signals { Go }
    }

    crate::variant! {
        enum MoreSignals { Go, Halt, Unused }
    }

    #[test]
    fn coverage_succeeds_when_sets_match() {
        let table = TableBuilder::<Full, Signals>::new()
            .transition(state::<Ready>(), event::<Go>(), Placeholder, || Done, state::<Done>())
            .build()
            .unwrap();

        assert!(check_coverage(&table).is_success());
    }

    #[test]
    fn coverage_accumulates_all_violations() {
        let table = TableBuilder::<Extra, MoreSignals>::new()
            .transition(state::<Ready>(), event::<Go>(), Placeholder, || Done, state::<Done>())
            .transition(
                state::<Done>(),
                event::<Halt>(),
                Placeholder,
                Placeholder,
                Placeholder,
            )
            .build()
            .unwrap();

        match check_coverage(&table) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.iter().any(|e| *e
                    == CoverageViolation::UnusedState {
                        kind: Kind::of::<Spare>()
                    }));
                assert!(errors.iter().any(|e| *e
                    == CoverageViolation::UnusedEvent {
                        kind: Kind::of::<Unused>()
                    }));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn violation_messages_name_the_kind() {
        let violation = CoverageViolation::UnusedState {
            kind: Kind::of::<Spare>(),
        };

        assert_eq!(
            violation.to_string(),
            "State 'Spare' is declared but does not appear in the table"
        );
    }
}
