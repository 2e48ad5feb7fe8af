//! Macros for declaring transition tables.

/// Declare a transition table as a flat list of rows.
///
/// The header names the state set and the event set. Each row is
/// `Source, Event, Guard, Action, Destination;` where `_` stands for the
/// placeholder. Guards and actions are single tokens: a function name, `_`,
/// or a parenthesized expression, whose parentheses are dropped. Expands to
/// `Result<Table<States, Events>, BuildError>`.
///
/// # Example
///
/// ```
/// use stateline::{transition_table, variant};
///
/// pub struct Closed;
/// pub struct Opened;
/// pub struct Push;
///
/// variant! { pub enum Door { Closed, Opened } }
/// variant! { pub enum Input { Push } }
///
/// fn open() -> Opened {
///     Opened
/// }
///
/// let table = transition_table! {
///     Door, Input;
///     Closed, Push, _, open, Opened;
///     Opened, Push, _, (|| Closed), Closed;
/// }
/// .unwrap();
///
/// assert_eq!(table.size(), 2);
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        $sv:ty, $ev:ty;
        $( $source:ty, $event:ty, $guard:tt, $action:tt, $destination:tt );+ $(;)?
    ) => {
        $crate::transition::TableBuilder::<$sv, $ev>::new()
            $(
                .transition(
                    $crate::transition::state::<$source>(),
                    $crate::transition::event::<$event>(),
                    $crate::__placeholder_or!($guard),
                    $crate::__placeholder_or!($action),
                    $crate::__destination!($destination),
                )
            )+
            .build()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __placeholder_or {
    (_) => {
        $crate::transition::Placeholder
    };
    (( $($callable:tt)* )) => {
        $($callable)*
    };
    ($callable:tt) => {
        $callable
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __destination {
    (_) => {
        $crate::transition::Placeholder
    };
    ($destination:ty) => {
        $crate::transition::state::<$destination>()
    };
}

#[cfg(test)]
mod tests {
    use crate::containers::{Kind, KindList};
    use crate::transition::Key;

    struct Asleep;
    struct Awake;
    struct Alarm {
        loud: bool,
    }
    struct Snooze;

    crate::variant! {
        enum Sleeper { Asleep, Awake }
    }

    crate::variant! {
        enum Signal { Alarm, Snooze }
    }

    fn loud(alarm: &Alarm) -> bool {
        alarm.loud
    }

    fn wake() -> Awake {
        Awake
    }

    #[test]
    fn transition_table_builds_rows_in_order() {
        let table = transition_table! {
            Sleeper, Signal;
            Asleep, Alarm, loud, wake, Awake;
            Asleep, Alarm, _, _, _;
            Awake, Snooze, _, (|| Asleep), Asleep;
        }
        .unwrap();

        assert_eq!(table.size(), 2);
        assert_eq!(table.row_index(&Key::of::<Asleep, Alarm>()), Some(0));
        assert_eq!(table.rows()[0].size(), 2);
        assert!(table.rows()[0].transitions()[1].ignores_event());
        assert_eq!(
            table.state_types(),
            KindList::from(vec![Kind::of::<Asleep>(), Kind::of::<Awake>()])
        );
    }

    #[test]
    #[deny(unused_parens)]
    fn parenthesized_closures_expand_bare() {
        let table = transition_table! {
            Sleeper, Signal;
            Asleep, Alarm, (|alarm: &Alarm| !alarm.loud), (|| Awake), Awake;
            Awake, Snooze, _, (|| Asleep), Asleep;
        }
        .unwrap();

        assert!(!table.rows()[0].transitions()[0].has_empty_guard());
        assert_eq!(
            table.rows()[1].destination_types(),
            KindList::from(vec![Kind::of::<Asleep>()])
        );
    }

    #[test]
    fn transition_table_accepts_missing_trailing_separator() {
        let table = transition_table! {
            Sleeper, Signal;
            Awake, Snooze, _, _, _
        }
        .unwrap();

        assert!(table.rows()[0].transitions()[0].is_internal());
    }
}
