//! Transition tables: rows with distinct keys.

use super::definition::Transition;
use super::error::BuildError;
use super::key::Key;
use super::row::Row;
use crate::containers::{IndexMap, Kind, KindList, List};
use crate::variant::Alternatives;
use std::fmt;
use tracing::debug;

/// An ordered set of rows, one per key.
///
/// A table is never empty; the source of its first row is the initial
/// state of every machine built over it. Tables are immutable; `update`
/// consumes a table and returns the extended one.
pub struct Table<SV, EV> {
    rows: Vec<Row<SV, EV>>,
    row_index_map: IndexMap<Key>,
}

/// Build a table from rows with distinct keys.
pub fn make_table<SV, EV, I>(rows: I) -> Result<Table<SV, EV>, BuildError>
where
    SV: Alternatives,
    EV: Alternatives,
    I: IntoIterator<Item = Row<SV, EV>>,
{
    let rows: Vec<_> = rows.into_iter().collect();
    if rows.is_empty() {
        return Err(BuildError::NoTransitions);
    }

    let keys = rows.iter().map(Row::key).collect::<List<Key>>();
    let row_index_map = IndexMap::from_list(keys)?;

    debug!(rows = rows.len(), "built transition table");
    Ok(Table {
        rows,
        row_index_map,
    })
}

impl<SV: Alternatives, EV: Alternatives> Table<SV, EV> {
    /// Build a table by applying [`update`](Self::update) left to right.
    ///
    /// Among transitions sharing a key, the first listed has the highest
    /// priority.
    pub fn from_transitions<I>(transitions: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = Transition<SV, EV>>,
    {
        let mut transitions = transitions.into_iter();
        let first = transitions.next().ok_or(BuildError::NoTransitions)?;
        let table = transitions.fold(Self::single(first), Self::update);

        debug!(
            rows = table.size(),
            states = table.state_types().len(),
            events = table.event_types().len(),
            "built transition table"
        );
        Ok(table)
    }

    fn single(transition: Transition<SV, EV>) -> Self {
        Table {
            row_index_map: IndexMap::default().with(transition.key()),
            rows: vec![Row::single(transition)],
        }
    }

    /// Return the table extended with `transition`.
    ///
    /// A new key appends a row; a known key appends the transition to the
    /// end of its row, making it the lowest priority one.
    pub fn update(mut self, transition: Transition<SV, EV>) -> Self {
        let key = transition.key();
        match self.row_index_map.at_key(&key) {
            Some(index) => self.rows[index].push(transition),
            None => {
                self.row_index_map = std::mem::take(&mut self.row_index_map).with(key);
                self.rows.push(Row::single(transition));
            }
        }
        self
    }

    /// Number of rows.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row<SV, EV>] {
        &self.rows
    }

    pub fn row_index(&self, key: &Key) -> Option<usize> {
        self.row_index_map.at_key(key)
    }

    pub fn row_for(&self, key: &Key) -> Option<&Row<SV, EV>> {
        self.row_index(key).and_then(|index| self.rows.get(index))
    }

    pub fn row_index_map(&self) -> &IndexMap<Key> {
        &self.row_index_map
    }

    /// Every state kind the table mentions, first seen first: row sources,
    /// then row destinations.
    pub fn state_types(&self) -> KindList {
        let sources = self.rows.iter().map(|row| row.key().source).collect::<KindList>();
        let destinations = self
            .rows
            .iter()
            .map(Row::destination_types)
            .collect::<List<KindList>>()
            .flatten();
        sources.concat(destinations).make_unique()
    }

    /// Every event kind the table mentions, first seen first.
    pub fn event_types(&self) -> KindList {
        self.rows
            .iter()
            .map(|row| row.key().event)
            .collect::<KindList>()
            .make_unique()
    }

    /// Source kind of the first row.
    pub fn initial_state(&self) -> Kind {
        self.rows
            .first()
            .map(|row| row.key().source)
            .expect("a table has at least one row")
    }
}

impl<SV, EV> fmt::Debug for Table<SV, EV> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table").field("rows", &self.rows).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::MappingError;
    use crate::transition::{event, make_transition, state, Placeholder};

    struct S1;
    struct S2;
    struct S3;
    struct E1;
    struct E2;

    crate::variant! {
        enum States { S1, S2, S3 }
    }

    crate::variant! {
        enum Events { E1, E2 }
    }

    type T = Transition<States, Events>;

    fn s1_e1_to_s2() -> T {
        make_transition(state::<S1>(), event::<E1>(), Placeholder, || S2, state::<S2>())
    }

    fn s1_e1_to_s3() -> T {
        make_transition(state::<S1>(), event::<E1>(), Placeholder, || S3, state::<S3>())
    }

    fn s2_e2_stay() -> T {
        make_transition(
            state::<S2>(),
            event::<E2>(),
            Placeholder,
            Placeholder,
            Placeholder,
        )
    }

    #[test]
    fn make_table_indexes_rows_by_key() {
        let table = make_table([Row::single(s1_e1_to_s2()), Row::single(s2_e2_stay())]).unwrap();

        assert_eq!(table.size(), 2);
        assert_eq!(table.row_index(&Key::of::<S1, E1>()), Some(0));
        assert_eq!(table.row_index(&Key::of::<S2, E2>()), Some(1));
        assert!(table.row_for(&Key::of::<S2, E1>()).is_none());
        assert_eq!(table.initial_state(), Kind::of::<S1>());
    }

    #[test]
    fn make_table_rejects_duplicate_keys() {
        let error = make_table([Row::single(s1_e1_to_s2()), Row::single(s1_e1_to_s3())]).unwrap_err();

        assert!(matches!(
            error,
            BuildError::Mapping(MappingError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn make_table_rejects_empty_input() {
        let error = make_table(Vec::<Row<States, Events>>::new()).unwrap_err();

        assert_eq!(error, BuildError::NoTransitions);
    }

    #[test]
    fn update_appends_to_existing_row() {
        let table = Table::from_transitions([s1_e1_to_s2()]).unwrap();

        let table = table.update(s1_e1_to_s3());

        assert_eq!(table.size(), 1);
        assert_eq!(table.rows()[0].size(), 2);
        assert_eq!(
            table.rows()[0].transition(1).and_then(Transition::destination),
            Some(Kind::of::<S3>())
        );
    }

    #[test]
    fn update_adds_row_for_new_key() {
        let table = Table::from_transitions([s1_e1_to_s2()]).unwrap();

        let table = table.update(s2_e2_stay());

        assert_eq!(table.size(), 2);
        assert_eq!(table.row_index(&Key::of::<S2, E2>()), Some(1));
    }

    #[test]
    fn state_types_list_sources_before_destinations() {
        let table =
            Table::from_transitions([s2_e2_stay(), s1_e1_to_s3(), s1_e1_to_s2()]).unwrap();

        assert_eq!(
            table.state_types(),
            KindList::from(vec![Kind::of::<S2>(), Kind::of::<S1>(), Kind::of::<S3>()])
        );
        assert_eq!(
            table.event_types(),
            KindList::from(vec![Kind::of::<E2>(), Kind::of::<E1>()])
        );
        assert_eq!(table.initial_state(), Kind::of::<S2>());
    }

    #[test]
    fn from_transitions_requires_one_transition() {
        let error = Table::<States, Events>::from_transitions(Vec::new()).unwrap_err();

        assert_eq!(error, BuildError::NoTransitions);
    }

    #[test]
    fn debug_renders_rows_and_flags() {
        let table = Table::from_transitions([s1_e1_to_s2(), s2_e2_stay()]).unwrap();

        let rendered = format!("{table:?}");

        assert!(rendered.starts_with("Table { rows: [Row {"));
        assert!(rendered.contains("destination: Some(S2), empty_guard: true, pass: false"));
        assert!(rendered.contains("destination: None, empty_guard: true, pass: true"));
    }
}
