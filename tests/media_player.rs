//! Media player scenario: a CD player with a drawer, built with the fluent
//! table builder.

use stateline::machine::{Lifecycle, ProcessStatus, StateMachine};
use stateline::transition::{event, make_transition, state, Placeholder, Table, TableBuilder};
use stateline::variant;
use std::cell::RefCell;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscType {
    Cd,
    Dvd,
}

pub struct Stopped;
pub struct Open;
pub struct Empty;
pub struct Playing;
pub struct Paused;

pub struct Play;
pub struct OpenClose;
pub struct Stop;
pub struct Pause;
pub struct EndPause;
pub struct CdDetected {
    disc_type: DiscType,
}

thread_local! {
    static TRANSCRIPT: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

fn note(line: String) {
    TRANSCRIPT.with(|transcript| transcript.borrow_mut().push(line));
}

fn transcript() -> Vec<String> {
    TRANSCRIPT.with(|transcript| transcript.borrow().clone())
}

macro_rules! announce {
    ($state:ident) => {
        impl Lifecycle for $state {
            fn on_entry(&mut self) {
                note(format!("entering: {}", stringify!($state)));
            }

            fn on_exit(&mut self) {
                note(format!("leaving: {}", stringify!($state)));
            }
        }
    };
}

announce!(Stopped);
announce!(Open);
announce!(Empty);
announce!(Playing);

impl Lifecycle for Paused {}

variant! {
    pub enum PlayerState: dyn Lifecycle {
        Stopped,
        Open,
        Empty,
        Playing,
        Paused,
    }
}

variant! {
    pub enum PlayerEvent {
        Play,
        OpenClose,
        Stop,
        Pause,
        EndPause,
        CdDetected,
    }
}

fn is_cd(detected: &CdDetected) -> bool {
    detected.disc_type == DiscType::Cd
}

fn player_table() -> Table<PlayerState, PlayerEvent> {
    TableBuilder::<PlayerState, PlayerEvent>::new()
        .transition(state::<Empty>(), event::<OpenClose>(), Placeholder, || Open, state::<Open>())
        .transition(state::<Empty>(), event::<CdDetected>(), is_cd, || Stopped, state::<Stopped>())
        .transition(state::<Stopped>(), event::<Play>(), Placeholder, || Playing, state::<Playing>())
        .transition(state::<Stopped>(), event::<OpenClose>(), Placeholder, || Open, state::<Open>())
        .transition(state::<Stopped>(), event::<Stop>(), Placeholder, || Stopped, state::<Stopped>())
        .transition(state::<Open>(), event::<OpenClose>(), Placeholder, || Empty, state::<Empty>())
        .transition(state::<Playing>(), event::<Stop>(), Placeholder, || Stopped, state::<Stopped>())
        .transition(state::<Playing>(), event::<Pause>(), Placeholder, || Paused, state::<Paused>())
        .transition(state::<Playing>(), event::<OpenClose>(), Placeholder, || Open, state::<Open>())
        .transition(state::<Paused>(), event::<EndPause>(), Placeholder, || Playing, state::<Playing>())
        .transition(state::<Paused>(), event::<Stop>(), Placeholder, || Stopped, state::<Stopped>())
        .transition(state::<Paused>(), event::<OpenClose>(), Placeholder, || Open, state::<Open>())
        .build()
        .unwrap()
}

#[test]
fn player_walks_through_its_states() {
    let table = Arc::new(player_table());
    assert_eq!(table.size(), 12);

    let mut player = StateMachine::new(Arc::clone(&table), Empty).unwrap();
    assert!(player.is_state::<Empty>());

    assert_eq!(player.process_event(OpenClose).unwrap(), ProcessStatus::Completed);
    assert!(player.is_state::<Open>());

    assert_eq!(player.process_event(OpenClose).unwrap(), ProcessStatus::Completed);
    assert!(player.is_state::<Empty>());

    let dvd = CdDetected {
        disc_type: DiscType::Dvd,
    };
    assert_eq!(player.process_event(dvd).unwrap(), ProcessStatus::GuardFailure);
    assert!(player.is_state::<Empty>());

    let cd = CdDetected {
        disc_type: DiscType::Cd,
    };
    assert_eq!(player.process_event(cd).unwrap(), ProcessStatus::Completed);
    assert!(player.is_state::<Stopped>());

    assert_eq!(player.process_event(Play).unwrap(), ProcessStatus::Completed);
    assert!(player.is_state::<Playing>());

    assert_eq!(player.process_event(Pause).unwrap(), ProcessStatus::Completed);
    assert!(player.is_state::<Paused>());

    assert_eq!(player.process_event(EndPause).unwrap(), ProcessStatus::Completed);
    assert!(player.is_state::<Playing>());

    assert_eq!(player.process_event(Pause).unwrap(), ProcessStatus::Completed);
    assert!(player.is_state::<Paused>());

    assert_eq!(player.process_event(Stop).unwrap(), ProcessStatus::Completed);
    assert!(player.is_state::<Stopped>());

    // An explicit self-transition still completes.
    assert_eq!(player.process_event(Stop).unwrap(), ProcessStatus::Completed);
    assert!(player.is_state::<Stopped>());

    assert_eq!(
        player.process_event(Pause).unwrap(),
        ProcessStatus::UndefinedTransition
    );
    assert!(player.is_state::<Stopped>());

    drop(player);

    let transcript = transcript();
    assert_eq!(transcript.first().map(String::as_str), Some("entering: Empty"));
    assert_eq!(transcript.last().map(String::as_str), Some("leaving: Stopped"));

    // The self-transition leaves and re-enters Stopped.
    let stop_again = transcript
        .windows(2)
        .filter(|pair| pair[0] == "leaving: Stopped" && pair[1] == "entering: Stopped")
        .count();
    assert_eq!(stop_again, 1);
}

#[test]
fn player_kinds_follow_table_order() {
    let table = player_table();

    let states: Vec<&str> = table.state_types().iter().map(|k| k.short_name()).collect();
    let events: Vec<&str> = table.event_types().iter().map(|k| k.short_name()).collect();

    assert_eq!(states, vec!["Empty", "Stopped", "Open", "Playing", "Paused"]);
    assert_eq!(
        events,
        vec!["OpenClose", "CdDetected", "Play", "Stop", "Pause", "EndPause"]
    );
}

#[test]
fn placeholder_row_leaves_player_untouched() {
    let table = player_table().update(make_transition(
        state::<Empty>(),
        event::<Play>(),
        Placeholder,
        Placeholder,
        Placeholder,
    ));
    assert_eq!(table.size(), 13);

    let mut player = StateMachine::new(table, Empty).unwrap();
    let before = transcript().len();

    assert_eq!(player.process_event(Play).unwrap(), ProcessStatus::EventIgnored);
    assert!(player.is_state::<Empty>());
    assert_eq!(transcript().len(), before);
}
