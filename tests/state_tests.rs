use chrono::TimeDelta;
use rtimeclock::core::status::durations;
use rtimeclock::core::transition::{check_append, check_prior_day};
use rtimeclock::errors::AppError;
use rtimeclock::models::day_state::{DayState, Phase};
use rtimeclock::models::entry::LogEntry;
use rtimeclock::models::event_kind::EventKind;
use std::path::Path;

mod common;
use common::at;

fn state(started: bool, ended: bool, breaks: usize, backs: usize) -> DayState {
    DayState {
        started,
        ended,
        breaks,
        backs,
    }
}

#[test]
fn test_phase_follows_counts() {
    assert_eq!(DayState::default().phase(), Phase::Unopened);
    assert_eq!(state(true, false, 0, 0).phase(), Phase::Started);
    assert_eq!(state(true, false, 1, 0).phase(), Phase::OnBreak);
    assert_eq!(state(true, false, 2, 2).phase(), Phase::Started);
    assert_eq!(state(true, true, 1, 1).phase(), Phase::Ended);
    assert_eq!(state(true, false, 3, 1).phase(), Phase::Inconsistent);
    assert_eq!(state(true, false, 0, 1).phase(), Phase::Inconsistent);
}

#[test]
fn test_ended_wins_over_break_balance() {
    let s = state(true, true, 1, 0);
    for kind in [EventKind::End, EventKind::Break, EventKind::Back] {
        assert!(matches!(check_append(kind, &s), Err(AppError::AlreadyEnded)));
    }
}

#[test]
fn test_break_balance_rules() {
    let working = state(true, false, 1, 1);
    assert!(check_append(EventKind::Break, &working).is_ok());
    assert!(check_append(EventKind::End, &working).is_ok());
    assert!(matches!(
        check_append(EventKind::Back, &working),
        Err(AppError::MissingBreakStart)
    ));

    let on_break = state(true, false, 2, 1);
    assert!(check_append(EventKind::Back, &on_break).is_ok());
    assert!(matches!(
        check_append(EventKind::End, &on_break),
        Err(AppError::UnclosedBreak)
    ));
    assert!(matches!(
        check_append(EventKind::Break, &on_break),
        Err(AppError::UnclosedBreak)
    ));
}

#[test]
fn test_prior_day_must_be_ended() {
    let log = Path::new("data/inbox/2025/03/10.csv");
    assert!(check_prior_day(log, &state(true, true, 0, 0)).is_ok());

    match check_prior_day(log, &state(true, false, 0, 0)) {
        Err(AppError::PriorDayUnclosed(p)) => assert_eq!(p, log),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_event_kind_names() {
    for kind in EventKind::ALL {
        assert_eq!(EventKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(EventKind::parse("lunch"), None);
    assert_eq!(EventKind::parse("START"), None);
}

#[test]
fn test_durations_closed_day() {
    let entries = vec![
        LogEntry::new(at(2025, 3, 10, 9, 0), EventKind::Start),
        LogEntry::new(at(2025, 3, 10, 12, 0), EventKind::Break),
        LogEntry::new(at(2025, 3, 10, 12, 30), EventKind::Back),
        LogEntry::new(at(2025, 3, 10, 17, 30), EventKind::End),
    ];

    let (on_break, worked) = durations(&entries, at(2025, 3, 10, 23, 0));
    assert_eq!(on_break, TimeDelta::minutes(30));
    assert_eq!(worked, TimeDelta::hours(8));
}

#[test]
fn test_durations_open_break_runs_until_now() {
    let entries = vec![
        LogEntry::new(at(2025, 3, 10, 9, 0), EventKind::Start),
        LogEntry::new(at(2025, 3, 10, 12, 0), EventKind::Break),
    ];

    let (on_break, worked) = durations(&entries, at(2025, 3, 10, 12, 20));
    assert_eq!(on_break, TimeDelta::minutes(20));
    assert_eq!(worked, TimeDelta::hours(3));
}
