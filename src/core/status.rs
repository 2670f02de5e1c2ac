use crate::errors::AppResult;
use crate::models::day_state::{DayState, Phase};
use crate::models::entry::LogEntry;
use crate::models::event_kind::EventKind;
use crate::store::{ActiveSession, DayLog};
use crate::utils::formatting::{bold, pad_right};
use crate::utils::mins2readable;
use crate::utils::time::format_clock;
use ansi_term::Colour;
use chrono::{DateTime, Local, TimeDelta};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub log_path: String,
    pub phase: Phase,
    pub counts: DayState,
    pub started_at: Option<DateTime<Local>>,
    pub ended_at: Option<DateTime<Local>>,
    pub break_minutes: i64,
    pub worked_minutes: i64,
}

fn color_for_phase(phase: Phase) -> Colour {
    match phase {
        Phase::Started => Colour::Green,
        Phase::OnBreak => Colour::Yellow,
        Phase::Ended => Colour::Blue,
        Phase::Unopened => Colour::White,
        Phase::Inconsistent => Colour::Red,
    }
}

/// Break time and worked time for a day, with anything still open
/// running until `now`.
pub fn durations(entries: &[LogEntry], now: DateTime<Local>) -> (TimeDelta, TimeDelta) {
    let mut started: Option<DateTime<Local>> = None;
    let mut ended: Option<DateTime<Local>> = None;
    let mut open_break: Option<DateTime<Local>> = None;
    let mut on_break = TimeDelta::zero();

    for e in entries {
        let Some(ts) = e.timestamp() else { continue };
        match e.command {
            EventKind::Start => {
                started.get_or_insert(ts);
            }
            EventKind::End => ended = Some(ts),
            EventKind::Break => {
                open_break.get_or_insert(ts);
            }
            EventKind::Back => {
                if let Some(b) = open_break.take() {
                    on_break += ts - b;
                }
            }
        }
    }

    let until = ended.unwrap_or(now);
    if let Some(b) = open_break {
        on_break += until - b;
    }

    let worked = match started {
        Some(s) => (until - s - on_break).max(TimeDelta::zero()),
        None => TimeDelta::zero(),
    };

    (on_break.max(TimeDelta::zero()), worked)
}

pub struct StatusLogic;

impl StatusLogic {
    pub fn build(session: &ActiveSession, now: DateTime<Local>) -> AppResult<StatusReport> {
        let entries = DayLog::open(&session.log_path).entries()?;
        let counts = DayState::from_entries(&entries);

        let first = |kind: EventKind| {
            entries
                .iter()
                .find(|e| e.command == kind)
                .and_then(LogEntry::timestamp)
        };
        let (on_break, worked) = durations(&entries, now);

        Ok(StatusReport {
            log_path: session.log_path.to_string_lossy().to_string(),
            phase: counts.phase(),
            counts,
            started_at: first(EventKind::Start),
            ended_at: first(EventKind::End),
            break_minutes: on_break.num_minutes(),
            worked_minutes: worked.num_minutes(),
        })
    }

    pub fn print(report: &StatusReport) {
        let phase = color_for_phase(report.phase).paint(report.phase.as_str());
        let clock = |t: Option<DateTime<Local>>| {
            t.map(format_clock)
                .unwrap_or_else(|| "--:--:--".to_string())
        };

        println!("{} {}", bold(&pad_right("Log:", 8)), report.log_path);
        println!("{} {}", bold(&pad_right("Phase:", 8)), phase);
        println!(
            "{} {} → {}",
            bold(&pad_right("Clock:", 8)),
            clock(report.started_at),
            clock(report.ended_at)
        );
        println!(
            "{} {} ({} breaks, {} backs)",
            bold(&pad_right("Breaks:", 8)),
            mins2readable(report.break_minutes, false),
            report.counts.breaks,
            report.counts.backs
        );
        println!(
            "{} {}",
            bold(&pad_right("Worked:", 8)),
            mins2readable(report.worked_minutes, false)
        );
    }
}
