use crate::models::{Medication, UserRecord};
use chrono::NaiveTime;

/// Fallback dose time for unknown or single-dose frequencies.
pub const DEFAULT_DOSE_TIME: &str = "09:00";

/// How often a medication is taken. Stored on the wire as the kebab-case
/// string; anything unrecognised resolves to the single default time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    OnceDaily,
    TwiceDaily,
    ThreeTimesDaily,
    Every4Hours,
    Every6Hours,
    Every8Hours,
    Every12Hours,
    AsNeeded,
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "once-daily" => Some(Self::OnceDaily),
            "twice-daily" => Some(Self::TwiceDaily),
            "three-times-daily" => Some(Self::ThreeTimesDaily),
            "every-4-hours" => Some(Self::Every4Hours),
            "every-6-hours" => Some(Self::Every6Hours),
            "every-8-hours" => Some(Self::Every8Hours),
            "every-12-hours" => Some(Self::Every12Hours),
            "as-needed" => Some(Self::AsNeeded),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnceDaily => "once-daily",
            Self::TwiceDaily => "twice-daily",
            Self::ThreeTimesDaily => "three-times-daily",
            Self::Every4Hours => "every-4-hours",
            Self::Every6Hours => "every-6-hours",
            Self::Every8Hours => "every-8-hours",
            Self::Every12Hours => "every-12-hours",
            Self::AsNeeded => "as-needed",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn dose_times(&self) -> &'static [&'static str] {
        match self {
            Self::OnceDaily => &["09:00"],
            Self::TwiceDaily => &["08:00", "20:00"],
            Self::ThreeTimesDaily => &["08:00", "13:00", "20:00"],
            Self::Every4Hours => &["08:00", "12:00", "16:00", "20:00"],
            Self::Every6Hours => &["06:00", "12:00", "18:00", "00:00"],
            Self::Every8Hours => &["08:00", "16:00", "00:00"],
            Self::Every12Hours => &["08:00", "20:00"],
            Self::AsNeeded | Self::Weekly | Self::Monthly => &["09:00"],
        }
    }
}

/// Default daily dose times for a frequency string. Unknown frequencies
/// degrade to the single default time rather than failing.
pub fn resolve(frequency: &str) -> Vec<String> {
    let times = match Frequency::from_str(frequency) {
        Some(frequency) => frequency.dose_times(),
        None => &[DEFAULT_DOSE_TIME][..],
    };
    times.iter().map(|t| t.to_string()).collect()
}

/// Strict "HH:MM" parse; anything else is treated as an invalid dose time.
pub fn parse_clock(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M").ok()
}

/// Re-emit a clock string in canonical zero-padded "HH:MM" form.
pub fn canonicalize_clock(time: &str) -> Option<String> {
    parse_clock(time.trim()).map(|t| t.format("%H:%M").to_string())
}

/// The dose times a medication is actually on: its stored reminder list when
/// that has any valid entry, else the legacy single `time` field. Invalid
/// entries are skipped individually and duplicates collapse to the first
/// occurrence, so one bad value never hides the rest of the schedule.
pub fn dose_times(med: &Medication) -> Vec<String> {
    let mut times: Vec<String> = Vec::new();
    for t in &med.reminder_times {
        if parse_clock(t).is_some() && !times.contains(t) {
            times.push(t.clone());
        }
    }
    if times.is_empty() && parse_clock(&med.time).is_some() {
        times.push(med.time.clone());
    }
    times
}

/// Clear a stale taken-set the first time a medication is seen on a new
/// calendar day. Returns whether anything changed.
pub fn roll_medication_to_day(med: &mut Medication, today: &str) -> bool {
    if med.taken_date == today {
        return false;
    }
    med.taken_date = today.to_string();
    if med.taken_times.is_empty() && !med.taken_today {
        return false;
    }
    med.taken_times.clear();
    med.taken_today = false;
    true
}

/// Roll every medication in a record to `today`.
pub fn roll_to_day(record: &mut UserRecord, today: &str) -> bool {
    let mut changed = false;
    for med in &mut record.medications {
        changed |= roll_medication_to_day(med, today);
    }
    changed
}
