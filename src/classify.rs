use crate::models::{Classified, DoseEvent, DoseStatus, DueReminder, Medication};
use crate::schedule::{dose_times, parse_clock};
use std::collections::BTreeSet;

/// Partition every resolved dose of every medication into missed, upcoming
/// and taken for the given clock time. `now` is sampled once by the caller
/// and passed in so a single evaluation is internally consistent.
///
/// A dose scheduled exactly at `now` counts as upcoming. `missed`,
/// `upcoming` and `taken` are each sorted ascending by clock time; the sort
/// is stable, so medications keep their list order at equal times.
pub fn classify(medications: &[Medication], now: &str) -> Classified {
    let mut missed = Vec::new();
    let mut upcoming = Vec::new();
    let mut taken = Vec::new();

    for med in medications {
        for time in dose_times(med) {
            let status = if med.taken_times.contains(&time) {
                DoseStatus::Taken
            } else if time.as_str() < now {
                DoseStatus::Missed
            } else {
                DoseStatus::Upcoming
            };
            let event = DoseEvent {
                medication_id: med.id,
                name: med.name.clone(),
                time,
                dosage_amount: med.dosage_amount.clone(),
                color: med.color.clone(),
                status,
            };
            match status {
                DoseStatus::Taken => taken.push(event),
                DoseStatus::Missed => missed.push(event),
                DoseStatus::Upcoming => upcoming.push(event),
            }
        }
    }

    missed.sort_by(|a, b| a.time.cmp(&b.time));
    upcoming.sort_by(|a, b| a.time.cmp(&b.time));
    taken.sort_by(|a, b| a.time.cmp(&b.time));

    Classified {
        missed,
        upcoming,
        taken,
    }
}

/// Dose-level adherence across all medications, as a percentage. Taken
/// entries are counted against the resolved dose set, so stray entries in
/// an old file never push the ratio past 100. Zero doses means zero, not a
/// division error.
pub fn adherence(medications: &[Medication]) -> f64 {
    let mut taken = 0usize;
    let mut total = 0usize;
    for med in medications {
        let times = dose_times(med);
        total += times.len();
        taken += times.iter().filter(|t| med.taken_times.contains(t)).count();
    }
    if total == 0 {
        return 0.0;
    }
    taken as f64 / total as f64 * 100.0
}

/// Whether every resolved dose of this medication has been taken today.
/// True set equality: a stray entry in the taken-set neither satisfies nor
/// breaks the badge, and a proper subset never satisfies it.
pub fn fully_taken(med: &Medication) -> bool {
    let resolved: BTreeSet<&str> = dose_times_set(med);
    if resolved.is_empty() {
        return false;
    }
    resolved.iter().all(|t| med.taken_times.iter().any(|s| s == t))
}

fn dose_times_set(med: &Medication) -> BTreeSet<&str> {
    let mut set = BTreeSet::new();
    for t in &med.reminder_times {
        if parse_clock(t).is_some() {
            set.insert(t.as_str());
        }
    }
    if set.is_empty() && parse_clock(&med.time).is_some() {
        set.insert(med.time.as_str());
    }
    set
}

/// Medications with at least one untaken dose within `window_minutes` of
/// `now`, in either direction. Computed independently of the missed/upcoming
/// partition: the window is symmetric where the partition is one-sided.
/// Returns nothing when `now` does not parse.
pub fn due_now(medications: &[Medication], now: &str, window_minutes: i64) -> Vec<DueReminder> {
    let Some(now) = parse_clock(now) else {
        return Vec::new();
    };

    let mut due = Vec::new();
    for med in medications {
        let times: Vec<String> = dose_times(med)
            .into_iter()
            .filter(|t| !med.taken_times.contains(t))
            .filter(|t| match parse_clock(t) {
                Some(dose) => {
                    let diff = (dose - now).num_minutes().abs();
                    diff <= window_minutes
                }
                None => false,
            })
            .collect();
        if !times.is_empty() {
            due.push(DueReminder {
                medication_id: med.id,
                name: med.name.clone(),
                dosage_amount: med.dosage_amount.clone(),
                color: med.color.clone(),
                times,
            });
        }
    }
    due
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TakeOutcome {
    /// The dose time was added to the taken-set.
    Recorded,
    /// Already present; the taken-set is unchanged.
    AlreadyTaken,
    /// Not one of the medication's resolved dose times.
    NotScheduled,
}

/// Record one dose as taken. Idempotent, and restricted to the medication's
/// resolved dose times so the taken-set stays a subset of the schedule. The
/// fully-taken flag is recomputed on success.
pub fn mark_taken(med: &mut Medication, time: &str) -> TakeOutcome {
    if !dose_times(med).iter().any(|t| t == time) {
        return TakeOutcome::NotScheduled;
    }
    if med.taken_times.iter().any(|t| t == time) {
        return TakeOutcome::AlreadyTaken;
    }
    med.taken_times.push(time.to_string());
    med.taken_times.sort();
    med.taken_today = fully_taken(med);
    TakeOutcome::Recorded
}

/// Drop taken entries that no longer belong to the schedule, then recompute
/// the fully-taken flag. Called after a schedule edit.
pub fn prune_taken(med: &mut Medication) {
    let resolved = dose_times(med);
    med.taken_times.retain(|t| resolved.contains(t));
    med.taken_today = fully_taken(med);
}
