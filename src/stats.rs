use crate::classify;
use crate::models::{AdherencePoint, AdherenceRecord, AdherenceResponse, UserRecord};
use chrono::{Duration, Local, NaiveDate};

/// Insert or replace the adherence record for `date`. At most one record
/// exists per day; recomputing updates it in place.
pub fn upsert_adherence(history: &mut Vec<AdherenceRecord>, date: &str, adherence: f64, updated: &str) {
    if let Some(record) = history.iter_mut().find(|r| r.date == date) {
        record.adherence = adherence;
        record.updated = updated.to_string();
        return;
    }
    history.push(AdherenceRecord {
        date: date.to_string(),
        adherence,
        updated: updated.to_string(),
    });
}

pub fn build_adherence(record: &UserRecord) -> AdherenceResponse {
    build_adherence_at(Local::now().date_naive(), record)
}

/// Today's live percentage plus the last seven calendar days from the
/// adherence history. Days with no record stay null; the average covers the
/// recorded days only. Today's point always reflects the live medication
/// state, not a possibly stale record.
pub fn build_adherence_at(today: NaiveDate, record: &UserRecord) -> AdherenceResponse {
    let today_key = today.to_string();
    let today_adherence = classify::adherence(&record.medications);

    let mut last_7_days = Vec::with_capacity(7);
    let mut sum = 0.0;
    let mut recorded_days = 0usize;
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let key = date.to_string();
        let value = if key == today_key {
            Some(today_adherence)
        } else {
            record
                .adherence_history
                .iter()
                .find(|r| r.date == key)
                .map(|r| r.adherence)
        };
        if let Some(pct) = value {
            sum += pct;
            recorded_days += 1;
        }
        last_7_days.push(AdherencePoint {
            date: key,
            adherence: value,
        });
    }

    let average = if recorded_days == 0 {
        0.0
    } else {
        sum / recorded_days as f64
    };

    AdherenceResponse {
        date: today_key,
        adherence: today_adherence,
        last_7_days,
        average,
        recorded_days,
    }
}
