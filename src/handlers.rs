use crate::classify::{self, TakeOutcome};
use crate::errors::AppError;
use crate::models::{
    AdherenceResponse, Appointment, ChecklistResponse, DoseActionRequest, DoseActionResponse,
    DueNowQuery, DueNowResponse, LoginRequest, Medication, NewAppointmentRequest,
    NewMedicationRequest, NewSideEffectRequest, ProfileResponse, RegisterRequest, SideEffectReport,
    Store, UndoResponse, UpdateMedicationRequest, UserProfile, UserRecord,
};
use crate::schedule::{self, canonicalize_clock, roll_to_day};
use crate::state::AppState;
use crate::stats::{build_adherence, upsert_adherence};
use crate::storage::persist_store;
use crate::ui::render_index;
use crate::undo::UndoStack;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::Local;
use tracing::info;

pub async fn index(State(_state): State<AppState>) -> Html<String> {
    Html(render_index(&today_string()))
}

// ---- accounts ----

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let username = payload.username.trim().to_string();
    if username.is_empty() {
        return Err(AppError::bad_request("username must not be empty"));
    }
    if payload.name.trim().is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }
    if payload.password.is_empty() {
        return Err(AppError::bad_request("password must not be empty"));
    }

    let mut store = state.store.lock().await;
    if store.users.contains_key(&username) {
        return Err(AppError::bad_request("username already registered"));
    }

    let profile = UserProfile {
        username: username.clone(),
        name: payload.name.trim().to_string(),
        age: payload.age,
        email: payload.email,
        phone: payload.phone,
        password: payload.password,
        user_type: payload.user_type.unwrap_or_else(|| "patient".to_string()),
        created_at: timestamp_string(),
    };
    let response = profile_response(&profile);
    store.users.insert(
        username.clone(),
        UserRecord {
            profile,
            medications: Vec::new(),
            appointments: Vec::new(),
            side_effects: Vec::new(),
            adherence_history: Vec::new(),
            next_medication_id: 1,
            next_appointment_id: 1,
            next_side_effect_id: 1,
        },
    );
    persist_store(&state.data_path, &store).await?;

    info!("registered user {username}");
    Ok(Json(response))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let store = state.store.lock().await;
    let record = store
        .users
        .get(payload.username.trim())
        .ok_or_else(|| AppError::not_found("unknown user"))?;
    if record.profile.password != payload.password {
        return Err(AppError::bad_request("wrong password"));
    }
    Ok(Json(profile_response(&record.profile)))
}

pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ProfileResponse>, AppError> {
    let store = state.store.lock().await;
    let record = user(&store, &username)?;
    Ok(Json(profile_response(&record.profile)))
}

pub async fn delete_account(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    if store.users.remove(&username).is_none() {
        return Err(AppError::not_found("unknown user"));
    }
    state.undo.lock().await.remove(&username);
    persist_store(&state.data_path, &store).await?;

    info!("deleted account {username}");
    Ok(StatusCode::NO_CONTENT)
}

// ---- medications ----

pub async fn list_medications(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<Medication>>, AppError> {
    let mut store = state.store.lock().await;
    let today = today_string();
    let record = user_mut(&mut store, &username)?;
    let rolled = roll_to_day(record, &today);
    let medications = record.medications.clone();
    if rolled {
        persist_store(&state.data_path, &store).await?;
    }
    Ok(Json(medications))
}

pub async fn create_medication(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(payload): Json<NewMedicationRequest>,
) -> Result<Json<Medication>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::bad_request("medication name must not be empty"));
    }

    let mut store = state.store.lock().await;
    let today = today_string();
    let now = timestamp_string();
    let record = user_mut(&mut store, &username)?;
    roll_to_day(record, &today);

    push_snapshot(&state, &username, "add_medication", &now, &record.medications).await;

    let times = choose_times(payload.reminder_times.as_deref(), &payload.frequency);
    let mut med = Medication {
        id: record.next_medication_id,
        name: payload.name.trim().to_string(),
        dosage_type: payload.dosage_type,
        dosage_amount: payload.dosage_amount,
        frequency: payload.frequency,
        time: String::new(),
        reminder_times: Vec::new(),
        taken_times: Vec::new(),
        taken_today: false,
        taken_date: today.clone(),
        color: payload.color.unwrap_or_else(|| "blue".to_string()),
        instructions: payload.instructions.unwrap_or_default(),
        created_at: now.clone(),
    };
    apply_times(&mut med, times);
    record.next_medication_id += 1;
    record.medications.push(med.clone());

    let pct = classify::adherence(&record.medications);
    upsert_adherence(&mut record.adherence_history, &today, pct, &now);
    persist_store(&state.data_path, &store).await?;

    info!("added medication {} for {username}", med.name);
    Ok(Json(med))
}

pub async fn update_medication(
    State(state): State<AppState>,
    Path((username, id)): Path<(String, u64)>,
    Json(payload): Json<UpdateMedicationRequest>,
) -> Result<Json<Medication>, AppError> {
    let mut store = state.store.lock().await;
    let today = today_string();
    let now = timestamp_string();
    let record = user_mut(&mut store, &username)?;
    roll_to_day(record, &today);

    let index = medication_index(record, id)?;
    push_snapshot(&state, &username, "edit_medication", &now, &record.medications).await;

    let med = &mut record.medications[index];
    if let Some(name) = payload.name {
        if !name.trim().is_empty() {
            med.name = name.trim().to_string();
        }
    }
    if let Some(dosage_type) = payload.dosage_type {
        med.dosage_type = dosage_type;
    }
    if let Some(dosage_amount) = payload.dosage_amount {
        med.dosage_amount = dosage_amount;
    }
    if let Some(color) = payload.color {
        med.color = color;
    }
    if let Some(instructions) = payload.instructions {
        med.instructions = instructions;
    }

    // Explicit times win; otherwise a frequency change regenerates them
    // from the table. Taken entries outside the new schedule are pruned.
    let frequency_changed = payload
        .frequency
        .as_deref()
        .is_some_and(|f| f != med.frequency);
    if let Some(frequency) = payload.frequency {
        med.frequency = frequency;
    }
    if let Some(requested) = payload.reminder_times.as_deref() {
        let times = choose_times(Some(requested), &med.frequency);
        apply_times(med, times);
        classify::prune_taken(med);
    } else if frequency_changed {
        apply_times(med, schedule::resolve(&med.frequency));
        classify::prune_taken(med);
    }
    let med = med.clone();

    let pct = classify::adherence(&record.medications);
    upsert_adherence(&mut record.adherence_history, &today, pct, &now);
    persist_store(&state.data_path, &store).await?;

    Ok(Json(med))
}

pub async fn delete_medication(
    State(state): State<AppState>,
    Path((username, id)): Path<(String, u64)>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    let today = today_string();
    let now = timestamp_string();
    let record = user_mut(&mut store, &username)?;

    let index = medication_index(record, id)?;
    push_snapshot(&state, &username, "delete_medication", &now, &record.medications).await;
    let removed = record.medications.remove(index);

    let pct = classify::adherence(&record.medications);
    upsert_adherence(&mut record.adherence_history, &today, pct, &now);
    persist_store(&state.data_path, &store).await?;

    info!("deleted medication {} for {username}", removed.name);
    Ok(StatusCode::NO_CONTENT)
}

// ---- dose engine over HTTP ----

pub async fn checklist(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ChecklistResponse>, AppError> {
    let mut store = state.store.lock().await;
    let today = today_string();
    let clock = clock_string();
    let record = user_mut(&mut store, &username)?;
    let rolled = roll_to_day(record, &today);

    let classified = classify::classify(&record.medications, &clock);
    let fully_taken: Vec<Medication> = record
        .medications
        .iter()
        .filter(|med| classify::fully_taken(med))
        .cloned()
        .collect();
    let adherence = classify::adherence(&record.medications);
    if rolled {
        persist_store(&state.data_path, &store).await?;
    }

    Ok(Json(ChecklistResponse {
        date: today,
        time: clock,
        adherence,
        missed: classified.missed,
        upcoming: classified.upcoming,
        taken: classified.taken,
        fully_taken,
    }))
}

pub async fn due_now(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<DueNowQuery>,
) -> Result<Json<DueNowResponse>, AppError> {
    let window_minutes = query.window.unwrap_or(5);
    if window_minutes < 0 {
        return Err(AppError::bad_request("window must not be negative"));
    }

    let mut store = state.store.lock().await;
    let today = today_string();
    let clock = clock_string();
    let record = user_mut(&mut store, &username)?;
    let rolled = roll_to_day(record, &today);
    let due = classify::due_now(&record.medications, &clock, window_minutes);
    if rolled {
        persist_store(&state.data_path, &store).await?;
    }

    Ok(Json(DueNowResponse { window_minutes, due }))
}

pub async fn take_dose(
    State(state): State<AppState>,
    Path((username, id)): Path<(String, u64)>,
    Json(payload): Json<DoseActionRequest>,
) -> Result<Json<DoseActionResponse>, AppError> {
    let time = canonicalize_clock(&payload.time)
        .ok_or_else(|| AppError::bad_request("invalid dose time"))?;

    let mut store = state.store.lock().await;
    let today = today_string();
    let clock = clock_string();
    let now = timestamp_string();
    let record = user_mut(&mut store, &username)?;
    roll_to_day(record, &today);

    let index = medication_index(record, id)?;
    if !schedule::dose_times(&record.medications[index]).contains(&time) {
        return Err(AppError::bad_request("time is not one of the scheduled doses"));
    }
    if record.medications[index].taken_times.contains(&time) {
        // idempotent no-op: nothing to snapshot or persist
        return Ok(Json(DoseActionResponse {
            medication: record.medications[index].clone(),
            adherence: classify::adherence(&record.medications),
        }));
    }

    let action = if time.as_str() >= clock.as_str() {
        "take_now"
    } else {
        "take_late"
    };
    push_snapshot(&state, &username, action, &now, &record.medications).await;

    let outcome = classify::mark_taken(&mut record.medications[index], &time);
    debug_assert_eq!(outcome, TakeOutcome::Recorded);
    let medication = record.medications[index].clone();

    let adherence = classify::adherence(&record.medications);
    upsert_adherence(&mut record.adherence_history, &today, adherence, &now);
    persist_store(&state.data_path, &store).await?;

    info!("{username} took {} at {time}", medication.name);
    Ok(Json(DoseActionResponse {
        medication,
        adherence,
    }))
}

pub async fn skip_dose(
    State(state): State<AppState>,
    Path((username, id)): Path<(String, u64)>,
    Json(payload): Json<DoseActionRequest>,
) -> Result<Json<DoseActionResponse>, AppError> {
    let time = canonicalize_clock(&payload.time)
        .ok_or_else(|| AppError::bad_request("invalid dose time"))?;

    let mut store = state.store.lock().await;
    let today = today_string();
    let now = timestamp_string();
    let record = user_mut(&mut store, &username)?;
    roll_to_day(record, &today);

    let index = medication_index(record, id)?;
    if !schedule::dose_times(&record.medications[index]).contains(&time) {
        return Err(AppError::bad_request("time is not one of the scheduled doses"));
    }

    // Advisory: the skip is undoable and logged, but no set changes.
    push_snapshot(&state, &username, "skip_dose", &now, &record.medications).await;
    let medication = record.medications[index].clone();

    info!("{username} skipped {} at {time}", medication.name);
    Ok(Json(DoseActionResponse {
        medication,
        adherence: classify::adherence(&record.medications),
    }))
}

pub async fn undo(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UndoResponse>, AppError> {
    let mut store = state.store.lock().await;
    let today = today_string();
    let now = timestamp_string();
    let record = user_mut(&mut store, &username)?;

    let entry = {
        let mut undo_map = state.undo.lock().await;
        undo_map.get_mut(&username).and_then(UndoStack::pop)
    };
    let Some(entry) = entry else {
        return Ok(Json(UndoResponse {
            undone: false,
            action: None,
        }));
    };

    // Full-state rollback: the snapshot replaces the list wholesale.
    record.medications = entry.medications;
    let pct = classify::adherence(&record.medications);
    upsert_adherence(&mut record.adherence_history, &today, pct, &now);
    persist_store(&state.data_path, &store).await?;

    info!("{username} undid {}", entry.action);
    Ok(Json(UndoResponse {
        undone: true,
        action: Some(entry.action),
    }))
}

pub async fn adherence(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<AdherenceResponse>, AppError> {
    let mut store = state.store.lock().await;
    let today = today_string();
    let record = user_mut(&mut store, &username)?;
    let rolled = roll_to_day(record, &today);
    let response = build_adherence(record);
    if rolled {
        persist_store(&state.data_path, &store).await?;
    }
    Ok(Json(response))
}

// ---- appointments ----

pub async fn list_appointments(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let store = state.store.lock().await;
    let record = user(&store, &username)?;
    Ok(Json(record.appointments.clone()))
}

pub async fn create_appointment(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(payload): Json<NewAppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    if payload.doctor.trim().is_empty() {
        return Err(AppError::bad_request("doctor must not be empty"));
    }

    let mut store = state.store.lock().await;
    let record = user_mut(&mut store, &username)?;
    let appointment = Appointment {
        id: record.next_appointment_id,
        doctor: payload.doctor.trim().to_string(),
        specialty: payload.specialty,
        date: payload.date,
        time: payload.time,
        location: payload.location,
        phone: payload.phone,
        notes: payload.notes,
        created_at: timestamp_string(),
    };
    record.next_appointment_id += 1;
    record.appointments.push(appointment.clone());
    persist_store(&state.data_path, &store).await?;

    Ok(Json(appointment))
}

pub async fn delete_appointment(
    State(state): State<AppState>,
    Path((username, id)): Path<(String, u64)>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    let record = user_mut(&mut store, &username)?;
    let before = record.appointments.len();
    record.appointments.retain(|a| a.id != id);
    if record.appointments.len() == before {
        return Err(AppError::not_found("unknown appointment"));
    }
    persist_store(&state.data_path, &store).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---- side-effect reports ----

pub async fn list_side_effects(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<SideEffectReport>>, AppError> {
    let store = state.store.lock().await;
    let record = user(&store, &username)?;
    Ok(Json(record.side_effects.clone()))
}

pub async fn create_side_effect(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(payload): Json<NewSideEffectRequest>,
) -> Result<Json<SideEffectReport>, AppError> {
    if payload.medication.trim().is_empty() {
        return Err(AppError::bad_request("medication must not be empty"));
    }

    let mut store = state.store.lock().await;
    let record = user_mut(&mut store, &username)?;
    let report = SideEffectReport {
        id: record.next_side_effect_id,
        medication: payload.medication.trim().to_string(),
        severity: payload.severity,
        effect_type: payload.effect_type,
        description: payload.description,
        date: payload.date,
        reported_at: timestamp_string(),
    };
    record.next_side_effect_id += 1;
    record.side_effects.push(report.clone());
    persist_store(&state.data_path, &store).await?;

    Ok(Json(report))
}

pub async fn delete_side_effect(
    State(state): State<AppState>,
    Path((username, id)): Path<(String, u64)>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    let record = user_mut(&mut store, &username)?;
    let before = record.side_effects.len();
    record.side_effects.retain(|r| r.id != id);
    if record.side_effects.len() == before {
        return Err(AppError::not_found("unknown side-effect report"));
    }
    persist_store(&state.data_path, &store).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---- helpers ----

fn user<'a>(store: &'a Store, username: &str) -> Result<&'a UserRecord, AppError> {
    store
        .users
        .get(username)
        .ok_or_else(|| AppError::not_found("unknown user"))
}

fn user_mut<'a>(store: &'a mut Store, username: &str) -> Result<&'a mut UserRecord, AppError> {
    store
        .users
        .get_mut(username)
        .ok_or_else(|| AppError::not_found("unknown user"))
}

fn medication_index(record: &UserRecord, id: u64) -> Result<usize, AppError> {
    record
        .medications
        .iter()
        .position(|m| m.id == id)
        .ok_or_else(|| AppError::not_found("unknown medication"))
}

async fn push_snapshot(
    state: &AppState,
    username: &str,
    action: &str,
    at: &str,
    medications: &[Medication],
) {
    let mut undo_map = state.undo.lock().await;
    undo_map
        .entry(username.to_string())
        .or_default()
        .push(action, at, medications.to_vec());
}

/// Canonicalise the requested dose times, falling back to the frequency
/// table when none survive. Order is preserved, duplicates collapse.
fn choose_times(requested: Option<&[String]>, frequency: &str) -> Vec<String> {
    let mut times = Vec::new();
    if let Some(requested) = requested {
        for t in requested {
            if let Some(canonical) = canonicalize_clock(t) {
                if !times.contains(&canonical) {
                    times.push(canonical);
                }
            }
        }
    }
    if times.is_empty() {
        times = schedule::resolve(frequency);
    }
    times
}

/// Store the chosen times the way the rest of the code expects to read
/// them: `time` carries the first dose, `reminder_times` only holds the
/// full list when there is more than one dose.
fn apply_times(med: &mut Medication, times: Vec<String>) {
    med.time = times
        .first()
        .cloned()
        .unwrap_or_else(|| schedule::DEFAULT_DOSE_TIME.to_string());
    med.reminder_times = if times.len() > 1 { times } else { Vec::new() };
}

fn profile_response(profile: &UserProfile) -> ProfileResponse {
    ProfileResponse {
        username: profile.username.clone(),
        name: profile.name.clone(),
        age: profile.age,
        email: profile.email.clone(),
        phone: profile.phone.clone(),
        user_type: profile.user_type.clone(),
        age_category: age_category(profile.age).to_string(),
        created_at: profile.created_at.clone(),
    }
}

fn age_category(age: u32) -> &'static str {
    if age < 18 {
        "youth"
    } else if age <= 40 {
        "adult"
    } else {
        "senior"
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}

fn clock_string() -> String {
    Local::now().format("%H:%M").to_string()
}

fn timestamp_string() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
