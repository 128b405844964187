use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the server persists: one record per username.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Store {
    pub users: BTreeMap<String, UserRecord>,
}

/// A user's full slice of the store. Saving a record replaces it wholesale,
/// so a failed write can never leave a mixed old/new medication set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub profile: UserProfile,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub side_effects: Vec<SideEffectReport>,
    #[serde(default)]
    pub adherence_history: Vec<AdherenceRecord>,
    #[serde(default = "first_id")]
    pub next_medication_id: u64,
    #[serde(default = "first_id")]
    pub next_appointment_id: u64,
    #[serde(default = "first_id")]
    pub next_side_effect_id: u64,
}

fn first_id() -> u64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_user_type")]
    pub user_type: String,
    pub created_at: String,
}

fn default_user_type() -> String {
    "patient".to_string()
}

/// One medication with its dosing schedule and today's taken-set.
///
/// `reminder_times` is only populated for multi-dose schedules; a single
/// dose rides in the legacy `time` field alone and resolves through the
/// fallback path. `taken_times` holds the clock-times already administered
/// on `taken_date`; it is cleared lazily when a new day is first seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: u64,
    pub name: String,
    pub dosage_type: String,
    pub dosage_amount: String,
    pub frequency: String,
    pub time: String,
    #[serde(default)]
    pub reminder_times: Vec<String>,
    #[serde(default)]
    pub taken_times: Vec<String>,
    #[serde(default)]
    pub taken_today: bool,
    #[serde(default)]
    pub taken_date: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub instructions: String,
    pub created_at: String,
}

fn default_color() -> String {
    "blue".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    pub doctor: String,
    pub specialty: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideEffectReport {
    pub id: u64,
    pub medication: String,
    pub severity: String,
    #[serde(default, rename = "type")]
    pub effect_type: String,
    pub description: String,
    pub date: String,
    pub reported_at: String,
}

/// At most one of these per user per calendar day; upserted on every
/// dose-status change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdherenceRecord {
    pub date: String,
    pub adherence: f64,
    pub updated: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoseStatus {
    Taken,
    Upcoming,
    Missed,
}

/// Derived per classify call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoseEvent {
    pub medication_id: u64,
    pub name: String,
    pub time: String,
    pub dosage_amount: String,
    pub color: String,
    pub status: DoseStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct Classified {
    pub missed: Vec<DoseEvent>,
    pub upcoming: Vec<DoseEvent>,
    pub taken: Vec<DoseEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DueReminder {
    pub medication_id: u64,
    pub name: String,
    pub dosage_amount: String,
    pub color: String,
    pub times: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub name: String,
    pub age: u32,
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub user_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct NewMedicationRequest {
    pub name: String,
    pub dosage_type: String,
    pub dosage_amount: String,
    pub frequency: String,
    pub reminder_times: Option<Vec<String>>,
    pub color: Option<String>,
    pub instructions: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMedicationRequest {
    pub name: Option<String>,
    pub dosage_type: Option<String>,
    pub dosage_amount: Option<String>,
    pub frequency: Option<String>,
    pub reminder_times: Option<Vec<String>>,
    pub color: Option<String>,
    pub instructions: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DoseActionRequest {
    pub time: String,
}

#[derive(Debug, Deserialize)]
pub struct DueNowQuery {
    pub window: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct NewAppointmentRequest {
    pub doctor: String,
    pub specialty: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct NewSideEffectRequest {
    pub medication: String,
    pub severity: String,
    #[serde(default, rename = "type")]
    pub effect_type: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub name: String,
    pub age: u32,
    pub email: String,
    pub phone: String,
    pub user_type: String,
    pub age_category: String,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub date: String,
    pub time: String,
    pub adherence: f64,
    pub missed: Vec<DoseEvent>,
    pub upcoming: Vec<DoseEvent>,
    pub taken: Vec<DoseEvent>,
    pub fully_taken: Vec<Medication>,
}

#[derive(Debug, Serialize)]
pub struct DueNowResponse {
    pub window_minutes: i64,
    pub due: Vec<DueReminder>,
}

#[derive(Debug, Serialize)]
pub struct DoseActionResponse {
    pub medication: Medication,
    pub adherence: f64,
}

#[derive(Debug, Serialize)]
pub struct UndoResponse {
    pub undone: bool,
    pub action: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AdherencePoint {
    pub date: String,
    pub adherence: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct AdherenceResponse {
    pub date: String,
    pub adherence: f64,
    pub last_7_days: Vec<AdherencePoint>,
    pub average: f64,
    pub recorded_days: usize,
}
