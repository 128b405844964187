use chrono::Local;
use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct ProfileDto {
    username: String,
    name: String,
    age_category: String,
}

#[derive(Debug, Deserialize)]
struct MedicationDto {
    id: u64,
    name: String,
    time: String,
    reminder_times: Vec<String>,
    taken_times: Vec<String>,
    taken_today: bool,
}

#[derive(Debug, Deserialize)]
struct DoseDto {
    medication_id: u64,
    time: String,
}

#[derive(Debug, Deserialize)]
struct ChecklistDto {
    date: String,
    time: String,
    adherence: f64,
    missed: Vec<DoseDto>,
    upcoming: Vec<DoseDto>,
    taken: Vec<DoseDto>,
    fully_taken: Vec<MedicationDto>,
}

#[derive(Debug, Deserialize)]
struct DoseActionDto {
    medication: MedicationDto,
    adherence: f64,
}

#[derive(Debug, Deserialize)]
struct UndoDto {
    undone: bool,
    action: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DueItemDto {
    medication_id: u64,
    times: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DueNowDto {
    window_minutes: i64,
    due: Vec<DueItemDto>,
}

#[derive(Debug, Deserialize)]
struct AdherencePointDto {
    date: String,
    adherence: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct AdherenceDto {
    date: String,
    adherence: f64,
    last_7_days: Vec<AdherencePointDto>,
    average: f64,
    recorded_days: usize,
}

#[derive(Debug, Deserialize)]
struct AppointmentDto {
    id: u64,
    doctor: String,
}

#[derive(Debug, Deserialize)]
struct SideEffectDto {
    id: u64,
    medication: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("medtimer_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

fn unique_user(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{prefix}_{nanos}")
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(base_url.to_string()).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_medtimer"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn register_user(client: &Client, base_url: &str, username: &str, age: u32) -> ProfileDto {
    client
        .post(format!("{base_url}/api/register"))
        .json(&serde_json::json!({
            "username": username,
            "name": "Test Person",
            "age": age,
            "password": "secret",
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn add_medication(
    client: &Client,
    base_url: &str,
    username: &str,
    name: &str,
    frequency: &str,
    times: Option<Vec<String>>,
) -> MedicationDto {
    let response = client
        .post(format!("{base_url}/api/users/{username}/medications"))
        .json(&serde_json::json!({
            "name": name,
            "dosage_type": "pill",
            "dosage_amount": "100mg",
            "frequency": frequency,
            "reminder_times": times,
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

fn now_clock() -> String {
    Local::now().format("%H:%M").to_string()
}

/// A clock time `minutes` away from now, clamped to today's edges so a
/// test run near midnight still gets two distinct in-day times.
fn offset_clock(minutes: i64) -> String {
    let now = Local::now();
    let shifted = now + chrono::Duration::minutes(minutes);
    if shifted.date_naive() == now.date_naive() {
        shifted.format("%H:%M").to_string()
    } else if minutes < 0 {
        "00:00".to_string()
    } else {
        "23:59".to_string()
    }
}

#[tokio::test]
async fn http_register_login_and_profile() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let username = unique_user("ada");

    let profile = register_user(&client, &server.base_url, &username, 34).await;
    assert_eq!(profile.username, username);
    assert_eq!(profile.age_category, "adult");

    let login: ProfileDto = client
        .post(format!("{}/api/login", server.base_url))
        .json(&serde_json::json!({ "username": username, "password": "secret" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(login.name, "Test Person");

    let fetched: ProfileDto = client
        .get(format!("{}/api/users/{username}/profile", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched.username, username);
}

#[tokio::test]
async fn http_register_duplicate_and_bad_login() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let username = unique_user("dup");

    register_user(&client, &server.base_url, &username, 70).await;

    let duplicate = client
        .post(format!("{}/api/register", server.base_url))
        .json(&serde_json::json!({
            "username": username,
            "name": "Other",
            "age": 30,
            "password": "pw",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);

    let wrong_password = client
        .post(format!("{}/api/login", server.base_url))
        .json(&serde_json::json!({ "username": username, "password": "nope" }))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);

    let unknown = client
        .post(format!("{}/api/login", server.base_url))
        .json(&serde_json::json!({ "username": "nobody-here", "password": "pw" }))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_medication_defaults_from_frequency() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let username = unique_user("freq");
    register_user(&client, &server.base_url, &username, 40).await;

    // multi-dose frequency with no explicit times -> table, full list stored
    let twice = add_medication(&client, &server.base_url, &username, "Metoprolol", "twice-daily", None).await;
    assert_eq!(twice.time, "08:00");
    assert_eq!(twice.reminder_times, vec!["08:00", "20:00"]);

    // single-dose schedules keep the one time in `time` alone
    let once = add_medication(&client, &server.base_url, &username, "Vitamin D", "once-daily", None).await;
    assert_eq!(once.time, "09:00");
    assert!(once.reminder_times.is_empty());

    let unknown = add_medication(&client, &server.base_url, &username, "Mystery", "whenever", None).await;
    assert_eq!(unknown.time, "09:00");
    assert!(unknown.reminder_times.is_empty());

    // explicit times win over the frequency table and are canonicalised
    let custom = add_medication(
        &client,
        &server.base_url,
        &username,
        "Insulin",
        "twice-daily",
        Some(vec!["7:30".to_string(), "19:30".to_string()]),
    )
    .await;
    assert_eq!(custom.time, "07:30");
    assert_eq!(custom.reminder_times, vec!["07:30", "19:30"]);
}

#[tokio::test]
async fn http_checklist_take_and_adherence() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let username = unique_user("dose");
    register_user(&client, &server.base_url, &username, 55).await;

    let early = offset_clock(-120);
    let late = offset_clock(120);
    let med = add_medication(
        &client,
        &server.base_url,
        &username,
        "Aspirin",
        "twice-daily",
        Some(vec![early.clone(), late.clone()]),
    )
    .await;

    let checklist: ChecklistDto = client
        .get(format!("{}/api/users/{username}/checklist", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(checklist.adherence, 0.0);
    assert!(checklist.taken.is_empty());
    assert!(checklist.fully_taken.is_empty());
    assert!(!checklist.date.is_empty());

    // each configured time lands in exactly the bucket its comparison with
    // the server clock dictates (equal counts as upcoming)
    for time in [&early, &late] {
        let in_missed = checklist.missed.iter().any(|d| &d.time == time);
        let in_upcoming = checklist.upcoming.iter().any(|d| &d.time == time);
        if time.as_str() < checklist.time.as_str() {
            assert!(in_missed && !in_upcoming, "{time} should be missed");
        } else {
            assert!(in_upcoming && !in_missed, "{time} should be upcoming");
        }
    }

    let take: DoseActionDto = client
        .post(format!(
            "{}/api/users/{username}/medications/{}/take",
            server.base_url, med.id
        ))
        .json(&serde_json::json!({ "time": early }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(take.medication.taken_times, vec![early.clone()]);
    assert_eq!(take.adherence, 50.0);
    assert!(!take.medication.taken_today);

    // idempotent: the same dose again changes nothing
    let again: DoseActionDto = client
        .post(format!(
            "{}/api/users/{username}/medications/{}/take",
            server.base_url, med.id
        ))
        .json(&serde_json::json!({ "time": early }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(again.medication.taken_times, vec![early.clone()]);
    assert_eq!(again.adherence, 50.0);

    let checklist: ChecklistDto = client
        .get(format!("{}/api/users/{username}/checklist", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(checklist.taken.len(), 1);
    assert_eq!(checklist.taken[0].medication_id, med.id);
    assert_eq!(checklist.taken[0].time, early);

    // taking the second dose completes the medication
    let done: DoseActionDto = client
        .post(format!(
            "{}/api/users/{username}/medications/{}/take",
            server.base_url, med.id
        ))
        .json(&serde_json::json!({ "time": late }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(done.medication.taken_today);
    assert_eq!(done.adherence, 100.0);

    let checklist: ChecklistDto = client
        .get(format!("{}/api/users/{username}/checklist", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(checklist.missed.is_empty());
    assert!(checklist.upcoming.is_empty());
    assert_eq!(checklist.taken.len(), 2);
    assert_eq!(checklist.fully_taken.len(), 1);

    // bad inputs
    let invalid = client
        .post(format!(
            "{}/api/users/{username}/medications/{}/take",
            server.base_url, med.id
        ))
        .json(&serde_json::json!({ "time": "not-a-time" }))
        .send()
        .await
        .unwrap();
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

    let unscheduled = client
        .post(format!(
            "{}/api/users/{username}/medications/{}/take",
            server.base_url, med.id
        ))
        .json(&serde_json::json!({ "time": "03:33" }))
        .send()
        .await
        .unwrap();
    assert_eq!(unscheduled.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_undo_rolls_back_most_recent_action() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let username = unique_user("undo");
    register_user(&client, &server.base_url, &username, 28).await;

    let time = offset_clock(-60);
    let med = add_medication(
        &client,
        &server.base_url,
        &username,
        "Lisinopril",
        "once-daily",
        Some(vec![time.clone()]),
    )
    .await;

    let take: DoseActionDto = client
        .post(format!(
            "{}/api/users/{username}/medications/{}/take",
            server.base_url, med.id
        ))
        .json(&serde_json::json!({ "time": time }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(take.medication.taken_today);

    let undo: UndoDto = client
        .post(format!("{}/api/users/{username}/undo", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(undo.undone);
    assert!(matches!(undo.action.as_deref(), Some("take_now") | Some("take_late")));

    let meds: Vec<MedicationDto> = client
        .get(format!("{}/api/users/{username}/medications", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(meds.len(), 1);
    assert!(meds[0].taken_times.is_empty());
    assert!(!meds[0].taken_today);

    // next undo reverses the add itself
    let undo: UndoDto = client
        .post(format!("{}/api/users/{username}/undo", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(undo.undone);
    assert_eq!(undo.action.as_deref(), Some("add_medication"));

    let meds: Vec<MedicationDto> = client
        .get(format!("{}/api/users/{username}/medications", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(meds.is_empty());

    // empty stack is a reported no-op
    let undo: UndoDto = client
        .post(format!("{}/api/users/{username}/undo", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!undo.undone);
    assert!(undo.action.is_none());
}

#[tokio::test]
async fn http_skip_is_advisory() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let username = unique_user("skip");
    register_user(&client, &server.base_url, &username, 45).await;

    let time = offset_clock(-30);
    let med = add_medication(
        &client,
        &server.base_url,
        &username,
        "Atorvastatin",
        "once-daily",
        Some(vec![time.clone()]),
    )
    .await;

    let skip: DoseActionDto = client
        .post(format!(
            "{}/api/users/{username}/medications/{}/skip",
            server.base_url, med.id
        ))
        .json(&serde_json::json!({ "time": time }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(skip.medication.taken_times.is_empty());
    assert_eq!(skip.adherence, 0.0);

    let meds: Vec<MedicationDto> = client
        .get(format!("{}/api/users/{username}/medications", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(meds[0].taken_times.is_empty());

    // the skip still left an undoable entry
    let undo: UndoDto = client
        .post(format!("{}/api/users/{username}/undo", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(undo.undone);
    assert_eq!(undo.action.as_deref(), Some("skip_dose"));
}

#[tokio::test]
async fn http_due_now_symmetric_window() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let username = unique_user("due");
    register_user(&client, &server.base_url, &username, 60).await;

    // one dose right now, one far away
    let near = now_clock();
    let far = if near.as_str() < "12:00" { "23:00" } else { "01:00" };
    let med = add_medication(
        &client,
        &server.base_url,
        &username,
        "Levothyroxine",
        "twice-daily",
        Some(vec![near.clone(), far.to_string()]),
    )
    .await;

    let due: DueNowDto = client
        .get(format!(
            "{}/api/users/{username}/due-now?window=5",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(due.window_minutes, 5);
    assert_eq!(due.due.len(), 1);
    assert_eq!(due.due[0].medication_id, med.id);
    assert_eq!(due.due[0].times, vec![near.clone()]);

    // a taken dose is no longer due
    let response = client
        .post(format!(
            "{}/api/users/{username}/medications/{}/take",
            server.base_url, med.id
        ))
        .json(&serde_json::json!({ "time": near }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let due: DueNowDto = client
        .get(format!(
            "{}/api/users/{username}/due-now?window=5",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(due.due.is_empty());

    let negative = client
        .get(format!(
            "{}/api/users/{username}/due-now?window=-1",
            server.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(negative.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_adherence_series_shape() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let username = unique_user("adh");
    register_user(&client, &server.base_url, &username, 33).await;

    let time = offset_clock(-60);
    let med = add_medication(
        &client,
        &server.base_url,
        &username,
        "Amlodipine",
        "once-daily",
        Some(vec![time.clone()]),
    )
    .await;
    let response = client
        .post(format!(
            "{}/api/users/{username}/medications/{}/take",
            server.base_url, med.id
        ))
        .json(&serde_json::json!({ "time": time }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let series: AdherenceDto = client
        .get(format!("{}/api/users/{username}/adherence", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(series.last_7_days.len(), 7);
    assert_eq!(series.last_7_days[6].date, series.date);
    assert_eq!(series.last_7_days[6].adherence, Some(100.0));
    assert_eq!(series.adherence, 100.0);
    assert_eq!(series.recorded_days, 1);
    assert_eq!(series.average, 100.0);
    // the six earlier days were never recorded
    assert!(series.last_7_days[..6].iter().all(|p| p.adherence.is_none()));
}

#[tokio::test]
async fn http_update_prunes_taken_set() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let username = unique_user("edit");
    register_user(&client, &server.base_url, &username, 38).await;

    let kept = offset_clock(-90);
    let dropped = offset_clock(-45);
    let med = add_medication(
        &client,
        &server.base_url,
        &username,
        "Warfarin",
        "twice-daily",
        Some(vec![kept.clone(), dropped.clone()]),
    )
    .await;

    for time in [&kept, &dropped] {
        let response = client
            .post(format!(
                "{}/api/users/{username}/medications/{}/take",
                server.base_url, med.id
            ))
            .json(&serde_json::json!({ "time": time }))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    // narrow the schedule to one time; the other taken entry is pruned
    let updated: MedicationDto = client
        .put(format!(
            "{}/api/users/{username}/medications/{}",
            server.base_url, med.id
        ))
        .json(&serde_json::json!({ "reminder_times": [kept] }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated.time, kept);
    assert!(updated.reminder_times.is_empty());
    assert_eq!(updated.taken_times, vec![kept.clone()]);
    assert!(updated.taken_today);
}

#[tokio::test]
async fn http_appointments_and_side_effects_crud() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let username = unique_user("extras");
    register_user(&client, &server.base_url, &username, 50).await;

    let appointment: AppointmentDto = client
        .post(format!("{}/api/users/{username}/appointments", server.base_url))
        .json(&serde_json::json!({
            "doctor": "Dr. Chen",
            "specialty": "cardiology",
            "date": "2026-09-15",
            "time": "10:30",
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(appointment.doctor, "Dr. Chen");

    let report: SideEffectDto = client
        .post(format!("{}/api/users/{username}/side-effects", server.base_url))
        .json(&serde_json::json!({
            "medication": "Aspirin",
            "severity": "mild",
            "type": "nausea",
            "description": "slight nausea after the morning dose",
            "date": "2026-08-29",
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(report.medication, "Aspirin");

    let appointments: Vec<AppointmentDto> = client
        .get(format!("{}/api/users/{username}/appointments", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(appointments.len(), 1);

    let deleted = client
        .delete(format!(
            "{}/api/users/{username}/appointments/{}",
            server.base_url, appointment.id
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let deleted = client
        .delete(format!(
            "{}/api/users/{username}/side-effects/{}",
            server.base_url, report.id
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let reports: Vec<SideEffectDto> = client
        .get(format!("{}/api/users/{username}/side-effects", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(reports.is_empty());
}

#[tokio::test]
async fn http_account_deletion() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let username = unique_user("gone");
    register_user(&client, &server.base_url, &username, 25).await;

    let deleted = client
        .delete(format!("{}/api/users/{username}", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let profile = client
        .get(format!("{}/api/users/{username}/profile", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(profile.status(), StatusCode::NOT_FOUND);
}
