use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/register", post(handlers::register))
        .route("/api/login", post(handlers::login))
        .route("/api/users/:username", delete(handlers::delete_account))
        .route("/api/users/:username/profile", get(handlers::get_profile))
        .route(
            "/api/users/:username/medications",
            get(handlers::list_medications).post(handlers::create_medication),
        )
        .route(
            "/api/users/:username/medications/:id",
            put(handlers::update_medication).delete(handlers::delete_medication),
        )
        .route("/api/users/:username/checklist", get(handlers::checklist))
        .route("/api/users/:username/due-now", get(handlers::due_now))
        .route(
            "/api/users/:username/medications/:id/take",
            post(handlers::take_dose),
        )
        .route(
            "/api/users/:username/medications/:id/skip",
            post(handlers::skip_dose),
        )
        .route("/api/users/:username/undo", post(handlers::undo))
        .route("/api/users/:username/adherence", get(handlers::adherence))
        .route(
            "/api/users/:username/appointments",
            get(handlers::list_appointments).post(handlers::create_appointment),
        )
        .route(
            "/api/users/:username/appointments/:id",
            delete(handlers::delete_appointment),
        )
        .route(
            "/api/users/:username/side-effects",
            get(handlers::list_side_effects).post(handlers::create_side_effect),
        )
        .route(
            "/api/users/:username/side-effects/:id",
            delete(handlers::delete_side_effect),
        )
        .with_state(state)
}
