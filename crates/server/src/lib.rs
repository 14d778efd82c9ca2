pub mod auth;
pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{
    Router,
    routing::{get, post},
};
use doc::ApiDoc;
use routes::{
    auth as auth_routes, clothing_deposit, health, reservation, root, shift, shift_report, team,
    time_entry, user,
};
use state::AppState;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the full HTTP application
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::dashboard))
        .route("/health", get(health::health))
        .route("/login", post(auth_routes::login))
        .route("/logout", post(auth_routes::logout))
        .route("/me", get(auth_routes::me))
        .route("/me/password", post(auth_routes::change_password))
        .route("/team", get(team::team))
        .route("/shifts", get(shift::list_shifts).post(shift::create_shift))
        .route(
            "/shifts/{id}",
            get(shift::get_shift)
                .put(shift::update_shift)
                .delete(shift::delete_shift),
        )
        .route(
            "/reservations",
            get(reservation::list_reservations).post(reservation::create_reservation),
        )
        .route(
            "/reservations/{id}",
            get(reservation::get_reservation)
                .put(reservation::update_reservation)
                .delete(reservation::delete_reservation),
        )
        .route(
            "/reports",
            get(shift_report::list_reports).post(shift_report::create_report),
        )
        .route(
            "/reports/{id}",
            get(shift_report::get_report)
                .put(shift_report::update_report)
                .delete(shift_report::delete_report),
        )
        .route(
            "/hours",
            get(time_entry::list_entries).post(time_entry::create_entry),
        )
        .route(
            "/hours/{id}",
            get(time_entry::get_entry)
                .put(time_entry::update_entry)
                .delete(time_entry::delete_entry),
        )
        .route(
            "/deposit",
            get(clothing_deposit::list_deposits).post(clothing_deposit::create_deposit),
        )
        .route(
            "/deposit/{id}",
            get(clothing_deposit::get_deposit)
                .put(clothing_deposit::update_deposit)
                .delete(clothing_deposit::delete_deposit),
        )
        .route(
            "/deposit/{id}/toggle",
            post(clothing_deposit::toggle_deposit),
        )
        .route("/users", get(user::list_users).post(user::create_user))
        .route(
            "/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}
