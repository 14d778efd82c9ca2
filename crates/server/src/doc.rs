use crate::routes::{
    auth, clothing_deposit, health, reservation, root, shift, shift_report, team, time_entry, user,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        root::dashboard,
        auth::login,
        auth::logout,
        auth::me,
        auth::change_password,
        team::team,
        shift::list_shifts,
        shift::get_shift,
        shift::create_shift,
        shift::update_shift,
        shift::delete_shift,
        reservation::list_reservations,
        reservation::get_reservation,
        reservation::create_reservation,
        reservation::update_reservation,
        reservation::delete_reservation,
        shift_report::list_reports,
        shift_report::get_report,
        shift_report::create_report,
        shift_report::update_report,
        shift_report::delete_report,
        time_entry::list_entries,
        time_entry::get_entry,
        time_entry::create_entry,
        time_entry::update_entry,
        time_entry::delete_entry,
        clothing_deposit::list_deposits,
        clothing_deposit::get_deposit,
        clothing_deposit::create_deposit,
        clothing_deposit::update_deposit,
        clothing_deposit::toggle_deposit,
        clothing_deposit::delete_deposit,
        user::list_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,
    ),
    components(schemas(crate::error::ErrorResponse)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and own account"),
        (name = "Dashboard", description = "Record counts"),
        (name = "Team", description = "Team directory"),
        (name = "Shifts", description = "Shift schedule"),
        (name = "Reservations", description = "Table bookings"),
        (name = "Shift reports", description = "End-of-shift reports"),
        (name = "Time entries", description = "Worked hours"),
        (name = "Clothing deposit", description = "Kleiderpfand"),
        (name = "Users", description = "Account management"),
        (name = "Health", description = "Liveness probe"),
    ),
    info(
        title = "BistroOps API",
        version = "1.0.0",
        description = "Shift management for restaurant teams",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
