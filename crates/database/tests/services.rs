use chrono::{NaiveDate, NaiveDateTime};
use database::{
    db::{create_connection, init_schema},
    error::ServiceError,
    services::{
        clothing_deposit::{ClothingDepositService, NewClothingDeposit},
        dashboard::DashboardService,
        reservation::{NewReservation, ReservationChanges, ReservationService},
        seed::SeedService,
        shift::{NewShift, ShiftService},
        shift_report::{NewShiftReport, ShiftReportService},
        time_entry::{NewTimeEntry, TimeEntryChanges, TimeEntryService},
        user::{NewUser, UserChanges, UserService},
    },
};
use models::role::Role;
use sea_orm::DatabaseConnection;

async fn setup() -> DatabaseConnection {
    let db = create_connection("sqlite::memory:").await.unwrap();
    init_schema(&db).await.unwrap();
    db
}

fn ts(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

async fn user_id(db: &DatabaseConnection, username: &str) -> i32 {
    UserService::find_by_username(db, username)
        .await
        .unwrap()
        .unwrap()
        .id
}

#[tokio::test]
async fn test_seed_accounts_authenticate() {
    let db = setup().await;

    for (username, password, role) in [
        ("admin", "admin123", Role::Manager),
        ("lead", "lead123", Role::ShiftLead),
        ("waiter", "waiter123", Role::Waiter),
    ] {
        let user = UserService::authenticate(&db, username, password)
            .await
            .unwrap()
            .expect("seed account should log in");
        assert_eq!(user.role, role);
    }

    assert!(
        UserService::authenticate(&db, "admin", "wrong")
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        UserService::authenticate(&db, "nobody", "admin123")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_seeding_is_idempotent_and_keeps_rotated_passwords() {
    let db = setup().await;
    let admin = user_id(&db, "admin").await;

    UserService::change_password(&db, admin, "admin123", "n3w-secret")
        .await
        .unwrap();

    let created = SeedService::ensure_seed_accounts(&db).await.unwrap();
    assert!(created.is_empty());
    assert_eq!(UserService::count(&db).await.unwrap(), 3);

    assert!(
        UserService::authenticate(&db, "admin", "admin123")
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        UserService::authenticate(&db, "admin", "n3w-secret")
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_change_password_requires_current_password() {
    let db = setup().await;
    let lead = user_id(&db, "lead").await;

    let err = UserService::change_password(&db, lead, "nope", "other")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = UserService::change_password(&db, lead, "lead123", "")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn test_user_management() {
    let db = setup().await;
    let admin = user_id(&db, "admin").await;

    let anna = UserService::create(
        &db,
        NewUser {
            username: "anna".into(),
            full_name: "Anna Berger".into(),
            role: Role::Waiter,
            password: "pw".into(),
        },
    )
    .await
    .unwrap();

    let duplicate = UserService::create(
        &db,
        NewUser {
            username: "anna".into(),
            full_name: String::new(),
            role: Role::Waiter,
            password: "pw".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(duplicate, ServiceError::Conflict(_)));

    let promoted = UserService::update(
        &db,
        anna.id,
        UserChanges {
            role: Some(Role::ShiftLead),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(promoted.role, Role::ShiftLead);
    assert_eq!(promoted.full_name, "Anna Berger");

    let self_delete = UserService::delete(&db, admin, admin).await.unwrap_err();
    assert!(matches!(self_delete, ServiceError::Conflict(_)));

    UserService::delete(&db, anna.id, admin).await.unwrap();
    let missing = UserService::delete(&db, anna.id, admin).await.unwrap_err();
    assert!(matches!(missing, ServiceError::NotFound { .. }));
}

#[tokio::test]
async fn test_team_order_is_role_desc_then_username() {
    let db = setup().await;

    UserService::create(
        &db,
        NewUser {
            username: "bert".into(),
            full_name: String::new(),
            role: Role::Waiter,
            password: "pw".into(),
        },
    )
    .await
    .unwrap();

    let names: Vec<String> = UserService::team(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();

    assert_eq!(names, ["bert", "waiter", "lead", "admin"]);
}

#[tokio::test]
async fn test_shift_listing_and_range_validation() {
    let db = setup().await;

    for day in [1, 3, 2] {
        ShiftService::create(
            &db,
            NewShift {
                employee: "Kellner".into(),
                role: "Service".into(),
                start: ts(day, 16),
                end: ts(day, 23),
            },
        )
        .await
        .unwrap();
    }

    let starts: Vec<NaiveDateTime> = ShiftService::list(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.start)
        .collect();
    assert_eq!(starts, [ts(3, 16), ts(2, 16), ts(1, 16)]);

    let err = ShiftService::create(
        &db,
        NewShift {
            employee: "Kellner".into(),
            role: String::new(),
            start: ts(4, 23),
            end: ts(4, 16),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn test_reservation_defaults_and_updates() {
    let db = setup().await;

    let booking = ReservationService::create(
        &db,
        NewReservation {
            customer: "Familie Huber".into(),
            size: None,
            at: ts(7, 19),
            notes: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(booking.size, 2);

    let updated = ReservationService::update(
        &db,
        booking.id,
        ReservationChanges {
            size: Some(6),
            notes: Some("Kinderstuhl".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.size, 6);
    assert_eq!(updated.notes.as_deref(), Some("Kinderstuhl"));
    assert_eq!(updated.customer, "Familie Huber");

    let err = ReservationService::update(
        &db,
        booking.id,
        ReservationChanges {
            size: Some(0),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    ReservationService::delete(&db, booking.id).await.unwrap();
    assert!(matches!(
        ReservationService::get(&db, booking.id).await.unwrap_err(),
        ServiceError::NotFound { .. }
    ));
}

#[tokio::test]
async fn test_time_entries_filter_by_owner_and_cascade() {
    let db = setup().await;
    let admin = user_id(&db, "admin").await;
    let waiter = user_id(&db, "waiter").await;
    let lead = user_id(&db, "lead").await;

    for (owner, day) in [(waiter, 1), (lead, 2), (waiter, 3)] {
        TimeEntryService::create(
            &db,
            NewTimeEntry {
                user_id: owner,
                start: ts(day, 10),
                end: ts(day, 18),
                note: None,
            },
        )
        .await
        .unwrap();
    }

    let own = TimeEntryService::list(&db, Some(waiter)).await.unwrap();
    assert_eq!(own.len(), 2);
    assert!(own.iter().all(|(entry, _)| entry.user_id == waiter));
    assert_eq!(own[0].0.start, ts(3, 10));
    assert_eq!(own[0].1.as_ref().unwrap().username, "waiter");

    assert_eq!(TimeEntryService::list(&db, None).await.unwrap().len(), 3);

    let unknown = TimeEntryService::create(
        &db,
        NewTimeEntry {
            user_id: 9999,
            start: ts(4, 10),
            end: ts(4, 12),
            note: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(unknown, ServiceError::Validation(_)));

    let entry_id = own[0].0.id;
    let bad_update = TimeEntryService::update(
        &db,
        entry_id,
        TimeEntryChanges {
            end: Some(ts(3, 9)),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(bad_update, ServiceError::Validation(_)));

    UserService::delete(&db, waiter, admin).await.unwrap();
    assert_eq!(TimeEntryService::list(&db, None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_shift_report_records_lead() {
    let db = setup().await;
    let lead = user_id(&db, "lead").await;

    let report = ShiftReportService::create(
        &db,
        lead,
        NewShiftReport {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            revenue: Some(2450.5),
            issues: Some("Spülmaschine defekt".into()),
            notes: None,
        },
    )
    .await
    .unwrap();

    let (stored, author) = ShiftReportService::get(&db, report.id).await.unwrap();
    assert_eq!(stored.lead_id, Some(lead));
    assert_eq!(author.unwrap().username, "lead");

    let err = ShiftReportService::create(
        &db,
        lead,
        NewShiftReport {
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            revenue: Some(-1.0),
            issues: None,
            notes: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn test_clothing_deposit_toggle() {
    let db = setup().await;
    let waiter = user_id(&db, "waiter").await;

    let deposit = ClothingDepositService::create(
        &db,
        NewClothingDeposit {
            user_id: waiter,
            item: "Schürze".into(),
            size: Some("M".into()),
            amount: Some(20.0),
            date: None,
            returned: false,
            notes: None,
        },
    )
    .await
    .unwrap();
    assert!(!deposit.returned);

    let toggled = ClothingDepositService::toggle_returned(&db, deposit.id)
        .await
        .unwrap();
    assert!(toggled.returned);

    let toggled = ClothingDepositService::toggle_returned(&db, deposit.id)
        .await
        .unwrap();
    assert!(!toggled.returned);

    let listed = ClothingDepositService::list(&db).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].1.as_ref().unwrap().username, "waiter");
}

#[tokio::test]
async fn test_dashboard_counts() {
    let db = setup().await;

    ReservationService::create(
        &db,
        NewReservation {
            customer: "Meier".into(),
            size: Some(4),
            at: ts(5, 20),
            notes: None,
        },
    )
    .await
    .unwrap();

    let stats = DashboardService::stats(&db).await.unwrap();
    assert_eq!(stats.users, 3);
    assert_eq!(stats.reservations, 1);
    assert_eq!(stats.shifts, 0);
    assert_eq!(stats.deposits, 0);
}

#[tokio::test]
async fn test_report_survives_author_deletion() {
    let db = setup().await;
    let admin = user_id(&db, "admin").await;

    let carla = UserService::create(
        &db,
        NewUser {
            username: "carla".into(),
            full_name: "Carla Wirth".into(),
            role: Role::ShiftLead,
            password: "pw".into(),
        },
    )
    .await
    .unwrap();

    let report = ShiftReportService::create(
        &db,
        carla.id,
        NewShiftReport {
            date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            revenue: Some(1800.0),
            issues: None,
            notes: Some("Ruhiger Abend".into()),
        },
    )
    .await
    .unwrap();

    UserService::delete(&db, carla.id, admin).await.unwrap();

    let (stored, author) = ShiftReportService::get(&db, report.id).await.unwrap();
    assert_eq!(stored.lead_id, None);
    assert!(author.is_none());
    assert_eq!(stored.notes.as_deref(), Some("Ruhiger Abend"));
}

#[tokio::test]
async fn test_concurrent_creates_with_same_username_conflict() {
    let db = setup().await;
    let new = || NewUser {
        username: "dora".into(),
        full_name: String::new(),
        role: Role::Waiter,
        password: "pw".into(),
    };

    let (a, b) = tokio::join!(
        UserService::create(&db, new()),
        UserService::create(&db, new())
    );

    let (created, rejected) = match (a, b) {
        (Ok(user), Err(err)) | (Err(err), Ok(user)) => (user, err),
        (a, b) => panic!("expected exactly one success, got {a:?} and {b:?}"),
    };
    assert_eq!(created.username, "dora");
    assert!(matches!(rejected, ServiceError::Conflict(_)));
    assert_eq!(UserService::count(&db).await.unwrap(), 4);
}
