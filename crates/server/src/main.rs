use chrono::Duration;
use clap::Parser;
use database::{
    db::{create_connection, init_schema, migrate},
    services::{seed::SeedService, user::UserService},
};
use log::{error, info};
use server::{
    app,
    auth::token::TokenService,
    config::{Cli, Command, RunArgs},
    state::AppState,
    utils::shutdown::shutdown_signal,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::DbInit => db_init(&cli.database_url).await,
        Command::Run(args) => run(&cli.database_url, args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

async fn db_init(database_url: &str) -> Result<(), BoxError> {
    let db = create_connection(database_url).await?;
    let created = init_schema(&db).await?;

    if created.is_empty() {
        info!("Users ready, no default accounts needed");
    } else {
        info!("Users ready: {}", created.join("/"));
    }
    Ok(())
}

async fn run(database_url: &str, args: RunArgs) -> Result<(), BoxError> {
    let db = create_connection(database_url).await?;

    migrate(&db).await?;

    // First boot provisions the default accounts
    if UserService::count(&db).await? == 0 {
        info!("No users yet, creating default accounts");
        SeedService::ensure_seed_accounts(&db).await?;
    }

    let tokens = TokenService::new(
        &args.resolve_secret(),
        Duration::minutes(args.token_ttl_minutes),
    );
    let app = app(AppState::new(db, tokens));

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("Running axum on http://{}", args.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
