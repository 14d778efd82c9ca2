use clap::{Args, Parser, Subcommand};
use log::warn;
use rand::{Rng, distributions::Alphanumeric};
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://bistroops.db?mode=rwc";

/// One year
pub const MAX_TOKEN_TTL_MINUTES: i64 = 525_600;

/// Secret variable read when `BISTROOPS_SECRET` is absent
const LEGACY_SECRET_VAR: &str = "FLASK_SECRET";

#[derive(Debug, Parser)]
#[command(name = "bistroops")]
#[command(about = "Shift management for restaurant teams")]
pub struct Cli {
    /// Database connection string (SQLite or Postgres)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL, global = true)]
    pub database_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the schema and the default accounts
    DbInit,
    /// Start the HTTP server
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Token signing secret
    #[arg(long, env = "BISTROOPS_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    /// Token lifetime in minutes
    #[arg(
        long,
        env = "TOKEN_TTL_MINUTES",
        default_value_t = 720,
        value_parser = clap::value_parser!(i64).range(1..=MAX_TOKEN_TTL_MINUTES)
    )]
    pub token_ttl_minutes: i64,
}

impl RunArgs {
    /// The configured secret, or a random one that dies with the process
    pub fn resolve_secret(&self) -> String {
        if let Some(secret) = self.secret.clone().filter(|s| !s.is_empty()) {
            return secret;
        }

        if let Ok(secret) = std::env::var(LEGACY_SECRET_VAR)
            && !secret.is_empty()
        {
            return secret;
        }

        warn!("BISTROOPS_SECRET is not set; issued tokens will not survive a restart");
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(64)
            .map(char::from)
            .collect()
    }
}
