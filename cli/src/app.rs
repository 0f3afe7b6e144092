//! Exit codes, tracing setup and command dispatch.

use hero_core::{ApiError, Hero, HeroService, MessageSink, NewHero, Transport};
use serde_json::Value;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::cli::Command;

/// Process exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Output could not be written, or the runtime failed to start.
    pub const INTERNAL_ERROR: ExitCode = ExitCode::FAILURE;

    /// A `--strict` operation failed.
    ///
    /// Note: a function because `ExitCode::from()` is not `const fn`.
    pub fn api_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Sets up the tracing subscriber. Logs go to stderr so stdout stays JSON.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs `command` through the never-failing operations.
pub async fn run_lenient<T: Transport, S: MessageSink>(
    service: &HeroService<T, S>,
    command: Command,
) -> Value {
    match command {
        Command::List => json(&service.get_heroes().await),
        Command::Get { id } => json(&service.get_hero(id).await),
        Command::Add { name } => json(&service.add_hero(&NewHero::new(name)).await),
        Command::Update { id, name } => {
            acknowledged(service.update_hero(&Hero { id, name }).await.is_some())
        }
        Command::Delete { id } => acknowledged(service.delete_hero(id).await.is_some()),
    }
}

/// Runs `command` through the `try_*` operations.
pub async fn run_strict<T: Transport, S: MessageSink>(
    service: &HeroService<T, S>,
    command: Command,
) -> Result<Value, ApiError> {
    Ok(match command {
        Command::List => json(&service.try_get_heroes().await?),
        Command::Get { id } => json(&service.try_get_hero(id).await?),
        Command::Add { name } => json(&service.try_add_hero(&NewHero::new(name)).await?),
        Command::Update { id, name } => {
            service.try_update_hero(&Hero { id, name }).await?;
            acknowledged(true)
        }
        Command::Delete { id } => {
            service.try_delete_hero(id).await?;
            acknowledged(true)
        }
    })
}

fn json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

fn acknowledged(ok: bool) -> Value {
    if ok {
        serde_json::json!({ "ok": true })
    } else {
        Value::Null
    }
}
