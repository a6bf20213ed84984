//! `user-lookup` CLI entry-point.
//!
//! Available sub-commands:
//! - `lookup` — fetch a user's records from Postgres and print them.
//! - `query`  — print the query that would be sent, without connecting.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use db::pool::DEFAULT_MAX_CONNECTIONS;
use db::PgDataSource;
use handler::{HandlerConfig, Request, RequestHandler};

#[derive(Parser)]
#[command(name = "user-lookup", about = "Look up a user's records", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the user's records and print one JSON value per line.
    Lookup {
        /// User identifier; parsed as JSON when possible, else used as text.
        #[arg(long)]
        user_id: Option<String>,
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
        /// Connection pool ceiling.
        #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
        max_connections: u32,
        /// Pause before each record is transformed.
        #[arg(long, default_value_t = 100)]
        delay_ms: u64,
    },
    /// Print the query built for the given identifier.
    Query {
        #[arg(long)]
        user_id: Option<String>,
    },
}

/// Interpret a command-line identifier: `42` becomes a number, `abc` a string.
fn parse_user_id(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

fn build_request(user_id: Option<String>) -> Request {
    match user_id {
        Some(raw) => Request::new().with("user_id", parse_user_id(&raw)),
        None => Request::new(),
    }
}

/// Directives from `rust_log` when present and valid, otherwise `info`.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Lookup { user_id, database_url, max_connections, delay_ms } => {
            let config = HandlerConfig {
                transform_delay: Duration::from_millis(delay_ms),
            };

            let pool = db::pool::create_pool(&database_url, max_connections)
                .await
                .context("failed to connect to database")?;
            let handler = RequestHandler::with_config(Arc::new(PgDataSource::new(pool)), &config);

            let request = build_request(user_id);
            let rows = handler.handle(&request).await.context("lookup failed")?;
            info!("lookup returned {} records", rows.len());

            for row in rows {
                println!("{row}");
            }
        }
        Command::Query { user_id } => {
            let request = build_request(user_id);
            println!("{}", db::user_query(request.user_id()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::Layer;
    use tracing_subscriber::Registry;

    fn level_of(filter: &EnvFilter) -> Option<LevelFilter> {
        <EnvFilter as Layer<Registry>>::max_level_hint(filter)
    }

    #[test]
    fn log_filter_defaults_to_info() {
        assert_eq!(level_of(&log_filter(None)), Some(LevelFilter::INFO));
    }

    #[test]
    fn log_filter_honours_rust_log() {
        assert_eq!(level_of(&log_filter(Some("debug"))), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn numeric_user_id_is_parsed_as_number() {
        assert_eq!(parse_user_id("42"), json!(42));
    }

    #[test]
    fn free_text_user_id_stays_text() {
        assert_eq!(parse_user_id("alice"), json!("alice"));
    }

    #[test]
    fn absent_user_id_builds_empty_request() {
        assert_eq!(build_request(None).user_id(), None);
    }

    #[test]
    fn given_user_id_lands_under_user_id_key() {
        let request = build_request(Some("42".into()));
        assert_eq!(request.user_id(), Some(&json!(42)));
        assert_eq!(db::user_query(request.user_id()), "SELECT * FROM users WHERE id = 42");

        let request = build_request(Some("alice".into()));
        assert_eq!(request.get("user_id"), Some(&json!("alice")));
    }

    #[test]
    fn lookup_flags_fall_back_to_defaults() {
        let cli = Cli::try_parse_from([
            "user-lookup",
            "lookup",
            "--database-url",
            "postgres://localhost/users",
        ])
        .expect("valid arguments");

        match cli.command {
            Command::Lookup { user_id, max_connections, delay_ms, .. } => {
                assert_eq!(user_id, None);
                assert_eq!(max_connections, DEFAULT_MAX_CONNECTIONS);
                assert_eq!(delay_ms, 100);
            }
            Command::Query { .. } => panic!("expected lookup"),
        }
    }
}
