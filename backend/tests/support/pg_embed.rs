//! Bootstrap embedded PostgreSQL with workspace-backed directories.
//!
//! `PG_RUNTIME_DIR` and `PG_DATA_DIR` are pointed below the target directory
//! for the duration of the bootstrap unless both are already set.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use uuid::Uuid;

use super::format_postgres_error;

static BOOTSTRAP_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const MAX_RETRIES: u32 = 3;
const RETRY_DELAY_MS: u64 = 500;

fn pg_embed_target_dir() -> PathBuf {
    if let Some(target_dir) = std::env::var_os("CARGO_TARGET_DIR") {
        return PathBuf::from(target_dir).join("pg-embed");
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("target")
        .join("pg-embed")
}

fn create_unique_dirs() -> Result<(PathBuf, PathBuf), std::io::Error> {
    let base = pg_embed_target_dir().join(format!(
        "bootstrap-{}-{}",
        std::process::id(),
        Uuid::new_v4()
    ));
    let runtime_dir = base.join("install");
    let data_dir = base.join("data");
    std::fs::create_dir_all(&runtime_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    Ok((runtime_dir, data_dir))
}

fn is_transient_error(err: &str) -> bool {
    let lower = err.to_lowercase();
    [
        "error decoding response body",
        "connection reset",
        "connection refused",
        "timed out",
        "timeout",
        "temporarily unavailable",
        "dns error",
    ]
    .iter()
    .any(|pattern| lower.contains(pattern))
}

/// Start a [`TestCluster`], retrying transient download failures.
pub fn test_cluster() -> Result<TestCluster, String> {
    let _bootstrap_guard = BOOTSTRAP_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let needs_override =
        std::env::var_os("PG_RUNTIME_DIR").is_none() || std::env::var_os("PG_DATA_DIR").is_none();
    let _env_guard = if needs_override {
        let (runtime_dir, data_dir) = create_unique_dirs().map_err(|err| err.to_string())?;
        Some(env_lock::lock_env([
            ("PG_RUNTIME_DIR", Some(runtime_dir.to_string_lossy().into_owned())),
            ("PG_DATA_DIR", Some(data_dir.to_string_lossy().into_owned())),
        ]))
    } else {
        None
    };

    let mut last_error = String::new();
    for attempt in 0..=MAX_RETRIES {
        match TestCluster::new() {
            Ok(cluster) => return Ok(cluster),
            Err(err) => {
                last_error = format!("{err:?}");
                if attempt < MAX_RETRIES && is_transient_error(&last_error) {
                    let delay = Duration::from_millis(RETRY_DELAY_MS * (1 << attempt));
                    eprintln!(
                        "pg-embed: transient error on attempt {}/{}, retrying in {delay:?}: {last_error}",
                        attempt + 1,
                        MAX_RETRIES + 1,
                    );
                    std::thread::sleep(delay);
                } else {
                    break;
                }
            }
        }
    }
    Err(last_error)
}

/// Create a fresh database on `cluster` and return its URL.
pub fn create_database(cluster: &TestCluster, name: &str) -> Result<String, String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut client =
        Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!("CREATE DATABASE \"{name}\""))
        .map_err(|err| format_postgres_error(&err))?;
    Ok(cluster.connection().database_url(name))
}
