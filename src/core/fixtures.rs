//! Response recording for offline tests (`test-mode` only).
//!
//! With `WB_RECORD=1`, each body read by the fetch path is written to
//! `<WB_FIXDIR or tests/fixtures>/<endpoint>_<article>.json`.

use std::path::PathBuf;
use std::{env, fs, io};

fn recording() -> bool {
    env::var("WB_RECORD").is_ok_and(|v| v == "1")
}

fn fixture_path(endpoint: &str, article: &str) -> PathBuf {
    let dir = env::var_os("WB_FIXDIR").map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures"),
        PathBuf::from,
    );
    dir.join(format!("{endpoint}_{article}.json"))
}

fn write_fixture(path: &PathBuf, body: &str) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, body)
}

/// Saves `body` as a fixture when recording is switched on. Failures are logged, not raised.
pub(crate) fn record_if_enabled(endpoint: &str, article: &str, body: &str) {
    if !recording() {
        return;
    }
    let path = fixture_path(endpoint, article);
    match write_fixture(&path, body) {
        Ok(()) => tracing::debug!(path = %path.display(), "recorded fixture"),
        Err(e) => tracing::warn!(%article, path = %path.display(), error = %e, "failed to record fixture"),
    }
}
