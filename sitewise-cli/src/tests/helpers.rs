//! Temporary location documents for CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

/// City-centre fixture matching `sitewise_core::test_support::sample_location`.
pub(super) fn city_centre_json() -> Value {
    json!({
        "name": "MG Road",
        "lat": 12.9716,
        "lng": 77.5946,
        "population": 500_000,
        "avgIncome": 50_000.0,
        "educationLevel": 75.0,
        "businessDensity": 5.0,
        "competitorCount": 3,
    })
}

/// A workspace holding one location file; the directory lives as long as the value.
pub(super) struct LocationFile {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl LocationFile {
    pub(super) fn with_json(value: &Value) -> Self {
        Self::with_contents(value.to_string().as_bytes())
    }

    pub(super) fn with_contents(contents: &[u8]) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let path = root.join("location.json");
        fs::write(&path, contents).expect("write location file");
        Self { _dir: dir, path }
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }
}

/// Decode what a command wrote to its buffer.
pub(super) fn decode(buffer: &[u8]) -> Value {
    let text = std::str::from_utf8(buffer).expect("output is UTF-8");
    assert!(text.ends_with('\n'), "output should end with a newline");
    serde_json::from_str(text).expect("output is JSON")
}
