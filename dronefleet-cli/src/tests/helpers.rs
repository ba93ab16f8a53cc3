//! Test helpers for writing problem files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A small problem: D1 takes A, B is too heavy for anyone.
pub(super) const SMALL_PROBLEM: &str = r#"{
  "drones": {
    "fleet": [
      { "id": "D1", "speed": 10, "max_payload": 5, "max_distance": 20 },
      { "id": "D2", "speed": 30, "max_payload": 5, "max_distance": 20, "available": false }
    ]
  },
  "orders": [
    { "id": "A", "delivery_x": 3, "delivery_y": 4, "package_weight": 5, "deadline": 1 },
    { "id": "B", "delivery_x": 1, "delivery_y": 1, "package_weight": 9, "deadline": 2 }
  ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write file");
}

pub(super) fn utf8_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn read_json(path: &Utf8Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(path.as_std_path()).expect("read output");
    serde_json::from_str(&raw).expect("output should be JSON")
}
