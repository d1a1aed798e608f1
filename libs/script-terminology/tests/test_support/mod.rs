#![allow(dead_code)]

use std::fs::File;
use std::path::PathBuf;

pub fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

pub fn open_fixture(name: &str) -> File {
    let path = test_data_dir().join(name);
    File::open(&path).unwrap_or_else(|e| panic!("Failed to open fixture {}: {}", path.display(), e))
}
