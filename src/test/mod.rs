use std::path::Path;
use tempdir::TempDir;

pub fn with_temp_dir<F: FnOnce(&Path)>(f: F) {
    let dir = TempDir::new("terrain-viewer").expect("failed to create temp dir");

    f(dir.path());

    dir.close().expect("failed to remove temp dir");
}
