use std::path::{Path, PathBuf};

/// Walk upwards from `start` until a `.maggid` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(".maggid").is_dir() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}
