use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rustc_hash::FxHashSet;

/// Run-scoped record of which resource paths have already been linted.
///
/// Owned by the bridge, so its lifetime is one build run: membership never
/// expires and nothing is ever removed. A path modified and retransformed
/// during the same run is not re-linted.
#[derive(Debug, Default)]
pub struct SeenPaths {
    paths: Mutex<FxHashSet<PathBuf>>,
}

impl SeenPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` and report whether this was its first visit.
    ///
    /// Insertion is synchronous. Callers must invoke this before suspending
    /// on the lint call, so a second in-flight transform of the same path
    /// observes the entry and short-circuits.
    pub fn first_visit(&self, path: &Path) -> bool {
        let mut paths = self.paths.lock().unwrap();
        paths.insert(path.to_path_buf())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.paths.lock().unwrap().len()
    }
}
