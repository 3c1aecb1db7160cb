use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::warn;

pub const INTERACTION_FLAG_KEY: &str = "user-has-interacted";

/// Persists the "this user has interacted before" bit across runs.
/// Playback may start unattended on later launches once it is set.
pub struct InteractionFlag {
    path: Option<PathBuf>,
}

impl InteractionFlag {
    pub fn new() -> Self {
        let path = ProjectDirs::from("com", "folio", "folio")
            .map(|dirs| dirs.data_dir().join(INTERACTION_FLAG_KEY));
        Self { path }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    pub fn read(&self) -> bool {
        let Some(path) = &self.path else {
            return false;
        };
        std::fs::read_to_string(path)
            .map(|contents| contents.trim() == "true")
            .unwrap_or(false)
    }

    pub fn write(&self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                warn!("could not create data dir for interaction flag: {err}");
                return;
            }
        }
        if let Err(err) = std::fs::write(path, "true") {
            warn!("could not persist interaction flag: {err}");
        }
    }
}

impl Default for InteractionFlag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_a_file() {
        let dir = std::env::temp_dir().join("folio-flag-test");
        let _ = std::fs::remove_dir_all(&dir);
        let flag = InteractionFlag::at(dir.join(INTERACTION_FLAG_KEY));

        assert!(!flag.read());
        flag.write();
        assert!(flag.read());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
