//! Ground history management.

use crate::snapshot::{Ground, load_snapshot};

use super::super::app::App;

/// Helper struct for changing the snapshot the keyboard is drawn from.
pub struct SnapshotHandler<'a> {
    app: &'a mut App,
}

impl<'a> SnapshotHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn push_ground(&mut self, ground: Ground) {
        self.app.log(format!(
            "Ground added: {} {}",
            ground.word(),
            ground.marker()
        ));
        self.app.snapshot.push(ground);
    }

    pub fn undo_ground(&mut self) {
        match self.app.snapshot.pop() {
            Some(ground) => self.app.log(format!("Ground removed: {}", ground.word())),
            None => self.app.log("Nothing to undo"),
        }
    }

    /// Replaces the snapshot with the file's current contents. On failure the
    /// previous snapshot stays in place.
    pub fn reload(&mut self) {
        let Some(path) = self.app.snapshot_path.clone() else {
            self.app.log("No snapshot file to reload");
            return;
        };

        match load_snapshot(&path) {
            Ok(snapshot) => {
                self.app.snapshot = snapshot;
                self.app.log(format!(
                    "Reloaded {} grounds from {}",
                    self.app.snapshot.len(),
                    path.display()
                ));
            }
            Err(err) => {
                tracing::warn!("reload failed: {:#}", err);
                self.app.logs.push(format!("Reload failed: {:#}", err));
            }
        }
    }
}
