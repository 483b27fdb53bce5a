// The design-system store. The dashboard keeps its active design document as
// a JSON blob under a well-known key, with a single-level backup written
// whenever the default is restored. Consumers subscribe for change
// notifications and re-render with whatever document the notification
// carries.

use std::path::Path;

use serde_json::Value;
use sled::Db;
use tokio::sync::broadcast;

use crate::errors::{Result, TerminalError, TerminalErrorType};
use crate::theme::DEFAULT_DESIGN;

const CURRENT_KEY: &str = "current_design";
const BACKUP_KEY: &str = "design_backup";

#[derive(Clone)]
pub(crate) struct DesignStore {
    db: Db,
    events: broadcast::Sender<Value>,
}

impl DesignStore {
    pub(crate) fn open(path: &Path) -> Result<DesignStore> {
        let db = sled::open(path)?;
        let (events, _) = broadcast::channel(16);
        Ok(DesignStore { db, events })
    }

    #[cfg(test)]
    pub(crate) fn temporary() -> DesignStore {
        let db = sled::Config::new().temporary(true).open().unwrap();
        let (events, _) = broadcast::channel(16);
        DesignStore { db, events }
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<Value> {
        self.events.subscribe()
    }

    /// Back up the active document (when there is one) and write the stock
    /// document in its place.
    pub(crate) fn restore_default(&self) -> Result<()> {
        if let Some(current) = self.read_blob(CURRENT_KEY)? {
            self.write_blob(BACKUP_KEY, &current)?;
        }
        let default = serde_json::to_string(&*DEFAULT_DESIGN)?;
        self.write_blob(CURRENT_KEY, &default)?;
        self.notify(DEFAULT_DESIGN.clone());
        Ok(())
    }

    /// Promote the backup document back to active. Returns `None` when no
    /// backup has ever been written.
    pub(crate) fn undo_restore(&self) -> Result<Option<Value>> {
        let backup = match self.read_blob(BACKUP_KEY)? {
            Some(backup) => backup,
            None => return Ok(None),
        };
        let document: Value = serde_json::from_str(&backup)?;
        self.write_blob(CURRENT_KEY, &backup)?;
        self.notify(document.clone());
        Ok(Some(document))
    }

    /// The active document, or the stock one when nothing is stored.
    pub(crate) fn current(&self) -> Result<Value> {
        match self.read_blob(CURRENT_KEY)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(DEFAULT_DESIGN.clone()),
        }
    }

    pub(crate) fn render_current(&self) -> Result<String> {
        let document = self.current()?;
        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn notify(&self, document: Value) {
        // Nobody listening is fine; the store does not track its consumers.
        let _ = self.events.send(document);
    }

    fn read_blob(&self, key: &str) -> Result<Option<String>> {
        match self.db.get(key.as_bytes())? {
            None => Ok(None),
            Some(bytes) => {
                let blob = String::from_utf8(bytes.to_vec()).map_err(|e| {
                    TerminalError::new(TerminalErrorType::StorageError, e.to_string())
                })?;
                Ok(Some(blob))
            }
        }
    }

    fn write_blob(&self, key: &str, blob: &str) -> Result<()> {
        self.db.insert(key.as_bytes(), blob.as_bytes())?;
        Ok(())
    }
}
