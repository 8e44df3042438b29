//! File-backed session store.
//!
//! Each session is one JSON file under the configured directory, named
//! by the session id (base64url, so filesystem-safe). A record that no
//! longer parses is deleted and treated as absent rather than failing
//! the request, so a bad write never locks an admin out.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use time::OffsetDateTime;
use tower_sessions::session::{Id, Record};
use tower_sessions::{SessionStore, session_store};

/// Stores each session record as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Creates the store, creating the backing directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn record_path(&self, session_id: &Id) -> PathBuf {
        self.dir.join(format!("{session_id}.json"))
    }

    async fn write_record(&self, record: &Record) -> session_store::Result<()> {
        let json = serde_json::to_vec(record)
            .map_err(|err| session_store::Error::Encode(err.to_string()))?;
        tokio::fs::write(self.record_path(&record.id), json)
            .await
            .map_err(|err| session_store::Error::Backend(err.to_string()))
    }

    async fn remove_record(&self, path: &Path) -> session_store::Result<()> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(session_store::Error::Backend(err.to_string())),
        }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        // Regenerate on the (unlikely) id collision.
        while tokio::fs::try_exists(self.record_path(&record.id))
            .await
            .map_err(|err| session_store::Error::Backend(err.to_string()))?
        {
            record.id = Id::default();
        }
        self.write_record(record).await
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.write_record(record).await
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let path = self.record_path(session_id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(session_store::Error::Backend(err.to_string())),
        };

        let record: Record = match serde_json::from_slice(&bytes) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(%session_id, error = %err, "discarding corrupted session record");
                self.remove_record(&path).await?;
                return Ok(None);
            }
        };

        if record.expiry_date <= OffsetDateTime::now_utc() {
            self.remove_record(&path).await?;
            return Ok(None);
        }

        Ok(Some(record))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.remove_record(&self.record_path(session_id)).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use time::Duration;

    use super::*;

    fn temp_store() -> FileSessionStore {
        let dir = std::env::temp_dir().join(format!("gpdn-sessions-{}", uuid::Uuid::new_v4()));
        FileSessionStore::new(dir).unwrap()
    }

    fn record_expiring_in(duration: Duration) -> Record {
        let mut data = HashMap::new();
        data.insert("key".to_owned(), serde_json::json!("value"));
        Record {
            id: Id::default(),
            data,
            expiry_date: OffsetDateTime::now_utc() + duration,
        }
    }

    #[tokio::test]
    async fn create_then_load_round_trips() {
        let store = temp_store();
        let mut record = record_expiring_in(Duration::hours(1));
        store.create(&mut record).await.unwrap();

        let loaded = store.load(&record.id).await.unwrap().unwrap();
        assert_eq!(loaded.data, record.data);
    }

    #[tokio::test]
    async fn load_of_unknown_id_is_none() {
        let store = temp_store();
        assert!(store.load(&Id::default()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn expired_record_is_deleted_on_load() {
        let store = temp_store();
        let mut record = record_expiring_in(Duration::hours(-1));
        store.create(&mut record).await.unwrap();

        assert!(store.load(&record.id).await.unwrap().is_none());
        assert!(!store.record_path(&record.id).exists());
    }

    #[tokio::test]
    async fn corrupted_record_is_discarded() {
        let store = temp_store();
        let mut record = record_expiring_in(Duration::hours(1));
        store.create(&mut record).await.unwrap();
        std::fs::write(store.record_path(&record.id), b"{not json").unwrap();

        assert!(store.load(&record.id).await.unwrap().is_none());
        assert!(!store.record_path(&record.id).exists());
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = temp_store();
        let mut record = record_expiring_in(Duration::hours(1));
        store.create(&mut record).await.unwrap();

        store.delete(&record.id).await.unwrap();
        assert!(store.load(&record.id).await.unwrap().is_none());
    }
}
