use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::ClientError;
use crate::models::user::SessionUser;

// Single-slot cache of the authenticated user. Absence means logged out;
// writes are last-writer-wins.
pub trait SessionStore {
    fn load(&self) -> Result<Option<SessionUser>, ClientError>;
    fn save(&self, user: &SessionUser) -> Result<(), ClientError>;
    fn clear(&self) -> Result<(), ClientError>;
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Option<SessionUser>, ClientError> {
        (**self).load()
    }

    fn save(&self, user: &SessionUser) -> Result<(), ClientError> {
        (**self).save(user)
    }

    fn clear(&self) -> Result<(), ClientError> {
        (**self).clear()
    }
}

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<SessionUser>, ClientError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(ClientError::Storage(err.to_string())),
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                // a corrupt cache reads as logged out rather than failing the page
                tracing::warn!(error = %err, "discarding unreadable session cache");
                Ok(None)
            }
        }
    }

    fn save(&self, user: &SessionUser) -> Result<(), ClientError> {
        let raw = serde_json::to_string(user)
            .map_err(|err| ClientError::Storage(err.to_string()))?;
        fs::write(&self.path, raw).map_err(|err| ClientError::Storage(err.to_string()))
    }

    fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ClientError::Storage(err.to_string())),
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    user: Mutex<Option<SessionUser>>,
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<SessionUser>, ClientError> {
        Ok(self.user.lock().unwrap().clone())
    }

    fn save(&self, user: &SessionUser) -> Result<(), ClientError> {
        *self.user.lock().unwrap() = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        *self.user.lock().unwrap() = None;
        Ok(())
    }
}
