use crate::token::RawToken;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, warn};

//--------------------------------------------------------------------------------------------------
// Storage scope
//--------------------------------------------------------------------------------------------------

// Persistent survives restarts ("remember me"); Ephemeral dies with the process

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageScope {
    Persistent,
    Ephemeral,
}

//--------------------------------------------------------------------------------------------------
// Store Error
//--------------------------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write token file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

//--------------------------------------------------------------------------------------------------
// Token Store
//--------------------------------------------------------------------------------------------------

// Single holder of the session token. One writer path (login saves, logout/expiry clears), many
// readers (every guard evaluation, every outbound request). All operations are synchronous -
// the route guard consults this on every navigation and must never wait on it.

pub struct TokenStore {
    token_path: PathBuf,
    ephemeral: Mutex<Option<RawToken>>,
}

impl TokenStore {
    pub fn new(data_dir: &Path) -> Self {
        TokenStore {
            token_path: data_dir.join("token"),
            ephemeral: Mutex::new(None),
        }
    }

    pub fn save(&self, token: RawToken, scope: StorageScope) -> Result<(), StoreError> {
        match scope {
            StorageScope::Persistent => {
                if let Some(parent) = self.token_path.parent() {
                    fs::create_dir_all(parent).map_err(|source| StoreError::WriteFailed {
                        path: self.token_path.clone(),
                        source,
                    })?;
                }
                fs::write(&self.token_path, token.as_str()).map_err(|source| {
                    StoreError::WriteFailed {
                        path: self.token_path.clone(),
                        source,
                    }
                })?;
                debug!("Token saved to {}", self.token_path.display());
            }
            StorageScope::Ephemeral => {
                *self.lock_ephemeral() = Some(token);
                debug!("Token saved for this session only");
            }
        }

        Ok(())
    }

    // Persistent wins when both scopes hold a token; absence is a normal outcome, not an error
    pub fn read(&self) -> Option<RawToken> {
        match fs::read_to_string(&self.token_path) {
            Ok(contents) => {
                let contents = contents.trim();
                if !contents.is_empty() {
                    return Some(RawToken::new(contents.to_string()));
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                warn!("Unreadable token file {}: {}", self.token_path.display(), err);
            }
        }

        self.lock_ephemeral().clone()
    }

    // Removes the token from both scopes; safe to call however many times
    pub fn clear(&self) {
        match fs::remove_file(&self.token_path) {
            Ok(()) => debug!("Token file removed"),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                warn!("Failed to remove token file {}: {}", self.token_path.display(), err);
            }
        }

        *self.lock_ephemeral() = None;
    }

    fn lock_ephemeral(&self) -> std::sync::MutexGuard<'_, Option<RawToken>> {
        self.ephemeral.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

//--------------------------------------------------------------------------------------------------


//--------------------------------------------------------------------------------------------------
