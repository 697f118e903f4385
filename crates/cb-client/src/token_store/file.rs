use crate::token_store::{
    TokenStore,
    error::{Result as StoreErrorResult, StoreError},
    storage_key::StorageKey,
};

use cb_core::DashboardKind;

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Session state persisted as a JSON object, one file per dashboard kind.
///
/// Every mutation rewrites the whole file through a temp file, fsync and
/// rename, so a crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl FileTokenStore {
    /// Open `<dir>/<kind>-session.json`.
    ///
    /// - missing file: empty store
    /// - corrupted file: backed up to `<file>.corrupted.<timestamp>`, empty store
    pub fn open(dir: &Path, kind: DashboardKind) -> StoreErrorResult<Self> {
        let path = Self::session_path(dir, kind);
        let values = Self::load(&path)?;

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    pub fn session_path(dir: &Path, kind: DashboardKind) -> PathBuf {
        dir.join(format!("{}-session.json", kind.as_str()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> StoreErrorResult<BTreeMap<String, String>> {
        if !path.exists() {
            debug!("No session file at {path:?}");
            return Ok(BTreeMap::new());
        }

        let contents =
            fs::read_to_string(path).map_err(|e| StoreError::file_read(path.to_path_buf(), e))?;

        match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
            Ok(values) => {
                info!("Loaded session from {path:?}");
                Ok(values)
            }
            Err(e) => {
                warn!("Session file corrupted at {path:?}: {e}");
                Self::backup_corrupted(path)?;
                Ok(BTreeMap::new())
            }
        }
    }

    /// Renames the file to `<file>.corrupted.<timestamp>`.
    fn backup_corrupted(path: &Path) -> StoreErrorResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let mut backup = path.as_os_str().to_owned();
        backup.push(format!(".corrupted.{timestamp}"));
        let backup_path = PathBuf::from(backup);

        fs::rename(path, &backup_path)
            .map_err(|e| StoreError::backup_failed(path.to_path_buf(), e))?;

        warn!("Backed up corrupted session to {backup_path:?}");
        Ok(backup_path)
    }

    /// Atomic write: temp file, fsync, rename.
    fn save(&self, values: &BTreeMap<String, String>) -> StoreErrorResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| StoreError::dir_creation(dir.to_path_buf(), e))?;
        }

        let mut temp = self.path.as_os_str().to_owned();
        temp.push(format!(".tmp.{}", std::process::id()));
        let temp_path = PathBuf::from(temp);

        let json = serde_json::to_string_pretty(values)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        Ok(())
    }

    fn update<F>(&self, mutate: F) -> StoreErrorResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = values.clone();
        mutate(&mut next);

        if let Err(e) = self.save(&next) {
            if !e.is_transient() {
                return Err(e);
            }
            warn!("Retrying session write: {e}");
            self.save(&next)?;
        }

        *values = next;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key.as_str())
            .cloned()
    }

    fn put(&self, key: StorageKey, value: &str) -> StoreErrorResult<()> {
        self.update(|values| {
            values.insert(key.as_str().to_string(), value.to_string());
        })
    }

    fn remove(&self, key: StorageKey) -> StoreErrorResult<()> {
        self.update(|values| {
            values.remove(key.as_str());
        })
    }

    fn set_tokens(&self, access_token: &str, refresh_token: Option<&str>) -> StoreErrorResult<()> {
        self.update(|values| {
            values.insert(
                StorageKey::AccessToken.as_str().to_string(),
                access_token.to_string(),
            );
            if let Some(refresh_token) = refresh_token {
                values.insert(
                    StorageKey::RefreshToken.as_str().to_string(),
                    refresh_token.to_string(),
                );
            }
        })
    }

    fn clear(&self) -> StoreErrorResult<()> {
        self.update(|values| {
            for key in StorageKey::ALL {
                values.remove(key.as_str());
            }
        })
    }
}
