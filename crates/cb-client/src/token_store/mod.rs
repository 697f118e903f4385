//! Durable session state: access token, refresh token and the cached identity.
//!
//! Nothing here tracks expiry. The server is the only authority on whether a
//! token is still good; a stale token is discovered by the 401 it produces.

pub(crate) mod error;
pub(crate) mod file;
pub(crate) mod memory;
pub(crate) mod storage_key;

use crate::token_store::{error::Result as StoreErrorResult, storage_key::StorageKey};

use cb_core::Identity;

use log::warn;

pub trait TokenStore: Send + Sync {
    fn get(&self, key: StorageKey) -> Option<String>;

    fn put(&self, key: StorageKey, value: &str) -> StoreErrorResult<()>;

    fn remove(&self, key: StorageKey) -> StoreErrorResult<()>;

    fn access_token(&self) -> Option<String> {
        self.get(StorageKey::AccessToken)
    }

    fn refresh_token(&self) -> Option<String> {
        self.get(StorageKey::RefreshToken)
    }

    /// Store a new access token. The stored refresh token is replaced only
    /// when a new one is given.
    fn set_tokens(&self, access_token: &str, refresh_token: Option<&str>) -> StoreErrorResult<()> {
        self.put(StorageKey::AccessToken, access_token)?;
        if let Some(refresh_token) = refresh_token {
            self.put(StorageKey::RefreshToken, refresh_token)?;
        }
        Ok(())
    }

    /// Forget the whole session.
    fn clear(&self) -> StoreErrorResult<()> {
        for key in StorageKey::ALL {
            self.remove(key)?;
        }
        Ok(())
    }

    /// The cached identity. An undecodable blob counts as absent.
    fn cached_user(&self) -> Option<Identity> {
        let raw = self.get(StorageKey::User)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Ignoring undecodable cached user: {e}");
                None
            }
        }
    }

    fn cache_user(&self, user: &Identity) -> StoreErrorResult<()> {
        let raw = serde_json::to_string(user)?;
        self.put(StorageKey::User, &raw)
    }
}
