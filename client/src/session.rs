//! Login session persisted in a pluggable key-value store.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const USER_DATA_KEY: &str = "user_data";
pub const TOKEN_EXPIRE_KEY: &str = "token_expire";

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn delete(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value);
    }

    fn delete(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
    }
}

pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn save_data(&self, access_token: &str, user_data: &Value, expires_at: DateTime<Utc>) {
        self.store.set(ACCESS_TOKEN_KEY, access_token.to_string());
        self.store.set(USER_DATA_KEY, user_data.to_string());
        self.store.set(TOKEN_EXPIRE_KEY, expires_at.to_rfc3339());
    }

    pub fn user_data(&self) -> Option<Value> {
        let raw = self.store.get(USER_DATA_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Stored user data is not JSON: {}", e);
                None
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY)
    }

    pub fn delete_data(&self) {
        self.store.delete(ACCESS_TOKEN_KEY);
        self.store.delete(USER_DATA_KEY);
        self.store.delete(TOKEN_EXPIRE_KEY);
    }

    /// `true` when the token is expired or its expiry is unknown.
    pub fn check_token_expired(&self, delete_if_invalid: bool) -> bool {
        self.check_token_expired_at(Utc::now(), delete_if_invalid)
    }

    pub fn check_token_expired_at(&self, now: DateTime<Utc>, delete_if_invalid: bool) -> bool {
        let expires_at = self
            .store
            .get(TOKEN_EXPIRE_KEY)
            .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok());

        let Some(expires_at) = expires_at else {
            return true;
        };

        if expires_at > now {
            return false;
        }

        if delete_if_invalid {
            debug!("Token expired, clearing session");
            self.delete_data();
        }
        true
    }
}
