//! Storage module for key-value persistence and configuration.

pub mod config;
pub mod kv;

pub use config::{AppConfig, ConfigError};
pub use kv::{
    FileStore, KeyValueStore, MemoryStore, StorageError, ONBOARDING_COMPLETED_KEY,
    USER_CREATED_AT_KEY, USER_NAME_KEY,
};
