use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ContactsError;

pub const DEFAULT_BASE_URL: &str = "https://contact-meeno.onrender.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub sync: SyncSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct SyncSettings {
    #[serde(default)]
    pub refresh: SyncStrategy,
}

/// How the local collection catches up after a successful mutation
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SyncStrategy {
    /// Re-fetch the whole collection
    #[default]
    Refetch,
    /// Apply the server's mutation result to the local collection
    #[serde(rename = "apply")]
    ApplyResult,
}

impl fmt::Display for SyncStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncStrategy::Refetch => f.write_str("refetch"),
            SyncStrategy::ApplyResult => f.write_str("apply"),
        }
    }
}

impl FromStr for SyncStrategy {
    type Err = ContactsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "refetch" => Ok(SyncStrategy::Refetch),
            "apply" => Ok(SyncStrategy::ApplyResult),
            _ => Err(ContactsError::InvalidSyncStrategy(s.to_string())),
        }
    }
}
