use anyhow::Context;
use std::{env, path::PathBuf};
use unique_client::Account;

pub const MNEMONIC_VAR: &str = "SUBSTRATE_MNEMONIC";
pub const REST_URL_VAR: &str = "UNIQUE_REST_URL";

pub struct DemoParams {
    /// Secret URI of the signing account
    pub mnemonic: String,
    /// Unique REST endpoint
    pub rest_url: String,
}

impl DemoParams {
    /// Get the demo params from the environment
    pub fn from_env(default_rest_url: &str) -> anyhow::Result<Self> {
        Self::from_lookup(default_rest_url, |name| env::var(name).ok())
    }

    /// Load `.env` from the working directory or its parents into the process
    /// environment. Variables already set keep their value.
    pub fn load_dotenv() -> Option<PathBuf> {
        dotenvy::dotenv().ok()
    }

    pub fn from_lookup<F>(default_rest_url: &str, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |value: &String| !value.trim().is_empty();

        Ok(Self {
            mnemonic: lookup(MNEMONIC_VAR)
                .filter(present)
                .with_context(|| format!("{} env variable is not set", MNEMONIC_VAR))?,
            rest_url: lookup(REST_URL_VAR)
                .filter(present)
                .unwrap_or_else(|| default_rest_url.to_string()),
        })
    }

    pub fn account(&self) -> anyhow::Result<Account> {
        Account::from_uri(self.mnemonic.trim())
            .with_context(|| format!("Failed to derive account from {}", MNEMONIC_VAR))
    }
}
