//! Application configuration and session state.
//!
//! The session is the shell's explicit state struct: the loaded table,
//! the current column selections, the wallet-connected flag and the
//! compute-busy guard. It is passed by reference to whatever drives
//! it; there is no ambient global.

use crate::errors::{Error, Result};
use crate::histogram::DEFAULT_BIN_COUNT;
use crate::table::Table;

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the HTTP gateway fronting the compute network.
    pub gateway_base: String,
    /// Address of the compute process regression requests go to.
    pub process_address: String,
    pub bin_count: usize,
    pub request_timeout_secs: u64,
    pub wallet_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gateway_base: std::env::var("GATEWAY_BASE")
                .unwrap_or_else(|_| "https://cu.ao-testnet.xyz".to_string()),
            process_address: std::env::var("PROCESS_ADDRESS").unwrap_or_default(),
            bin_count: std::env::var("BIN_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_BIN_COUNT),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            wallet_secret: std::env::var("WALLET_SECRET").ok(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    table: Option<Table>,
    pub feature_columns: Vec<String>,
    pub target_column: Option<String>,
    pub wallet_connected: bool,
    compute_busy: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the loaded table wholesale. Column selections refer to
    /// the old table and are cleared with it.
    pub fn load_table(&mut self, table: Table) {
        self.table = Some(table);
        self.feature_columns.clear();
        self.target_column = None;
    }

    pub fn clear_table(&mut self) {
        self.table = None;
        self.feature_columns.clear();
        self.target_column = None;
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// Claim the single in-flight compute slot. A second request while
    /// one is pending is refused; there is no cancellation, so the
    /// caller re-triggers after the pending request settles.
    pub fn begin_compute(&mut self) -> Result<()> {
        if self.compute_busy {
            return Err(Error::Validation(
                "a compute request is already in flight".to_string(),
            ));
        }
        self.compute_busy = true;
        Ok(())
    }

    pub fn finish_compute(&mut self) {
        self.compute_busy = false;
    }

    pub fn is_computing(&self) -> bool {
        self.compute_busy
    }
}
