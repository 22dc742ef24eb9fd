//! Scripted ledger for service tests.

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::server::{error::ledger::LedgerError, ledger::CreditLedger};

/// In-memory ledger with fixed balances and a switch to refuse adjustments.
///
/// Records every call so tests can assert the ledger was (or was not) reached.
#[derive(Default)]
pub struct ScriptedLedger {
    balances: HashMap<String, f64>,
    refuse_adjustments: bool,
    unreachable: bool,
    balance_calls: Mutex<Vec<String>>,
    adjustments: Mutex<Vec<(String, f64, String)>>,
}

impl ScriptedLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, name: &str, balance: f64) -> Self {
        self.balances.insert(name.to_string(), balance);
        self
    }

    /// Makes every adjustment fail with a 500 status.
    pub fn refusing(mut self) -> Self {
        self.refuse_adjustments = true;
        self
    }

    /// Makes every balance lookup fail with a 503 status.
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn balance_calls(&self) -> Vec<String> {
        self.balance_calls.lock().unwrap().clone()
    }

    pub fn adjustments(&self) -> Vec<(String, f64, String)> {
        self.adjustments.lock().unwrap().clone()
    }
}

#[async_trait]
impl CreditLedger for ScriptedLedger {
    async fn balance(&self, name: &str) -> Result<f64, LedgerError> {
        self.balance_calls.lock().unwrap().push(name.to_string());

        if self.unreachable {
            return Err(LedgerError::Status(StatusCode::SERVICE_UNAVAILABLE));
        }

        match self.balances.get(name) {
            Some(balance) => Ok(*balance),
            None => Err(LedgerError::Rejected(format!("unknown account '{}'", name))),
        }
    }

    async fn adjust(&self, name: &str, amount: f64, details: &str) -> Result<(), LedgerError> {
        self.adjustments
            .lock()
            .unwrap()
            .push((name.to_string(), amount, details.to_string()));

        if self.refuse_adjustments {
            return Err(LedgerError::Status(StatusCode::INTERNAL_SERVER_ERROR));
        }

        Ok(())
    }
}
