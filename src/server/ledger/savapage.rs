//! SavaPage financial API client.

use async_trait::async_trait;
use dioxus_logger::tracing;
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::server::{error::ledger::LedgerError, ledger::CreditLedger};

const BALANCE_PATH: &str = "financial/account/balance";
const ACCOUNT_TYPE: &str = "USER";

/// Body of a SavaPage balance lookup.
#[derive(Debug, Deserialize)]
struct BalanceResponse {
    // SavaPage spells it this way.
    #[serde(rename = "succes", default)]
    success: bool,
    #[serde(default)]
    result: Option<f64>,
    #[serde(default)]
    error: Option<String>,
}

/// Credit ledger backed by the SavaPage REST API, authenticated as the admin user.
pub struct SavaPageClient {
    http_client: reqwest::Client,
    base_url: Url,
    admin: String,
    password: String,
}

impl SavaPageClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// `base_url` must end with `/` so that API paths join below it; `Config` takes care
    /// of that.
    pub fn new(
        http_client: reqwest::Client,
        base_url: Url,
        admin: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url,
            admin: admin.into(),
            password: password.into(),
        }
    }

    fn balance_url(&self, name: &str) -> Result<Url, LedgerError> {
        let mut url = self.base_url.join(BALANCE_PATH)?;
        url.query_pairs_mut()
            .append_pair("type", ACCOUNT_TYPE)
            .append_pair("name", name);
        Ok(url)
    }
}

#[async_trait]
impl CreditLedger for SavaPageClient {
    async fn balance(&self, name: &str) -> Result<f64, LedgerError> {
        let url = self.balance_url(name)?;

        let response = self
            .http_client
            .get(url)
            .basic_auth(&self.admin, Some(&self.password))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(LedgerError::Status(response.status()));
        }

        let body: BalanceResponse = response.json().await?;

        if !body.success {
            return Err(LedgerError::Rejected(
                body.error
                    .unwrap_or_else(|| format!("balance lookup for '{}' failed", name)),
            ));
        }

        Ok(body.result.unwrap_or(0.0))
    }

    async fn adjust(&self, name: &str, amount: f64, details: &str) -> Result<(), LedgerError> {
        let mut url = self.balance_url(name)?;
        url.query_pairs_mut()
            .append_pair("amount", &format!("{:.2}", amount))
            .append_pair("adjust", "true")
            .append_pair("details", details);

        let response = self
            .http_client
            .post(url)
            .basic_auth(&self.admin, Some(&self.password))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(LedgerError::Status(response.status()));
        }

        tracing::debug!("Adjusted SavaPage account {} by {:.2}", name, amount);

        Ok(())
    }
}
