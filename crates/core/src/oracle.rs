//! Seam for the external availability-parsing service.
//!
//! Turning free text like "Monday afternoons, Wednesday all day" into
//! structured weekly windows is delegated to a separate parser service with
//! no correctness guarantee. Its output is plain untrusted input here: the
//! matcher validates every window before using it.

use async_trait::async_trait;
use eyre::Result;

use crate::models::availability::WeeklyTimeWindow;

/// A function from unstructured availability text to structured weekly
/// windows.
#[async_trait]
pub trait AvailabilityOracle: Send + Sync {
    /// Parses one free-text availability description into weekly windows.
    ///
    /// An `Err` here means the parser service itself failed; callers treat
    /// that as "zero windows" rather than failing the whole request.
    async fn parse_availability(&self, availability_text: &str) -> Result<Vec<WeeklyTimeWindow>>;
}

/// HTTP client for the availability parser service.
pub struct HttpAvailabilityOracle {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAvailabilityOracle {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl AvailabilityOracle for HttpAvailabilityOracle {
    async fn parse_availability(&self, availability_text: &str) -> Result<Vec<WeeklyTimeWindow>> {
        let response = self
            .client
            .post(format!("{}/parse-availability", self.base_url))
            .json(&serde_json::json!({ "availability_text": availability_text }))
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(eyre::eyre!(
                "Availability parser request failed: {}",
                error_text
            ));
        }

        let windows = response.json::<Vec<WeeklyTimeWindow>>().await?;
        tracing::debug!("Oracle parsed {} window(s)", windows.len());
        Ok(windows)
    }
}
