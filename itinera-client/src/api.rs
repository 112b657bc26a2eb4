use tracing::debug;

use crate::document::ItineraryDocument;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Customer not found (ID: {0})")]
    NotFound(i64),

    #[error("server responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn fetch_itinerary(
        &self,
        customer_id: i64,
    ) -> Result<ItineraryDocument, FetchError> {
        let url = format!(
            "{}/itinerary/{}",
            self.base_url.trim_end_matches('/'),
            customer_id
        );
        debug!(%url, "fetching itinerary document");

        let response = self.http.get(&url).send().await?;
        match response.status() {
            reqwest::StatusCode::NOT_FOUND => Err(FetchError::NotFound(customer_id)),
            status if !status.is_success() => Err(FetchError::Status(status)),
            _ => Ok(response.json().await?),
        }
    }
}
