use crate::api::{ApiClient, FetchError};
use crate::render::{render, RenderTargets};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Please enter a customer ID")]
    EmptyInput,

    #[error("Customer ID must contain digits only")]
    NonNumericInput,

    #[error("Failed to fetch customer data: {0}")]
    Fetch(FetchError),
}

/// The search field. Held explicitly rather than read from ambient state so
/// the clearing rules below are enforceable in one place.
#[derive(Debug, Default)]
pub struct SearchInput {
    value: String,
}

impl SearchInput {
    pub fn set(&mut self, raw: &str) {
        self.value = raw.to_string();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// Validates the held input, fetches the document and renders it. The field
/// is cleared on non-numeric input (preserved UX behavior) and on success;
/// it keeps its value while a fetch failure is being surfaced. The returned
/// error's `Display` form is the user-visible message. Awaiting `submit` to
/// completion before accepting new input is what sequences searches --
/// overlapping fetches cannot happen.
pub async fn submit(
    input: &mut SearchInput,
    client: &ApiClient,
    targets: &mut RenderTargets,
) -> Result<i64, SearchError> {
    let trimmed = input.value().trim().to_string();
    if trimmed.is_empty() {
        return Err(SearchError::EmptyInput);
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        input.clear();
        return Err(SearchError::NonNumericInput);
    }
    let customer_id: i64 = match trimmed.parse() {
        Ok(id) => id,
        Err(_) => {
            input.clear();
            return Err(SearchError::NonNumericInput);
        }
    };

    let document = client
        .fetch_itinerary(customer_id)
        .await
        .map_err(SearchError::Fetch)?;

    input.clear();
    render(&document, targets);
    Ok(customer_id)
}
