use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::itinerary::Itinerary;

/// Read-only projection of a customer row. Every nullable column stays an
/// `Option` so that missing values serialize as explicit JSON `null` --
/// clients rely on field presence for their "N/A" fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub primary_phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

/// The full aggregate returned by a lookup: one customer plus every
/// itinerary, booking and billing that hangs off it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer: Customer,
    pub itineraries: Vec<Itinerary>,
}
