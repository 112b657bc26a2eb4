use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A travel plan belonging to one customer. `travel_class` holds the raw
/// enumerated code (e.g. "ECN"); label resolution happens at render time via
/// [`crate::travel_class::label`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    pub itinerary_id: i64,
    pub travel_class: Option<String>,
    pub booking_date: Option<NaiveDate>,
    pub num_of_travellers: Option<i64>,
    pub bookings: Vec<Booking>,
}

/// A single reservation within an itinerary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: i64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub billings: Vec<Billing>,
}

/// A monetary record tied to one booking. Amounts are NUMERIC(10,2) in the
/// store and serialize as decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Billing {
    pub billing_id: i64,
    pub billing_date: Option<NaiveDate>,
    pub bill_description: Option<String>,
    pub base_price: Option<Decimal>,
    pub agency_fee: Option<Decimal>,
    pub total_amount: Option<Decimal>,
    pub paid_amount: Option<Decimal>,
}
