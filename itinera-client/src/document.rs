use rust_decimal::Decimal;
use serde::Deserialize;

/// Client-side view of the lookup document. Dates stay raw strings here so a
/// malformed value degrades to "N/A" at render time instead of failing the
/// whole deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ItineraryDocument {
    pub customer: CustomerInfo,
    #[serde(default)]
    pub itineraries: Vec<ItinerarySection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerInfo {
    #[serde(default)]
    pub customer_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub primary_phone: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItinerarySection {
    pub itinerary_id: i64,
    pub travel_class: Option<String>,
    pub booking_date: Option<String>,
    pub num_of_travellers: Option<i64>,
    #[serde(default)]
    pub bookings: Vec<BookingEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingEntry {
    pub booking_id: i64,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub billings: Vec<BillingLine>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BillingLine {
    pub billing_id: i64,
    pub billing_date: Option<String>,
    pub bill_description: Option<String>,
    pub base_price: Option<Decimal>,
    pub agency_fee: Option<Decimal>,
    pub total_amount: Option<Decimal>,
    pub paid_amount: Option<Decimal>,
}
