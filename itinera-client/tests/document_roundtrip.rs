//! Serializing a server-side record and rendering it on the client must
//! reproduce every field value verbatim, modulo date formatting and the
//! "N/A" substitution for nulls.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use itinera_client::document::ItineraryDocument;
use itinera_client::render::{render, RenderTargets};
use itinera_domain::{Billing, Booking, Customer, CustomerRecord, Itinerary};

fn server_record() -> CustomerRecord {
    CustomerRecord {
        customer: Customer {
            customer_id: 104,
            first_name: Some("Margaret".to_string()),
            last_name: Some("Chase".to_string()),
            email: Some("m.chase@example.com".to_string()),
            primary_phone: None,
            birth_date: NaiveDate::from_ymd_opt(1985, 3, 7),
            address: Some("40 Elm St".to_string()),
            city: Some("Victoria".to_string()),
            province: Some("BC".to_string()),
            country: Some("Canada".to_string()),
            postal_code: Some("V8W 1P6".to_string()),
        },
        itineraries: vec![Itinerary {
            itinerary_id: 5,
            travel_class: Some("OCNV".to_string()),
            booking_date: NaiveDate::from_ymd_opt(2024, 2, 14),
            num_of_travellers: Some(4),
            bookings: vec![Booking {
                booking_id: 9,
                start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
                end_date: NaiveDate::from_ymd_opt(2024, 5, 8),
                description: Some("Alaska cruise".to_string()),
                billings: vec![Billing {
                    billing_id: 42,
                    billing_date: NaiveDate::from_ymd_opt(2024, 2, 15),
                    bill_description: Some("Stateroom".to_string()),
                    base_price: Some(Decimal::new(189999, 2)),
                    agency_fee: Some(Decimal::new(10001, 2)),
                    total_amount: Some(Decimal::new(200000, 2)),
                    paid_amount: Some(Decimal::new(50000, 2)),
                }],
            }],
        }],
    }
}

#[test]
fn serialized_record_renders_every_field_verbatim() {
    let json = serde_json::to_string(&server_record()).unwrap();
    let document: ItineraryDocument = serde_json::from_str(&json).unwrap();

    let mut targets = RenderTargets::default();
    render(&document, &mut targets);

    // Customer fields, with N/A for the one null.
    assert!(targets.general_info.contains("Margaret"));
    assert!(targets.general_info.contains("Chase"));
    assert!(targets.general_info.contains("m.chase@example.com"));
    assert!(targets.general_info.contains("<strong>Primary Phone:</strong> N/A"));
    assert!(targets.general_info.contains("March 07, 1985"));
    assert!(targets.general_info.contains("40 Elm St"));
    assert!(targets.general_info.contains("V8W 1P6"));

    // Itinerary and booking fields.
    assert!(targets.itinerary_list.contains("Itinerary #5 (Ocean View)"));
    assert!(targets.itinerary_list.contains("February 14, 2024"));
    assert!(targets.itinerary_list.contains("<strong>Travellers:</strong> 4"));
    assert!(targets.itinerary_list.contains("Booking #9"));
    assert!(targets.itinerary_list.contains("May 01, 2024"));
    assert!(targets.itinerary_list.contains("May 08, 2024"));
    assert!(targets.itinerary_list.contains("Alaska cruise"));

    // Billing amounts come back to the cent.
    assert!(targets.itinerary_list.contains("$1899.99"));
    assert!(targets.itinerary_list.contains("$100.01"));
    assert!(targets.itinerary_list.contains("$2000.00"));
    assert!(targets.itinerary_list.contains("$500.00"));

    // 2000 owed vs 500 paid: both scopes unpaid.
    assert!(targets.itinerary_list.contains("class=\"itinerary unpaid\""));
    assert!(targets.itinerary_list.contains("class=\"booking unpaid\""));
}
