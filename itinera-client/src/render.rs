use chrono::NaiveDate;
use rust_decimal::Decimal;

use itinera_domain::{travel_class, PaymentStatus};

use crate::document::{
    BillingLine, BookingEntry, CustomerInfo, ItineraryDocument, ItinerarySection,
};

/// The two insertion points the renderer writes into. Passed explicitly so
/// nothing is bound to module-level state; both are cleared at the start of
/// every render, making a re-render idempotent.
#[derive(Debug, Default)]
pub struct RenderTargets {
    pub general_info: String,
    pub itinerary_list: String,
}

/// Renders the whole document into the two targets. Pure function of its
/// input; the same document always produces the same markup.
pub fn render(document: &ItineraryDocument, targets: &mut RenderTargets) {
    targets.general_info.clear();
    targets.itinerary_list.clear();

    render_general_info(&document.customer, &mut targets.general_info);

    targets.itinerary_list.push_str("<div class=\"itinerary-list\">\n");
    for itinerary in &document.itineraries {
        render_itinerary(itinerary, &mut targets.itinerary_list);
    }
    targets.itinerary_list.push_str("</div>\n");
}

/// Wraps the rendered targets in a standalone page.
pub fn page(targets: &RenderTargets) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Itinerary Lookup</title>\n</head>\n<body>\n{}{}</body>\n</html>\n",
        targets.general_info, targets.itinerary_list
    )
}

// The ten customer fields, in declared order.
fn render_general_info(customer: &CustomerInfo, out: &mut String) {
    let rows = [
        ("First Name", text_or_na(customer.first_name.as_deref())),
        ("Last Name", text_or_na(customer.last_name.as_deref())),
        ("Email", text_or_na(customer.email.as_deref())),
        ("Primary Phone", text_or_na(customer.primary_phone.as_deref())),
        ("Birth Date", date_or_na(customer.birth_date.as_deref())),
        ("Address", text_or_na(customer.address.as_deref())),
        ("City", text_or_na(customer.city.as_deref())),
        ("Province", text_or_na(customer.province.as_deref())),
        ("Country", text_or_na(customer.country.as_deref())),
        ("Postal Code", text_or_na(customer.postal_code.as_deref())),
    ];

    out.push_str("<div class=\"general-info\">\n");
    for (label, value) in rows {
        out.push_str(&format!("  <p><strong>{}:</strong> {}</p>\n", label, value));
    }
    out.push_str("</div>\n");
}

fn render_itinerary(itinerary: &ItinerarySection, out: &mut String) {
    let status = itinerary_status(itinerary);
    let class_label = match &itinerary.travel_class {
        Some(code) => travel_class::label(code),
        None => "Unknown",
    };

    out.push_str(&format!(
        "<details class=\"itinerary {}\">\n",
        status.css_class()
    ));
    out.push_str(&format!(
        "  <summary>Itinerary #{} ({})</summary>\n",
        itinerary.itinerary_id,
        escape(class_label)
    ));
    out.push_str(&format!(
        "  <p><strong>Booking Date:</strong> {}</p>\n",
        date_or_na(itinerary.booking_date.as_deref())
    ));
    out.push_str(&format!(
        "  <p><strong>Travellers:</strong> {}</p>\n",
        count_or_na(itinerary.num_of_travellers)
    ));

    for booking in &itinerary.bookings {
        render_booking(booking, out);
    }
    out.push_str("</details>\n");
}

fn render_booking(booking: &BookingEntry, out: &mut String) {
    let status = booking_status(booking);

    out.push_str(&format!(
        "  <details class=\"booking {}\">\n",
        status.css_class()
    ));
    out.push_str(&format!(
        "    <summary>Booking #{}</summary>\n",
        booking.booking_id
    ));
    out.push_str(&format!(
        "    <p><strong>Start Date:</strong> {}</p>\n",
        date_or_na(booking.start_date.as_deref())
    ));
    out.push_str(&format!(
        "    <p><strong>End Date:</strong> {}</p>\n",
        date_or_na(booking.end_date.as_deref())
    ));
    out.push_str(&format!(
        "    <p><strong>Description:</strong> {}</p>\n",
        text_or_na(booking.description.as_deref())
    ));

    if booking.billings.is_empty() {
        out.push_str("    <p class=\"no-billings\">No billing records</p>\n");
    } else {
        out.push_str("    <table class=\"billings\">\n");
        out.push_str(
            "      <tr><th>Billing ID</th><th>Date</th><th>Description</th>\
             <th>Base Price</th><th>Agency Fee</th><th>Total</th><th>Paid</th></tr>\n",
        );
        for billing in &booking.billings {
            render_billing_row(billing, out);
        }
        out.push_str("    </table>\n");
    }
    out.push_str("  </details>\n");
}

fn render_billing_row(billing: &BillingLine, out: &mut String) {
    out.push_str(&format!(
        "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        billing.billing_id,
        date_or_na(billing.billing_date.as_deref()),
        text_or_na(billing.bill_description.as_deref()),
        money_or_na(billing.base_price),
        money_or_na(billing.agency_fee),
        money_or_na(billing.total_amount),
        money_or_na(billing.paid_amount),
    ));
}

/// A booking is paid when its own billings settle.
fn booking_status(booking: &BookingEntry) -> PaymentStatus {
    PaymentStatus::from_amounts(
        booking
            .billings
            .iter()
            .map(|b| (b.total_amount, b.paid_amount)),
    )
}

/// An itinerary is paid when the union of all its bookings' billings settles.
fn itinerary_status(itinerary: &ItinerarySection) -> PaymentStatus {
    PaymentStatus::from_amounts(
        itinerary
            .bookings
            .iter()
            .flat_map(|bk| bk.billings.iter())
            .map(|b| (b.total_amount, b.paid_amount)),
    )
}

fn text_or_na(value: Option<&str>) -> String {
    match value {
        Some(v) => escape(v),
        None => "N/A".to_string(),
    }
}

fn count_or_na(value: Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "N/A".to_string(),
    }
}

// Missing amounts render "N/A", never "$0".
fn money_or_na(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format!("${}", v),
        None => "N/A".to_string(),
    }
}

/// Formats an ISO date as `Month DD, YYYY`. Null or unparseable dates render
/// "N/A" -- the one canonical fallback policy.
fn date_or_na(value: Option<&str>) -> String {
    value
        .and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
        .map(|d| d.format("%B %d, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ItineraryDocument;

    fn document(value: serde_json::Value) -> ItineraryDocument {
        serde_json::from_value(value).unwrap()
    }

    fn paid_scenario() -> ItineraryDocument {
        document(serde_json::json!({
            "customer": {
                "customer_id": 104,
                "first_name": "Grace",
                "last_name": "Hopper",
                "email": null,
                "primary_phone": "555-0104",
                "birth_date": "1990-12-09",
                "address": "1 Harbour St",
                "city": "Halifax",
                "province": "NS",
                "country": "Canada",
                "postal_code": "B3H 1A1"
            },
            "itineraries": [{
                "itinerary_id": 11,
                "travel_class": "ECN",
                "booking_date": "2024-06-01",
                "num_of_travellers": 2,
                "bookings": [{
                    "booking_id": 21,
                    "start_date": "2024-07-10",
                    "end_date": "2024-07-24",
                    "description": "Return flight",
                    "billings": [{
                        "billing_id": 31,
                        "billing_date": "2024-06-02",
                        "bill_description": "Airfare",
                        "base_price": "450.00",
                        "agency_fee": "50.00",
                        "total_amount": "500.00",
                        "paid_amount": "500.00"
                    }]
                }]
            }]
        }))
    }

    #[test]
    fn paid_scenario_tags_sections_paid_and_resolves_economy() {
        let mut targets = RenderTargets::default();
        render(&paid_scenario(), &mut targets);

        assert!(targets.itinerary_list.contains("class=\"itinerary paid\""));
        assert!(targets.itinerary_list.contains("class=\"booking paid\""));
        assert!(targets.itinerary_list.contains("(Economy)"));
        assert!(targets.itinerary_list.contains("$500.00"));
    }

    #[test]
    fn shortfall_tags_sections_unpaid() {
        let mut doc = paid_scenario();
        doc.itineraries[0].bookings[0].billings[0].paid_amount = Some("100.00".parse().unwrap());
        let mut targets = RenderTargets::default();
        render(&doc, &mut targets);

        assert!(targets.itinerary_list.contains("class=\"itinerary unpaid\""));
        assert!(targets.itinerary_list.contains("class=\"booking unpaid\""));
    }

    #[test]
    fn null_paid_amount_sums_as_zero_but_renders_na() {
        let mut doc = paid_scenario();
        doc.itineraries[0].bookings[0].billings[0].paid_amount = None;
        let mut targets = RenderTargets::default();
        render(&doc, &mut targets);

        // Unpaid because the missing payment counted as zero...
        assert!(targets.itinerary_list.contains("class=\"booking unpaid\""));
        // ...but the cell shows N/A, not $0.
        assert!(targets.itinerary_list.contains("<td>N/A</td>"));
        assert!(!targets.itinerary_list.contains("$0"));
    }

    #[test]
    fn customer_fields_render_in_order_with_na_fallback() {
        let mut targets = RenderTargets::default();
        render(&paid_scenario(), &mut targets);

        assert!(targets.general_info.contains("<strong>First Name:</strong> Grace"));
        assert!(targets.general_info.contains("<strong>Email:</strong> N/A"));
        assert!(targets.general_info.contains("<strong>Birth Date:</strong> December 09, 1990"));

        let first = targets.general_info.find("First Name").unwrap();
        let last = targets.general_info.find("Postal Code").unwrap();
        assert!(first < last);
    }

    #[test]
    fn unknown_travel_class_renders_unknown() {
        let mut doc = paid_scenario();
        doc.itineraries[0].travel_class = Some("ZZZ".to_string());
        let mut targets = RenderTargets::default();
        render(&doc, &mut targets);
        assert!(targets.itinerary_list.contains("(Unknown)"));
    }

    #[test]
    fn unparseable_date_renders_na() {
        let mut doc = paid_scenario();
        doc.itineraries[0].booking_date = Some("not-a-date".to_string());
        let mut targets = RenderTargets::default();
        render(&doc, &mut targets);
        assert!(targets
            .itinerary_list
            .contains("<strong>Booking Date:</strong> N/A"));
    }

    #[test]
    fn empty_itineraries_render_empty_section_with_customer_info() {
        let mut doc = paid_scenario();
        doc.itineraries.clear();
        let mut targets = RenderTargets::default();
        render(&doc, &mut targets);

        assert!(targets.general_info.contains("Grace"));
        assert_eq!(
            targets.itinerary_list,
            "<div class=\"itinerary-list\">\n</div>\n"
        );
    }

    #[test]
    fn rerender_replaces_previous_output() {
        let mut targets = RenderTargets::default();
        render(&paid_scenario(), &mut targets);
        let first = targets.itinerary_list.clone();
        render(&paid_scenario(), &mut targets);
        assert_eq!(targets.itinerary_list, first);
    }

    #[test]
    fn interpolated_text_is_escaped() {
        let mut doc = paid_scenario();
        doc.itineraries[0].bookings[0].description =
            Some("<script>alert(1)</script>".to_string());
        let mut targets = RenderTargets::default();
        render(&doc, &mut targets);
        assert!(!targets.itinerary_list.contains("<script>"));
        assert!(targets.itinerary_list.contains("&lt;script&gt;"));
    }
}
