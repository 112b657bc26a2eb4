use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;

use itinera_domain::{
    Billing, Booking, Customer, CustomerDirectory, CustomerRecord, DirectoryError, Itinerary,
};

/// Postgres-backed record aggregator. Child rows are fetched as batched
/// lookups keyed by parent-identifier sets rather than one query per parent
/// row, so a full record costs at most four queries.
pub struct PgCustomerDirectory {
    pool: PgPool,
}

impl PgCustomerDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal structs for type-safe querying
#[derive(sqlx::FromRow)]
struct CustomerRow {
    customer_id: i64,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    primary_phone: Option<String>,
    birth_date: Option<NaiveDate>,
    address: Option<String>,
    city: Option<String>,
    province: Option<String>,
    country: Option<String>,
    postal_code: Option<String>,
}

#[derive(sqlx::FromRow)]
struct ItineraryRow {
    itinerary_id: i64,
    travel_class: Option<String>,
    booking_date: Option<NaiveDate>,
    num_of_travellers: Option<i64>,
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    booking_id: i64,
    itinerary_id: i64,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    description: Option<String>,
}

#[derive(sqlx::FromRow)]
struct BillingRow {
    billing_id: i64,
    booking_id: i64,
    billing_date: Option<NaiveDate>,
    bill_description: Option<String>,
    base_price: Option<Decimal>,
    agency_fee: Option<Decimal>,
    total_amount: Option<Decimal>,
    paid_amount: Option<Decimal>,
}

#[async_trait]
impl CustomerDirectory for PgCustomerDirectory {
    async fn customer_record(&self, customer_id: i64) -> Result<CustomerRecord, DirectoryError> {
        debug!(customer_id, "aggregating customer record");

        let customer = sqlx::query_as::<_, CustomerRow>(
            "SELECT customer_id, first_name, last_name, email, primary_phone, birth_date, \
             address, city, province, country, postal_code \
             FROM customer WHERE customer_id = $1",
        )
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?
        .ok_or(DirectoryError::NotFound(customer_id))?;

        let itineraries = sqlx::query_as::<_, ItineraryRow>(
            "SELECT itinerary_id, travel_class, booking_date, num_of_travellers \
             FROM itinerary WHERE customer_id = $1 ORDER BY itinerary_id",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;
        debug!(customer_id, count = itineraries.len(), "fetched itineraries");

        let itinerary_ids: Vec<i64> = itineraries.iter().map(|i| i.itinerary_id).collect();
        let bookings = if itinerary_ids.is_empty() {
            Vec::new()
        } else {
            sqlx::query_as::<_, BookingRow>(
                "SELECT booking_id, itinerary_id, start_date, end_date, description \
                 FROM booking WHERE itinerary_id = ANY($1) ORDER BY booking_id",
            )
            .bind(&itinerary_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?
        };
        debug!(customer_id, count = bookings.len(), "fetched bookings");

        let booking_ids: Vec<i64> = bookings.iter().map(|b| b.booking_id).collect();
        let billings = if booking_ids.is_empty() {
            Vec::new()
        } else {
            sqlx::query_as::<_, BillingRow>(
                "SELECT billing_id, booking_id, billing_date, bill_description, base_price, \
                 agency_fee, total_amount, paid_amount \
                 FROM billing WHERE booking_id = ANY($1) ORDER BY billing_id",
            )
            .bind(&booking_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?
        };
        debug!(customer_id, count = billings.len(), "fetched billings");

        Ok(assemble(customer, itineraries, bookings, billings))
    }
}

fn db_err(err: sqlx::Error) -> DirectoryError {
    DirectoryError::Database(Box::new(err))
}

/// Regroups the flat row sets into the nested record. Child rows keep their
/// query order within each parent.
fn assemble(
    customer: CustomerRow,
    itineraries: Vec<ItineraryRow>,
    bookings: Vec<BookingRow>,
    billings: Vec<BillingRow>,
) -> CustomerRecord {
    let mut billings_by_booking: HashMap<i64, Vec<Billing>> = HashMap::new();
    for row in billings {
        billings_by_booking
            .entry(row.booking_id)
            .or_default()
            .push(Billing {
                billing_id: row.billing_id,
                billing_date: row.billing_date,
                bill_description: row.bill_description,
                base_price: row.base_price,
                agency_fee: row.agency_fee,
                total_amount: row.total_amount,
                paid_amount: row.paid_amount,
            });
    }

    let mut bookings_by_itinerary: HashMap<i64, Vec<Booking>> = HashMap::new();
    for row in bookings {
        let billings = billings_by_booking
            .remove(&row.booking_id)
            .unwrap_or_default();
        bookings_by_itinerary
            .entry(row.itinerary_id)
            .or_default()
            .push(Booking {
                booking_id: row.booking_id,
                start_date: row.start_date,
                end_date: row.end_date,
                description: row.description,
                billings,
            });
    }

    let itineraries = itineraries
        .into_iter()
        .map(|row| Itinerary {
            bookings: bookings_by_itinerary
                .remove(&row.itinerary_id)
                .unwrap_or_default(),
            itinerary_id: row.itinerary_id,
            travel_class: row.travel_class,
            booking_date: row.booking_date,
            num_of_travellers: row.num_of_travellers,
        })
        .collect();

    CustomerRecord {
        customer: Customer {
            customer_id: customer.customer_id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            primary_phone: customer.primary_phone,
            birth_date: customer.birth_date,
            address: customer.address,
            city: customer.city,
            province: customer.province,
            country: customer.country,
            postal_code: customer.postal_code,
        },
        itineraries,
    }
}
