pub mod customer;
pub mod directory;
pub mod itinerary;
pub mod payment;
pub mod travel_class;

pub use customer::{Customer, CustomerRecord};
pub use directory::{CustomerDirectory, DirectoryError};
pub use itinerary::{Billing, Booking, Itinerary};
pub use payment::PaymentStatus;
