//! Seat availability and the booking transaction.
//!
//! Reads go through [`availability`]; writes go through [`transaction::book`],
//! which is the only place booked seats are ever created. [`BookingService`]
//! is the entry point the HTTP layer uses.

pub mod availability;
pub mod conflict;
pub mod pricing;
pub mod selection;
pub mod service;
pub mod transaction;

pub use availability::{SeatAvailability, SeatMap};
pub use pricing::{FlatRatePricing, PricingPolicy, SeatTypePricing};
pub use selection::SeatSelection;
pub use service::{AuthContext, BookingService, UserBooking};
pub use transaction::BookingConfirmation;
