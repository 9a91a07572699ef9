pub mod bookings;
pub mod showtimes;
