pub mod booked_seat;
pub mod booking;
pub mod log_entry;
pub mod movie;
pub mod screen;
pub mod seat;
pub mod showtime;
pub mod theater;
