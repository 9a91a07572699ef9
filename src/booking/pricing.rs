use std::collections::HashMap;

use crate::entities::{seat, showtime};

/// Computes the total price of a seat selection.
///
/// `seats` holds the validated seat rows of the selection, one per seat.
/// Returns `None` when the total does not fit in an `i64`.
pub trait PricingPolicy: Send + Sync {
    fn price(&self, showtime: &showtime::Model, seats: &[seat::Model]) -> Option<i64>;
}

/// Same rate for every seat.
#[derive(Debug, Clone, Copy)]
pub struct FlatRatePricing {
    pub rate: i64,
}

impl FlatRatePricing {
    pub fn new(rate: i64) -> Self {
        Self { rate }
    }
}

impl PricingPolicy for FlatRatePricing {
    fn price(&self, _showtime: &showtime::Model, seats: &[seat::Model]) -> Option<i64> {
        let count = i64::try_from(seats.len()).ok()?;
        self.rate.checked_mul(count)
    }
}

/// Rate looked up by `seat_type`, falling back to `default_rate`.
#[derive(Debug, Clone)]
pub struct SeatTypePricing {
    rates: HashMap<String, i64>,
    default_rate: i64,
}

impl SeatTypePricing {
    pub fn new(default_rate: i64) -> Self {
        Self {
            rates: HashMap::new(),
            default_rate,
        }
    }

    pub fn with_rate(mut self, seat_type: impl Into<String>, rate: i64) -> Self {
        self.rates.insert(seat_type.into(), rate);
        self
    }
}

impl PricingPolicy for SeatTypePricing {
    fn price(&self, _showtime: &showtime::Model, seats: &[seat::Model]) -> Option<i64> {
        seats
            .iter()
            .map(|s| self.rates.get(&s.seat_type).copied().unwrap_or(self.default_rate))
            .try_fold(0i64, i64::checked_add)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    fn showtime() -> showtime::Model {
        showtime::Model {
            id: 1,
            movie_id: 1,
            screen_id: 1,
            show_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            show_time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
        }
    }

    fn seat(id: i32, seat_type: &str) -> seat::Model {
        seat::Model {
            id,
            screen_id: 1,
            seat_number: id,
            seat_type: seat_type.to_string(),
        }
    }

    #[test]
    fn flat_rate_is_rate_times_seat_count() {
        let pricing = FlatRatePricing::new(200);
        for n in 1..=6 {
            let seats: Vec<_> = (1..=n).map(|i| seat(i, "standard")).collect();
            assert_eq!(pricing.price(&showtime(), &seats), Some(200 * n as i64));
        }
    }

    #[test]
    fn seat_type_pricing_uses_per_type_rates() {
        let pricing = SeatTypePricing::new(200).with_rate("vip", 350);
        let seats = vec![seat(1, "standard"), seat(2, "vip"), seat(3, "vip")];
        assert_eq!(pricing.price(&showtime(), &seats), Some(200 + 350 + 350));
    }

    #[test]
    fn seat_type_pricing_falls_back_to_default() {
        let pricing = SeatTypePricing::new(150).with_rate("vip", 300);
        let seats = vec![seat(1, "recliner")];
        assert_eq!(pricing.price(&showtime(), &seats), Some(150));
    }

    #[test]
    fn totals_that_overflow_are_refused() {
        let seats = vec![seat(1, "standard"), seat(2, "vip")];

        let flat = FlatRatePricing::new(i64::MAX);
        assert_eq!(flat.price(&showtime(), &seats), None);

        let typed = SeatTypePricing::new(i64::MAX).with_rate("vip", 1);
        assert_eq!(typed.price(&showtime(), &seats), None);
    }
}
