use std::collections::BTreeSet;

use crate::error::{BookingError, BookingResult};

/// A non-empty, deduplicated set of positive seat ids, iterated in
/// ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatSelection(BTreeSet<i32>);

impl SeatSelection {
    pub fn new(seat_ids: impl IntoIterator<Item = i32>) -> BookingResult<Self> {
        let mut ids = BTreeSet::new();
        for id in seat_ids {
            if id <= 0 {
                return Err(BookingError::InvalidSeatId(id));
            }
            ids.insert(id);
        }

        if ids.is_empty() {
            return Err(BookingError::EmptySelection);
        }

        Ok(Self(ids))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, seat_id: i32) -> bool {
        self.0.contains(&seat_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }
}
