use chrono::{NaiveDate, NaiveTime};
use derive_new::new;
use shared::error::{AppError, AppResult};

/// A requested or booked time range: one calendar date plus a half-open
/// `[from, to)` wall-clock interval within that date. Cross-midnight
/// ranges are not representable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Slot {
    pub date: NaiveDate,
    pub from: NaiveTime,
    pub to: NaiveTime,
}

impl Slot {
    /// Half-open intersection test. A slot ending exactly when another
    /// begins does not overlap it. Slots on different dates never overlap.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.date == other.date && self.from < other.to && other.from < self.to
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.from >= self.to {
            return Err(AppError::InvalidTimeRange(format!(
                "start time {} must be before end time {}",
                self.from, self.to
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(date: &str, from: &str, to: &str) -> Slot {
        Slot::new(
            date.parse().unwrap(),
            from.parse().unwrap(),
            to.parse().unwrap(),
        )
    }

    #[test]
    fn overlapping_ranges_on_same_date_overlap() {
        let a = slot("2024-05-01", "09:00:00", "10:00:00");
        let b = slot("2024-05-01", "09:30:00", "10:30:00");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn contained_range_overlaps() {
        let outer = slot("2024-05-01", "09:00:00", "12:00:00");
        let inner = slot("2024-05-01", "10:00:00", "11:00:00");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn identical_ranges_overlap() {
        let a = slot("2024-05-01", "09:00:00", "10:00:00");
        assert!(a.overlaps(&a.clone()));
    }

    #[test]
    fn touching_boundary_does_not_overlap() {
        let a = slot("2024-05-01", "09:00:00", "10:00:00");
        let b = slot("2024-05-01", "10:00:00", "11:00:00");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        let a = slot("2024-05-01", "09:00:00", "10:00:00");
        let b = slot("2024-05-01", "14:00:00", "15:00:00");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn same_time_on_different_dates_does_not_overlap() {
        let a = slot("2024-05-01", "09:00:00", "10:00:00");
        let b = slot("2024-05-02", "09:00:00", "10:00:00");
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn validate_accepts_ordered_range() {
        assert!(slot("2024-05-01", "09:00:00", "10:00:00").validate().is_ok());
    }

    #[test]
    fn validate_rejects_reversed_range() {
        let res = slot("2024-05-01", "10:00:00", "09:00:00").validate();
        assert!(matches!(res, Err(AppError::InvalidTimeRange(_))));
    }

    #[test]
    fn validate_rejects_empty_range() {
        let res = slot("2024-05-01", "09:00:00", "09:00:00").validate();
        assert!(matches!(res, Err(AppError::InvalidTimeRange(_))));
    }
}
