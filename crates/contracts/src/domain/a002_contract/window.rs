//! Contract validity window: end date and lifecycle status derived from the
//! start date and the duration in whole years.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Label the backend stores for a contract in force (also used for a
/// contract whose start date is still in the future)
pub const LABEL_IN_FORCE: &str = "Vigente";
/// Label for a contract past its end date
pub const LABEL_EXPIRED: &str = "Vencido";

/// Lifecycle state of a contract relative to a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractStatus {
    /// `today < start`
    Pending,
    /// `start <= today < end`
    Active,
    /// `today >= end`
    Expired,
}

impl ContractStatus {
    /// UI/backend label
    ///
    /// `Pending` shares the "Vigente" label with `Active`; the distinction
    /// only exists in the enum.
    pub fn label(&self) -> &'static str {
        match self {
            ContractStatus::Pending | ContractStatus::Active => LABEL_IN_FORCE,
            ContractStatus::Expired => LABEL_EXPIRED,
        }
    }
}

/// Start date plus duration in whole calendar years
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractWindow {
    pub start_date: NaiveDate,
    pub duration_years: u32,
}

impl ContractWindow {
    pub fn new(start_date: NaiveDate, duration_years: u32) -> Self {
        Self {
            start_date,
            duration_years,
        }
    }

    /// `start_date + duration_years`; `None` only on calendar overflow
    pub fn end_date(&self) -> Option<NaiveDate> {
        add_years(self.start_date, self.duration_years)
    }

    pub fn status_at(&self, today: NaiveDate) -> Option<ContractStatus> {
        status_at(today, Some(self.start_date), self.end_date())
    }
}

/// Add whole calendar years, keeping month and day
///
/// A Feb 29 start landing on a non-leap year rolls forward to March 1
/// (2024-02-29 + 1 year = 2025-03-01).
pub fn add_years(start: NaiveDate, years: u32) -> Option<NaiveDate> {
    let years = i32::try_from(years).ok()?;
    let year = start.year().checked_add(years)?;

    NaiveDate::from_ymd_opt(year, start.month(), start.day()).or_else(|| {
        if start.month() == 2 && start.day() == 29 {
            NaiveDate::from_ymd_opt(year, 3, 1)
        } else {
            None
        }
    })
}

/// Status of a contract on `today`; `None` when either bound is missing
pub fn status_at(
    today: NaiveDate,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Option<ContractStatus> {
    let (start, end) = (start?, end?);

    if today < start {
        Some(ContractStatus::Pending)
    } else if today >= end {
        Some(ContractStatus::Expired)
    } else {
        Some(ContractStatus::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_add_years() {
        assert_eq!(add_years(d("2023-03-15"), 2), Some(d("2025-03-15")));
        assert_eq!(add_years(d("2023-03-15"), 0), Some(d("2023-03-15")));
    }

    #[test]
    fn test_add_years_leap_day_rolls_to_march_first() {
        assert_eq!(add_years(d("2024-02-29"), 1), Some(d("2025-03-01")));
        assert_eq!(add_years(d("2024-02-29"), 4), Some(d("2028-02-29")));
    }

    #[test]
    fn test_status_boundaries() {
        let today = d("2025-06-15");
        assert_eq!(
            status_at(today, Some(d("2025-01-01")), Some(d("2025-06-15"))),
            Some(ContractStatus::Expired)
        );
        assert_eq!(
            status_at(today, Some(d("2025-01-01")), Some(d("2025-06-16"))),
            Some(ContractStatus::Active)
        );
        assert_eq!(
            status_at(today, Some(d("2025-06-15")), Some(d("2026-06-15"))),
            Some(ContractStatus::Active)
        );
        assert_eq!(
            status_at(today, Some(d("2025-07-01")), Some(d("2026-07-01"))),
            Some(ContractStatus::Pending)
        );
        assert_eq!(status_at(today, None, Some(d("2026-07-01"))), None);
        assert_eq!(status_at(today, Some(d("2025-07-01")), None), None);
    }

    #[test]
    fn test_future_start_shares_in_force_label() {
        assert_eq!(ContractStatus::Pending.label(), "Vigente");
        assert_eq!(ContractStatus::Active.label(), "Vigente");
        assert_eq!(ContractStatus::Expired.label(), "Vencido");
    }

    #[test]
    fn test_window() {
        let window = ContractWindow::new(d("2024-01-10"), 1);
        assert_eq!(window.end_date(), Some(d("2025-01-10")));
        assert_eq!(window.status_at(d("2024-06-01")), Some(ContractStatus::Active));
        assert_eq!(window.status_at(d("2025-01-10")), Some(ContractStatus::Expired));
    }
}
