//! Recurrence — the fixed periodic intervals a transaction repeats on.

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How often a transaction repeats.
///
/// Day-based kinds shift by a fixed number of days. Month- and year-based
/// kinds use calendar arithmetic: the day-of-month is clamped to the target
/// month's length, so Jan 31 + one month lands on Feb 28 (or 29).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    Fortnightly,
    Monthly,
    Quarterly,
    Yearly,
}

/// A recurrence string outside the six known kinds.
///
/// This is a fatal configuration error: a forecast with an unknown
/// recurrence rule cannot produce a trustworthy ledger, so the whole run
/// aborts rather than skipping the transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown recurrence '{0}' (expected daily, weekly, fortnightly, monthly, quarterly, or yearly)")]
pub struct UnknownRecurrence(pub String);

impl Recurrence {
    /// All six kinds, shortest period first.
    pub const ALL: [Recurrence; 6] = [
        Recurrence::Daily,
        Recurrence::Weekly,
        Recurrence::Fortnightly,
        Recurrence::Monthly,
        Recurrence::Quarterly,
        Recurrence::Yearly,
    ];

    /// The next occurrence strictly after `from`.
    pub fn next_occurrence(self, from: NaiveDate) -> NaiveDate {
        match self {
            Recurrence::Daily => from + Duration::days(1),
            Recurrence::Weekly => from + Duration::days(7),
            Recurrence::Fortnightly => from + Duration::days(14),
            Recurrence::Monthly => from + Months::new(1),
            Recurrence::Quarterly => from + Months::new(3),
            Recurrence::Yearly => from + Months::new(12),
        }
    }

    /// Fast-forward `original` to the first occurrence on or after `reference`.
    ///
    /// Returns `original` unchanged when it already lies on or after
    /// `reference` (zero iterations). Occurrences skipped by the
    /// fast-forward are never applied — there is no retroactive catch-up.
    pub fn first_on_or_after(self, original: NaiveDate, reference: NaiveDate) -> NaiveDate {
        let mut date = original;
        while date < reference {
            date = self.next_occurrence(date);
        }
        date
    }

    /// Lowercase name, as written in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Fortnightly => "fortnightly",
            Recurrence::Monthly => "monthly",
            Recurrence::Quarterly => "quarterly",
            Recurrence::Yearly => "yearly",
        }
    }
}

impl FromStr for Recurrence {
    type Err = UnknownRecurrence;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Recurrence::Daily),
            "weekly" => Ok(Recurrence::Weekly),
            "fortnightly" => Ok(Recurrence::Fortnightly),
            "monthly" => Ok(Recurrence::Monthly),
            "quarterly" => Ok(Recurrence::Quarterly),
            "yearly" => Ok(Recurrence::Yearly),
            _ => Err(UnknownRecurrence(s.to_string())),
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
