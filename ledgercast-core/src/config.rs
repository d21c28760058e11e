//! Forecast configuration — the TOML document and its validated plan.
//!
//! Parsing is split in two, so the raw document shape and the domain rules
//! fail separately:
//! - `ForecastConfig` is the document exactly as written on disk (dates and
//!   recurrence kinds still strings).
//! - `ForecastConfig::to_plan()` validates those strings into a
//!   `ForecastPlan`, the immutable value the simulation consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::domain::{Recurrence, Transaction, UnknownRecurrence};

/// Date format used across the configuration surface.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors from loading or validating a forecast configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field}: invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: String, value: String },
    #[error("transaction '{name}': {source}")]
    Recurrence {
        name: String,
        source: UnknownRecurrence,
    },
}

/// Raw configuration document.
///
/// Field names follow the document format (`Balance`, `BalanceDate`,
/// `[Transactions.<name>]`), so a file is deserialized without renames on
/// the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForecastConfig {
    pub balance: f64,
    pub balance_date: String,
    /// Transaction entries keyed by name. A BTreeMap keeps iteration in
    /// name order, so summaries and error messages are deterministic.
    #[serde(default)]
    pub transactions: BTreeMap<String, TransactionSpec>,
}

/// One `[Transactions.<name>]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionSpec {
    pub date: String,
    pub amount: f64,
    pub recurring: String,
}

impl ForecastConfig {
    /// Load a forecast configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a forecast configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Validate dates and recurrence kinds into an immutable plan.
    ///
    /// Any unknown recurrence kind fails the whole conversion — the
    /// simulation never starts with a rule it cannot expand.
    pub fn to_plan(&self) -> Result<ForecastPlan, ConfigError> {
        let start_date = parse_date("BalanceDate", &self.balance_date)?;

        let mut transactions = Vec::with_capacity(self.transactions.len());
        for (name, spec) in &self.transactions {
            let date = parse_date(&format!("Transactions.{name}.Date"), &spec.date)?;
            let recurrence = spec
                .recurring
                .parse::<Recurrence>()
                .map_err(|source| ConfigError::Recurrence {
                    name: name.clone(),
                    source,
                })?;
            transactions.push(Transaction {
                name: name.clone(),
                date,
                amount: spec.amount,
                recurrence,
            });
        }

        Ok(ForecastPlan {
            opening_balance: self.balance,
            start_date,
            transactions,
        })
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ConfigError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Validated, immutable forecast inputs.
///
/// The simulation derives its own mutable state from a plan and never
/// modifies the plan itself, so the parsed configuration stays available
/// for display or a later re-run.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPlan {
    pub opening_balance: f64,
    pub start_date: NaiveDate,
    /// In name order, each still carrying its configured (unaligned) date.
    pub transactions: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
Balance = 1000.0
BalanceDate = "2024-01-01"

[Transactions.rent]
Date = "2024-01-01"
Amount = -500.0
Recurring = "monthly"

[Transactions.salary]
Date = "2024-01-15"
Amount = 2500.0
Recurring = "Monthly"
"#;

    #[test]
    fn parses_sample_document() {
        let config = ForecastConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.balance, 1000.0);
        assert_eq!(config.balance_date, "2024-01-01");
        assert_eq!(config.transactions.len(), 2);
        assert_eq!(config.transactions["rent"].amount, -500.0);
    }

    #[test]
    fn plan_orders_transactions_by_name() {
        let plan = ForecastConfig::from_toml(SAMPLE).unwrap().to_plan().unwrap();
        assert_eq!(plan.opening_balance, 1000.0);
        assert_eq!(
            plan.start_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        let names: Vec<&str> = plan.transactions.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["rent", "salary"]);
    }

    #[test]
    fn recurrence_kind_is_case_insensitive() {
        let plan = ForecastConfig::from_toml(SAMPLE).unwrap().to_plan().unwrap();
        assert_eq!(plan.transactions[1].recurrence, Recurrence::Monthly);
    }

    #[test]
    fn transactions_table_is_optional() {
        let config = ForecastConfig::from_toml(
            "Balance = 250.0\nBalanceDate = \"2024-06-01\"\n",
        )
        .unwrap();
        let plan = config.to_plan().unwrap();
        assert!(plan.transactions.is_empty());
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let err = ForecastConfig::from_toml("Balance = 250.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn mistyped_amount_is_a_parse_error() {
        let doc = SAMPLE.replace("Amount = -500.0", "Amount = \"five hundred\"");
        assert!(matches!(
            ForecastConfig::from_toml(&doc),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn invalid_date_names_the_field() {
        let doc = SAMPLE.replace("\"2024-01-01\"", "\"01/01/2024\"");
        let err = ForecastConfig::from_toml(&doc).unwrap().to_plan().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("BalanceDate"), "got: {message}");
        assert!(message.contains("01/01/2024"), "got: {message}");
    }

    #[test]
    fn unknown_recurrence_names_the_transaction() {
        let doc = SAMPLE.replace("\"monthly\"", "\"biweekly\"");
        let err = ForecastConfig::from_toml(&doc).unwrap().to_plan().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("rent"), "got: {message}");
        assert!(message.contains("biweekly"), "got: {message}");
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = ForecastConfig::from_file(Path::new("no/such/forecast.toml")).unwrap_err();
        assert!(err.to_string().contains("no/such/forecast.toml"));
    }
}
