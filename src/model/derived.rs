use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Salary bracket shown next to every employee.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Observation {
    /// below 1000
    Mediocre,
    /// 1000 to 5000 inclusive
    Moyen,
    /// above 5000
    Grand,
}

pub fn classify_salary(salary: Decimal) -> Observation {
    if salary < Decimal::ONE_THOUSAND {
        Observation::Mediocre
    } else if salary <= Decimal::from(5_000) {
        Observation::Moyen
    } else {
        Observation::Grand
    }
}

pub fn compute_total(days: u32, daily_rate: Decimal) -> Decimal {
    Decimal::from(days) * daily_rate
}

/// Money columns are DECIMAL(10,2); round the way MySQL would on insert.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
