use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::derived::{Observation, classify_salary, round_money};
use crate::model::validation::{validate_money, validate_name};

/// Row of the `employees` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EmployeeRow {
    #[sqlx(rename = "numEmp")]
    pub num_emp: u64,
    pub nom: String,
    pub salaire: Decimal,
    /// Nullable in tables created without `NOT NULL`.
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "numEmp": 1,
        "nom": "Alice",
        "salaire": 800.0,
        "observation": "mediocre",
        "createdAt": "2026-01-01T09:30:00Z"
    })
)]
pub struct Employee {
    #[serde(rename = "numEmp")]
    #[schema(example = 1)]
    pub num_emp: u64,

    #[schema(example = "Alice")]
    pub nom: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(example = 800.0, value_type = f64)]
    pub salaire: Decimal,

    pub observation: Observation,

    #[serde(rename = "createdAt")]
    #[schema(example = "2026-01-01T09:30:00Z", format = "date-time", value_type = Option<String>)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            observation: classify_salary(row.salaire),
            num_emp: row.num_emp,
            nom: row.nom,
            salaire: row.salaire,
            created_at: row.created_at,
        }
    }
}

/// Body of `POST /employees` and `PUT /employees/{numEmp}`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct EmployeeInput {
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Alice")]
    pub nom: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_money"))]
    #[schema(example = 800.0, value_type = f64)]
    pub salaire: Decimal,
}

impl EmployeeInput {
    pub fn new(nom: impl Into<String>, salaire: Decimal) -> Self {
        Self {
            nom: nom.into(),
            salaire,
        }
    }

    /// Trimmed name, salary rounded to the column scale.
    pub fn normalized(self) -> Self {
        Self {
            nom: self.nom.trim().to_string(),
            salaire: round_money(self.salaire),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ObservationDistribution {
    pub mediocre: usize,
    pub moyen: usize,
    pub grand: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStatistics {
    #[schema(example = 3)]
    pub total_employees: usize,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(example = 9800.0, value_type = f64)]
    pub total_salaires: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(example = 3266.67, value_type = f64)]
    pub moyenne_salaire: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(example = 800.0, value_type = f64)]
    pub min_salaire: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(example = 6000.0, value_type = f64)]
    pub max_salaire: Decimal,
    pub distribution: ObservationDistribution,
}

impl EmployeeStatistics {
    /// Payroll summary; every figure is zero for an empty list.
    pub fn from_records(employees: &[Employee]) -> Self {
        if employees.is_empty() {
            return Self::default();
        }

        let mut stats = Self {
            total_employees: employees.len(),
            min_salaire: employees[0].salaire,
            max_salaire: employees[0].salaire,
            ..Self::default()
        };

        for employee in employees {
            stats.total_salaires += employee.salaire;
            stats.min_salaire = stats.min_salaire.min(employee.salaire);
            stats.max_salaire = stats.max_salaire.max(employee.salaire);
            match classify_salary(employee.salaire) {
                Observation::Mediocre => stats.distribution.mediocre += 1,
                Observation::Moyen => stats.distribution.moyen += 1,
                Observation::Grand => stats.distribution.grand += 1,
            }
        }
        stats.moyenne_salaire =
            round_money(stats.total_salaires / Decimal::from(stats.total_employees));

        stats
    }
}
