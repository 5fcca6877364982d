use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{MySqlConnection, MySqlPool};
use tracing::debug;

use crate::error::AppResult;
use crate::model::employee::{EmployeeInput, EmployeeRow};
use crate::model::visitor::{VisitorInput, VisitorRow};
use crate::store::{EmployeeStore, VisitorStore};

// Ids and days are cast so signed INT tables decode the same as UNSIGNED ones.
const EMPLOYEE_COLUMNS: &str = "CAST(numEmp AS UNSIGNED) AS numEmp, nom, salaire, created_at";
const VISITOR_COLUMNS: &str = "CAST(id AS UNSIGNED) AS id, name, CAST(days AS UNSIGNED) AS days, \
     daily_rate, total_amount, created_at";

#[derive(Clone)]
pub struct MySqlEmployeeStore {
    pool: MySqlPool,
}

impl MySqlEmployeeStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

async fn fetch_employee(
    conn: &mut MySqlConnection,
    num_emp: u64,
) -> Result<Option<EmployeeRow>, sqlx::Error> {
    let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE numEmp = ?");
    sqlx::query_as::<_, EmployeeRow>(&sql)
        .bind(num_emp)
        .fetch_optional(&mut *conn)
        .await
}

#[async_trait]
impl EmployeeStore for MySqlEmployeeStore {
    async fn list(&self) -> AppResult<Vec<EmployeeRow>> {
        let mut conn = self.pool.acquire().await?;

        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY numEmp DESC");
        debug!(sql = %sql, "Fetching employees");

        let rows = sqlx::query_as::<_, EmployeeRow>(&sql)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, input: &EmployeeInput) -> AppResult<EmployeeRow> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("INSERT INTO employees (nom, salaire) VALUES (?, ?)")
            .bind(&input.nom)
            .bind(input.salaire)
            .execute(&mut *conn)
            .await?;

        let num_emp = result.last_insert_id();
        debug!(num_emp, "Employee inserted, reading back");

        // A concurrent delete can remove the row before the read-back.
        let row = fetch_employee(&mut conn, num_emp)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        Ok(row)
    }

    async fn update(&self, num_emp: u64, input: &EmployeeInput) -> AppResult<Option<EmployeeRow>> {
        let mut conn = self.pool.acquire().await?;

        // rows_affected() is 0 for unchanged rows too, so the read-back decides.
        sqlx::query("UPDATE employees SET nom = ?, salaire = ? WHERE numEmp = ?")
            .bind(&input.nom)
            .bind(input.salaire)
            .bind(num_emp)
            .execute(&mut *conn)
            .await?;

        Ok(fetch_employee(&mut conn, num_emp).await?)
    }

    async fn delete(&self, num_emp: u64) -> AppResult<bool> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM employees WHERE numEmp = ?")
            .bind(num_emp)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Clone)]
pub struct MySqlVisitorStore {
    pool: MySqlPool,
}

impl MySqlVisitorStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

async fn fetch_visitor(conn: &mut MySqlConnection, id: u64) -> Result<Option<VisitorRow>, sqlx::Error> {
    let sql = format!("SELECT {VISITOR_COLUMNS} FROM visitors WHERE id = ?");
    sqlx::query_as::<_, VisitorRow>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

#[async_trait]
impl VisitorStore for MySqlVisitorStore {
    async fn list(&self) -> AppResult<Vec<VisitorRow>> {
        let mut conn = self.pool.acquire().await?;

        let sql = format!("SELECT {VISITOR_COLUMNS} FROM visitors ORDER BY created_at DESC, id DESC");
        debug!(sql = %sql, "Fetching visitors");

        let rows = sqlx::query_as::<_, VisitorRow>(&sql)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, input: &VisitorInput, total_amount: Decimal) -> AppResult<VisitorRow> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO visitors (name, days, daily_rate, total_amount)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&input.name)
        .bind(input.days)
        .bind(input.daily_rate)
        .bind(total_amount)
        .execute(&mut *conn)
        .await?;

        let id = result.last_insert_id();
        debug!(id, "Visitor inserted, reading back");

        let row = fetch_visitor(&mut conn, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        Ok(row)
    }

    async fn update(
        &self,
        id: u64,
        input: &VisitorInput,
        total_amount: Decimal,
    ) -> AppResult<Option<VisitorRow>> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query(
            r#"
            UPDATE visitors
            SET name = ?, days = ?, daily_rate = ?, total_amount = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.name)
        .bind(input.days)
        .bind(input.daily_rate)
        .bind(total_amount)
        .bind(id)
        .execute(&mut *conn)
        .await?;

        Ok(fetch_visitor(&mut conn, id).await?)
    }

    async fn delete(&self, id: u64) -> AppResult<bool> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM visitors WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
