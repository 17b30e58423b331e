use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::{debug, error};

use super::EmployeeRepository;
use crate::error::StoreError;
use crate::model::employee::{Employee, EmployeeChanges, NewEmployee};
use crate::model::salary::SalaryAggregate;
use crate::utils::db_utils::{build_employee_update, execute_update};

const SELECT_EMPLOYEE: &str = "SELECT id, full_name, job_title, country, salary FROM employees";

#[derive(Clone)]
pub struct MySqlEmployeeRepository {
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn insert(&self, new: NewEmployee) -> Result<Employee, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees (full_name, job_title, country, salary)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&new.full_name)
        .bind(&new.job_title)
        .bind(&new.country)
        .bind(new.salary)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to insert employee");
            e
        })?;

        Ok(new.into_employee(result.last_insert_id()))
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Employee>, StoreError> {
        let sql = format!("{SELECT_EMPLOYEE} WHERE id = ?");

        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, employee_id = id, "Failed to fetch employee");
                e
            })?;

        Ok(employee)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        let sql = format!("{SELECT_EMPLOYEE} ORDER BY id ASC");
        debug!(sql = %sql, "Fetching employees");

        let employees = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch employees");
                e
            })?;

        Ok(employees)
    }

    async fn apply_partial_update(
        &self,
        id: u64,
        changes: EmployeeChanges,
    ) -> Result<Option<Employee>, StoreError> {
        let mut tx = self.pool.begin().await?;

        // Row lock so a concurrent delete cannot slip between read and write.
        let sql = format!("{SELECT_EMPLOYEE} WHERE id = ? FOR UPDATE");
        let current = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(mut employee) = current else {
            tx.rollback().await?;
            return Ok(None);
        };

        if let Some(update) = build_employee_update(&changes, id) {
            debug!(sql = %update.sql, employee_id = id, "Updating employee");
            execute_update(&mut *tx, update).await.map_err(|e| {
                error!(error = %e, employee_id = id, "Failed to update employee");
                e
            })?;
        }

        tx.commit().await?;

        changes.apply_to(&mut employee);
        Ok(Some(employee))
    }

    async fn remove(&self, id: u64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, employee_id = id, "Failed to delete employee");
                e
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn aggregate_by_country(
        &self,
        country: &str,
    ) -> Result<Option<SalaryAggregate>, StoreError> {
        let (min, max, avg) = sqlx::query_as::<_, (Option<f64>, Option<f64>, Option<f64>)>(
            r#"
            SELECT MIN(salary), MAX(salary), AVG(salary)
            FROM employees
            WHERE country = ?
            "#,
        )
        .bind(country)
        .fetch_one(&self.pool)
        .await?;

        Ok(match (min, max, avg) {
            (Some(min), Some(max), Some(avg)) => Some(SalaryAggregate { min, max, avg }),
            _ => None,
        })
    }

    async fn aggregate_avg_by_job_title(&self, job_title: &str) -> Result<Option<f64>, StoreError> {
        let avg = sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(salary) FROM employees WHERE job_title = ?",
        )
        .bind(job_title)
        .fetch_one(&self.pool)
        .await?;

        Ok(avg)
    }
}
