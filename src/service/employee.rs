use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::error::StoreError;
use crate::model::employee::{Employee, EmployeeChanges, NewEmployee};
use crate::model::salary::{CountrySalaryMetrics, JobTitleSalaryMetrics, SalaryBreakdown};
use crate::repository::EmployeeRepository;
use crate::salary::calculator::{compute_net, round2};
use crate::salary::tax_rates::TaxRateTable;

/// Orchestrates repository calls. Performs no validation; absence is `None`.
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
    rates: Arc<TaxRateTable>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>, rates: Arc<TaxRateTable>) -> Self {
        Self { repo, rates }
    }

    #[instrument(skip(self, new), fields(country = %new.country))]
    pub async fn create(&self, new: NewEmployee) -> Result<Employee, StoreError> {
        let employee = self.repo.insert(new).await?;
        info!(employee_id = employee.id, "Employee created");
        Ok(employee)
    }

    pub async fn get_by_id(&self, id: u64) -> Result<Option<Employee>, StoreError> {
        self.repo.find_by_id(id).await
    }

    pub async fn get_all(&self) -> Result<Vec<Employee>, StoreError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self, changes))]
    pub async fn update(
        &self,
        id: u64,
        changes: EmployeeChanges,
    ) -> Result<Option<Employee>, StoreError> {
        let updated = self.repo.apply_partial_update(id, changes).await?;
        if updated.is_some() {
            info!(employee_id = id, "Employee updated");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: u64) -> Result<bool, StoreError> {
        let removed = self.repo.remove(id).await?;
        if removed {
            info!(employee_id = id, "Employee deleted");
        }
        Ok(removed)
    }

    /// Breakdown from the employee's stored gross salary and country.
    pub fn net_salary_for(&self, employee: &Employee) -> SalaryBreakdown {
        compute_net(employee.salary, &employee.country, &self.rates)
    }

    #[instrument(skip(self))]
    pub async fn metrics_by_country(
        &self,
        country: &str,
    ) -> Result<Option<CountrySalaryMetrics>, StoreError> {
        let aggregate = self.repo.aggregate_by_country(country).await?;
        debug!(found = aggregate.is_some(), "Country salary aggregate");

        Ok(aggregate.map(|a| CountrySalaryMetrics {
            country: country.to_string(),
            minimum_salary: a.min,
            maximum_salary: a.max,
            average_salary: round2(a.avg),
        }))
    }

    #[instrument(skip(self))]
    pub async fn metrics_by_job_title(
        &self,
        job_title: &str,
    ) -> Result<Option<JobTitleSalaryMetrics>, StoreError> {
        let avg = self.repo.aggregate_avg_by_job_title(job_title).await?;
        debug!(found = avg.is_some(), "Job title salary aggregate");

        Ok(avg.map(|avg| JobTitleSalaryMetrics {
            job_title: job_title.to_string(),
            average_salary: round2(avg),
        }))
    }
}
