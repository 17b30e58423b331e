use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::employee::{Employee, EmployeeChanges, NewEmployee};
use crate::model::salary::SalaryAggregate;

pub mod memory;
pub mod mysql;

pub use memory::InMemoryEmployeeRepository;
pub use mysql::MySqlEmployeeRepository;

/// Persistence contract for employee records.
///
/// Input is assumed validated. "Not found" is reported as `None`/`false`,
/// only store failures are errors. Aggregates read the live state.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Persist a new record and assign it a fresh id.
    async fn insert(&self, new: NewEmployee) -> Result<Employee, StoreError>;

    async fn find_by_id(&self, id: u64) -> Result<Option<Employee>, StoreError>;

    /// All records in insertion order.
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError>;

    /// Atomically write only the supplied fields. `None` if `id` is unknown.
    async fn apply_partial_update(
        &self,
        id: u64,
        changes: EmployeeChanges,
    ) -> Result<Option<Employee>, StoreError>;

    /// `true` if a record existed and was removed.
    async fn remove(&self, id: u64) -> Result<bool, StoreError>;

    /// Min/max/avg salary for an exact country match, `None` if nobody matches.
    async fn aggregate_by_country(&self, country: &str)
    -> Result<Option<SalaryAggregate>, StoreError>;

    /// Average salary for an exact job title match, `None` if nobody matches.
    async fn aggregate_avg_by_job_title(&self, job_title: &str) -> Result<Option<f64>, StoreError>;
}
