use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

use super::EmployeeRepository;
use crate::error::StoreError;
use crate::model::employee::{Employee, EmployeeChanges, NewEmployee};
use crate::model::salary::SalaryAggregate;

#[derive(Debug)]
struct MemoryState {
    next_id: u64,
    // ids only grow, so key order is insertion order
    rows: BTreeMap<u64, Employee>,
}

/// Process-local store used by tests and when no database is configured.
#[derive(Debug)]
pub struct InMemoryEmployeeRepository {
    state: RwLock<MemoryState>,
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl InMemoryEmployeeRepository {
    fn salaries_where<F>(&self, matches: F) -> Result<Vec<f64>, StoreError>
    where
        F: Fn(&Employee) -> bool,
    {
        let state = self.state.read().map_err(|_| StoreError::Poisoned)?;
        Ok(state
            .rows
            .values()
            .filter(|&e| matches(e))
            .map(|e| e.salary)
            .collect())
    }
}

fn average(salaries: &[f64]) -> Option<f64> {
    if salaries.is_empty() {
        return None;
    }
    Some(salaries.iter().sum::<f64>() / salaries.len() as f64)
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn insert(&self, new: NewEmployee) -> Result<Employee, StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::Poisoned)?;

        let id = state.next_id;
        state.next_id += 1;

        let employee = new.into_employee(id);
        state.rows.insert(id, employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Employee>, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::Poisoned)?;
        Ok(state.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::Poisoned)?;
        Ok(state.rows.values().cloned().collect())
    }

    async fn apply_partial_update(
        &self,
        id: u64,
        changes: EmployeeChanges,
    ) -> Result<Option<Employee>, StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::Poisoned)?;

        Ok(state.rows.get_mut(&id).map(|employee| {
            changes.apply_to(employee);
            employee.clone()
        }))
    }

    async fn remove(&self, id: u64) -> Result<bool, StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::Poisoned)?;
        Ok(state.rows.remove(&id).is_some())
    }

    async fn aggregate_by_country(
        &self,
        country: &str,
    ) -> Result<Option<SalaryAggregate>, StoreError> {
        let salaries = self.salaries_where(|e| e.country == country)?;

        let Some(avg) = average(&salaries) else {
            return Ok(None);
        };
        let min = salaries.iter().copied().fold(f64::INFINITY, f64::min);
        let max = salaries.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Some(SalaryAggregate { min, max, avg }))
    }

    async fn aggregate_avg_by_job_title(&self, job_title: &str) -> Result<Option<f64>, StoreError> {
        let salaries = self.salaries_where(|e| e.job_title == job_title)?;
        Ok(average(&salaries))
    }
}
