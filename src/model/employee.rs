use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "full_name": "John Doe",
        "job_title": "Software Engineer",
        "country": "India",
        "salary": 100000.0
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "Software Engineer")]
    pub job_title: String,

    #[schema(example = "India")]
    pub country: String,

    /// Gross salary, never negative.
    #[schema(example = 100000.0)]
    pub salary: f64,
}

/// Validated fields of a new employee; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewEmployee {
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[schema(example = "Software Engineer")]
    pub job_title: String,
    #[schema(example = "India")]
    pub country: String,
    #[schema(example = 100000.0)]
    pub salary: f64,
}

impl NewEmployee {
    pub fn into_employee(self, id: u64) -> Employee {
        Employee {
            id,
            full_name: self.full_name,
            job_title: self.job_title,
            country: self.country,
            salary: self.salary,
        }
    }
}

/// Partial update: only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeChanges {
    #[schema(example = "John Doe")]
    pub full_name: Option<String>,
    #[schema(example = "Senior Software Engineer")]
    pub job_title: Option<String>,
    #[schema(example = "United States")]
    pub country: Option<String>,
    #[schema(example = 120000.0)]
    pub salary: Option<f64>,
}

impl EmployeeChanges {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.job_title.is_none()
            && self.country.is_none()
            && self.salary.is_none()
    }

    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(full_name) = &self.full_name {
            employee.full_name = full_name.clone();
        }
        if let Some(job_title) = &self.job_title {
            employee.job_title = job_title.clone();
        }
        if let Some(country) = &self.country {
            employee.country = country.clone();
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
    }
}
