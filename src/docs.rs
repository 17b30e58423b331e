use crate::api::salary::SalaryMetricsQuery;
use crate::error::ErrorBody;
use crate::model::employee::{Employee, EmployeeChanges, NewEmployee};
use crate::model::salary::{
    CountrySalaryMetrics, JobTitleSalaryMetrics, SalaryBreakdown, SalaryMetrics,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payroll API",
        version = "1.0.0",
        description = r#"
## Employee & Salary API

Manages employee records and derives salary figures from them.

### 🔹 Key Features
- **Employee Management**
  - Create, update (partial), list, view and delete employees
- **Salary Calculation**
  - Net salary after country-specific TDS (India 10%, United States 12%, others 0%)
- **Salary Metrics**
  - Min / max / average salary by country, average salary by job title

### 📦 Response Format
- JSON bodies; errors are `{"error": "<message>"}`

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::get_employee,
        crate::api::employee::list_employees,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::salary::calculate_salary,
        crate::api::salary::salary_metrics
    ),
    components(
        schemas(
            Employee,
            NewEmployee,
            EmployeeChanges,
            SalaryBreakdown,
            SalaryMetrics,
            CountrySalaryMetrics,
            JobTitleSalaryMetrics,
            SalaryMetricsQuery,
            ErrorBody
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Salary", description = "Salary calculation and metrics APIs"),
    )
)]
pub struct ApiDoc;
