use crate::{
    error::{ApiError, ErrorBody},
    model::employee::{Employee, EmployeeChanges, NewEmployee},
    service::employee::EmployeeService,
};
use actix_web::{HttpResponse, web};
use serde_json::{Map, Value};

pub const MISSING_FIELDS: &str = "missing required fields";
pub const INVALID_SALARY: &str = "invalid salary";
pub const NO_DATA: &str = "no data";
pub const EMPLOYEE_NOT_FOUND: &str = "employee not found";

const TEXT_FIELDS: [&str; 3] = ["full_name", "job_title", "country"];

fn parse_salary(value: &Value) -> Result<f64, ApiError> {
    value
        .as_f64()
        .filter(|s| s.is_finite() && *s >= 0.0)
        .ok_or_else(|| ApiError::validation(INVALID_SALARY))
}

/// Text fields must be strings with at least one non-whitespace character.
fn parse_text(field: &str, value: &Value) -> Result<String, ApiError> {
    value
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| ApiError::validation(format!("invalid {field}")))
}

/// Validate a creation payload: all four fields present, text fields are
/// non-blank strings, salary is a non-negative number.
pub fn parse_new_employee(body: Option<&Value>) -> Result<NewEmployee, ApiError> {
    let obj = body
        .and_then(Value::as_object)
        .ok_or_else(|| ApiError::validation(MISSING_FIELDS))?;

    let field = |name: &str| obj.get(name).ok_or_else(|| ApiError::validation(MISSING_FIELDS));

    let full_name = field("full_name")?;
    let job_title = field("job_title")?;
    let country = field("country")?;
    let salary = parse_salary(field("salary")?)?;

    Ok(NewEmployee {
        full_name: parse_text("full_name", full_name)?,
        job_title: parse_text("job_title", job_title)?,
        country: parse_text("country", country)?,
        salary,
    })
}

/// Validate an update payload with the same per-field rules as creation.
/// Only the four business fields are picked up; anything else (including
/// `id`) is ignored.
pub fn parse_employee_changes(body: Option<&Value>) -> Result<EmployeeChanges, ApiError> {
    let obj: &Map<String, Value> = body
        .and_then(Value::as_object)
        .filter(|o| !o.is_empty())
        .ok_or_else(|| ApiError::validation(NO_DATA))?;

    let mut changes = EmployeeChanges::default();

    if let Some(salary) = obj.get("salary") {
        changes.salary = Some(parse_salary(salary)?);
    }

    for name in TEXT_FIELDS {
        let Some(value) = obj.get(name) else {
            continue;
        };
        let text = parse_text(name, value)?;
        match name {
            "full_name" => changes.full_name = Some(text),
            "job_title" => changes.job_title = Some(text),
            _ => changes.country = Some(text),
        }
    }

    Ok(changes)
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody, example = json!({
            "error": "missing required fields"
        })),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    service: web::Data<EmployeeService>,
    body: Option<web::Json<Value>>,
) -> Result<HttpResponse, ApiError> {
    let new = parse_new_employee(body.as_deref())?;
    let employee = service.create(new).await?;

    Ok(HttpResponse::Created().json(employee))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    match service.get_by_id(employee_id).await? {
        Some(emp) => Ok(HttpResponse::Ok().json(emp)),
        None => Err(ApiError::not_found(EMPLOYEE_NOT_FOUND)),
    }
}

#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees in creation order", body = [Employee]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, ApiError> {
    let employees = service.get_all().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Update Employee
///
/// Partial update: fields left out of the body keep their stored values.
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = u64, Path, description = "Employee ID")
    ),
    request_body = EmployeeChanges,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Empty body or invalid salary", body = ErrorBody, example = json!({
            "error": "invalid salary"
        })),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<u64>,
    body: Option<web::Json<Value>>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    let changes = parse_employee_changes(body.as_deref())?;

    match service.update(employee_id, changes).await? {
        Some(emp) => Ok(HttpResponse::Ok().json(emp)),
        None => Err(ApiError::not_found(EMPLOYEE_NOT_FOUND)),
    }
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted"),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    if !service.delete(employee_id).await? {
        return Err(ApiError::not_found(EMPLOYEE_NOT_FOUND));
    }

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{create_request, test_app};
    use actix_web::{http::StatusCode, test as actix_test};
    use serde_json::json;

    fn validation_message(result: Result<impl std::fmt::Debug, ApiError>) -> String {
        match result {
            Err(ApiError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn create_requires_every_field() {
        let body = json!({ "full_name": "John Doe", "job_title": "Engineer", "country": "India" });
        assert_eq!(validation_message(parse_new_employee(Some(&body))), MISSING_FIELDS);
        assert_eq!(validation_message(parse_new_employee(None)), MISSING_FIELDS);
        assert_eq!(
            validation_message(parse_new_employee(Some(&json!([1, 2])))),
            MISSING_FIELDS
        );
    }

    #[test]
    fn create_rejects_bad_salary() {
        for salary in [json!(-1), json!("100000"), json!(null), json!(true)] {
            let body = json!({
                "full_name": "John Doe",
                "job_title": "Engineer",
                "country": "India",
                "salary": salary
            });
            assert_eq!(validation_message(parse_new_employee(Some(&body))), INVALID_SALARY);
        }
    }

    #[test]
    fn create_rejects_blank_or_non_text_fields() {
        let body = json!({ "full_name": "  ", "job_title": "Engineer", "country": "India", "salary": 1 });
        assert_eq!(
            validation_message(parse_new_employee(Some(&body))),
            "invalid full_name"
        );

        let body = json!({ "full_name": "John", "job_title": "Engineer", "country": 7, "salary": 1 });
        assert_eq!(validation_message(parse_new_employee(Some(&body))), "invalid country");
    }

    #[test]
    fn create_accepts_zero_salary() {
        let body = json!({ "full_name": "John", "job_title": "Volunteer", "country": "India", "salary": 0 });
        let new = parse_new_employee(Some(&body)).unwrap();
        assert_eq!(new.salary, 0.0);
    }

    #[test]
    fn update_picks_only_known_fields() {
        let body = json!({ "salary": 85000, "id": 99, "nickname": "chuck" });
        let changes = parse_employee_changes(Some(&body)).unwrap();
        assert_eq!(
            changes,
            EmployeeChanges {
                salary: Some(85_000.0),
                ..Default::default()
            }
        );
    }

    #[test]
    fn update_needs_data() {
        assert_eq!(validation_message(parse_employee_changes(None)), NO_DATA);
        assert_eq!(validation_message(parse_employee_changes(Some(&json!({})))), NO_DATA);
    }

    #[test]
    fn update_rejects_blank_text_fields() {
        for (field, value) in [("full_name", json!("")), ("job_title", json!("   ")), ("country", json!(3))] {
            let body = Value::Object(Map::from_iter([(field.to_string(), value)]));
            assert_eq!(
                validation_message(parse_employee_changes(Some(&body))),
                format!("invalid {field}")
            );
        }
    }

    #[test]
    fn update_rejects_bad_salary() {
        let body = json!({ "salary": -5 });
        assert_eq!(validation_message(parse_employee_changes(Some(&body))), INVALID_SALARY);
    }

    #[actix_web::test]
    async fn create_then_get_returns_same_record() {
        let app = test_app!();

        let req = create_request("John Doe", "Software Engineer", "India", 100_000.0).to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Employee = actix_test::read_body_json(resp).await;
        assert_eq!(created.full_name, "John Doe");
        assert_eq!(created.job_title, "Software Engineer");
        assert_eq!(created.country, "India");
        assert_eq!(created.salary, 100_000.0);

        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/employees/{}", created.id))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let fetched: Employee = actix_test::read_body_json(resp).await;
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn create_with_missing_fields_is_rejected() {
        let app = test_app!();

        let req = actix_test::TestRequest::post()
            .uri("/api/employees")
            .set_json(json!({ "full_name": "John Doe" }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": MISSING_FIELDS }));

        let req = actix_test::TestRequest::post().uri("/api/employees").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn create_with_negative_salary_changes_nothing() {
        let app = test_app!();

        let req = create_request("John Doe", "Engineer", "India", -1.0).to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": INVALID_SALARY }));

        let req = actix_test::TestRequest::get().uri("/api/employees").to_request();
        let all: Vec<Employee> = actix_test::call_and_read_body_json(&app, req).await;
        assert!(all.is_empty());
    }

    #[actix_web::test]
    async fn list_returns_employees_in_creation_order() {
        let app = test_app!();

        let req = actix_test::TestRequest::get().uri("/api/employees").to_request();
        let all: Vec<Employee> = actix_test::call_and_read_body_json(&app, req).await;
        assert!(all.is_empty());

        for (name, title, country, salary) in [
            ("Alice Johnson", "Designer", "Canada", 90_000.0),
            ("Bob Williams", "Developer", "India", 80_000.0),
        ] {
            let req = create_request(name, title, country, salary).to_request();
            assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::CREATED);
        }

        let req = actix_test::TestRequest::get().uri("/api/employees").to_request();
        let all: Vec<Employee> = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].full_name, "Alice Johnson");
        assert_eq!(all[1].full_name, "Bob Williams");
    }

    #[actix_web::test]
    async fn update_changes_only_supplied_fields() {
        let app = test_app!();

        let req = create_request("Charlie Brown", "Analyst", "United States", 75_000.0).to_request();
        let created: Employee = actix_test::call_and_read_body_json(&app, req).await;

        let req = actix_test::TestRequest::put()
            .uri(&format!("/api/employees/{}", created.id))
            .set_json(json!({ "job_title": "Senior Analyst", "salary": 85000 }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Employee = actix_test::read_body_json(resp).await;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.full_name, "Charlie Brown");
        assert_eq!(updated.job_title, "Senior Analyst");
        assert_eq!(updated.country, "United States");
        assert_eq!(updated.salary, 85_000.0);

        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/employees/{}", created.id))
            .to_request();
        let fetched: Employee = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, updated);
    }

    #[actix_web::test]
    async fn update_with_invalid_salary_keeps_record() {
        let app = test_app!();

        let req = create_request("Charlie Brown", "Analyst", "United States", 75_000.0).to_request();
        let created: Employee = actix_test::call_and_read_body_json(&app, req).await;

        for body in [json!({ "salary": -10, "job_title": "CEO" }), json!({ "salary": "lots" })] {
            let req = actix_test::TestRequest::put()
                .uri(&format!("/api/employees/{}", created.id))
                .set_json(body)
                .to_request();
            let resp = actix_test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }

        let req = actix_test::TestRequest::put()
            .uri(&format!("/api/employees/{}", created.id))
            .set_json(json!({}))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": NO_DATA }));

        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/employees/{}", created.id))
            .to_request();
        let fetched: Employee = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn update_with_blank_name_keeps_record() {
        let app = test_app!();

        let req = create_request("Raj Kumar", "Developer", "India", 80_000.0).to_request();
        let created: Employee = actix_test::call_and_read_body_json(&app, req).await;

        let req = actix_test::TestRequest::put()
            .uri(&format!("/api/employees/{}", created.id))
            .set_json(json!({ "full_name": "" }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "invalid full_name" }));

        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/employees/{}", created.id))
            .to_request();
        let fetched: Employee = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn update_unknown_employee_is_not_found() {
        let app = test_app!();

        let req = actix_test::TestRequest::put()
            .uri("/api/employees/999")
            .set_json(json!({ "salary": 1000 }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": EMPLOYEE_NOT_FOUND }));
    }

    #[actix_web::test]
    async fn delete_then_get_is_not_found() {
        let app = test_app!();

        let req = create_request("David Lee", "Manager", "India", 110_000.0).to_request();
        let created: Employee = actix_test::call_and_read_body_json(&app, req).await;
        let uri = format!("/api/employees/{}", created.id);

        let resp = actix_test::call_service(&app, actix_test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(actix_test::read_body(resp).await.is_empty());

        let resp = actix_test::call_service(&app, actix_test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = actix_test::call_service(&app, actix_test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn non_numeric_id_does_not_match() {
        let app = test_app!();

        let req = actix_test::TestRequest::get().uri("/api/employees/abc").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
