use sqlx::{Executor, MySql};

use crate::model::employee::EmployeeChanges;

/// ===============================
/// SQL bindable value enum
/// ===============================
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    String(String),
    U64(u64),
    F64(f64),
}

/// ===============================
/// SQL update container
/// ===============================
#[derive(Debug, PartialEq)]
pub struct SqlUpdate {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

/// ===============================
/// Build dynamic UPDATE SQL
/// ===============================
/// Column names come from the typed change set, never from client keys.
/// Returns `None` when there is nothing to set.
pub fn build_employee_update(changes: &EmployeeChanges, id: u64) -> Option<SqlUpdate> {
    let mut columns = Vec::with_capacity(4);
    let mut values = Vec::with_capacity(5);

    if let Some(full_name) = &changes.full_name {
        columns.push("full_name = ?");
        values.push(SqlValue::String(full_name.clone()));
    }
    if let Some(job_title) = &changes.job_title {
        columns.push("job_title = ?");
        values.push(SqlValue::String(job_title.clone()));
    }
    if let Some(country) = &changes.country {
        columns.push("country = ?");
        values.push(SqlValue::String(country.clone()));
    }
    if let Some(salary) = changes.salary {
        columns.push("salary = ?");
        values.push(SqlValue::F64(salary));
    }

    if columns.is_empty() {
        return None;
    }

    // WHERE id = ?
    values.push(SqlValue::U64(id));

    Some(SqlUpdate {
        sql: format!("UPDATE employees SET {} WHERE id = ?", columns.join(", ")),
        values,
    })
}

/// ===============================
/// Execute the update
/// ===============================
pub async fn execute_update<'c, E>(executor: E, update: SqlUpdate) -> Result<u64, sqlx::Error>
where
    E: Executor<'c, Database = MySql>,
{
    let mut query = sqlx::query(&update.sql);

    for value in update.values {
        query = match value {
            SqlValue::String(v) => query.bind(v),
            SqlValue::U64(v) => query.bind(v),
            SqlValue::F64(v) => query.bind(v),
        };
    }

    let result = query.execute(executor).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_supplied_columns_are_set() {
        let changes = EmployeeChanges {
            job_title: Some("Senior Analyst".into()),
            salary: Some(85_000.0),
            ..Default::default()
        };

        let update = build_employee_update(&changes, 3).unwrap();

        assert_eq!(
            update.sql,
            "UPDATE employees SET job_title = ?, salary = ? WHERE id = ?"
        );
        assert_eq!(
            update.values,
            vec![
                SqlValue::String("Senior Analyst".into()),
                SqlValue::F64(85_000.0),
                SqlValue::U64(3),
            ]
        );
    }

    #[test]
    fn nothing_to_set_builds_nothing() {
        assert_eq!(build_employee_update(&EmployeeChanges::default(), 3), None);
    }
}
