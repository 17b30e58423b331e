use sqlx::MySqlPool;

pub async fn init_db(database_url: &str) -> Result<MySqlPool, sqlx::Error> {
    MySqlPool::connect(database_url).await
}

/// Create the `employees` table on first start.
///
/// `country` and `job_title` use a binary collation so salary metrics match
/// exactly; the default MySQL collation would fold case.
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            full_name VARCHAR(100) NOT NULL,
            job_title VARCHAR(100) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL,
            country VARCHAR(100) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL,
            salary DOUBLE NOT NULL,
            CONSTRAINT chk_employees_salary CHECK (salary >= 0)
        ) ENGINE = InnoDB DEFAULT CHARSET = utf8mb4
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
