//! Queries against the `employee` table (and its join to `department`)

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// One row of the `employee` table.
///
/// Every column except `id` and `first_name` is nullable in the schema and
/// stored as text. `None` fields are omitted from JSON output entirely
/// rather than emitted as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enddate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boss_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Populated only by the join query; plain `employee` reads have no
    /// such column, hence the sqlx default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[sqlx(default)]
    pub department_name: Option<String>,
}

/// Closed set of column names addressable through the `{column}` routes.
///
/// Only the `&'static str` returned by [`as_sql`](Self::as_sql) is ever
/// spliced into statement text; anything outside this set is rejected
/// before a statement is built, so no caller-supplied identifier reaches
/// the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeColumn {
    Id,
    FirstName,
    LastName,
    Phone,
    Email,
    Birthdate,
    Startdate,
    Enddate,
    Salary,
    BossId,
    DepartmentId,
    Created,
}

impl EmployeeColumn {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "id" => Some(Self::Id),
            "first_name" => Some(Self::FirstName),
            "last_name" => Some(Self::LastName),
            "phone" => Some(Self::Phone),
            "email" => Some(Self::Email),
            "birthdate" => Some(Self::Birthdate),
            "startdate" => Some(Self::Startdate),
            "enddate" => Some(Self::Enddate),
            "salary" => Some(Self::Salary),
            "boss_id" => Some(Self::BossId),
            "department_id" => Some(Self::DepartmentId),
            "created" => Some(Self::Created),
            _ => None,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Birthdate => "birthdate",
            Self::Startdate => "startdate",
            Self::Enddate => "enddate",
            Self::Salary => "salary",
            Self::BossId => "boss_id",
            Self::DepartmentId => "department_id",
            Self::Created => "created",
        }
    }
}

pub async fn insert(pool: &PgPool, id: &str, first_name: &str) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO employee(id, first_name) VALUES ($1, $2)")
        .bind(id)
        .bind(first_name)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn update_column(
    pool: &PgPool,
    column: EmployeeColumn,
    value: &str,
    id: &str,
) -> Result<(), sqlx::Error> {
    let statement = format!(
        "UPDATE employee SET {} = $1 WHERE employee.id = $2",
        column.as_sql()
    );
    sqlx::query(&statement)
        .bind(value)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Zero matches is not an error: returns an empty vec.
pub async fn find_by_column(
    pool: &PgPool,
    column: EmployeeColumn,
    value: &str,
) -> Result<Vec<Employee>, sqlx::Error> {
    let statement = format!(
        "SELECT * FROM employee WHERE employee.{} = $1",
        column.as_sql()
    );
    sqlx::query_as(&statement).bind(value).fetch_all(pool).await
}

pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employee").fetch_all(pool).await
}

/// Inner join, so employees without a department are absent from the
/// result; `department_name` comes from the joined row.
pub async fn list_with_department(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as(
        "SELECT *, d.department_id FROM employee e \
         JOIN department d ON d.department_id = e.department_id",
    )
    .fetch_all(pool)
    .await
}

pub async fn delete_by_column(
    pool: &PgPool,
    column: EmployeeColumn,
    value: &str,
) -> Result<(), sqlx::Error> {
    let statement = format!(
        "DELETE FROM employee WHERE employee.{} = $1",
        column.as_sql()
    );
    sqlx::query(&statement).bind(value).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_COLUMNS: &[&str] = &[
        "id",
        "first_name",
        "last_name",
        "phone",
        "email",
        "birthdate",
        "startdate",
        "enddate",
        "salary",
        "boss_id",
        "department_id",
        "created",
    ];

    #[test]
    fn test_column_parse_round_trip() {
        for name in ALL_COLUMNS {
            let col = EmployeeColumn::parse(name).unwrap_or_else(|| panic!("{name} not parsed"));
            assert_eq!(col.as_sql(), *name);
        }
    }

    #[test]
    fn test_column_parse_rejects_unknown() {
        assert_eq!(EmployeeColumn::parse("salry"), None);
        // derived field, not a real employee column
        assert_eq!(EmployeeColumn::parse("department_name"), None);
        // case-sensitive, exact match only
        assert_eq!(EmployeeColumn::parse("First_Name"), None);
        assert_eq!(EmployeeColumn::parse(" first_name"), None);
        assert_eq!(EmployeeColumn::parse(""), None);
        // injection attempts never reach statement text
        assert_eq!(EmployeeColumn::parse("id; DROP TABLE employee"), None);
        assert_eq!(EmployeeColumn::parse("id = id OR 1=1 --"), None);
    }

    #[test]
    fn test_employee_json_omits_absent_fields() {
        let employee = Employee {
            id: "e-1".into(),
            first_name: "Jane".into(),
            last_name: None,
            phone: None,
            email: Some("jane@example.com".into()),
            birthdate: None,
            startdate: None,
            enddate: None,
            salary: None,
            boss_id: None,
            department_id: None,
            created: None,
            department_name: None,
        };
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "e-1",
                "first_name": "Jane",
                "email": "jane@example.com",
            })
        );
    }

    #[test]
    fn test_employee_decodes_from_partial_body() {
        // create requests usually carry only first_name
        let employee: Employee = serde_json::from_str(r#"{"first_name":"Jane"}"#).unwrap();
        assert_eq!(employee.first_name, "Jane");
        assert!(employee.id.is_empty());
        assert_eq!(employee.department_id, None);

        // missing fields default rather than error; presence checks live
        // in the handlers
        let employee: Employee = serde_json::from_str("{}").unwrap();
        assert!(employee.first_name.is_empty());
    }
}
