use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use crate::db::repository::{EmployeeRepository, StorageError};
use crate::models::employee::{Employee, EmployeeId, NewEmployee};

const SELECT_EMPLOYEES: &str = "SELECT employee_id, first_name, last_name, gender, email, phone_number, job_title, department FROM employees";

#[derive(sqlx::FromRow, Debug)]
struct EmployeeRow {
    employee_id: Uuid,
    first_name: String,
    last_name: String,
    gender: String,
    email: String,
    phone_number: String,
    job_title: String,
    department: String,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = StorageError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let gender = row
            .gender
            .parse()
            .map_err(|err| StorageError::Decode(format!("employee {}: {}", row.employee_id, err)))?;

        Ok(Employee::new(
            EmployeeId::from(row.employee_id),
            NewEmployee {
                first_name: row.first_name,
                last_name: row.last_name,
                gender,
                email: row.email,
                phone_number: row.phone_number,
                job_title: row.job_title,
                department: row.department,
            },
        ))
    }
}

#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        PgEmployeeRepository { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, StorageError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(SELECT_EMPLOYEES)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Employee::try_from).collect()
    }

    async fn insert_one(&self, employee: &NewEmployee) -> Result<EmployeeId, StorageError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO employees (first_name, last_name, gender, email, phone_number, job_title, department) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING employee_id",
        )
        .bind(employee.first_name.as_str())
        .bind(employee.last_name.as_str())
        .bind(employee.gender.as_str())
        .bind(employee.email.as_str())
        .bind(employee.phone_number.as_str())
        .bind(employee.job_title.as_str())
        .bind(employee.department.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(EmployeeId::from(id))
    }

    async fn replace_by_id(&self, id: EmployeeId, employee: &NewEmployee) -> Result<bool, StorageError> {
        let result = sqlx::query(
            "UPDATE employees SET first_name = $1, last_name = $2, gender = $3, email = $4, \
             phone_number = $5, job_title = $6, department = $7 WHERE employee_id = $8",
        )
        .bind(employee.first_name.as_str())
        .bind(employee.last_name.as_str())
        .bind(employee.gender.as_str())
        .bind(employee.email.as_str())
        .bind(employee.phone_number.as_str())
        .bind(employee.job_title.as_str())
        .bind(employee.department.as_str())
        .bind(id.into_uuid())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM employees WHERE employee_id = $1")
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::Gender;

    fn row(gender: &str) -> EmployeeRow {
        EmployeeRow {
            employee_id: Uuid::new_v4(),
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            gender: gender.to_string(),
            email: "jo@x.com".to_string(),
            phone_number: "1234567890".to_string(),
            job_title: "Eng".to_string(),
            department: "R&D".to_string(),
        }
    }

    #[test]
    fn decodes_a_stored_row() {
        let source = row("Other");
        let id = source.employee_id;
        let employee = Employee::try_from(source).unwrap();
        assert_eq!(employee.id.into_uuid(), id);
        assert_eq!(employee.details.gender, Gender::Other);
    }

    #[test]
    fn undecodable_row_fails_the_whole_batch() {
        let rows = vec![row("Male"), row("???"), row("Female")];
        let result: Result<Vec<Employee>, StorageError> =
            rows.into_iter().map(Employee::try_from).collect();
        assert!(matches!(result, Err(StorageError::Decode(_))));
    }
}
