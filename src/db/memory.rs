use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::db::repository::{EmployeeRepository, StorageError};
use crate::models::employee::{Employee, EmployeeId, NewEmployee};

/// Process-local store. Records keep insertion order.
#[derive(Default)]
pub struct MemoryEmployeeRepository {
    employees: RwLock<Vec<Employee>>,
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, StorageError> {
        Ok(self.employees.read().await.clone())
    }

    async fn insert_one(&self, employee: &NewEmployee) -> Result<EmployeeId, StorageError> {
        let id = EmployeeId::generate();
        self.employees
            .write()
            .await
            .push(Employee::new(id, employee.clone()));
        Ok(id)
    }

    async fn replace_by_id(&self, id: EmployeeId, employee: &NewEmployee) -> Result<bool, StorageError> {
        let mut employees = self.employees.write().await;
        match employees.iter_mut().find(|stored| stored.id == id) {
            Some(stored) => {
                stored.details = employee.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<bool, StorageError> {
        let mut employees = self.employees.write().await;
        let before = employees.len();
        employees.retain(|stored| stored.id != id);
        Ok(employees.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::Gender;

    fn employee(first_name: &str) -> NewEmployee {
        NewEmployee {
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            gender: Gender::Male,
            email: "jo@x.com".to_string(),
            phone_number: "1234567890".to_string(),
            job_title: "Eng".to_string(),
            department: "R&D".to_string(),
        }
    }

    #[tokio::test]
    async fn starts_empty() {
        let repo = MemoryEmployeeRepository::default();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_generates_distinct_ids_and_keeps_order() {
        let repo = MemoryEmployeeRepository::default();
        let first = repo.insert_one(&employee("Ann")).await.unwrap();
        let second = repo.insert_one(&employee("Bob")).await.unwrap();
        assert_ne!(first, second);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first);
        assert_eq!(all[1].details.first_name, "Bob");
    }

    #[tokio::test]
    async fn replace_reports_whether_a_record_matched() {
        let repo = MemoryEmployeeRepository::default();
        let id = repo.insert_one(&employee("Ann")).await.unwrap();

        assert!(repo.replace_by_id(id, &employee("Anna")).await.unwrap());
        assert!(!repo.replace_by_id(EmployeeId::generate(), &employee("Zed")).await.unwrap());

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].details.first_name, "Anna");
    }

    #[tokio::test]
    async fn delete_reports_whether_a_record_was_removed() {
        let repo = MemoryEmployeeRepository::default();
        let id = repo.insert_one(&employee("Ann")).await.unwrap();

        assert!(repo.delete_by_id(id).await.unwrap());
        assert!(!repo.delete_by_id(id).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
