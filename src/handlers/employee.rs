use actix_web::{web, HttpResponse};
use log::info;
use serde_json::json;
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeId, EmployeePayload, NewEmployee};
use crate::state::AppState;

fn parse_id(raw: &str) -> Result<EmployeeId, AppError> {
    raw.parse()
        .map_err(|_| AppError::InvalidIdentifier(raw.to_string()))
}

pub async fn get_employees(
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let employees = state
        .bounded(state.repo.find_all())
        .await
        .map_err(AppError::storage("Failed to fetch employees"))?;

    Ok(HttpResponse::Ok().json(employees))
}

pub async fn create_employee(
    state: web::Data<AppState>,
    payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    let new_employee = NewEmployee::try_from(payload.into_inner())?;

    let id = state
        .bounded(state.repo.insert_one(&new_employee))
        .await
        .map_err(AppError::storage("Failed to create employee"))?;

    Ok(HttpResponse::Created().json(Employee::new(id, new_employee)))
}

// The body is extracted lazily so a bad id is reported before a bad body.
pub async fn update_employee(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: Result<web::Json<EmployeePayload>, actix_web::Error>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = parse_id(&path)?;
    let payload = payload?;
    let updated = NewEmployee::try_from(payload.into_inner()).map_err(AppError::from)?;

    let matched = state
        .bounded(state.repo.replace_by_id(id, &updated))
        .await
        .map_err(AppError::storage("Failed to update employee"))?;

    if !matched {
        info!("Update matched no employee with id {}", id);
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee updated successfully",
    })))
}

pub async fn delete_employee(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path)?;

    let deleted = state
        .bounded(state.repo.delete_by_id(id))
        .await
        .map_err(AppError::storage("Failed to delete employee"))?;

    if !deleted {
        info!("Delete matched no employee with id {}", id);
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully",
    })))
}
