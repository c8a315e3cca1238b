use std::borrow::Cow;
use validator::{validate_email, validate_length, ValidationError, ValidationErrors};
use crate::models::employee::{EmployeePayload, Gender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Gender,
    Email,
    PhoneNumber,
    JobTitle,
    Department,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Gender => "gender",
            Field::Email => "email",
            Field::PhoneNumber => "phone_number",
            Field::JobTitle => "job_title",
            Field::Department => "department",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    Required,
    Length { min: u64, max: u64 },
    OneOf(&'static [&'static str]),
    Email,
}

const NAME: &[Constraint] = &[Constraint::Required, Constraint::Length { min: 2, max: 50 }];

/// Constraints per field, checked in order. The first failing constraint is
/// the one reported for that field.
pub const EMPLOYEE_RULES: &[(Field, &[Constraint])] = &[
    (Field::FirstName, NAME),
    (Field::LastName, NAME),
    (Field::Gender, &[Constraint::Required, Constraint::OneOf(Gender::NAMES)]),
    (Field::Email, &[Constraint::Required, Constraint::Email]),
    (
        Field::PhoneNumber,
        &[Constraint::Required, Constraint::Length { min: 10, max: 15 }],
    ),
    (Field::JobTitle, NAME),
    (Field::Department, NAME),
];

/// Checks every field of the payload and collects all violations.
pub fn validate(payload: &EmployeePayload) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    for (field, constraints) in EMPLOYEE_RULES {
        if let Some(error) = check_field(*field, constraints, payload.value(*field)) {
            errors.add(field.name(), error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_field(field: Field, constraints: &[Constraint], value: &str) -> Option<ValidationError> {
    constraints
        .iter()
        .find_map(|constraint| check(field, *constraint, value))
}

fn check(field: Field, constraint: Constraint, value: &str) -> Option<ValidationError> {
    match constraint {
        Constraint::Required if value.is_empty() => {
            Some(violation("required", format!("{} is required", field.name())))
        }
        Constraint::Length { min, max } if !validate_length(value, Some(min), Some(max), None) => {
            let mut error = violation(
                "length",
                format!("{} must be between {} and {} characters", field.name(), min, max),
            );
            error.add_param(Cow::from("min"), &min);
            error.add_param(Cow::from("max"), &max);
            error.add_param(Cow::from("value"), &value);
            Some(error)
        }
        Constraint::OneOf(allowed) if !allowed.contains(&value) => {
            let mut error = violation(
                "one_of",
                format!("{} must be one of {}", field.name(), allowed.join(", ")),
            );
            error.add_param(Cow::from("value"), &value);
            Some(error)
        }
        Constraint::Email if !validate_email(value) => {
            Some(violation("email", format!("{} must be a valid email address", field.name())))
        }
        _ => None,
    }
}

fn violation(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::from(message));
    error
}
