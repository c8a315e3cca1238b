use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};
use crate::utils::validation::{self, Field};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    pub fn generate() -> Self {
        EmployeeId(Uuid::new_v4())
    }

    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for EmployeeId {
    fn from(id: Uuid) -> Self {
        EmployeeId(id)
    }
}

impl FromStr for EmployeeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(EmployeeId)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const NAMES: &'static [&'static str] = &["Male", "Female", "Other"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownGender(pub String);

impl fmt::Display for UnknownGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gender '{}'", self.0)
    }
}

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            other => Err(UnknownGender(other.to_string())),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Request body for create and update. Absent and `null` fields decode as
/// empty strings so they fail validation instead of decoding.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmployeePayload {
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub gender: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone_number: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub job_title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub department: String,
}

impl EmployeePayload {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Gender => &self.gender,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::JobTitle => &self.job_title,
            Field::Department => &self.department,
        }
    }
}

/// A fully validated employee that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub email: String,
    pub phone_number: String,
    pub job_title: String,
    pub department: String,
}

impl TryFrom<EmployeePayload> for NewEmployee {
    type Error = ValidationErrors;

    fn try_from(payload: EmployeePayload) -> Result<Self, Self::Error> {
        validation::validate(&payload)?;

        // The gender rule only admits `Gender::NAMES`, so this cannot fail after validation.
        let gender = payload.gender.parse().map_err(|_| {
            let mut errors = ValidationErrors::new();
            errors.add(Field::Gender.name(), ValidationError::new("one_of"));
            errors
        })?;

        Ok(NewEmployee {
            first_name: payload.first_name,
            last_name: payload.last_name,
            gender,
            email: payload.email,
            phone_number: payload.phone_number,
            job_title: payload.job_title,
            department: payload.department,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: EmployeeId,
    #[serde(flatten)]
    pub details: NewEmployee,
}

impl Employee {
    pub fn new(id: EmployeeId, details: NewEmployee) -> Self {
        Employee { id, details }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> EmployeePayload {
        EmployeePayload {
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            gender: "Female".to_string(),
            email: "jo@x.com".to_string(),
            phone_number: "1234567890".to_string(),
            job_title: "Eng".to_string(),
            department: "R&D".to_string(),
        }
    }

    #[test]
    fn parses_hyphenated_ids_and_rejects_garbage() {
        let id: EmployeeId = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert!("not-a-valid-id".parse::<EmployeeId>().is_err());
        assert!("".parse::<EmployeeId>().is_err());
    }

    #[test]
    fn gender_only_accepts_exact_names() {
        assert_eq!("Other".parse::<Gender>(), Ok(Gender::Other));
        assert!("male".parse::<Gender>().is_err());
        assert!("Unknown".parse::<Gender>().is_err());
    }

    #[test]
    fn missing_fields_decode_as_empty_strings() {
        let payload: EmployeePayload =
            serde_json::from_str(r#"{"first_name":"Jo","_id":""}"#).unwrap();
        assert_eq!(payload.first_name, "Jo");
        assert_eq!(payload.last_name, "");
        assert_eq!(payload.department, "");
    }

    #[test]
    fn null_fields_decode_as_empty_strings() {
        let payload: EmployeePayload =
            serde_json::from_str(r#"{"first_name":null,"email":null,"gender":"Male"}"#).unwrap();
        assert_eq!(payload.first_name, "");
        assert_eq!(payload.email, "");
        assert_eq!(payload.gender, "Male");

        let errors = NewEmployee::try_from(payload).unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields["first_name"][0].code, "required");
        assert_eq!(fields["email"][0].code, "required");
        assert!(!fields.contains_key("gender"));
    }

    #[test]
    fn non_string_fields_still_fail_to_decode() {
        assert!(serde_json::from_str::<EmployeePayload>(r#"{"first_name":42}"#).is_err());
    }

    #[test]
    fn valid_payload_becomes_new_employee() {
        let employee = NewEmployee::try_from(payload()).unwrap();
        assert_eq!(employee.gender, Gender::Female);
        assert_eq!(employee.department, "R&D");
    }

    #[test]
    fn invalid_payload_is_rejected_before_conversion() {
        let mut bad = payload();
        bad.gender = "Unknown".to_string();
        let errors = NewEmployee::try_from(bad).unwrap_err();
        assert!(errors.field_errors().contains_key("gender"));
    }

    #[test]
    fn employee_serializes_flat_with_underscore_id() {
        let id = EmployeeId::generate();
        let employee = Employee::new(id, NewEmployee::try_from(payload()).unwrap());
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["_id"], id.to_string());
        assert_eq!(json["first_name"], "Jo");
        assert_eq!(json["gender"], "Female");
        assert!(json.get("details").is_none());
    }
}
