//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Storage-assigned identifier, omitted when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub age: f64,
}

/// Create/update payload
///
/// Any `id` in the request body is ignored: identifiers are assigned by
/// storage on create and taken from the path on update. Missing fields
/// default to empty/zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeInput {
    pub name: String,
    pub salary: f64,
    pub age: f64,
}

impl Employee {
    /// Build a record from an identifier and the mutable fields
    pub fn from_input(id: impl Into<String>, input: EmployeeInput) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            salary: input.salary,
            age: input.age,
        }
    }
}
