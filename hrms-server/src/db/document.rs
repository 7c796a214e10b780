//! Employee storage document (BSON shape)

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use shared::models::{Employee, EmployeeInput};

/// Employee as stored in the `employees` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDocument {
    /// Omitted on insert so the server assigns it
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub age: f64,
}

impl EmployeeDocument {
    /// New document without an identifier
    pub fn from_input(input: &EmployeeInput) -> Self {
        Self {
            id: None,
            name: input.name.clone(),
            salary: input.salary,
            age: input.age,
        }
    }

    /// Overwrite the mutable fields
    pub fn apply(&mut self, input: &EmployeeInput) {
        self.name.clone_from(&input.name);
        self.salary = input.salary;
        self.age = input.age;
    }
}

impl From<EmployeeDocument> for Employee {
    fn from(doc: EmployeeDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: doc.name,
            salary: doc.salary,
            age: doc.age,
        }
    }
}
