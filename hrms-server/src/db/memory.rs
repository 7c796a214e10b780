//! In-process employee store
//!
//! Keeps documents in insertion order, like a collection scan without a
//! sort. Used by `STORE=memory` and by the API tests.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use shared::models::{Employee, EmployeeInput};
use tokio::sync::RwLock;

use super::{EmployeeDocument, EmployeeStore, RepoResult};

#[derive(Clone, Default)]
pub struct MemoryEmployeeStore {
    documents: Arc<RwLock<Vec<EmployeeDocument>>>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().cloned().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> RepoResult<Option<Employee>> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .find(|d| d.id == Some(id))
            .cloned()
            .map(Employee::from))
    }

    async fn insert(&self, input: &EmployeeInput) -> RepoResult<ObjectId> {
        let id = ObjectId::new();
        let mut document = EmployeeDocument::from_input(input);
        document.id = Some(id);
        self.documents.write().await.push(document);
        Ok(id)
    }

    async fn update(&self, id: ObjectId, input: &EmployeeInput) -> RepoResult<Option<Employee>> {
        let mut documents = self.documents.write().await;
        let Some(document) = documents.iter_mut().find(|d| d.id == Some(id)) else {
            return Ok(None);
        };
        document.apply(input);
        Ok(Some(Employee::from(document.clone())))
    }

    async fn delete(&self, id: ObjectId) -> RepoResult<u64> {
        let mut documents = self.documents.write().await;
        match documents.iter().position(|d| d.id == Some(id)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
