//! MongoDB-backed employee store

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{ClientOptions, ReadPreference, ReturnDocument, SelectionCriteria};
use mongodb::{Client, Collection, Database};
use shared::models::{Employee, EmployeeInput};

use super::{EmployeeDocument, EmployeeStore, RepoError, RepoResult};
use crate::config::Config;

/// Employee store over a single MongoDB collection.
///
/// Cloning is cheap: the driver handles share one connection pool.
#[derive(Clone)]
pub struct MongoEmployeeStore {
    database: Database,
    collection: Collection<EmployeeDocument>,
}

impl MongoEmployeeStore {
    /// Connect, verify the primary answers a ping, and bind the collection.
    ///
    /// The configured timeout bounds both the initial connect and server
    /// selection; there is no retry.
    pub async fn connect(config: &Config) -> RepoResult<Self> {
        let mut options = ClientOptions::parse(&config.mongodb_uri).await?;
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options)?;
        let database = client.database(&config.database_name);

        database
            .run_command(doc! { "ping": 1 })
            .selection_criteria(SelectionCriteria::ReadPreference(ReadPreference::Primary))
            .await?;

        let databases = client.list_database_names().await?;
        tracing::info!(
            database = %config.database_name,
            collection = %config.collection_name,
            available = ?databases,
            "Connected to MongoDB"
        );

        let collection = database.collection::<EmployeeDocument>(&config.collection_name);
        Ok(Self {
            database,
            collection,
        })
    }
}

#[async_trait]
impl EmployeeStore for MongoEmployeeStore {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<EmployeeDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> RepoResult<Option<Employee>> {
        let found = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(found.map(Employee::from))
    }

    async fn insert(&self, input: &EmployeeInput) -> RepoResult<ObjectId> {
        let result = self
            .collection
            .insert_one(EmployeeDocument::from_input(input))
            .await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            RepoError::Database(format!(
                "inserted id is not an ObjectId: {}",
                result.inserted_id
            ))
        })
    }

    async fn update(&self, id: ObjectId, input: &EmployeeInput) -> RepoResult<Option<Employee>> {
        let update = doc! {
            "$set": {
                "name": input.name.as_str(),
                "age": input.age,
                "salary": input.salary,
            }
        };
        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, update)
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated.map(Employee::from))
    }

    async fn delete(&self, id: ObjectId) -> RepoResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> RepoResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
