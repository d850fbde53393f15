use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use mongodb::{
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Client, Collection, Database,
};
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::TodoError,
    repository::TodoRepository,
    todo::{NewTodo, Todo, TodoId, TodoPatch},
};

#[derive(Debug, Serialize, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    completed: bool,
    body: String,
}

impl TryFrom<TodoDocument> for Todo {
    type Error = anyhow::Error;

    fn try_from(d: TodoDocument) -> Result<Self> {
        let id = d.id.ok_or_else(|| anyhow!("todo document without _id"))?;
        Ok(Todo { id: TodoId::Object(id), completed: d.completed, body: d.body })
    }
}

/// Todos stored as documents in a MongoDB collection. Every operation is a
/// single-document command, atomic on the server side.
#[derive(Clone)]
pub struct MongoTodoRepository {
    db: Database,
    collection: Collection<TodoDocument>,
}

impl MongoTodoRepository {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await.context("connecting to MongoDB")?;
        let db = client.database(database);
        let collection = db.collection::<TodoDocument>(collection);
        Ok(Self { db, collection })
    }
}

fn object_id(id: TodoId) -> Result<ObjectId> {
    match id {
        TodoId::Object(oid) => Ok(oid),
        TodoId::Seq(n) => Err(anyhow!("sequential id {n} passed to document store")),
    }
}

#[async_trait]
impl TodoRepository for MongoTodoRepository {
    async fn init(&self) -> Result<()> {
        self.db
            .run_command(doc! { "ping": 1 }, None)
            .await
            .context("pinging MongoDB")?;
        tracing::info!(database = %self.db.name(), collection = %self.collection.name(), "connected to MongoDB");
        Ok(())
    }

    fn parse_id(&self, raw: &str) -> Result<TodoId, TodoError> {
        ObjectId::parse_str(raw).map(TodoId::Object).map_err(|_| TodoError::InvalidId)
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        let mut cursor = self.collection.find(doc! {}, None).await?;
        let mut todos: Vec<Todo> = Vec::new();
        while cursor.advance().await? {
            let d: TodoDocument = cursor.deserialize_current()?;
            todos.push(Todo::try_from(d)?);
        }
        Ok(todos)
    }

    async fn create(&self, input: NewTodo) -> Result<Todo> {
        let d = TodoDocument { id: None, completed: input.completed, body: input.body };
        let inserted = self.collection.insert_one(&d, None).await?;
        let id = inserted
            .inserted_id
            .as_object_id()
            .ok_or_else(|| anyhow!("inserted _id is not an ObjectId"))?;
        Ok(Todo { id: TodoId::Object(id), completed: d.completed, body: d.body })
    }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Option<Todo>> {
        let oid = object_id(id)?;
        let mut set = Document::new();
        if let Some(body) = patch.body { set.insert("body", body); }
        if let Some(completed) = patch.completed { set.insert("completed", completed); }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set }, options)
            .await?;
        updated.map(Todo::try_from).transpose()
    }

    async fn delete(&self, id: TodoId) -> Result<bool> {
        let oid = object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }, None).await?;
        Ok(result.deleted_count > 0)
    }
}
