use async_trait::async_trait;
use super::error::TodoError;
use super::todo::{NewTodo, Todo, TodoId, TodoPatch};

#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn init(&self) -> anyhow::Result<()>;
    /// Turns a path segment into an id without touching the store.
    fn parse_id(&self, raw: &str) -> Result<TodoId, TodoError>;
    async fn list(&self) -> anyhow::Result<Vec<Todo>>;
    async fn create(&self, input: NewTodo) -> anyhow::Result<Todo>;
    async fn update(&self, id: TodoId, patch: TodoPatch) -> anyhow::Result<Option<Todo>>;
    async fn delete(&self, id: TodoId) -> anyhow::Result<bool>;
}
