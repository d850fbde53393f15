use crate::domain::error::TodoError;
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{NewTodo, Todo, TodoPatch};
use async_trait::async_trait;

pub const EMPTY_BODY: &str = "Todo body cannot be empty";
pub const NO_FIELDS: &str = "No valid fields to update";

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<Todo>, TodoError>;
    async fn create(&self, input: NewTodo) -> Result<Todo, TodoError>;
    async fn update(&self, id: &str, patch: TodoPatch) -> Result<Todo, TodoError>;
    async fn delete(&self, id: &str) -> Result<(), TodoError>;
}

/// Validates input and resolves ids, then hands each call to exactly one
/// repository operation.
#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn list(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.repo.list().await?)
    }

    async fn create(&self, input: NewTodo) -> Result<Todo, TodoError> {
        if input.body.is_empty() {
            return Err(TodoError::validation(EMPTY_BODY));
        }
        Ok(self.repo.create(input).await?)
    }

    async fn update(&self, id: &str, patch: TodoPatch) -> Result<Todo, TodoError> {
        let id = self.repo.parse_id(id)?;
        let patch = patch.normalized().ok_or_else(|| TodoError::validation(NO_FIELDS))?;
        self.repo.update(id, patch).await?.ok_or(TodoError::NotFound)
    }

    async fn delete(&self, id: &str) -> Result<(), TodoError> {
        let id = self.repo.parse_id(id)?;
        if self.repo.delete(id).await? { Ok(()) } else { Err(TodoError::NotFound) }
    }
}
