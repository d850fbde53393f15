use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    error::TodoError,
    repository::TodoRepository,
    todo::{NewTodo, Todo, TodoId, TodoPatch},
};

/// Process-local store. Clones share the same list; contents are lost on
/// restart.
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    last_id: u64,
    items: Vec<Todo>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn init(&self) -> Result<()> { Ok(()) }

    fn parse_id(&self, raw: &str) -> Result<TodoId, TodoError> {
        // Ids are compared by their decimal rendering, so "01" or "abc"
        // simply match nothing.
        match raw.parse::<u64>() {
            Ok(n) if n.to_string() == raw => Ok(TodoId::Seq(n)),
            _ => Err(TodoError::NotFound),
        }
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        Ok(self.state.lock().await.items.clone())
    }

    async fn create(&self, input: NewTodo) -> Result<Todo> {
        let mut state = self.state.lock().await;
        state.last_id += 1;
        let todo = Todo { id: TodoId::Seq(state.last_id), completed: input.completed, body: input.body };
        state.items.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Option<Todo>> {
        let mut state = self.state.lock().await;
        let Some(todo) = state.items.iter_mut().find(|t| t.id == id) else { return Ok(None) };
        patch.apply(todo);
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: TodoId) -> Result<bool> {
        let mut state = self.state.lock().await;
        let Some(pos) = state.items.iter().position(|t| t.id == id) else { return Ok(false) };
        state.items.remove(pos);
        Ok(true)
    }
}
