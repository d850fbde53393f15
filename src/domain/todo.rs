use std::fmt;

use bson::oid::ObjectId;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Identifier of a stored todo. Each backend hands out its own kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoId {
    /// Counter-assigned id of the in-memory store, starting at 1.
    Seq(u64),
    /// Document id generated by the persisted store.
    Object(ObjectId),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Seq(n) => write!(f, "{n}"),
            TodoId::Object(oid) => write!(f, "{}", oid.to_hex()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub completed: bool,
    pub body: String,
}

// `Seq` ids go out as `id: <number>`, document ids as `_id: "<hex>"`.
impl Serialize for Todo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        match &self.id {
            TodoId::Seq(n) => map.serialize_entry("id", n)?,
            TodoId::Object(oid) => map.serialize_entry("_id", &oid.to_hex())?,
        }
        map.serialize_entry("completed", &self.completed)?;
        map.serialize_entry("body", &self.body)?;
        map.end()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTodo {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub completed: bool,
}

impl NewTodo {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into(), completed: false }
    }
}

/// Partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TodoPatch {
    pub body: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// The patch applied when a PATCH request carries no body.
    pub fn mark_completed() -> Self {
        Self { body: None, completed: Some(true) }
    }

    /// Drops an empty `body`; returns `None` when nothing is left to apply.
    pub fn normalized(self) -> Option<Self> {
        let body = self.body.filter(|b| !b.is_empty());
        if body.is_none() && self.completed.is_none() {
            return None;
        }
        Some(Self { body, completed: self.completed })
    }

    pub fn apply(&self, todo: &mut Todo) {
        if let Some(b) = &self.body { todo.body = b.clone(); }
        if let Some(c) = self.completed { todo.completed = c; }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn seq_ids_serialize_under_id() {
        let todo = Todo { id: TodoId::Seq(7), completed: false, body: "buy milk".into() };
        assert_eq!(serde_json::to_value(&todo).unwrap(), json!({ "id": 7, "completed": false, "body": "buy milk" }));
    }

    #[test]
    fn object_ids_serialize_as_hex_under_underscore_id() {
        let oid = ObjectId::parse_str("65a1b2c3d4e5f60718293a4b").unwrap();
        let todo = Todo { id: TodoId::Object(oid), completed: true, body: "x".into() };
        assert_eq!(
            serde_json::to_value(&todo).unwrap(),
            json!({ "_id": "65a1b2c3d4e5f60718293a4b", "completed": true, "body": "x" })
        );
    }

    #[test]
    fn patch_normalization() {
        assert_eq!(TodoPatch::default().normalized(), None);
        assert_eq!(TodoPatch { body: Some(String::new()), completed: None }.normalized(), None);
        assert_eq!(
            TodoPatch { body: Some(String::new()), completed: Some(false) }.normalized(),
            Some(TodoPatch { body: None, completed: Some(false) })
        );
    }

    #[test]
    fn new_todo_defaults_when_fields_missing() {
        let input: NewTodo = serde_json::from_value(json!({})).unwrap();
        assert_eq!(input.body, "");
        assert!(!input.completed);
    }
}
