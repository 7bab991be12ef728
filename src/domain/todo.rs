use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub done: bool,
}

/// Form body of the create action. The field name matches the page's `<input name="todo">`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub todo: String,
}

/// Form body of the edit action, sent by the item's `<input name="text">`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodo {
    pub text: String,
}
