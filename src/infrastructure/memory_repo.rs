use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    error::{TodoError, TodoResult},
    repository::TodoRepository,
    todo::{Todo, TodoId},
};

#[derive(Debug)]
struct TodoList {
    items: Vec<Todo>,
    next_id: u64,
}

impl Default for TodoList {
    fn default() -> Self { Self { items: Vec::new(), next_id: 1 } }
}

impl TodoList {
    fn push(&mut self, text: String) -> Todo {
        let todo = Todo { id: TodoId(self.next_id), text, done: false };
        self.next_id += 1;
        self.items.push(todo.clone());
        todo
    }

    fn find_mut(&mut self, id: TodoId) -> TodoResult<&mut Todo> {
        self.items.iter_mut().find(|t| t.id == id).ok_or(TodoError::NotFound(id))
    }

    fn remove(&mut self, id: TodoId) -> TodoResult<()> {
        let pos = self.items.iter().position(|t| t.id == id).ok_or(TodoError::NotFound(id))?;
        // `remove`, not `swap_remove`: display order is insertion order.
        self.items.remove(pos);
        Ok(())
    }
}

/// Process-lifetime todo list. Clones share the same list; the list and the id
/// counter sit behind a single lock so mutations never interleave.
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    inner: Arc<RwLock<TodoList>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create_and_list(&self, text: String) -> (Todo, Vec<Todo>) {
        let mut list = self.inner.write().await;
        let todo = list.push(text);
        (todo, list.items.clone())
    }

    async fn get(&self, id: TodoId) -> TodoResult<Todo> {
        let list = self.inner.read().await;
        list.items.iter().find(|t| t.id == id).cloned().ok_or(TodoError::NotFound(id))
    }

    async fn list(&self) -> Vec<Todo> { self.inner.read().await.items.clone() }

    async fn update_text(&self, id: TodoId, text: String) -> TodoResult<Todo> {
        let mut list = self.inner.write().await;
        let todo = list.find_mut(id)?;
        todo.text = text;
        Ok(todo.clone())
    }

    async fn toggle(&self, id: TodoId) -> TodoResult<Todo> {
        let mut list = self.inner.write().await;
        let todo = list.find_mut(id)?;
        todo.done = !todo.done;
        Ok(todo.clone())
    }

    async fn delete_and_list(&self, id: TodoId) -> TodoResult<Vec<Todo>> {
        let mut list = self.inner.write().await;
        list.remove(id)?;
        Ok(list.items.clone())
    }
}
