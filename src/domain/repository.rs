use async_trait::async_trait;

use super::error::TodoResult;
use super::todo::{Todo, TodoId};

/// The only mutation surface over the todo list. Every call is atomic with respect
/// to every other call on the same repository.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Appends a record with a fresh id and `done = false`, returning it together
    /// with the list as it stands right after the append. Never fails.
    async fn create_and_list(&self, text: String) -> (Todo, Vec<Todo>);
    async fn create(&self, text: String) -> Todo { self.create_and_list(text).await.0 }
    async fn get(&self, id: TodoId) -> TodoResult<Todo>;
    /// Snapshot in insertion order.
    async fn list(&self) -> Vec<Todo>;
    async fn update_text(&self, id: TodoId, text: String) -> TodoResult<Todo>;
    async fn toggle(&self, id: TodoId) -> TodoResult<Todo>;
    /// Removes the record, returning the remaining list taken under the same lock.
    async fn delete_and_list(&self, id: TodoId) -> TodoResult<Vec<Todo>>;
    async fn delete(&self, id: TodoId) -> TodoResult<()> { self.delete_and_list(id).await.map(drop) }
}
