use async_trait::async_trait;

use crate::domain::error::{TodoError, TodoResult};
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{Todo, TodoId};

/// Page region a mutation's response replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapTarget {
    List,
    Item(TodoId),
}

/// What a successful mutation asks the client to re-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rerender {
    List(Vec<Todo>),
    Item(Todo),
}

impl Rerender {
    pub fn target(&self) -> SwapTarget {
        match self {
            Rerender::List(_) => SwapTarget::List,
            Rerender::Item(todo) => SwapTarget::Item(todo.id),
        }
    }
}

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn list(&self) -> Vec<Todo>;
    async fn get(&self, id: TodoId) -> TodoResult<Todo>;
    async fn create(&self, text: String) -> TodoResult<Rerender>;
    async fn edit(&self, id: TodoId, text: String) -> TodoResult<Rerender>;
    async fn toggle(&self, id: TodoId) -> TodoResult<Rerender>;
    async fn delete(&self, id: TodoId) -> TodoResult<Rerender>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

/// Blank and whitespace-only text is refused for both create and edit. Anything
/// else is kept verbatim, surrounding whitespace included.
pub fn accept_text(text: &str) -> TodoResult<()> {
    if text.trim().is_empty() {
        return Err(TodoError::ValidationRejected("todo text must not be blank".into()));
    }
    Ok(())
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn list(&self) -> Vec<Todo> { self.repo.list().await }

    async fn get(&self, id: TodoId) -> TodoResult<Todo> { self.repo.get(id).await }

    async fn create(&self, text: String) -> TodoResult<Rerender> {
        accept_text(&text)?;
        let (todo, todos) = self.repo.create_and_list(text).await;
        tracing::info!(id = %todo.id, "todo created");
        Ok(Rerender::List(todos))
    }

    async fn edit(&self, id: TodoId, text: String) -> TodoResult<Rerender> {
        accept_text(&text)?;
        let todo = self.repo.update_text(id, text).await?;
        tracing::info!(%id, "todo text updated");
        Ok(Rerender::Item(todo))
    }

    async fn toggle(&self, id: TodoId) -> TodoResult<Rerender> {
        let todo = self.repo.toggle(id).await?;
        tracing::info!(%id, done = todo.done, "todo toggled");
        Ok(Rerender::Item(todo))
    }

    async fn delete(&self, id: TodoId) -> TodoResult<Rerender> {
        let todos = self.repo.delete_and_list(id).await?;
        tracing::info!(%id, "todo deleted");
        Ok(Rerender::List(todos))
    }
}
