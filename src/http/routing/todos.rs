use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};

use crate::{
    application::todo_service::{Rerender, TodoService},
    domain::todo::{CreateTodo, Todo, TodoId, UpdateTodo},
    http::{render, types::ApiError},
};

#[derive(Clone)]
pub struct AppState<S: TodoService> {
    pub service: S,
    pub htmx_src: String,
}

pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(index::<S>))
        .route("/todos", post(create_todo::<S>).get(list_todos::<S>))
        .route("/todos/:id", get(get_todo::<S>).put(update_todo::<S>))
        .route("/todos/:id/toggle", post(toggle_todo::<S>))
        .route("/todos/:id/delete", post(delete_todo::<S>))
        .with_state(state)
}

async fn index<S: TodoService>(State(state): State<AppState<S>>) -> Html<String> {
    let todos = state.service.list().await;
    tracing::debug!(count = todos.len(), "index");
    Html(render::render_page(&todos, &state.htmx_src))
}

/// htmx asks for the list fragment; anything else gets the todos as JSON.
async fn list_todos<S: TodoService>(State(state): State<AppState<S>>, headers: HeaderMap) -> Response {
    let todos = state.service.list().await;
    let htmx = headers.contains_key("hx-request");
    tracing::debug!(count = todos.len(), htmx, "list todos");
    if htmx {
        Html(render::render_list(&todos)).into_response()
    } else {
        Json(todos).into_response()
    }
}

async fn get_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.service.get(id).await?))
}

async fn create_todo<S: TodoService>(State(state): State<AppState<S>>, Form(input): Form<CreateTodo>) -> Result<Response, ApiError> {
    let rerender = state.service.create(input.todo).await?;
    Ok(swap(&rerender))
}

async fn update_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>, Form(input): Form<UpdateTodo>) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    let rerender = state.service.edit(id, input.text).await?;
    Ok(swap(&rerender))
}

async fn toggle_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    let rerender = state.service.toggle(id).await?;
    Ok(swap(&rerender))
}

async fn delete_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    let rerender = state.service.delete(id).await?;
    Ok(swap(&rerender))
}

/// Fragment plus `HX-Retarget`/`HX-Reswap`, so the response itself names the region it replaces.
fn swap(rerender: &Rerender) -> Response {
    let (selector, style) = render::swap_for(rerender.target());
    ([("hx-retarget", selector), ("hx-reswap", style.to_string())], Html(render::render_rerender(rerender))).into_response()
}

fn parse_id(s: &str) -> Result<TodoId, ApiError> { s.parse().map(TodoId).map_err(|_| ApiError::bad_request("invalid id")) }
