//! HTML fragments for the todo page.
//!
//! `render_list` fills `<ul id="todos">` (swapped with `innerHTML`); `render_item`
//! produces one `<li>` that replaces itself (swapped with `outerHTML`). Only the
//! initial page load gets a full document from `render_page`.

use crate::application::todo_service::{Rerender, SwapTarget};
use crate::domain::todo::{Todo, TodoId};

pub(crate) const LIST_ID: &str = "todos";
pub(crate) const EMPTY_PLACEHOLDER: &str = "No todos. Go create some!";
pub(crate) const STRIKETHROUGH: &str = "text-decoration: line-through";
pub(crate) const DELETE_LABEL: &str = "❌";
/// Idle delay before an edit is sent.
pub(crate) const EDIT_DEBOUNCE_MS: u64 = 250;

/// Escapes text for use in element content and double- or single-quoted attributes.
pub(crate) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

fn item_dom_id(id: TodoId) -> String { format!("todo-{id}") }

/// CSS selector and htmx swap style for the region a response replaces.
pub fn swap_for(target: SwapTarget) -> (String, &'static str) {
    match target {
        SwapTarget::List => (format!("#{LIST_ID}"), "innerHTML"),
        SwapTarget::Item(id) => (format!("#{}", item_dom_id(id)), "outerHTML"),
    }
}

pub fn render_item(todo: &Todo) -> String {
    let id = todo.id;
    let dom_id = item_dom_id(id);
    let checked = if todo.done { " checked" } else { "" };
    let done_attrs = if todo.done { format!(r#" style="{STRIKETHROUGH}" disabled"#) } else { String::new() };
    format!(
        concat!(
            r#"<li id="{dom_id}">"#,
            r##"<input type="checkbox" name="done" hx-post="/todos/{id}/toggle" hx-target="#{dom_id}" hx-swap="outerHTML"{checked}>"##,
            r##"<input type="text" id="{dom_id}-text" name="text" value="{value}" hx-put="/todos/{id}" hx-trigger="input changed delay:{debounce}ms" hx-target="#{dom_id}" hx-swap="outerHTML"{done_attrs}>"##,
            r##"<input type="button" value="{delete}" hx-post="/todos/{id}/delete" hx-target="#{list}" hx-swap="innerHTML">"##,
            "</li>",
        ),
        dom_id = dom_id,
        id = id,
        checked = checked,
        value = escape(&todo.text),
        debounce = EDIT_DEBOUNCE_MS,
        done_attrs = done_attrs,
        delete = DELETE_LABEL,
        list = LIST_ID,
    )
}

pub fn render_list(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return format!("<li>{EMPTY_PLACEHOLDER}</li>");
    }
    todos.iter().map(render_item).collect()
}

pub fn render_rerender(rerender: &Rerender) -> String {
    match rerender {
        Rerender::List(todos) => render_list(todos),
        Rerender::Item(todo) => render_item(todo),
    }
}

pub fn render_page(todos: &[Todo], htmx_src: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Todos</title>
<script src="{src}"></script>
</head>
<body>
<h1>Todos</h1>
<form hx-post="/todos" hx-target="#{list}" hx-swap="innerHTML" hx-on::after-request="if (event.detail.successful) this.reset()">
<input type="text" name="todo" placeholder="What needs doing?" autofocus>
<button type="submit">Create</button>
</form>
<ul id="{list}">{items}</ul>
</body>
</html>
"##,
        src = escape(htmx_src),
        list = LIST_ID,
        items = render_list(todos),
    )
}
