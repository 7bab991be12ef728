use super::memory_repo::InMemoryTodoRepository;
use crate::domain::{error::TodoError, repository::TodoRepository, todo::TodoId};

fn texts(todos: &[crate::domain::todo::Todo]) -> Vec<&str> {
    todos.iter().map(|t| t.text.as_str()).collect()
}

#[tokio::test]
async fn create_appends_in_order_undone() {
    let repo = InMemoryTodoRepository::new();
    for t in ["A", "B", "C"] {
        repo.create(t.into()).await;
    }
    let list = repo.list().await;
    assert_eq!(texts(&list), ["A", "B", "C"]);
    assert!(list.iter().all(|t| !t.done));
}

#[tokio::test]
async fn ids_are_distinct_and_never_reused() {
    let repo = InMemoryTodoRepository::new();
    let a = repo.create("same".into()).await;
    let b = repo.create("same".into()).await;
    assert_ne!(a.id, b.id);
    assert_eq!(a.text, b.text);

    repo.delete(b.id).await.unwrap();
    let c = repo.create("later".into()).await;
    assert!(c.id > b.id);

    repo.delete(a.id).await.unwrap();
    assert_eq!(texts(&repo.list().await), ["later"]);
}

#[tokio::test]
async fn toggle_is_self_inverse_and_isolated() {
    let repo = InMemoryTodoRepository::new();
    let x = repo.create("X".into()).await;
    let y = repo.create("Y".into()).await;

    assert!(repo.toggle(x.id).await.unwrap().done);
    assert!(!repo.get(y.id).await.unwrap().done);
    assert!(!repo.toggle(x.id).await.unwrap().done);
    assert_eq!(repo.list().await, vec![x, y]);
}

#[tokio::test]
async fn update_text_keeps_id_and_done() {
    let repo = InMemoryTodoRepository::new();
    let t = repo.create("old".into()).await;
    repo.toggle(t.id).await.unwrap();
    let long = "é🙂<&>\"'".repeat(40);
    let updated = repo.update_text(t.id, long.clone()).await.unwrap();
    assert_eq!(updated.id, t.id);
    assert!(updated.done);
    assert_eq!(updated.text, long);
}

#[tokio::test]
async fn delete_removes_exactly_one_preserving_order() {
    let repo = InMemoryTodoRepository::new();
    let ids: Vec<_> = create_all(&repo, &["1", "2", "3", "4"]).await;
    repo.delete(ids[1]).await.unwrap();
    let list = repo.list().await;
    assert_eq!(list.len(), 3);
    assert_eq!(list.iter().map(|t| t.id).collect::<Vec<_>>(), vec![ids[0], ids[2], ids[3]]);
}

#[tokio::test]
async fn missing_id_is_not_found_everywhere() {
    let repo = InMemoryTodoRepository::new();
    let missing = TodoId(42);
    assert_eq!(repo.get(missing).await, Err(TodoError::NotFound(missing)));
    assert_eq!(repo.toggle(missing).await, Err(TodoError::NotFound(missing)));
    assert_eq!(repo.update_text(missing, "x".into()).await, Err(TodoError::NotFound(missing)));
    assert_eq!(repo.delete(missing).await, Err(TodoError::NotFound(missing)));
    assert!(repo.list().await.is_empty());
}

#[tokio::test]
async fn clones_share_one_list() {
    let repo = InMemoryTodoRepository::new();
    let other = repo.clone();
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let r = other.clone();
            tokio::spawn(async move { r.create(format!("t{i}")).await.id })
        })
        .collect();
    let mut ids = Vec::new();
    for h in handles {
        ids.push(h.await.unwrap());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 16);
    assert_eq!(repo.list().await.len(), 16);
}

async fn create_all(repo: &InMemoryTodoRepository, items: &[&str]) -> Vec<TodoId> {
    let mut ids = Vec::new();
    for t in items {
        ids.push(repo.create((*t).to_string()).await.id);
    }
    ids
}

#[tokio::test]
async fn snapshots_match_the_mutation_that_took_them() {
    let repo = InMemoryTodoRepository::new();
    let (a, after_a) = repo.create_and_list("a".into()).await;
    assert_eq!(after_a, vec![a.clone()]);
    let (b, after_b) = repo.create_and_list("b".into()).await;
    assert_eq!(after_b, vec![a.clone(), b.clone()]);

    assert_eq!(repo.delete_and_list(a.id).await, Ok(vec![b.clone()]));
    assert_eq!(repo.delete_and_list(a.id).await, Err(TodoError::NotFound(a.id)));
    assert_eq!(repo.list().await, vec![b]);
}

#[tokio::test]
async fn concurrent_creates_each_see_their_own_record_last() {
    let repo = InMemoryTodoRepository::new();
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let r = repo.clone();
            tokio::spawn(async move { r.create_and_list(format!("t{i}")).await })
        })
        .collect();
    for h in handles {
        let (todo, snapshot) = h.await.unwrap();
        assert_eq!(snapshot.last(), Some(&todo));
        assert_eq!(snapshot.len() as u64, todo.id.0);
    }
}
