#[cfg(test)]
mod tests {
    use super::super::todo_service::{TodoService, TodoServiceImpl, EMPTY_BODY, NO_FIELDS};
    use crate::domain::{error::TodoError, todo::{NewTodo, TodoId, TodoPatch}};
    use crate::infrastructure::memory_repo::InMemoryTodoRepository;

    fn service() -> TodoServiceImpl<InMemoryTodoRepository> {
        TodoServiceImpl::new(InMemoryTodoRepository::new())
    }

    #[tokio::test]
    async fn unit_create_and_list() {
        let service = service();
        let created = service.create(NewTodo::new("buy milk")).await.unwrap();
        assert_eq!(created.id, TodoId::Seq(1));
        assert_eq!(created.body, "buy milk");
        assert!(!created.completed);
        assert_eq!(service.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn empty_body_is_rejected_without_storing() {
        let service = service();
        let err = service.create(NewTodo::new("")).await.unwrap_err();
        assert!(matches!(&err, TodoError::Validation(m) if m == EMPTY_BODY));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_without_fields_is_rejected() {
        let service = service();
        let t = service.create(NewTodo::new("x")).await.unwrap();
        let patch = TodoPatch { body: Some(String::new()), completed: None };
        let err = service.update(&t.id.to_string(), patch).await.unwrap_err();
        assert!(matches!(&err, TodoError::Validation(m) if m == NO_FIELDS));
    }

    #[tokio::test]
    async fn update_unknown_id_leaves_records_alone() {
        let service = service();
        let t = service.create(NewTodo::new("x")).await.unwrap();
        let err = service.update("42", TodoPatch::mark_completed()).await.unwrap_err();
        assert!(matches!(err, TodoError::NotFound));
        let err = service.update("not-a-number", TodoPatch::mark_completed()).await.unwrap_err();
        assert!(matches!(err, TodoError::NotFound));
        assert_eq!(service.list().await.unwrap(), vec![t]);
    }

    #[tokio::test]
    async fn update_changes_body_and_completed() {
        let service = service();
        let t = service.create(NewTodo::new("old")).await.unwrap();
        let patch = TodoPatch { body: Some("new".into()), completed: Some(true) };
        let updated = service.update(&t.id.to_string(), patch).await.unwrap();
        assert_eq!(updated.id, t.id);
        assert_eq!(updated.body, "new");
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found() {
        let service = service();
        let t = service.create(NewTodo::new("x")).await.unwrap();
        service.delete(&t.id.to_string()).await.unwrap();
        assert!(service.list().await.unwrap().is_empty());
        assert!(matches!(service.delete(&t.id.to_string()).await, Err(TodoError::NotFound)));
    }

    #[tokio::test]
    async fn parallel_creates_keep_every_record() {
        let service = service();
        let handles: Vec<_> = (0..64)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move { service.create(NewTodo::new(format!("todo {i}"))).await })
            })
            .collect();
        for h in handles {
            h.await.unwrap().unwrap();
        }

        let mut ids: Vec<_> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| match t.id { TodoId::Seq(n) => n, TodoId::Object(_) => unreachable!() })
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=64).collect::<Vec<_>>());
    }
}
