#[cfg(test)]
mod tests {
    use chrono::Utc;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tms::db::db::Db;
    use tms::db::error::DbError;
    use tms::db::tasks::Tasks;
    use tms::libs::task::Task;

    struct TaskTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            TaskTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl TaskTestContext {
        fn db(&self) -> Db {
            Db::new(&self.temp_dir.path().join("tms.db")).unwrap()
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_assigns_positive_id(ctx: &mut TaskTestContext) {
        let db = ctx.db();
        let tasks = Tasks::new(&db.conn);

        let mut task = Task::new("T", "first task", false);
        tasks.insert(&mut task).unwrap();
        assert!(task.id > 0);

        let fetched = tasks.get_by_id(task.id).unwrap();
        assert_eq!(fetched.title, "T");
        assert_eq!(fetched.description, "first task");
        assert!(!fetched.completed);
        assert_eq!(fetched.assigned_user_id, 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_ids_are_unique(ctx: &mut TaskTestContext) {
        let db = ctx.db();
        let tasks = Tasks::new(&db.conn);

        let mut first = Task::new("First", "", false);
        let mut second = Task::new("Second", "", false);
        tasks.insert(&mut first).unwrap();
        tasks.insert(&mut second).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_with_items_round_trip(ctx: &mut TaskTestContext) {
        let db = ctx.db();
        let tasks = Tasks::new(&db.conn);

        let mut task = Task::new("T", "", false);
        tasks.insert(&mut task).unwrap();
        assert_eq!(task.id, 1);
        tasks.insert_item(task.id, "a").unwrap();
        tasks.insert_item(task.id, "b").unwrap();

        let fetched = tasks.get_by_id(1).unwrap();
        assert_eq!(fetched.items, vec!["a", "b"]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_by_id_missing_is_not_found(ctx: &mut TaskTestContext) {
        let db = ctx.db();
        let tasks = Tasks::new(&db.conn);

        let err = tasks.get_by_id(42).unwrap_err();
        assert!(matches!(err, DbError::TaskNotFound(42)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_by_id_without_items_has_empty_list(ctx: &mut TaskTestContext) {
        let db = ctx.db();
        let tasks = Tasks::new(&db.conn);

        let mut task = Task::new("No items", "", false);
        tasks.insert(&mut task).unwrap();

        let fetched = tasks.get_by_id(task.id).unwrap();
        assert!(fetched.items.is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_all_groups_items_per_task(ctx: &mut TaskTestContext) {
        let db = ctx.db();
        let tasks = Tasks::new(&db.conn);

        let mut first = Task::new("First", "", false);
        tasks.insert(&mut first).unwrap();
        tasks.insert_item(first.id, "a").unwrap();
        tasks.insert_item(first.id, "b").unwrap();

        let mut second = Task::new("Second", "", true);
        tasks.insert(&mut second).unwrap();

        let all = tasks.get_all().unwrap();
        assert_eq!(all.len(), 2);
        let fetched_first = all.iter().find(|t| t.id == first.id).unwrap();
        assert_eq!(fetched_first.items, vec!["a", "b"]);
        let fetched_second = all.iter().find(|t| t.id == second.id).unwrap();
        assert!(fetched_second.items.is_empty());
        assert!(fetched_second.completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_replaces_items(ctx: &mut TaskTestContext) {
        let db = ctx.db();
        let tasks = Tasks::new(&db.conn);

        let mut task = Task::new("T", "", false);
        tasks.insert(&mut task).unwrap();
        tasks.insert_item(task.id, "a").unwrap();
        tasks.insert_item(task.id, "b").unwrap();

        // Replacement, not merge: old items "a" and "b" must be gone
        task.title = "Updated".to_string();
        task.completed = true;
        task.items = vec!["x".to_string()];
        tasks.update(task.id, &task).unwrap();

        let fetched = tasks.get_by_id(task.id).unwrap();
        assert_eq!(fetched.title, "Updated");
        assert!(fetched.completed);
        assert_eq!(fetched.items, vec!["x"]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_to_empty_items_clears_all(ctx: &mut TaskTestContext) {
        let db = ctx.db();
        let tasks = Tasks::new(&db.conn);

        let mut task = Task::new("T", "", false);
        tasks.insert(&mut task).unwrap();
        tasks.insert_item(task.id, "a").unwrap();

        task.items = Vec::new();
        tasks.update(task.id, &task).unwrap();

        let fetched = tasks.get_by_id(task.id).unwrap();
        assert!(fetched.items.is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_bumps_updated_at(ctx: &mut TaskTestContext) {
        let db = ctx.db();
        let tasks = Tasks::new(&db.conn);

        let mut task = Task::new("T", "", false);
        task.created_at = "2024-01-01T00:00:00Z".parse().unwrap();
        task.updated_at = task.created_at;
        tasks.insert(&mut task).unwrap();

        tasks.update(task.id, &task).unwrap();

        let fetched = tasks.get_by_id(task.id).unwrap();
        assert!(fetched.updated_at > fetched.created_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_assign_user_round_trip(ctx: &mut TaskTestContext) {
        let db = ctx.db();
        let tasks = Tasks::new(&db.conn);

        let mut task = Task::new("T", "", false);
        tasks.insert(&mut task).unwrap();

        let updated_at = Utc::now();
        tasks.assign_user(task.id, 42, updated_at).unwrap();

        let fetched = tasks.get_by_id(task.id).unwrap();
        assert_eq!(fetched.assigned_user_id, 42);
        assert_eq!(fetched.updated_at, updated_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_by_assigned_user(ctx: &mut TaskTestContext) {
        let db = ctx.db();
        let tasks = Tasks::new(&db.conn);

        let mut first = Task::new("First", "", false);
        tasks.insert(&mut first).unwrap();
        tasks.insert_item(first.id, "a").unwrap();

        let mut second = Task::new("Second", "", false);
        tasks.insert(&mut second).unwrap();
        tasks.insert_item(second.id, "x").unwrap();
        tasks.insert_item(second.id, "y").unwrap();

        let mut other = Task::new("Other", "", false);
        tasks.insert(&mut other).unwrap();

        tasks.assign_user(first.id, 42, Utc::now()).unwrap();
        tasks.assign_user(second.id, 42, Utc::now()).unwrap();
        tasks.assign_user(other.id, 7, Utc::now()).unwrap();

        let assigned = tasks.get_by_assigned_user(42).unwrap();
        assert_eq!(assigned.len(), 2);
        let fetched_first = assigned.iter().find(|t| t.id == first.id).unwrap();
        assert_eq!(fetched_first.items, vec!["a"]);
        let fetched_second = assigned.iter().find(|t| t.id == second.id).unwrap();
        assert_eq!(fetched_second.items, vec!["x", "y"]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_by_assigned_user_no_matches(ctx: &mut TaskTestContext) {
        let db = ctx.db();
        let tasks = Tasks::new(&db.conn);

        let mut task = Task::new("Unassigned", "", false);
        tasks.insert(&mut task).unwrap();

        let assigned = tasks.get_by_assigned_user(99).unwrap();
        assert!(assigned.is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_removes_task_and_items(ctx: &mut TaskTestContext) {
        let db = ctx.db();
        let tasks = Tasks::new(&db.conn);

        let mut task = Task::new("Doomed", "", false);
        tasks.insert(&mut task).unwrap();
        tasks.insert_item(task.id, "a").unwrap();

        tasks.delete(task.id).unwrap();

        let err = tasks.get_by_id(task.id).unwrap_err();
        assert!(matches!(err, DbError::TaskNotFound(_)));

        // Item rows cascade with the task
        let item_count: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM task_item WHERE task_id = ?1", [task.id], |row| row.get(0))
            .unwrap();
        assert_eq!(item_count, 0);
    }
}
