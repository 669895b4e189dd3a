use super::*;

// =========================================================
// 辅助函数
// =========================================================

fn sample_task(id: &str, title: &str) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        start_time: "2024-01-01T09:00".to_string(),
        end_time: "2024-01-01T11:00".to_string(),
        priority: 3,
        status: TaskStatus::Pending,
    }
}

fn valid_draft(title: &str) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        start_time: "2024-01-01T09:00".to_string(),
        end_time: "2024-01-01T11:00".to_string(),
        priority: 3,
        status: TaskStatus::Pending,
    }
}

/// 构造一个已完成加载、持有给定任务的状态
fn loaded(tasks: Vec<Task>) -> TaskListState {
    let (state, effects) = TaskListState::new().resolve(TaskOutcome::Loaded(Ok(tasks)));
    assert!(effects.is_empty());
    state
}

fn error_message(effects: &[Effect]) -> &str {
    match effects {
        [Effect::Notify(notice)] => {
            assert_eq!(notice.level, NoticeLevel::Error);
            &notice.message
        }
        other => panic!("expected a single error notice, got {other:?}"),
    }
}

// =========================================================
// 加载
// =========================================================

#[test]
fn test_load_sets_loading_and_requests_fetch() {
    let (state, effects) = TaskListState::new().apply(TaskCommand::Load);

    assert!(state.loading);
    assert_eq!(effects, vec![Effect::Request(ApiCall::FetchTasks)]);
}

#[test]
fn test_loaded_ok_replaces_tasks() {
    let state = loaded(vec![sample_task("a1", "First"), sample_task("a2", "Second")]);

    assert!(!state.loading);
    assert_eq!(state.tasks.len(), 2);
    assert_eq!(state.tasks[0].id, "a1");
}

#[test]
fn test_loaded_err_keeps_previous_tasks() {
    let state = loaded(vec![sample_task("a1", "Survivor")]);

    let (state, effects) = state.resolve(TaskOutcome::Loaded(Err("boom".to_string())));

    // 旧列表保留，仅弹错误提示
    assert_eq!(state.tasks.len(), 1);
    assert!(!state.loading);
    assert_eq!(error_message(&effects), "Error fetching tasks");
}

// =========================================================
// 创建：本地校验
// =========================================================

#[test]
fn test_create_rejects_empty_title_without_request() {
    let mut draft = valid_draft("x");
    draft.title = "   ".to_string();

    let before = loaded(vec![sample_task("a1", "Existing")]);
    let (state, effects) = before.clone().apply(TaskCommand::Create(draft));

    // 状态不变，且没有任何 Request 副作用
    assert_eq!(state, before);
    assert_eq!(error_message(&effects), "Task title cannot be empty");
}

#[test]
fn test_create_rejects_out_of_range_priority() {
    for priority in [0u8, 6, 200] {
        let mut draft = valid_draft("Valid title");
        draft.priority = priority;

        let (_, effects) = TaskListState::new().apply(TaskCommand::Create(draft));

        assert_eq!(
            error_message(&effects),
            "Priority must be a number between 1 and 5"
        );
    }
}

#[test]
fn test_create_rejects_missing_schedule() {
    let mut draft = valid_draft("Valid title");
    draft.end_time = String::new();

    let (_, effects) = TaskListState::new().apply(TaskCommand::Create(draft));

    assert_eq!(error_message(&effects), "Please set both start and end times");
}

#[test]
fn test_create_validation_checks_title_first() {
    // 多项同时不合法时，按标题 -> 优先级 -> 时间的顺序只报第一项
    let draft = TaskDraft {
        title: String::new(),
        start_time: String::new(),
        end_time: String::new(),
        priority: 0,
        status: TaskStatus::Pending,
    };

    let (_, effects) = TaskListState::new().apply(TaskCommand::Create(draft));

    assert_eq!(error_message(&effects), "Task title cannot be empty");
}

// =========================================================
// 创建：请求与结果
// =========================================================

#[test]
fn test_create_valid_draft_requests_create() {
    let draft = valid_draft("Write report");

    let (state, effects) = TaskListState::new().apply(TaskCommand::Create(draft.clone()));

    assert!(state.tasks.is_empty());
    assert_eq!(effects, vec![Effect::Request(ApiCall::CreateTask(draft))]);
}

#[test]
fn test_created_ok_appends_and_schedules_silent_reload() {
    let before = loaded(vec![sample_task("a1", "Existing")]);
    let created = sample_task("srv-9", "Write report");

    let (state, effects) = before.resolve(TaskOutcome::Created(Ok(created)));

    // 新纪录带着服务端 id 入列，随后静默重拉
    assert_eq!(state.tasks.len(), 2);
    assert_eq!(state.tasks[1].id, "srv-9");
    assert!(!state.loading);
    assert_eq!(
        effects,
        vec![
            Effect::ClearDraft,
            Effect::Notify(Notice::success("Task added successfully")),
            Effect::Request(ApiCall::FetchTasks),
        ]
    );
}

#[test]
fn test_created_err_leaves_tasks_untouched() {
    let before = loaded(vec![sample_task("a1", "Existing")]);

    let (state, effects) = before.resolve(TaskOutcome::Created(Err("500".to_string())));

    assert_eq!(state.tasks.len(), 1);
    assert_eq!(error_message(&effects), "Error adding task");
}

// =========================================================
// 状态更新
// =========================================================

#[test]
fn test_update_status_sends_full_task_with_new_status() {
    let state = loaded(vec![sample_task("a1", "Keep fields")]);

    let (_, effects) = state.apply(TaskCommand::UpdateStatus {
        id: "a1".to_string(),
        status: TaskStatus::Finished,
    });

    // 整条记录回传，仅 status 改变
    let mut expected = sample_task("a1", "Keep fields");
    expected.status = TaskStatus::Finished;
    assert_eq!(effects, vec![Effect::Request(ApiCall::UpdateTask(expected))]);
}

#[test]
fn test_update_status_for_unknown_id_is_noop() {
    let before = loaded(vec![sample_task("a1", "Only")]);

    let (state, effects) = before.clone().apply(TaskCommand::UpdateStatus {
        id: "ghost".to_string(),
        status: TaskStatus::Finished,
    });

    assert_eq!(state, before);
    assert!(effects.is_empty());
}

#[test]
fn test_updated_ok_replaces_record_and_exits_editing() {
    let (state, _) = loaded(vec![sample_task("a1", "Stale")])
        .apply(TaskCommand::BeginEdit { id: "a1".to_string() });
    let mut fresh = sample_task("a1", "Stale");
    fresh.status = TaskStatus::Finished;

    let (state, effects) = state.resolve(TaskOutcome::Updated(Ok(fresh)));

    assert_eq!(state.tasks[0].status, TaskStatus::Finished);
    assert_eq!(state.editing, None);
    assert_eq!(
        effects,
        vec![Effect::Notify(Notice::success("Task status updated successfully"))]
    );
}

#[test]
fn test_updated_err_retains_editing() {
    let (state, _) = loaded(vec![sample_task("a1", "Stuck")])
        .apply(TaskCommand::BeginEdit { id: "a1".to_string() });

    let (state, effects) = state.resolve(TaskOutcome::Updated(Err("timeout".to_string())));

    // 编辑态保留，用户可直接重试
    assert_eq!(state.editing.as_deref(), Some("a1"));
    assert_eq!(error_message(&effects), "Error updating task status");
}

// =========================================================
// 删除
// =========================================================

#[test]
fn test_delete_requests_delete_call() {
    let state = loaded(vec![sample_task("a1", "Doomed")]);

    let (_, effects) = state.apply(TaskCommand::Delete { id: "a1".to_string() });

    assert_eq!(
        effects,
        vec![Effect::Request(ApiCall::DeleteTask { id: "a1".to_string() })]
    );
}

#[test]
fn test_deleted_ok_removes_record_and_reloads() {
    let before = loaded(vec![sample_task("a1", "Doomed"), sample_task("a2", "Kept")]);

    let (state, effects) = before.resolve(TaskOutcome::Deleted {
        id: "a1".to_string(),
        result: Ok(()),
    });

    assert_eq!(state.tasks.len(), 1);
    assert_eq!(state.tasks[0].id, "a2");
    assert_eq!(
        effects,
        vec![
            Effect::Notify(Notice::success("Task deleted successfully")),
            Effect::Request(ApiCall::FetchTasks),
        ]
    );
}

#[test]
fn test_deleted_err_keeps_record() {
    let before = loaded(vec![sample_task("a1", "Still here")]);

    let (state, effects) = before.resolve(TaskOutcome::Deleted {
        id: "a1".to_string(),
        result: Err("409".to_string()),
    });

    assert_eq!(state.tasks.len(), 1);
    assert_eq!(error_message(&effects), "Error deleting task");
}

// =========================================================
// 编辑态
// =========================================================

#[test]
fn test_begin_and_cancel_edit() {
    let state = loaded(vec![sample_task("a1", "Editable")]);

    let (state, effects) = state.apply(TaskCommand::BeginEdit { id: "a1".to_string() });
    assert_eq!(state.editing.as_deref(), Some("a1"));
    assert!(effects.is_empty());

    let (state, effects) = state.apply(TaskCommand::CancelEdit);
    assert_eq!(state.editing, None);
    assert!(effects.is_empty());
}

// =========================================================
// 端到端场景
// =========================================================

#[test]
fn test_write_report_scenario() {
    // 建一个 09:00-11:00 的任务，走完创建全流程后核对时长
    let draft = TaskDraft {
        title: "Write report".to_string(),
        start_time: "2024-01-01T09:00".to_string(),
        end_time: "2024-01-01T11:00".to_string(),
        priority: 3,
        status: TaskStatus::Pending,
    };

    let (state, effects) = TaskListState::new().apply(TaskCommand::Create(draft.clone()));
    assert_eq!(effects, vec![Effect::Request(ApiCall::CreateTask(draft))]);

    let mut created = sample_task("srv-1", "Write report");
    created.status = TaskStatus::Pending;
    let (state, _) = state.resolve(TaskOutcome::Created(Ok(created)));

    assert_eq!(state.tasks.len(), 1);
    assert_eq!(state.tasks[0].duration_hours(), Some(2.0));
}
