//! 任务列表页面
//!
//! 页面行为全部经由 `TaskListState` 状态机：
//! 界面只负责把交互转成命令、把副作用落到网络 / 提示 / 表单上。

use crate::api::{ApiError, TaskApi};
use crate::components::icons::{Pencil, Trash2};
use crate::components::navbar::Navbar;
use crate::components::task_form::{TaskForm, TaskFormState};
use crate::toast::{ToastContext, use_toasts};
use leptos::prelude::*;
use leptos::task::spawn_local;
use taskdeck_shared::date;
use taskdeck_shared::tasklist::{
    ApiCall, Effect as ListEffect, TaskCommand, TaskListState, TaskOutcome,
};
use taskdeck_shared::{Task, TaskDraft, TaskStatus};

/// 记录接口错误并降级为描述文本
fn log_api_error(e: ApiError) -> String {
    let text = e.to_string();
    web_sys::console::log_1(&format!("[Tasks] API error: {text}").into());
    text
}

// =========================================================
// 控制器
// =========================================================

/// 任务页控制器
///
/// 把状态机、接口调用与提示串成一条环：
/// 命令 -> 迁移 -> 副作用 -> 请求结果 -> 再迁移。
#[derive(Clone, Copy)]
struct TaskListController {
    state: ReadSignal<TaskListState>,
    set_state: WriteSignal<TaskListState>,
    toasts: ToastContext,
    form: TaskFormState,
}

impl TaskListController {
    fn new(toasts: ToastContext, form: TaskFormState) -> Self {
        let (state, set_state) = signal(TaskListState::new());
        Self {
            state,
            set_state,
            toasts,
            form,
        }
    }

    /// 投递一条命令
    ///
    /// 页面销毁后信号一并回收，此时的命令直接丢弃
    fn dispatch(&self, command: TaskCommand) {
        let Some(current) = self.state.try_get_untracked() else {
            return;
        };
        let (next, effects) = current.apply(command);
        self.set_state.set(next);
        self.run(effects);
    }

    /// 回注一次请求结果
    ///
    /// 请求返回时页面可能已经切走：迟到的结果直接丢弃，
    /// 不再触碰已销毁的信号（写入侧本身就是 no-op，读取侧在此拦截）。
    fn settle(&self, outcome: TaskOutcome) {
        let Some(current) = self.state.try_get_untracked() else {
            return;
        };
        let (next, effects) = current.resolve(outcome);
        self.set_state.set(next);
        self.run(effects);
    }

    /// 依序执行副作用
    fn run(&self, effects: Vec<ListEffect>) {
        for effect in effects {
            match effect {
                ListEffect::Request(call) => self.execute(call),
                ListEffect::Notify(notice) => self.toasts.push(notice),
                ListEffect::ClearDraft => self.form.reset(),
            }
        }
    }

    /// 发起一次接口调用，完成后把结果回注状态机
    fn execute(&self, call: ApiCall) {
        let controller = *self;
        spawn_local(async move {
            let outcome = match call {
                ApiCall::FetchTasks => {
                    TaskOutcome::Loaded(TaskApi::fetch_tasks().await.map_err(log_api_error))
                }
                ApiCall::CreateTask(draft) => {
                    TaskOutcome::Created(TaskApi::create_task(&draft).await.map_err(log_api_error))
                }
                ApiCall::UpdateTask(task) => {
                    TaskOutcome::Updated(TaskApi::update_task(&task).await.map_err(log_api_error))
                }
                ApiCall::DeleteTask { id } => TaskOutcome::Deleted {
                    result: TaskApi::delete_task(&id).await.map_err(log_api_error),
                    id,
                },
            };
            controller.settle(outcome);
        });
    }
}

// =========================================================
// 页面组件
// =========================================================

/// 任务状态徽章
#[component]
fn StatusBadge(status: TaskStatus) -> impl IntoView {
    let class = match status {
        TaskStatus::Pending => "badge badge-warning badge-outline",
        TaskStatus::Finished => "badge badge-success badge-outline",
    };
    view! { <div class=class>{status.as_str()}</div> }
}

#[component]
pub fn TasksPage() -> impl IntoView {
    let toasts = use_toasts();
    let form = TaskFormState::new();
    let controller = TaskListController::new(toasts, form);

    // 行内编辑时的状态选择，保存时随 UpdateStatus 命令带出
    let editing_status = RwSignal::new(TaskStatus::Pending);

    // 进入页面即加载一次
    Effect::new(move |_| {
        controller.dispatch(TaskCommand::Load);
    });

    let on_create = Callback::new(move |draft: TaskDraft| {
        controller.dispatch(TaskCommand::Create(draft));
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Navbar />

                <TaskForm form=form on_submit=on_create />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="p-6 pb-2">
                            <h3 class="card-title">"Your tasks"</h3>
                            <p class="text-base-content/70 text-sm">
                                "Track, update and clear your work items."
                            </p>
                        </div>

                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Task"</th>
                                        <th>"Start time"</th>
                                        <th>"End time"</th>
                                        <th>"Priority"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || {
                                        let s = controller.state.get();
                                        s.tasks.is_empty() && !s.loading
                                    }>
                                        <tr>
                                            <td colspan="7" class="text-center py-8 text-base-content/50">
                                                "No tasks available"
                                            </td>
                                        </tr>
                                    </Show>
                                    <Show when=move || {
                                        let s = controller.state.get();
                                        s.loading && s.tasks.is_empty()
                                    }>
                                        <tr>
                                            <td colspan="7" class="text-center py-8 text-base-content/50">
                                                <span class="loading loading-spinner loading-md"></span>
                                                " Loading tasks..."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || controller.state.get().tasks
                                        key=|t| t.id.clone()
                                        children=move |task: Task| {
                                            let row_id = task.id.clone();
                                            let edit_id = task.id.clone();
                                            let save_id = task.id.clone();
                                            let delete_id = task.id.clone();
                                            let status = task.status;

                                            let is_editing = Signal::derive(move || {
                                                controller.state.get().editing.as_deref()
                                                    == Some(row_id.as_str())
                                            });

                                            view! {
                                                <tr>
                                                    <td class="font-mono text-xs opacity-50">{task.id.clone()}</td>
                                                    <td class="font-medium">{task.title.clone()}</td>
                                                    <td>{date::format_display(&task.start_time)}</td>
                                                    <td>{date::format_display(&task.end_time)}</td>
                                                    <td>
                                                        <div class="badge badge-outline">{task.priority}</div>
                                                    </td>
                                                    <td>
                                                        {move || if is_editing.get() {
                                                            view! {
                                                                <select
                                                                    class="select select-bordered select-sm"
                                                                    on:change=move |ev| {
                                                                        editing_status.set(TaskStatus::parse(&event_target_value(&ev)));
                                                                    }
                                                                >
                                                                    <option
                                                                        value="pending"
                                                                        selected=move || editing_status.get() == TaskStatus::Pending
                                                                    >
                                                                        "pending"
                                                                    </option>
                                                                    <option
                                                                        value="finished"
                                                                        selected=move || editing_status.get() == TaskStatus::Finished
                                                                    >
                                                                        "finished"
                                                                    </option>
                                                                </select>
                                                            }
                                                            .into_any()
                                                        } else {
                                                            view! { <StatusBadge status=status /> }.into_any()
                                                        }}
                                                    </td>
                                                    <td>
                                                        {move || if is_editing.get() {
                                                            let save_id = save_id.clone();
                                                            view! {
                                                                <div class="flex gap-2">
                                                                    <button
                                                                        class="btn btn-primary btn-sm"
                                                                        on:click=move |_| {
                                                                            controller.dispatch(TaskCommand::UpdateStatus {
                                                                                id: save_id.clone(),
                                                                                status: editing_status.get(),
                                                                            });
                                                                        }
                                                                    >
                                                                        "Save"
                                                                    </button>
                                                                    <button
                                                                        class="btn btn-ghost btn-sm"
                                                                        on:click=move |_| {
                                                                            controller.dispatch(TaskCommand::CancelEdit);
                                                                        }
                                                                    >
                                                                        "Cancel"
                                                                    </button>
                                                                </div>
                                                            }
                                                            .into_any()
                                                        } else {
                                                            let edit_id = edit_id.clone();
                                                            let delete_id = delete_id.clone();
                                                            view! {
                                                                <div class="flex gap-2">
                                                                    <button
                                                                        class="btn btn-ghost btn-sm"
                                                                        on:click=move |_| {
                                                                            editing_status.set(status);
                                                                            controller.dispatch(TaskCommand::BeginEdit {
                                                                                id: edit_id.clone(),
                                                                            });
                                                                        }
                                                                    >
                                                                        <Pencil attr:class="h-4 w-4" />
                                                                    </button>
                                                                    <button
                                                                        class="btn btn-ghost btn-sm text-error"
                                                                        on:click=move |_| {
                                                                            controller.dispatch(TaskCommand::Delete {
                                                                                id: delete_id.clone(),
                                                                            });
                                                                        }
                                                                    >
                                                                        <Trash2 attr:class="h-4 w-4" />
                                                                    </button>
                                                                </div>
                                                            }
                                                            .into_any()
                                                        }}
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

// =========================================================
// 测试模块
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task(id: &str) -> Task {
        Task {
            id: id.to_string(),
            title: "Write release notes".to_string(),
            start_time: "2024-01-01T09:00".to_string(),
            end_time: "2024-01-01T11:00".to_string(),
            priority: 3,
            status: TaskStatus::Pending,
        }
    }

    /// 在独立 Owner 下构建控制器，便于模拟页面卸载后的信号回收
    fn controller_under_owner() -> (Owner, TaskListController) {
        let owner = Owner::new();
        let controller =
            owner.with(|| TaskListController::new(ToastContext::new(), TaskFormState::new()));
        (owner, controller)
    }

    #[test]
    fn test_settle_after_page_disposal_drops_late_outcome() {
        let (owner, controller) = controller_under_owner();
        drop(owner);

        // 页面销毁后信号已回收，迟到的请求结果必须被静默丢弃
        assert!(controller.state.try_get_untracked().is_none());
        controller.settle(TaskOutcome::Loaded(Ok(vec![sample_task("a1")])));
    }

    #[test]
    fn test_dispatch_after_page_disposal_drops_command() {
        let (owner, controller) = controller_under_owner();
        drop(owner);

        // 丢弃发生在副作用执行之前：Load 本会发起一次网络请求
        controller.dispatch(TaskCommand::Load);
    }

    #[test]
    fn test_dispatch_flows_state_through_signals() {
        let (_owner, controller) = controller_under_owner();

        controller.dispatch(TaskCommand::BeginEdit {
            id: "a1".to_string(),
        });

        let state = controller.state.try_get_untracked();
        assert_eq!(state.and_then(|s| s.editing), Some("a1".to_string()));
    }
}
