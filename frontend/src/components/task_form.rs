//! 新建任务表单
//!
//! 将零散的 signal 整合为 `TaskFormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 数据到创建请求的转换
//!
//! 表单只采集输入，不做校验；校验统一发生在创建命令的处理中。

use crate::components::icons::Plus;
use leptos::prelude::*;
use taskdeck_shared::{DEFAULT_PRIORITY, TaskDraft, TaskStatus};

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合作为 Props 在组件间传递。
/// 优先级按原始字符串持有：无法解析的输入映射为 0，由统一校验拒绝，
/// 这样「清空优先级再提交」也能得到正确的错误提示。
#[derive(Clone, Copy)]
pub struct TaskFormState {
    pub title: RwSignal<String>,
    pub start_time: RwSignal<String>,
    pub end_time: RwSignal<String>,
    pub priority: RwSignal<String>,
    pub status: RwSignal<TaskStatus>,
}

impl TaskFormState {
    /// 创建新的表单状态，所有字段使用默认值
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            start_time: RwSignal::new(String::new()),
            end_time: RwSignal::new(String::new()),
            priority: RwSignal::new(DEFAULT_PRIORITY.to_string()),
            status: RwSignal::new(TaskStatus::Pending),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.title.set(String::new());
        self.start_time.set(String::new());
        self.end_time.set(String::new());
        self.priority.set(DEFAULT_PRIORITY.to_string());
        self.status.set(TaskStatus::Pending);
    }

    /// 将表单内容转换为创建请求
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.get(),
            start_time: self.start_time.get(),
            end_time: self.end_time.get(),
            priority: self.priority.get().trim().parse::<u8>().unwrap_or(0),
            status: self.status.get(),
        }
    }
}

impl Default for TaskFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// 新建任务表单组件
#[component]
pub fn TaskForm(form: TaskFormState, on_submit: Callback<TaskDraft>) -> impl IntoView {
    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(form.to_draft());
    };

    view! {
        <form class="card bg-base-100 shadow-xl" on:submit=handle_submit>
            <div class="card-body">
                <h3 class="card-title">"Add a task"</h3>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div class="form-control md:col-span-2">
                        <label class="label" for="task-title">
                            <span class="label-text">"Title"</span>
                        </label>
                        <input
                            id="task-title"
                            type="text"
                            placeholder="What needs to be done?"
                            on:input=move |ev| form.title.set(event_target_value(&ev))
                            prop:value=form.title
                            class="input input-bordered"
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="task-start">
                            <span class="label-text">"Start time"</span>
                        </label>
                        <input
                            id="task-start"
                            type="datetime-local"
                            on:input=move |ev| form.start_time.set(event_target_value(&ev))
                            prop:value=form.start_time
                            class="input input-bordered"
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="task-end">
                            <span class="label-text">"End time"</span>
                        </label>
                        <input
                            id="task-end"
                            type="datetime-local"
                            on:input=move |ev| form.end_time.set(event_target_value(&ev))
                            prop:value=form.end_time
                            class="input input-bordered"
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="task-priority">
                            <span class="label-text">"Priority (1-5)"</span>
                        </label>
                        <input
                            id="task-priority"
                            type="number"
                            min="1"
                            max="5"
                            on:input=move |ev| form.priority.set(event_target_value(&ev))
                            prop:value=form.priority
                            class="input input-bordered"
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="task-status">
                            <span class="label-text">"Status"</span>
                        </label>
                        <select
                            id="task-status"
                            class="select select-bordered"
                            on:change=move |ev| form.status.set(TaskStatus::parse(&event_target_value(&ev)))
                        >
                            <option value="pending" selected=move || form.status.get() == TaskStatus::Pending>
                                "Pending"
                            </option>
                            <option value="finished" selected=move || form.status.get() == TaskStatus::Finished>
                                "Finished"
                            </option>
                        </select>
                    </div>
                </div>
                <div class="card-actions justify-end mt-2">
                    <button type="submit" class="btn btn-primary gap-2">
                        <Plus attr:class="h-4 w-4" /> "Add Task"
                    </button>
                </div>
            </div>
        </form>
    }
}
