//! 任务列表状态机模块
//!
//! 将任务列表页的全部行为收敛为一个纯状态机：
//! `(状态, 命令) -> (新状态, 副作用列表)`。
//! 状态机本身不触碰网络与界面，只描述"接下来该做什么"，
//! 由调用方负责发请求、弹提示、清空表单。
//! 请求完成后再以 [`TaskOutcome`] 回注结果，驱动第二次迁移。

use crate::{Task, TaskDraft, TaskStatus};

// =========================================================
// 提示消息
// =========================================================

/// 提示消息级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// 一条待展示的提示消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    /// 成功提示
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// 错误提示
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// 一般提示
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

// =========================================================
// 命令与请求结果
// =========================================================

/// 页面或用户发起的命令
#[derive(Debug, Clone, PartialEq)]
pub enum TaskCommand {
    /// 加载任务列表
    Load,
    /// 以表单内容创建任务
    Create(TaskDraft),
    /// 修改指定任务的状态
    UpdateStatus { id: String, status: TaskStatus },
    /// 删除指定任务
    Delete { id: String },
    /// 进入指定任务的编辑态
    BeginEdit { id: String },
    /// 放弃编辑
    CancelEdit,
}

/// 一次接口调用的完成结果
///
/// 错误侧只携带描述文本，供调用方记日志；
/// 展示给用户的文案由状态机统一决定。
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutcome {
    Loaded(Result<Vec<Task>, String>),
    Created(Result<Task, String>),
    Updated(Result<Task, String>),
    Deleted { id: String, result: Result<(), String> },
}

// =========================================================
// 副作用
// =========================================================

/// 状态机要求调用方发起的接口调用
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    FetchTasks,
    CreateTask(TaskDraft),
    UpdateTask(Task),
    DeleteTask { id: String },
}

/// 状态迁移产生的副作用，按列表顺序执行
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// 发起一次接口调用
    Request(ApiCall),
    /// 展示一条提示
    Notify(Notice),
    /// 清空新建表单
    ClearDraft,
}

// =========================================================
// 状态机
// =========================================================

/// 任务列表页的完整状态
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskListState {
    /// 当前已知的任务集合（服务端视图的本地缓存）
    pub tasks: Vec<Task>,
    /// 首次加载是否仍在进行
    pub loading: bool,
    /// 处于编辑态的任务 id
    pub editing: Option<String>,
}

impl TaskListState {
    /// 初始状态：空列表、未在加载、无编辑目标
    pub fn new() -> Self {
        Self::default()
    }

    /// 处理一条命令，返回新状态与待执行的副作用
    pub fn apply(mut self, command: TaskCommand) -> (Self, Vec<Effect>) {
        match command {
            TaskCommand::Load => {
                self.loading = true;
                (self, vec![Effect::Request(ApiCall::FetchTasks)])
            }
            // 校验不过则只弹提示，绝不发请求
            TaskCommand::Create(draft) => match draft.validate() {
                Ok(()) => (self, vec![Effect::Request(ApiCall::CreateTask(draft))]),
                Err(e) => (self, vec![Effect::Notify(Notice::error(e.to_string()))]),
            },
            TaskCommand::UpdateStatus { id, status } => {
                // 目标任务可能已被并发删除，此时不产生任何副作用
                let Some(task) = self.tasks.iter().find(|t| t.id == id) else {
                    return (self, Vec::new());
                };
                let mut updated = task.clone();
                updated.status = status;
                (self, vec![Effect::Request(ApiCall::UpdateTask(updated))])
            }
            TaskCommand::Delete { id } => {
                (self, vec![Effect::Request(ApiCall::DeleteTask { id })])
            }
            TaskCommand::BeginEdit { id } => {
                self.editing = Some(id);
                (self, Vec::new())
            }
            TaskCommand::CancelEdit => {
                self.editing = None;
                (self, Vec::new())
            }
        }
    }

    /// 处理一次请求结果，返回新状态与待执行的副作用
    pub fn resolve(mut self, outcome: TaskOutcome) -> (Self, Vec<Effect>) {
        match outcome {
            TaskOutcome::Loaded(Ok(tasks)) => {
                self.tasks = tasks;
                self.loading = false;
                (self, Vec::new())
            }
            TaskOutcome::Loaded(Err(_)) => {
                // 加载失败保留旧列表，避免界面闪空
                self.loading = false;
                (
                    self,
                    vec![Effect::Notify(Notice::error("Error fetching tasks"))],
                )
            }
            TaskOutcome::Created(Ok(task)) => {
                // 先把服务端返回的记录入列，再静默重拉一次换入权威数据。
                // 重拉不置 loading，列表在刷新期间保持可见。
                self.tasks.push(task);
                (
                    self,
                    vec![
                        Effect::ClearDraft,
                        Effect::Notify(Notice::success("Task added successfully")),
                        Effect::Request(ApiCall::FetchTasks),
                    ],
                )
            }
            TaskOutcome::Created(Err(_)) => {
                (self, vec![Effect::Notify(Notice::error("Error adding task"))])
            }
            TaskOutcome::Updated(Ok(task)) => {
                if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
                    *slot = task;
                }
                self.editing = None;
                (
                    self,
                    vec![Effect::Notify(Notice::success(
                        "Task status updated successfully",
                    ))],
                )
            }
            TaskOutcome::Updated(Err(_)) => {
                // 保留编辑态，用户可直接重试
                (
                    self,
                    vec![Effect::Notify(Notice::error("Error updating task status"))],
                )
            }
            TaskOutcome::Deleted {
                id,
                result: Ok(()),
            } => {
                self.tasks.retain(|t| t.id != id);
                (
                    self,
                    vec![
                        Effect::Notify(Notice::success("Task deleted successfully")),
                        Effect::Request(ApiCall::FetchTasks),
                    ],
                )
            }
            TaskOutcome::Deleted {
                result: Err(_), ..
            } => {
                (
                    self,
                    vec![Effect::Notify(Notice::error("Error deleting task"))],
                )
            }
        }
    }
}

// =========================================================
// 测试模块
// =========================================================

#[cfg(test)]
mod tests;
