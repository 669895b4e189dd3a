use serde::{Deserialize, Serialize};

pub mod date;
pub mod tasklist;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 任务优先级下限（含）
pub const PRIORITY_MIN: u8 = 1;
/// 任务优先级上限（含）
pub const PRIORITY_MAX: u8 = 5;
/// 新建任务表单的默认优先级
pub const DEFAULT_PRIORITY: u8 = 3;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 任务完成状态
///
/// 线上表示为小写字符串（"pending" / "finished"），
/// 与后端 API 的序列化格式保持一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Finished,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Finished => "finished",
        }
    }

    /// 从表单 select 的取值解析状态，未知值按 Pending 处理
    pub fn parse(s: &str) -> Self {
        match s {
            "finished" => TaskStatus::Finished,
            _ => TaskStatus::Pending,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 服务端任务记录
///
/// 权威副本存放在远端服务器；客户端持有的只是可能过期的视图缓存。
/// 字段名与 API 的 JSON 形状对齐：camelCase，id 字段为 `_id`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// 开始时间，datetime-local / ISO 8601 字符串，按原样透传
    pub start_time: String,
    /// 结束时间，预期 >= start_time（客户端不强制）
    pub end_time: String,
    pub priority: u8,
    pub status: TaskStatus,
}

impl Task {
    /// 任务耗时（小时），按存储的起止时间做墙钟差值
    ///
    /// 任一时间无法解析时返回 None。
    pub fn duration_hours(&self) -> Option<f64> {
        date::duration_hours(&self.start_time, &self.end_time)
    }
}

/// 新建任务的请求体（尚无服务端 id）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub priority: u8,
    pub status: TaskStatus,
}

impl Default for TaskDraft {
    /// 与新建表单的初始值一致
    fn default() -> Self {
        Self {
            title: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            priority: DEFAULT_PRIORITY,
            status: TaskStatus::Pending,
        }
    }
}

impl TaskDraft {
    /// 本地校验，任何失败都不应发起网络请求
    ///
    /// 校验顺序固定：标题 -> 优先级 -> 起止时间。
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.priority < PRIORITY_MIN || self.priority > PRIORITY_MAX {
            return Err(ValidationError::PriorityOutOfRange);
        }
        if self.start_time.is_empty() || self.end_time.is_empty() {
            return Err(ValidationError::MissingSchedule);
        }
        Ok(())
    }
}

/// 本地校验失败
///
/// Display 文案即呈现给用户的提示内容。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    PriorityOutOfRange,
    MissingSchedule,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ValidationError::EmptyTitle => "Task title cannot be empty",
            ValidationError::PriorityOutOfRange => "Priority must be a number between 1 and 5",
            ValidationError::MissingSchedule => "Please set both start and end times",
        };
        write!(f, "{}", msg)
    }
}

impl std::error::Error for ValidationError {}

/// 登录 / 注册共用的凭据请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// 服务端预聚合的统计快照
///
/// 形状完全信任服务端响应：计数为整数，完成/待办占比为
/// 预格式化的百分比字符串，时间字段单位为小时。
/// 整体 `#[serde(default)]`，缺字段时回退到 Default 的展示值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_tasks: u32,
    pub tasks_completed: String,
    pub tasks_pending: String,
    pub average_time: f64,
    pub pending_tasks: u32,
    pub total_time_lapsed: f64,
    pub time_to_finish: f64,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            total_tasks: 0,
            tasks_completed: "0%".to_string(),
            tasks_pending: "0%".to_string(),
            average_time: 0.0,
            pending_tasks: 0,
            total_time_lapsed: 0.0,
            time_to_finish: 0.0,
        }
    }
}

// =========================================================
// 单元测试：线上形状与本地校验
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(title: &str, start: &str, end: &str, priority: u8) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            priority,
            status: TaskStatus::Pending,
        }
    }

    #[test]
    fn test_draft_serializes_to_api_body() {
        let d = draft("Write report", "2024-01-01T09:00", "2024-01-01T11:00", 3);
        let value = serde_json::to_value(&d).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Write report",
                "startTime": "2024-01-01T09:00",
                "endTime": "2024-01-01T11:00",
                "priority": 3,
                "status": "pending",
            })
        );
    }

    #[test]
    fn test_task_deserializes_from_api_shape() {
        let task: Task = serde_json::from_value(json!({
            "_id": "65a1b2c3",
            "title": "Write report",
            "startTime": "2024-01-01T09:00",
            "endTime": "2024-01-01T11:00",
            "priority": 3,
            "status": "finished",
        }))
        .unwrap();
        assert_eq!(task.id, "65a1b2c3");
        assert_eq!(task.status, TaskStatus::Finished);
        // 序列化需要原样还原 `_id` 字段（PUT 会整体回传）
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["_id"], "65a1b2c3");
        assert_eq!(value["status"], "finished");
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let d = draft("   ", "2024-01-01T09:00", "2024-01-01T11:00", 3);
        assert_eq!(d.validate(), Err(ValidationError::EmptyTitle));
        assert_eq!(
            ValidationError::EmptyTitle.to_string(),
            "Task title cannot be empty"
        );
    }

    #[test]
    fn test_validate_rejects_priority_out_of_range() {
        for p in [0u8, 6, 200] {
            let d = draft("ok", "2024-01-01T09:00", "2024-01-01T11:00", p);
            assert_eq!(d.validate(), Err(ValidationError::PriorityOutOfRange));
        }
        assert_eq!(
            ValidationError::PriorityOutOfRange.to_string(),
            "Priority must be a number between 1 and 5"
        );
    }

    #[test]
    fn test_validate_rejects_missing_schedule() {
        let d = draft("ok", "", "2024-01-01T11:00", 3);
        assert_eq!(d.validate(), Err(ValidationError::MissingSchedule));
        let d = draft("ok", "2024-01-01T09:00", "", 3);
        assert_eq!(d.validate(), Err(ValidationError::MissingSchedule));
        assert_eq!(
            ValidationError::MissingSchedule.to_string(),
            "Please set both start and end times"
        );
    }

    #[test]
    fn test_validate_accepts_priority_bounds() {
        for p in [PRIORITY_MIN, PRIORITY_MAX] {
            let d = draft("ok", "2024-01-01T09:00", "2024-01-01T11:00", p);
            assert_eq!(d.validate(), Ok(()));
        }
    }

    #[test]
    fn test_stats_deserialize_with_missing_fields() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "totalTasks": 7,
            "tasksCompleted": "42%",
        }))
        .unwrap();
        assert_eq!(stats.total_tasks, 7);
        assert_eq!(stats.tasks_completed, "42%");
        // 缺失字段回退到 Default 的展示值
        assert_eq!(stats.tasks_pending, "0%");
        assert_eq!(stats.pending_tasks, 0);
        assert_eq!(stats.average_time, 0.0);
    }
}
