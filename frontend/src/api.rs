//! 远程任务服务的 HTTP 客户端
//!
//! 会话凭证放在 HttpOnly Cookie 里，所有请求统一携带 credentials，
//! 客户端自身从不读写 Cookie 内容。

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use taskdeck_shared::{Credentials, DashboardStats, Task, TaskDraft};
use web_sys::RequestCredentials;

/// 远程服务根地址，所有接口都挂在这个前缀下
pub const BASE_URL: &str = "https://task-backend-4hye.onrender.com/api/v1";

// =========================================================
// 错误类型
// =========================================================

/// 接口调用错误
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 服务端返回了非 2xx 状态码
    Status { code: u16, message: Option<String> },
    /// 请求未能到达服务端（网络中断、CORS 拒绝等）
    Network(String),
    /// 响应体无法按预期形状解析
    Decode(String),
}

impl ApiError {
    /// 服务端随错误响应下发的文案（若有）
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// 是否是请求未到达服务端的网络层错误
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status { code, message } => match message {
                Some(msg) => write!(f, "{msg}"),
                None => write!(f, "request failed with status {code}"),
            },
            Self::Network(e) => write!(f, "network error: {e}"),
            Self::Decode(e) => write!(f, "invalid response: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

/// 服务端错误响应的通用形状
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// 从失败响应中提取状态码与展示文案
///
/// 响应体解析失败时只保留状态码，不视为错误
async fn status_error(res: Response) -> ApiError {
    let code = res.status();
    let message = res.json::<ErrorBody>().await.ok().map(|body| body.message);
    ApiError::Status { code, message }
}

// =========================================================
// API 客户端
// =========================================================

/// 任务服务 API 客户端
///
/// 无状态：会话由浏览器 Cookie 承载，因此全部是关联函数。
pub struct TaskApi;

impl TaskApi {
    fn url(path: &str) -> String {
        format!("{BASE_URL}{path}")
    }

    /// 登录，成功时服务端通过 Set-Cookie 下发会话
    pub async fn login(credentials: &Credentials) -> Result<(), ApiError> {
        let res = Request::post(&Self::url("/login"))
            .credentials(RequestCredentials::Include)
            .json(credentials)?
            .send()
            .await?;

        if !res.ok() {
            return Err(status_error(res).await);
        }
        Ok(())
    }

    /// 注册新账号，成功后仍需走一次登录
    pub async fn register(credentials: &Credentials) -> Result<(), ApiError> {
        let res = Request::post(&Self::url("/users/register"))
            .credentials(RequestCredentials::Include)
            .json(credentials)?
            .send()
            .await?;

        if !res.ok() {
            return Err(status_error(res).await);
        }
        Ok(())
    }

    /// 登出，由服务端作废会话 Cookie
    pub async fn logout() -> Result<(), ApiError> {
        let res = Request::get(&Self::url("/users/logout"))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;

        if !res.ok() {
            return Err(status_error(res).await);
        }
        Ok(())
    }

    /// 拉取当前用户的全部任务
    pub async fn fetch_tasks() -> Result<Vec<Task>, ApiError> {
        let res = Request::get(&Self::url("/tasks"))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;

        if !res.ok() {
            return Err(status_error(res).await);
        }
        Ok(res.json::<Vec<Task>>().await?)
    }

    /// 创建任务，返回带服务端 id 的完整记录
    pub async fn create_task(draft: &TaskDraft) -> Result<Task, ApiError> {
        let res = Request::post(&Self::url("/tasks"))
            .credentials(RequestCredentials::Include)
            .json(draft)?
            .send()
            .await?;

        if !res.ok() {
            return Err(status_error(res).await);
        }
        Ok(res.json::<Task>().await?)
    }

    /// 整条替换指定任务，目标 id 走查询参数
    pub async fn update_task(task: &Task) -> Result<Task, ApiError> {
        let res = Request::put(&Self::url("/tasks"))
            .query([("id", task.id.as_str())])
            .credentials(RequestCredentials::Include)
            .json(task)?
            .send()
            .await?;

        if !res.ok() {
            return Err(status_error(res).await);
        }
        Ok(res.json::<Task>().await?)
    }

    /// 删除指定任务
    pub async fn delete_task(id: &str) -> Result<(), ApiError> {
        let res = Request::delete(&Self::url("/tasks"))
            .query([("id", id)])
            .credentials(RequestCredentials::Include)
            .send()
            .await?;

        if !res.ok() {
            return Err(status_error(res).await);
        }
        Ok(())
    }

    /// 拉取服务端预聚合的统计快照
    pub async fn fetch_dashboard() -> Result<DashboardStats, ApiError> {
        let res = Request::get(&Self::url("/tasks/dashboard"))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;

        if !res.ok() {
            return Err(status_error(res).await);
        }
        Ok(res.json::<DashboardStats>().await?)
    }
}

// =========================================================
// 测试模块
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        assert_eq!(TaskApi::url("/tasks"), format!("{BASE_URL}/tasks"));
        assert!(TaskApi::url("/tasks/dashboard").ends_with("/api/v1/tasks/dashboard"));
    }

    #[test]
    fn test_status_error_display_prefers_server_message() {
        let err = ApiError::Status {
            code: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.server_message(), Some("Invalid credentials"));

        let bare = ApiError::Status {
            code: 500,
            message: None,
        };
        assert_eq!(bare.to_string(), "request failed with status 500");
    }

    #[test]
    fn test_network_error_is_flagged() {
        let err = ApiError::Network("fetch aborted".to_string());
        assert!(err.is_network());
        assert_eq!(err.server_message(), None);
    }
}
