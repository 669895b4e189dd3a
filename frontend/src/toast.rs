//! 全局提示模块
//!
//! 右上角的浮动提示栈。任何组件都可以通过 Context 推送提示，
//! 每条提示展示固定时长后自动消失。

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use taskdeck_shared::tasklist::{Notice, NoticeLevel};

/// 每条提示的展示时长（毫秒）
const TOAST_DISMISS_MS: u32 = 3_000;

/// 一条进入展示队列的提示
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// 队列内唯一序号，同时充当列表渲染的 key
    pub id: u32,
    pub notice: Notice,
}

/// 提示上下文
///
/// 包含提示队列信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl ToastContext {
    /// 创建新的提示上下文
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// 推送一条提示，到期后自动移除
    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));

        self.toasts.update(|list| list.push(Toast { id, notice }));

        let toasts = self.toasts;
        Timeout::new(TOAST_DISMISS_MS, move || {
            toasts.update(|list| list.retain(|t| t.id != id));
        })
        .forget();
    }

    /// 推送一条成功提示
    pub fn success(&self, message: impl Into<String>) {
        self.push(Notice::success(message));
    }

    /// 推送一条错误提示
    pub fn error(&self, message: impl Into<String>) {
        self.push(Notice::error(message));
    }

    /// 推送一条进行中提示（如接口加载中）
    pub fn info(&self, message: impl Into<String>) {
        self.push(Notice::info(message));
    }
}

/// 提示级别对应的 alert 外观
fn alert_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "alert alert-success shadow-lg",
        NoticeLevel::Error => "alert alert-error shadow-lg",
        NoticeLevel::Info => "alert alert-info shadow-lg",
    }
}

/// 从 Context 获取提示上下文
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

/// 提示栈组件，挂在应用根部
#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_toasts();
    let toasts = ctx.toasts;

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || toasts.get()
                key=|t| t.id
                children=|toast| {
                    let class = alert_class(toast.notice.level);
                    view! {
                        <div class=class>
                            <span>{toast.notice.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

// =========================================================
// 测试模块
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_class_distinguishes_levels() {
        assert_eq!(
            alert_class(NoticeLevel::Success),
            "alert alert-success shadow-lg"
        );
        assert_eq!(
            alert_class(NoticeLevel::Error),
            "alert alert-error shadow-lg"
        );
        assert_eq!(alert_class(NoticeLevel::Info), "alert alert-info shadow-lg");
    }

    #[test]
    fn test_loading_notice_renders_as_info_alert() {
        let notice = Notice::info("Loading stats...");
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(alert_class(notice.level), "alert alert-info shadow-lg");
    }
}
