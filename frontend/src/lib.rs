//! TaskDeck 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `session`: 会话状态管理
//! - `toast`: 全局提示栈
//! - `components`: UI 组件层
//!
//! 任务领域模型与列表状态机位于 `taskdeck-shared`，
//! 不依赖浏览器环境，可在原生目标上直接测试。

mod api;
mod session;
mod toast;
mod components {
    pub mod dashboard;
    mod icons;
    pub mod login;
    mod navbar;
    pub mod signup;
    mod stat_card;
    mod task_form;
    pub mod tasks;
}

use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::signup::SignupPage;
use crate::components::tasks::TasksPage;
use crate::session::{SessionContext, init_session};
use crate::toast::{ToastContext, ToastStack};

use leptos::prelude::*;

// 浏览器原生 API 的封装模块
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Tasks => view! { <TasksPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话与提示上下文
    let session_ctx = SessionContext::new();
    provide_context(session_ctx);

    let toast_ctx = ToastContext::new();
    provide_context(toast_ctx);

    // 2. 从 LocalStorage 恢复会话标记
    init_session(&session_ctx);

    // 3. 获取认证状态信号，用于注入路由服务（解耦）
    let is_authenticated = session_ctx.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <ToastStack />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
