//! 顶部导航栏
//!
//! 受保护页面共用：品牌、页面切换与登出入口。

use crate::components::icons::{ClipboardList, LogOut};
use crate::session::{sign_out, use_session};
use crate::toast::use_toasts;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let router = use_router();

    let on_sign_out = move |_| {
        toasts.success("Signed out successfully");
        // 认证信号翻转后路由服务会自动跳回登录页
        sign_out(&session);
    };

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <ClipboardList attr:class="text-primary h-6 w-6" />
                <a class="btn btn-ghost text-xl">"Task Manager"</a>
            </div>
            <div class="flex-none gap-2">
                <button class="btn btn-ghost" on:click=move |_| router.navigate("/dashboard")>
                    "Dashboard"
                </button>
                <button class="btn btn-ghost" on:click=move |_| router.navigate("/tasks")>
                    "Tasks"
                </button>
                <button on:click=on_sign_out class="btn btn-outline btn-error gap-2">
                    <LogOut attr:class="h-4 w-4" /> "Sign Out"
                </button>
            </div>
        </div>
    }
}
