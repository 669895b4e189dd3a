//! 会话模块
//!
//! 管理登录会话状态，与路由系统解耦：
//! 路由服务只消费注入的认证信号，不反向依赖本模块。
//! 会话凭证本体在 HttpOnly Cookie 里，客户端只持久化一个布尔标记。

use crate::api::TaskApi;
use crate::web::LocalStorage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

/// 会话标记的存储键，值为 "true" 时视为已登录
const STORAGE_SESSION_KEY: &str = "taskdeck_session";

/// 会话状态
#[derive(Clone, Default)]
pub struct SessionState {
    /// 是否已登录
    pub is_authenticated: bool,
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 会话状态（只读）
    pub state: ReadSignal<SessionState>,
    /// 设置会话状态（写入）
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    /// 创建新的会话上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 初始化会话状态
///
/// 从 LocalStorage 恢复登录标记。标记只说明「曾经登录过」：
/// Cookie 若已过期，后续请求会以 401 失败，由页面引导重新登录。
pub fn init_session(ctx: &SessionContext) {
    let restored = LocalStorage::get(STORAGE_SESSION_KEY).as_deref() == Some("true");
    if restored {
        ctx.set_state.update(|state| state.is_authenticated = true);
    }
}

/// 登录成功后建立本地会话
///
/// Cookie 已由服务端下发，这里只落地标记并翻转内存状态。
/// 导航由路由服务监听认证信号自动完成。
pub fn establish_session(ctx: &SessionContext) {
    LocalStorage::set(STORAGE_SESSION_KEY, "true");
    ctx.set_state.update(|state| state.is_authenticated = true);
}

/// 登出并清除一切本地痕迹
///
/// 本地会话立即结束；服务端登出是尽力而为，失败只记日志。
/// 不做手动跳转，路由服务会监听认证状态变化并自动重定向。
pub fn sign_out(ctx: &SessionContext) {
    expire_session_cookie();
    LocalStorage::clear_all();
    ctx.set_state.update(|state| state.is_authenticated = false);

    spawn_local(async {
        if let Err(e) = TaskApi::logout().await {
            web_sys::console::log_1(&format!("[Session] Server logout failed: {e}").into());
        }
    });
}

/// 尽力让会话 Cookie 立即过期
///
/// Cookie 若为 HttpOnly 则此操作无效，真正的作废由服务端登出完成
fn expire_session_cookie() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(doc) = document.dyn_ref::<web_sys::HtmlDocument>() {
        let _ = doc.set_cookie("token=; Max-Age=0; path=/;");
    }
}
