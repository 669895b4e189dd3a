//! 登录页面

use crate::api::{ApiError, TaskApi};
use crate::components::icons::ClipboardCheck;
use crate::session::{establish_session, use_session};
use crate::toast::use_toasts;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use taskdeck_shared::Credentials;

/// 将登录失败映射为用户可读的提示文案
///
/// 服务端下发的文案原样透出，网络层失败给出统一话术
fn login_error_message(e: &ApiError) -> String {
    if e.is_network() {
        return "An error occurred. Please try again.".to_string();
    }
    e.server_message()
        .map(str::to_string)
        .unwrap_or_else(|| "Login failed".to_string())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get() {
            return;
        }
        set_is_submitting.set(true);

        let credentials = Credentials {
            email: email.get(),
            password: password.get(),
        };

        spawn_local(async move {
            match TaskApi::login(&credentials).await {
                Ok(()) => {
                    toasts.success("Login successful!");
                    // 翻转认证信号，路由服务随即自动跳到面板
                    establish_session(&session);
                }
                Err(e) => {
                    toasts.error(login_error_message(&e));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ClipboardCheck attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Welcome to To-do app"</h1>
                        <p class="text-base-content/70">"Sign in to continue"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign in".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm mt-2">
                            "Don't have an account? "
                            <a class="link link-primary" on:click=move |_| router.navigate("/signup")>
                                "Sign up"
                            </a>
                        </p>
                    </form>
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

    #[test]
    fn test_server_message_is_shown_verbatim() {
        let e = ApiError::Status {
            code: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(login_error_message(&e), "Invalid credentials");
    }

    #[test]
    fn test_status_without_body_falls_back() {
        let e = ApiError::Status {
            code: 500,
            message: None,
        };
        assert_eq!(login_error_message(&e), "Login failed");
    }

    #[test]
    fn test_network_failure_uses_generic_text() {
        let e = ApiError::Network("connection refused".to_string());
        assert_eq!(login_error_message(&e), "An error occurred. Please try again.");
    }
}
