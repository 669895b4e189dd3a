//! 注册页面

use crate::api::{ApiError, TaskApi};
use crate::components::icons::UserPlus;
use crate::toast::use_toasts;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use taskdeck_shared::Credentials;

/// 将注册失败映射为用户可读的提示文案
fn signup_error_message(e: &ApiError) -> String {
    if e.is_network() {
        return "An error occurred. Please try again.".to_string();
    }
    e.server_message()
        .map(str::to_string)
        .unwrap_or_else(|| "Signup failed".to_string())
}

#[component]
pub fn SignupPage() -> impl IntoView {
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
            match TaskApi::register(&credentials).await {
                Ok(()) => {
                    toasts.success("Signup successful! You can now log in.");
                    // 注册不下发会话，引导用户走一次登录
                    router.navigate("/login");
                }
                Err(e) => {
                    toasts.error(signup_error_message(&e));
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
                            <UserPlus attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Sign up for To-do App"</h1>
                        <p class="text-base-content/70">"Create an account to start tracking tasks"</p>
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
                                    view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                                } else {
                                    "Sign up".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm mt-2">
                            "Already have an account? "
                            <a class="link link-primary" on:click=move |_| router.navigate("/login")>
                                "Sign in"
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
