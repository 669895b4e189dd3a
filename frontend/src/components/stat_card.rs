//! 统计数据卡片

use leptos::prelude::*;

/// 单项统计卡片
///
/// 值是已经格式化好的展示字符串，本组件不做任何计算。
#[component]
pub fn StatCard(
    /// 指标名称
    #[prop(into)] label: String,
    /// 指标值
    #[prop(into)] value: Signal<String>,
    /// daisyUI 颜色类，如 "text-primary"
    #[prop(into, optional)] accent: String,
) -> impl IntoView {
    let value_class = if accent.is_empty() {
        "stat-value".to_string()
    } else {
        format!("stat-value {accent}")
    };

    view! {
        <div class="stat">
            <div class="stat-title">{label}</div>
            <div class=value_class>{move || value.get()}</div>
        </div>
    }
}
