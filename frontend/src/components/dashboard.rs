//! 统计面板页面
//!
//! 所有统计指标由服务端预聚合，客户端只做展示。
//! 完成任务列表独立拉取，与统计互不阻塞。

use crate::api::TaskApi;
use crate::components::navbar::Navbar;
use crate::components::stat_card::StatCard;
use crate::toast::use_toasts;
use leptos::prelude::*;
use leptos::task::spawn_local;
use taskdeck_shared::{DashboardStats, Task, TaskStatus, date};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let toasts = use_toasts();

    let (stats, set_stats) = signal(DashboardStats::default());
    let (completed, set_completed) = signal(Vec::<Task>::new());
    let (loading_completed, set_loading_completed) = signal(true);

    // 两路独立加载：统计与完成列表各自完成，互不等待。
    // 每路发起时先报一条加载提示，统计请求返回前展示 Default 的零值快照。
    Effect::new(move |_| {
        toasts.info("Loading stats...");
        spawn_local(async move {
            match TaskApi::fetch_dashboard().await {
                Ok(data) => {
                    set_stats.set(data);
                    toasts.success("Stats loaded successfully!");
                }
                Err(e) => {
                    web_sys::console::log_1(
                        &format!("[Dashboard] stats load failed: {e}").into(),
                    );
                    toasts.error("Error loading stats");
                }
            }
        });

        toasts.info("Loading tasks...");
        spawn_local(async move {
            match TaskApi::fetch_tasks().await {
                Ok(mut tasks) => {
                    tasks.retain(|t| t.status == TaskStatus::Finished);
                    set_completed.set(tasks);
                    toasts.success("Tasks loaded successfully!");
                }
                Err(e) => {
                    web_sys::console::log_1(
                        &format!("[Dashboard] tasks load failed: {e}").into(),
                    );
                    toasts.error("Error loading tasks");
                }
            }
            set_loading_completed.set(false);
        });
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Navbar />

                // 总览指标
                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <StatCard
                        label="Total tasks"
                        value=Signal::derive(move || stats.get().total_tasks.to_string())
                        accent="text-primary"
                    />
                    <StatCard
                        label="Tasks completed"
                        value=Signal::derive(move || stats.get().tasks_completed)
                        accent="text-success"
                    />
                    <StatCard
                        label="Tasks pending"
                        value=Signal::derive(move || stats.get().tasks_pending)
                        accent="text-warning"
                    />
                    <StatCard
                        label="Average time per task"
                        value=Signal::derive(move || format!("{} hrs", stats.get().average_time))
                        accent="text-secondary"
                    />
                </div>

                // 待办明细
                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <StatCard
                        label="Pending tasks"
                        value=Signal::derive(move || stats.get().pending_tasks.to_string())
                    />
                    <StatCard
                        label="Total time lapsed"
                        value=Signal::derive(move || format!("{} hrs", stats.get().total_time_lapsed))
                    />
                    <StatCard
                        label="Total time to finish"
                        value=Signal::derive(move || format!("{} hrs", stats.get().time_to_finish))
                    />
                </div>

                // 完成任务列表
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="p-6 pb-2">
                            <h3 class="card-title">"Completed Tasks"</h3>
                            <p class="text-base-content/70 text-sm">
                                "Finished work with the time each task took."
                            </p>
                        </div>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Task"</th>
                                        <th>"Start time"</th>
                                        <th>"End time"</th>
                                        <th>"Priority"</th>
                                        <th>"Time taken"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || {
                                        completed.get().is_empty() && !loading_completed.get()
                                    }>
                                        <tr>
                                            <td colspan="5" class="text-center py-8 text-base-content/50">
                                                "No completed tasks yet"
                                            </td>
                                        </tr>
                                    </Show>
                                    <Show when=move || loading_completed.get()>
                                        <tr>
                                            <td colspan="5" class="text-center py-8 text-base-content/50">
                                                <span class="loading loading-spinner loading-md"></span>
                                                " Loading..."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || completed.get()
                                        key=|t| t.id.clone()
                                        children=|task: Task| {
                                            // 起止时间无法解析时不显示耗时
                                            let time_taken = task
                                                .duration_hours()
                                                .map(|h| format!("{h:.2} hrs"))
                                                .unwrap_or_else(|| "-".to_string());
                                            view! {
                                                <tr>
                                                    <td class="font-medium">{task.title.clone()}</td>
                                                    <td>{date::format_display(&task.start_time)}</td>
                                                    <td>{date::format_display(&task.end_time)}</td>
                                                    <td>
                                                        <div class="badge badge-outline">{task.priority}</div>
                                                    </td>
                                                    <td>{time_taken}</td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
