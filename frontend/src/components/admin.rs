use courtside::views::admin::{self, AdminData, EMPTY_MESSAGE, UserRow, UserStats};
use courtside::views::ViewOutcome;
use courtside_shared::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlSelectElement;

use crate::auth::{follow_redirect, use_auth};
use crate::components::common::{Alert, EmptyState, Loading};
use crate::web::router::use_router;

#[component]
fn StatCard(title: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat bg-base-100 rounded-box shadow">
            <div class="stat-title">{title}</div>
            <div class="stat-value">{move || value.get()}</div>
        </div>
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let data = RwSignal::new(Option::<AdminData>::None);
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let api = auth.api();
        spawn_local(async move {
            match admin::load(&api).await {
                ViewOutcome::Ready(loaded) => {
                    data.set(Some(loaded));
                    // 资料已写回缓存，同步导航栏
                    auth.refresh();
                }
                ViewOutcome::Redirect(route) => follow_redirect(auth, router, route),
                ViewOutcome::Failed(message) => set_error_msg.set(Some(message)),
            }
            set_loading.set(false);
        });
    });

    // 失败时把下拉框恢复为原角色
    let on_role_change = move |user_id: u64, role: Role, select: HtmlSelectElement| {
        let Some(AdminData { current_user, mut users }) = data.get_untracked() else {
            return;
        };
        let previous = users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.role)
            .unwrap_or_default();
        set_error_msg.set(None);

        let api = auth.api();
        spawn_local(async move {
            match admin::change_role(&api, &current_user, &mut users, user_id, role).await {
                ViewOutcome::Ready(message) => {
                    data.update(|d| {
                        if let Some(d) = d {
                            d.users = users;
                        }
                    });
                    set_notice.set(Some(message));
                }
                ViewOutcome::Redirect(route) => follow_redirect(auth, router, route),
                ViewOutcome::Failed(message) => {
                    select.set_value(previous.as_str());
                    set_error_msg.set(Some(message));
                }
            }
        });
    };

    // 3秒后清除通知
    Effect::new(move |_| {
        if notice.get().is_some() {
            set_timeout(
                move || set_notice.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    let stats = Memo::new(move |_| {
        data.with(|d| d.as_ref().map(|d| UserStats::from_users(&d.users)).unwrap_or_default())
    });
    let rows = move || {
        data.with(|d| {
            d.as_ref()
                .map(|d| {
                    d.users
                        .iter()
                        .map(|u| UserRow::new(u, &d.current_user))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };
    let role_of = move |user_id: u64| {
        data.with(|d| {
            d.as_ref()
                .and_then(|d| d.users.iter().find(|u| u.id == user_id))
                .map(|u| u.role.as_str())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Admin Panel"</h1>

            <Alert message=notice success=true />
            <Alert message=error_msg />

            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Loading users..." /> }>
                <div class="stats stats-vertical md:stats-horizontal w-full gap-4">
                    <StatCard title="Total Users" value=Signal::derive(move || stats.get().total) />
                    <StatCard title="Admins" value=Signal::derive(move || stats.get().admins) />
                    <StatCard title="Players" value=Signal::derive(move || stats.get().players) />
                    <StatCard title="Active" value=Signal::derive(move || stats.get().active) />
                </div>

                <Show when=move || { stats.get().total > 0 } fallback=|| view! { <EmptyState message=EMPTY_MESSAGE /> }>
                    <div class="overflow-x-auto">
                        <table class="table table-zebra bg-base-100">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Username"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                    <th>"Status"</th>
                                    <th>"Ranking"</th>
                                    <th>"Joined"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=rows
                                    key=|row| row.id
                                    children=move |row| {
                                        let id = row.id;
                                        view! {
                                            <tr>
                                                <td>{row.full_name}</td>
                                                <td>{row.username}</td>
                                                <td>{row.email}</td>
                                                <td>
                                                    <select
                                                        class="select select-bordered select-sm"
                                                        disabled=row.role_locked
                                                        prop:value=move || role_of(id)
                                                        on:change=move |ev| {
                                                            let select = event_target::<HtmlSelectElement>(&ev);
                                                            if let Some(role) = Role::parse(&select.value()) {
                                                                on_role_change(id, role, select);
                                                            }
                                                        }
                                                    >
                                                        <option value="player">{Role::Player.label()}</option>
                                                        <option value="admin">{Role::Admin.label()}</option>
                                                    </select>
                                                </td>
                                                <td>{row.status}</td>
                                                <td>{row.ranking}</td>
                                                <td>{row.created}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
