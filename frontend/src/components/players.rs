use courtside::forms::PlayerForm;
use courtside::views::players::{self, EMPTY_MESSAGE};
use courtside::views::{ListState, ViewOutcome};
use courtside_shared::Player;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{follow_redirect, use_auth};
use crate::components::common::{Alert, EmptyState, FormField, Loading};
use crate::web::router::use_router;

/// 浏览器确认框，取消或不可用时返回 false
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn PlayersPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let state = RwSignal::new(ListState::<Player>::new());
    let form = RwSignal::new(PlayerForm::default());
    let (show_form, set_show_form) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);

    let reload = move || {
        let api = auth.api();
        state.update(ListState::begin);
        spawn_local(async move {
            let mut next = state.get_untracked();
            let redirect = players::refresh(&api, &mut next).await;
            state.set(next);
            if let Some(route) = redirect {
                follow_redirect(auth, router, route);
            }
        });
    };

    Effect::new(move |_| reload());

    // 提交结果统一落到列表状态上：成功提示并重新拉取，失败内联展示
    let finish = move |outcome: ViewOutcome<String>| match outcome {
        ViewOutcome::Ready(message) => {
            state.update(|s| s.notice = Some(message));
            reload();
        }
        ViewOutcome::Redirect(route) => follow_redirect(auth, router, route),
        ViewOutcome::Failed(message) => state.update(|s| s.error = Some(message)),
    };

    let on_create = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        state.update(|s| s.error = None);

        let api = auth.api();
        let current = form.get_untracked();
        spawn_local(async move {
            let outcome = players::create(&api, &current).await;
            if outcome.is_ready() {
                form.set(PlayerForm::default());
                set_show_form.set(false);
            }
            finish(outcome);
            set_is_submitting.set(false);
        });
    };

    let on_delete = move |player: Player| {
        if !confirm(&players::delete_prompt(&player)) {
            return;
        }
        let api = auth.api();
        spawn_local(async move {
            finish(players::delete(&api, player.id).await);
        });
    };

    // 3秒后清除通知
    Effect::new(move |_| {
        if state.with(|s| s.notice.is_some()) {
            set_timeout(
                move || state.update(|s| s.notice = None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Players"</h1>
                <button class="btn btn-primary btn-sm" on:click=move |_| set_show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Cancel" } else { "Add Player" }}
                </button>
            </div>

            <Alert message=Signal::derive(move || state.with(|s| s.notice.clone())) success=true />
            <Alert message=Signal::derive(move || state.with(|s| s.error.clone())) />

            <Show when=move || show_form.get()>
                <form class="card bg-base-100 shadow-md" on:submit=on_create>
                    <div class="card-body grid grid-cols-1 md:grid-cols-2 gap-4">
                        <FormField
                            id="player_name"
                            label="Name"
                            required=true
                            value=Signal::derive(move || form.with(|f| f.name.clone()))
                            on_input=move |v: String| form.update(|f| f.name = v)
                        />
                        <FormField
                            id="player_email"
                            label="Email"
                            input_type="email"
                            required=true
                            value=Signal::derive(move || form.with(|f| f.email.clone()))
                            on_input=move |v: String| form.update(|f| f.email = v)
                        />
                        <FormField
                            id="player_username"
                            label="Username"
                            required=true
                            value=Signal::derive(move || form.with(|f| f.username.clone()))
                            on_input=move |v: String| form.update(|f| f.username = v)
                        />
                        <FormField
                            id="player_password"
                            label="Password"
                            input_type="password"
                            required=true
                            value=Signal::derive(move || form.with(|f| f.password.clone()))
                            on_input=move |v: String| form.update(|f| f.password = v)
                        />
                        <FormField
                            id="player_ranking"
                            label="Ranking"
                            input_type="number"
                            placeholder="0"
                            value=Signal::derive(move || form.with(|f| f.ranking.clone()))
                            on_input=move |v: String| form.update(|f| f.ranking = v)
                        />
                        <div class="flex items-end">
                            <button class="btn btn-primary w-full" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() { "Creating..." } else { "Create Player" }}
                            </button>
                        </div>
                    </div>
                </form>
            </Show>

            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <Loading label="Loading players..." /> }>
                <Show when=move || !state.with(ListState::show_empty_state) fallback=|| view! { <EmptyState message=EMPTY_MESSAGE /> }>
                    <div class="overflow-x-auto">
                        <table class="table table-zebra bg-base-100">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Ranking"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || state.with(|s| s.items.clone())
                                    key=|player| player.id
                                    children=move |player| {
                                        let target = player.clone();
                                        view! {
                                            <tr>
                                                <td>{player.name}</td>
                                                <td>{player.email}</td>
                                                <td>{player.ranking}</td>
                                                <td class="text-right">
                                                    <button
                                                        class="btn btn-ghost btn-xs text-error"
                                                        on:click=move |_| on_delete(target.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
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
