use courtside::Route;
use courtside::forms::TournamentForm;
use courtside::views::dashboard::TournamentCard;
use courtside::views::tournaments::{self, EMPTY_MESSAGE, TournamentDetail};
use courtside::views::{ListState, ViewOutcome};
use courtside_shared::{Tournament, TournamentType};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{follow_redirect, use_auth};
use crate::components::common::{Alert, EmptyState, FormField, Loading};
use crate::web::router::{Link, use_router};

// =========================================================
// 赛事列表
// =========================================================

#[component]
pub fn TournamentsPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let state = RwSignal::new(ListState::<Tournament>::new());

    Effect::new(move |_| {
        let api = auth.api();
        state.update(ListState::begin);
        spawn_local(async move {
            let outcome = tournaments::load(&api).await;
            if let Some(route) = state.try_update(|s| s.apply(outcome)).flatten() {
                follow_redirect(auth, router, route);
            }
        });
    });

    let cards = move || state.with(|s| s.items.iter().map(TournamentCard::new).collect::<Vec<_>>());

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Tournaments"</h1>
                <Show when=move || auth.is_admin()>
                    <Link to=Route::NewTournament class="btn btn-primary btn-sm">
                        "Create Tournament"
                    </Link>
                </Show>
            </div>

            <Alert message=Signal::derive(move || state.with(|s| s.error.clone())) />

            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <Loading label="Loading tournaments..." /> }>
                <Show when=move || !state.with(ListState::show_empty_state) fallback=|| view! { <EmptyState message=EMPTY_MESSAGE /> }>
                    <div class="overflow-x-auto">
                        <table class="table table-zebra bg-base-100">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Type"</th>
                                    <th>"Status"</th>
                                    <th>"Starts"</th>
                                    <th>"Entry fee"</th>
                                    <th>"Prize pool"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=cards
                                    key=|card| card.id
                                    children=move |card| view! {
                                        <tr>
                                            <td>
                                                <Link to=Route::TournamentDetail(card.id) class="link link-primary">
                                                    {card.name}
                                                </Link>
                                            </td>
                                            <td>{card.type_label}</td>
                                            <td><span class="badge badge-outline">{card.status_label}</span></td>
                                            <td>{card.start_date}</td>
                                            <td>{card.entry_fee}</td>
                                            <td>{card.prize_pool}</td>
                                        </tr>
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

// =========================================================
// 赛事详情
// =========================================================

#[component]
pub fn TournamentDetailPage(id: u64) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (detail, set_detail) = signal(Option::<TournamentDetail>::None);
    let (loading, set_loading) = signal(true);
    let (busy, set_busy) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);

    let load = move || {
        let api = auth.api();
        set_loading.set(true);
        spawn_local(async move {
            match tournaments::load_detail(&api, id).await {
                ViewOutcome::Ready(loaded) => set_detail.set(Some(loaded)),
                ViewOutcome::Redirect(route) => follow_redirect(auth, router, route),
                ViewOutcome::Failed(message) => set_error_msg.set(Some(message)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    // 报名与退出共用一个提交流程
    let submit = move |withdraw: bool| {
        let api = auth.api();
        set_busy.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            let outcome = if withdraw {
                tournaments::withdraw(&api, id).await
            } else {
                tournaments::register(&api, id).await
            };
            match outcome {
                ViewOutcome::Ready(message) => {
                    set_notice.set(Some(message));
                    load();
                }
                ViewOutcome::Redirect(route) => follow_redirect(auth, router, route),
                ViewOutcome::Failed(message) => set_error_msg.set(Some(message)),
            }
            set_busy.set(false);
        });
    };

    let can_register = move || detail.with(|d| d.as_ref().is_some_and(TournamentDetail::can_register));
    let can_withdraw = move || detail.with(|d| d.as_ref().is_some_and(TournamentDetail::can_withdraw));
    let card = move || detail.with(|d| d.as_ref().map(|d| TournamentCard::new(&d.tournament)));
    let registration_label = move || {
        detail.with(|d| {
            d.as_ref()
                .and_then(|d| d.registration.as_ref())
                .map(|r| r.status.label())
        })
    };

    view! {
        <div class="space-y-6">
            <Link to=Route::Tournaments class="link">"← Back to tournaments"</Link>

            <Alert message=notice success=true />
            <Alert message=error_msg />

            <Show when=move || !loading.get() || detail.with(Option::is_some) fallback=|| view! { <Loading label="Loading tournament..." /> }>
                {move || card().map(|card| view! {
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body space-y-2">
                            <div class="flex justify-between items-start">
                                <h1 class="card-title text-3xl">{card.name}</h1>
                                <span class="badge badge-lg badge-outline">{card.status_label}</span>
                            </div>
                            <p class="text-sm font-semibold opacity-70">{card.type_label}</p>
                            {card.description.map(|d| view! { <p>{d}</p> })}
                            <ul class="space-y-1">
                                <li>"Max participants: " {card.max_participants}</li>
                                <li>"Starts: " {card.start_date}</li>
                                <li>"Registration deadline: " {card.registration_deadline}</li>
                                <li>"Entry fee: " {card.entry_fee}</li>
                                <li>"Prize pool: " {card.prize_pool}</li>
                            </ul>
                        </div>
                    </div>
                })}

                {move || registration_label().map(|label| view! {
                    <p class="text-sm">"Your registration: " <span class="badge badge-info">{label}</span></p>
                })}

                <div class="flex gap-4">
                    <Show when=can_register>
                        <button class="btn btn-primary" disabled=move || busy.get() on:click=move |_| submit(false)>
                            "Register"
                        </button>
                    </Show>
                    <Show when=can_withdraw>
                        <button class="btn btn-outline btn-error" disabled=move || busy.get() on:click=move |_| submit(true)>
                            "Withdraw"
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

// =========================================================
// 创建赛事（管理员）
// =========================================================

#[component]
pub fn NewTournamentPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let form = RwSignal::new(TournamentForm::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = auth.api();
        let current = form.get_untracked();
        spawn_local(async move {
            match tournaments::create(&api, &current).await {
                ViewOutcome::Ready(route) => router.navigate_to(route),
                ViewOutcome::Redirect(route) => follow_redirect(auth, router, route),
                ViewOutcome::Failed(message) => set_error_msg.set(Some(message)),
            }
            set_is_submitting.set(false);
        });
    };

    let on_type_change = move |ev| {
        let value = event_target_value(&ev);
        if let Some(kind) = TournamentType::parse(&value) {
            form.update(|f| f.tournament_type = kind);
        }
    };

    view! {
        <div class="max-w-2xl mx-auto">
            <h1 class="text-3xl font-bold mb-6">"Create Tournament"</h1>
            <form class="card bg-base-100 shadow-xl" on:submit=on_submit>
                <div class="card-body">
                    <Alert message=error_msg />

                    <FormField
                        id="name"
                        label="Tournament Name"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.name.clone()))
                        on_input=move |v: String| form.update(|f| f.name = v)
                    />

                    <div class="form-control">
                        <label class="label" for="description">
                            <span class="label-text">"Description"</span>
                        </label>
                        <textarea
                            id="description"
                            class="textarea textarea-bordered"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="form-control">
                        <label class="label" for="tournament_type">
                            <span class="label-text">"Tournament Type"</span>
                        </label>
                        <select id="tournament_type" class="select select-bordered" on:change=on_type_change>
                            {TournamentType::ALL
                                .into_iter()
                                .map(|kind| view! {
                                    <option
                                        value=kind.as_str()
                                        selected=move || form.with(|f| f.tournament_type == kind)
                                    >
                                        {kind.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <FormField
                        id="max_participants"
                        label="Max Participants"
                        input_type="number"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.max_participants.clone()))
                        on_input=move |v: String| form.update(|f| f.max_participants = v)
                    />

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <FormField
                            id="start_date"
                            label="Start Date"
                            input_type="date"
                            required=true
                            value=Signal::derive(move || form.with(|f| f.start_date.clone()))
                            on_input=move |v: String| form.update(|f| f.start_date = v)
                        />
                        <FormField
                            id="end_date"
                            label="End Date"
                            input_type="date"
                            required=true
                            value=Signal::derive(move || form.with(|f| f.end_date.clone()))
                            on_input=move |v: String| form.update(|f| f.end_date = v)
                        />
                        <FormField
                            id="registration_deadline"
                            label="Registration Deadline"
                            input_type="date"
                            value=Signal::derive(move || form.with(|f| f.registration_deadline.clone()))
                            on_input=move |v: String| form.update(|f| f.registration_deadline = v)
                        />
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <FormField
                            id="entry_fee"
                            label="Entry Fee ($)"
                            input_type="number"
                            placeholder="0"
                            value=Signal::derive(move || form.with(|f| f.entry_fee.clone()))
                            on_input=move |v: String| form.update(|f| f.entry_fee = v)
                        />
                        <FormField
                            id="prize_pool"
                            label="Prize Pool ($)"
                            input_type="number"
                            placeholder="0"
                            value=Signal::derive(move || form.with(|f| f.prize_pool.clone()))
                            on_input=move |v: String| form.update(|f| f.prize_pool = v)
                        />
                    </div>

                    <div class="card-actions justify-end mt-4">
                        <Link to=Route::Tournaments class="btn btn-ghost">"Cancel"</Link>
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() { "Creating..." } else { "Create Tournament" }}
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}
