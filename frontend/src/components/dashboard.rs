use courtside::Route;
use courtside::views::dashboard::{self, DashboardData, TournamentCard, WelcomeCard};
use courtside::views::ViewOutcome;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{follow_redirect, use_auth};
use crate::components::common::{Alert, EmptyState, Loading};
use crate::web::router::{Link, use_router};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (data, set_data) = signal(Option::<DashboardData>::None);
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);

    let load = move || {
        let api = auth.api();
        set_loading.set(true);
        spawn_local(async move {
            match dashboard::load(&api).await {
                ViewOutcome::Ready(loaded) => {
                    set_error_msg.set(None);
                    set_data.set(Some(loaded));
                    // 资料已写回缓存，同步导航栏
                    auth.refresh();
                }
                ViewOutcome::Redirect(route) => follow_redirect(auth, router, route),
                ViewOutcome::Failed(message) => set_error_msg.set(Some(message)),
            }
            set_loading.set(false);
        });
    };

    // 初始加载
    Effect::new(move |_| load());

    let handle_register = move |id: u64| {
        let api = auth.api();
        spawn_local(async move {
            match dashboard::register(&api, id).await {
                ViewOutcome::Ready(message) => {
                    set_notice.set(Some(message));
                    load();
                }
                ViewOutcome::Redirect(route) => follow_redirect(auth, router, route),
                ViewOutcome::Failed(message) => set_error_msg.set(Some(message)),
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

    let welcome = move || data.with(|d| d.as_ref().map(|d| WelcomeCard::new(&d.user)));
    let cards = move || {
        data.with(|d| {
            d.as_ref()
                .map(|d| d.tournaments.iter().map(TournamentCard::new).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };
    let empty = move || data.with(|d| dashboard::empty_state(d.as_ref().map(|d| &d.user)));

    view! {
        <div class="space-y-8">
            <Alert message=notice success=true />
            <Alert message=error_msg />

            <Show when=move || !loading.get() || data.with(Option::is_some) fallback=|| view! { <Loading label="Loading dashboard..." /> }>
                {move || welcome().map(|card| view! {
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title text-2xl">{card.heading}</h2>
                            <div class="flex flex-wrap gap-4 text-sm">
                                <span>"Role: " <span class="badge badge-primary">{card.role}</span></span>
                                {card.ranking.map(|r| view! { <span>"Ranking: " {r}</span> })}
                                <span>"Status: " {card.account_status}</span>
                            </div>
                        </div>
                    </div>
                })}

                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold">"Tournaments"</h2>
                    <Show when=move || auth.is_admin()>
                        <Link to=Route::NewTournament class="btn btn-primary btn-sm">
                            "Create Tournament"
                        </Link>
                    </Show>
                </div>

                <Show
                    when=move || !cards().is_empty()
                    fallback=move || {
                        let state = empty();
                        view! {
                            <EmptyState
                                message=state.message
                                hint=state.admin_hint
                            />
                        }
                    }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=cards
                            key=|card| card.id
                            children=move |card| {
                                let id = card.id;
                                view! {
                                    <div class="card bg-base-100 shadow-md">
                                        <div class="card-body">
                                            <div class="flex justify-between items-start">
                                                <Link to=Route::TournamentDetail(id) class="card-title link link-hover">
                                                    {card.name}
                                                </Link>
                                                <span class="badge badge-outline">{card.status_label}</span>
                                            </div>
                                            <p class="text-xs font-semibold opacity-70">{card.type_label}</p>
                                            {card.description.map(|d| view! { <p class="text-sm">{d}</p> })}
                                            <ul class="text-sm space-y-1">
                                                <li>"Max participants: " {card.max_participants}</li>
                                                <li>"Starts: " {card.start_date}</li>
                                                <li>"Registration deadline: " {card.registration_deadline}</li>
                                                <li>"Entry fee: " {card.entry_fee}</li>
                                                <li>"Prize pool: " {card.prize_pool}</li>
                                            </ul>
                                            {card.can_register.then(|| view! {
                                                <div class="card-actions justify-end">
                                                    <button
                                                        class="btn btn-primary btn-sm"
                                                        on:click=move |_| handle_register(id)
                                                    >
                                                        "Register"
                                                    </button>
                                                </div>
                                            })}
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
