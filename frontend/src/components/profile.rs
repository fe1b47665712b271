use courtside::forms::{ChangePasswordForm, ProfileForm};
use courtside::views::dashboard::WelcomeCard;
use courtside::views::{ViewOutcome, profile};
use courtside_shared::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{follow_redirect, use_auth};
use crate::components::common::{Alert, FormField, Loading};
use crate::web::router::use_router;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (user, set_user) = signal(Option::<User>::None);
    let profile_form = RwSignal::new(ProfileForm::default());
    let password_form = RwSignal::new(ChangePasswordForm::default());

    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);

    // 服务端返回的用户同时写入页面与表单
    let apply_user = move |loaded: User| {
        profile_form.set(ProfileForm::from_user(&loaded));
        set_user.set(Some(loaded));
        auth.refresh();
    };

    Effect::new(move |_| {
        let api = auth.api();
        spawn_local(async move {
            match profile::load(&api).await {
                ViewOutcome::Ready(loaded) => apply_user(loaded),
                ViewOutcome::Redirect(route) => follow_redirect(auth, router, route),
                ViewOutcome::Failed(message) => set_error_msg.set(Some(message)),
            }
            set_loading.set(false);
        });
    });

    let on_update = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);
        set_error_msg.set(None);

        let api = auth.api();
        let current = profile_form.get_untracked();
        spawn_local(async move {
            match profile::update(&api, &current).await {
                ViewOutcome::Ready(updated) => {
                    apply_user(updated);
                    set_notice.set(Some("Profile updated successfully".to_string()));
                }
                ViewOutcome::Redirect(route) => follow_redirect(auth, router, route),
                ViewOutcome::Failed(message) => set_error_msg.set(Some(message)),
            }
            set_saving.set(false);
        });
    };

    let on_change_password = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);
        set_error_msg.set(None);

        let api = auth.api();
        let current = password_form.get_untracked();
        spawn_local(async move {
            match profile::change_password(&api, &current).await {
                ViewOutcome::Ready(message) => {
                    password_form.set(ChangePasswordForm::default());
                    set_notice.set(Some(message));
                }
                ViewOutcome::Redirect(route) => follow_redirect(auth, router, route),
                ViewOutcome::Failed(message) => set_error_msg.set(Some(message)),
            }
            set_saving.set(false);
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

    let summary = move || user.with(|u| u.as_ref().map(WelcomeCard::new));

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold">"My Profile"</h1>

            <Alert message=notice success=true />
            <Alert message=error_msg />

            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Loading profile..." /> }>
                {move || summary().map(|card| view! {
                    <div class="flex flex-wrap gap-4 text-sm">
                        <span>"Role: " <span class="badge badge-primary">{card.role}</span></span>
                        {card.ranking.map(|r| view! { <span>"Ranking: " {r}</span> })}
                        <span>"Status: " {card.account_status}</span>
                    </div>
                })}

                <form class="card bg-base-100 shadow-md" on:submit=on_update>
                    <div class="card-body">
                        <h2 class="card-title">"Profile Information"</h2>
                        <FormField
                            id="full_name"
                            label="Full Name"
                            value=Signal::derive(move || profile_form.with(|f| f.full_name.clone()))
                            on_input=move |v: String| profile_form.update(|f| f.full_name = v)
                        />
                        <FormField
                            id="email"
                            label="Email"
                            input_type="email"
                            value=Signal::derive(move || profile_form.with(|f| f.email.clone()))
                            on_input=move |v: String| profile_form.update(|f| f.email = v)
                        />
                        <FormField
                            id="ranking"
                            label="Ranking"
                            input_type="number"
                            value=Signal::derive(move || profile_form.with(|f| f.ranking.clone()))
                            on_input=move |v: String| profile_form.update(|f| f.ranking = v)
                        />
                        <div class="card-actions justify-end mt-4">
                            <button class="btn btn-primary" disabled=move || saving.get()>
                                "Save Changes"
                            </button>
                        </div>
                    </div>
                </form>

                <form class="card bg-base-100 shadow-md" on:submit=on_change_password>
                    <div class="card-body">
                        <h2 class="card-title">"Change Password"</h2>
                        <FormField
                            id="current_password"
                            label="Current Password"
                            input_type="password"
                            required=true
                            value=Signal::derive(move || password_form.with(|f| f.current_password.clone()))
                            on_input=move |v: String| password_form.update(|f| f.current_password = v)
                        />
                        <FormField
                            id="new_password"
                            label="New Password"
                            input_type="password"
                            required=true
                            placeholder="At least 6 characters"
                            value=Signal::derive(move || password_form.with(|f| f.new_password.clone()))
                            on_input=move |v: String| password_form.update(|f| f.new_password = v)
                        />
                        <FormField
                            id="confirm_new_password"
                            label="Confirm New Password"
                            input_type="password"
                            required=true
                            value=Signal::derive(move || password_form.with(|f| f.confirm_password.clone()))
                            on_input=move |v: String| password_form.update(|f| f.confirm_password = v)
                        />
                        <div class="card-actions justify-end mt-4">
                            <button class="btn btn-secondary" disabled=move || saving.get()>
                                "Change Password"
                            </button>
                        </div>
                    </div>
                </form>
            </Show>
        </div>
    }
}
