use courtside::Route;
use courtside::forms::{LoginForm, RegisterForm};
use courtside::views::{self, ViewOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::common::{AuthCard, FormField};
use crate::web::router::{Link, use_router};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let form = RwSignal::new(LoginForm::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |_: ()| {
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = auth.api();
        let current = form.get_untracked();
        spawn_local(async move {
            match views::auth::login(&api, &current).await {
                ViewOutcome::Ready(route) | ViewOutcome::Redirect(route) => {
                    auth.refresh();
                    router.navigate_to(route);
                }
                ViewOutcome::Failed(message) => set_error_msg.set(Some(message)),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <AuthCard
            title="Login"
            error=error_msg
            loading=is_submitting
            submit_text="Login"
            on_submit=on_submit
            footer=view! {
                <p class="text-center text-sm mt-2">
                    "Don't have an account? "
                    <Link to=Route::Register class="link link-primary">"Register here"</Link>
                </p>
            }
            .into_any()
        >
            <FormField
                id="username"
                label="Username"
                required=true
                value=Signal::derive(move || form.with(|f| f.username.clone()))
                on_input=move |v: String| form.update(|f| f.username = v)
            />
            <FormField
                id="password"
                label="Password"
                input_type="password"
                required=true
                value=Signal::derive(move || form.with(|f| f.password.clone()))
                on_input=move |v: String| form.update(|f| f.password = v)
            />
        </AuthCard>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let form = RwSignal::new(RegisterForm::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |_: ()| {
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = auth.api();
        let current = form.get_untracked();
        spawn_local(async move {
            match views::auth::register(&api, &current).await {
                ViewOutcome::Ready(route) | ViewOutcome::Redirect(route) => {
                    auth.refresh();
                    router.navigate_to(route);
                }
                ViewOutcome::Failed(message) => set_error_msg.set(Some(message)),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <AuthCard
            title="Register"
            error=error_msg
            loading=is_submitting
            submit_text="Create Account"
            on_submit=on_submit
            footer=view! {
                <p class="text-center text-sm mt-2">
                    "Already have an account? "
                    <Link to=Route::Login class="link link-primary">"Login here"</Link>
                </p>
            }
            .into_any()
        >
            <FormField
                id="full_name"
                label="Full Name"
                required=true
                value=Signal::derive(move || form.with(|f| f.full_name.clone()))
                on_input=move |v: String| form.update(|f| f.full_name = v)
            />
            <FormField
                id="username"
                label="Username"
                required=true
                value=Signal::derive(move || form.with(|f| f.username.clone()))
                on_input=move |v: String| form.update(|f| f.username = v)
            />
            <FormField
                id="email"
                label="Email"
                input_type="email"
                required=true
                value=Signal::derive(move || form.with(|f| f.email.clone()))
                on_input=move |v: String| form.update(|f| f.email = v)
            />
            <FormField
                id="password"
                label="Password"
                input_type="password"
                required=true
                placeholder="At least 6 characters"
                value=Signal::derive(move || form.with(|f| f.password.clone()))
                on_input=move |v: String| form.update(|f| f.password = v)
            />
            <FormField
                id="confirm_password"
                label="Confirm Password"
                input_type="password"
                required=true
                value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                on_input=move |v: String| form.update(|f| f.confirm_password = v)
            />
        </AuthCard>
    }
}
