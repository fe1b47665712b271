use courtside::Route;
use courtside::nav::APP_TITLE;
use leptos::prelude::*;

use crate::auth::use_auth;
use crate::web::router::Link;

const FEATURES: [(&str, &str); 3] = [
    ("Tournaments", "Browse upcoming events and register in a single click."),
    ("Rankings", "Keep your player ranking up to date on your profile."),
    ("Administration", "Organisers create events and manage player accounts."),
];

/// 落地页
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let signed_in = move || auth.user.with(Option::is_some);

    view! {
        <div class="hero min-h-[60vh] bg-base-100 rounded-box shadow">
            <div class="hero-content text-center">
                <div class="max-w-xl space-y-6">
                    <h1 class="text-5xl font-bold">"🏸 " {APP_TITLE}</h1>
                    <p>"Organise badminton tournaments, manage players and track registrations."</p>
                    <Show
                        when=signed_in
                        fallback=|| view! {
                            <div class="flex justify-center gap-4">
                                <Link to=Route::Register class="btn btn-primary">"Get Started"</Link>
                                <Link to=Route::Login class="btn btn-outline">"Sign In"</Link>
                            </div>
                        }
                    >
                        <Link to=Route::Dashboard class="btn btn-primary">"Go to Dashboard"</Link>
                    </Show>
                </div>
            </div>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-8">
            {FEATURES
                .into_iter()
                .map(|(title, text)| view! {
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{title}</h2>
                            <p>{text}</p>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl">"Page not found"</p>
                <Link to=Route::Home class="btn btn-primary">"Back to Home"</Link>
            </div>
        </div>
    }
}
