use courtside::nav::{APP_TITLE, NavMenu};
use leptos::prelude::*;

use crate::auth::use_auth;
use crate::web::router::{Link, use_router};

/// 页面外壳：导航栏 + 内容 + 页脚
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let menu = Memo::new(move |_| auth.user.with(|u| NavMenu::for_user(u.as_ref())));

    let on_logout = move |_| {
        let route = auth.logout();
        router.navigate_to(route);
    };

    view! {
        <div class="min-h-screen bg-base-200 flex flex-col font-sans">
            <div class="navbar bg-primary text-primary-content shadow-xl px-4">
                <div class="flex-1">
                    <Link to=courtside::Route::Home class="btn btn-ghost text-xl">
                        "🏸 " {APP_TITLE}
                    </Link>
                </div>
                <div class="flex-none gap-2 items-center">
                    <For
                        each=move || menu.get().links
                        key=|link| link.route
                        children=move |link| {
                            view! {
                                <Link to=link.route class="btn btn-ghost btn-sm">
                                    {link.label}
                                </Link>
                            }
                        }
                    />
                    <Show when=move || menu.with(|m| m.greeting.is_some())>
                        <span class="hidden md:inline text-sm opacity-80">
                            {move || menu.get().greeting.unwrap_or_default()}
                        </span>
                    </Show>
                    <Show when=move || menu.with(|m| m.show_logout)>
                        <button on:click=on_logout class="btn btn-outline btn-sm">
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>

            <main class="flex-1 w-full max-w-7xl mx-auto p-4 md:p-8">{children()}</main>

            <footer class="footer footer-center p-4 text-base-content/60">
                <p>"© 2025 Badminton Tournament Management"</p>
            </footer>
        </div>
    }
}
