//! 羽毛球赛事管理前端
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::router`: 路由服务（核心引擎），路由定义与守卫位于 `courtside::route`
//! - `auth`: 认证状态管理
//! - `components`: UI 组件层，页面状态机位于 `courtside::views`

mod auth;
mod components {
    pub mod admin;
    pub mod common;
    pub mod dashboard;
    pub mod home;
    pub mod layout;
    pub mod login;
    pub mod players;
    pub mod profile;
    pub mod tournaments;
}

use crate::auth::AuthContext;
use crate::components::admin::AdminPage;
use crate::components::dashboard::DashboardPage;
use crate::components::home::{HomePage, NotFound};
use crate::components::layout::Layout;
use crate::components::login::{LoginPage, RegisterPage};
use crate::components::players::PlayersPage;
use crate::components::profile::ProfilePage;
use crate::components::tournaments::{NewTournamentPage, TournamentDetailPage, TournamentsPage};

use courtside::Route;
use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装（fetch / localStorage / History），
// 替代 gloo-* 系列 crate，以减小 WASM 二进制体积。
pub(crate) mod web;

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 Route 枚举返回对应的视图组件，所有页面共用同一个外壳。
fn route_matcher(route: Route) -> AnyView {
    let page = match route {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::Login => view! { <LoginPage /> }.into_any(),
        Route::Register => view! { <RegisterPage /> }.into_any(),
        Route::Dashboard => view! { <DashboardPage /> }.into_any(),
        Route::Tournaments => view! { <TournamentsPage /> }.into_any(),
        Route::TournamentDetail(id) => view! { <TournamentDetailPage id=id /> }.into_any(),
        Route::NewTournament => view! { <NewTournamentPage /> }.into_any(),
        Route::Players => view! { <PlayersPage /> }.into_any(),
        Route::Admin => view! { <AdminPage /> }.into_any(),
        Route::Profile => view! { <ProfilePage /> }.into_any(),
        Route::NotFound => view! { <NotFound /> }.into_any(),
    };

    view! { <Layout>{page}</Layout> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文（同时从 LocalStorage 恢复会话）
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 获取用户信号，用于注入路由服务（解耦！）
    let user = auth_ctx.user_signal();

    view! {
        // 3. 路由器组件：注入用户信号实现守卫
        <Router user=user>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
