//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程，守卫决策由 `Route::resolve` 给出。

use courtside::Route;
use courtside_shared::User;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入用户信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
    /// 当前缓存用户（注入的信号）
    user: Signal<Option<User>>,
}

impl RouterService {
    fn new(user: Signal<Option<User>>) -> Self {
        // 初始路由同样经过守卫
        let requested = Route::from_path(&current_path());
        let initial = user.with_untracked(|u| Route::resolve(requested, u.as_ref()));
        if initial != requested {
            replace_history_state(&initial.to_path());
        }
        let (current_route, set_route) = signal(initial);

        Self {
            current_route,
            set_route,
            user,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<Route> {
        self.current_route
    }

    /// 按路径导航
    pub fn navigate(&self, path: &str) {
        self.navigate_to(Route::from_path(path));
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 处理 -> 加载
    pub fn navigate_to(&self, target: Route) {
        let resolved = self
            .user
            .with_untracked(|u| Route::resolve(target, u.as_ref()));

        if resolved != target {
            log::info!("[Router] {} is not available, redirecting to {}", target, resolved);
        }

        push_history_state(&resolved.to_path());
        self.set_route.set(resolved);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let user = self.user;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = Route::from_path(&current_path());
            let resolved = user.with_untracked(|u| Route::resolve(target, u.as_ref()));

            // popstate 时也执行守卫逻辑
            if resolved != target {
                replace_history_state(&resolved.to_path());
            }
            set_route.set(resolved);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置认证状态变化时的自动重定向
    ///
    /// 登录后离开登录页，注销或会话失效后离开受保护页面。
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let user = self.user;

        Effect::new(move |_| {
            let route = current_route.get_untracked();
            let resolved = user.with(|u| Route::resolve(route, u.as_ref()));

            if resolved != route {
                log::info!("[Router] Auth state changed, redirecting to {}", resolved);
                push_history_state(&resolved.to_path());
                set_route.set(resolved);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(user: Signal<Option<User>>) -> RouterService {
    let router = RouterService::new(user);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 当前用户信号
    user: Signal<Option<User>>,
    children: Children,
) -> impl IntoView {
    provide_router(user);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(Route) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接：拦截点击，走路由服务而不是整页跳转
#[component]
pub fn Link(
    to: Route,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_to(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
