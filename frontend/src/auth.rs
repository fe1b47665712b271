//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 会话本身持久化在 LocalStorage（`token` / `user`），这里只维护一个
//! 缓存用户信号，路由服务通过注入的信号来检查认证状态。

use courtside::nav::Shell;
use courtside::{ClientConfig, Route, TournamentApi};
use courtside_shared::User;
use leptos::prelude::*;

use crate::web::router::RouterService;
use crate::web::{FetchClient, LocalStorage};

/// 浏览器端 API 客户端
pub type Api = TournamentApi<FetchClient, LocalStorage>;

/// 认证上下文
///
/// 包含读写信号与共享的 API 实例，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 当前缓存用户（只读）
    pub user: ReadSignal<Option<User>>,
    set_user: WriteSignal<Option<User>>,
    api: StoredValue<Api>,
}

impl AuthContext {
    /// 创建认证上下文，并从 LocalStorage 恢复会话
    pub fn new() -> Self {
        let config = ClientConfig::from_build_env();
        log::debug!("API base: {}", config.api_base());

        let api = Api::new(FetchClient, LocalStorage, config);
        let cached = api.session().load().map(|s| s.user);
        let (user, set_user) = signal(cached);

        Self {
            user,
            set_user,
            api: StoredValue::new(api),
        }
    }

    pub fn api(&self) -> Api {
        self.api.get_value()
    }

    /// 获取用户信号（用于路由服务注入）
    pub fn user_signal(&self) -> Signal<Option<User>> {
        self.user.into()
    }

    pub fn is_admin(&self) -> bool {
        self.user.with(|u| u.as_ref().is_some_and(User::is_admin))
    }

    /// 登录、注册或资料更新后，从 LocalStorage 重新读取会话
    pub fn refresh(&self) {
        let session = self.api.with_value(|api| api.session().load());
        self.set_user.set(session.map(|s| s.user));
    }

    /// 注销并清除状态
    ///
    /// 导航将由路由服务的认证状态监听自动处理。
    pub fn logout(&self) -> Route {
        let route = self.api.with_value(|api| Shell::new(api.session().clone()).logout());
        self.set_user.set(None);
        route
    }

    /// 会话已被视图层清除（401），同步内存状态
    pub fn expire(&self) {
        self.set_user.set(None);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 会话失效后是否交给路由服务的认证监听完成跳转
///
/// 清空仍处于登录状态的用户信号会触发监听并推入登录页，再手动导航会重复一条历史记录。
fn expiry_redirects_itself(route: Route, signed_in: bool) -> bool {
    route == Route::Login && signed_in
}

/// 执行视图层给出的跳转
///
/// 跳转到登录页意味着会话已失效，先同步认证状态。
pub fn follow_redirect(auth: AuthContext, router: RouterService, route: Route) {
    let signed_in = auth.user.with_untracked(Option::is_some);
    if expiry_redirects_itself(route, signed_in) {
        auth.expire();
        return;
    }
    router.navigate_to(route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_navigates_once() {
        assert!(expiry_redirects_itself(Route::Login, true));
        // 已是访客时监听不会触发，需要手动导航
        assert!(!expiry_redirects_itself(Route::Login, false));
        assert!(!expiry_redirects_itself(Route::Dashboard, true));
    }
}
