//! 通用 UI 组件

use leptos::prelude::*;

/// 加载指示器
#[component]
pub fn Loading(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-16 gap-4">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <p class="text-base-content/70">{label}</p>
        </div>
    }
}

/// 内联提示（错误或成功）
#[component]
pub fn Alert(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] success: bool,
) -> impl IntoView {
    let class = if success {
        "alert alert-success text-sm py-2"
    } else {
        "alert alert-error text-sm py-2"
    };

    view! {
        <Show when=move || message.with(Option::is_some)>
            <div role="alert" class=class>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// 空列表提示
#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    #[prop(default = None)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 text-base-content/60">
            <p>{message}</p>
            {hint.map(|h| view! { <p class="mt-2 text-sm">{h}</p> })}
        </div>
    }
}

/// 带标签的输入框
#[component]
pub fn FormField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id.clone()>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=input_type.unwrap_or("text")
                placeholder=placeholder.unwrap_or_default()
                class="input input-bordered"
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// 登录 / 注册页面的卡片外框
#[component]
pub fn AuthCard(
    #[prop(into)] title: String,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] submit_text: String,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(optional, into)] footer: Option<AnyView>,
    children: Children,
) -> impl IntoView {
    let submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="hero min-h-[70vh]">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold text-center">"🏸 " {title}</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=submit>
                        <Alert message=error />
                        {children()}
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || loading.get()>
                                {move || if loading.get() {
                                    view! { <span class="loading loading-spinner"></span> "Loading..." }.into_any()
                                } else {
                                    submit_text.clone().into_any()
                                }}
                            </button>
                        </div>
                        {footer}
                    </form>
                </div>
            </div>
        </div>
    }
}
