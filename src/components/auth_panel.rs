//! Auth Panel Component
//!
//! Signed-out screen: Login / Register tabs and the active form.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{AppStateStoreFields, AuthView};

#[component]
pub fn AuthPanel() -> impl IntoView {
    let store = use_app_context().store;

    let tab_class = move |tab: AuthView| {
        if store.auth_view().get() == tab { "auth-tab active" } else { "auth-tab" }
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>"📝 Todo Manager"</h1>
                    <p>"Welcome! Please login or register to continue."</p>
                </div>

                <div class="auth-tabs">
                    <button
                        class=move || tab_class(AuthView::Login)
                        on:click=move |_| store.auth_view().set(AuthView::Login)
                    >
                        "Login"
                    </button>
                    <button
                        class=move || tab_class(AuthView::Register)
                        on:click=move |_| store.auth_view().set(AuthView::Register)
                    >
                        "Register"
                    </button>
                </div>

                {move || match store.auth_view().get() {
                    AuthView::Login => view! { <LoginFormView /> }.into_any(),
                    AuthView::Register => view! { <RegisterFormView /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn LoginFormView() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let loading = move || store.loading().get();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(|controller| async move {
            controller.submit_login().await;
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label>
                "Username"
                <input
                    type="text"
                    required=true
                    prop:value=move || store.login_form().with(|f| f.username.clone())
                    on:input=move |ev| store.login_form().update(|f| f.username = event_target_value(&ev))
                />
            </label>
            <label>
                "Password"
                <input
                    type="password"
                    required=true
                    prop:value=move || store.login_form().with(|f| f.password.clone())
                    on:input=move |ev| store.login_form().update(|f| f.password = event_target_value(&ev))
                />
            </label>
            <button type="submit" class="primary-btn" disabled=loading>
                {move || if loading() { "Logging in..." } else { "Login" }}
            </button>
        </form>
    }
}

#[component]
fn RegisterFormView() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let loading = move || store.loading().get();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(|controller| async move {
            controller.submit_register().await;
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label>
                "Username"
                <input
                    type="text"
                    required=true
                    prop:value=move || store.register_form().with(|f| f.username.clone())
                    on:input=move |ev| store.register_form().update(|f| f.username = event_target_value(&ev))
                />
            </label>
            <label>
                "Email"
                <input
                    type="email"
                    required=true
                    prop:value=move || store.register_form().with(|f| f.email.clone())
                    on:input=move |ev| store.register_form().update(|f| f.email = event_target_value(&ev))
                />
            </label>
            <label>
                "Password"
                <input
                    type="password"
                    required=true
                    prop:value=move || store.register_form().with(|f| f.password.clone())
                    on:input=move |ev| store.register_form().update(|f| f.password = event_target_value(&ev))
                />
            </label>
            <button type="submit" class="primary-btn" disabled=loading>
                {move || if loading() { "Registering..." } else { "Register" }}
            </button>
        </form>
    }
}
