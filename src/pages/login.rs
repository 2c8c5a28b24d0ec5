//! Username + password login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{Services, spawn};
use crate::config::ClientConfig;
use crate::net::types::LoginRequest;
use crate::router::routes::REGISTER_PATH;
use crate::state::notice::NoticeLevel;
use crate::state::session::Session;

const LOGIN_SUCCEEDED: &str = "登录成功";

fn validate_login_input(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("请输入用户名");
    }
    if password.is_empty() {
        return Err("请输入密码");
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let session = expect_context::<RwSignal<Session>>();
    let system_name = expect_context::<ClientConfig>().system_name;

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = move || session.with(|s| s.loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let req = match validate_login_input(&username.get(), &password.get()) {
            Ok(req) => req,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());

        let services = services.clone();
        // The login route's guard moves a logged-in session to the landing page.
        spawn(async move {
            match services.session.login(req).await {
                Ok(_) => services.notify(NoticeLevel::Success, LOGIN_SUCCEEDED),
                Err(e) => info.set(e.message().to_owned()),
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{system_name}</h1>
                <p class="login-card__subtitle">"账号登录"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="用户名"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="密码"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "登录中..." } else { "登录" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "还没有账号？" <A href=REGISTER_PATH>"立即注册"</A>
                </p>
            </div>
        </div>
    }
}
