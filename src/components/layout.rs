//! Chrome around every signed-in page: header, role menu, and content area.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{AppSession, spawn};
use crate::config::ClientConfig;
use crate::router::routes::menu_for;
use crate::state::session::Session;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<Arc<AppSession>>();
    let config = expect_context::<ClientConfig>();
    let busy = RwSignal::new(false);

    let user_name = move || session.with(|s| s.display_name().to_owned());
    let role_label = move || session.with(|s| s.role().map(|r| r.label()).unwrap_or_default());

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let store = Arc::clone(&store);
        // Clearing the session makes the page guard redirect to login.
        spawn(async move {
            store.logout().await;
            busy.set(false);
        });
    };

    let menu = move || {
        menu_for(session.with(Session::role))
            .into_iter()
            .map(|section| {
                let items = section
                    .items
                    .into_iter()
                    .map(|r| {
                        view! {
                            <li class="layout__menu-item">
                                <A href=r.path>{r.title.unwrap_or(r.path)}</A>
                            </li>
                        }
                    })
                    .collect_view();
                view! {
                    <section class="layout__menu-section">
                        {section.title.map(|t| view! { <h3 class="layout__menu-title">{t}</h3> })}
                        <ul class="layout__menu-list">{items}</ul>
                    </section>
                }
            })
            .collect_view()
    };

    view! {
        <div class="layout">
            <header class="layout__header">
                <span class="layout__system-name">{config.system_name}</span>
                <span class="layout__spacer"></span>
                <span class="layout__user">{user_name}</span>
                <span class="layout__role">{role_label}</span>
                <button class="btn" on:click=on_logout disabled=move || busy.get()>
                    "退出登录"
                </button>
            </header>
            <div class="layout__body">
                <nav class="layout__sidebar">{menu}</nav>
                <main class="layout__content">{children()}</main>
            </div>
        </div>
    }
}
