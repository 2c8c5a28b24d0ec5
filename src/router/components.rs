//! Leptos glue that runs the guard on every routed page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::guard::{Decision, decide, notice_for, page_title};
use super::routes::{self, RouteId};
use crate::config::ClientConfig;
use crate::state::notice::{self, NoticeState};
use crate::state::session::Session;

/// Wrap a page so it renders only when the guard allows `id`.
///
/// The window title is set for `id` first, so it reflects the target page
/// even when the guard immediately redirects away. Redirects go through the
/// router and land on another `Guarded` page, which re-runs the check.
///
/// The decision also follows the session, so logging in on `/login` or
/// logging out anywhere moves the user without the page navigating itself.
#[component]
pub fn Guarded(id: RouteId, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let def = routes::route(id);
    let title = page_title(Some(def), &config.system_name);
    let notice_ms = config.notice_ms;
    let decision = Memo::new(move |_| session.with(|s| decide(def, s)));

    Effect::new(move |entered: Option<()>| {
        let current = decision.get();
        if let Some(n) = notice_for(current, entered.is_none()) {
            notice::show(notices, n.level, n.message, notice_ms);
        }
        if let Decision::Redirect { to, .. } = current {
            navigate(routes::route(to).path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Title text=title/>
        <Show when=move || decision.get() == Decision::Allow>{children()}</Show>
    }
}
