//! Landing page after login: greeting, profile summary, and shortcuts.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::{Profile, Role};
use crate::pages::format::or_dash;
use crate::router::routes::{RouteId, menu_for};
use crate::state::session::Session;

/// Profile rows shown on the dashboard for `profile`'s role.
fn profile_rows(profile: &Profile) -> Vec<(&'static str, String)> {
    let mut rows = vec![("用户名", profile.username.clone()), ("角色", profile.role.label().to_owned())];
    match profile.role {
        Role::Student => {
            rows.push(("学号", or_dash(profile.student_number.as_deref())));
            rows.push(("专业", or_dash(profile.major.as_deref())));
            rows.push(("班级", or_dash(profile.class_name.as_deref())));
        }
        Role::Teacher => {
            rows.push(("工号", or_dash(profile.teacher_number.as_deref())));
            rows.push(("院系", or_dash(profile.department.as_deref())));
            rows.push(("职称", or_dash(profile.title.as_deref())));
        }
        Role::Admin => {}
    }
    rows.push(("邮箱", or_dash(profile.email.as_deref())));
    rows
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let greeting = move || session.with(|s| format!("欢迎，{}", s.display_name()));
    let rows = move || {
        session
            .with(|s| s.profile.as_ref().map(profile_rows).unwrap_or_default())
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <div class="dashboard__row">
                        <span class="dashboard__label">{label}</span>
                        <span class="dashboard__value">{value}</span>
                    </div>
                }
            })
            .collect_view()
    };
    let shortcuts = move || {
        menu_for(session.with(Session::role))
            .into_iter()
            .flat_map(|section| section.items)
            .filter(|r| r.id != RouteId::Dashboard)
            .map(|r| view! { <A href=r.path attr:class="dashboard__shortcut">{r.title.unwrap_or(r.path)}</A> })
            .collect_view()
    };

    view! {
        <div class="dashboard">
            <h2 class="dashboard__greeting">{greeting}</h2>
            <Show
                when=move || session.with(|s| s.profile.is_some())
                fallback=|| view! { <p class="dashboard__loading">"正在加载用户信息..."</p> }
            >
                <section class="dashboard__profile">{rows}</section>
            </Show>
            <section class="dashboard__shortcuts">{shortcuts}</section>
        </div>
    }
}
