//! Toast stack rendered above every page.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-bar">
            <For
                each=move || notices.get().notices
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.level.css_class() on:click=move |_| notices.update(|s| s.dismiss(id))>
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
