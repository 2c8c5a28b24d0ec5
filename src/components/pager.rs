//! Previous/next controls for paged listings.

use leptos::prelude::*;

/// `page` is zero-based, matching the backend's paging.
#[component]
pub fn Pager(page: RwSignal<u32>, #[prop(into)] total_pages: Signal<u32>) -> impl IntoView {
    let has_prev = move || page.get() > 0;
    let has_next = move || page.get() + 1 < total_pages.get();

    view! {
        <div class="pager">
            <button class="btn" disabled=move || !has_prev() on:click=move |_| page.update(|p| *p = p.saturating_sub(1))>
                "上一页"
            </button>
            <span class="pager__label">
                {move || format!("第 {} / {} 页", page.get() + 1, total_pages.get().max(1))}
            </span>
            <button class="btn" disabled=move || !has_next() on:click=move |_| page.update(|p| *p += 1)>
                "下一页"
            </button>
        </div>
    }
}
