//! Transient user-visible notices (toasts).
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard and pages push notices here; the layout renders the
//! queue and each notice is dismissed after the configured duration.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notice notice--success",
            Self::Warning => "notice notice--warning",
            Self::Error => "notice notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub level: NoticeLevel,
    pub message: String,
}

/// Visible notices, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub notices: Vec<Notice>,
}

impl NoticeState {
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.notices.push(Notice { id, level, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.notices.retain(|n| n.id != id);
    }
}

/// Show a notice and schedule its dismissal after `duration_ms`.
#[cfg(feature = "csr")]
pub fn show(
    notices: leptos::prelude::RwSignal<NoticeState>,
    level: NoticeLevel,
    message: impl Into<String>,
    duration_ms: u32,
) {
    use leptos::prelude::Update;

    let mut id = None;
    notices.update(|s| id = Some(s.push(level, message)));
    let Some(id) = id else {
        return;
    };
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(duration_ms).await;
        notices.update(|s| s.dismiss(id));
    });
}

/// Record a notice; there is no timer outside the browser.
#[cfg(not(feature = "csr"))]
pub fn show(
    notices: leptos::prelude::RwSignal<NoticeState>,
    level: NoticeLevel,
    message: impl Into<String>,
    duration_ms: u32,
) {
    use leptos::prelude::Update;

    let _ = duration_ms;
    notices.update(|s| {
        s.push(level, message);
    });
}
