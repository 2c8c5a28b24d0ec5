//! Root application component with routing and context providers.

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::notice_bar::NoticeBar;
use crate::config::ClientConfig;
use crate::net::api::HttpAuthApi;
use crate::net::course_api::CourseApi;
use crate::net::error::ApiError;
use crate::net::http::HttpClient;
use crate::pages::{
    admin::{AdminCourseSchedulesPage, AdminCoursesPage, AdminStudentsPage, AdminTeachersPage},
    dashboard::DashboardPage,
    login::LoginPage,
    not_found::NotFoundPage,
    register::RegisterPage,
    student::{CourseSelectionPage, MyCoursesPage, SchedulePage},
    teacher::{TeacherCoursesPage, TeacherStudentsPage},
};
use crate::router::components::Guarded;
use crate::router::routes::{LANDING_PATH, NOT_FOUND_PATH, RouteId};
use crate::state::credentials::{CookieStore, LocalStore};
use crate::state::notice::{self, NoticeLevel, NoticeState};
use crate::state::session::{Session, SessionStore};

const SESSION_EXPIRED: &str = "登录已过期，请重新登录";

/// Session store as wired in the browser.
pub type AppSession = SessionStore<HttpAuthApi>;

/// Handles shared by every page.
#[derive(Clone)]
pub struct Services {
    pub session: Arc<AppSession>,
    pub courses: CourseApi,
    pub notices: RwSignal<NoticeState>,
    pub notice_ms: u32,
}

impl Services {
    /// Run a course call with the session's token, renewing it once if the
    /// backend rejects it.
    ///
    /// # Errors
    ///
    /// Returns whatever the call or the token renewal fails with.
    pub async fn call<T, F, Fut>(&self, f: F) -> Result<T, ApiError>
    where
        F: Fn(CourseApi, String) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        self.session.authorized(|token| f(self.courses.clone(), token)).await
    }

    pub fn notify(&self, level: NoticeLevel, message: impl Into<String>) {
        notice::show(self.notices, level, message, self.notice_ms);
    }

    /// Toast the error of a failed call.
    ///
    /// An `Auth` error here means token renewal failed and the session is
    /// already cleared; the page guard handles the redirect to login.
    pub fn report(&self, err: &ApiError) {
        if err.is_auth() {
            log::info!("call rejected after token renewal: {err}");
            self.notify(NoticeLevel::Warning, SESSION_EXPIRED);
            return;
        }
        self.notify(NoticeLevel::Error, err.message().to_owned());
    }
}

/// Drive a page task on the browser event loop; a no-op elsewhere.
pub(crate) fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}

/// Root application component.
///
/// Builds the session store, restores any persisted session, provides the
/// shared contexts and declares every route behind the navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("invalid build configuration, using defaults: {e}");
        ClientConfig::default()
    });
    let http = HttpClient::new(config.api_base.clone());
    let store = Arc::new(SessionStore::new(
        HttpAuthApi::new(http.clone()),
        Box::new(CookieStore),
        Box::new(LocalStore),
        config.tokens,
    ));

    let session = RwSignal::new(Session::default());
    store.set_observer(move |s| session.set(s.clone()));
    let outcome = store.init_user_info(|fetch| spawn(fetch));
    log::debug!("session restore: {outcome:?}");

    let notices = RwSignal::new(NoticeState::default());
    let services = Services {
        session: Arc::clone(&store),
        courses: CourseApi::new(http),
        notices,
        notice_ms: config.notice_ms,
    };

    provide_context(config);
    provide_context(store);
    provide_context(session);
    provide_context(notices);
    provide_context(services);

    view! {
        <NoticeBar/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=NOT_FOUND_PATH/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=LANDING_PATH/> }/>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <Guarded id=RouteId::Login><LoginPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <Guarded id=RouteId::Register><RegisterPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Guarded id=RouteId::Dashboard><Layout><DashboardPage/></Layout></Guarded> }
                />
                <Route
                    path=(StaticSegment("student"), StaticSegment("course-selection"))
                    view=|| view! {
                        <Guarded id=RouteId::StudentCourseSelection><Layout><CourseSelectionPage/></Layout></Guarded>
                    }
                />
                <Route
                    path=(StaticSegment("student"), StaticSegment("my-courses"))
                    view=|| view! { <Guarded id=RouteId::StudentMyCourses><Layout><MyCoursesPage/></Layout></Guarded> }
                />
                <Route
                    path=(StaticSegment("student"), StaticSegment("schedule"))
                    view=|| view! { <Guarded id=RouteId::StudentSchedule><Layout><SchedulePage/></Layout></Guarded> }
                />
                <Route
                    path=(StaticSegment("teacher"), StaticSegment("my-courses"))
                    view=|| view! { <Guarded id=RouteId::TeacherCourses><Layout><TeacherCoursesPage/></Layout></Guarded> }
                />
                <Route
                    path=(StaticSegment("teacher"), StaticSegment("students"))
                    view=|| view! { <Guarded id=RouteId::TeacherStudents><Layout><TeacherStudentsPage/></Layout></Guarded> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("courses"))
                    view=|| view! { <Guarded id=RouteId::AdminCourses><Layout><AdminCoursesPage/></Layout></Guarded> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("course-schedules"))
                    view=|| view! {
                        <Guarded id=RouteId::AdminCourseSchedules><Layout><AdminCourseSchedulesPage/></Layout></Guarded>
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("students"))
                    view=|| view! { <Guarded id=RouteId::AdminStudents><Layout><AdminStudentsPage/></Layout></Guarded> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("teachers"))
                    view=|| view! { <Guarded id=RouteId::AdminTeachers><Layout><AdminTeachersPage/></Layout></Guarded> }
                />
                <Route
                    path=StaticSegment("404")
                    view=|| view! { <Guarded id=RouteId::NotFound><NotFoundPage/></Guarded> }
                />
            </Routes>
        </Router>
    }
}
