use super::*;
use crate::net::types::{Profile, Role};
use crate::router::routes::{ROUTES, route};

// =============================================================
// Helpers
// =============================================================

const SYSTEM: &str = "学生选课系统";

fn logged_in(role: Role) -> Session {
    Session {
        access_token: "a1".to_owned(),
        refresh_token: "r1".to_owned(),
        profile: Some(Profile {
            id: 1,
            username: "alice".to_owned(),
            email: None,
            real_name: "Alice".to_owned(),
            role,
            student_number: None,
            grade: None,
            major: None,
            class_name: None,
            teacher_number: None,
            department: None,
            title: None,
        }),
        loading: false,
    }
}

fn sessions() -> Vec<Session> {
    vec![
        Session::default(),
        Session { access_token: "a1".to_owned(), ..Session::default() },
        logged_in(Role::Student),
        logged_in(Role::Teacher),
        logged_in(Role::Admin),
    ]
}

fn denied() -> Decision {
    Decision::Redirect {
        to: RouteId::Dashboard,
        notice: Some(GuardNotice { level: NoticeLevel::Error, message: PERMISSION_DENIED }),
    }
}

// =============================================================
// decide
// =============================================================

#[test]
fn public_pages_other_than_login_are_always_allowed() {
    for def in ROUTES.iter().filter(|r| !r.policy().requires_auth && !r.is_auth_entry()) {
        for session in sessions() {
            assert_eq!(decide(def, &session), Decision::Allow, "{:?}", def.id);
        }
    }
}

#[test]
fn logged_in_users_are_bounced_from_login_and_register() {
    for role in [Role::Student, Role::Teacher, Role::Admin] {
        let session = logged_in(role);
        for id in [RouteId::Login, RouteId::Register] {
            assert_eq!(
                decide(route(id), &session),
                Decision::Redirect { to: RouteId::Dashboard, notice: None }
            );
        }
    }
}

#[test]
fn anonymous_users_may_open_login_and_register() {
    assert_eq!(decide(route(RouteId::Login), &Session::default()), Decision::Allow);
    assert_eq!(decide(route(RouteId::Register), &Session::default()), Decision::Allow);
}

#[test]
fn protected_pages_send_anonymous_users_to_login_with_one_warning() {
    let token_only = Session { access_token: "a1".to_owned(), ..Session::default() };
    for def in ROUTES.iter().filter(|r| r.policy().requires_auth) {
        for session in [Session::default(), token_only.clone()] {
            let nav = navigate(def.path, &session, SYSTEM);
            assert_eq!(nav.destination(), RouteId::Login, "{}", def.path);
            assert_eq!(
                nav.notices(),
                vec![GuardNotice { level: NoticeLevel::Warning, message: LOGIN_REQUIRED }]
            );
        }
    }
}

#[test]
fn role_restricted_pages_follow_membership() {
    for def in ROUTES.iter().filter(|r| !r.roles.is_empty()) {
        for role in [Role::Student, Role::Teacher, Role::Admin] {
            let expected = if def.roles.contains(&role) { Decision::Allow } else { denied() };
            assert_eq!(decide(def, &logged_in(role)), expected, "{:?} as {role:?}", def.id);
        }
    }
}

#[test]
fn dashboard_is_open_to_every_role() {
    for role in [Role::Student, Role::Teacher, Role::Admin] {
        assert_eq!(decide(route(RouteId::Dashboard), &logged_in(role)), Decision::Allow);
    }
}

// =============================================================
// navigate
// =============================================================

#[test]
fn student_reaches_course_selection_but_not_admin_courses() {
    let alice = logged_in(Role::Student);

    let allowed = navigate("/student/course-selection", &alice, SYSTEM);
    assert_eq!(allowed.destination(), RouteId::StudentCourseSelection);
    assert!(allowed.notices().is_empty());

    let denied_nav = navigate("/admin/courses", &alice, SYSTEM);
    assert_eq!(denied_nav.destination(), RouteId::Dashboard);
    assert_eq!(
        denied_nav.notices(),
        vec![GuardNotice { level: NoticeLevel::Error, message: PERMISSION_DENIED }]
    );
    assert_eq!(denied_nav.steps.len(), 2);
}

#[test]
fn title_is_set_for_target_before_redirecting() {
    let nav = navigate("/admin/courses", &Session::default(), SYSTEM);
    assert_eq!(nav.steps[0].title, "课程管理 - 学生选课系统");
    assert_eq!(nav.title(), "登录 - 学生选课系统");
}

#[test]
fn root_and_unknown_paths_resolve_through_redirects() {
    let student = logged_in(Role::Student);
    assert_eq!(navigate("/", &student, SYSTEM).destination(), RouteId::Dashboard);
    assert_eq!(navigate("/", &Session::default(), SYSTEM).destination(), RouteId::Login);

    let missing = navigate("/nowhere", &Session::default(), SYSTEM);
    assert_eq!(missing.destination(), RouteId::NotFound);
    assert_eq!(missing.title(), "页面不存在 - 学生选课系统");
}

#[test]
fn every_chain_settles_within_one_redirect() {
    for def in ROUTES {
        for session in sessions() {
            let nav = navigate(def.path, &session, SYSTEM);
            assert!(nav.steps.len() <= 2, "{} took {} steps", def.path, nav.steps.len());
            assert_eq!(nav.steps.last().map(|s| s.decision), Some(Decision::Allow));
        }
    }
}

#[test]
fn page_title_falls_back_to_system_name() {
    assert_eq!(page_title(None, SYSTEM), SYSTEM);
    let untitled = RouteDef { title: None, ..*route(RouteId::Dashboard) };
    assert_eq!(page_title(Some(&untitled), SYSTEM), SYSTEM);
}

#[test]
fn notice_shows_only_on_the_entering_navigation() {
    let anonymous = Session::default();
    let decision = decide(route(RouteId::StudentMyCourses), &anonymous);

    assert_eq!(
        notice_for(decision, true),
        Some(GuardNotice { level: NoticeLevel::Warning, message: LOGIN_REQUIRED })
    );
    // Same redirect caused later by the session clearing (e.g. logout).
    assert_eq!(notice_for(decision, false), None);
}

#[test]
fn silent_redirects_and_allows_never_notify() {
    let bounce = decide(route(RouteId::Login), &logged_in(Role::Student));
    assert_eq!(notice_for(bounce, true), None);
    assert_eq!(notice_for(Decision::Allow, true), None);
    assert_eq!(notice_for(denied(), false), None);
    assert!(notice_for(denied(), true).is_some());
}
