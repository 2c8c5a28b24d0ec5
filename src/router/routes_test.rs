use super::*;

#[test]
fn every_route_id_is_declared_once() {
    let ids = [
        RouteId::Login,
        RouteId::Register,
        RouteId::Dashboard,
        RouteId::StudentCourseSelection,
        RouteId::StudentMyCourses,
        RouteId::StudentSchedule,
        RouteId::TeacherCourses,
        RouteId::TeacherStudents,
        RouteId::AdminCourses,
        RouteId::AdminCourseSchedules,
        RouteId::AdminStudents,
        RouteId::AdminTeachers,
        RouteId::NotFound,
    ];
    assert_eq!(ROUTES.len(), ids.len());
    for id in ids {
        assert_eq!(ROUTES.iter().filter(|r| r.id == id).count(), 1, "{id:?}");
        assert_eq!(route(id).id, id);
    }
}

#[test]
fn policy_defaults_to_requiring_auth() {
    let def = RouteDef { require_auth: None, ..*route(RouteId::Dashboard) };
    assert!(def.policy().requires_auth);
}

#[test]
fn policy_with_no_roles_permits_everyone() {
    let policy = route(RouteId::Dashboard).policy();
    assert!(policy.permits(Role::Student));
    assert!(policy.permits(Role::Admin));
    assert!(!route(RouteId::AdminCourses).policy().permits(Role::Teacher));
}

#[test]
fn resolve_matches_declared_paths() {
    assert_eq!(resolve("/student/course-selection"), Resolution::Route(RouteId::StudentCourseSelection));
    assert_eq!(resolve("/admin/courses/"), Resolution::Route(RouteId::AdminCourses));
    assert_eq!(resolve("/login?redirect=%2Fdashboard"), Resolution::Route(RouteId::Login));
}

#[test]
fn resolve_redirects_root_and_unknown_paths() {
    assert_eq!(resolve("/"), Resolution::Redirect(RouteId::Dashboard));
    assert_eq!(resolve(""), Resolution::Redirect(RouteId::Dashboard));
    assert_eq!(resolve("/no/such/page"), Resolution::Redirect(RouteId::NotFound));
    assert_eq!(resolve("/student"), Resolution::Redirect(RouteId::NotFound));
}

#[test]
fn menu_is_empty_without_role() {
    assert!(menu_for(None).is_empty());
}

#[test]
fn student_menu_has_dashboard_and_student_group_only() {
    let menu = menu_for(Some(Role::Student));
    assert_eq!(menu.len(), 2);
    assert_eq!(menu[0].title, None);
    assert_eq!(menu[0].items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![RouteId::Dashboard]);
    assert_eq!(menu[1].title, Some("学生功能"));
    assert_eq!(
        menu[1].items.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![RouteId::StudentCourseSelection, RouteId::StudentMyCourses, RouteId::StudentSchedule]
    );
}

#[test]
fn admin_menu_lists_four_management_pages() {
    let menu = menu_for(Some(Role::Admin));
    let admin = menu.iter().find(|s| s.title == Some("系统管理")).unwrap();
    assert_eq!(admin.items.len(), 4);
    assert!(menu.iter().all(|s| s.items.iter().all(|r| !r.hide_in_menu)));
}
