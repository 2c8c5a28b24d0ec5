//! Static route declarations.
//!
//! DESIGN
//! ======
//! Each page is declared once in [`ROUTES`] with its title, access policy and
//! menu placement. The table is never mutated; the guard, the sidebar menu
//! and the router all read from it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteId {
    Login,
    Register,
    Dashboard,
    StudentCourseSelection,
    StudentMyCourses,
    StudentSchedule,
    TeacherCourses,
    TeacherStudents,
    AdminCourses,
    AdminCourseSchedules,
    AdminStudents,
    AdminTeachers,
    NotFound,
}

/// Sidebar section a route is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuGroup {
    Student,
    Teacher,
    Admin,
}

impl MenuGroup {
    pub const ALL: [Self; 3] = [Self::Student, Self::Teacher, Self::Admin];

    pub fn title(self) -> &'static str {
        match self {
            Self::Student => "学生功能",
            Self::Teacher => "教师功能",
            Self::Admin => "系统管理",
        }
    }

    pub fn roles(self) -> &'static [Role] {
        match self {
            Self::Student => &[Role::Student],
            Self::Teacher => &[Role::Teacher],
            Self::Admin => &[Role::Admin],
        }
    }
}

/// Access-control declaration for one route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoutePolicy {
    pub requires_auth: bool,
    /// Empty means any authenticated role.
    pub allowed_roles: &'static [Role],
}

impl RoutePolicy {
    pub fn permits(&self, role: Role) -> bool {
        self.allowed_roles.is_empty() || self.allowed_roles.contains(&role)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub id: RouteId,
    pub path: &'static str,
    pub title: Option<&'static str>,
    /// `None` is treated as `true`.
    pub require_auth: Option<bool>,
    pub roles: &'static [Role],
    pub hide_in_menu: bool,
    pub group: Option<MenuGroup>,
}

impl RouteDef {
    pub fn policy(&self) -> RoutePolicy {
        RoutePolicy { requires_auth: self.require_auth.unwrap_or(true), allowed_roles: self.roles }
    }

    /// Pages only meaningful to anonymous users.
    pub fn is_auth_entry(&self) -> bool {
        matches!(self.id, RouteId::Login | RouteId::Register)
    }
}

const STUDENT: &[Role] = &[Role::Student];
const TEACHER: &[Role] = &[Role::Teacher];
const ADMIN: &[Role] = &[Role::Admin];

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const LANDING_PATH: &str = "/dashboard";
pub const NOT_FOUND_PATH: &str = "/404";

pub static ROUTES: &[RouteDef] = &[
    RouteDef {
        id: RouteId::Login,
        path: LOGIN_PATH,
        title: Some("登录"),
        require_auth: Some(false),
        roles: &[],
        hide_in_menu: true,
        group: None,
    },
    RouteDef {
        id: RouteId::Register,
        path: REGISTER_PATH,
        title: Some("注册"),
        require_auth: Some(false),
        roles: &[],
        hide_in_menu: true,
        group: None,
    },
    RouteDef {
        id: RouteId::Dashboard,
        path: LANDING_PATH,
        title: Some("首页"),
        require_auth: Some(true),
        roles: &[],
        hide_in_menu: false,
        group: None,
    },
    RouteDef {
        id: RouteId::StudentCourseSelection,
        path: "/student/course-selection",
        title: Some("选课中心"),
        require_auth: Some(true),
        roles: STUDENT,
        hide_in_menu: false,
        group: Some(MenuGroup::Student),
    },
    RouteDef {
        id: RouteId::StudentMyCourses,
        path: "/student/my-courses",
        title: Some("我的课程"),
        require_auth: Some(true),
        roles: STUDENT,
        hide_in_menu: false,
        group: Some(MenuGroup::Student),
    },
    RouteDef {
        id: RouteId::StudentSchedule,
        path: "/student/schedule",
        title: Some("课程表"),
        require_auth: Some(true),
        roles: STUDENT,
        hide_in_menu: false,
        group: Some(MenuGroup::Student),
    },
    RouteDef {
        id: RouteId::TeacherCourses,
        path: "/teacher/my-courses",
        title: Some("我的课程"),
        require_auth: Some(true),
        roles: TEACHER,
        hide_in_menu: false,
        group: Some(MenuGroup::Teacher),
    },
    RouteDef {
        id: RouteId::TeacherStudents,
        path: "/teacher/students",
        title: Some("学生管理"),
        require_auth: Some(true),
        roles: TEACHER,
        hide_in_menu: false,
        group: Some(MenuGroup::Teacher),
    },
    RouteDef {
        id: RouteId::AdminCourses,
        path: "/admin/courses",
        title: Some("课程管理"),
        require_auth: Some(true),
        roles: ADMIN,
        hide_in_menu: false,
        group: Some(MenuGroup::Admin),
    },
    RouteDef {
        id: RouteId::AdminCourseSchedules,
        path: "/admin/course-schedules",
        title: Some("课程安排"),
        require_auth: Some(true),
        roles: ADMIN,
        hide_in_menu: false,
        group: Some(MenuGroup::Admin),
    },
    RouteDef {
        id: RouteId::AdminStudents,
        path: "/admin/students",
        title: Some("学生管理"),
        require_auth: Some(true),
        roles: ADMIN,
        hide_in_menu: false,
        group: Some(MenuGroup::Admin),
    },
    RouteDef {
        id: RouteId::AdminTeachers,
        path: "/admin/teachers",
        title: Some("教师管理"),
        require_auth: Some(true),
        roles: ADMIN,
        hide_in_menu: false,
        group: Some(MenuGroup::Admin),
    },
    RouteDef {
        id: RouteId::NotFound,
        path: NOT_FOUND_PATH,
        title: Some("页面不存在"),
        require_auth: Some(false),
        roles: &[],
        hide_in_menu: true,
        group: None,
    },
];

/// Declaration for `id`.
pub fn route(id: RouteId) -> &'static RouteDef {
    ROUTES
        .iter()
        .find(|r| r.id == id)
        .unwrap_or(&ROUTES[ROUTES.len() - 1])
}

/// Result of matching a location path against the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Route(RouteId),
    /// Declared redirect: `/` to the landing page, unmatched paths to `/404`.
    Redirect(RouteId),
}

/// Match a browser path (query and fragment ignored, trailing slash tolerated).
pub fn resolve(path: &str) -> Resolution {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return Resolution::Redirect(RouteId::Dashboard);
    }
    ROUTES
        .iter()
        .find(|r| r.path == trimmed)
        .map_or(Resolution::Redirect(RouteId::NotFound), |r| Resolution::Route(r.id))
}

/// One sidebar section: ungrouped entries have no title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuSection {
    pub title: Option<&'static str>,
    pub items: Vec<&'static RouteDef>,
}

/// Sidebar entries visible to `role`, in table order.
pub fn menu_for(role: Option<Role>) -> Vec<MenuSection> {
    let Some(role) = role else {
        return Vec::new();
    };
    let visible = |r: &&'static RouteDef| !r.hide_in_menu && r.policy().permits(role);

    let mut sections = vec![MenuSection {
        title: None,
        items: ROUTES.iter().filter(|r| r.group.is_none()).filter(visible).collect(),
    }];
    for group in MenuGroup::ALL {
        if !group.roles().contains(&role) {
            continue;
        }
        let items: Vec<_> = ROUTES.iter().filter(|r| r.group == Some(group)).filter(visible).collect();
        if !items.is_empty() {
            sections.push(MenuSection { title: Some(group.title()), items });
        }
    }
    sections.retain(|s| !s.items.is_empty());
    sections
}
