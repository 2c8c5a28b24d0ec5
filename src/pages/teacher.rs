//! Teacher pages: taught schedules and per-schedule rosters.

#[cfg(test)]
#[path = "teacher_test.rs"]
mod teacher_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::app::{Services, spawn};
use crate::components::pager::Pager;
use crate::net::types::{CourseSchedule, CourseSelection, Page, PageRequest};
use crate::pages::format::{credits_label, or_dash, slots_label};

const SCHEDULE_QUERY_KEY: &str = "scheduleId";

fn roster_link(schedule_id: i64) -> String {
    format!("/teacher/students?{SCHEDULE_QUERY_KEY}={schedule_id}")
}

fn parse_schedule_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok()).filter(|id| *id > 0)
}

fn load_teacher_courses(services: Services, target: RwSignal<Vec<CourseSchedule>>) {
    spawn(async move {
        match services.call(|api, token| async move { api.teacher_courses(&token, None).await }).await {
            Ok(list) => target.set(list),
            Err(e) => services.report(&e),
        }
    });
}

#[component]
pub fn TeacherCoursesPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let courses = RwSignal::new(Vec::<CourseSchedule>::new());
    load_teacher_courses(services, courses);

    let rows = move || {
        courses
            .get()
            .into_iter()
            .map(|s| {
                view! {
                    <tr>
                        <td>{s.course_code.clone()}</td>
                        <td>{s.course_name.clone()}</td>
                        <td>{or_dash(s.class_name.as_deref())}</td>
                        <td>{credits_label(s.credits)}</td>
                        <td>{slots_label(s.schedule_time.as_deref())}</td>
                        <td>{or_dash(s.classroom.as_deref())}</td>
                        <td>{format!("{}/{}", s.current_students, s.max_students)}</td>
                        <td>{s.status.label()}</td>
                        <td><A href=roster_link(s.id)>"学生名单"</A></td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <h2 class="page__title">"我的课程"</h2>
            <table class="table">
                <thead>
                    <tr>
                        <th>"代码"</th>
                        <th>"课程"</th>
                        <th>"班级"</th>
                        <th>"学分"</th>
                        <th>"上课时间"</th>
                        <th>"教室"</th>
                        <th>"人数"</th>
                        <th>"状态"</th>
                        <th>"操作"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
pub fn TeacherStudentsPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let query = use_query_map();
    let courses = RwSignal::new(Vec::<CourseSchedule>::new());
    let selected = RwSignal::new(None::<i64>);
    let page = RwSignal::new(0_u32);
    let roster = RwSignal::new(None::<Page<CourseSelection>>);

    load_teacher_courses(services.clone(), courses);

    // Follow the query string, then fall back to the first taught schedule.
    Effect::new(move || {
        let from_query = query.with(|q| parse_schedule_id(q.get_str(SCHEDULE_QUERY_KEY)));
        let first = courses.with(|c| c.first().map(|s| s.id));
        selected.set(from_query.or(first));
        page.set(0);
    });

    Effect::new(move || {
        let Some(schedule_id) = selected.get() else {
            roster.set(None);
            return;
        };
        let req = PageRequest { page: page.get(), ..PageRequest::default() };
        let services = services.clone();
        spawn(async move {
            let result = services
                .call(move |api, token| {
                    let req = req.clone();
                    async move { api.roster(&token, schedule_id, &req).await }
                })
                .await;
            match result {
                Ok(p) => roster.set(Some(p)),
                Err(e) => services.report(&e),
            }
        });
    });

    let options = move || {
        courses
            .get()
            .into_iter()
            .map(|s| {
                let id = s.id;
                let label = format!("{} {}", s.course_name, s.class_name.unwrap_or_default());
                view! {
                    <option value=id.to_string() selected=move || selected.get() == Some(id)>
                        {label}
                    </option>
                }
            })
            .collect_view()
    };

    let rows = move || {
        roster
            .get()
            .map(|p| p.content)
            .unwrap_or_default()
            .into_iter()
            .map(|s| {
                view! {
                    <tr>
                        <td>{or_dash(s.student_number.as_deref())}</td>
                        <td>{or_dash(s.student_name.as_deref())}</td>
                        <td>{or_dash(s.student_major.as_deref())}</td>
                        <td>{or_dash(s.student_class.as_deref())}</td>
                        <td>{s.selection_time.clone()}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <h2 class="page__title">"学生名单"</h2>
            <div class="page__toolbar">
                <select
                    class="input"
                    on:change=move |ev| {
                        selected.set(parse_schedule_id(Some(&event_target_value(&ev))));
                        page.set(0);
                    }
                >
                    {options}
                </select>
                <span class="page__summary">
                    {move || roster.with(|r| r.as_ref().map_or(0, |p| p.total_elements))} " 名学生"
                </span>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"学号"</th>
                        <th>"姓名"</th>
                        <th>"专业"</th>
                        <th>"班级"</th>
                        <th>"选课时间"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Pager page=page total_pages=Signal::derive(move || roster.with(|r| r.as_ref().map_or(0, |p| p.total_pages)))/>
        </div>
    }
}
