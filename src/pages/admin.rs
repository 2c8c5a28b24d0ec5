//! Administrator pages: course catalog and course schedule management.
//!
//! Student and teacher account pages are routed and guarded but have no
//! listing endpoint behind them yet.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use serde_json::json;

use crate::app::{Services, spawn};
use crate::components::pager::Pager;
use crate::net::types::{
    Course, CourseCreateRequest, CourseSchedule, CourseScheduleCreateRequest, CourseType, Page, PageRequest,
    ScheduleStatus,
};
use crate::pages::format::{credits_label, or_dash, slots_label, weekday_label};
use crate::state::notice::NoticeLevel;

/// Courses offered in the schedule form's course picker.
const COURSE_PICKER_SIZE: u32 = 100;

// =============================================================
// Course form
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
struct CourseForm {
    code: String,
    name: String,
    course_type: CourseType,
    credits: String,
    total_hours: String,
    theory_hours: String,
    practice_hours: String,
    department: String,
    description: String,
}

impl Default for CourseForm {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            course_type: CourseType::Required,
            credits: String::new(),
            total_hours: String::new(),
            theory_hours: String::new(),
            practice_hours: String::new(),
            department: String::new(),
            description: String::new(),
        }
    }
}

fn optional(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}

fn valid_course_code(s: &str) -> bool {
    (4..=10).contains(&s.len()) && s.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Blank counts as zero.
fn parse_hours(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0);
    }
    s.parse().ok()
}

fn validate_course_form(form: &CourseForm) -> Result<CourseCreateRequest, &'static str> {
    let code = form.code.trim();
    if code.is_empty() {
        return Err("课程代码不能为空");
    }
    if !valid_course_code(code) {
        return Err("课程代码格式不正确");
    }
    let name = form.name.trim();
    if name.is_empty() {
        return Err("课程名称不能为空");
    }
    if name.chars().count() > 100 {
        return Err("课程名称长度不能超过100个字符");
    }
    let credits: f64 = form.credits.trim().parse().map_err(|_| "学分格式不正确")?;
    if !(0.5..=10.0).contains(&credits) {
        return Err("学分必须在0.5到10之间");
    }
    let total_hours: u32 = form.total_hours.trim().parse().map_err(|_| "总学时格式不正确")?;
    if !(1..=200).contains(&total_hours) {
        return Err("总学时必须在1到200之间");
    }
    let theory_hours = parse_hours(&form.theory_hours).ok_or("理论学时格式不正确")?;
    let practice_hours = parse_hours(&form.practice_hours).ok_or("实践学时格式不正确")?;
    if theory_hours + practice_hours != total_hours {
        return Err("理论学时与实践学时之和必须等于总学时");
    }
    let description = optional(&form.description);
    if description.as_ref().is_some_and(|d| d.chars().count() > 1000) {
        return Err("课程描述长度不能超过1000个字符");
    }
    let department = optional(&form.department);
    if department.as_ref().is_some_and(|d| d.chars().count() > 100) {
        return Err("开课院系长度不能超过100个字符");
    }

    Ok(CourseCreateRequest {
        course_code: code.to_owned(),
        course_name: name.to_owned(),
        course_type: form.course_type,
        credits,
        total_hours,
        theory_hours,
        practice_hours,
        description,
        prerequisite_courses: None,
        department,
    })
}

fn course_type_from(value: &str) -> CourseType {
    match value {
        "ELECTIVE" => CourseType::Elective,
        "PUBLIC" => CourseType::Public,
        _ => CourseType::Required,
    }
}

// =============================================================
// Schedule form
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ScheduleForm {
    course_id: String,
    teacher_id: String,
    semester_id: String,
    class_name: String,
    max_students: String,
    classroom: String,
    day_of_week: String,
    start_time: String,
    end_time: String,
    selection_start: String,
    selection_end: String,
}

fn parse_id(s: &str, err: &'static str) -> Result<i64, &'static str> {
    s.trim().parse::<i64>().ok().filter(|id| *id > 0).ok_or(err)
}

/// `HH:MM`, 24-hour clock.
fn valid_clock(s: &str) -> bool {
    let Some((h, m)) = s.split_once(':') else {
        return false;
    };
    h.len() == 2
        && m.len() == 2
        && h.parse::<u8>().is_ok_and(|h| h < 24)
        && m.parse::<u8>().is_ok_and(|m| m < 60)
}

/// Browser `datetime-local` values omit seconds; the backend wants them.
fn normalize_datetime(s: &str) -> Option<String> {
    let s = s.trim();
    match s.len() {
        0 => None,
        16 => Some(format!("{s}:00")),
        _ => Some(s.to_owned()),
    }
}

fn validate_schedule_form(form: &ScheduleForm) -> Result<CourseScheduleCreateRequest, &'static str> {
    let course_id = parse_id(&form.course_id, "请选择课程")?;
    let teacher_id = parse_id(&form.teacher_id, "教师ID格式不正确")?;
    let semester_id = parse_id(&form.semester_id, "学期ID格式不正确")?;
    let max_students: u32 = form.max_students.trim().parse().map_err(|_| "最大学生数格式不正确")?;
    if !(1..=200).contains(&max_students) {
        return Err("最大学生数必须在1到200之间");
    }
    let class_name = optional(&form.class_name);
    if class_name.as_ref().is_some_and(|c| c.chars().count() > 50) {
        return Err("班级名称长度不能超过50个字符");
    }
    let classroom = optional(&form.classroom);
    if classroom.as_ref().is_some_and(|c| c.chars().count() > 50) {
        return Err("教室长度不能超过50个字符");
    }

    let schedule_time = match form.day_of_week.trim().parse::<u8>() {
        Ok(day @ 1..=7) => {
            let (start, end) = (form.start_time.trim(), form.end_time.trim());
            if !valid_clock(start) || !valid_clock(end) {
                return Err("上课时间格式不正确");
            }
            if start >= end {
                return Err("下课时间必须晚于上课时间");
            }
            Some(vec![json!({ "dayOfWeek": day, "startTime": start, "endTime": end })])
        }
        _ if form.day_of_week.trim().is_empty() => None,
        _ => return Err("星期格式不正确"),
    };

    let selection_start_time = normalize_datetime(&form.selection_start);
    let selection_end_time = normalize_datetime(&form.selection_end);
    if let (Some(start), Some(end)) = (&selection_start_time, &selection_end_time) {
        if start > end {
            return Err("选课开始时间不能晚于结束时间");
        }
    }

    Ok(CourseScheduleCreateRequest {
        course_id,
        teacher_id,
        semester_id,
        class_name,
        max_students,
        classroom,
        schedule_time,
        selection_start_time,
        selection_end_time,
    })
}

fn schedule_status_from(value: &str) -> Option<ScheduleStatus> {
    ScheduleStatus::ALL.into_iter().find(|s| s.as_str() == value)
}

// =============================================================
// Pages
// =============================================================

/// Text input bound to one string field of a form signal.
fn field_input<T>(
    form: RwSignal<T>,
    placeholder: &'static str,
    get: fn(&T) -> &str,
    set: fn(&mut T, String),
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    view! {
        <input
            class="input"
            placeholder=placeholder
            prop:value=move || form.with(|f| get(f).to_owned())
            on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        />
    }
}

#[component]
pub fn AdminCoursesPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let page = RwSignal::new(0_u32);
    let version = RwSignal::new(0_u32);
    let listing = RwSignal::new(None::<Page<Course>>);
    let form = RwSignal::new(CourseForm::default());
    let busy = RwSignal::new(false);

    {
        let services = services.clone();
        Effect::new(move || {
            let req = PageRequest { page: page.get(), ..PageRequest::default() };
            version.track();
            let services = services.clone();
            spawn(async move {
                let result = services
                    .call(move |api, token| {
                        let req = req.clone();
                        async move { api.courses(&token, &req).await }
                    })
                    .await;
                match result {
                    Ok(p) => listing.set(Some(p)),
                    Err(e) => services.report(&e),
                }
            });
        });
    }

    let on_create = {
        let services = services.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let req = match form.with(validate_course_form) {
                Ok(req) => req,
                Err(msg) => {
                    services.notify(NoticeLevel::Warning, msg);
                    return;
                }
            };
            busy.set(true);
            let services = services.clone();
            spawn(async move {
                let result = services
                    .call(move |api, token| {
                        let req = req.clone();
                        async move { api.create_course(&token, &req).await }
                    })
                    .await;
                match result {
                    Ok(course) => {
                        services.notify(NoticeLevel::Success, format!("已创建课程 {}", course.course_name));
                        form.set(CourseForm::default());
                        version.update(|v| *v += 1);
                    }
                    Err(e) => services.report(&e),
                }
                busy.set(false);
            });
        }
    };

    let delete = move |course_id: i64| {
        let services = services.clone();
        spawn(async move {
            match services
                .call(move |api, token| async move { api.delete_course(&token, course_id).await })
                .await
            {
                Ok(()) => {
                    services.notify(NoticeLevel::Success, "课程已删除");
                    version.update(|v| *v += 1);
                }
                Err(e) => services.report(&e),
            }
        });
    };

    let rows = move || {
        let delete = delete.clone();
        listing
            .get()
            .map(|p| p.content)
            .unwrap_or_default()
            .into_iter()
            .map(move |c| {
                let id = c.id;
                let delete = delete.clone();
                view! {
                    <tr>
                        <td>{c.course_code.clone()}</td>
                        <td>{c.course_name.clone()}</td>
                        <td>{c.course_type.label()}</td>
                        <td>{credits_label(c.credits)}</td>
                        <td>{format!("{} ({}+{})", c.total_hours, c.theory_hours, c.practice_hours)}</td>
                        <td>{or_dash(c.department.as_deref())}</td>
                        <td>
                            <button class="btn btn--danger" on:click=move |_| delete(id)>"删除"</button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <h2 class="page__title">"课程管理"</h2>
            <form class="page__form" on:submit=on_create>
                <input
                    class="input"
                    placeholder="课程代码"
                    prop:value=move || form.with(|f| f.code.clone())
                    on:input=move |ev| form.update(|f| f.code = event_target_value(&ev).to_ascii_uppercase())
                />
                {field_input(form, "课程名称", |f| f.name.as_str(), |f, v| f.name = v)}
                <select class="input" on:change=move |ev| form.update(|f| f.course_type = course_type_from(&event_target_value(&ev)))>
                    <option value="REQUIRED">{CourseType::Required.label()}</option>
                    <option value="ELECTIVE">{CourseType::Elective.label()}</option>
                    <option value="PUBLIC">{CourseType::Public.label()}</option>
                </select>
                {field_input(form, "学分", |f| f.credits.as_str(), |f, v| f.credits = v)}
                {field_input(form, "总学时", |f| f.total_hours.as_str(), |f, v| f.total_hours = v)}
                {field_input(form, "理论学时", |f| f.theory_hours.as_str(), |f, v| f.theory_hours = v)}
                {field_input(form, "实践学时", |f| f.practice_hours.as_str(), |f, v| f.practice_hours = v)}
                {field_input(form, "开课院系", |f| f.department.as_str(), |f, v| f.department = v)}
                {field_input(form, "课程描述", |f| f.description.as_str(), |f, v| f.description = v)}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"新增课程"</button>
            </form>
            <table class="table">
                <thead>
                    <tr>
                        <th>"代码"</th>
                        <th>"课程"</th>
                        <th>"类型"</th>
                        <th>"学分"</th>
                        <th>"学时"</th>
                        <th>"院系"</th>
                        <th>"操作"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Pager page=page total_pages=Signal::derive(move || listing.with(|l| l.as_ref().map_or(0, |p| p.total_pages)))/>
        </div>
    }
}

#[component]
pub fn AdminCourseSchedulesPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let page = RwSignal::new(0_u32);
    let version = RwSignal::new(0_u32);
    let listing = RwSignal::new(None::<Page<CourseSchedule>>);
    let courses = RwSignal::new(Vec::<Course>::new());
    let form = RwSignal::new(ScheduleForm::default());
    let busy = RwSignal::new(false);

    {
        let services = services.clone();
        Effect::new(move || {
            let req = PageRequest { page: page.get(), ..PageRequest::default() };
            version.track();
            let services = services.clone();
            spawn(async move {
                let result = services
                    .call(move |api, token| {
                        let req = req.clone();
                        async move { api.schedules(&token, &req, None).await }
                    })
                    .await;
                match result {
                    Ok(p) => listing.set(Some(p)),
                    Err(e) => services.report(&e),
                }
            });
        });
    }

    {
        let services = services.clone();
        spawn(async move {
            let req = PageRequest { size: COURSE_PICKER_SIZE, ..PageRequest::default() };
            let result = services
                .call(move |api, token| {
                    let req = req.clone();
                    async move { api.courses(&token, &req).await }
                })
                .await;
            match result {
                Ok(p) => courses.set(p.content),
                Err(e) => services.report(&e),
            }
        });
    }

    let on_create = {
        let services = services.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let req = match form.with(validate_schedule_form) {
                Ok(req) => req,
                Err(msg) => {
                    services.notify(NoticeLevel::Warning, msg);
                    return;
                }
            };
            busy.set(true);
            let services = services.clone();
            spawn(async move {
                let result = services
                    .call(move |api, token| {
                        let req = req.clone();
                        async move { api.create_schedule(&token, &req).await }
                    })
                    .await;
                match result {
                    Ok(_) => {
                        services.notify(NoticeLevel::Success, "开课计划已创建");
                        form.set(ScheduleForm::default());
                        version.update(|v| *v += 1);
                    }
                    Err(e) => services.report(&e),
                }
                busy.set(false);
            });
        }
    };

    let set_status = {
        let services = services.clone();
        move |schedule_id: i64, status: ScheduleStatus| {
            let services = services.clone();
            spawn(async move {
                match services
                    .call(move |api, token| async move {
                        api.update_schedule_status(&token, schedule_id, status).await
                    })
                    .await
                {
                    Ok(()) => {
                        services.notify(NoticeLevel::Success, format!("状态已更新为{}", status.label()));
                        version.update(|v| *v += 1);
                    }
                    Err(e) => services.report(&e),
                }
            });
        }
    };

    let delete = move |schedule_id: i64| {
        let services = services.clone();
        spawn(async move {
            match services
                .call(move |api, token| async move { api.delete_schedule(&token, schedule_id).await })
                .await
            {
                Ok(()) => {
                    services.notify(NoticeLevel::Success, "开课计划已删除");
                    version.update(|v| *v += 1);
                }
                Err(e) => services.report(&e),
            }
        });
    };

    let course_options = move || {
        courses
            .get()
            .into_iter()
            .map(|c| view! { <option value=c.id.to_string()>{format!("{} {}", c.course_code, c.course_name)}</option> })
            .collect_view()
    };

    let rows = move || {
        let (set_status, delete) = (set_status.clone(), delete.clone());
        listing
            .get()
            .map(|p| p.content)
            .unwrap_or_default()
            .into_iter()
            .map(move |s| {
                let id = s.id;
                let current = s.status;
                let (set_status, delete) = (set_status.clone(), delete.clone());
                let statuses = ScheduleStatus::ALL
                    .into_iter()
                    .map(|st| view! { <option value=st.as_str() selected={st == current}>{st.label()}</option> })
                    .collect_view();
                view! {
                    <tr>
                        <td>{s.course_name.clone()}</td>
                        <td>{or_dash(s.class_name.as_deref())}</td>
                        <td>{s.teacher_name.clone()}</td>
                        <td>{s.semester_name.clone()}</td>
                        <td>{slots_label(s.schedule_time.as_deref())}</td>
                        <td>{or_dash(s.classroom.as_deref())}</td>
                        <td>{format!("{}/{}", s.current_students, s.max_students)}</td>
                        <td>
                            <select
                                class="input"
                                on:change=move |ev| {
                                    if let Some(status) = schedule_status_from(&event_target_value(&ev)) {
                                        set_status(id, status);
                                    }
                                }
                            >
                                {statuses}
                            </select>
                        </td>
                        <td>
                            <button class="btn btn--danger" on:click=move |_| delete(id)>"删除"</button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    let weekdays = (1..=7_u8)
        .map(|d| view! { <option value=d.to_string()>{weekday_label(d)}</option> })
        .collect_view();

    view! {
        <div class="page">
            <h2 class="page__title">"开课管理"</h2>
            <form class="page__form" on:submit=on_create>
                <select class="input" on:change=move |ev| form.update(|f| f.course_id = event_target_value(&ev))>
                    <option value="">"选择课程"</option>
                    {course_options}
                </select>
                {field_input(form, "教师ID", |f| f.teacher_id.as_str(), |f, v| f.teacher_id = v)}
                {field_input(form, "学期ID", |f| f.semester_id.as_str(), |f, v| f.semester_id = v)}
                {field_input(form, "班级名称", |f| f.class_name.as_str(), |f, v| f.class_name = v)}
                {field_input(form, "最大学生数", |f| f.max_students.as_str(), |f, v| f.max_students = v)}
                {field_input(form, "教室", |f| f.classroom.as_str(), |f, v| f.classroom = v)}
                <select class="input" on:change=move |ev| form.update(|f| f.day_of_week = event_target_value(&ev))>
                    <option value="">"星期"</option>
                    {weekdays}
                </select>
                <input
                    class="input"
                    type="time"
                    prop:value=move || form.with(|f| f.start_time.clone())
                    on:input=move |ev| form.update(|f| f.start_time = event_target_value(&ev))
                />
                <input
                    class="input"
                    type="time"
                    prop:value=move || form.with(|f| f.end_time.clone())
                    on:input=move |ev| form.update(|f| f.end_time = event_target_value(&ev))
                />
                <input
                    class="input"
                    type="datetime-local"
                    prop:value=move || form.with(|f| f.selection_start.clone())
                    on:input=move |ev| form.update(|f| f.selection_start = event_target_value(&ev))
                />
                <input
                    class="input"
                    type="datetime-local"
                    prop:value=move || form.with(|f| f.selection_end.clone())
                    on:input=move |ev| form.update(|f| f.selection_end = event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"新增开课"</button>
            </form>
            <table class="table">
                <thead>
                    <tr>
                        <th>"课程"</th>
                        <th>"班级"</th>
                        <th>"教师"</th>
                        <th>"学期"</th>
                        <th>"上课时间"</th>
                        <th>"教室"</th>
                        <th>"人数"</th>
                        <th>"状态"</th>
                        <th>"操作"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Pager page=page total_pages=Signal::derive(move || listing.with(|l| l.as_ref().map_or(0, |p| p.total_pages)))/>
        </div>
    }
}

#[component]
pub fn AdminStudentsPage() -> impl IntoView {
    view! {
        <div class="page">
            <h2 class="page__title">"学生管理"</h2>
            <p class="page__empty">"暂无学生管理接口"</p>
        </div>
    }
}

#[component]
pub fn AdminTeachersPage() -> impl IntoView {
    view! {
        <div class="page">
            <h2 class="page__title">"教师管理"</h2>
            <p class="page__empty">"暂无教师管理接口"</p>
        </div>
    }
}
