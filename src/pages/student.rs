//! Student pages: course selection, enrolled courses, and weekly schedule.

#[cfg(test)]
#[path = "student_test.rs"]
mod student_test;

use leptos::prelude::*;

use crate::app::{Services, spawn};
use crate::components::pager::Pager;
use crate::net::types::{CourseSchedule, CourseSelection, Page, PageRequest, ScheduleStatus, SelectionStatus};
use crate::pages::format::{TimeSlot, credits_label, or_dash, slots_label, time_slots, weekday_label};
use crate::state::notice::NoticeLevel;

/// Enrollments fetched for the timetable; one page holds a full semester.
const SCHEDULE_PAGE_SIZE: u32 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
enum SelectState {
    Selected,
    Full,
    Unavailable(String),
    Available,
}

fn select_state(s: &CourseSchedule) -> SelectState {
    if s.is_selected == Some(true) {
        return SelectState::Selected;
    }
    if s.can_select == Some(false) {
        return SelectState::Unavailable(s.selection_message.clone().unwrap_or_else(|| "不可选".to_owned()));
    }
    if s.remaining_seats() == 0 {
        return SelectState::Full;
    }
    if s.status != ScheduleStatus::Open {
        return SelectState::Unavailable(s.status.label().to_owned());
    }
    SelectState::Available
}

fn total_credits(selections: &[CourseSelection]) -> f64 {
    selections
        .iter()
        .filter(|s| s.status == SelectionStatus::Selected)
        .map(|s| s.credits)
        .sum()
}

/// A course placed in the weekly timetable.
#[derive(Clone, Debug, PartialEq, Eq)]
struct TimetableEntry {
    slot: TimeSlot,
    course_name: String,
    classroom: String,
}

/// Active enrollments bucketed by weekday (index 0 = Monday), each day
/// sorted by start time.
fn timetable(selections: &[CourseSelection]) -> [Vec<TimetableEntry>; 7] {
    let mut days: [Vec<TimetableEntry>; 7] = Default::default();
    for sel in selections.iter().filter(|s| s.status == SelectionStatus::Selected) {
        for slot in time_slots(sel.schedule_time.as_deref()) {
            let day = usize::from(slot.day_of_week - 1);
            days[day].push(TimetableEntry {
                slot,
                course_name: sel.course_name.clone(),
                classroom: or_dash(sel.classroom.as_deref()),
            });
        }
    }
    for entries in &mut days {
        entries.sort_by(|a, b| a.slot.start_time.cmp(&b.slot.start_time));
    }
    days
}

#[component]
pub fn CourseSelectionPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let keyword = RwSignal::new(String::new());
    let applied = RwSignal::new(String::new());
    let page = RwSignal::new(0_u32);
    let version = RwSignal::new(0_u32);
    let listing = RwSignal::new(None::<Page<CourseSchedule>>);
    let pending = RwSignal::new(None::<i64>);

    {
        let services = services.clone();
        Effect::new(move || {
            let req = PageRequest { page: page.get(), ..PageRequest::default() };
            let kw = applied.get();
            version.track();
            let services = services.clone();
            spawn(async move {
                let result = services
                    .call(move |api, token| {
                        let (req, kw) = (req.clone(), kw.clone());
                        async move { api.available(&token, &req, Some(&kw)).await }
                    })
                    .await;
                match result {
                    Ok(p) => listing.set(Some(p)),
                    Err(e) => services.report(&e),
                }
            });
        });
    }

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        page.set(0);
        applied.set(keyword.get());
    };

    let select = move |id: i64| {
        if pending.get().is_some() {
            return;
        }
        pending.set(Some(id));
        let services = services.clone();
        spawn(async move {
            match services.call(move |api, token| async move { api.select(&token, id).await }).await {
                Ok(()) => {
                    services.notify(NoticeLevel::Success, "选课成功");
                    version.update(|v| *v += 1);
                }
                Err(e) => services.report(&e),
            }
            pending.set(None);
        });
    };

    let rows = move || {
        let select = select.clone();
        listing
            .get()
            .map(|p| p.content)
            .unwrap_or_default()
            .into_iter()
            .map(move |s| {
                let id = s.id;
                let select = select.clone();
                let action = match select_state(&s) {
                    SelectState::Selected => view! { <span class="tag tag--ok">"已选"</span> }.into_any(),
                    SelectState::Full => view! { <span class="tag tag--muted">"已满"</span> }.into_any(),
                    SelectState::Unavailable(msg) => view! { <span class="tag tag--muted">{msg}</span> }.into_any(),
                    SelectState::Available => view! {
                        <button
                            class="btn btn--primary"
                            disabled=move || pending.get().is_some()
                            on:click=move |_| select(id)
                        >
                            {move || if pending.get() == Some(id) { "提交中..." } else { "选课" }}
                        </button>
                    }
                    .into_any(),
                };
                view! {
                    <tr>
                        <td>{s.course_code.clone()}</td>
                        <td>{s.course_name.clone()}</td>
                        <td>{s.course_type.label()}</td>
                        <td>{credits_label(s.credits)}</td>
                        <td>{s.teacher_name.clone()}</td>
                        <td>{slots_label(s.schedule_time.as_deref())}</td>
                        <td>{or_dash(s.classroom.as_deref())}</td>
                        <td>{format!("{}/{}", s.current_students, s.max_students)}</td>
                        <td>{action}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <h2 class="page__title">"选课"</h2>
            <form class="page__toolbar" on:submit=on_search>
                <input
                    class="input"
                    placeholder="课程名称 / 代码 / 教师"
                    prop:value=move || keyword.get()
                    on:input=move |ev| keyword.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"搜索"</button>
            </form>
            <table class="table">
                <thead>
                    <tr>
                        <th>"代码"</th>
                        <th>"课程"</th>
                        <th>"类型"</th>
                        <th>"学分"</th>
                        <th>"教师"</th>
                        <th>"上课时间"</th>
                        <th>"教室"</th>
                        <th>"人数"</th>
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
pub fn MyCoursesPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let page = RwSignal::new(0_u32);
    let version = RwSignal::new(0_u32);
    let listing = RwSignal::new(None::<Page<CourseSelection>>);
    let pending = RwSignal::new(None::<i64>);

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
                        async move { api.my_selections(&token, &req).await }
                    })
                    .await;
                match result {
                    Ok(p) => listing.set(Some(p)),
                    Err(e) => services.report(&e),
                }
            });
        });
    }

    let drop_course = move |schedule_id: i64| {
        if pending.get().is_some() {
            return;
        }
        pending.set(Some(schedule_id));
        let services = services.clone();
        spawn(async move {
            match services
                .call(move |api, token| async move { api.drop_course(&token, schedule_id).await })
                .await
            {
                Ok(()) => {
                    services.notify(NoticeLevel::Success, "退课成功");
                    version.update(|v| *v += 1);
                }
                Err(e) => services.report(&e),
            }
            pending.set(None);
        });
    };

    let credits = move || listing.with(|l| credits_label(l.as_ref().map_or(0.0, |p| total_credits(&p.content))));

    let rows = move || {
        let drop_course = drop_course.clone();
        listing
            .get()
            .map(|p| p.content)
            .unwrap_or_default()
            .into_iter()
            .map(move |s| {
                let schedule_id = s.course_schedule_id;
                let drop_course = drop_course.clone();
                let action = if s.status == SelectionStatus::Selected {
                    view! {
                        <button
                            class="btn btn--danger"
                            disabled=move || pending.get().is_some()
                            on:click=move |_| drop_course(schedule_id)
                        >
                            "退课"
                        </button>
                    }
                    .into_any()
                } else {
                    view! { <span class="tag tag--muted">{selection_status_label(s.status)}</span> }.into_any()
                };
                view! {
                    <tr>
                        <td>{s.course_code.clone()}</td>
                        <td>{s.course_name.clone()}</td>
                        <td>{credits_label(s.credits)}</td>
                        <td>{s.teacher_name.clone()}</td>
                        <td>{slots_label(s.schedule_time.as_deref())}</td>
                        <td>{or_dash(s.classroom.as_deref())}</td>
                        <td>{s.semester_name.clone()}</td>
                        <td>{s.grade.map_or_else(|| "-".to_owned(), |g| format!("{g:.1}"))}</td>
                        <td>{action}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <h2 class="page__title">"我的课程"</h2>
            <p class="page__summary">"本页已选学分：" {credits}</p>
            <table class="table">
                <thead>
                    <tr>
                        <th>"代码"</th>
                        <th>"课程"</th>
                        <th>"学分"</th>
                        <th>"教师"</th>
                        <th>"上课时间"</th>
                        <th>"教室"</th>
                        <th>"学期"</th>
                        <th>"成绩"</th>
                        <th>"操作"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Pager page=page total_pages=Signal::derive(move || listing.with(|l| l.as_ref().map_or(0, |p| p.total_pages)))/>
        </div>
    }
}

fn selection_status_label(status: SelectionStatus) -> &'static str {
    match status {
        SelectionStatus::Selected => "已选",
        SelectionStatus::Dropped => "已退",
        SelectionStatus::Completed => "已修完",
    }
}

#[component]
pub fn SchedulePage() -> impl IntoView {
    let services = expect_context::<Services>();
    let selections = RwSignal::new(Vec::<CourseSelection>::new());

    spawn(async move {
        let req = PageRequest { size: SCHEDULE_PAGE_SIZE, ..PageRequest::default() };
        let result = services
            .call(move |api, token| {
                let req = req.clone();
                async move { api.my_selections(&token, &req).await }
            })
            .await;
        match result {
            Ok(p) => selections.set(p.content),
            Err(e) => services.report(&e),
        }
    });

    let columns = move || {
        selections
            .with(|s| timetable(s))
            .into_iter()
            .enumerate()
            .map(|(i, entries)| {
                let day = u8::try_from(i + 1).map_or("?", weekday_label);
                let cells = entries
                    .into_iter()
                    .map(|e| {
                        view! {
                            <div class="timetable__entry">
                                <strong>{e.course_name}</strong>
                                <span>{e.slot.span()}</span>
                                <span>{e.classroom}</span>
                            </div>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="timetable__day">
                        <h3 class="timetable__weekday">{day}</h3>
                        {cells}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <h2 class="page__title">"课程表"</h2>
            <p class="page__summary">
                "已选学分：" {move || selections.with(|s| credits_label(total_credits(s)))}
            </p>
            <div class="timetable">{columns}</div>
        </div>
    }
}
