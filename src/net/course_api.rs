//! Course catalog, selection, and administration endpoints.
//!
//! Every call takes the bearer token explicitly; pages run them through
//! [`crate::state::session::SessionStore::authorized`] so an expired token is
//! renewed transparently.

#[cfg(test)]
#[path = "course_api_test.rs"]
mod course_api_test;

use super::error::ApiError;
use super::http::{HttpClient, Method, json_body};
use super::types::{
    Course, CourseCreateRequest, CourseSchedule, CourseScheduleCreateRequest, CourseSelection,
    CourseSelectionRequest, Page, PageRequest, ScheduleStatus,
};

const AVAILABLE_PATH: &str = "/course-selection/available";
const SELECT_PATH: &str = "/course-selection/select";
const MY_SELECTIONS_PATH: &str = "/course-selection/my-courses";
const TEACHER_COURSES_PATH: &str = "/teacher/my-courses";
const ADMIN_COURSES_PATH: &str = "/admin/course-management/courses";
const ADMIN_SCHEDULES_PATH: &str = "/admin/course-management/course-schedules";

fn drop_path(schedule_id: i64) -> String {
    format!("/course-selection/drop/{schedule_id}")
}

fn roster_path(schedule_id: i64) -> String {
    format!("/course-selection/course/{schedule_id}/students")
}

fn course_path(course_id: i64) -> String {
    format!("{ADMIN_COURSES_PATH}/{course_id}")
}

fn schedule_path(schedule_id: i64) -> String {
    format!("{ADMIN_SCHEDULES_PATH}/{schedule_id}")
}

fn schedule_status_path(schedule_id: i64) -> String {
    format!("{ADMIN_SCHEDULES_PATH}/{schedule_id}/status")
}

fn available_query(page: &PageRequest, keyword: Option<&str>) -> Vec<(&'static str, String)> {
    let mut query = page.query_pairs();
    if let Some(keyword) = keyword.map(str::trim).filter(|k| !k.is_empty()) {
        query.push(("keyword", keyword.to_owned()));
    }
    query
}

fn semester_query(semester_id: Option<i64>) -> Vec<(&'static str, String)> {
    semester_id.map(|id| vec![("semesterId", id.to_string())]).unwrap_or_default()
}

#[derive(Clone, Debug)]
pub struct CourseApi {
    http: HttpClient,
}

impl CourseApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    // =============================================================
    // Student
    // =============================================================

    /// Schedules open for selection, optionally filtered by `keyword`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure.
    pub async fn available(
        &self,
        token: &str,
        page: &PageRequest,
        keyword: Option<&str>,
    ) -> Result<Page<CourseSchedule>, ApiError> {
        self.http
            .send(Method::Get, AVAILABLE_PATH, &available_query(page, keyword), None, Some(token))
            .await
    }

    /// # Errors
    ///
    /// Returns the classified [`ApiError`], e.g. `Server` for a full course or
    /// a schedule conflict.
    pub async fn select(&self, token: &str, schedule_id: i64) -> Result<(), ApiError> {
        let body = json_body(&CourseSelectionRequest { course_schedule_id: schedule_id })?;
        self.http.send(Method::Post, SELECT_PATH, &[], Some(body), Some(token)).await
    }

    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure.
    pub async fn drop_course(&self, token: &str, schedule_id: i64) -> Result<(), ApiError> {
        self.http.send(Method::Post, &drop_path(schedule_id), &[], None, Some(token)).await
    }

    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure.
    pub async fn my_selections(&self, token: &str, page: &PageRequest) -> Result<Page<CourseSelection>, ApiError> {
        self.http
            .send(Method::Get, MY_SELECTIONS_PATH, &page.query_pairs(), None, Some(token))
            .await
    }

    // =============================================================
    // Teacher
    // =============================================================

    /// Students enrolled in one schedule.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure.
    pub async fn roster(
        &self,
        token: &str,
        schedule_id: i64,
        page: &PageRequest,
    ) -> Result<Page<CourseSelection>, ApiError> {
        self.http
            .send(Method::Get, &roster_path(schedule_id), &page.query_pairs(), None, Some(token))
            .await
    }

    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure.
    pub async fn teacher_courses(&self, token: &str, semester_id: Option<i64>) -> Result<Vec<CourseSchedule>, ApiError> {
        self.http
            .send(Method::Get, TEACHER_COURSES_PATH, &semester_query(semester_id), None, Some(token))
            .await
    }

    // =============================================================
    // Admin
    // =============================================================

    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure.
    pub async fn courses(&self, token: &str, page: &PageRequest) -> Result<Page<Course>, ApiError> {
        self.http
            .send(Method::Get, ADMIN_COURSES_PATH, &page.query_pairs(), None, Some(token))
            .await
    }

    /// # Errors
    ///
    /// Returns `Conflict` for a duplicate course code, or another [`ApiError`].
    pub async fn create_course(&self, token: &str, req: &CourseCreateRequest) -> Result<Course, ApiError> {
        self.http
            .send(Method::Post, ADMIN_COURSES_PATH, &[], Some(json_body(req)?), Some(token))
            .await
    }

    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure.
    pub async fn delete_course(&self, token: &str, course_id: i64) -> Result<(), ApiError> {
        self.http.send(Method::Delete, &course_path(course_id), &[], None, Some(token)).await
    }

    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure.
    pub async fn schedules(
        &self,
        token: &str,
        page: &PageRequest,
        semester_id: Option<i64>,
    ) -> Result<Page<CourseSchedule>, ApiError> {
        let mut query = semester_query(semester_id);
        query.extend(page.query_pairs());
        self.http.send(Method::Get, ADMIN_SCHEDULES_PATH, &query, None, Some(token)).await
    }

    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure.
    pub async fn create_schedule(
        &self,
        token: &str,
        req: &CourseScheduleCreateRequest,
    ) -> Result<CourseSchedule, ApiError> {
        self.http
            .send(Method::Post, ADMIN_SCHEDULES_PATH, &[], Some(json_body(req)?), Some(token))
            .await
    }

    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure.
    pub async fn update_schedule_status(
        &self,
        token: &str,
        schedule_id: i64,
        status: ScheduleStatus,
    ) -> Result<(), ApiError> {
        let query = [("status", status.as_str().to_owned())];
        self.http
            .send(Method::Put, &schedule_status_path(schedule_id), &query, None, Some(token))
            .await
    }

    /// # Errors
    ///
    /// Returns the classified [`ApiError`] on failure.
    pub async fn delete_schedule(&self, token: &str, schedule_id: i64) -> Result<(), ApiError> {
        self.http.send(Method::Delete, &schedule_path(schedule_id), &[], None, Some(token)).await
    }
}
