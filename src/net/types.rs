//! Wire DTOs for the course-selection REST backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde round-trips stay
//! lossless. Optional backend fields are `Option` and skipped when absent so
//! request bodies never send explicit `null`s the backend would reject.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role; also the unit of route access control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "学生",
            Self::Teacher => "教师",
            Self::Admin => "管理员",
        }
    }
}

/// The authenticated user's descriptive record, as returned by `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub real_name: String,
    pub role: Role,

    // Student-only fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    // Teacher-only fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Profile {
    /// Real name, falling back to the username when the backend left it blank.
    pub fn display_name(&self) -> &str {
        if self.real_name.trim().is_empty() { &self.username } else { &self.real_name }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `/auth/login` and `/auth/refresh`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
    pub user_info: Profile,
}

fn default_token_type() -> String {
    "Bearer".to_owned()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

/// Body of `/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub real_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub role: Role,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_location: Option<String>,
}

impl RegisterRequest {
    /// Blank registration form for `role`.
    pub fn new(role: Role) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            email: None,
            phone: None,
            real_name: String::new(),
            gender: None,
            role,
            student_number: None,
            grade: None,
            major: None,
            class_name: None,
            enrollment_year: None,
            teacher_number: None,
            department: None,
            title: None,
            research_direction: None,
            office_location: None,
        }
    }
}

// =============================================================
// Paging
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Query parameters accepted by every paged listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Option<String>,
    pub direction: Option<SortDirection>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 10, sort: None, direction: None }
    }
}

impl PageRequest {
    /// Query pairs in the order the backend documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(direction) = self.direction {
            pairs.push(("direction", direction.as_str().to_owned()));
        }
        pairs
    }
}

/// One page of a paged listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub number_of_elements: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub empty: bool,
}

// =============================================================
// Courses
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseType {
    Required,
    Elective,
    Public,
}

impl CourseType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Required => "必修",
            Self::Elective => "选修",
            Self::Public => "公共",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    Active,
    Inactive,
}

/// Lifecycle of a course schedule's selection window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatus {
    Pending,
    Open,
    Closed,
    Cancelled,
}

impl ScheduleStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Open, Self::Closed, Self::Cancelled];

    /// Wire name, as used in the `status` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "未开放",
            Self::Open => "选课中",
            Self::Closed => "已结束",
            Self::Cancelled => "已取消",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionStatus {
    Selected,
    Dropped,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub course_code: String,
    pub course_name: String,
    pub course_type: CourseType,
    pub credits: f64,
    pub total_hours: u32,
    #[serde(default)]
    pub theory_hours: u32,
    #[serde(default)]
    pub practice_hours: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub prerequisite_courses: Option<Vec<i64>>,
    #[serde(default)]
    pub department: Option<String>,
    pub status: CourseStatus,
}

/// A course offered by a teacher in a semester, with seat counts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSchedule {
    pub id: i64,
    #[serde(default)]
    pub class_name: Option<String>,
    pub max_students: u32,
    #[serde(default)]
    pub current_students: u32,
    #[serde(default)]
    pub classroom: Option<String>,
    #[serde(default)]
    pub schedule_time: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub selection_start_time: Option<String>,
    #[serde(default)]
    pub selection_end_time: Option<String>,
    pub status: ScheduleStatus,

    pub course_id: i64,
    pub course_code: String,
    pub course_name: String,
    pub course_type: CourseType,
    pub credits: f64,
    #[serde(default)]
    pub total_hours: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub department: Option<String>,

    pub teacher_id: i64,
    pub teacher_name: String,
    #[serde(default)]
    pub teacher_title: Option<String>,
    #[serde(default)]
    pub teacher_department: Option<String>,

    pub semester_id: i64,
    pub semester_name: String,

    // Student-perspective flags, only filled on `/course-selection/available`.
    #[serde(default)]
    pub is_selected: Option<bool>,
    #[serde(default)]
    pub can_select: Option<bool>,
    #[serde(default)]
    pub selection_message: Option<String>,
}

impl CourseSchedule {
    pub fn remaining_seats(&self) -> u32 {
        self.max_students.saturating_sub(self.current_students)
    }
}

/// A student's enrollment in a course schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSelection {
    pub id: i64,
    pub selection_time: String,
    pub status: SelectionStatus,
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default)]
    pub grade_point: Option<f64>,
    #[serde(default)]
    pub is_passed: Option<bool>,

    pub course_schedule_id: i64,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub classroom: Option<String>,
    #[serde(default)]
    pub schedule_time: Option<Vec<serde_json::Value>>,

    pub course_id: i64,
    pub course_code: String,
    pub course_name: String,
    pub course_type: CourseType,
    pub credits: f64,
    #[serde(default)]
    pub total_hours: u32,
    #[serde(default)]
    pub description: Option<String>,

    pub teacher_id: i64,
    pub teacher_name: String,
    #[serde(default)]
    pub teacher_title: Option<String>,

    pub semester_id: i64,
    pub semester_name: String,

    // Teacher-perspective fields, only filled on the per-schedule roster.
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub student_number: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub student_major: Option<String>,
    #[serde(default)]
    pub student_class: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCreateRequest {
    pub course_code: String,
    pub course_name: String,
    pub course_type: CourseType,
    pub credits: f64,
    pub total_hours: u32,
    pub theory_hours: u32,
    pub practice_hours: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisite_courses: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseScheduleCreateRequest {
    pub course_id: i64,
    pub teacher_id: i64,
    pub semester_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub max_students: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classroom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_time: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_end_time: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSelectionRequest {
    pub course_schedule_id: i64,
}
