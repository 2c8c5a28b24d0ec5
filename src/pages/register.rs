//! Account registration page for students and teachers.
//!
//! Input is checked against the same rules the backend enforces so most
//! mistakes are reported before a round trip.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::{Services, spawn};
use crate::net::types::{Gender, RegisterRequest, Role};
use crate::router::routes::LOGIN_PATH;
use crate::state::notice::NoticeLevel;
use crate::state::session::Session;

const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Raw form input, one string per field.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RegisterForm {
    role: Role,
    username: String,
    password: String,
    confirm: String,
    real_name: String,
    email: String,
    phone: String,
    gender: Option<Gender>,
    number: String,
    department: String,
    major: String,
    grade: String,
    class_name: String,
    title: String,
}

impl RegisterForm {
    fn new(role: Role) -> Self {
        Self {
            role,
            username: String::new(),
            password: String::new(),
            confirm: String::new(),
            real_name: String::new(),
            email: String::new(),
            phone: String::new(),
            gender: None,
            number: String::new(),
            department: String::new(),
            major: String::new(),
            grade: String::new(),
            class_name: String::new(),
            title: String::new(),
        }
    }
}

fn valid_username(s: &str) -> bool {
    (4..=20).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn valid_password(s: &str) -> bool {
    (8..=20).contains(&s.chars().count())
        && s.chars().all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c))
        && s.chars().any(|c| c.is_ascii_lowercase())
        && s.chars().any(|c| c.is_ascii_uppercase())
        && s.chars().any(|c| c.is_ascii_digit())
}

fn valid_phone(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 11
        && bytes[0] == b'1'
        && (b'3'..=b'9').contains(&bytes[1])
        && bytes.iter().all(u8::is_ascii_digit)
}

fn valid_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

fn optional(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}

fn validate_register_form(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let username = form.username.trim();
    if username.is_empty() {
        return Err("用户名不能为空");
    }
    if !valid_username(username) {
        return Err("用户名只能包含字母、数字、下划线，长度4-20位");
    }
    if form.password.is_empty() {
        return Err("密码不能为空");
    }
    if !valid_password(&form.password) {
        return Err("密码必须包含大小写字母和数字，长度8-20位");
    }
    if form.password != form.confirm {
        return Err("两次输入的密码不一致");
    }
    let real_name = form.real_name.trim();
    if real_name.is_empty() {
        return Err("真实姓名不能为空");
    }
    let email = optional(&form.email);
    if email.as_deref().is_some_and(|e| !valid_email(e)) {
        return Err("邮箱格式不正确");
    }
    let phone = optional(&form.phone);
    if phone.as_deref().is_some_and(|p| !valid_phone(p)) {
        return Err("手机号格式不正确");
    }

    let mut req = RegisterRequest::new(form.role);
    req.username = username.to_owned();
    req.password.clone_from(&form.password);
    req.real_name = real_name.to_owned();
    req.email = email;
    req.phone = phone;
    req.gender = form.gender;

    let number = optional(&form.number);
    match form.role {
        Role::Student => {
            if number.is_none() {
                return Err("学号不能为空");
            }
            req.student_number = number;
            req.major = optional(&form.major);
            req.grade = optional(&form.grade);
            req.class_name = optional(&form.class_name);
        }
        Role::Teacher => {
            if number.is_none() {
                return Err("工号不能为空");
            }
            req.teacher_number = number;
            req.department = optional(&form.department);
            req.title = optional(&form.title);
        }
        Role::Admin => {}
    }
    Ok(req)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::new(Role::Student));
    let info = RwSignal::new(String::new());
    let busy = move || session.with(|s| s.loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let req = match form.with(validate_register_form) {
            Ok(req) => req,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());

        let services = services.clone();
        let navigate = navigate.clone();
        spawn(async move {
            match services.session.register(req).await {
                Ok(()) => {
                    services.notify(NoticeLevel::Success, "注册成功，请登录");
                    navigate(LOGIN_PATH, leptos_router::NavigateOptions::default());
                }
                Err(e) => info.set(e.message().to_owned()),
            }
        });
    };

    let is_student = move || form.with(|f| f.role == Role::Student);

    view! {
        <div class="login-page">
            <div class="login-card login-card--wide">
                <h1>"用户注册"</h1>
                <form class="login-form" on:submit=on_submit>
                    <div class="login-role">
                        <label>
                            <input
                                type="radio"
                                name="role"
                                prop:checked=is_student
                                on:change=move |_| form.update(|f| f.role = Role::Student)
                            />
                            "学生"
                        </label>
                        <label>
                            <input
                                type="radio"
                                name="role"
                                prop:checked=move || !is_student()
                                on:change=move |_| form.update(|f| f.role = Role::Teacher)
                            />
                            "教师"
                        </label>
                    </div>
                    <input
                        class="login-input"
                        placeholder="用户名"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="密码"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="确认密码"
                        prop:value=move || form.with(|f| f.confirm.clone())
                        on:input=move |ev| form.update(|f| f.confirm = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        placeholder="真实姓名"
                        prop:value=move || form.with(|f| f.real_name.clone())
                        on:input=move |ev| form.update(|f| f.real_name = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="邮箱（选填）"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        placeholder="手机号（选填）"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        on:change=move |ev| {
                            let gender = match event_target_value(&ev).as_str() {
                                "MALE" => Some(Gender::Male),
                                "FEMALE" => Some(Gender::Female),
                                _ => None,
                            };
                            form.update(|f| f.gender = gender);
                        }
                    >
                        <option value="">"性别（选填）"</option>
                        <option value="MALE">"男"</option>
                        <option value="FEMALE">"女"</option>
                    </select>
                    <input
                        class="login-input"
                        placeholder=move || if is_student() { "学号" } else { "工号" }
                        prop:value=move || form.with(|f| f.number.clone())
                        on:input=move |ev| form.update(|f| f.number = event_target_value(&ev))
                    />
                    <Show
                        when=is_student
                        fallback=move || view! {
                            <input
                                class="login-input"
                                placeholder="院系"
                                prop:value=move || form.with(|f| f.department.clone())
                                on:input=move |ev| form.update(|f| f.department = event_target_value(&ev))
                            />
                            <input
                                class="login-input"
                                placeholder="职称"
                                prop:value=move || form.with(|f| f.title.clone())
                                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                            />
                        }
                    >
                        <input
                            class="login-input"
                            placeholder="专业"
                            prop:value=move || form.with(|f| f.major.clone())
                            on:input=move |ev| form.update(|f| f.major = event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            placeholder="年级"
                            prop:value=move || form.with(|f| f.grade.clone())
                            on:input=move |ev| form.update(|f| f.grade = event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            placeholder="班级"
                            prop:value=move || form.with(|f| f.class_name.clone())
                            on:input=move |ev| form.update(|f| f.class_name = event_target_value(&ev))
                        />
                    </Show>
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "提交中..." } else { "注册" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "已有账号？" <A href=LOGIN_PATH>"返回登录"</A>
                </p>
            </div>
        </div>
    }
}
