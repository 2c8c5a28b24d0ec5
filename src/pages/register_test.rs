use super::*;

fn student_form() -> RegisterForm {
    let mut form = RegisterForm::new(Role::Student);
    form.username = "alice_01".to_owned();
    form.password = "Passw0rd".to_owned();
    form.confirm = "Passw0rd".to_owned();
    form.real_name = "张三".to_owned();
    form.number = "2024001".to_owned();
    form
}

#[test]
fn valid_student_form_builds_request() {
    let mut form = student_form();
    form.major = " 计算机 ".to_owned();
    form.email = "a@b.com".to_owned();

    let req = validate_register_form(&form).expect("valid form");
    assert_eq!(req.role, Role::Student);
    assert_eq!(req.username, "alice_01");
    assert_eq!(req.student_number.as_deref(), Some("2024001"));
    assert_eq!(req.major.as_deref(), Some("计算机"));
    assert_eq!(req.email.as_deref(), Some("a@b.com"));
    assert_eq!(req.phone, None);
    assert_eq!(req.teacher_number, None);
}

#[test]
fn teacher_form_uses_teacher_number() {
    let mut form = student_form();
    form.role = Role::Teacher;
    form.department = "数学系".to_owned();
    form.major = "ignored".to_owned();

    let req = validate_register_form(&form).expect("valid form");
    assert_eq!(req.teacher_number.as_deref(), Some("2024001"));
    assert_eq!(req.student_number, None);
    assert_eq!(req.major, None);
    assert_eq!(req.department.as_deref(), Some("数学系"));
}

#[test]
fn username_rules() {
    let mut form = student_form();
    form.username = "  ".to_owned();
    assert_eq!(validate_register_form(&form), Err("用户名不能为空"));
    form.username = "abc".to_owned();
    assert_eq!(validate_register_form(&form), Err("用户名只能包含字母、数字、下划线，长度4-20位"));
    form.username = "bad-name".to_owned();
    assert_eq!(validate_register_form(&form), Err("用户名只能包含字母、数字、下划线，长度4-20位"));
}

#[test]
fn password_needs_mixed_case_and_digit() {
    assert!(valid_password("Passw0rd"));
    assert!(valid_password("Pa$$w0rd!"));
    assert!(!valid_password("password1"));
    assert!(!valid_password("PASSWORD1"));
    assert!(!valid_password("Password"));
    assert!(!valid_password("Pw0rd"));
    assert!(!valid_password("Passw0rd#"));
}

#[test]
fn password_confirmation_must_match() {
    let mut form = student_form();
    form.confirm = "Passw0rdX".to_owned();
    assert_eq!(validate_register_form(&form), Err("两次输入的密码不一致"));
}

#[test]
fn optional_contact_fields_are_checked_when_present() {
    let mut form = student_form();
    form.email = "not-an-email".to_owned();
    assert_eq!(validate_register_form(&form), Err("邮箱格式不正确"));

    form.email.clear();
    form.phone = "12345678901".to_owned();
    assert_eq!(validate_register_form(&form), Err("手机号格式不正确"));

    form.phone = "13812345678".to_owned();
    let req = validate_register_form(&form).expect("valid form");
    assert_eq!(req.phone.as_deref(), Some("13812345678"));
}

#[test]
fn role_number_is_required() {
    let mut form = student_form();
    form.number = " ".to_owned();
    assert_eq!(validate_register_form(&form), Err("学号不能为空"));
    form.role = Role::Teacher;
    assert_eq!(validate_register_form(&form), Err("工号不能为空"));
}
