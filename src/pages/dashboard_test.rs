use super::*;

fn profile(role: Role) -> Profile {
    Profile {
        id: 1,
        username: "u1".to_owned(),
        email: None,
        real_name: "张三".to_owned(),
        role,
        student_number: Some("2024001".to_owned()),
        grade: None,
        major: None,
        class_name: None,
        teacher_number: Some("T01".to_owned()),
        department: None,
        title: None,
    }
}

#[test]
fn student_rows_show_student_fields() {
    let rows = profile_rows(&profile(Role::Student));
    let labels: Vec<_> = rows.iter().map(|(l, _)| *l).collect();
    assert_eq!(labels, ["用户名", "角色", "学号", "专业", "班级", "邮箱"]);
    assert_eq!(rows[2].1, "2024001");
    assert_eq!(rows[3].1, "-");
}

#[test]
fn teacher_rows_show_teacher_fields() {
    let rows = profile_rows(&profile(Role::Teacher));
    assert!(rows.iter().any(|(l, v)| *l == "工号" && v == "T01"));
    assert!(!rows.iter().any(|(l, _)| *l == "学号"));
}

#[test]
fn admin_rows_are_minimal() {
    let rows = profile_rows(&profile(Role::Admin));
    assert_eq!(rows.len(), 3);
}
