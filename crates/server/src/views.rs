//! Server-rendered HTML pages. Four small static layouts; markup is built
//! with `format!` and every interpolated value goes through `escape_html`.

use crate::encode::{escape_html, percent_encode};
use crate::notice::{Category, Notice};
use models::course::Course;

fn layout(title: &str, notice: Option<&Notice>, body: &str) -> String {
    let banner = notice.map_or_else(String::new, |notice| {
        let class = match notice.category {
            Category::Success => "alert alert-success",
            Category::Danger => "alert alert-danger",
        };
        format!(
            r#"<div class="{class}" role="alert">{}</div>"#,
            escape_html(&notice.message)
        )
    });

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title} - Course Catalog</title>
</head>
<body>
  <nav>
    <a href="/">Home</a> |
    <a href="/catalog">Course Catalog</a> |
    <a href="/add_course">Add Course</a>
  </nav>
  {banner}
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

pub fn index_page() -> String {
    layout(
        "Home",
        None,
        r#"    <h1>Course Catalog</h1>
    <p>Browse the <a href="/catalog">course catalog</a> or <a href="/add_course">add a new course</a>.</p>"#,
    )
}

pub fn catalog_page(courses: &[Course], notice: Option<&Notice>) -> String {
    let body = if courses.is_empty() {
        "    <h1>Course Catalog</h1>\n    <p>No courses in the catalog yet.</p>".to_string()
    } else {
        let rows: String = courses
            .iter()
            .map(|course| {
                format!(
                    "      <tr><td><a href=\"/course/{href}\">{code}</a></td><td>{name}</td><td>{instructor}</td></tr>\n",
                    href = percent_encode(&course.code),
                    code = escape_html(&course.code),
                    name = escape_html(&course.coursename),
                    instructor = escape_html(&course.instructor),
                )
            })
            .collect();

        format!(
            "    <h1>Course Catalog</h1>\n    <table>\n      <tr><th>Code</th><th>Course Name</th><th>Instructor</th></tr>\n{rows}    </table>"
        )
    };

    layout("Course Catalog", notice, &body)
}

pub fn course_page(course: &Course) -> String {
    let field = |label: &str, value: &str| {
        format!(
            "      <dt>{label}</dt><dd>{}</dd>\n",
            escape_html(value)
        )
    };

    let body = format!(
        "    <h1>{code}: {name}</h1>\n    <dl>\n{fields}    </dl>",
        code = escape_html(&course.code),
        name = escape_html(&course.coursename),
        fields = [
            field("Instructor", &course.instructor),
            field("Semester", &course.semester),
            field("Schedule", &course.schedule),
            field("Classroom", &course.classroom),
            field("Prerequisites", &course.prerequisites),
            field("Grading", &course.grading),
            field("Description", &course.description),
        ]
        .concat(),
    );

    layout("Course Details", None, &body)
}

pub fn add_course_page() -> String {
    let text_input = |name: &str, label: &str, required: bool| {
        let marker = if required { " *" } else { "" };
        format!(
            "      <label>{label}{marker} <input type=\"text\" name=\"{name}\"></label><br>\n"
        )
    };

    let body = format!(
        "    <h1>Add Course</h1>\n    <form method=\"post\" action=\"/add_course\">\n{inputs}      <label>Description <textarea name=\"description\"></textarea></label><br>\n      <button type=\"submit\">Add Course</button>\n    </form>",
        inputs = [
            text_input("code", "Course Code", false),
            text_input("coursename", "Course Name", true),
            text_input("instructor", "Instructor", true),
            text_input("semester", "Semester", false),
            text_input("schedule", "Schedule", false),
            text_input("classroom", "Classroom", false),
            text_input("prerequisites", "Prerequisites", false),
            text_input("grading", "Grading", false),
        ]
        .concat(),
    );

    layout("Add Course", None, &body)
}
