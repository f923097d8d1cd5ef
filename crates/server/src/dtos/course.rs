use models::course::Course;
use serde::Deserialize;
use utoipa::ToSchema;

/// Urlencoded form payload for `POST /add_course`. Fields map 1:1 to the
/// course record; anything the form omits becomes an empty string.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CourseForm {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub coursename: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub classroom: String,
    #[serde(default)]
    pub prerequisites: String,
    #[serde(default)]
    pub grading: String,
    #[serde(default)]
    pub description: String,
}

impl From<CourseForm> for Course {
    fn from(form: CourseForm) -> Self {
        Course {
            code: form.code,
            coursename: form.coursename,
            instructor: form.instructor,
            semester: form.semester,
            schedule: form.schedule,
            classroom: form.classroom,
            prerequisites: form.prerequisites,
            grading: form.grading,
            description: form.description,
        }
    }
}
