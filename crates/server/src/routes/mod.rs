pub mod add_course;
pub mod catalog;
pub mod course;
pub mod health;
pub mod root;
