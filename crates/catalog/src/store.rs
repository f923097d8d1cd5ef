use crate::error::StoreError;
use models::course::Course;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Flat-file catalog store
///
/// The whole catalog lives in one JSON file holding an array of course
/// objects. Every operation reads the file fresh; `append` rewrites the
/// entire file. The write is a plain whole-file rewrite with no temp file
/// and no file lock, so callers that need write serialization must provide
/// it themselves (the server holds a single write guard per process).
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full catalog. A missing file is an empty catalog; a file
    /// that is not a valid course array is a parse error.
    pub fn load(&self) -> Result<Vec<Course>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let courses = serde_json::from_str(&contents)?;

        Ok(courses)
    }

    /// Appends one course and rewrites the whole catalog file.
    pub fn append(&self, course: Course) -> Result<(), StoreError> {
        let mut courses = self.load()?;
        courses.push(course);

        let contents = serde_json::to_string_pretty(&courses)?;
        fs::write(&self.path, contents)?;

        debug!(total = courses.len(), path = %self.path.display(), "catalog rewritten");
        Ok(())
    }

    /// Returns the first course whose `code` equals `code`, in catalog
    /// order. Duplicate codes resolve to the earliest record.
    pub fn find(&self, code: &str) -> Result<Option<Course>, StoreError> {
        let courses = self.load()?;
        Ok(courses.into_iter().find(|course| course.code == code))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::tempdir;

    fn course(code: &str, coursename: &str) -> Course {
        Course {
            code: code.to_string(),
            coursename: coursename.to_string(),
            instructor: "A. Smith".to_string(),
            semester: String::new(),
            schedule: String::new(),
            classroom: String::new(),
            prerequisites: String::new(),
            grading: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty_catalog() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("course_catalog.json"));

        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_append_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("course_catalog.json"));

        let first = course("CS101", "Intro to Programming");
        store.append(first.clone()).unwrap();
        assert_eq!(store.load().unwrap(), vec![first.clone()]);

        let second = course("CS203", "Software Engineering");
        store.append(second.clone()).unwrap();

        let courses = store.load().unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses.last(), Some(&second));
    }

    #[test]
    fn test_find_returns_first_match_among_duplicates() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("course_catalog.json"));

        store.append(course("CS101", "First Listing")).unwrap();
        store.append(course("CS101", "Second Listing")).unwrap();

        let found = store.find("CS101").unwrap().unwrap();
        assert_eq!(found.coursename, "First Listing");
    }

    #[test]
    fn test_find_missing_code_is_none_not_error() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("course_catalog.json"));

        store.append(course("CS101", "Intro")).unwrap();

        assert!(store.find("CS999").unwrap().is_none());
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("course_catalog.json");
        std::fs::write(&path, "{ not a course array").unwrap();

        let store = CatalogStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Parse(_))));
    }

    #[test]
    fn test_file_is_a_pretty_printed_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("course_catalog.json");
        let store = CatalogStore::new(&path);

        store.append(course("CS101", "Intro")).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with('['));
        assert!(contents.contains("\n  "));
    }
}
