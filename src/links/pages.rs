// src/links/pages.rs
// =============================================================================
// Finds the course pages linked from a syllabus.
//
// A syllabus links to all sorts of things: navigation, external sites, files,
// and the course's own pages. Only the last kind is interesting here, and a
// course page always lives at:
//
//   {base_url}/courses/{course_id}/pages/{page_name}
//
// Everything else is dropped without complaint.
// =============================================================================

use std::fmt;

use super::html::extract_links;

// The name of a page inside a course (the last segment of its URL)
//
// Example: "https://lms.example.edu/courses/123/pages/week-1" -> PageRef("week-1")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRef(String);

impl PageRef {
    pub fn new(name: impl Into<String>) -> Self {
        PageRef(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Extracts the page names linked from a syllabus
//
// Parameters:
//   syllabus: HTML body of the course syllabus
//   base_url: scheme + host of the service (e.g. "https://lms.example.edu")
//   course_id: the course identifier (e.g. "123")
//
// Returns: the page names, in the order they appear in the syllabus.
// Repeated links are returned repeatedly; the caller decides what to do with them.
pub fn discover_pages(syllabus: &str, base_url: &str, course_id: &str) -> Vec<PageRef> {
    let prefix = format!(
        "{}/courses/{}/pages/",
        base_url.trim_end_matches('/'),
        course_id
    );

    extract_links(syllabus)
        .into_iter()
        .filter(|link| link.url.starts_with(&prefix))
        .filter_map(|link| {
            let name = last_path_segment(&link.url);
            // ".../pages/" with nothing after it doesn't name a page
            if name.is_empty() {
                None
            } else {
                Some(PageRef::new(name))
            }
        })
        .collect()
}

// The last segment of a URL path, without query string or fragment
//
// Example: "https://h/courses/1/pages/week-1?module_item_id=5" -> "week-1"
pub fn last_path_segment(url: &str) -> &str {
    let without_query = url.split(['?', '#']).next().unwrap_or_default();
    without_query.rsplit('/').next().unwrap_or_default()
}
