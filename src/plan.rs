// src/plan.rs
// =============================================================================
// Builds the list of downloads for one course page.
//
// For page "Week 1 Readings" with a link titled "Lecture Notes" we plan:
//
//   source:      the link's href
//   destination: {output_dir}/week-1-readings/lecture-notes.pdf
//
// Known limitations (kept on purpose):
// - Every file gets a ".pdf" extension, whatever its real type is.
// - Two links with the same title on one page map to the same destination,
//   so the last download to finish wins.
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PlanningError;
use crate::links::{extract_links, slugify, Link, PageRef};

const FILE_EXTENSION: &str = "pdf";

// One file to download: where it comes from and where it goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPlan {
    pub source_url: String,
    pub destination: PathBuf,
}

// Plans the downloads for every link on a page
//
// Parameters:
//   output_dir: root directory of the mirror ("." by default)
//   page: the page the body belongs to (names the directory)
//   page_body: HTML body of the page
//
// Returns: one DownloadPlan per link, in document order, or PlanningError if
// the page directory can't be created. An existing directory is fine.
pub fn plan_downloads(
    output_dir: &Path,
    page: &PageRef,
    page_body: &str,
) -> Result<Vec<DownloadPlan>, PlanningError> {
    let dir = page_directory(output_dir, page);

    // create_dir_all is a no-op when the directory is already there
    fs::create_dir_all(&dir).map_err(|source| PlanningError {
        dir: dir.clone(),
        source,
    })?;

    let plans = extract_links(page_body)
        .into_iter()
        .map(|link: Link| DownloadPlan {
            destination: destination_for(&dir, &link.title),
            source_url: link.url,
        })
        .collect();

    Ok(plans)
}

// Directory holding the files of one page
pub fn page_directory(output_dir: &Path, page: &PageRef) -> PathBuf {
    output_dir.join(slugify(page.as_str(), false))
}

// Destination of a link with the given title inside a page directory
pub fn destination_for(page_dir: &Path, title: &str) -> PathBuf {
    page_dir.join(format!("{}.{}", slugify(title, false), FILE_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_layout() {
        let dir = page_directory(Path::new("."), &PageRef::new("week-1"));
        assert_eq!(
            destination_for(&dir, "Notes"),
            PathBuf::from("./week-1/notes.pdf")
        );
    }

    #[test]
    fn test_page_directory_is_slugified() {
        let dir = page_directory(Path::new("/mirror"), &PageRef::new("Week 1: Readings"));
        assert_eq!(dir, PathBuf::from("/mirror/week-1-readings"));
    }

    #[test]
    fn test_same_title_collides() {
        let root = tempfile::tempdir().unwrap();
        let body = r#"
            <a href="https://lms.example.edu/files/1">Notes</a>
            <a href="https://lms.example.edu/files/2">Notes</a>
        "#;

        let plans = plan_downloads(root.path(), &PageRef::new("week-1"), body).unwrap();

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].destination, plans[1].destination);
        assert_eq!(plans[0].destination, root.path().join("week-1").join("notes.pdf"));
        assert_eq!(plans[0].source_url, "https://lms.example.edu/files/1");
        assert_eq!(plans[1].source_url, "https://lms.example.edu/files/2");
    }

    #[test]
    fn test_every_link_is_planned() {
        let root = tempfile::tempdir().unwrap();
        let body = r#"
            <a href="https://lms.example.edu/courses/1/files/9">Syllabus</a>
            <a href="https://youtube.com/watch?v=abc" title="Lecture video">watch</a>
        "#;

        let plans = plan_downloads(root.path(), &PageRef::new("intro"), body).unwrap();

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[1].destination, root.path().join("intro").join("lecture-video.pdf"));
    }

    #[test]
    fn test_creates_directory_and_tolerates_existing() {
        let root = tempfile::tempdir().unwrap();
        let page = PageRef::new("week-2");

        plan_downloads(root.path(), &page, "").unwrap();
        assert!(root.path().join("week-2").is_dir());

        // second run over the same tree must not fail
        let plans = plan_downloads(root.path(), &page, "").unwrap();
        assert!(plans.is_empty());
    }

    #[test]
    fn test_directory_creation_failure() {
        let root = tempfile::tempdir().unwrap();
        // a regular file where the page directory should go
        fs::write(root.path().join("week-3"), b"not a directory").unwrap();

        let err = plan_downloads(root.path(), &PageRef::new("week-3"), "").unwrap_err();
        assert_eq!(err.dir, root.path().join("week-3"));
    }
}
