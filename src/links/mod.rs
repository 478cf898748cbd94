// src/links/mod.rs
// =============================================================================
// This module turns HTML into things we can download.
//
// Submodules:
// - html: Extracts (url, title) links from any HTML document
// - pages: Picks the course pages out of the syllabus links
// - slug: Makes titles safe to use as file and directory names
// =============================================================================

mod html;
mod pages;
mod slug;

pub use html::{extract_links, Link};
pub use pages::{discover_pages, last_path_segment, PageRef};
pub use slug::slugify;
