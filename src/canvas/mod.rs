// src/canvas/mod.rs
// =============================================================================
// This module handles talking to the Canvas course service.
//
// Currently implements:
// - Fetching the course syllabus and page bodies
// - Downloading files by ID
//
// Everything goes through the CourseService trait so the pipeline and the
// fetch executor can be tested without a network.
// =============================================================================

mod client;

#[cfg(test)]
pub mod fake;

pub use client::{CanvasClient, CourseService};
