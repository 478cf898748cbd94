// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The tool does one thing, so there are no subcommands:
//
//   course-mirror https://lms.example.edu/courses/123 --token ... -j 8
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "course-mirror",
    version,
    about = "Download every file linked from a Canvas course's syllabus pages",
    long_about = "course-mirror reads a course syllabus, follows the links to the course's pages \
                  and downloads the files those pages link to, one directory per page."
)]
pub struct Cli {
    /// Course URL (e.g., https://lms.example.edu/courses/123)
    ///
    /// The service base URL and the course ID are both taken from it
    pub course_url: String,

    /// Canvas API access token
    ///
    /// Falls back to the CANVAS_API_KEY environment variable
    #[arg(long, env = "CANVAS_API_KEY", hide_env_values = true)]
    pub token: String,

    /// How many files to download at the same time
    #[arg(short = 'j', long, default_value_t = 8)]
    pub concurrency: usize,

    /// Directory under which the page directories are created
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Give up on a single download after this many seconds (0 = never)
    #[arg(long, default_value_t = 300)]
    pub timeout: u64,

    /// Print outcomes as JSON lines instead of text
    #[arg(long)]
    pub json: bool,
}
