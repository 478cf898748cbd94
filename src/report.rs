// src/report.rs
// =============================================================================
// Prints download outcomes as they arrive, then a summary.
//
// Text mode prints one line per outcome:
//   DONE: 42
//   SKIP: https://other.site/page
//   FAIL: https://lms.example.edu/files/9 not found: ...
//
// JSON mode prints one JSON object per line instead, which is easier to pipe
// into other tools. The summary goes to stderr so stdout stays clean.
// =============================================================================

use std::io::Write;

use anyhow::Result;

use crate::fetch::FetchOutcome;

#[derive(Debug, Default)]
pub struct Reporter {
    json: bool,
    done: usize,
    skipped: usize,
    failed: usize,
}

impl Reporter {
    pub fn new(json: bool) -> Self {
        Reporter {
            json,
            ..Default::default()
        }
    }

    // Counts the outcome and writes it to `out`
    pub fn record(&mut self, outcome: &FetchOutcome, out: &mut impl Write) -> Result<()> {
        match outcome {
            FetchOutcome::Done { .. } => self.done += 1,
            FetchOutcome::Skip { .. } => self.skipped += 1,
            FetchOutcome::Fail { .. } => self.failed += 1,
        }

        if self.json {
            writeln!(out, "{}", serde_json::to_string(outcome)?)?;
        } else {
            writeln!(out, "{}", outcome)?;
        }
        Ok(())
    }

    pub fn print_summary(&self) {
        eprintln!();
        eprintln!("📊 Summary:");
        eprintln!("   ✅ Downloaded: {}", self.done);
        eprintln!("   ⏭️  Skipped: {}", self.skipped);
        eprintln!("   ❌ Failed: {}", self.failed);
        eprintln!("   📋 Total: {}", self.total());
    }

    pub fn total(&self) -> usize {
        self.done + self.skipped + self.failed
    }

    // 0 = everything downloaded or skipped, 1 = at least one download failed
    pub fn exit_code(&self) -> i32 {
        if self.failed > 0 {
            1
        } else {
            0
        }
    }
}
