//! Run transcript rendering.
//!
//! A `RunTranscript` is a derived, human-readable JSON view of one solve
//! invocation: outcome, action sequence, cost, content digest, and search
//! counters. The solver's return value is authoritative; the transcript is
//! an observability artifact for fixtures and debugging.

use std::fs;
use std::io;
use std::path::Path;

use gridshot_search::error::SolveError;
use gridshot_search::search::Solution;

/// JSON-renderable summary of one solve run.
#[derive(Debug, Clone)]
pub struct RunTranscript {
    world_id: String,
    result: Result<Solution, SolveError>,
}

impl RunTranscript {
    #[must_use]
    pub fn new(world_id: &str, result: Result<Solution, SolveError>) -> Self {
        Self {
            world_id: world_id.to_string(),
            result,
        }
    }

    /// Render as a JSON value.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match &self.result {
            Ok(solution) => serde_json::json!({
                "world_id": self.world_id,
                "outcome": "solved",
                "actions": solution.actions,
                "cost": solution.cost,
                "digest": solution.digest(),
                "stats": {
                    "expansions": solution.stats.expansions,
                    "generated": solution.stats.generated,
                    "stale_dropped": solution.stats.stale_dropped,
                    "duplicates_skipped": solution.stats.duplicates_skipped,
                    "frontier_high_water": solution.stats.frontier_high_water,
                    "distinct_states": solution.stats.distinct_states,
                },
            }),
            Err(error) => serde_json::json!({
                "world_id": self.world_id,
                "outcome": if error.is_aborted() { "aborted" } else { "unsolvable" },
                "detail": error.to_string(),
            }),
        }
    }

    /// Write the pretty-printed JSON rendering to `path`.
    ///
    /// # Errors
    ///
    /// Propagates filesystem errors from the write.
    pub fn write_json(&self, path: &Path) -> io::Result<()> {
        let mut rendered = serde_json::to_string_pretty(&self.to_json())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        rendered.push('\n');
        fs::write(path, rendered)
    }
}
