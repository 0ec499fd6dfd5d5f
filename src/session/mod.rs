//! Interactive view state over one loaded trace document.
//!
//! A session owns exactly one forest at a time. Loading a new document
//! replaces it wholesale; there are no partial updates.
//!
//! Overlapping loads resolve last-write-wins: every `begin_load` issues a
//! ticket, and only the most recently issued ticket may install its
//! result. Completions carrying an older ticket are discarded.

pub mod reader;

pub use reader::{is_supported_extension, read_trace_file};

use crate::parser::{parse_document, TraceNode};
use crate::query::{collect_all_ids, search, SearchMatches};
use crate::utils::config::NO_TRACES_MESSAGE;
use crate::utils::error::TraceError;
use log::{debug, error, info};
use std::collections::HashSet;
use std::path::Path;

/// Handle for one in-flight load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
pub struct TraceSession {
    forest: Vec<TraceNode>,
    loading: bool,
    generation: u64,
    expanded: HashSet<String>,
    highlighted: HashSet<String>,
    hits: Vec<String>,
    query: String,
}

impl TraceSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forest(&self) -> &[TraceNode] {
        &self.forest
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_traces(&self) -> bool {
        !self.forest.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn expanded(&self) -> &HashSet<String> {
        &self.expanded
    }

    pub fn highlighted(&self) -> &HashSet<String> {
        &self.highlighted
    }

    /// Direct search hits, in document order
    pub fn hits(&self) -> &[String] {
        &self.hits
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlighted.contains(id)
    }

    /// Start a load. Supersedes any load still in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        debug!("Load {} started", self.generation);
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Install the outcome of a load
    ///
    /// **Public** - second half of `begin_load`
    ///
    /// # Arguments
    /// * `ticket` - Ticket returned by `begin_load`
    /// * `result` - Document text, or the error that prevented reading it
    ///
    /// # Returns
    /// `true` if the result was installed, `false` if a newer load superseded it
    pub fn complete_load(&mut self, ticket: LoadTicket, result: Result<String, TraceError>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "Discarding stale load {} (current is {})",
                ticket.generation, self.generation
            );
            return false;
        }

        let forest = match result {
            Ok(text) => parse_document(&text),
            Err(e) => {
                error!("Failed to load trace document: {:#}", anyhow::Error::from(e));
                Vec::new()
            }
        };

        self.install(forest);
        self.loading = false;
        true
    }

    /// Read and parse a file in one step
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> bool {
        let ticket = self.begin_load();
        let result = read_trace_file(path);
        self.complete_load(ticket, result)
    }

    /// Parse already-available text
    pub fn load_text(&mut self, text: &str) -> bool {
        let ticket = self.begin_load();
        self.complete_load(ticket, Ok(text.to_string()))
    }

    fn install(&mut self, forest: Vec<TraceNode>) {
        info!("Loaded {} call stacks", forest.len());
        self.forest = forest;
        self.expanded.clear();
        self.highlighted.clear();
        self.hits.clear();
        self.query.clear();
    }

    /// Highlight matches of `query` and expand the path down to each.
    /// A blank query clears the highlight.
    pub fn search(&mut self, query: &str) -> SearchMatches {
        self.query = query.to_string();

        let matches = search(&self.forest, query);
        self.expanded.extend(matches.ids.iter().cloned());
        self.highlighted = matches.ids.clone();
        self.hits = matches.hits.clone();
        matches
    }

    pub fn clear_search(&mut self) {
        self.query.clear();
        self.highlighted.clear();
        self.hits.clear();
    }

    pub fn expand_all(&mut self) {
        self.expanded = collect_all_ids(&self.forest).into_iter().collect();
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Flip one node between expanded and collapsed.
    /// Returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    /// Status line for the current state, if there is something to report
    pub fn status_message(&self) -> Option<&'static str> {
        if self.loading {
            Some("Loading traces...")
        } else if self.forest.is_empty() {
            Some(NO_TRACES_MESSAGE)
        } else {
            None
        }
    }
}
