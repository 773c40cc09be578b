//! Search state: the shared store, the per-page search box, and the
//! results view model

use crate::error::ApiError;
use crate::format::truncate_link;
use crate::types::SearchResults;
use crate::voice::VoiceCapture;

const FETCH_FAILED: &str = "Failed to fetch search results";

/// Shared search container: last query and the results it produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStore {
    query: String,
    results: SearchResults,
    loading: bool,
    error: Option<String>,
}

impl SearchStore {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Start a fetch: returns the query to send, or `None` when it is blank
    /// or a fetch is already running
    pub fn begin_fetch(&mut self, query: &str) -> Option<String> {
        if query.trim().is_empty() || self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(query.to_string())
    }

    /// Results replace the previous set wholesale; a failure leaves none
    pub fn finish_fetch(&mut self, outcome: Result<SearchResults, ApiError>) {
        self.loading = false;
        match outcome {
            Ok(results) => self.results = results,
            Err(e) => {
                tracing::error!("Error searching: {}", e);
                self.results = SearchResults::default();
                self.error = Some(FETCH_FAILED.to_string());
            }
        }
    }

    /// Hand-off from a page search to the results page
    pub fn record(&mut self, query: impl Into<String>, results: SearchResults) {
        self.query = query.into();
        self.results = results;
        self.error = None;
    }
}

/// The query field on Home and Search, with its own in-flight guard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBox {
    pub query: String,
    loading: bool,
    voice: VoiceCapture,
}

impl SearchBox {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), ..Self::default() }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_listening(&self) -> bool {
        self.voice.is_listening()
    }

    /// Returns the query to send, or `None` if the search is rejected
    pub fn begin(&mut self) -> Option<String> {
        if self.query.trim().is_empty() || self.loading {
            return None;
        }
        self.loading = true;
        Some(self.query.clone())
    }

    /// Failures are logged and yield no results
    pub fn finish(&mut self, outcome: Result<SearchResults, ApiError>) -> Option<SearchResults> {
        self.loading = false;
        match outcome {
            Ok(results) => Some(results),
            Err(e) => {
                tracing::error!("Error searching: {}", e);
                None
            }
        }
    }

    pub fn start_listening(&mut self) {
        self.voice.start();
    }

    pub fn on_transcript(&mut self, text: impl Into<String>) {
        self.voice.on_transcript(text);
    }

    /// Recognition ended: a transcript replaces whatever was typed
    pub fn stop_listening(&mut self) {
        if let Some(transcript) = self.voice.on_end() {
            self.query = transcript;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub title: String,
    pub link: String,
    pub display_link: String,
    pub snippet: String,
}

/// What the results page draws
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchView {
    /// "AI Overview" body, only for a non-empty summary
    pub overview: Option<String>,
    pub cards: Vec<ResultCard>,
    /// "No results found" heading
    pub no_results: Option<String>,
}

impl SearchView {
    pub fn build(results: &SearchResults, query: &str, loading: bool) -> Self {
        let overview = (!results.summary.is_empty()).then(|| results.summary.clone());
        let cards: Vec<ResultCard> = results
            .results
            .iter()
            .map(|hit| ResultCard {
                title: hit.title.clone(),
                link: hit.link.clone(),
                display_link: truncate_link(&hit.link),
                snippet: hit.snippet.clone(),
            })
            .collect();
        let no_results = (!query.is_empty() && cards.is_empty() && !loading)
            .then(|| format!("No results found for \"{}\"", query));

        Self { overview, cards, no_results }
    }

    pub fn count_label(&self) -> Option<String> {
        (!self.cards.is_empty()).then(|| format!("{} results found", self.cards.len()))
    }
}
