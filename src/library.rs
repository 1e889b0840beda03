//! Section list and the selected section's catalog.
//!
//! Listings complete asynchronously and may arrive out of order. Every request
//! gets a ticket with a rising sequence number; only the newest ticket's result
//! is applied, older ones are dropped on arrival.

use crate::api::Track;
use crate::error::ListingError;
use dioxus::logger::tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRequest {
    seq: u64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionsRequest {
    seq: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectOutcome {
    Applied,
    /// A newer request was issued after this one; the result was discarded.
    Stale,
    Failed(ListingError),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Library {
    sections: Vec<String>,
    selected_section: Option<String>,
    catalog: Vec<Track>,
    select_seq: u64,
    select_pending: bool,
    sections_seq: u64,
    sections_pending: bool,
}

impl Library {
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn selected_section(&self) -> Option<&str> {
        self.selected_section.as_deref()
    }

    pub fn catalog(&self) -> &[Track] {
        &self.catalog
    }

    pub fn is_loading(&self) -> bool {
        self.select_pending || self.sections_pending
    }

    pub fn is_loading_sections(&self) -> bool {
        self.sections_pending
    }

    /// Whether the newest section request is still in flight.
    pub fn pending_section(&self) -> bool {
        self.select_pending
    }

    pub fn begin_select(&mut self, name: impl Into<String>) -> SectionRequest {
        self.select_seq += 1;
        self.select_pending = true;
        SectionRequest {
            seq: self.select_seq,
            name: name.into(),
        }
    }

    pub fn finish_select(
        &mut self,
        request: SectionRequest,
        result: Result<Vec<Track>, ListingError>,
    ) -> SelectOutcome {
        if request.seq != self.select_seq {
            debug!(section = %request.name, "dropping stale section listing");
            return SelectOutcome::Stale;
        }
        self.select_pending = false;

        match result {
            Ok(tracks) => {
                debug!(section = %request.name, count = tracks.len(), "catalog replaced");
                self.catalog = tracks;
                self.selected_section = Some(request.name);
                SelectOutcome::Applied
            }
            Err(err) => {
                warn!(section = %request.name, error = %err, "section listing failed");
                SelectOutcome::Failed(err)
            }
        }
    }

    pub fn begin_sections(&mut self) -> SectionsRequest {
        self.sections_seq += 1;
        self.sections_pending = true;
        SectionsRequest {
            seq: self.sections_seq,
        }
    }

    pub fn finish_sections(
        &mut self,
        request: SectionsRequest,
        result: Result<Vec<String>, ListingError>,
    ) -> SelectOutcome {
        if request.seq != self.sections_seq {
            return SelectOutcome::Stale;
        }
        self.sections_pending = false;

        match result {
            Ok(sections) => {
                self.sections = sections;
                SelectOutcome::Applied
            }
            Err(err) => {
                warn!(error = %err, "listing sections failed");
                SelectOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks(section: &str, n: usize) -> Vec<Track> {
        (0..n)
            .map(|i| Track::new(format!("{section} {i}"), format!("https://cdn.test/{section}/{i}")))
            .collect()
    }

    #[test]
    fn successful_listing_replaces_catalog_and_selection() {
        let mut library = Library::default();
        let request = library.begin_select("Worship");
        assert!(library.is_loading());

        let outcome = library.finish_select(request, Ok(tracks("Worship", 2)));

        assert_eq!(outcome, SelectOutcome::Applied);
        assert_eq!(library.selected_section(), Some("Worship"));
        assert_eq!(library.catalog(), tracks("Worship", 2).as_slice());
        assert!(!library.is_loading());
    }

    #[test]
    fn failure_keeps_previous_catalog() {
        let mut library = Library::default();
        let first = library.begin_select("Worship");
        library.finish_select(first, Ok(tracks("Worship", 3)));

        let second = library.begin_select("Hymns");
        let outcome = library.finish_select(
            second,
            Err(ListingError::Transport("offline".to_string())),
        );

        assert!(matches!(outcome, SelectOutcome::Failed(_)));
        assert_eq!(library.selected_section(), Some("Worship"));
        assert_eq!(library.catalog().len(), 3);
        assert!(!library.is_loading());
    }

    #[test]
    fn late_result_of_superseded_request_is_discarded() {
        let mut library = Library::default();
        let a = library.begin_select("A");
        let b = library.begin_select("B");

        assert_eq!(library.finish_select(b, Ok(tracks("B", 1))), SelectOutcome::Applied);
        assert_eq!(library.finish_select(a, Ok(tracks("A", 4))), SelectOutcome::Stale);

        assert_eq!(library.selected_section(), Some("B"));
        assert_eq!(library.catalog(), tracks("B", 1).as_slice());
    }

    #[test]
    fn superseded_request_resolving_first_is_also_discarded() {
        let mut library = Library::default();
        let a = library.begin_select("A");
        let b = library.begin_select("B");

        assert_eq!(library.finish_select(a, Ok(tracks("A", 4))), SelectOutcome::Stale);
        assert!(library.is_loading());
        assert_eq!(library.catalog(), &[] as &[Track]);

        library.finish_select(b, Ok(tracks("B", 1)));
        assert_eq!(library.selected_section(), Some("B"));
    }

    #[test]
    fn stale_failure_does_not_clear_pending_request() {
        let mut library = Library::default();
        let a = library.begin_select("A");
        let _b = library.begin_select("B");

        let outcome = library.finish_select(a, Err(ListingError::InvalidSection));
        assert_eq!(outcome, SelectOutcome::Stale);
        assert!(library.pending_section());
    }

    #[test]
    fn sections_follow_the_same_ticket_rules() {
        let mut library = Library::default();
        let old = library.begin_sections();
        let new = library.begin_sections();

        assert_eq!(
            library.finish_sections(new, Ok(vec!["Hymns".to_string()])),
            SelectOutcome::Applied
        );
        assert_eq!(
            library.finish_sections(old, Ok(vec!["Old".to_string()])),
            SelectOutcome::Stale
        );
        assert_eq!(library.sections(), &["Hymns".to_string()]);
        assert!(!library.is_loading_sections());
    }
}
