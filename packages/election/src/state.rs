//! Click handling for the map renderer.
//!
//! The renderer reports clicks on precincts and on breadcrumb segments.
//! [`SelectionState`] turns each click into the new sidebar
//! [`Selection`] plus a [`RestyleRequest`] naming the precincts to
//! highlight.

use std::collections::BTreeSet;

use precinct_map_election_models::{
    AggregateScope, Breadcrumb, BreadcrumbTarget, PrecinctDetail, Selection,
};
use serde::{Deserialize, Serialize};

use crate::{Bounds, PrecinctCollection};

/// What the renderer should redraw after a click.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestyleRequest {
    /// GEOIDs to draw with the highlight style. Empty clears highlights.
    pub highlighted: BTreeSet<String>,
    /// Box to fit the view to, when the selection has geometry.
    pub bounds: Option<Bounds>,
}

/// The current selection, updated by click events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    selection: Selection,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.selection.breadcrumbs()
    }

    /// Selects a single precinct, clearing any rollup scope.
    ///
    /// Returns `None` and leaves the selection untouched when `geoid` is
    /// not in the collection.
    pub fn click_feature(
        &mut self,
        collection: &PrecinctCollection,
        geoid: &str,
    ) -> Option<RestyleRequest> {
        let Some(feature) = collection.find(geoid) else {
            log::debug!("Click on unknown precinct {geoid}");
            return None;
        };

        self.selection = Selection::Feature(PrecinctDetail::new(
            feature.record.clone(),
            feature.location.clone(),
        ));

        Some(RestyleRequest {
            highlighted: std::iter::once(feature.record.geoid.clone()).collect(),
            bounds: feature.bounds,
        })
    }

    /// Selects a state or county rollup, clearing any single precinct.
    pub fn select_scope(
        &mut self,
        collection: &PrecinctCollection,
        scope: AggregateScope,
    ) -> RestyleRequest {
        let summary = collection.summary_for(&scope);
        let restyle = RestyleRequest {
            highlighted: collection.geoids_in(&scope),
            bounds: collection.bounds(&scope),
        };
        log::debug!(
            "Selected {} ({} precincts)",
            scope.name(),
            summary.precinct_count
        );
        self.selection = Selection::Aggregate { scope, summary };
        restyle
    }

    /// Follows a breadcrumb segment.
    ///
    /// Returns `None` only when the segment points at a precinct that is
    /// no longer in the collection.
    pub fn click_breadcrumb(
        &mut self,
        collection: &PrecinctCollection,
        target: &BreadcrumbTarget,
    ) -> Option<RestyleRequest> {
        match target {
            BreadcrumbTarget::Scope { scope } => Some(self.select_scope(collection, scope.clone())),
            BreadcrumbTarget::Precinct { geoid } => self.click_feature(collection, geoid),
        }
    }

    /// Clears the selection and all highlights.
    pub fn clear(&mut self) -> RestyleRequest {
        self.selection = Selection::None;
        RestyleRequest::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::tests::sample;

    #[test]
    fn feature_click_selects_single_precinct() {
        let collection = sample();
        let mut state = SelectionState::new();
        let restyle = state.click_feature(&collection, "08001-2").unwrap();

        assert_eq!(
            restyle.highlighted.into_iter().collect::<Vec<_>>(),
            vec!["08001-2".to_string()]
        );
        assert!(restyle.bounds.is_some());
        let Selection::Feature(detail) = state.selection() else {
            panic!("expected a feature selection");
        };
        assert_eq!(detail.location.county, "Adams");
        assert_eq!(detail.record.votes_rep, 80);
    }

    #[test]
    fn unknown_click_keeps_selection() {
        let collection = sample();
        let mut state = SelectionState::new();
        state.click_feature(&collection, "08031-1").unwrap();
        let before = state.clone();
        assert!(state.click_feature(&collection, "08999-9").is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn breadcrumb_click_replaces_feature_with_scope() {
        let collection = sample();
        let mut state = SelectionState::new();
        state.click_feature(&collection, "08001-1").unwrap();

        let county_crumb = state.breadcrumbs()[1].target.clone();
        let restyle = state.click_breadcrumb(&collection, &county_crumb).unwrap();
        assert_eq!(restyle.highlighted.len(), 2);

        let Selection::Aggregate { scope, summary } = state.selection() else {
            panic!("expected an aggregate selection");
        };
        assert_eq!(scope, &AggregateScope::county("Colorado", "Adams"));
        assert_eq!(summary.votes_total, 250);
        assert_eq!(summary.precinct_count, 2);
    }

    #[test]
    fn feature_click_replaces_scope() {
        let collection = sample();
        let mut state = SelectionState::new();
        state.select_scope(&collection, AggregateScope::state("Colorado"));
        state.click_feature(&collection, "08031-1").unwrap();
        assert!(matches!(state.selection(), Selection::Feature(_)));
        assert_eq!(state.breadcrumbs().len(), 3);
    }

    #[test]
    fn state_scope_excludes_malformed_geoids() {
        let collection = sample();
        let mut state = SelectionState::new();
        let restyle = state.select_scope(&collection, AggregateScope::state("Colorado"));
        assert_eq!(restyle.highlighted.len(), 3);
        assert!(!restyle.highlighted.contains("bogus"));
    }

    #[test]
    fn empty_scope_still_selects() {
        let collection = sample();
        let mut state = SelectionState::new();
        let restyle = state.select_scope(&collection, AggregateScope::county("Colorado", "Weld"));
        assert!(restyle.highlighted.is_empty());
        assert!(restyle.bounds.is_none());
        let Selection::Aggregate { summary, .. } = state.selection() else {
            panic!("expected an aggregate selection");
        };
        assert_eq!(summary.name, "Weld");
        assert_eq!(summary.precinct_count, 0);
    }

    #[test]
    fn clear_resets() {
        let collection = sample();
        let mut state = SelectionState::new();
        state.click_feature(&collection, "08031-1").unwrap();
        assert_eq!(state.clear(), RestyleRequest::default());
        assert!(state.selection().is_none());
        assert!(state.breadcrumbs().is_empty());
    }
}
