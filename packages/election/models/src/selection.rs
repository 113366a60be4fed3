//! Sidebar selection model.
//!
//! A selection is either nothing, a single precinct, or a rollup scope.
//! The variants are mutually exclusive: selecting a precinct clears any
//! scope and vice versa.

use serde::{Deserialize, Serialize};

use crate::{AggregateScope, AggregateSummary, PrecinctDetail};

/// What the sidebar is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Selection {
    /// Nothing selected.
    #[default]
    None,
    /// A single clicked precinct.
    Feature(PrecinctDetail),
    /// A state or county rollup.
    Aggregate {
        /// The scope that was rolled up.
        scope: AggregateScope,
        /// Totals over the scope.
        summary: AggregateSummary,
    },
}

/// Where clicking a breadcrumb navigates to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BreadcrumbTarget {
    /// A state or county rollup.
    Scope {
        /// The scope to roll up.
        scope: AggregateScope,
    },
    /// A single precinct.
    Precinct {
        /// The precinct GEOID.
        geoid: String,
    },
}

/// One segment of the `State > County > Precinct` trail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breadcrumb {
    /// Text shown for the segment.
    pub label: String,
    /// Navigation target when clicked.
    pub target: BreadcrumbTarget,
    /// Whether this segment is the current selection.
    pub active: bool,
}

impl Selection {
    /// Builds the breadcrumb trail for this selection.
    ///
    /// A precinct yields `[state, county, precinct]`, a county rollup
    /// `[state, county]`, a state rollup `[state]`, and no selection an
    /// empty trail. The last segment is marked active.
    #[must_use]
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let mut crumbs = match self {
            Self::None => return Vec::new(),
            Self::Feature(detail) => {
                let state = &detail.location.state;
                let county = &detail.location.county;
                vec![
                    scope_crumb(AggregateScope::state(state.clone())),
                    scope_crumb(AggregateScope::county(state.clone(), county.clone())),
                    Breadcrumb {
                        label: detail.location.precinct.clone(),
                        target: BreadcrumbTarget::Precinct {
                            geoid: detail.record.geoid.clone(),
                        },
                        active: false,
                    },
                ]
            }
            Self::Aggregate { scope, .. } => {
                let mut chain = vec![scope.clone()];
                while let Some(parent) = chain.last().and_then(AggregateScope::parent) {
                    chain.push(parent);
                }
                chain.into_iter().rev().map(scope_crumb).collect()
            }
        };

        if let Some(last) = crumbs.last_mut() {
            last.active = true;
        }
        crumbs
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

fn scope_crumb(scope: AggregateScope) -> Breadcrumb {
    Breadcrumb {
        label: scope.name().to_string(),
        target: BreadcrumbTarget::Scope { scope },
        active: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrecinctRecord;
    use precinct_map_geography_models::decode;

    fn detail(geoid: &str) -> PrecinctDetail {
        PrecinctDetail::new(
            PrecinctRecord {
                geoid: geoid.to_string(),
                votes_dem: 1,
                votes_rep: 2,
                votes_total: 3,
                pct_dem_lead: -1.0 / 3.0,
            },
            decode(geoid),
        )
    }

    fn labels(crumbs: &[Breadcrumb]) -> Vec<&str> {
        crumbs.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn no_selection_has_no_trail() {
        assert!(Selection::None.breadcrumbs().is_empty());
        assert!(Selection::default().is_none());
    }

    #[test]
    fn feature_trail() {
        let crumbs = Selection::Feature(detail("08001-8134801173")).breadcrumbs();
        assert_eq!(labels(&crumbs), vec!["Colorado", "Adams", "8134801173"]);
        assert_eq!(
            crumbs[1].target,
            BreadcrumbTarget::Scope {
                scope: AggregateScope::county("Colorado", "Adams")
            }
        );
        assert!(crumbs[2].active);
        assert!(!crumbs[0].active);
    }

    #[test]
    fn county_trail() {
        let scope = AggregateScope::county("Colorado", "Denver");
        let crumbs = Selection::Aggregate {
            summary: AggregateSummary::empty(scope.name()),
            scope,
        }
        .breadcrumbs();
        assert_eq!(labels(&crumbs), vec!["Colorado", "Denver"]);
        assert!(crumbs[1].active);
    }

    #[test]
    fn state_trail() {
        let scope = AggregateScope::state("Colorado");
        let crumbs = Selection::Aggregate {
            summary: AggregateSummary::empty(scope.name()),
            scope,
        }
        .breadcrumbs();
        assert_eq!(labels(&crumbs), vec!["Colorado"]);
        assert!(crumbs[0].active);
    }

    #[test]
    fn selection_is_tagged() {
        let value = serde_json::to_value(Selection::None).unwrap();
        assert_eq!(value, serde_json::json!({ "kind": "none" }));
    }
}
