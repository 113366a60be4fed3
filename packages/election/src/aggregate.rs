//! County and state rollups.

use precinct_map_election_models::{AggregateScope, AggregateSummary, PrecinctRecord};
use precinct_map_geography_models::decode;

/// Sums the vote counts of every record whose decoded GEOID falls inside
/// `scope`.
///
/// The margin is recomputed from the summed totals rather than averaged
/// over precincts, so small precincts do not skew it. Records whose GEOID
/// does not decode never match a real scope. An empty match yields an
/// all-zero summary still named after the scope.
#[must_use]
pub fn aggregate<'a, I>(records: I, scope: &AggregateScope) -> AggregateSummary
where
    I: IntoIterator<Item = &'a PrecinctRecord>,
{
    let mut summary = AggregateSummary::empty(scope.name());

    for record in records {
        if !scope.contains(&decode(&record.geoid)) {
            continue;
        }
        summary.votes_dem = summary.votes_dem.saturating_add(record.votes_dem);
        summary.votes_rep = summary.votes_rep.saturating_add(record.votes_rep);
        summary.votes_total = summary.votes_total.saturating_add(record.votes_total);
        summary.precinct_count += 1;
    }

    summary.pct_dem_lead = margin(summary.votes_dem, summary.votes_rep, summary.votes_total);
    summary
}

#[allow(clippy::cast_precision_loss)]
fn margin(dem: u64, rep: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (dem as f64 - rep as f64) / total as f64
}
