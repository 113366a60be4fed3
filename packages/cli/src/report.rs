//! Plain-text rendering of selections for the terminal.

use precinct_map_election_models::{
    AggregateSummary, Breadcrumb, MarginBucket, PrecinctDetail, Selection,
};
use precinct_map_geography_models::DecodedLocation;

/// Formats a signed margin as `D+12.3`, `R+4.0`, or `Even`.
#[must_use]
pub fn format_margin(pct_dem_lead: f64) -> String {
    if pct_dem_lead > 0.0 {
        format!("D+{:.1}", pct_dem_lead * 100.0)
    } else if pct_dem_lead < 0.0 {
        format!("R+{:.1}", -pct_dem_lead * 100.0)
    } else {
        "Even".to_string()
    }
}

fn format_bucket(bucket: Option<MarginBucket>) -> String {
    bucket.map_or_else(
        || "NO_DATA".to_string(),
        |b| format!("{b} ({})", b.color()),
    )
}

/// `Colorado > Adams > 8134801173`, with the active segment bracketed.
#[must_use]
pub fn render_breadcrumbs(crumbs: &[Breadcrumb]) -> String {
    crumbs
        .iter()
        .map(|c| {
            if c.active {
                format!("[{}]", c.label)
            } else {
                c.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" > ")
}

#[must_use]
pub fn render_location(location: &DecodedLocation) -> String {
    format!(
        "State:    {}\nCounty:   {}\nPrecinct: {}",
        location.state, location.county, location.precinct
    )
}

#[must_use]
pub fn render_summary(summary: &AggregateSummary) -> String {
    format!(
        "{}\n  Precincts:   {}\n  Democratic:  {}\n  Republican:  {}\n  Total:       {}\n  Margin:      {}\n  Bucket:      {}",
        summary.name,
        summary.precinct_count,
        summary.votes_dem,
        summary.votes_rep,
        summary.votes_total,
        format_margin(summary.pct_dem_lead),
        format_bucket(summary.bucket()),
    )
}

#[must_use]
pub fn render_detail(detail: &PrecinctDetail) -> String {
    let record = &detail.record;
    format!(
        "Precinct {}\n  {} County, {}\n  Democratic:  {}\n  Republican:  {}\n  Total:       {}\n  Margin:      {}\n  Bucket:      {}",
        record.geoid,
        detail.location.county,
        detail.location.state,
        record.votes_dem,
        record.votes_rep,
        record.votes_total,
        format_margin(record.pct_dem_lead),
        format_bucket(detail.bucket),
    )
}

#[must_use]
pub fn render_selection(selection: &Selection) -> String {
    match selection {
        Selection::None => "Nothing selected".to_string(),
        Selection::Feature(detail) => render_detail(detail),
        Selection::Aggregate { summary, .. } => render_summary(summary),
    }
}
