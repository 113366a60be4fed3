//! Interactive drill-down through the loaded precincts.
//!
//! Drives [`SelectionState`] the same way the map does: picking a state or
//! county is a breadcrumb click, looking up a GEOID is a precinct click.

use dialoguer::{Input, Select};
use precinct_map_cli_utils::{IndicatifProgress, MultiProgress};
use precinct_map_election::{DataSource, PrecinctCollection, SelectionState};
use precinct_map_election_models::{AggregateScope, BreadcrumbTarget, Selection};

use crate::report;

enum Step {
    County(String),
    Precinct,
    Crumb(BreadcrumbTarget),
    Clear,
    Quit,
}

/// Loads the collection and lets the user walk state, county, and
/// precinct selections until they quit.
///
/// # Errors
///
/// * If the collection fails to load
/// * If a prompt cannot be shown
pub async fn run(
    multi: &MultiProgress,
    source: &DataSource,
) -> Result<(), Box<dyn std::error::Error>> {
    let progress = IndicatifProgress::load_bar(multi, &format!("Loading {source}"));
    let collection = source.load(progress.as_ref()).await?;

    let states = collection.states();
    if states.is_empty() {
        println!("No precincts with a recognizable GEOID in {source}.");
        return Ok(());
    }

    let idx = Select::new()
        .with_prompt("State")
        .items(&states)
        .default(0)
        .interact()?;

    let mut selection = SelectionState::new();
    selection.select_scope(&collection, AggregateScope::state(states[idx].clone()));

    loop {
        println!();
        println!("{}", report::render_breadcrumbs(&selection.breadcrumbs()));
        println!("{}", report::render_selection(selection.selection()));
        println!();

        match prompt_step(&collection, &selection)? {
            Step::County(state) => {
                let counties = collection.counties(&state);
                if counties.is_empty() {
                    println!("No counties found for {state}.");
                    continue;
                }
                let idx = Select::new()
                    .with_prompt("County")
                    .items(&counties)
                    .default(0)
                    .interact()?;
                selection.select_scope(
                    &collection,
                    AggregateScope::county(state, counties[idx].clone()),
                );
            }
            Step::Precinct => {
                let geoid: String = Input::new().with_prompt("GEOID").interact_text()?;
                let geoid = geoid.trim();
                if selection.click_feature(&collection, geoid).is_none() {
                    println!("No precinct with GEOID {geoid}.");
                }
            }
            Step::Crumb(target) => {
                selection.click_breadcrumb(&collection, &target);
            }
            Step::Clear => {
                selection.clear();
            }
            Step::Quit => return Ok(()),
        }
    }
}

fn prompt_step(
    collection: &PrecinctCollection,
    selection: &SelectionState,
) -> Result<Step, dialoguer::Error> {
    let mut options: Vec<(String, Step)> = Vec::new();

    if let Selection::Aggregate {
        scope: AggregateScope::State { state },
        ..
    } = selection.selection()
    {
        options.push(("Pick a county".to_string(), Step::County(state.clone())));
    }
    if !collection.is_empty() {
        options.push(("Look up a precinct GEOID".to_string(), Step::Precinct));
    }
    for crumb in selection.breadcrumbs() {
        if !crumb.active {
            options.push((format!("Back to {}", crumb.label), Step::Crumb(crumb.target)));
        }
    }
    if !selection.selection().is_none() {
        options.push(("Clear selection".to_string(), Step::Clear));
    }
    options.push(("Quit".to_string(), Step::Quit));

    let labels: Vec<&str> = options.iter().map(|(label, _)| label.as_str()).collect();
    let idx = Select::new()
        .with_prompt("Next")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options.swap_remove(idx).1)
}
