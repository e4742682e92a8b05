//! Given steps for done-log command BDD scenarios.

use super::world::{DoneLogWorld, run_async};
use donelog::donelog::{
    domain::{Category, CategoryId, Track, TrackId},
    services::{CommandContext, CreateDoneLogRequest},
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

fn add_track(world: &DoneLogWorld, id: &str, active: bool) -> Result<(), eyre::Report> {
    let track = Track::new(TrackId::new(id)?, None, active);
    world.tracks.insert(track).wrap_err("seed track")?;
    Ok(())
}

fn add_category(world: &DoneLogWorld, id: &str, active: bool) -> Result<(), eyre::Report> {
    let category = Category::new(CategoryId::new(id)?, active);
    world.categories.insert(category).wrap_err("seed category")?;
    Ok(())
}

#[given(r#"an active track "{id}""#)]
fn active_track(world: &mut DoneLogWorld, id: String) -> Result<(), eyre::Report> {
    add_track(world, &id, true)
}

#[given(r#"an inactive track "{id}""#)]
fn inactive_track(world: &mut DoneLogWorld, id: String) -> Result<(), eyre::Report> {
    add_track(world, &id, false)
}

#[given(r#"an active category "{id}""#)]
fn active_category(world: &mut DoneLogWorld, id: String) -> Result<(), eyre::Report> {
    add_category(world, &id, true)
}

#[given(r#"an inactive category "{id}""#)]
fn inactive_category(world: &mut DoneLogWorld, id: String) -> Result<(), eyre::Report> {
    add_category(world, &id, false)
}

#[given(r#"an existing done log "{title}" on track "{track}" in category "{category}""#)]
fn existing_done_log(
    world: &mut DoneLogWorld,
    title: String,
    track: String,
    category: String,
) -> Result<(), eyre::Report> {
    let request = CreateDoneLogRequest::new(title, track, category, 1, "2024-05-01");
    let id = run_async(world.create.handle(&CommandContext::new(), request))
        .wrap_err("create done log in scenario setup")?;
    world.existing_id = Some(id);
    Ok(())
}

#[given("the done log store rejects deletes")]
fn store_rejects_deletes(world: &mut DoneLogWorld) {
    world.store.reject_deletes();
}
