//! Then steps for done-log command BDD scenarios.

use super::world::{DoneLogWorld, run_async};
use donelog::donelog::{ports::DoneLogRepository, services::DoneLogCommandError};
use eyre::WrapErr;
use rstest_bdd_macros::then;

fn last_error(world: &DoneLogWorld) -> Result<&DoneLogCommandError, eyre::Report> {
    match world.last_outcome.as_ref() {
        Some(Err(err)) => Ok(err),
        Some(Ok(())) => Err(eyre::eyre!("expected the command to fail, but it succeeded")),
        None => Err(eyre::eyre!("no command was run in this scenario")),
    }
}

#[then("the command succeeds")]
fn command_succeeds(world: &DoneLogWorld) -> Result<(), eyre::Report> {
    match world.last_outcome.as_ref() {
        Some(Ok(())) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected success, got {err:?}")),
        None => Err(eyre::eyre!("no command was run in this scenario")),
    }
}

#[then(r#"the created done log has title "{title}" and count {count:i32}"#)]
fn created_log_has(world: &DoneLogWorld, title: String, count: i32) -> Result<(), eyre::Report> {
    let id = world
        .created_id
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created done log id"))?;
    let stored = run_async(world.store.find_by_id(id))
        .wrap_err("load created done log")?
        .ok_or_else(|| eyre::eyre!("created done log not stored"))?;

    if stored.title != title || stored.count != count {
        return Err(eyre::eyre!(
            "expected ({title}, {count}), found ({}, {})",
            stored.title,
            stored.count
        ));
    }
    Ok(())
}

#[then("the command fails because the track is not active")]
fn fails_track_not_active(world: &DoneLogWorld) -> Result<(), eyre::Report> {
    let err = last_error(world)?;
    if !matches!(err, DoneLogCommandError::TrackNotActive(_)) {
        return Err(eyre::eyre!("expected TrackNotActive, got {err:?}"));
    }
    Ok(())
}

#[then("the command fails because the category is not active")]
fn fails_category_not_active(world: &DoneLogWorld) -> Result<(), eyre::Report> {
    let err = last_error(world)?;
    if !matches!(err, DoneLogCommandError::CategoryNotActive(_)) {
        return Err(eyre::eyre!("expected CategoryNotActive, got {err:?}"));
    }
    Ok(())
}

#[then("the command fails because the done log was not found")]
fn fails_not_found(world: &DoneLogWorld) -> Result<(), eyre::Report> {
    let err = last_error(world)?;
    if !matches!(err, DoneLogCommandError::NotFound(_)) {
        return Err(eyre::eyre!("expected NotFound, got {err:?}"));
    }
    Ok(())
}

#[then("the command fails with a repository error")]
fn fails_with_repository_error(world: &DoneLogWorld) -> Result<(), eyre::Report> {
    let err = last_error(world)?;
    if !matches!(err, DoneLogCommandError::Repository(_)) {
        return Err(eyre::eyre!("expected Repository error, got {err:?}"));
    }
    Ok(())
}

#[then("no done log is stored")]
fn nothing_stored(world: &DoneLogWorld) -> Result<(), eyre::Report> {
    let count = world.store.record_count().wrap_err("count records")?;
    if count != 0 {
        return Err(eyre::eyre!("expected an empty store, found {count} records"));
    }
    Ok(())
}

#[then(r#"the existing done log still has category "{category}""#)]
fn existing_keeps_category(world: &DoneLogWorld, category: String) -> Result<(), eyre::Report> {
    let id = world
        .existing_id
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing existing done log in scenario world"))?;
    let stored = run_async(world.store.find_by_id(id))
        .wrap_err("load existing done log")?
        .ok_or_else(|| eyre::eyre!("existing done log vanished"))?;

    if stored.category_id != category {
        return Err(eyre::eyre!(
            "expected category {category}, found {}",
            stored.category_id
        ));
    }
    Ok(())
}
