//! Track and category activity rules through the in-memory adapters.

use super::helpers::{App, app};
use donelog::donelog::services::{
    CommandContext, CreateDoneLogRequest, DoneLogCommandError, UpdateDoneLogRequest,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deactivated_track_blocks_new_entries(app: App) -> Result<(), eyre::Report> {
    app.add_track("daily", false)?;

    let result = app
        .create
        .handle(
            &CommandContext::new(),
            CreateDoneLogRequest::new("Run", "daily", "reading", 1, "2024-05-01"),
        )
        .await;

    eyre::ensure!(
        matches!(result, Err(DoneLogCommandError::TrackNotActive(_))),
        "expected TrackNotActive, got {result:?}"
    );
    eyre::ensure!(app.store.record_count()? == 0, "nothing should be saved");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_into_archived_category_keeps_stored_record(app: App) -> Result<(), eyre::Report> {
    let ctx = CommandContext::new();
    let id = app
        .create
        .handle(
            &ctx,
            CreateDoneLogRequest::new("Run", "daily", "reading", 1, "2024-05-01"),
        )
        .await?;
    let before = app.stored(&id).await?;

    let result = app
        .update
        .handle(
            &ctx,
            UpdateDoneLogRequest::new(id.as_str(), "Run far", "archived", 2, "2024-05-01"),
        )
        .await;

    eyre::ensure!(
        matches!(result, Err(DoneLogCommandError::CategoryNotActive(_))),
        "expected CategoryNotActive, got {result:?}"
    );
    eyre::ensure!(app.stored(&id).await? == before, "record changed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deactivated_track_does_not_block_updates(app: App) -> Result<(), eyre::Report> {
    let ctx = CommandContext::new();
    let id = app
        .create
        .handle(
            &ctx,
            CreateDoneLogRequest::new("Run", "daily", "reading", 1, "2024-05-01"),
        )
        .await?;
    app.add_track("daily", false)?;

    app.update
        .handle(
            &ctx,
            UpdateDoneLogRequest::new(id.as_str(), "Run", "writing", 4, "2024-05-01"),
        )
        .await?;

    let stored = app
        .stored(&id)
        .await?
        .ok_or_else(|| eyre::eyre!("record missing"))?;
    eyre::ensure!(stored.count == 4, "count not updated");
    Ok(())
}
