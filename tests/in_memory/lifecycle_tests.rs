//! Create, update and delete through the in-memory adapters.

use super::helpers::{App, app};
use donelog::donelog::services::{
    CommandContext, CreateDoneLogRequest, DeleteDoneLogRequest, UpdateDoneLogRequest,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_update_delete_round_trip(app: App) -> Result<(), eyre::Report> {
    let ctx = CommandContext::new();
    let id = app
        .create
        .handle(
            &ctx,
            CreateDoneLogRequest::new("  Read a chapter  ", "daily", "reading", 1, "2024-05-01"),
        )
        .await?;

    let created = app
        .stored(&id)
        .await?
        .ok_or_else(|| eyre::eyre!("created record missing"))?;
    eyre::ensure!(created.title == "Read a chapter", "title was not trimmed");
    eyre::ensure!(created.track_id == "daily", "track mismatch");

    app.update
        .handle(
            &ctx,
            UpdateDoneLogRequest::new(id.as_str(), "Wrote notes", "writing", 3, "2024-05-02"),
        )
        .await?;
    let updated = app
        .stored(&id)
        .await?
        .ok_or_else(|| eyre::eyre!("updated record missing"))?;
    eyre::ensure!(updated.title == "Wrote notes", "title not updated");
    eyre::ensure!(updated.category_id == "writing", "category not updated");
    eyre::ensure!(updated.count == 3, "count not updated");
    eyre::ensure!(updated.track_id == "daily", "track must not change");

    app.delete
        .handle(&ctx, DeleteDoneLogRequest::new(id.as_str()))
        .await?;
    eyre::ensure!(app.stored(&id).await?.is_none(), "record still present");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_ids_are_distinct_and_ulid_shaped(app: App) -> Result<(), eyre::Report> {
    let ctx = CommandContext::new();
    let mut ids = Vec::new();
    for count in 1..=3 {
        let id = app
            .create
            .handle(
                &ctx,
                CreateDoneLogRequest::new("Push-ups", "daily", "reading", count, "2024-05-01"),
            )
            .await?;
        eyre::ensure!(id.as_str().len() == 26, "unexpected id length: {id}");
        ids.push(id);
    }

    ids.sort();
    ids.dedup();
    eyre::ensure!(ids.len() == 3, "generated ids collided");
    eyre::ensure!(app.store.record_count()? == 3, "expected three stored records");
    Ok(())
}
