use crate::error::StoreError;
use crate::state::AppState;
use crate::store::UserRecord;

/// Make sure the users file exists before a handler touches it.
///
/// When the file is absent the collection is seeded by fetching the remote
/// users resource and writing the returned array verbatim. The existence
/// check runs on every request; there is no "already seeded" memo, so after
/// a collection delete the very next request repopulates the file.
///
/// A failed fetch propagates to the caller. Handlers do not wrap this in
/// their error envelope, so an unreachable seed source fails every request
/// that needed seeding.
pub async fn ensure_seeded(state: &AppState) -> Result<(), StoreError> {
    if state.store.exists().await {
        return Ok(());
    }

    tracing::info!(url = %state.seed_url, "users file missing, seeding from remote source");

    let users: Vec<UserRecord> = state
        .http
        .get(&state.seed_url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    state.store.save(&users).await?;
    tracing::info!(count = users.len(), "seeded users collection");

    Ok(())
}
