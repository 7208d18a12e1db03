use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Map, Value};

use crate::seed;
use crate::state::AppState;
use crate::store::UserRecord;

/// `id` comparison is numeric: the path parameter is parsed as an integer
/// and matched against the record's `id` field coerced the same way.
fn matches_id(user: &UserRecord, id: i64) -> bool {
    user.get("id").and_then(Value::as_i64) == Some(id)
}

/// Next id is derived from the current collection length. Ids freed by a
/// delete are handed out again, so delete-then-create can repeat an id.
fn next_user_id(users: &[UserRecord]) -> i64 {
    users.len() as i64 + 1
}

/// Assemble a new record from the computed id and the client body.
///
/// Body fields land after the computed id, so a client-supplied `id`
/// replaces it. Long-standing observable behavior; kept as is.
fn new_record(id: i64, body: Map<String, Value>) -> UserRecord {
    let mut record = Map::new();
    record.insert("id".to_string(), json!(id));
    record.extend(body);
    record
}

/// GET /api/v1/users - the whole collection
pub async fn list(State(state): State<AppState>) -> Response {
    if let Err(err) = seed::ensure_seeded(&state).await {
        return err.into_response();
    }

    match state.store.read().await {
        Ok(users) => Json(users).into_response(),
        Err(err) => err.into_response(),
    }
}

/// GET /api/v1/users/:id - records matching the id, as an array
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    if let Err(err) = seed::ensure_seeded(&state).await {
        return err.into_response();
    }

    match state.store.read().await {
        Ok(users) => {
            let matching: Vec<&UserRecord> = users.iter().filter(|u| matches_id(u, id)).collect();
            if matching.is_empty() {
                Json(json!({ "status": "error", "errorText": "There are no users with such ID!" }))
                    .into_response()
            } else {
                Json(matching).into_response()
            }
        }
        Err(err) => err.into_response(),
    }
}

/// POST /api/v1/users - append a record, id = collection length + 1
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Response {
    if let Err(err) = seed::ensure_seeded(&state).await {
        return err.into_response();
    }

    let mut users = match state.store.read().await {
        Ok(users) => users,
        Err(err) => return err.into_response(),
    };

    let user_id = next_user_id(&users);
    users.push(new_record(user_id, body));

    match state.store.save(&users).await {
        // The reported id is always the computed one, even when the body
        // carried its own.
        Ok(()) => Json(json!({ "status": "success", "id": user_id })).into_response(),
        Err(err) => err.into_response(),
    }
}

/// PATCH /api/v1/users/:id - shallow-merge the body over the matching record
pub async fn patch_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Map<String, Value>>,
) -> Response {
    if let Err(err) = seed::ensure_seeded(&state).await {
        return err.into_response();
    }

    let users = match state.store.read().await {
        Ok(users) => users,
        Err(err) => return err.into_response(),
    };

    // A body containing "id" rewrites the record's identity for future
    // lookups. A miss is not an error: the unchanged collection is written
    // back and the request still succeeds.
    let users: Vec<UserRecord> = users
        .into_iter()
        .map(|mut user| {
            if matches_id(&user, id) {
                user.extend(body.clone());
            }
            user
        })
        .collect();

    match state.store.save(&users).await {
        Ok(()) => Json(json!({ "status": "success", "id": id })).into_response(),
        Err(err) => err.into_response(),
    }
}

/// DELETE /api/v1/users/:id - drop matching records, keep the rest in order
pub async fn delete_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    if let Err(err) = seed::ensure_seeded(&state).await {
        return err.into_response();
    }

    let mut users = match state.store.read().await {
        Ok(users) => users,
        Err(err) => return err.into_response(),
    };

    users.retain(|user| !matches_id(user, id));

    match state.store.save(&users).await {
        Ok(()) => Json(json!({ "status": "success", "id": id })).into_response(),
        Err(err) => err.into_response(),
    }
}

/// DELETE /api/v1/users - remove the backing file entirely
///
/// The next request that reads the collection re-seeds it from the remote
/// source. No existence check here: deleting an already-absent collection
/// reports an error like any other I/O failure.
pub async fn delete_collection(State(state): State<AppState>) -> Response {
    match state.store.destroy().await {
        Ok(()) => Json(json!({ "status": "success" })).into_response(),
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn id_match_is_numeric() {
        let user = body(&[("id", json!(7)), ("name", json!("G"))]);
        assert!(matches_id(&user, 7));
        assert!(!matches_id(&user, 8));

        let no_id = body(&[("name", json!("G"))]);
        assert!(!matches_id(&no_id, 7));
    }

    #[test]
    fn next_id_is_length_plus_one() {
        assert_eq!(next_user_id(&[]), 1);
        let users = vec![
            body(&[("id", json!(1))]),
            body(&[("id", json!(2))]),
        ];
        assert_eq!(next_user_id(&users), 3);
    }

    #[test]
    fn client_supplied_id_wins_over_computed() {
        let record = new_record(3, body(&[("id", json!(99)), ("name", json!("B"))]));
        assert_eq!(record["id"], json!(99));
        assert_eq!(record["name"], json!("B"));
    }

    #[test]
    fn computed_id_is_kept_when_body_has_none() {
        let record = new_record(3, body(&[("name", json!("B"))]));
        assert_eq!(record["id"], json!(3));
    }
}
