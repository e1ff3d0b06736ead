//! Demonstration client: walks one ToDo through its whole lifecycle.

use std::time::Duration;

use eyre::{Result, WrapErr};
use prost_types::Timestamp;
use rpc::todo::v1::{
    CreateRequest, DeleteRequest, ReadAllRequest, ReadRequest, ToDo, UpdateRequest,
    to_do_service_client::ToDoServiceClient,
};
use tonic::transport::Channel;
use tracing::info;

pub const API_VERSION: &str = "v1";

/// Deadline of every call
pub const CALL_TIMEOUT: Duration = Duration::from_secs(5);

fn request<T>(message: T) -> tonic::Request<T> {
    let mut request = tonic::Request::new(message);
    request.set_timeout(CALL_TIMEOUT);
    request
}

/// Create, Read, Update, ReadAll, then Delete; stops at the first failure.
///
/// Returns the id of the ToDo that was created and removed.
pub async fn run_sequence(client: &mut ToDoServiceClient<Channel>, now: Timestamp) -> Result<i64> {
    let suffix = now.seconds.to_string();
    let mut to_do = ToDo {
        id: 0,
        title: format!("title ({})", suffix),
        description: format!("description ({})", suffix),
        reminder: Some(now),
    };

    let created = client
        .create(request(CreateRequest {
            api: API_VERSION.to_string(),
            to_do: Some(to_do.clone()),
        }))
        .await
        .wrap_err("Create failed")?
        .into_inner();
    info!(id = created.id, "Create result");
    let id = created.id;

    let read = client
        .read(request(ReadRequest {
            api: API_VERSION.to_string(),
            id,
        }))
        .await
        .wrap_err("Read failed")?
        .into_inner();
    info!(to_do = ?read.to_do, "Read result");

    to_do.id = id;
    to_do.description.push_str(" + updated");
    let updated = client
        .update(request(UpdateRequest {
            api: API_VERSION.to_string(),
            to_do: Some(to_do),
        }))
        .await
        .wrap_err("Update failed")?
        .into_inner();
    info!(updated = updated.updated, "Update result");

    let all = client
        .read_all(request(ReadAllRequest {
            api: API_VERSION.to_string(),
        }))
        .await
        .wrap_err("ReadAll failed")?
        .into_inner();
    info!(count = all.to_dos.len(), to_dos = ?all.to_dos, "ReadAll result");

    let deleted = client
        .delete(request(DeleteRequest {
            api: API_VERSION.to_string(),
            id,
        }))
        .await
        .wrap_err("Delete failed")?
        .into_inner();
    info!(deleted = deleted.deleted, "Delete result");

    Ok(id)
}

/// Current time at microsecond precision, which is what the store keeps.
pub fn now() -> Timestamp {
    let now = chrono::Utc::now();
    Timestamp {
        seconds: now.timestamp(),
        nanos: (now.timestamp_subsec_micros() * 1_000) as i32,
    }
}
