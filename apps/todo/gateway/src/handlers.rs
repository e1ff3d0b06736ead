use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rpc::todo::v1::{
    CreateRequest, DeleteRequest, ReadAllRequest, ReadRequest, UpdateRequest,
    to_do_service_client::ToDoServiceClient,
};
use serde::Serialize;
use tonic::transport::Channel;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::error::GatewayResult;
use crate::models::{
    CreatedJson, DeletedJson, ReadAllJson, ReadJson, ToDoBody, UpdatedJson,
};

type Client = ToDoServiceClient<Channel>;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// Routes of the gateway, with request tracing.
pub fn router(client: Client) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/{api}/todo", post(create))
        .route("/{api}/todo/all", get(read_all))
        .route("/{api}/todo/{id}", get(read).put(update).delete(delete))
        .with_state(client)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn create(
    State(mut client): State<Client>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<ToDoBody>, JsonRejection>,
) -> GatewayResult<impl IntoResponse> {
    let Path(api) = path?;
    let Json(body) = payload?;
    let to_do = body.into_wire(0)?;

    let response = client
        .create(CreateRequest {
            api,
            to_do: Some(to_do),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedJson::from(response.into_inner())),
    ))
}

async fn read(
    State(mut client): State<Client>,
    path: Result<Path<(String, i64)>, PathRejection>,
) -> GatewayResult<Json<ReadJson>> {
    let Path((api, id)) = path?;

    let response = client.read(ReadRequest { api, id }).await?;

    Ok(Json(response.into_inner().into()))
}

/// The id in the path wins over any id in the body.
async fn update(
    State(mut client): State<Client>,
    path: Result<Path<(String, i64)>, PathRejection>,
    payload: Result<Json<ToDoBody>, JsonRejection>,
) -> GatewayResult<Json<UpdatedJson>> {
    let Path((api, id)) = path?;
    let Json(body) = payload?;
    let to_do = body.into_wire(id)?;

    let response = client
        .update(UpdateRequest {
            api,
            to_do: Some(to_do),
        })
        .await?;

    Ok(Json(response.into_inner().into()))
}

async fn delete(
    State(mut client): State<Client>,
    path: Result<Path<(String, i64)>, PathRejection>,
) -> GatewayResult<Json<DeletedJson>> {
    let Path((api, id)) = path?;

    let response = client.delete(DeleteRequest { api, id }).await?;

    Ok(Json(response.into_inner().into()))
}

async fn read_all(
    State(mut client): State<Client>,
    path: Result<Path<String>, PathRejection>,
) -> GatewayResult<Json<ReadAllJson>> {
    let Path(api) = path?;

    let response = client.read_all(ReadAllRequest { api }).await?;

    Ok(Json(response.into_inner().into()))
}
