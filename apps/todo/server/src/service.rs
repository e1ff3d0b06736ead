use domain_todo::{API_VERSION, ToDoService, ToDoStore};
use rpc::todo::v1::{
    CreateRequest, CreateResponse, DeleteRequest, DeleteResponse, ReadAllRequest,
    ReadAllResponse, ReadRequest, ReadResponse, UpdateRequest, UpdateResponse,
    to_do_service_server::{self, ToDoServiceServer},
};
use tonic::codec::CompressionEncoding;
use tonic::{Request, Response, Status};
use tracing::info;

/// Adapts [`ToDoService`] to the generated `todo.v1.ToDoService` trait.
pub struct ToDoServiceImpl<S: ToDoStore> {
    service: ToDoService<S>,
}

impl<S: ToDoStore> ToDoServiceImpl<S> {
    pub fn new(service: ToDoService<S>) -> Self {
        Self { service }
    }
}

/// Wraps `service` in the tonic server, with Zstd in both directions when
/// `compression` is set.
pub fn grpc_service<S: ToDoStore>(
    service: ToDoService<S>,
    compression: bool,
) -> ToDoServiceServer<ToDoServiceImpl<S>> {
    let server = ToDoServiceServer::new(ToDoServiceImpl::new(service));

    if compression {
        server
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd)
    } else {
        server
    }
}

#[tonic::async_trait]
impl<S: ToDoStore> to_do_service_server::ToDoService for ToDoServiceImpl<S> {
    async fn create(
        &self,
        request: Request<CreateRequest>,
    ) -> Result<Response<CreateResponse>, Status> {
        let req = request.into_inner();

        let id = self.service.create(&req.api, req.to_do).await?;

        info!(id, "Created ToDo");
        Ok(Response::new(CreateResponse {
            api: API_VERSION.to_string(),
            id,
        }))
    }

    async fn read(&self, request: Request<ReadRequest>) -> Result<Response<ReadResponse>, Status> {
        let req = request.into_inner();

        let to_do = self.service.read(&req.api, req.id).await?;

        Ok(Response::new(ReadResponse {
            api: API_VERSION.to_string(),
            to_do: Some(to_do),
        }))
    }

    async fn update(
        &self,
        request: Request<UpdateRequest>,
    ) -> Result<Response<UpdateResponse>, Status> {
        let req = request.into_inner();

        let updated = self.service.update(&req.api, req.to_do).await?;

        Ok(Response::new(UpdateResponse {
            api: API_VERSION.to_string(),
            updated,
        }))
    }

    async fn delete(
        &self,
        request: Request<DeleteRequest>,
    ) -> Result<Response<DeleteResponse>, Status> {
        let req = request.into_inner();

        let deleted = self.service.delete(&req.api, req.id).await?;

        info!(id = req.id, "Deleted ToDo");
        Ok(Response::new(DeleteResponse {
            api: API_VERSION.to_string(),
            deleted,
        }))
    }

    async fn read_all(
        &self,
        request: Request<ReadAllRequest>,
    ) -> Result<Response<ReadAllResponse>, Status> {
        let req = request.into_inner();

        let to_dos = self.service.read_all(&req.api).await?;

        Ok(Response::new(ReadAllResponse {
            api: API_VERSION.to_string(),
            to_dos,
        }))
    }
}
