use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

#[derive(Error, Debug)]
pub enum GrpcError {
  #[error("invalid gRPC address '{addr}': {source}")]
  InvalidUri {
    addr: String,
    #[source]
    source: tonic::transport::Error,
  },

  #[error("failed to connect to '{addr}': {source}")]
  ConnectionFailed {
    addr: String,
    #[source]
    source: tonic::transport::Error,
  },
}
