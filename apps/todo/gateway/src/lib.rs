//! HTTP/JSON gateway for the ToDo gRPC service
//!
//! Every route is transcoded into one `todo.v1.ToDoService` call over a
//! shared tonic channel:
//!
//! | Verb   | Path               | RPC     |
//! |--------|--------------------|---------|
//! | POST   | `/{api}/todo`      | Create  |
//! | GET    | `/{api}/todo/all`  | ReadAll |
//! | GET    | `/{api}/todo/{id}` | Read    |
//! | PUT    | `/{api}/todo/{id}` | Update  |
//! | DELETE | `/{api}/todo/{id}` | Delete  |

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use handlers::router;
