// @generated
// This file is @generated by prost-build.
/// Task we have to do
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ToDo {
    /// Unique integer identifier of the todo task
    #[prost(int64, tag = "1")]
    pub id: i64,
    /// Title of the task
    #[prost(string, tag = "2")]
    pub title: ::prost::alloc::string::String,
    /// Detail description of the todo task
    #[prost(string, tag = "3")]
    pub description: ::prost::alloc::string::String,
    /// Date and time to remind the todo task
    #[prost(message, optional, tag = "4")]
    pub reminder: ::core::option::Option<::prost_types::Timestamp>,
}
/// Request data to create new todo task
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateRequest {
    /// API version requested by the client; empty means the current version
    #[prost(string, tag = "1")]
    pub api: ::prost::alloc::string::String,
    /// Task entity to add
    #[prost(message, optional, tag = "2")]
    pub to_do: ::core::option::Option<ToDo>,
}
/// Contains data of created todo task
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CreateResponse {
    #[prost(string, tag = "1")]
    pub api: ::prost::alloc::string::String,
    /// ID of created task
    #[prost(int64, tag = "2")]
    pub id: i64,
}
/// Request data to read todo task
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ReadRequest {
    #[prost(string, tag = "1")]
    pub api: ::prost::alloc::string::String,
    /// Unique integer identifier of the todo task
    #[prost(int64, tag = "2")]
    pub id: i64,
}
/// Contains todo task data specified in by ID request
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadResponse {
    #[prost(string, tag = "1")]
    pub api: ::prost::alloc::string::String,
    /// Task entity read by ID
    #[prost(message, optional, tag = "2")]
    pub to_do: ::core::option::Option<ToDo>,
}
/// Request data to update todo task
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateRequest {
    #[prost(string, tag = "1")]
    pub api: ::prost::alloc::string::String,
    /// Task entity to update
    #[prost(message, optional, tag = "2")]
    pub to_do: ::core::option::Option<ToDo>,
}
/// Contains status of update operation
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct UpdateResponse {
    #[prost(string, tag = "1")]
    pub api: ::prost::alloc::string::String,
    /// Contains number of entities have been updated
    /// Equals 1 in case of successful update
    #[prost(int64, tag = "2")]
    pub updated: i64,
}
/// Request data to delete todo task
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DeleteRequest {
    #[prost(string, tag = "1")]
    pub api: ::prost::alloc::string::String,
    /// Unique integer identifier of the todo task to delete
    #[prost(int64, tag = "2")]
    pub id: i64,
}
/// Contains status of delete operation
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DeleteResponse {
    #[prost(string, tag = "1")]
    pub api: ::prost::alloc::string::String,
    /// Contains number of entities have been deleted
    /// Equals 1 in case of successful delete
    #[prost(int64, tag = "2")]
    pub deleted: i64,
}
/// Request data to read all todo task
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ReadAllRequest {
    #[prost(string, tag = "1")]
    pub api: ::prost::alloc::string::String,
}
/// Contains list of all todo tasks
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadAllResponse {
    #[prost(string, tag = "1")]
    pub api: ::prost::alloc::string::String,
    /// List of all todo tasks, ordered by id
    #[prost(message, repeated, tag = "2")]
    pub to_dos: ::prost::alloc::vec::Vec<ToDo>,
}
include!("todo.v1.tonic.rs");
// @@protoc_insertion_point(module)
