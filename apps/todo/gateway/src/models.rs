//! JSON shapes of the gateway, mirroring the `todo.v1` messages.
//!
//! `reminder` travels as an RFC 3339 string.

use prost_types::Timestamp;
use rpc::todo::v1::{
    CreateResponse, DeleteResponse, ReadAllResponse, ReadResponse, ToDo, UpdateResponse,
};
use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, GatewayResult};

/// Request body of Create and Update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToDoBody {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub reminder: Option<String>,
}

impl ToDoBody {
    /// Builds the wire message, rejecting an unparseable reminder.
    pub fn into_wire(self, id: i64) -> GatewayResult<ToDo> {
        let reminder = self
            .reminder
            .map(|raw| {
                raw.parse::<Timestamp>()
                    .map_err(|e| GatewayError::InvalidReminder(format!("'{}': {}", raw, e)))
            })
            .transpose()?;

        Ok(ToDo {
            id,
            title: self.title,
            description: self.description,
            reminder,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToDoJson {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<String>,
}

impl From<ToDo> for ToDoJson {
    fn from(to_do: ToDo) -> Self {
        Self {
            id: to_do.id,
            title: to_do.title,
            description: to_do.description,
            reminder: to_do.reminder.map(|ts| ts.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedJson {
    pub api: String,
    pub id: i64,
}

impl From<CreateResponse> for CreatedJson {
    fn from(res: CreateResponse) -> Self {
        Self {
            api: res.api,
            id: res.id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadJson {
    pub api: String,
    pub to_do: Option<ToDoJson>,
}

impl From<ReadResponse> for ReadJson {
    fn from(res: ReadResponse) -> Self {
        Self {
            api: res.api,
            to_do: res.to_do.map(ToDoJson::from),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatedJson {
    pub api: String,
    pub updated: i64,
}

impl From<UpdateResponse> for UpdatedJson {
    fn from(res: UpdateResponse) -> Self {
        Self {
            api: res.api,
            updated: res.updated,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedJson {
    pub api: String,
    pub deleted: i64,
}

impl From<DeleteResponse> for DeletedJson {
    fn from(res: DeleteResponse) -> Self {
        Self {
            api: res.api,
            deleted: res.deleted,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadAllJson {
    pub api: String,
    pub to_dos: Vec<ToDoJson>,
}

impl From<ReadAllResponse> for ReadAllJson {
    fn from(res: ReadAllResponse) -> Self {
        Self {
            api: res.api,
            to_dos: res.to_dos.into_iter().map(ToDoJson::from).collect(),
        }
    }
}
