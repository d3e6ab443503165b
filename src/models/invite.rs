use serde::{Deserialize, Serialize};

/// Payload of a `sendTrainerInvite` invocation
#[derive(Debug, Clone, Deserialize)]
pub struct InviteRequest {
    pub name: String,
    pub email: String,
}

/// Outcome reported back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InviteResult {
    pub fn sent() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Callable request envelope: `{"data": ...}`
#[derive(Debug, Deserialize)]
pub struct CallableRequest<T> {
    pub data: T,
}

/// Callable response envelope: `{"result": ...}`
#[derive(Debug, Serialize, Deserialize)]
pub struct CallableResponse<T> {
    pub result: T,
}
