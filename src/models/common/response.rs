use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::ClassroomError;

// 统一的错误响应结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "registry.ts")]
pub struct ErrorResponse {
    pub code: String,
    pub error: String,
    pub message: String,
}

impl From<&ClassroomError> for ErrorResponse {
    fn from(err: &ClassroomError) -> Self {
        Self {
            code: err.code().to_string(),
            error: err.error_type().to_string(),
            message: err.message().to_string(),
        }
    }
}
