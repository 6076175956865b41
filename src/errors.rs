//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称和 HTTP 状态码。

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::models::common::ErrorResponse;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - status() 方法 - 返回对应的 HTTP 状态码
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_classroom_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $status:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ClassroomError {
            $($variant(String),)*
        }

        impl ClassroomError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassroomError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassroomError::$variant(_) => $type_name,)*
                }
            }

            /// 获取 HTTP 状态码
            pub fn status(&self) -> StatusCode {
                match self {
                    $(ClassroomError::$variant(_) => StatusCode::$status,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassroomError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassroomError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassroomError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classroom_errors! {
    DatabaseConfig("E001", "Database Configuration Error", INTERNAL_SERVER_ERROR),
    DatabaseConnection("E002", "Database Connection Error", INTERNAL_SERVER_ERROR),
    Statement("E003", "Statement Error", INTERNAL_SERVER_ERROR),
    Persistence("E004", "Persistence Error", INTERNAL_SERVER_ERROR),
    Decode("E005", "Decode Error", BAD_REQUEST),
    Validation("E006", "Validation Error", BAD_REQUEST),
    UnknownResource("E007", "Unknown Resource", BAD_REQUEST),
    MethodNotSupported("E008", "Method Not Supported", BAD_REQUEST),
    NotFound("E009", "Resource Not Found", NOT_FOUND),
    Serialization("E010", "Serialization Error", INTERNAL_SERVER_ERROR),
    Io("E011", "I/O Error", INTERNAL_SERVER_ERROR),
}

impl ClassroomError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClassroomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassroomError {}

// 在处理器边界统一转换为 HTTP 响应
impl ResponseError for ClassroomError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self.format_simple());
        }
        HttpResponse::build(status).json(ErrorResponse::from(self))
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ClassroomError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
                ClassroomError::DatabaseConnection(err.to_string())
            }
            _ => ClassroomError::Statement(err.to_string()),
        }
    }
}

impl From<std::io::Error> for ClassroomError {
    fn from(err: std::io::Error) -> Self {
        ClassroomError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClassroomError {
    fn from(err: serde_json::Error) -> Self {
        ClassroomError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassroomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClassroomError::database_config("test").code(), "E001");
        assert_eq!(ClassroomError::statement("test").code(), "E003");
        assert_eq!(ClassroomError::decode("test").code(), "E005");
        assert_eq!(ClassroomError::not_found("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ClassroomError::unknown_resource("test").error_type(),
            "Unknown Resource"
        );
        assert_eq!(
            ClassroomError::method_not_supported("test").error_type(),
            "Method Not Supported"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ClassroomError::decode("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ClassroomError::method_not_supported("x").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ClassroomError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ClassroomError::persistence("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_db_err_classification() {
        let err: ClassroomError =
            sea_orm::DbErr::Custom("near \"SELEC\": syntax error".into()).into();
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("syntax error"));
    }

    #[test]
    fn test_format_simple() {
        let err = ClassroomError::not_found("Student 7 not found");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Student 7 not found"));
    }
}
