//! 请求参数解析错误处理
//!
//! 将 actix-web 提取器的解析失败统一转换为 Decode 错误 (400)。

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{Error, HttpRequest, web};
use tracing::debug;

use crate::errors::ClassroomError;

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON body rejected on {}: {}", req.path(), err);
    ClassroomError::decode(format!("Invalid JSON body: {err}")).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query string rejected on {}: {}", req.path(), err);
    ClassroomError::decode(format!("Invalid query parameters: {err}")).into()
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    debug!("Path rejected on {}: {}", req.path(), err);
    ClassroomError::decode(format!("Invalid path parameters: {err}")).into()
}

/// 注册提取器配置
///
/// JSON 请求体不要求 Content-Type，客户端直接发送 JSON 文本即可。
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(
            web::JsonConfig::default()
                .content_type_required(false)
                .error_handler(json_error_handler),
        );
}
