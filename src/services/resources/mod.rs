//! 资源处理逻辑
//!
//! 四类实体共用的列表、读取、创建、更新与删除，外加按标签读取和班级选课。

pub mod create;
pub mod delete;
pub mod enrollment;
pub mod get;
pub mod list;
pub mod lookup;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::ClassroomError;

/// 不支持的 HTTP 方法统一返回 400
pub async fn method_not_supported(request: HttpRequest) -> ActixResult<HttpResponse> {
    Err(ClassroomError::method_not_supported(format!(
        "Method {} not supported",
        request.method()
    ))
    .into())
}
