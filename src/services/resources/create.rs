use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;

use crate::models::Model;
use crate::services::persistence;
use crate::storage::Storage;

/// 创建资源，响应体为纯文本的新 id
pub async fn create_resource<M: Model>(storage: &dyn Storage, item: M) -> ActixResult<HttpResponse> {
    let id = persistence::save(storage, &item).await?;
    info!("{} {} created", M::KIND, id);
    Ok(HttpResponse::Created()
        .content_type("text/plain; charset=utf-8")
        .body(id.to_string()))
}
