use actix_web::{HttpResponse, Result as ActixResult};
use tracing::debug;

use crate::services::persistence;
use crate::storage::Storage;

/// 按资源标签和 id 读取，例如 `/students/3`
pub async fn lookup_record(
    storage: &dyn Storage,
    resource: &str,
    id: i64,
) -> ActixResult<HttpResponse> {
    let record = persistence::get_by_name(storage, resource, id).await?;
    debug!("Resolved '{}' to {} {}", resource, record.kind(), record.id());
    Ok(HttpResponse::Ok().json(record))
}
