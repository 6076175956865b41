use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;

use crate::models::Model;
use crate::services::persistence;
use crate::storage::Storage;

pub async fn update_resource<M: Model>(storage: &dyn Storage, item: M) -> ActixResult<HttpResponse> {
    persistence::update(storage, &item).await?;
    info!("{} {} updated", M::KIND, item.id());
    Ok(HttpResponse::Ok().finish())
}
