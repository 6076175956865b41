use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::Model;
use crate::services::persistence;
use crate::storage::Storage;

pub async fn list_resources<M: Model>(storage: &dyn Storage) -> ActixResult<HttpResponse> {
    let items = persistence::fetch_all::<M>(storage).await?;
    Ok(HttpResponse::Ok().json(items))
}
