use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::Model;
use crate::services::persistence::{self, not_found};
use crate::storage::Storage;

pub async fn get_resource<M: Model>(storage: &dyn Storage, id: i64) -> ActixResult<HttpResponse> {
    match persistence::fetch_one::<M>(storage, id).await? {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Err(not_found(M::KIND, id).into()),
    }
}
