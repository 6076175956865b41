use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;

use crate::errors::ClassroomError;
use crate::models::Model;
use crate::services::persistence::{self, not_found};
use crate::storage::Storage;

pub async fn delete_resource<M: Model>(
    storage: &dyn Storage,
    id: Option<i64>,
) -> ActixResult<HttpResponse> {
    let id = id.ok_or_else(|| ClassroomError::validation("Missing id query parameter"))?;

    if !persistence::delete::<M>(storage, id).await? {
        return Err(not_found(M::KIND, id).into());
    }

    info!("{} {} deleted", M::KIND, id);
    Ok(HttpResponse::Ok().finish())
}
