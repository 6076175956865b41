use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::services::resources::{lookup, method_not_supported};
use crate::storage::Storage;

pub async fn get_record(
    storage: web::Data<Arc<dyn Storage>>,
    path: web::Path<(String, i64)>,
) -> ActixResult<HttpResponse> {
    let (resource, id) = path.into_inner();
    lookup::lookup_record(storage.get_ref().as_ref(), &resource, id).await
}

// 必须在具体资源路由之后注册
pub fn configure_record_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{resource}/{id}")
            .route(web::get().to(get_record))
            .default_service(web::to(method_not_supported)),
    );
}
