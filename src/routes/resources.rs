use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::Model;
use crate::models::common::IdQuery;
use crate::services::resources::{
    create, delete, get, list, method_not_supported, update,
};
use crate::storage::Storage;

// HTTP处理程序
pub async fn read_resource<M: Model>(
    storage: web::Data<Arc<dyn Storage>>,
    query: web::Query<IdQuery>,
) -> ActixResult<HttpResponse> {
    let storage = storage.get_ref().as_ref();
    match query.id {
        Some(id) => get::get_resource::<M>(storage, id).await,
        None => list::list_resources::<M>(storage).await,
    }
}

pub async fn create_resource<M: Model>(
    storage: web::Data<Arc<dyn Storage>>,
    item: web::Json<M>,
) -> ActixResult<HttpResponse> {
    create::create_resource(storage.get_ref().as_ref(), item.into_inner()).await
}

pub async fn update_resource<M: Model>(
    storage: web::Data<Arc<dyn Storage>>,
    item: web::Json<M>,
) -> ActixResult<HttpResponse> {
    update::update_resource(storage.get_ref().as_ref(), item.into_inner()).await
}

pub async fn delete_resource<M: Model>(
    storage: web::Data<Arc<dyn Storage>>,
    query: web::Query<IdQuery>,
) -> ActixResult<HttpResponse> {
    delete::delete_resource::<M>(storage.get_ref().as_ref(), query.id).await
}

// 配置路由，每类实体一个路径，按方法分派
pub fn configure_resource_routes<M: Model>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(M::KIND.path())
            .route(web::get().to(read_resource::<M>))
            .route(web::post().to(create_resource::<M>))
            .route(web::put().to(update_resource::<M>))
            .route(web::delete().to(delete_resource::<M>))
            .default_service(web::to(method_not_supported)),
    );
}
