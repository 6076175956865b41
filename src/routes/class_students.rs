use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::services::resources::{enrollment, method_not_supported};
use crate::storage::Storage;

pub async fn enroll_student(
    storage: web::Data<Arc<dyn Storage>>,
    path: web::Path<(i64, String)>,
) -> ActixResult<HttpResponse> {
    let (class_id, student_id) = path.into_inner();
    enrollment::enroll_student(storage.get_ref().as_ref(), class_id, student_id).await
}

pub async fn withdraw_student(
    storage: web::Data<Arc<dyn Storage>>,
    path: web::Path<(i64, String)>,
) -> ActixResult<HttpResponse> {
    let (class_id, student_id) = path.into_inner();
    enrollment::withdraw_student(storage.get_ref().as_ref(), class_id, student_id).await
}

pub fn configure_class_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/classes/{class_id}/students/{student_id}")
            .route(web::put().to(enroll_student))
            .route(web::delete().to(withdraw_student))
            .default_service(web::to(method_not_supported)),
    );
}
