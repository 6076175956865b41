use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;

use crate::errors::ClassroomError;
use crate::models::ResourceKind;
use crate::models::classes::entities::Class;
use crate::services::persistence::{self, not_found};
use crate::storage::Storage;

async fn load_class(storage: &dyn Storage, class_id: i64) -> Result<Class, ClassroomError> {
    persistence::fetch_one::<Class>(storage, class_id)
        .await?
        .ok_or_else(|| not_found(ResourceKind::Class, class_id))
}

/// 学生加入班级，已在班级中时保持不变
pub async fn enroll_student(
    storage: &dyn Storage,
    class_id: i64,
    student_id: String,
) -> ActixResult<HttpResponse> {
    let mut class = load_class(storage, class_id).await?;
    class.add_student(student_id.clone());
    persistence::update(storage, &class).await?;

    info!("Student {} enrolled in class {}", student_id, class_id);
    Ok(HttpResponse::Ok().json(class))
}

/// 学生退出班级，不在班级中时保持不变
pub async fn withdraw_student(
    storage: &dyn Storage,
    class_id: i64,
    student_id: String,
) -> ActixResult<HttpResponse> {
    let mut class = load_class(storage, class_id).await?;
    if class.remove_student(&student_id) {
        persistence::update(storage, &class).await?;
        info!("Student {} withdrawn from class {}", student_id, class_id);
    }
    Ok(HttpResponse::Ok().json(class))
}
