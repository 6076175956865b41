pub mod class_students;

pub mod records;

pub mod resources;

use actix_web::web;

use crate::models::classes::entities::Class;
use crate::models::sessions::entities::Session;
use crate::models::students::entities::Student;
use crate::models::teachers::entities::Teacher;

pub use class_students::configure_class_student_routes;
pub use records::configure_record_routes;
pub use resources::configure_resource_routes;

// 注册全部路由
pub fn configure_registry_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_resource_routes::<Student>)
        .configure(configure_resource_routes::<Teacher>)
        .configure(configure_resource_routes::<Session>)
        .configure(configure_resource_routes::<Class>)
        .configure(configure_class_student_routes)
        .configure(configure_record_routes);
}
