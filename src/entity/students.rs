//! 学生表

use sea_orm::{DeriveIden, FromQueryResult};

use crate::models::students::entities::Student;

#[derive(DeriveIden, Clone, Copy, Debug)]
pub enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    Name,
}

#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct Row {
    pub id: i64,
    pub name: String,
}

// 从数据库行转换为业务模型
impl Row {
    pub fn into_student(self) -> Student {
        Student {
            id: self.id,
            name: self.name,
        }
    }
}
