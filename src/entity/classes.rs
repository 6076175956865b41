//! 班级表

use sea_orm::{DeriveIden, FromQueryResult};

use crate::models::classes::entities::Class;

#[derive(DeriveIden, Clone, Copy, Debug)]
pub enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    Name,
    Students,
    Teacher,
}

#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct Row {
    pub id: i64,
    pub name: String,
    /// 逗号拼接的学生 ID
    pub students: String,
    pub teacher: i64,
}

impl Row {
    pub fn into_class(self) -> Class {
        Class {
            id: self.id,
            name: self.name,
            students: Class::split_students(&self.students),
            teacher: self.teacher,
        }
    }
}
