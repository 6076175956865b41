//! 教师表

use sea_orm::{DeriveIden, FromQueryResult};

use crate::models::teachers::entities::Teacher;

#[derive(DeriveIden, Clone, Copy, Debug)]
pub enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    Name,
}

#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct Row {
    pub id: i64,
    pub name: String,
}

impl Row {
    pub fn into_teacher(self) -> Teacher {
        Teacher {
            id: self.id,
            name: self.name,
        }
    }
}
