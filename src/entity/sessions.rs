//! 课时表

use sea_orm::{DeriveIden, FromQueryResult};

use crate::models::sessions::entities::Session;

#[derive(DeriveIden, Clone, Copy, Debug)]
pub enum Sessions {
    #[sea_orm(iden = "sessions")]
    Table,
    Id,
    Date,
}

#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct Row {
    pub id: i64,
    /// 秒级时间戳
    pub date: i64,
}

impl Row {
    pub fn into_session(self) -> Session {
        use chrono::{DateTime, Utc};

        Session {
            id: self.id,
            date: DateTime::<Utc>::from_timestamp(self.date, 0).unwrap_or_default(),
        }
    }
}
