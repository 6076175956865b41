use chrono::{DateTime, Utc};
use sea_orm::sea_query::{
    DynIden, Expr, ExprTrait, InsertStatement, IntoIden, Query, UpdateStatement,
};
use sea_orm::{FromQueryResult, QueryResult};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entity::sessions::{Row, Sessions};
use crate::errors::Result;
use crate::models::{Model, Record, ResourceKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "registry.ts")]
pub struct Session {
    #[serde(alias = "Id")]
    pub id: i64,
    /// 上课时间
    ///
    /// 库中以 Unix 秒存储，小数秒部分在写入时被截断，
    /// 读回的值不保留亚秒精度。
    #[serde(alias = "Date")]
    pub date: DateTime<Utc>,
}

impl Model for Session {
    const KIND: ResourceKind = ResourceKind::Session;

    fn table() -> DynIden {
        Sessions::Table.into_iden()
    }

    fn columns() -> Vec<DynIden> {
        vec![Sessions::Id.into_iden(), Sessions::Date.into_iden()]
    }

    fn id_column() -> DynIden {
        Sessions::Id.into_iden()
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &QueryResult) -> Result<Self> {
        Ok(Row::from_query_result(row, "")?.into_session())
    }

    fn insert_statement(&self) -> Result<InsertStatement> {
        Ok(Query::insert()
            .into_table(Sessions::Table)
            .columns([Sessions::Date])
            .values_panic([self.date.timestamp().into()])
            .to_owned())
    }

    fn update_statement(&self) -> Result<UpdateStatement> {
        Ok(Query::update()
            .table(Sessions::Table)
            .value(Sessions::Date, self.date.timestamp())
            .and_where(Expr::col(Sessions::Id).eq(self.id))
            .to_owned())
    }

    fn into_record(self) -> Record {
        Record::Session(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbBackend;
    use sea_orm::sea_query::Value;

    #[test]
    fn test_date_stored_as_epoch_seconds() {
        let session = Session {
            id: 0,
            date: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap(),
        };
        let stmt = DbBackend::Sqlite.build(&session.insert_statement().unwrap());
        assert_eq!(stmt.sql, r#"INSERT INTO "sessions" ("date") VALUES (?)"#);
        let values = stmt.values.unwrap().0;
        assert_eq!(values, vec![Value::BigInt(Some(1_700_000_000))]);
    }

    #[test]
    fn test_date_json_is_rfc3339() {
        let session: Session =
            serde_json::from_str(r#"{"date": "2024-09-02T08:30:00Z"}"#).unwrap();
        assert_eq!(session.id, 0);
        assert_eq!(session.date.timestamp(), 1_725_265_800);
    }
}
