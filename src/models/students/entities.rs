use sea_orm::sea_query::{
    DynIden, Expr, ExprTrait, InsertStatement, IntoIden, Query, UpdateStatement,
};
use sea_orm::{FromQueryResult, QueryResult};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entity::students::{Row, Students};
use crate::errors::Result;
use crate::models::{Model, Record, ResourceKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "registry.ts")]
pub struct Student {
    // 学生ID，由服务端分配
    #[serde(alias = "Id")]
    pub id: i64,
    // 学生姓名
    #[serde(alias = "Name")]
    pub name: String,
}

impl Model for Student {
    const KIND: ResourceKind = ResourceKind::Student;

    fn table() -> DynIden {
        Students::Table.into_iden()
    }

    fn columns() -> Vec<DynIden> {
        vec![Students::Id.into_iden(), Students::Name.into_iden()]
    }

    fn id_column() -> DynIden {
        Students::Id.into_iden()
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &QueryResult) -> Result<Self> {
        Ok(Row::from_query_result(row, "")?.into_student())
    }

    fn insert_statement(&self) -> Result<InsertStatement> {
        Ok(Query::insert()
            .into_table(Students::Table)
            .columns([Students::Name])
            .values_panic([self.name.clone().into()])
            .to_owned())
    }

    fn update_statement(&self) -> Result<UpdateStatement> {
        Ok(Query::update()
            .table(Students::Table)
            .value(Students::Name, self.name.clone())
            .and_where(Expr::col(Students::Id).eq(self.id))
            .to_owned())
    }

    fn into_record(self) -> Record {
        Record::Student(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbBackend;

    #[test]
    fn test_insert_ignores_client_id() {
        let student = Student {
            id: 42,
            name: "Robert'); DROP TABLE students;--".into(),
        };
        let stmt = DbBackend::Sqlite.build(&student.insert_statement().unwrap());
        assert_eq!(stmt.sql, r#"INSERT INTO "students" ("name") VALUES (?)"#);
        assert_eq!(stmt.values.map(|v| v.0.len()), Some(1));
    }

    #[test]
    fn test_update_binds_values() {
        let student = Student {
            id: 7,
            name: "Grace".into(),
        };
        let stmt = DbBackend::Sqlite.build(&student.update_statement().unwrap());
        assert_eq!(
            stmt.sql,
            r#"UPDATE "students" SET "name" = ? WHERE "id" = ?"#
        );
    }

    #[test]
    fn test_decode_accepts_capitalized_fields() {
        let student: Student = serde_json::from_str(r#"{"Id": 1, "Name": "Linus"}"#).unwrap();
        assert_eq!(student.id, 1);
        assert_eq!(student.name, "Linus");
    }
}
