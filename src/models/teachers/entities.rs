use sea_orm::sea_query::{
    DynIden, Expr, ExprTrait, InsertStatement, IntoIden, Query, UpdateStatement,
};
use sea_orm::{FromQueryResult, QueryResult};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entity::teachers::{Row, Teachers};
use crate::errors::Result;
use crate::models::{Model, Record, ResourceKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "registry.ts")]
pub struct Teacher {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(alias = "Name")]
    pub name: String,
}

impl Model for Teacher {
    const KIND: ResourceKind = ResourceKind::Teacher;

    fn table() -> DynIden {
        Teachers::Table.into_iden()
    }

    fn columns() -> Vec<DynIden> {
        vec![Teachers::Id.into_iden(), Teachers::Name.into_iden()]
    }

    fn id_column() -> DynIden {
        Teachers::Id.into_iden()
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &QueryResult) -> Result<Self> {
        Ok(Row::from_query_result(row, "")?.into_teacher())
    }

    fn insert_statement(&self) -> Result<InsertStatement> {
        Ok(Query::insert()
            .into_table(Teachers::Table)
            .columns([Teachers::Name])
            .values_panic([self.name.clone().into()])
            .to_owned())
    }

    fn update_statement(&self) -> Result<UpdateStatement> {
        Ok(Query::update()
            .table(Teachers::Table)
            .value(Teachers::Name, self.name.clone())
            .and_where(Expr::col(Teachers::Id).eq(self.id))
            .to_owned())
    }

    fn into_record(self) -> Record {
        Record::Teacher(self)
    }
}
