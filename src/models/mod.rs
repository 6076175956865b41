//! 业务模型
//!
//! 四类实体（学生、教师、课时、班级）都实现 [`Model`]，
//! 通用的持久化与资源处理逻辑只依赖这个 trait。

pub mod classes;
pub mod common;
pub mod record;
pub mod sessions;
pub mod students;
pub mod teachers;

pub use record::{Record, ResourceKind};

use sea_orm::QueryResult;
use sea_orm::sea_query::{DynIden, InsertStatement, UpdateStatement};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::Result;

/// 可持久化的实体
///
/// 每个实体描述自己的表名、列集合、行映射，并生成参数化的插入与更新语句。
/// 插入语句不包含 `id` 列，主键始终由数据库分配。
pub trait Model: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// 资源类型标签
    const KIND: ResourceKind;

    /// 表名
    fn table() -> DynIden;

    /// 查询时读取的列，顺序与表定义一致
    fn columns() -> Vec<DynIden>;

    /// 主键列
    fn id_column() -> DynIden;

    fn id(&self) -> i64;

    /// 从查询结果行构造实体
    fn from_row(row: &QueryResult) -> Result<Self>;

    /// 生成插入语句（忽略 id）
    fn insert_statement(&self) -> Result<InsertStatement>;

    /// 生成按 id 更新的语句
    fn update_statement(&self) -> Result<UpdateStatement>;

    fn into_record(self) -> Record;
}
