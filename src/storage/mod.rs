use std::sync::Arc;

use sea_orm::{DbBackend, QueryResult, Statement};

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod sea_orm_storage;

/// 语句执行结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOutcome {
    pub rows_affected: u64,
    // PostgreSQL 不提供 last insert id，需要使用 RETURNING
    pub last_insert_id: Option<u64>,
}

/// 存储网关
///
/// 持有唯一的数据库连接句柄，只暴露参数化的查询与执行。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 当前连接使用的 SQL 方言
    fn backend(&self) -> DbBackend;

    // 执行查询并返回全部结果行
    async fn query(&self, statement: Statement) -> Result<Vec<QueryResult>>;

    // 执行非查询语句
    async fn execute(&self, statement: Statement) -> Result<ExecOutcome>;

    // 释放连接
    async fn close(&self) -> Result<()>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub(crate) fn memory_config() -> DatabaseConfig {
        DatabaseConfig {
            url: "sqlite::memory:".into(),
            pool_size: 1,
            timeout: 5,
        }
    }

    /// 已完成迁移的内存 SQLite 存储
    pub(crate) async fn memory_storage() -> Arc<dyn Storage> {
        create_storage(&memory_config())
            .await
            .expect("in-memory storage should open")
    }
}
