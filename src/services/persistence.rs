//! 通用持久化操作
//!
//! 所有实体共用同一套保存、更新、查询与删除逻辑，
//! 语句由 [`Model`] 生成后按当前方言构建为参数化语句交给存储网关执行。

use sea_orm::DbBackend;
use sea_orm::sea_query::{Expr, ExprTrait, Order, Query};

use crate::errors::{ClassroomError, Result};
use crate::models::classes::entities::Class;
use crate::models::sessions::entities::Session;
use crate::models::students::entities::Student;
use crate::models::teachers::entities::Teacher;
use crate::models::{Model, Record, ResourceKind};
use crate::storage::Storage;

fn persistence_error<M: Model>(action: &str, err: ClassroomError) -> ClassroomError {
    match err {
        // 校验错误原样返回，由调用方映射为 400
        ClassroomError::Validation(_) => err,
        _ => ClassroomError::persistence(format!(
            "Failed to {action} {}: {}",
            M::KIND,
            err.message()
        )),
    }
}

/// 插入实体并返回数据库分配的 id
pub async fn save<M: Model>(storage: &dyn Storage, model: &M) -> Result<i64> {
    let mut insert = model
        .insert_statement()
        .map_err(|e| persistence_error::<M>("save", e))?;
    let backend = storage.backend();

    if backend == DbBackend::Postgres {
        insert.returning_col(M::id_column());
        let rows = storage
            .query(backend.build(&insert))
            .await
            .map_err(|e| persistence_error::<M>("save", e))?;
        let row = rows.first().ok_or_else(|| {
            ClassroomError::persistence(format!("Failed to save {}: no id returned", M::KIND))
        })?;
        return row
            .try_get::<i64>("", "id")
            .map_err(|e| ClassroomError::persistence(format!("Failed to read {} id: {e}", M::KIND)));
    }

    let outcome = storage
        .execute(backend.build(&insert))
        .await
        .map_err(|e| persistence_error::<M>("save", e))?;
    let id = outcome.last_insert_id.ok_or_else(|| {
        ClassroomError::persistence(format!("Failed to save {}: no id returned", M::KIND))
    })?;
    i64::try_from(id)
        .map_err(|e| ClassroomError::persistence(format!("Failed to read {} id: {e}", M::KIND)))
}

/// 按 id 更新实体，id 不存在时返回 NotFound
pub async fn update<M: Model>(storage: &dyn Storage, model: &M) -> Result<()> {
    if fetch_one::<M>(storage, model.id()).await?.is_none() {
        return Err(not_found(M::KIND, model.id()));
    }

    let statement = model
        .update_statement()
        .map_err(|e| persistence_error::<M>("update", e))?;
    storage
        .execute(storage.backend().build(&statement))
        .await
        .map_err(|e| persistence_error::<M>("update", e))?;
    Ok(())
}

/// 读取全部实体，按 id 升序
pub async fn fetch_all<M: Model>(storage: &dyn Storage) -> Result<Vec<M>> {
    let select = Query::select()
        .columns(M::columns())
        .from(M::table())
        .order_by(M::id_column(), Order::Asc)
        .to_owned();

    let rows = storage.query(storage.backend().build(&select)).await?;
    rows.iter().map(M::from_row).collect()
}

/// 按 id 读取单个实体
pub async fn fetch_one<M: Model>(storage: &dyn Storage, id: i64) -> Result<Option<M>> {
    let select = Query::select()
        .columns(M::columns())
        .from(M::table())
        .and_where(Expr::col(M::id_column()).eq(id))
        .limit(1)
        .to_owned();

    let rows = storage.query(storage.backend().build(&select)).await?;
    rows.first().map(M::from_row).transpose()
}

/// 按 id 删除，返回是否删除了记录
pub async fn delete<M: Model>(storage: &dyn Storage, id: i64) -> Result<bool> {
    let delete = Query::delete()
        .from_table(M::table())
        .and_where(Expr::col(M::id_column()).eq(id))
        .to_owned();

    let outcome = storage.execute(storage.backend().build(&delete)).await?;
    Ok(outcome.rows_affected > 0)
}

/// 按资源标签读取实体
pub async fn get_by_name(storage: &dyn Storage, resource: &str, id: i64) -> Result<Record> {
    let kind: ResourceKind = resource.parse()?;
    let record = match kind {
        ResourceKind::Student => fetch_record::<Student>(storage, id).await?,
        ResourceKind::Teacher => fetch_record::<Teacher>(storage, id).await?,
        ResourceKind::Session => fetch_record::<Session>(storage, id).await?,
        ResourceKind::Class => fetch_record::<Class>(storage, id).await?,
    };
    record.ok_or_else(|| not_found(kind, id))
}

async fn fetch_record<M: Model>(storage: &dyn Storage, id: i64) -> Result<Option<Record>> {
    Ok(fetch_one::<M>(storage, id).await?.map(M::into_record))
}

pub fn not_found(kind: ResourceKind, id: i64) -> ClassroomError {
    ClassroomError::not_found(format!("{kind} {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_support::memory_storage;
    use chrono::{DateTime, Utc};
    use std::collections::HashSet;

    fn student(name: &str) -> Student {
        Student {
            id: 0,
            name: name.into(),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_ids_and_ignores_client_id() {
        let storage = memory_storage().await;
        let first = save(storage.as_ref(), &student("Ada")).await.unwrap();
        let second = save(
            storage.as_ref(),
            &Student {
                id: 99,
                name: "Alan".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert!(fetch_one::<Student>(storage.as_ref(), 99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fetch_all_empty_table() {
        let storage = memory_storage().await;
        let teachers = fetch_all::<Teacher>(storage.as_ref()).await.unwrap();
        assert!(teachers.is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let storage = memory_storage().await;
        let err = update(
            storage.as_ref(),
            &Student {
                id: 5,
                name: "Nobody".into(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code(), "E009");
    }

    #[tokio::test]
    async fn test_update_then_fetch() {
        let storage = memory_storage().await;
        let id = save(storage.as_ref(), &student("Ada")).await.unwrap();
        let renamed = Student {
            id,
            name: "Ada Lovelace".into(),
        };
        update(storage.as_ref(), &renamed).await.unwrap();
        update(storage.as_ref(), &renamed).await.unwrap();
        let fetched = fetch_one::<Student>(storage.as_ref(), id).await.unwrap();
        assert_eq!(fetched, Some(renamed));
    }

    #[tokio::test]
    async fn test_delete_reports_miss() {
        let storage = memory_storage().await;
        let id = save(storage.as_ref(), &student("Ada")).await.unwrap();
        assert!(delete::<Student>(storage.as_ref(), id).await.unwrap());
        assert!(!delete::<Student>(storage.as_ref(), id).await.unwrap());
    }

    #[tokio::test]
    async fn test_session_date_round_trip() {
        let storage = memory_storage().await;
        let session = Session {
            id: 0,
            date: DateTime::<Utc>::from_timestamp(1_725_265_800, 0).unwrap(),
        };
        let id = save(storage.as_ref(), &session).await.unwrap();
        let fetched = fetch_one::<Session>(storage.as_ref(), id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.date, session.date);
    }

    #[tokio::test]
    async fn test_session_date_drops_subsecond_precision() {
        let storage = memory_storage().await;
        let session = Session {
            id: 0,
            date: DateTime::<Utc>::from_timestamp(1_725_265_800, 500_000_000).unwrap(),
        };
        let id = save(storage.as_ref(), &session).await.unwrap();
        let fetched = fetch_one::<Session>(storage.as_ref(), id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.date.timestamp(), 1_725_265_800);
        assert_eq!(fetched.date.timestamp_subsec_nanos(), 0);
    }

    #[tokio::test]
    async fn test_class_students_round_trip() {
        let storage = memory_storage().await;
        for students in [vec!["1", "2", "3"], vec![]] {
            let class = Class {
                id: 0,
                name: "Physics".into(),
                students: students.iter().map(|s| s.to_string()).collect(),
                teacher: 4,
            };
            let id = save(storage.as_ref(), &class).await.unwrap();
            let fetched = fetch_one::<Class>(storage.as_ref(), id)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(fetched.students, class.students);
            assert_eq!(fetched.teacher, 4);
        }
    }

    #[tokio::test]
    async fn test_class_with_separator_in_student_id_is_rejected() {
        let storage = memory_storage().await;
        let class = Class {
            id: 0,
            name: "Chemistry".into(),
            students: vec!["1,2".into()],
            teacher: 1,
        };
        let err = save(storage.as_ref(), &class).await.unwrap_err();
        assert_eq!(err.code(), "E006");
        assert!(fetch_all::<Class>(storage.as_ref()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_name_dispatches_on_tag() {
        let storage = memory_storage().await;
        let id = save(
            storage.as_ref(),
            &Teacher {
                id: 0,
                name: "Hopper".into(),
            },
        )
        .await
        .unwrap();

        let record = get_by_name(storage.as_ref(), "teachers", id).await.unwrap();
        assert_eq!(record.kind(), ResourceKind::Teacher);
        assert_eq!(record.id(), id);

        let err = get_by_name(storage.as_ref(), "student", id).await.unwrap_err();
        assert_eq!(err.code(), "E009");

        let err = get_by_name(storage.as_ref(), "rooms", id).await.unwrap_err();
        assert_eq!(err.code(), "E007");
    }

    #[tokio::test]
    async fn test_concurrent_saves_get_unique_ids() {
        let storage = memory_storage().await;
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let storage = storage.clone();
                tokio::spawn(async move {
                    save(storage.as_ref(), &student(&format!("student-{i}"))).await
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let id = handle.await.unwrap().unwrap();
            assert!(ids.insert(id), "duplicate id {id}");
        }
        assert_eq!(ids.len(), 16);
        assert_eq!(fetch_all::<Student>(storage.as_ref()).await.unwrap().len(), 16);
    }
}
