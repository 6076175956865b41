use sea_orm::sea_query::{
    DynIden, Expr, ExprTrait, InsertStatement, IntoIden, Query, UpdateStatement,
};
use sea_orm::{FromQueryResult, QueryResult};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entity::classes::{Classes, Row};
use crate::errors::{ClassroomError, Result};
use crate::models::{Model, Record, ResourceKind};

/// 学生 ID 在库中的分隔符
const STUDENT_SEPARATOR: char = ',';

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "registry.ts")]
pub struct Class {
    // 班级ID
    #[serde(alias = "Id")]
    pub id: i64,
    // 班级名称
    #[serde(alias = "Name")]
    pub name: String,
    // 学生ID列表，保持顺序
    #[serde(alias = "Students")]
    pub students: Vec<String>,
    // 教师ID，不校验是否存在
    #[serde(alias = "Teacher")]
    pub teacher: i64,
}

impl Class {
    /// 拆分库中存储的学生字段，空字符串对应空列表
    pub fn split_students(raw: &str) -> Vec<String> {
        if raw.is_empty() {
            return Vec::new();
        }
        raw.split(STUDENT_SEPARATOR).map(str::to_string).collect()
    }

    /// 拼接学生字段，空 ID 或含分隔符的 ID 无法还原，直接拒绝
    pub fn students_joined(&self) -> Result<String> {
        if self.students.iter().any(String::is_empty) {
            return Err(ClassroomError::validation("Student id must not be empty"));
        }
        if let Some(bad) = self
            .students
            .iter()
            .find(|id| id.contains(STUDENT_SEPARATOR))
        {
            return Err(ClassroomError::validation(format!(
                "Student id '{bad}' must not contain '{STUDENT_SEPARATOR}'"
            )));
        }
        Ok(self.students.join(","))
    }

    /// 加入学生，已在班级中则不变
    pub fn add_student(&mut self, student_id: impl Into<String>) {
        let student_id = student_id.into();
        if !self.students.contains(&student_id) {
            self.students.push(student_id);
        }
    }

    /// 移除学生，返回是否确实移除
    pub fn remove_student(&mut self, student_id: &str) -> bool {
        match self.students.iter().position(|s| s == student_id) {
            Some(idx) => {
                self.students.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl Model for Class {
    const KIND: ResourceKind = ResourceKind::Class;

    fn table() -> DynIden {
        Classes::Table.into_iden()
    }

    fn columns() -> Vec<DynIden> {
        vec![
            Classes::Id.into_iden(),
            Classes::Name.into_iden(),
            Classes::Students.into_iden(),
            Classes::Teacher.into_iden(),
        ]
    }

    fn id_column() -> DynIden {
        Classes::Id.into_iden()
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &QueryResult) -> Result<Self> {
        Ok(Row::from_query_result(row, "")?.into_class())
    }

    fn insert_statement(&self) -> Result<InsertStatement> {
        let students = self.students_joined()?;
        Ok(Query::insert()
            .into_table(Classes::Table)
            .columns([Classes::Name, Classes::Students, Classes::Teacher])
            .values_panic([
                self.name.clone().into(),
                students.into(),
                self.teacher.into(),
            ])
            .to_owned())
    }

    fn update_statement(&self) -> Result<UpdateStatement> {
        let students = self.students_joined()?;
        Ok(Query::update()
            .table(Classes::Table)
            .value(Classes::Name, self.name.clone())
            .value(Classes::Students, students)
            .value(Classes::Teacher, self.teacher)
            .and_where(Expr::col(Classes::Id).eq(self.id))
            .to_owned())
    }

    fn into_record(self) -> Record {
        Record::Class(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbBackend;

    fn class_with(students: &[&str]) -> Class {
        Class {
            id: 1,
            name: "Algebra".into(),
            students: students.iter().map(|s| s.to_string()).collect(),
            teacher: 2,
        }
    }

    #[test]
    fn test_split_empty_is_empty_list() {
        assert!(Class::split_students("").is_empty());
    }

    #[test]
    fn test_split_keeps_order() {
        assert_eq!(Class::split_students("3,1,2"), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_join_rejects_separator() {
        let err = class_with(&["1", "2,3"]).students_joined().unwrap_err();
        assert_eq!(err.code(), "E006");
        assert!(class_with(&["1", "2,3"]).insert_statement().is_err());
    }

    #[test]
    fn test_join_rejects_empty_student_id() {
        let err = class_with(&[""]).students_joined().unwrap_err();
        assert_eq!(err.code(), "E006");
        assert!(class_with(&["1", ""]).update_statement().is_err());
    }

    #[test]
    fn test_add_and_remove_student() {
        let mut class = class_with(&["1"]);
        class.add_student("2");
        class.add_student("2");
        assert_eq!(class.students, vec!["1", "2"]);

        assert!(class.remove_student("1"));
        assert!(!class.remove_student("9"));
        assert_eq!(class.students, vec!["2"]);
    }

    #[test]
    fn test_insert_columns() {
        let stmt = DbBackend::Sqlite.build(&class_with(&["1", "2"]).insert_statement().unwrap());
        assert_eq!(
            stmt.sql,
            r#"INSERT INTO "classes" ("name", "students", "teacher") VALUES (?, ?, ?)"#
        );
    }

    #[test]
    fn test_update_statement_for_postgres() {
        let stmt = DbBackend::Postgres.build(&class_with(&[]).update_statement().unwrap());
        assert_eq!(
            stmt.sql,
            r#"UPDATE "classes" SET "name" = $1, "students" = $2, "teacher" = $3 WHERE "id" = $4"#
        );
    }
}
