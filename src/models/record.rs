use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::classes::entities::Class;
use super::sessions::entities::Session;
use super::students::entities::Student;
use super::teachers::entities::Teacher;
use crate::errors::ClassroomError;

/// 资源类型标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Student,
    Teacher,
    Session,
    Class,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Student,
        ResourceKind::Teacher,
        ResourceKind::Session,
        ResourceKind::Class,
    ];

    /// 单数形式的标签
    pub fn tag(&self) -> &'static str {
        match self {
            ResourceKind::Student => "student",
            ResourceKind::Teacher => "teacher",
            ResourceKind::Session => "session",
            ResourceKind::Class => "class",
        }
    }

    /// 对应的数据表名，同时也是路由路径名
    pub fn table_name(&self) -> &'static str {
        match self {
            ResourceKind::Student => "students",
            ResourceKind::Teacher => "teachers",
            ResourceKind::Session => "sessions",
            ResourceKind::Class => "classes",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Student => "/students",
            ResourceKind::Teacher => "/teachers",
            ResourceKind::Session => "/sessions",
            ResourceKind::Class => "/classes",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// 单数和复数形式都可以识别
impl FromStr for ResourceKind {
    type Err = ClassroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| s == kind.tag() || s == kind.table_name())
            .ok_or_else(|| ClassroomError::unknown_resource(format!("Unknown resource '{s}'")))
    }
}

/// 按资源标签取回的任意实体
///
/// 序列化时不带标签，输出与对应实体自身的 JSON 相同。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Student(Student),
    Teacher(Teacher),
    Session(Session),
    Class(Class),
}

impl Record {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Record::Student(_) => ResourceKind::Student,
            Record::Teacher(_) => ResourceKind::Teacher,
            Record::Session(_) => ResourceKind::Session,
            Record::Class(_) => ResourceKind::Class,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Record::Student(s) => s.id,
            Record::Teacher(t) => t.id,
            Record::Session(s) => s.id,
            Record::Class(c) => c.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_singular_and_plural_tags() {
        assert_eq!("student".parse::<ResourceKind>().unwrap(), ResourceKind::Student);
        assert_eq!("teachers".parse::<ResourceKind>().unwrap(), ResourceKind::Teacher);
        assert_eq!("session".parse::<ResourceKind>().unwrap(), ResourceKind::Session);
        assert_eq!("classes".parse::<ResourceKind>().unwrap(), ResourceKind::Class);
    }

    #[test]
    fn test_unknown_tag() {
        let err = "courses".parse::<ResourceKind>().unwrap_err();
        assert_eq!(err.code(), "E007");
        assert!(err.message().contains("courses"));
    }

    #[test]
    fn test_paths_match_tables() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.path(), format!("/{}", kind.table_name()));
        }
    }

    #[test]
    fn test_record_serializes_as_inner_entity() {
        let record = Record::Student(Student {
            id: 3,
            name: "Ada".into(),
        });
        assert_eq!(record.kind(), ResourceKind::Student);
        assert_eq!(record.id(), 3);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({ "id": 3, "name": "Ada" })
        );
    }
}
