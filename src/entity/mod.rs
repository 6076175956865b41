//! 数据表定义
//!
//! 表与列的标识符以及查询结果行结构，与 models 模块中的业务实体分离。
//! 存储层用这些类型构造语句和解析结果行，然后转换为 models 中的业务实体。

pub mod classes;
pub mod sessions;
pub mod students;
pub mod teachers;
