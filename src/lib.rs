//! Classroom Registry - 学生、教师、课时与班级登记服务
//!
//! 基于 Actix Web 与 SeaORM 的轻量 CRUD 服务。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: 数据表标识与结果行
//! - `errors`: 统一错误处理
//! - `models`: 业务实体与 [`models::Model`] 持久化约定
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 通用持久化与资源处理逻辑
//! - `storage`: 数据存储网关（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
