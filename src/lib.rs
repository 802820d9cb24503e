//! SiswaPortal - 学生端考勤与作业数据核心
//!
//! 学校考勤/作业系统学生端页面背后的数据层：表单校验、
//! 响应归一化、列表过滤分组分页，以及作业提交编排。
//!
//! # 架构
//! - `client`: 远程 API 访问层（Reqwest）
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义（原始接口形状与视图模型）
//! - `services`: 业务逻辑层
//! - `utils`: 工具函数（字段校验器）

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod utils;
