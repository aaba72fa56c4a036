//! # PTE Question Bank
//!
//! PTE 备考门户的题库编写子系统
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models / Catalog）
//! - `models/` - 模块、题型、题目等记录类型，以及 TOML 种子数据加载
//! - `catalog/` - 只读的内置题型目录（`CatalogSource`）和可编辑的题型表
//!
//! ### ② 编辑器层（Editor）
//! - `editor/` - 按 (模块, 题型) 调度的四种编辑器
//! - `GenericQuestionForm` - 字段由静态能力表决定的通用表单
//! - `McqEditor` / `FillBlanksEditor` / `ParagraphReorderEditor` - 阅读模块专用编辑器
//! - `reorder` - 两个拖拽列表共用的移动原语
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 三步新建向导：模块 → 题型 → 编辑
//!
//! ### ④ 服务层（Services）
//! - `QuestionRepository` - 持久化边界
//! - `QuestionBank` - 内存题库（列表、筛选、统计、删除）
//! - `QuestionService` - 带模拟延迟的异步保存
//!
//! ### ⑤ 会话（Session）
//! - `session/` - 角色、默认页面、导航树和题库路由

pub mod app;
pub mod catalog;
pub mod config;
pub mod editor;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod session;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use catalog::{CatalogSource, StaticCatalog, TypeRegistry};
pub use config::Config;
pub use editor::{Editor, EditorKind};
pub use error::{AppError, AppResult, ValidationError};
pub use models::{ModuleFilter, PteModule, Question, QuestionPayload, QuestionTypeSlug, SaveMode};
pub use services::{QuestionBank, QuestionFilter, QuestionRepository, QuestionService};
pub use session::{Session, UserRole};
pub use workflow::CreateWizard;
