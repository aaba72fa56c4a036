use std::fmt;

use thiserror::Error;

use crate::models::PteModule;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 题型目录相关错误
    #[error("目录错误: {0}")]
    Catalog(#[from] CatalogError),
    /// 表单校验错误
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// 编辑器操作错误
    #[error("编辑器错误: {0}")]
    Editor(#[from] EditorError),
    /// 业务逻辑错误
    #[error("业务错误: {0}")]
    Business(#[from] BusinessError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 题型目录错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// 未知的题型 slug
    #[error("未知题型: {slug}")]
    UnknownSlug { slug: String },
    /// 题型不属于所选模块
    #[error("题型 {slug} 属于 {actual} 模块，而不是 {expected}")]
    ModuleMismatch {
        slug: String,
        expected: PteModule,
        actual: PteModule,
    },
}

/// 编辑器操作错误
///
/// 这些错误发生时编辑器状态保持不变
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// 选项数量已到下限
    #[error("至少需要保留 {min} 个选项")]
    MinimumOptions { min: usize },
    /// 选项数量已到上限（a-z）
    #[error("选项数量不能超过 {max} 个")]
    OptionLimit { max: usize },
    /// 选项索引越界
    #[error("选项索引 {index} 超出范围 [0, {len})")]
    OptionIndexOutOfRange { index: usize, len: usize },
    /// 段落索引越界
    #[error("段落索引 {index} 超出范围 [0, {len})")]
    ParagraphIndexOutOfRange { index: usize, len: usize },
}

/// 业务逻辑错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusinessError {
    /// 题目不存在
    #[error("题目不存在: {id}")]
    QuestionNotFound { id: String },
    /// 题型不存在
    #[error("题型不存在: {slug}")]
    QuestionTypeNotFound { slug: String },
    /// 删除确认已失效（目标已被删除）
    #[error("删除确认已失效: {key}")]
    StaleConfirmation { key: String },
    /// 向导还没有选定题型
    #[error("尚未选择题型")]
    NoTypeSelected,
    /// 选择题型前必须先选定一个具体模块
    #[error("尚未选择模块")]
    NoModuleSelected,
}

/// 配置错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

// ========== 表单校验 ==========

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Content,
    Prompt,
    Passage,
    Options,
    Slug,
    Label,
    QuestionType,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Content => "content",
            FormField::Prompt => "prompt",
            FormField::Passage => "passage",
            FormField::Options => "options",
            FormField::Slug => "slug",
            FormField::Label => "label",
            FormField::QuestionType => "question_type",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 字段问题类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// 必填字段为空
    Required,
    /// 文章中没有 [[word]] 空格
    NoBlanks,
    /// 选项数量不足
    TooFewOptions { min: usize },
    /// 没有正确选项
    NoCorrectOption,
    /// 单选题存在多个正确选项
    MultipleCorrectOptions,
    /// 模块与题型不一致
    ModuleMismatch,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::Required => write!(f, "必填"),
            IssueKind::NoBlanks => write!(f, "至少需要一个 [[word]] 空格"),
            IssueKind::TooFewOptions { min } => write!(f, "至少需要 {} 个选项", min),
            IssueKind::NoCorrectOption => write!(f, "请标记正确选项"),
            IssueKind::MultipleCorrectOptions => write!(f, "单选题只能有一个正确选项"),
            IssueKind::ModuleMismatch => write!(f, "题型与模块不一致"),
        }
    }
}

/// 单个字段的校验问题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: FormField,
    pub kind: IssueKind,
}

impl FieldIssue {
    pub fn new(field: FormField, kind: IssueKind) -> Self {
        Self { field, kind }
    }

    pub fn required(field: FormField) -> Self {
        Self::new(field, IssueKind::Required)
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// 表单校验失败
///
/// 一次性收集所有字段问题，由调用方决定如何展示
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// 指定字段是否有问题
    pub fn has(&self, field: FormField) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }

    /// 没有问题时返回 Ok
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.issues.iter().map(|issue| issue.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
