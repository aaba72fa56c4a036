use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::module::PteModule;
use super::question_type::QuestionTypeSlug;

/// 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// 题目状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    Active,
    Draft,
    Archived,
}

impl QuestionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionStatus::Active => "active",
            QuestionStatus::Draft => "draft",
            QuestionStatus::Archived => "archived",
        }
    }
}

/// 选择题选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// 单个小写字母，按顺序排列
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

impl QuestionOption {
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            is_correct: false,
        }
    }
}

/// 题库中的题目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub module: PteModule,
    pub question_type: QuestionTypeSlug,
    pub question_type_label: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<QuestionOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage: Option<String>,
    pub status: QuestionStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    /// 搜索词是否命中标题、内容或标签（忽略大小写）
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&term)
            || self.content.to_lowercase().contains(&term)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&term))
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 截断标题以便显示（最多60个字符）
        let title_preview = if self.title.chars().count() > 60 {
            self.title.chars().take(60).collect::<String>() + "..."
        } else {
            self.title.clone()
        };
        write!(
            f,
            "[{}] {} ({} / {} / {})",
            self.id,
            title_preview,
            self.question_type_label,
            self.difficulty.as_str(),
            self.status.as_str()
        )
    }
}

/// 保存方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveMode {
    /// "Save Question"，保存为 active
    Publish,
    /// "Save as Draft"，保存为 draft
    Draft,
}

impl SaveMode {
    pub fn status(self) -> QuestionStatus {
        match self {
            SaveMode::Publish => QuestionStatus::Active,
            SaveMode::Draft => QuestionStatus::Draft,
        }
    }
}

/// 编辑器提交给持久化层的题目数据
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionPayload {
    pub title: String,
    pub module: PteModule,
    pub question_type: QuestionTypeSlug,
    pub question_type_label: String,
    pub difficulty: Difficulty,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<QuestionOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passage: Option<String>,
    pub tags: Vec<String>,
    pub mode: SaveMode,
}

/// 种子数据文件结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionBankFile {
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// 解析逗号分隔的标签输入，去掉空白和空项
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// 空白字符串视为未填写
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
