use crate::error::{FieldIssue, FormField};
use crate::models::{parse_tags, Difficulty, QuestionTypeInfo};

/// 所有编辑器共有的字段：标题、难度、标签
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommonFields {
    pub title: String,
    pub difficulty: Difficulty,
    /// 逗号分隔的原始输入
    pub tags_input: String,
}

impl CommonFields {
    pub fn tags(&self) -> Vec<String> {
        parse_tags(&self.tags_input)
    }

    /// 标题在草稿和发布时都必填
    pub fn title_issue(&self) -> Option<FieldIssue> {
        if self.title.trim().is_empty() {
            Some(FieldIssue::required(FormField::Title))
        } else {
            None
        }
    }
}

/// 编辑器头部信息：模块 • 题型
pub fn header_line(info: &QuestionTypeInfo) -> String {
    format!("Module: {} • Type: {}", info.module.id(), info.label)
}
