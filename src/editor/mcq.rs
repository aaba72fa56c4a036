//! 阅读选择题编辑器（mcq-single / mcq-multiple）

use tracing::debug;

use super::common::CommonFields;
use super::options::{AnswerMode, OptionSet};
use crate::error::{FieldIssue, FormField, ValidationError};
use crate::models::question::non_blank;
use crate::models::{QuestionPayload, QuestionTypeInfo, QuestionTypeSlug, SaveMode};

#[derive(Debug, Clone)]
pub struct McqEditor {
    info: &'static QuestionTypeInfo,
    pub common: CommonFields,
    /// 显示在选项上方的阅读文章
    pub passage: String,
    pub prompt: String,
    pub options: OptionSet,
}

impl McqEditor {
    pub(crate) fn new(info: &'static QuestionTypeInfo) -> Self {
        let mode = if info.slug == QuestionTypeSlug::McqMultiple {
            AnswerMode::Multiple
        } else {
            AnswerMode::Single
        };
        Self {
            info,
            common: CommonFields::default(),
            passage: String::new(),
            prompt: String::new(),
            options: OptionSet::new(mode),
        }
    }

    pub fn info(&self) -> &'static QuestionTypeInfo {
        self.info
    }

    pub fn is_multiple_choice(&self) -> bool {
        self.options.mode() == AnswerMode::Multiple
    }

    pub fn validate(&self, mode: SaveMode) -> Result<(), ValidationError> {
        let mut issues: Vec<FieldIssue> = self.common.title_issue().into_iter().collect();
        if mode == SaveMode::Publish {
            if self.prompt.trim().is_empty() {
                issues.push(FieldIssue::required(FormField::Prompt));
            }
            issues.extend(self.options.issues());
        }
        ValidationError::new(issues).into_result()
    }

    pub fn submit(&self, mode: SaveMode) -> Result<QuestionPayload, ValidationError> {
        self.validate(mode)?;

        let correct = self.options.correct_ids();
        debug!(
            "阅读选择题提交: {} 正确选项: {}",
            self.info.label,
            if correct.is_empty() {
                "none".to_string()
            } else {
                correct.join(", ")
            }
        );

        Ok(QuestionPayload {
            title: self.common.title.trim().to_string(),
            module: self.info.module,
            question_type: self.info.slug,
            question_type_label: self.info.label.to_string(),
            difficulty: self.common.difficulty,
            content: self.prompt.clone(),
            options: Some(self.options.options().to_vec()),
            correct_answer: None,
            audio_url: None,
            image_url: None,
            passage: non_blank(&self.passage),
            tags: self.common.tags(),
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::question_type_info;

    fn filled(slug: QuestionTypeSlug) -> McqEditor {
        let mut editor = McqEditor::new(question_type_info(slug));
        editor.common.title = "MCQ – Photosynthesis".to_string();
        editor.passage = "Plants convert light into chemical energy.".to_string();
        editor.prompt = "What do plants convert light into?".to_string();
        for (i, text) in ["Heat", "Chemical energy", "Sound", "Water"].iter().enumerate() {
            editor.options.set_text(i, *text).unwrap();
        }
        editor
    }

    #[test]
    fn test_mode_follows_slug() {
        assert!(!filled(QuestionTypeSlug::McqSingle).is_multiple_choice());
        assert!(filled(QuestionTypeSlug::McqMultiple).is_multiple_choice());
    }

    #[test]
    fn test_publish_requires_a_correct_option() {
        let mut editor = filled(QuestionTypeSlug::McqSingle);
        let err = editor.submit(SaveMode::Publish).unwrap_err();
        assert!(err.has(FormField::Options));

        editor.options.toggle_correct(1).unwrap();
        let payload = editor.submit(SaveMode::Publish).unwrap();
        assert_eq!(payload.content, "What do plants convert light into?");
        assert_eq!(
            payload.passage.as_deref(),
            Some("Plants convert light into chemical energy.")
        );
        assert_eq!(payload.question_type, QuestionTypeSlug::McqSingle);
    }

    #[test]
    fn test_multiple_allows_several_correct() {
        let mut editor = filled(QuestionTypeSlug::McqMultiple);
        editor.options.toggle_correct(0).unwrap();
        editor.options.toggle_correct(1).unwrap();
        assert!(editor.submit(SaveMode::Publish).is_ok());
    }

    #[test]
    fn test_missing_prompt() {
        let mut editor = filled(QuestionTypeSlug::McqSingle);
        editor.options.toggle_correct(0).unwrap();
        editor.prompt = "   ".to_string();
        let err = editor.submit(SaveMode::Publish).unwrap_err();
        assert_eq!(err.issues, vec![FieldIssue::required(FormField::Prompt)]);
    }
}
