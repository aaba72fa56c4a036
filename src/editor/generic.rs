//! 通用题目表单
//!
//! 除阅读模块的专用编辑器外，所有题型都使用这个表单。
//! 显示哪些字段由 `FieldCapabilities` 查表决定。

use tracing::debug;

use super::common::CommonFields;
use super::fields::FieldCapabilities;
use super::options::{AnswerMode, OptionSet};
use crate::error::{FieldIssue, FormField, ValidationError};
use crate::models::question::non_blank;
use crate::models::{PteModule, QuestionPayload, QuestionTypeInfo, QuestionTypeSlug, SaveMode};

#[derive(Debug, Clone)]
pub struct GenericQuestionForm {
    info: &'static QuestionTypeInfo,
    capabilities: FieldCapabilities,
    pub common: CommonFields,
    pub content: String,
    pub passage: String,
    pub options: OptionSet,
    pub correct_answer: String,
    /// 上传占位：音频引用
    pub audio_url: Option<String>,
    /// 上传占位：图片引用
    pub image_url: Option<String>,
}

impl GenericQuestionForm {
    /// 由调度器在校验模块与题型一致后创建
    pub(crate) fn new(info: &'static QuestionTypeInfo) -> Self {
        let capabilities = FieldCapabilities::for_type(info.slug);
        let mode = if capabilities.multiple_answer {
            AnswerMode::Multiple
        } else {
            AnswerMode::Single
        };
        Self {
            info,
            capabilities,
            common: CommonFields::default(),
            content: String::new(),
            passage: String::new(),
            options: OptionSet::new(mode),
            correct_answer: String::new(),
            audio_url: None,
            image_url: None,
        }
    }

    pub fn info(&self) -> &'static QuestionTypeInfo {
        self.info
    }

    pub fn module(&self) -> PteModule {
        self.info.module
    }

    pub fn question_type(&self) -> QuestionTypeSlug {
        self.info.slug
    }

    pub fn capabilities(&self) -> FieldCapabilities {
        self.capabilities
    }

    /// 选项区标题后缀
    pub fn options_hint(&self) -> &'static str {
        match self.options.mode() {
            AnswerMode::Multiple => "(select all correct)",
            AnswerMode::Single => "(select one correct)",
        }
    }

    pub fn validate(&self, mode: SaveMode) -> Result<(), ValidationError> {
        let mut issues: Vec<FieldIssue> = self.common.title_issue().into_iter().collect();

        if mode == SaveMode::Publish {
            if self.content.trim().is_empty() {
                issues.push(FieldIssue::required(FormField::Content));
            }
            if self.capabilities.options {
                issues.extend(self.options.issues());
            }
        }

        ValidationError::new(issues).into_result()
    }

    /// 提交：只带上当前题型显示的字段
    pub fn submit(&self, mode: SaveMode) -> Result<QuestionPayload, ValidationError> {
        self.validate(mode)?;

        let caps = self.capabilities;
        let payload = QuestionPayload {
            title: self.common.title.trim().to_string(),
            module: self.info.module,
            question_type: self.info.slug,
            question_type_label: self.info.label.to_string(),
            difficulty: self.common.difficulty,
            content: self.content.clone(),
            options: caps.options.then(|| self.options.options().to_vec()),
            correct_answer: if caps.correct_answer {
                non_blank(&self.correct_answer)
            } else {
                None
            },
            audio_url: if caps.audio_upload {
                self.audio_url.clone()
            } else {
                None
            },
            image_url: if caps.image_upload {
                self.image_url.clone()
            } else {
                None
            },
            passage: if caps.passage {
                non_blank(&self.passage)
            } else {
                None
            },
            tags: self.common.tags(),
            mode,
        };

        debug!(
            "通用表单提交: {} / {} / 正确选项 {:?}",
            payload.module,
            payload.question_type,
            self.options.correct_ids()
        );
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::question_type_info;
    use crate::error::IssueKind;
    use crate::models::Difficulty;

    fn form(slug: QuestionTypeSlug) -> GenericQuestionForm {
        GenericQuestionForm::new(question_type_info(slug))
    }

    #[test]
    fn test_multiple_answer_types_use_checkbox_semantics() {
        let f = form(QuestionTypeSlug::ListeningMcqMultiple);
        assert_eq!(f.options.mode(), AnswerMode::Multiple);
        assert_eq!(f.options_hint(), "(select all correct)");
        assert_eq!(
            form(QuestionTypeSlug::SelectMissingWord).options.mode(),
            AnswerMode::Single
        );
    }

    #[test]
    fn test_publish_requires_title_and_content() {
        let mut f = form(QuestionTypeSlug::WriteFromDictation);
        let err = f.submit(SaveMode::Publish).unwrap_err();
        assert_eq!(
            err.issues,
            vec![
                FieldIssue::required(FormField::Title),
                FieldIssue::required(FormField::Content),
            ]
        );

        // 正确答案不是必填项
        f.common.title = "Dictation".to_string();
        f.content = "Type the sentence you hear.".to_string();
        let payload = f.submit(SaveMode::Publish).unwrap();
        assert_eq!(payload.correct_answer, None);
    }

    #[test]
    fn test_draft_only_requires_title() {
        let mut f = form(QuestionTypeSlug::ListeningMcqSingle);
        assert!(f.submit(SaveMode::Draft).is_err());
        f.common.title = "Lecture on bees".to_string();
        let payload = f.submit(SaveMode::Draft).unwrap();
        assert_eq!(payload.mode, SaveMode::Draft);
        assert_eq!(payload.options.as_ref().map(|o| o.len()), Some(4));
    }

    #[test]
    fn test_hidden_fields_are_not_submitted() {
        let mut f = form(QuestionTypeSlug::WriteEssay);
        f.common.title = "Remote work".to_string();
        f.common.difficulty = Difficulty::Hard;
        f.common.tags_input = "work, essay".to_string();
        f.content = "Discuss remote work.".to_string();
        f.passage = "should be dropped".to_string();
        f.correct_answer = "also dropped".to_string();
        f.audio_url = Some("a.mp3".to_string());

        let payload = f.submit(SaveMode::Publish).unwrap();
        assert_eq!(payload.passage, None);
        assert_eq!(payload.correct_answer, None);
        assert_eq!(payload.audio_url, None);
        assert_eq!(payload.options, None);
        assert_eq!(payload.tags, vec!["work", "essay"]);
        assert_eq!(payload.difficulty, Difficulty::Hard);
        assert_eq!(payload.question_type_label, "Write Essay");
    }

    #[test]
    fn test_blank_option_text_does_not_block_publish() {
        let mut f = form(QuestionTypeSlug::SelectMissingWord);
        f.common.title = "Missing word".to_string();
        f.content = "Choose the missing word.".to_string();
        let err = f.submit(SaveMode::Publish).unwrap_err();
        assert_eq!(
            err.issues,
            vec![FieldIssue::new(FormField::Options, IssueKind::NoCorrectOption)]
        );

        f.options.toggle_correct(0).unwrap();
        assert!(f.submit(SaveMode::Publish).is_ok());
    }

    #[test]
    fn test_publish_with_valid_options() {
        let mut f = form(QuestionTypeSlug::HighlightCorrectSummary);
        f.common.title = "Summary".to_string();
        f.content = "Pick the best summary.".to_string();
        f.audio_url = Some("lecture.mp3".to_string());
        for i in 0..f.options.len() {
            f.options.set_text(i, format!("summary {}", i + 1)).unwrap();
        }
        f.options.toggle_correct(2).unwrap();

        let payload = f.submit(SaveMode::Publish).unwrap();
        assert_eq!(payload.audio_url.as_deref(), Some("lecture.mp3"));
        let options = payload.options.unwrap();
        assert!(options[2].is_correct);
        assert_eq!(options.iter().filter(|o| o.is_correct).count(), 1);
    }
}
