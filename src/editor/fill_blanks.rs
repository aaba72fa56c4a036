//! 阅读填空编辑器（fill-blanks-drag-drop / fill-blanks-reading-writing）
//!
//! 空格不直接编辑，而是从文章中的 `[[word]]` 标记推导。
//! 每次修改文章都会重新推导空格并同步词库顺序。

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::common::CommonFields;
use super::reorder::{apply_drag_end, DragEnd};
use crate::error::{FieldIssue, FormField, IssueKind, ValidationError};
use crate::models::{QuestionOption, QuestionPayload, QuestionTypeInfo, QuestionTypeSlug, SaveMode};

fn blank_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[\[(.+?)\]\]").expect("blank pattern is valid"))
}

/// 从文章推导出的空格
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blank {
    pub word: String,
    /// `word-index`，区分重复的词
    pub key: String,
}

/// 按出现顺序提取所有 `[[...]]` 空格
pub fn extract_blanks(text: &str) -> Vec<Blank> {
    blank_regex()
        .captures_iter(text)
        .enumerate()
        .map(|(index, caps)| {
            let word = caps[1].to_string();
            Blank {
                key: format!("{}-{}", word, index),
                word,
            }
        })
        .collect()
}

/// 同步词库顺序
///
/// 保留仍然存在的 key，追加新 key；`current` 有重复 key 时长度对不上，直接重置为推导顺序
pub fn sync_bank_order(current: &[String], blanks: &[Blank]) -> Vec<String> {
    let mut order: Vec<String> = current
        .iter()
        .filter(|key| blanks.iter().any(|b| &b.key == *key))
        .cloned()
        .collect();

    for blank in blanks {
        if !order.contains(&blank.key) {
            order.push(blank.key.clone());
        }
    }

    if order.len() != blanks.len() {
        return blanks.iter().map(|b| b.key.clone()).collect();
    }
    order
}

#[derive(Debug, Clone)]
pub struct FillBlanksEditor {
    info: &'static QuestionTypeInfo,
    pub common: CommonFields,
    /// 展示给考生的说明
    pub instructions: String,
    passage: String,
    blanks: Vec<Blank>,
    bank_order: Vec<String>,
}

impl FillBlanksEditor {
    pub(crate) fn new(info: &'static QuestionTypeInfo) -> Self {
        Self {
            info,
            common: CommonFields::default(),
            instructions: String::new(),
            passage: String::new(),
            blanks: Vec::new(),
            bank_order: Vec::new(),
        }
    }

    pub fn info(&self) -> &'static QuestionTypeInfo {
        self.info
    }

    pub fn passage(&self) -> &str {
        &self.passage
    }

    /// 文章中的空格，按出现顺序
    pub fn blanks(&self) -> &[Blank] {
        &self.blanks
    }

    /// 词库展示顺序（key 列表）
    pub fn bank_order(&self) -> &[String] {
        &self.bank_order
    }

    /// 文章变更：重新推导空格并同步词库顺序
    pub fn set_passage(&mut self, text: impl Into<String>) {
        self.passage = text.into();
        self.blanks = extract_blanks(&self.passage);
        self.bank_order = sync_bank_order(&self.bank_order, &self.blanks);
        debug!("检测到 {} 个空格", self.blanks.len());
    }

    /// 拖动词库中的词块
    pub fn move_bank_chip(&mut self, event: &DragEnd<String>) -> bool {
        apply_drag_end(&mut self.bank_order, |key: &String| key.as_str(), event)
    }

    /// 按词库顺序排列的空格
    pub fn word_bank(&self) -> Vec<&Blank> {
        self.bank_order
            .iter()
            .filter_map(|key| self.blanks.iter().find(|b| &b.key == key))
            .collect()
    }

    pub fn instructions_placeholder(&self) -> &'static str {
        if self.info.slug == QuestionTypeSlug::FillBlanksDragDrop {
            "Drag words from the list to fill the blanks."
        } else {
            "Select the correct option from each dropdown."
        }
    }

    pub fn validate(&self, mode: SaveMode) -> Result<(), ValidationError> {
        let mut issues: Vec<FieldIssue> = self.common.title_issue().into_iter().collect();
        if mode == SaveMode::Publish {
            if self.passage.trim().is_empty() {
                issues.push(FieldIssue::required(FormField::Passage));
            } else if self.blanks.is_empty() {
                issues.push(FieldIssue::new(FormField::Passage, IssueKind::NoBlanks));
            }
        }
        ValidationError::new(issues).into_result()
    }

    /// 提交
    ///
    /// 正确答案为文章顺序的空格词；选项为词库顺序的词块
    pub fn submit(&self, mode: SaveMode) -> Result<QuestionPayload, ValidationError> {
        self.validate(mode)?;

        let content = if self.instructions.trim().is_empty() {
            self.instructions_placeholder().to_string()
        } else {
            self.instructions.clone()
        };
        let words: Vec<&str> = self.blanks.iter().map(|b| b.word.as_str()).collect();
        let chips: Vec<QuestionOption> = self
            .word_bank()
            .into_iter()
            .map(|b| QuestionOption {
                id: b.key.clone(),
                text: b.word.clone(),
                is_correct: true,
            })
            .collect();

        Ok(QuestionPayload {
            title: self.common.title.trim().to_string(),
            module: self.info.module,
            question_type: self.info.slug,
            question_type_label: self.info.label.to_string(),
            difficulty: self.common.difficulty,
            content,
            options: (!chips.is_empty()).then_some(chips),
            correct_answer: (!words.is_empty()).then(|| words.join(", ")),
            audio_url: None,
            image_url: None,
            passage: Some(self.passage.clone()),
            tags: self.common.tags(),
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::question_type_info;

    fn editor() -> FillBlanksEditor {
        FillBlanksEditor::new(question_type_info(QuestionTypeSlug::FillBlanksDragDrop))
    }

    fn words(blanks: &[Blank]) -> Vec<&str> {
        blanks.iter().map(|b| b.word.as_str()).collect()
    }

    #[test]
    fn test_extract_in_order() {
        let blanks = extract_blanks("Ocean [[currents]] affect [[climate]] patterns.");
        assert_eq!(words(&blanks), vec!["currents", "climate"]);
        assert_eq!(blanks[0].key, "currents-0");
        assert_eq!(blanks[1].key, "climate-1");
    }

    #[test]
    fn test_extract_is_non_greedy_and_keys_duplicates() {
        let blanks = extract_blanks("[[the]] cat and [[the]] dog [[ ]] [[]]");
        assert_eq!(words(&blanks), vec!["the", "the", " "]);
        assert_eq!(blanks[0].key, "the-0");
        assert_eq!(blanks[1].key, "the-1");
    }

    #[test]
    fn test_removing_marker_shrinks_bank() {
        let mut e = editor();
        e.set_passage("Ocean [[currents]] affect [[climate]] patterns.");
        assert_eq!(e.bank_order(), &["currents-0", "climate-1"]);

        e.set_passage("Ocean [[currents]] affect climate patterns.");
        assert_eq!(words(e.blanks()), vec!["currents"]);
        assert_eq!(e.bank_order().len(), 1);
    }

    #[test]
    fn test_new_blanks_append_to_user_order() {
        let mut e = editor();
        e.set_passage("[[a]] [[b]] [[c]]");
        assert!(e.move_bank_chip(&DragEnd::new("c-2".to_string(), "a-0".to_string())));
        assert_eq!(e.bank_order(), &["c-2", "a-0", "b-1"]);

        e.set_passage("[[a]] [[b]] [[c]] [[d]]");
        assert_eq!(e.bank_order(), &["c-2", "a-0", "b-1", "d-3"]);

        let bank: Vec<&str> = e.word_bank().iter().map(|b| b.word.as_str()).collect();
        assert_eq!(bank, vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_sync_drops_stale_keys() {
        let blanks = extract_blanks("[[x]] [[y]]");
        let current = vec!["gone-5".to_string(), "y-1".to_string()];
        assert_eq!(sync_bank_order(&current, &blanks), vec!["y-1", "x-0"]);
    }

    #[test]
    fn test_sync_resets_on_repeated_keys() {
        let blanks = extract_blanks("[[x]] [[y]]");
        let current = vec!["y-1".to_string(), "y-1".to_string(), "x-0".to_string()];
        assert_eq!(sync_bank_order(&current, &blanks), vec!["x-0", "y-1"]);
    }

    #[test]
    fn test_cancelled_chip_drag() {
        let mut e = editor();
        e.set_passage("[[a]] [[b]]");
        assert!(!e.move_bank_chip(&DragEnd::cancelled("a-0".to_string())));
        assert_eq!(e.bank_order(), &["a-0", "b-1"]);
    }

    #[test]
    fn test_publish_needs_blanks() {
        let mut e = editor();
        e.common.title = "FIB – Ocean Currents".to_string();
        e.set_passage("No markers here.");
        let err = e.submit(SaveMode::Publish).unwrap_err();
        assert_eq!(
            err.issues,
            vec![FieldIssue::new(FormField::Passage, IssueKind::NoBlanks)]
        );

        e.set_passage("Ocean [[currents]] affect [[climate]] patterns.");
        e.move_bank_chip(&DragEnd::new("climate-1".to_string(), "currents-0".to_string()));
        let payload = e.submit(SaveMode::Publish).unwrap();
        assert_eq!(payload.correct_answer.as_deref(), Some("currents, climate"));
        assert_eq!(payload.content, "Drag words from the list to fill the blanks.");
        let chips: Vec<&str> = payload
            .options
            .as_ref()
            .unwrap()
            .iter()
            .map(|o| o.text.as_str())
            .collect();
        assert_eq!(chips, vec!["climate", "currents"]);
    }
}
