//! 段落排序编辑器（reorder-paragraphs）

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use super::common::CommonFields;
use super::reorder::{apply_drag_end, shuffled, DragEnd};
use crate::error::{EditorError, FieldIssue, ValidationError};
use crate::models::question::non_blank;
use crate::models::{QuestionOption, QuestionPayload, QuestionTypeInfo, SaveMode};

const SEED_PARAGRAPHS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReorderParagraph {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct ParagraphReorderEditor {
    info: &'static QuestionTypeInfo,
    pub common: CommonFields,
    pub intro: String,
    /// 正确顺序
    paragraphs: Vec<ReorderParagraph>,
    /// 打乱预览，只保存 id
    preview_order: Option<Vec<String>>,
    next_seq: usize,
}

impl ParagraphReorderEditor {
    pub(crate) fn new(info: &'static QuestionTypeInfo) -> Self {
        let mut editor = Self {
            info,
            common: CommonFields::default(),
            intro: String::new(),
            paragraphs: Vec::with_capacity(SEED_PARAGRAPHS),
            preview_order: None,
            next_seq: 1,
        };
        for _ in 0..SEED_PARAGRAPHS {
            editor.push_empty();
        }
        editor
    }

    fn push_empty(&mut self) -> &ReorderParagraph {
        let id = format!("p-{}", self.next_seq);
        self.next_seq += 1;
        self.paragraphs.push(ReorderParagraph {
            id,
            text: String::new(),
        });
        &self.paragraphs[self.paragraphs.len() - 1]
    }

    pub fn info(&self) -> &'static QuestionTypeInfo {
        self.info
    }

    pub fn paragraphs(&self) -> &[ReorderParagraph] {
        &self.paragraphs
    }

    /// 追加一个空段落，没有数量上限
    pub fn add_paragraph(&mut self) -> &ReorderParagraph {
        let id = format!("p-{}", self.next_seq);
        if let Some(preview) = self.preview_order.as_mut() {
            preview.push(id);
        }
        let added = self.push_empty();
        debug!("新增段落 {}", added.id);
        added
    }

    pub fn update_paragraph(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), EditorError> {
        let len = self.paragraphs.len();
        let paragraph = self
            .paragraphs
            .get_mut(index)
            .ok_or(EditorError::ParagraphIndexOutOfRange { index, len })?;
        paragraph.text = text.into();
        Ok(())
    }

    /// 拖拽调整正确顺序
    pub fn move_paragraph(&mut self, event: &DragEnd<String>) -> bool {
        apply_drag_end(&mut self.paragraphs, |p: &ReorderParagraph| p.id.as_str(), event)
    }

    /// 生成考生视角的打乱顺序
    pub fn shuffle_preview(&mut self) -> Vec<&ReorderParagraph> {
        self.shuffle_preview_with(&mut rand::thread_rng())
    }

    pub fn shuffle_preview_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<&ReorderParagraph> {
        let ids: Vec<String> = self.paragraphs.iter().map(|p| p.id.clone()).collect();
        self.preview_order = Some(shuffled(&ids, rng));
        info!("🔀 已生成段落打乱预览 ({} 段)", ids.len());
        self.preview().unwrap_or_default()
    }

    /// 当前预览，按预览顺序返回段落
    pub fn preview(&self) -> Option<Vec<&ReorderParagraph>> {
        self.preview_order.as_ref().map(|order| {
            order
                .iter()
                .filter_map(|id| self.paragraphs.iter().find(|p| &p.id == id))
                .collect()
        })
    }

    pub fn clear_preview(&mut self) {
        self.preview_order = None;
    }

    fn filled(&self) -> Vec<&ReorderParagraph> {
        self.paragraphs
            .iter()
            .filter(|p| !p.text.trim().is_empty())
            .collect()
    }

    /// 草稿和发布都只要求标题，空段落在提交时被忽略
    pub fn validate(&self, _mode: SaveMode) -> Result<(), ValidationError> {
        let issues: Vec<FieldIssue> = self.common.title_issue().into_iter().collect();
        ValidationError::new(issues).into_result()
    }

    /// 提交：选项为非空段落（正确顺序），正确答案为 id 序列
    pub fn submit(&self, mode: SaveMode) -> Result<QuestionPayload, ValidationError> {
        self.validate(mode)?;

        let filled = self.filled();
        let order: Vec<&str> = filled.iter().map(|p| p.id.as_str()).collect();
        let options: Vec<QuestionOption> = filled
            .iter()
            .map(|p| QuestionOption {
                id: p.id.clone(),
                text: p.text.trim().to_string(),
                is_correct: true,
            })
            .collect();

        Ok(QuestionPayload {
            title: self.common.title.trim().to_string(),
            module: self.info.module,
            question_type: self.info.slug,
            question_type_label: self.info.label.to_string(),
            difficulty: self.common.difficulty,
            content: non_blank(&self.intro)
                .unwrap_or_else(|| "Put the paragraphs in the correct order.".to_string()),
            options: (!options.is_empty()).then_some(options),
            correct_answer: (!order.is_empty()).then(|| order.join(",")),
            audio_url: None,
            image_url: None,
            passage: None,
            tags: self.common.tags(),
            mode,
        })
    }
}
