//! 编辑器调度
//!
//! 阅读模块的选择题、填空、段落排序各有专用编辑器，其余题型使用通用表单。

use tracing::{debug, error};

use super::common::CommonFields;
use super::fill_blanks::FillBlanksEditor;
use super::generic::GenericQuestionForm;
use super::mcq::McqEditor;
use super::paragraphs::ParagraphReorderEditor;
use crate::catalog::{CatalogSource, StaticCatalog};
use crate::error::{CatalogError, ValidationError};
use crate::models::{PteModule, QuestionPayload, QuestionTypeInfo, QuestionTypeSlug, SaveMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorKind {
    Mcq,
    FillBlanks,
    ParagraphReorder,
    Generic,
}

impl EditorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EditorKind::Mcq => "mcq",
            EditorKind::FillBlanks => "fill-blanks",
            EditorKind::ParagraphReorder => "paragraph-reorder",
            EditorKind::Generic => "generic",
        }
    }
}

/// 纯映射，不做一致性检查
pub fn kind_for(module: PteModule, slug: QuestionTypeSlug) -> EditorKind {
    use QuestionTypeSlug::*;
    match (module, slug) {
        (PteModule::Reading, McqSingle | McqMultiple) => EditorKind::Mcq,
        (PteModule::Reading, FillBlanksDragDrop | FillBlanksReadingWriting) => {
            EditorKind::FillBlanks
        }
        (PteModule::Reading, ReorderParagraphs) => EditorKind::ParagraphReorder,
        _ => EditorKind::Generic,
    }
}

/// 先校验题型属于该模块，再映射
pub fn editor_kind(module: PteModule, slug: QuestionTypeSlug) -> Result<EditorKind, CatalogError> {
    StaticCatalog.ensure_consistent(module, slug)?;
    Ok(kind_for(module, slug))
}

/// 第三步打开的编辑器
#[derive(Debug, Clone)]
pub enum Editor {
    Generic(GenericQuestionForm),
    Mcq(McqEditor),
    FillBlanks(FillBlanksEditor),
    ParagraphReorder(ParagraphReorderEditor),
}

impl Editor {
    pub fn open(module: PteModule, slug: QuestionTypeSlug) -> Result<Self, CatalogError> {
        let catalog: &'static StaticCatalog = &StaticCatalog;
        let info = catalog.ensure_consistent(module, slug).map_err(|e| {
            error!("❌ 无法打开编辑器: {}", e);
            e
        })?;
        let kind = kind_for(module, slug);
        debug!("打开 {} 编辑器: {}", kind.as_str(), slug);
        Ok(Self::with_info(kind, info))
    }

    fn with_info(kind: EditorKind, info: &'static QuestionTypeInfo) -> Self {
        match kind {
            EditorKind::Mcq => Editor::Mcq(McqEditor::new(info)),
            EditorKind::FillBlanks => Editor::FillBlanks(FillBlanksEditor::new(info)),
            EditorKind::ParagraphReorder => {
                Editor::ParagraphReorder(ParagraphReorderEditor::new(info))
            }
            EditorKind::Generic => Editor::Generic(GenericQuestionForm::new(info)),
        }
    }

    pub fn kind(&self) -> EditorKind {
        match self {
            Editor::Generic(_) => EditorKind::Generic,
            Editor::Mcq(_) => EditorKind::Mcq,
            Editor::FillBlanks(_) => EditorKind::FillBlanks,
            Editor::ParagraphReorder(_) => EditorKind::ParagraphReorder,
        }
    }

    pub fn info(&self) -> &'static QuestionTypeInfo {
        match self {
            Editor::Generic(e) => e.info(),
            Editor::Mcq(e) => e.info(),
            Editor::FillBlanks(e) => e.info(),
            Editor::ParagraphReorder(e) => e.info(),
        }
    }

    pub fn common(&self) -> &CommonFields {
        match self {
            Editor::Generic(e) => &e.common,
            Editor::Mcq(e) => &e.common,
            Editor::FillBlanks(e) => &e.common,
            Editor::ParagraphReorder(e) => &e.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut CommonFields {
        match self {
            Editor::Generic(e) => &mut e.common,
            Editor::Mcq(e) => &mut e.common,
            Editor::FillBlanks(e) => &mut e.common,
            Editor::ParagraphReorder(e) => &mut e.common,
        }
    }

    pub fn submit(&self, mode: SaveMode) -> Result<QuestionPayload, ValidationError> {
        match self {
            Editor::Generic(e) => e.submit(mode),
            Editor::Mcq(e) => e.submit(mode),
            Editor::FillBlanks(e) => e.submit(mode),
            Editor::ParagraphReorder(e) => e.submit(mode),
        }
    }
}
