//! 题目编辑器
//!
//! 向导第三步：按 (模块, 题型) 打开对应编辑器，编辑后提交为 `QuestionPayload`。

pub mod common;
pub mod dispatch;
pub mod fields;
pub mod fill_blanks;
pub mod generic;
pub mod mcq;
pub mod options;
pub mod paragraphs;
pub mod reorder;

pub use common::{header_line, CommonFields};
pub use dispatch::{editor_kind, kind_for, Editor, EditorKind};
pub use fields::FieldCapabilities;
pub use fill_blanks::{extract_blanks, sync_bank_order, Blank, FillBlanksEditor};
pub use generic::GenericQuestionForm;
pub use mcq::McqEditor;
pub use options::{AnswerMode, OptionSet, DEFAULT_OPTIONS, MAX_OPTIONS, MIN_OPTIONS};
pub use paragraphs::{ParagraphReorderEditor, ReorderParagraph};
pub use reorder::{apply_drag_end, move_by_key, move_item, shuffled, DragEnd};
