use phf::phf_map;
use serde::{Deserialize, Serialize};

use super::module::PteModule;

/// 内置题型标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionTypeSlug {
    // Speaking
    ReadAloud,
    RepeatSentence,
    DescribeImage,
    RetellLecture,
    AnswerShortQuestion,
    // Writing
    SummarizeWrittenText,
    WriteEssay,
    // Reading
    McqSingle,
    McqMultiple,
    ReorderParagraphs,
    FillBlanksDragDrop,
    FillBlanksReadingWriting,
    // Listening
    SummarizeSpokenText,
    ListeningMcqSingle,
    ListeningMcqMultiple,
    ListeningFillBlanks,
    HighlightCorrectSummary,
    SelectMissingWord,
    HighlightIncorrectWords,
    WriteFromDictation,
}

static SLUG_MAP: phf::Map<&'static str, QuestionTypeSlug> = phf_map! {
    "read-aloud" => QuestionTypeSlug::ReadAloud,
    "repeat-sentence" => QuestionTypeSlug::RepeatSentence,
    "describe-image" => QuestionTypeSlug::DescribeImage,
    "retell-lecture" => QuestionTypeSlug::RetellLecture,
    "answer-short-question" => QuestionTypeSlug::AnswerShortQuestion,
    "summarize-written-text" => QuestionTypeSlug::SummarizeWrittenText,
    "write-essay" => QuestionTypeSlug::WriteEssay,
    "mcq-single" => QuestionTypeSlug::McqSingle,
    "mcq-multiple" => QuestionTypeSlug::McqMultiple,
    "reorder-paragraphs" => QuestionTypeSlug::ReorderParagraphs,
    "fill-blanks-drag-drop" => QuestionTypeSlug::FillBlanksDragDrop,
    "fill-blanks-reading-writing" => QuestionTypeSlug::FillBlanksReadingWriting,
    "summarize-spoken-text" => QuestionTypeSlug::SummarizeSpokenText,
    "listening-mcq-single" => QuestionTypeSlug::ListeningMcqSingle,
    "listening-mcq-multiple" => QuestionTypeSlug::ListeningMcqMultiple,
    "listening-fill-blanks" => QuestionTypeSlug::ListeningFillBlanks,
    "highlight-correct-summary" => QuestionTypeSlug::HighlightCorrectSummary,
    "select-missing-word" => QuestionTypeSlug::SelectMissingWord,
    "highlight-incorrect-words" => QuestionTypeSlug::HighlightIncorrectWords,
    "write-from-dictation" => QuestionTypeSlug::WriteFromDictation,
};

impl QuestionTypeSlug {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionTypeSlug::ReadAloud => "read-aloud",
            QuestionTypeSlug::RepeatSentence => "repeat-sentence",
            QuestionTypeSlug::DescribeImage => "describe-image",
            QuestionTypeSlug::RetellLecture => "retell-lecture",
            QuestionTypeSlug::AnswerShortQuestion => "answer-short-question",
            QuestionTypeSlug::SummarizeWrittenText => "summarize-written-text",
            QuestionTypeSlug::WriteEssay => "write-essay",
            QuestionTypeSlug::McqSingle => "mcq-single",
            QuestionTypeSlug::McqMultiple => "mcq-multiple",
            QuestionTypeSlug::ReorderParagraphs => "reorder-paragraphs",
            QuestionTypeSlug::FillBlanksDragDrop => "fill-blanks-drag-drop",
            QuestionTypeSlug::FillBlanksReadingWriting => "fill-blanks-reading-writing",
            QuestionTypeSlug::SummarizeSpokenText => "summarize-spoken-text",
            QuestionTypeSlug::ListeningMcqSingle => "listening-mcq-single",
            QuestionTypeSlug::ListeningMcqMultiple => "listening-mcq-multiple",
            QuestionTypeSlug::ListeningFillBlanks => "listening-fill-blanks",
            QuestionTypeSlug::HighlightCorrectSummary => "highlight-correct-summary",
            QuestionTypeSlug::SelectMissingWord => "select-missing-word",
            QuestionTypeSlug::HighlightIncorrectWords => "highlight-incorrect-words",
            QuestionTypeSlug::WriteFromDictation => "write-from-dictation",
        }
    }

    /// 从 slug 字符串解析（精确匹配）
    pub fn from_slug(slug: &str) -> Option<Self> {
        SLUG_MAP.get(slug).copied()
    }

    /// 题型所属模块
    pub fn module(self) -> PteModule {
        use QuestionTypeSlug::*;
        match self {
            ReadAloud | RepeatSentence | DescribeImage | RetellLecture | AnswerShortQuestion => {
                PteModule::Speaking
            }
            SummarizeWrittenText | WriteEssay => PteModule::Writing,
            McqSingle | McqMultiple | ReorderParagraphs | FillBlanksDragDrop
            | FillBlanksReadingWriting => PteModule::Reading,
            SummarizeSpokenText | ListeningMcqSingle | ListeningMcqMultiple
            | ListeningFillBlanks | HighlightCorrectSummary | SelectMissingWord
            | HighlightIncorrectWords | WriteFromDictation => PteModule::Listening,
        }
    }
}

impl std::fmt::Display for QuestionTypeSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 题型静态描述
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionTypeInfo {
    pub slug: QuestionTypeSlug,
    pub label: &'static str,
    pub short_label: &'static str,
    pub module: PteModule,
    pub description: &'static str,
    pub icon: &'static str,
    pub total_questions: u32,
}
