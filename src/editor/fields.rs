//! 通用表单的字段可见性表

use crate::models::QuestionTypeSlug;

/// 某个题型在通用表单中显示的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldCapabilities {
    pub passage: bool,
    pub options: bool,
    pub correct_answer: bool,
    pub audio_upload: bool,
    pub image_upload: bool,
    /// 选项是否多选
    pub multiple_answer: bool,
}

const NONE: FieldCapabilities = FieldCapabilities {
    passage: false,
    options: false,
    correct_answer: false,
    audio_upload: false,
    image_upload: false,
    multiple_answer: false,
};

const PASSAGE: FieldCapabilities = FieldCapabilities { passage: true, ..NONE };
const AUDIO: FieldCapabilities = FieldCapabilities { audio_upload: true, ..NONE };
const AUDIO_ANSWER: FieldCapabilities = FieldCapabilities {
    audio_upload: true,
    correct_answer: true,
    ..NONE
};
const AUDIO_SINGLE: FieldCapabilities = FieldCapabilities {
    audio_upload: true,
    options: true,
    ..NONE
};
const AUDIO_MULTIPLE: FieldCapabilities = FieldCapabilities {
    multiple_answer: true,
    ..AUDIO_SINGLE
};
const PASSAGE_SINGLE: FieldCapabilities = FieldCapabilities {
    passage: true,
    options: true,
    ..NONE
};
const PASSAGE_MULTIPLE: FieldCapabilities = FieldCapabilities {
    multiple_answer: true,
    ..PASSAGE_SINGLE
};

impl FieldCapabilities {
    /// 查表
    pub const fn for_type(slug: QuestionTypeSlug) -> Self {
        use QuestionTypeSlug::*;
        match slug {
            ReadAloud => NONE,
            RepeatSentence => AUDIO,
            DescribeImage => FieldCapabilities { image_upload: true, ..NONE },
            RetellLecture => AUDIO,
            AnswerShortQuestion => AUDIO_ANSWER,
            SummarizeWrittenText => PASSAGE,
            WriteEssay => NONE,
            McqSingle => PASSAGE_SINGLE,
            McqMultiple => PASSAGE_MULTIPLE,
            ReorderParagraphs => NONE,
            FillBlanksDragDrop => PASSAGE,
            FillBlanksReadingWriting => PASSAGE,
            SummarizeSpokenText => AUDIO,
            ListeningMcqSingle => AUDIO_SINGLE,
            ListeningMcqMultiple => AUDIO_MULTIPLE,
            ListeningFillBlanks => AUDIO,
            HighlightCorrectSummary => AUDIO_SINGLE,
            SelectMissingWord => AUDIO_SINGLE,
            HighlightIncorrectWords => FieldCapabilities { passage: true, ..AUDIO },
            WriteFromDictation => AUDIO_ANSWER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::QUESTION_TYPES;

    fn slugs_where(pred: impl Fn(FieldCapabilities) -> bool) -> Vec<&'static str> {
        QUESTION_TYPES
            .iter()
            .filter(|info| pred(FieldCapabilities::for_type(info.slug)))
            .map(|info| info.slug.as_str())
            .collect()
    }

    #[test]
    fn test_passage_membership() {
        assert_eq!(
            slugs_where(|c| c.passage),
            vec![
                "summarize-written-text",
                "mcq-single",
                "mcq-multiple",
                "fill-blanks-drag-drop",
                "fill-blanks-reading-writing",
                "highlight-incorrect-words",
            ]
        );
    }

    #[test]
    fn test_options_membership() {
        assert_eq!(
            slugs_where(|c| c.options),
            vec![
                "mcq-single",
                "mcq-multiple",
                "listening-mcq-single",
                "listening-mcq-multiple",
                "highlight-correct-summary",
                "select-missing-word",
            ]
        );
        assert_eq!(
            slugs_where(|c| c.multiple_answer),
            vec!["mcq-multiple", "listening-mcq-multiple"]
        );
    }

    #[test]
    fn test_answer_image_and_audio_membership() {
        assert_eq!(
            slugs_where(|c| c.correct_answer),
            vec!["answer-short-question", "write-from-dictation"]
        );
        assert_eq!(slugs_where(|c| c.image_upload), vec!["describe-image"]);
        assert_eq!(slugs_where(|c| c.audio_upload).len(), 11);
    }
}
