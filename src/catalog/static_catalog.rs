//! 内置题型目录
//!
//! 进程启动时即固定，只读共享

use crate::error::CatalogError;
use crate::models::{ModuleFilter, PteModule, QuestionTypeInfo, QuestionTypeSlug};

/// 按模块分组的题型
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeGroup<'a> {
    pub module: PteModule,
    pub types: Vec<&'a QuestionTypeInfo>,
}

/// 只读题型目录
///
/// 所有编辑器和选择器都通过这个接口查询题型
pub trait CatalogSource {
    /// 全部题型，按模块固定顺序排列
    fn all(&self) -> &[QuestionTypeInfo];

    fn get(&self, slug: QuestionTypeSlug) -> Option<&QuestionTypeInfo> {
        self.all().iter().find(|info| info.slug == slug)
    }

    /// 按 slug 字符串查询
    fn lookup(&self, slug: &str) -> Result<&QuestionTypeInfo, CatalogError> {
        QuestionTypeSlug::from_slug(slug)
            .and_then(|s| self.get(s))
            .ok_or_else(|| CatalogError::UnknownSlug {
                slug: slug.to_string(),
            })
    }

    fn by_module(&self, module: PteModule) -> Vec<&QuestionTypeInfo> {
        self.all().iter().filter(|info| info.module == module).collect()
    }

    fn filtered(&self, filter: ModuleFilter) -> Vec<&QuestionTypeInfo> {
        self.all().iter().filter(|info| filter.matches(info.module)).collect()
    }

    /// 分组：All 时按 speaking → writing → reading → listening 分四组
    fn grouped(&self, filter: ModuleFilter) -> Vec<TypeGroup<'_>> {
        match filter {
            ModuleFilter::All => PteModule::ALL
                .iter()
                .map(|&module| TypeGroup {
                    module,
                    types: self.by_module(module),
                })
                .collect(),
            ModuleFilter::Only(module) => vec![TypeGroup {
                module,
                types: self.by_module(module),
            }],
        }
    }

    /// 校验题型属于给定模块
    fn ensure_consistent(
        &self,
        module: PteModule,
        slug: QuestionTypeSlug,
    ) -> Result<&QuestionTypeInfo, CatalogError> {
        let info = self.get(slug).ok_or_else(|| CatalogError::UnknownSlug {
            slug: slug.as_str().to_string(),
        })?;
        if info.module != module {
            return Err(CatalogError::ModuleMismatch {
                slug: slug.as_str().to_string(),
                expected: module,
                actual: info.module,
            });
        }
        Ok(info)
    }
}

/// 内置目录
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl CatalogSource for StaticCatalog {
    fn all(&self) -> &[QuestionTypeInfo] {
        &QUESTION_TYPES
    }

    fn get(&self, slug: QuestionTypeSlug) -> Option<&QuestionTypeInfo> {
        Some(question_type_info(slug))
    }
}

/// 内置题型描述，总能找到
pub fn question_type_info(slug: QuestionTypeSlug) -> &'static QuestionTypeInfo {
    // 数组顺序与枚举声明顺序一致
    &QUESTION_TYPES[slug as usize]
}

macro_rules! qt {
    ($slug:ident, $label:expr, $short:expr, $module:ident, $desc:expr, $icon:expr, $total:expr) => {
        QuestionTypeInfo {
            slug: QuestionTypeSlug::$slug,
            label: $label,
            short_label: $short,
            module: PteModule::$module,
            description: $desc,
            icon: $icon,
            total_questions: $total,
        }
    };
}

pub static QUESTION_TYPES: [QuestionTypeInfo; 20] = [
    // ── Speaking ──
    qt!(ReadAloud, "Read Aloud", "RA", Speaking, "Read a text aloud with correct pronunciation and fluency", "Volume2", 42),
    qt!(RepeatSentence, "Repeat Sentence", "RS", Speaking, "Listen to a sentence and repeat it exactly", "RotateCcw", 56),
    qt!(DescribeImage, "Describe Image", "DI", Speaking, "Describe an image in detail within a time limit", "Image", 38),
    qt!(RetellLecture, "Re-tell Lecture", "RL", Speaking, "Listen to a lecture and re-tell it in your own words", "GraduationCap", 29),
    qt!(AnswerShortQuestion, "Answer Short Question", "ASQ", Speaking, "Listen and provide a short one-word or phrase answer", "MessageCircle", 65),
    // ── Writing ──
    qt!(SummarizeWrittenText, "Summarize Written Text", "SWT", Writing, "Read a passage and write a one-sentence summary", "FileText", 34),
    qt!(WriteEssay, "Write Essay", "WE", Writing, "Write a 200-300 word essay on a given topic", "Edit3", 48),
    // ── Reading ──
    qt!(McqSingle, "MCQ – Single Answer", "MCQ-S", Reading, "Read a passage and choose a single correct answer", "CircleDot", 52),
    qt!(McqMultiple, "MCQ – Multiple Answer", "MCQ-M", Reading, "Read a passage and choose multiple correct answers", "CheckSquare", 44),
    qt!(ReorderParagraphs, "Re-order Paragraphs", "RO", Reading, "Arrange text boxes in the correct order", "ArrowUpDown", 31),
    qt!(FillBlanksDragDrop, "Fill in the Blanks (Drag & Drop)", "FIB-DD", Reading, "Drag words from a list to fill in the blanks", "GripHorizontal", 40),
    qt!(FillBlanksReadingWriting, "Fill in the Blanks (R&W)", "FIB-RW", Reading, "Select words from dropdowns to fill in the blanks", "ChevronDown", 47),
    // ── Listening ──
    qt!(SummarizeSpokenText, "Summarize Spoken Text", "SST", Listening, "Listen to a recording and write a summary", "FileAudio", 26),
    qt!(ListeningMcqSingle, "MCQ – Single Answer", "L-MCQ-S", Listening, "Listen and choose a single correct answer", "CircleDot", 37),
    qt!(ListeningMcqMultiple, "MCQ – Multiple Answer", "L-MCQ-M", Listening, "Listen and choose multiple correct answers", "CheckSquare", 33),
    qt!(ListeningFillBlanks, "Fill in the Blanks", "L-FIB", Listening, "Listen and type the missing words", "TextCursorInput", 41),
    qt!(HighlightCorrectSummary, "Highlight Correct Summary", "HCS", Listening, "Listen and select the correct summary from options", "Highlighter", 28),
    qt!(SelectMissingWord, "Select Missing Word", "SMW", Listening, "Listen and select the missing word at the end", "HelpCircle", 35),
    qt!(HighlightIncorrectWords, "Highlight Incorrect Words", "HIW", Listening, "Read along while listening and identify incorrect words", "XCircle", 39),
    qt!(WriteFromDictation, "Write from Dictation", "WFD", Listening, "Listen and type the sentence exactly as heard", "Keyboard", 72),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_enum() {
        for (index, info) in QUESTION_TYPES.iter().enumerate() {
            assert_eq!(info.slug as usize, index, "{} 位置错误", info.slug);
            assert_eq!(info.module, info.slug.module());
        }
    }

    #[test]
    fn test_by_module_counts() {
        let catalog = StaticCatalog;
        assert_eq!(catalog.by_module(PteModule::Speaking).len(), 5);
        assert_eq!(catalog.by_module(PteModule::Writing).len(), 2);
        assert_eq!(catalog.by_module(PteModule::Reading).len(), 5);
        assert_eq!(catalog.by_module(PteModule::Listening).len(), 8);
    }

    #[test]
    fn test_grouped_all_uses_fixed_module_order() {
        let catalog = StaticCatalog;
        let groups = catalog.grouped(ModuleFilter::All);
        let order: Vec<PteModule> = groups.iter().map(|g| g.module).collect();
        assert_eq!(order, PteModule::ALL.to_vec());
        assert_eq!(groups.iter().map(|g| g.types.len()).sum::<usize>(), 20);

        let reading = catalog.grouped(ModuleFilter::Only(PteModule::Reading));
        assert_eq!(reading.len(), 1);
        assert_eq!(reading[0].types.len(), 5);
    }

    #[test]
    fn test_lookup_and_consistency() {
        let catalog = StaticCatalog;
        assert_eq!(catalog.lookup("write-essay").unwrap().label, "Write Essay");
        assert!(matches!(
            catalog.lookup("nope"),
            Err(CatalogError::UnknownSlug { .. })
        ));

        let err = catalog
            .ensure_consistent(PteModule::Reading, QuestionTypeSlug::ListeningMcqSingle)
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::ModuleMismatch {
                slug: "listening-mcq-single".to_string(),
                expected: PteModule::Reading,
                actual: PteModule::Listening,
            }
        );
    }
}
