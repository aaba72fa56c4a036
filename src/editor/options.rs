//! 选择题选项块

use crate::error::{EditorError, FieldIssue, FormField, IssueKind};
use crate::models::QuestionOption;

/// 选项最少保留数量
pub const MIN_OPTIONS: usize = 2;
/// 选项 id 为单个字母，最多 a-z
pub const MAX_OPTIONS: usize = 26;
/// 新建编辑器时的选项数量（a-d）
pub const DEFAULT_OPTIONS: usize = 4;

/// 作答方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMode {
    /// 单选：标记一个即清除其他
    Single,
    /// 多选：各选项独立切换
    Multiple,
}

/// 第 index 个选项的 id：a, b, c, ...
fn option_id(index: usize) -> String {
    char::from(b'a' + index as u8).to_string()
}

/// 有序选项集合
///
/// 选项 id 始终与位置对应（a, b, c, ...），删除后会重新编号
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    mode: AnswerMode,
    options: Vec<QuestionOption>,
}

impl OptionSet {
    /// 四个空选项 a-d
    pub fn new(mode: AnswerMode) -> Self {
        Self {
            mode,
            options: (0..DEFAULT_OPTIONS)
                .map(|i| QuestionOption::empty(option_id(i)))
                .collect(),
        }
    }

    pub fn mode(&self) -> AnswerMode {
        self.mode
    }

    pub fn options(&self) -> &[QuestionOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// 是否允许删除（数量大于下限）
    pub fn can_remove(&self) -> bool {
        self.options.len() > MIN_OPTIONS
    }

    /// 追加一个空选项，id 为下一个字母
    pub fn add(&mut self) -> Result<&QuestionOption, EditorError> {
        if self.options.len() >= MAX_OPTIONS {
            return Err(EditorError::OptionLimit { max: MAX_OPTIONS });
        }
        let id = option_id(self.options.len());
        self.options.push(QuestionOption::empty(id));
        Ok(&self.options[self.options.len() - 1])
    }

    /// 删除选项，只剩两个时拒绝
    pub fn remove(&mut self, index: usize) -> Result<QuestionOption, EditorError> {
        self.check_index(index)?;
        if !self.can_remove() {
            return Err(EditorError::MinimumOptions { min: MIN_OPTIONS });
        }
        let removed = self.options.remove(index);
        for (i, option) in self.options.iter_mut().enumerate() {
            option.id = option_id(i);
        }
        Ok(removed)
    }

    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> Result<(), EditorError> {
        self.check_index(index)?;
        self.options[index].text = text.into();
        Ok(())
    }

    /// 点击"正确"标记
    ///
    /// 单选：该选项成为唯一正确项；多选：只切换该选项
    pub fn toggle_correct(&mut self, index: usize) -> Result<(), EditorError> {
        self.check_index(index)?;
        match self.mode {
            AnswerMode::Single => {
                for (i, option) in self.options.iter_mut().enumerate() {
                    option.is_correct = i == index;
                }
            }
            AnswerMode::Multiple => {
                let option = &mut self.options[index];
                option.is_correct = !option.is_correct;
            }
        }
        Ok(())
    }

    /// 正确选项的 id（大写），用于提交回显
    pub fn correct_ids(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| o.is_correct)
            .map(|o| o.id.to_uppercase())
            .collect()
    }

    /// 发布前的选项检查：只看正确选项的数量，选项文本可以留空
    pub fn issues(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        if self.options.len() < MIN_OPTIONS {
            issues.push(FieldIssue::new(
                FormField::Options,
                IssueKind::TooFewOptions { min: MIN_OPTIONS },
            ));
        }
        let correct = self.options.iter().filter(|o| o.is_correct).count();
        if correct == 0 {
            issues.push(FieldIssue::new(FormField::Options, IssueKind::NoCorrectOption));
        } else if correct > 1 && self.mode == AnswerMode::Single {
            issues.push(FieldIssue::new(
                FormField::Options,
                IssueKind::MultipleCorrectOptions,
            ));
        }
        issues
    }

    fn check_index(&self, index: usize) -> Result<(), EditorError> {
        if index >= self.options.len() {
            return Err(EditorError::OptionIndexOutOfRange {
                index,
                len: self.options.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(set: &OptionSet) -> Vec<&str> {
        set.options().iter().map(|o| o.id.as_str()).collect()
    }

    fn correct_count(set: &OptionSet) -> usize {
        set.options().iter().filter(|o| o.is_correct).count()
    }

    #[test]
    fn test_new_seeds_four_options() {
        let set = OptionSet::new(AnswerMode::Single);
        assert_eq!(ids(&set), vec!["a", "b", "c", "d"]);
        assert_eq!(correct_count(&set), 0);
    }

    #[test]
    fn test_add_uses_next_letter() {
        let mut set = OptionSet::new(AnswerMode::Single);
        assert_eq!(set.add().unwrap().id, "e");
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_add_stops_at_z() {
        let mut set = OptionSet::new(AnswerMode::Multiple);
        while set.len() < MAX_OPTIONS {
            set.add().unwrap();
        }
        assert_eq!(set.options().last().unwrap().id, "z");
        assert_eq!(
            set.add().unwrap_err(),
            EditorError::OptionLimit { max: MAX_OPTIONS }
        );
    }

    #[test]
    fn test_remove_relabels_and_stops_at_two() {
        let mut set = OptionSet::new(AnswerMode::Single);
        set.set_text(2, "third").unwrap();
        set.remove(1).unwrap();
        assert_eq!(ids(&set), vec!["a", "b", "c"]);
        assert_eq!(set.options()[1].text, "third");

        set.remove(0).unwrap();
        assert_eq!(set.len(), 2);
        let before = set.clone();
        assert_eq!(
            set.remove(0).unwrap_err(),
            EditorError::MinimumOptions { min: MIN_OPTIONS }
        );
        assert_eq!(set, before);

        // 重新编号后追加不会产生重复 id
        set.add().unwrap();
        assert_eq!(ids(&set), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_single_answer_keeps_exactly_one_correct() {
        let mut set = OptionSet::new(AnswerMode::Single);
        for index in [0, 2, 2, 3, 1] {
            set.toggle_correct(index).unwrap();
            assert_eq!(correct_count(&set), 1);
            assert!(set.options()[index].is_correct);
        }
    }

    #[test]
    fn test_multiple_answer_toggle_is_independent() {
        let mut set = OptionSet::new(AnswerMode::Multiple);
        set.toggle_correct(0).unwrap();
        set.toggle_correct(2).unwrap();
        let snapshot: Vec<bool> = set.options().iter().map(|o| o.is_correct).collect();

        set.toggle_correct(3).unwrap();
        for i in 0..3 {
            assert_eq!(set.options()[i].is_correct, snapshot[i]);
        }
        set.toggle_correct(0).unwrap();
        assert!(!set.options()[0].is_correct);
        assert!(set.options()[2].is_correct);
        assert_eq!(set.correct_ids(), vec!["C", "D"]);
    }

    #[test]
    fn test_index_out_of_range() {
        let mut set = OptionSet::new(AnswerMode::Single);
        assert!(matches!(
            set.toggle_correct(9),
            Err(EditorError::OptionIndexOutOfRange { index: 9, len: 4 })
        ));
    }

    #[test]
    fn test_issues_only_check_correct_answers() {
        let mut set = OptionSet::new(AnswerMode::Single);
        assert_eq!(
            set.issues(),
            vec![FieldIssue::new(FormField::Options, IssueKind::NoCorrectOption)]
        );

        // 选项文本留空不影响发布
        set.toggle_correct(1).unwrap();
        assert!(set.issues().is_empty());

        let mut multi = OptionSet::new(AnswerMode::Multiple);
        multi.toggle_correct(0).unwrap();
        multi.toggle_correct(3).unwrap();
        assert!(multi.issues().is_empty());
    }
}
