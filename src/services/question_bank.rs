//! 内存题库
//!
//! 题目列表页的数据源：筛选、统计、删除，以及新题目的落库。

use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::repository::QuestionRepository;
use crate::catalog::{CatalogSource, StaticCatalog};
use crate::error::{BusinessError, FieldIssue, FormField, IssueKind, ValidationError};
use crate::models::{
    DeleteConfirmation, Difficulty, ModuleFilter, PteModule, Question, QuestionPayload,
    QuestionStatus, QuestionTypeSlug,
};

/// 列表页筛选条件，未设置的条件不参与筛选
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub module: ModuleFilter,
    pub question_type: Option<QuestionTypeSlug>,
    pub difficulty: Option<Difficulty>,
    pub status: Option<QuestionStatus>,
    pub search: String,
}

impl QuestionFilter {
    pub fn matches(&self, question: &Question) -> bool {
        self.module.matches(question.module)
            && self.question_type.map_or(true, |t| t == question.question_type)
            && self.difficulty.map_or(true, |d| d == question.difficulty)
            && self.status.map_or(true, |s| s == question.status)
            && question.matches_search(&self.search)
    }
}

/// 统计条：总数与各模块数量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankStats {
    pub total: usize,
    pub per_module: Vec<(PteModule, usize)>,
}

impl BankStats {
    pub fn count(&self, module: PteModule) -> usize {
        self.per_module
            .iter()
            .find(|(m, _)| *m == module)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
    next_seq: u64,
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// `q-007` → 7
fn id_seq(id: &str) -> Option<u64> {
    id.strip_prefix("q-")?.parse().ok()
}

impl QuestionBank {
    /// 重复 id 只保留第一条
    pub fn new(seed: Vec<Question>) -> Self {
        let mut seen = HashSet::new();
        let mut questions = Vec::with_capacity(seed.len());
        for question in seed {
            if seen.insert(question.id.clone()) {
                questions.push(question);
            } else {
                warn!("⚠️ 跳过重复的题目 id: {} ({})", question.id, question.title);
            }
        }

        let mut next_seq: u64 = 1;
        for id in questions.iter().map(|q| q.id.as_str()) {
            let Some(seq) = id_seq(id) else { continue };
            match seq.checked_add(1) {
                Some(next) => next_seq = next_seq.max(next),
                None => warn!("⚠️ 题目 id 超出编号范围，不参与编号: {}", id),
            }
        }

        Self {
            questions,
            next_seq,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// 没有命中时返回空列表
    pub fn filter(&self, filter: &QuestionFilter) -> Vec<&Question> {
        let result: Vec<&Question> = self.questions.iter().filter(|q| filter.matches(q)).collect();
        debug!("筛选题目: {} / {}", result.len(), self.questions.len());
        result
    }

    pub fn stats(&self) -> BankStats {
        BankStats {
            total: self.questions.len(),
            per_module: PteModule::ALL
                .iter()
                .map(|&m| (m, self.questions.iter().filter(|q| q.module == m).count()))
                .collect(),
        }
    }

    pub fn request_delete(&self, id: &str) -> Result<DeleteConfirmation, BusinessError> {
        let question = self.get(id).ok_or_else(|| BusinessError::QuestionNotFound {
            id: id.to_string(),
        })?;
        Ok(DeleteConfirmation {
            key: question.id.clone(),
            prompt: format!(
                "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                question.title
            ),
        })
    }

    pub fn confirm_delete(
        &mut self,
        confirmation: DeleteConfirmation,
    ) -> Result<Question, BusinessError> {
        let index = self
            .questions
            .iter()
            .position(|q| q.id == confirmation.key)
            .ok_or(BusinessError::StaleConfirmation {
                key: confirmation.key,
            })?;
        let removed = self.questions.remove(index);
        info!("🗑️ 删除题目: {}", removed.id);
        Ok(removed)
    }
}

impl QuestionRepository for QuestionBank {
    fn create_question(&mut self, payload: QuestionPayload) -> Result<Question, ValidationError> {
        let mut issues = Vec::new();
        if payload.title.trim().is_empty() {
            issues.push(FieldIssue::required(FormField::Title));
        }
        if StaticCatalog
            .ensure_consistent(payload.module, payload.question_type)
            .is_err()
        {
            issues.push(FieldIssue::new(FormField::QuestionType, IssueKind::ModuleMismatch));
        }
        ValidationError::new(issues).into_result()?;

        let mut id = format!("q-{:03}", self.next_seq);
        while self.get(&id).is_some() {
            self.next_seq += 1;
            id = format!("q-{:03}", self.next_seq);
        }

        let now = Utc::now();
        let question = Question {
            id,
            title: payload.title,
            module: payload.module,
            question_type: payload.question_type,
            question_type_label: payload.question_type_label,
            difficulty: payload.difficulty,
            content: payload.content,
            options: payload.options,
            correct_answer: payload.correct_answer,
            audio_url: payload.audio_url,
            image_url: payload.image_url,
            passage: payload.passage,
            status: payload.mode.status(),
            tags: payload.tags,
            created_at: now,
            updated_at: now,
        };
        self.next_seq += 1;

        info!(
            "✅ 已保存题目 {} ({}, {})",
            question.id,
            question.question_type,
            question.status.as_str()
        );
        self.questions.push(question.clone());
        Ok(question)
    }
}
