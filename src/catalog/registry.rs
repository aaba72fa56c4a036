//! 可编辑题型表
//!
//! 目录的内存副本，支持增删改，不做持久化（重启即丢失）

use serde::Serialize;
use tracing::info;

use super::static_catalog::CatalogSource;
use crate::error::{BusinessError, FieldIssue, FormField, ValidationError};
use crate::models::{DeleteConfirmation, ModuleFilter, PteModule, QuestionTypeInfo};

/// 新建题型的默认图标
const DEFAULT_ICON: &str = "CircleDot";

/// 题型表中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeEntry {
    pub slug: String,
    pub label: String,
    pub short_label: String,
    pub module: PteModule,
    pub description: String,
    pub icon: String,
    pub total_questions: u32,
}

impl From<&QuestionTypeInfo> for TypeEntry {
    fn from(info: &QuestionTypeInfo) -> Self {
        Self {
            slug: info.slug.as_str().to_string(),
            label: info.label.to_string(),
            short_label: info.short_label.to_string(),
            module: info.module,
            description: info.description.to_string(),
            icon: info.icon.to_string(),
            total_questions: info.total_questions,
        }
    }
}

/// 编辑面板中可修改的字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDraft {
    pub slug: String,
    pub label: String,
    pub module: PteModule,
    pub description: String,
}

impl TypeDraft {
    /// "Add Question Type" 的初始值
    pub fn blank() -> Self {
        Self {
            slug: String::new(),
            label: String::new(),
            module: PteModule::Reading,
            description: String::new(),
        }
    }

    /// "Edit" 的初始值
    pub fn from_entry(entry: &TypeEntry) -> Self {
        Self {
            slug: entry.slug.clone(),
            label: entry.label.clone(),
            module: entry.module,
            description: entry.description.clone(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();
        if self.slug.trim().is_empty() {
            issues.push(FieldIssue::required(FormField::Slug));
        }
        if self.label.trim().is_empty() {
            issues.push(FieldIssue::required(FormField::Label));
        }
        ValidationError::new(issues).into_result()
    }
}

/// 保存结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// 内存中的题型表
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: Vec<TypeEntry>,
}

impl TypeRegistry {
    /// 以目录为初始数据创建
    pub fn from_catalog(catalog: &impl CatalogSource) -> Self {
        Self {
            entries: catalog.all().iter().map(TypeEntry::from).collect(),
        }
    }

    pub fn entries(&self) -> &[TypeEntry] {
        &self.entries
    }

    pub fn get(&self, slug: &str) -> Option<&TypeEntry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.get(slug).is_some()
    }

    /// 按模块和搜索词（名称、slug、描述）筛选
    pub fn filter(&self, module: ModuleFilter, search: &str) -> Vec<&TypeEntry> {
        let term = search.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| module.matches(e.module))
            .filter(|e| {
                term.is_empty()
                    || e.label.to_lowercase().contains(&term)
                    || e.slug.to_lowercase().contains(&term)
                    || e.description.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// 新建或更新（slug 已存在即更新）
    pub fn save(&mut self, draft: TypeDraft) -> Result<SaveOutcome, ValidationError> {
        draft.validate()?;

        let slug = draft.slug.trim().to_string();
        let label = draft.label.trim().to_string();

        if let Some(existing) = self.entries.iter_mut().find(|e| e.slug == slug) {
            existing.label = label;
            existing.module = draft.module;
            existing.description = draft.description;
            info!("✏️ 更新题型: {}", slug);
            return Ok(SaveOutcome::Updated);
        }

        info!("➕ 新增题型: {} ({})", slug, draft.module);
        self.entries.push(TypeEntry {
            slug,
            short_label: label.clone(),
            label,
            module: draft.module,
            description: draft.description,
            icon: DEFAULT_ICON.to_string(),
            total_questions: 0,
        });
        Ok(SaveOutcome::Created)
    }

    pub fn request_delete(&self, slug: &str) -> Result<DeleteConfirmation, BusinessError> {
        let entry = self
            .get(slug)
            .ok_or_else(|| BusinessError::QuestionTypeNotFound {
                slug: slug.to_string(),
            })?;
        Ok(DeleteConfirmation {
            key: entry.slug.clone(),
            prompt: format!("Delete question type \"{}\"?", entry.label),
        })
    }

    pub fn confirm_delete(
        &mut self,
        confirmation: DeleteConfirmation,
    ) -> Result<TypeEntry, BusinessError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.slug == confirmation.key)
            .ok_or(BusinessError::StaleConfirmation {
                key: confirmation.key,
            })?;
        let removed = self.entries.remove(index);
        info!("🗑️ 删除题型: {}", removed.slug);
        Ok(removed)
    }
}
