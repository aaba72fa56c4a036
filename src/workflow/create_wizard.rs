//! 新建题目向导 - 流程层
//!
//! 三步：
//! 1. 选择模块
//! 2. 选择题型（只列出当前模块的题型）
//! 3. 在对应编辑器中填写并提交

use std::fmt::Display;

use tracing::{debug, info};

use crate::catalog::{CatalogSource, StaticCatalog, TypeGroup};
use crate::editor::{Editor, EditorKind};
use crate::error::{AppResult, BusinessError, ValidationError};
use crate::models::{ModuleFilter, PteModule, QuestionPayload, QuestionTypeSlug, SaveMode};

/// 向导当前所在步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    ChooseModule,
    ChooseType,
    EditQuestion,
}

impl Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (index, name) = match self {
            WizardStep::ChooseModule => (1, "Select Module"),
            WizardStep::ChooseType => (2, "Select Question Type"),
            WizardStep::EditQuestion => (3, "Question Details"),
        };
        write!(f, "Step {}: {}", index, name)
    }
}

/// 再次选择当前值即取消选择
pub fn toggle_selection<T: PartialEq>(current: Option<T>, picked: T) -> Option<T> {
    match current {
        Some(value) if value == picked => None,
        _ => Some(picked),
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateWizard {
    module: ModuleFilter,
    selected_type: Option<QuestionTypeSlug>,
    editor: Option<Editor>,
}

impl CreateWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn module(&self) -> ModuleFilter {
        self.module
    }

    pub fn selected_type(&self) -> Option<QuestionTypeSlug> {
        self.selected_type
    }

    pub fn editor(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut Editor> {
        self.editor.as_mut()
    }

    pub fn step(&self) -> WizardStep {
        match (self.module, &self.editor) {
            (_, Some(_)) => WizardStep::EditQuestion,
            (ModuleFilter::Only(_), None) => WizardStep::ChooseType,
            (ModuleFilter::All, None) => WizardStep::ChooseModule,
        }
    }

    /// 切换模块会清空已选题型和编辑器
    pub fn select_module(&mut self, module: impl Into<ModuleFilter>) {
        let module = module.into();
        if self.selected_type.is_some() {
            debug!("切换模块，清空已选题型");
        }
        self.module = module;
        self.selected_type = None;
        self.editor = None;
    }

    /// 第二步可选的题型，按模块分组
    pub fn available_types(&self) -> Vec<TypeGroup<'static>> {
        let catalog: &'static StaticCatalog = &StaticCatalog;
        catalog.grouped(self.module)
    }

    /// 选择或取消选择题型
    ///
    /// 返回打开的编辑器类型，取消选择时返回 None
    pub fn toggle_type(&mut self, slug: QuestionTypeSlug) -> AppResult<Option<EditorKind>> {
        let module = self.module.module().ok_or(BusinessError::NoModuleSelected)?;

        match toggle_selection(self.selected_type, slug) {
            Some(picked) => {
                let editor = Editor::open(module, picked)?;
                let kind = editor.kind();
                info!("📝 选择题型: {} ({})", editor.info().label, kind.as_str());
                self.selected_type = Some(picked);
                self.editor = Some(editor);
                Ok(Some(kind))
            }
            None => {
                debug!("取消选择题型: {}", slug);
                self.selected_type = None;
                self.editor = None;
                Ok(None)
            }
        }
    }

    /// 提交第三步的编辑器
    pub fn submit(&self, mode: SaveMode) -> AppResult<QuestionPayload> {
        let editor = self.editor.as_ref().ok_or(BusinessError::NoTypeSelected)?;
        let payload = editor.submit(mode).map_err(|e: ValidationError| {
            debug!("表单校验未通过: {}", e);
            e
        })?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_toggle_selection() {
        assert_eq!(toggle_selection(None, 3), Some(3));
        assert_eq!(toggle_selection(Some(3), 3), None);
        assert_eq!(toggle_selection(Some(2), 3), Some(3));
    }

    #[test]
    fn test_type_requires_module() {
        let mut wizard = CreateWizard::new();
        assert_eq!(wizard.step(), WizardStep::ChooseModule);
        assert_eq!(wizard.available_types().len(), 4);
        let err = wizard.toggle_type(QuestionTypeSlug::ReadAloud).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BusinessError::NoModuleSelected)
        ));
    }

    #[test]
    fn test_reselect_deselects_and_module_change_clears() {
        let mut wizard = CreateWizard::new();
        wizard.select_module(PteModule::Reading);
        assert_eq!(wizard.step(), WizardStep::ChooseType);
        assert_eq!(wizard.available_types()[0].types.len(), 5);

        let kind = wizard.toggle_type(QuestionTypeSlug::McqSingle).unwrap();
        assert_eq!(kind, Some(EditorKind::Mcq));
        assert_eq!(wizard.step(), WizardStep::EditQuestion);

        assert_eq!(wizard.toggle_type(QuestionTypeSlug::McqSingle).unwrap(), None);
        assert!(wizard.editor().is_none());

        wizard.toggle_type(QuestionTypeSlug::FillBlanksDragDrop).unwrap();
        wizard.select_module(PteModule::Listening);
        assert_eq!(wizard.selected_type(), None);
        assert!(wizard.editor().is_none());
    }

    #[test]
    fn test_type_from_other_module_is_rejected() {
        let mut wizard = CreateWizard::new();
        wizard.select_module(PteModule::Writing);
        let err = wizard.toggle_type(QuestionTypeSlug::ReadAloud).unwrap_err();
        assert!(matches!(err, AppError::Catalog(_)));
        assert_eq!(wizard.selected_type(), None);
    }

    #[test]
    fn test_submit_without_editor() {
        let wizard = CreateWizard::new();
        assert!(matches!(
            wizard.submit(SaveMode::Draft),
            Err(AppError::Business(BusinessError::NoTypeSelected))
        ));
    }

    #[test]
    fn test_step_display() {
        assert_eq!(WizardStep::ChooseType.to_string(), "Step 2: Select Question Type");
    }
}
