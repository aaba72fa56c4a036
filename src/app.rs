use anyhow::Result;
use tracing::{info, warn};

use crate::catalog::{StaticCatalog, TypeRegistry};
use crate::config::Config;
use crate::editor::{header_line, Editor};
use crate::models::{load_all_toml_files, PteModule, Question, QuestionTypeSlug, SaveMode};
use crate::services::{QuestionBank, QuestionService};
use crate::session::Session;
use crate::utils::logging::{
    log_bank_loaded, log_navigation, log_registry_summary, log_startup, print_final_stats,
};
use crate::workflow::CreateWizard;

/// 应用主结构
pub struct App {
    config: Config,
    session: Session,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        let session = Session::resolve(&config);
        log_startup(&session, &config.question_data_folder);
        Self { config, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<QuestionBank> {
        let questions = load_questions(&self.config).await;
        let bank = QuestionBank::new(questions);
        log_bank_loaded(&bank.stats());

        log_navigation(self.session.navigation());
        if let Some(routes) = self.session.question_bank() {
            info!("📚 题库入口: {} (新建: {})", routes.list(), routes.create());
        } else {
            info!("当前角色没有题库入口");
        }

        let registry = TypeRegistry::from_catalog(&StaticCatalog);
        log_registry_summary(&registry);

        let mut service = QuestionService::new(bank, &self.config);
        let created = create_sample_draft(&mut service).await?;
        let bank = service.into_repository();
        info!("📝 示例草稿: {}", created);

        print_final_stats(1, &bank.stats());
        Ok(bank)
    }
}

/// 加载种子题目，目录不存在时以空题库启动
async fn load_questions(config: &Config) -> Vec<Question> {
    info!("\n📁 正在加载题库数据...");
    match load_all_toml_files(&config.question_data_folder).await {
        Ok(questions) => questions,
        Err(e) => {
            warn!("⚠️ 无法加载题库数据，使用空题库: {:#}", e);
            Vec::new()
        }
    }
}

/// 走一遍新建向导，保存一道段落排序草稿
async fn create_sample_draft(service: &mut QuestionService<QuestionBank>) -> Result<Question> {
    let mut wizard = CreateWizard::new();
    wizard.select_module(PteModule::Reading);
    wizard.toggle_type(QuestionTypeSlug::ReorderParagraphs)?;

    if let Some(Editor::ParagraphReorder(editor)) = wizard.editor_mut() {
        info!("{}", header_line(editor.info()));
        editor.common.title = "RO – The history of printing".to_string();
        editor.common.tags_input = "history, sample".to_string();
        editor.update_paragraph(0, "Movable type appeared in China around 1040.")?;
        editor.update_paragraph(1, "Gutenberg built his press in the 1440s.")?;
        editor.update_paragraph(2, "Printed books spread rapidly across Europe.")?;
        let preview = editor.shuffle_preview();
        info!("🔀 预览顺序: {} 段", preview.len());
    }

    let payload = wizard.submit(SaveMode::Draft)?;
    Ok(service.submit(payload).await?)
}
