/// 题目保存服务
///
/// 负责把编辑器提交的数据交给持久化层，保存前模拟一次网络延迟
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::editor::Editor;
use crate::error::{AppResult, ValidationError};
use crate::models::{Question, QuestionPayload, SaveMode};
use crate::services::repository::QuestionRepository;
use crate::utils::logging::truncate_text;

pub struct QuestionService<R: QuestionRepository> {
    repository: R,
    save_delay: Duration,
    verbose_logging: bool,
}

impl<R: QuestionRepository> QuestionService<R> {
    pub fn new(repository: R, config: &Config) -> Self {
        Self {
            repository,
            save_delay: Duration::from_millis(config.simulated_save_delay_ms),
            verbose_logging: config.verbose_logging,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    /// 保存一道题
    ///
    /// 延迟期间不可取消
    pub async fn submit(&mut self, payload: QuestionPayload) -> Result<Question, ValidationError> {
        if self.verbose_logging {
            match serde_json::to_string(&payload) {
                Ok(json) => debug!("提交数据: {}", truncate_text(&json, 200)),
                Err(e) => warn!("⚠️ 无法序列化提交数据: {}", e),
            }
        }

        info!(
            "💾 正在保存: {} [{}]",
            truncate_text(&payload.title, 40),
            payload.question_type_label
        );
        if !self.save_delay.is_zero() {
            tokio::time::sleep(self.save_delay).await;
        }

        self.repository.create_question(payload)
    }

    /// 校验编辑器并保存
    pub async fn submit_editor(&mut self, editor: &Editor, mode: SaveMode) -> AppResult<Question> {
        let payload = editor.submit(mode)?;
        Ok(self.submit(payload).await?)
    }
}
