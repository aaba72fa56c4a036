use crate::error::ValidationError;
use crate::models::{Question, QuestionPayload};

/// 题目持久化边界
///
/// 编辑器只产出 `QuestionPayload`，由实现方分配 id 和时间戳
pub trait QuestionRepository {
    fn create_question(&mut self, payload: QuestionPayload) -> Result<Question, ValidationError>;
}
