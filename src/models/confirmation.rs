/// 破坏性操作的确认凭据
///
/// 先调用 `request_delete` 拿到凭据并展示 `prompt`，用户确认后再把凭据交回
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    /// 目标标识（题目 id 或题型 slug）
    pub key: String,
    pub prompt: String,
}
