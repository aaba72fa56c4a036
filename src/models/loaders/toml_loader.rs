use crate::catalog::{CatalogSource, StaticCatalog};
use crate::models::question::{Question, QuestionBankFile};
use anyhow::{Context, Result};
use futures::future::join_all;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 解析 TOML 文本为题目列表
///
/// 与目录不一致（题型不属于所写模块）的题目会被丢弃并记录警告
pub fn parse_question_bank(content: &str, source_name: &str) -> Result<Vec<Question>> {
    let file: QuestionBankFile = toml::from_str(content)
        .with_context(|| format!("无法解析TOML文件: {}", source_name))?;

    let catalog = StaticCatalog;
    let mut questions = Vec::with_capacity(file.questions.len());
    for question in file.questions {
        match catalog.ensure_consistent(question.module, question.question_type) {
            Ok(_) => questions.push(question),
            Err(e) => {
                tracing::warn!("丢弃题目 {} ({}): {}", question.id, source_name, e);
            }
        }
    }

    Ok(questions)
}

/// 从 TOML 文件加载题目列表
pub async fn load_toml_to_questions(toml_file_path: &Path) -> Result<Vec<Question>> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    parse_question_bank(&content, &toml_file_path.display().to_string())
}

/// 从文件夹中并发加载所有 TOML 文件，按文件名顺序合并
pub async fn load_all_toml_files(folder_path: &str) -> Result<Vec<Question>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut toml_files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml_files.push(path);
        }
    }

    if toml_files.is_empty() {
        tracing::warn!("在文件夹 {} 中没有找到 TOML 文件", folder_path);
        return Ok(Vec::new());
    }

    // read_dir 的顺序不固定
    toml_files.sort();

    let results = join_all(toml_files.iter().map(|path| load_toml_to_questions(path))).await;

    let mut questions = Vec::new();
    for (path, result) in toml_files.iter().zip(results) {
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();
        match result {
            Ok(loaded) => {
                tracing::info!("成功加载 {}: {} 个题目", file_name, loaded.len());
                questions.extend(loaded);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = r#"
        [[questions]]
        id = "q-100"
        title = "Coral Reefs"
        module = "reading"
        question_type = "mcq-single"
        question_type_label = "MCQ – Single Answer"
        content = "What threatens coral reefs most?"
        status = "active"
        created_at = "2025-02-01T08:00:00Z"
        updated_at = "2025-02-01T08:00:00Z"

        [[questions]]
        id = "q-101"
        title = "Mislabelled"
        module = "speaking"
        question_type = "write-essay"
        question_type_label = "Write Essay"
        content = "This type belongs to writing."
        status = "draft"
        created_at = "2025-02-01T08:00:00Z"
        updated_at = "2025-02-01T08:00:00Z"
    "#;

    #[test]
    fn test_parse_drops_inconsistent_questions() {
        let questions = parse_question_bank(SEED, "inline").unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, "q-100");
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        assert!(parse_question_bank("[[questions]\nid = ", "broken").is_err());
    }

    #[tokio::test]
    async fn test_missing_folder_is_error() {
        let result = load_all_toml_files("definitely/not/a/folder").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_folder_reads_every_toml_file() {
        let dir = std::env::temp_dir().join(format!("pte_seed_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("a.toml"), SEED).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let questions = load_all_toml_files(dir.to_str().unwrap()).await.unwrap();
        assert_eq!(questions.len(), 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
