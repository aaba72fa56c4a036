/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use tracing::info;

use crate::catalog::TypeRegistry;
use crate::services::BankStats;
use crate::session::{NavGroup, Session};

/// 记录程序启动信息
///
/// # 参数
/// - `session`: 当前会话
/// - `data_folder`: 种子数据目录
pub fn log_startup(session: &Session, data_folder: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - PTE 题库管理");
    info!("👤 角色: {}", session.role);
    info!("🏠 默认页面: {}", session.landing_path());
    info!("📁 数据目录: {}", data_folder);
    info!("{}", "=".repeat(60));
}

/// 记录题库加载信息
pub fn log_bank_loaded(stats: &BankStats) {
    info!("✓ 已加载 {} 道题目", stats.total);
    for (module, count) in &stats.per_module {
        info!("  {:<10} {}", module.label(), count);
    }
}

/// 记录导航树
pub fn log_navigation(groups: &[NavGroup]) {
    for group in groups {
        info!("📂 {}", group.label);
        for item in group.items {
            match item.href {
                Some(href) => info!("  • {} → {}", item.label, href),
                None => {
                    info!("  • {}", item.label);
                    for child in item.children {
                        info!("      - {} → {}", child.label, child.href);
                    }
                }
            }
        }
    }
}

/// 记录题型表摘要
pub fn log_registry_summary(registry: &TypeRegistry) {
    info!("🧩 题型数量: {}", registry.entries().len());
}

/// 打印最终统计信息
///
/// # 参数
/// - `created`: 本次新建的题目数量
/// - `stats`: 保存后的题库统计
pub fn print_final_stats(created: usize, stats: &BankStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 运行完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 新建题目: {}", created);
    info!("📚 题库总数: {}", stats.total);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
