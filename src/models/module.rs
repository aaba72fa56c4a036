use serde::{Deserialize, Serialize};

/// PTE 考试模块
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PteModule {
    /// 口语
    Speaking,
    /// 写作
    Writing,
    /// 阅读
    Reading,
    /// 听力
    Listening,
}

impl PteModule {
    /// 固定的模块顺序，分组展示时按此顺序
    pub const ALL: [PteModule; 4] = [
        PteModule::Speaking,
        PteModule::Writing,
        PteModule::Reading,
        PteModule::Listening,
    ];

    /// 获取模块标识
    pub fn id(self) -> &'static str {
        match self {
            PteModule::Speaking => "speaking",
            PteModule::Writing => "writing",
            PteModule::Reading => "reading",
            PteModule::Listening => "listening",
        }
    }

    /// 获取展示名称
    pub fn label(self) -> &'static str {
        match self {
            PteModule::Speaking => "Speaking",
            PteModule::Writing => "Writing",
            PteModule::Reading => "Reading",
            PteModule::Listening => "Listening",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PteModule::Speaking => "Test oral fluency, pronunciation, and spoken discourse skills",
            PteModule::Writing => "Evaluate written expression, grammar, and vocabulary usage",
            PteModule::Reading => "Assess reading comprehension and analytical abilities",
            PteModule::Listening => "Measure listening comprehension and note-taking skills",
        }
    }

    /// 图标名称（lucide）
    pub fn icon(self) -> &'static str {
        match self {
            PteModule::Speaking => "Mic",
            PteModule::Writing => "PenLine",
            PteModule::Reading => "BookOpen",
            PteModule::Listening => "Headphones",
        }
    }

    /// 从标识解析模块（忽略大小写和首尾空白）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "speaking" => Some(PteModule::Speaking),
            "writing" => Some(PteModule::Writing),
            "reading" => Some(PteModule::Reading),
            "listening" => Some(PteModule::Listening),
            _ => None,
        }
    }
}

impl std::fmt::Display for PteModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 模块筛选：全部或某个具体模块
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModuleFilter {
    #[default]
    All,
    Only(PteModule),
}

impl ModuleFilter {
    pub fn matches(self, module: PteModule) -> bool {
        match self {
            ModuleFilter::All => true,
            ModuleFilter::Only(selected) => selected == module,
        }
    }

    /// 选中的具体模块
    pub fn module(self) -> Option<PteModule> {
        match self {
            ModuleFilter::All => None,
            ModuleFilter::Only(module) => Some(module),
        }
    }

    /// 解析 "all" 或模块标识
    pub fn from_str(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Some(ModuleFilter::All);
        }
        PteModule::from_str(s).map(ModuleFilter::Only)
    }
}

impl From<PteModule> for ModuleFilter {
    fn from(module: PteModule) -> Self {
        ModuleFilter::Only(module)
    }
}
