//! 会话上下文
//!
//! 角色在启动时解析一次，之后作为显式参数传给应用根节点。

pub mod navigation;
pub mod role;

use tracing::info;

use crate::config::Config;

pub use navigation::{navigation_for, NavChild, NavGroup, NavItem};
pub use role::UserRole;

/// 题库相关路由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionBankRoutes {
    base: &'static str,
}

impl QuestionBankRoutes {
    pub fn list(&self) -> &'static str {
        self.base
    }

    pub fn create(&self) -> String {
        format!("{}/create", self.base)
    }

    pub fn edit(&self, id: &str) -> String {
        format!("{}/{}/edit", self.base, id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub role: UserRole,
}

impl Session {
    pub fn new(role: UserRole) -> Self {
        Self { role }
    }

    pub fn resolve(config: &Config) -> Self {
        info!("👤 当前角色: {} ({})", config.role, config.role.as_str());
        Self::new(config.role)
    }

    pub fn landing_path(&self) -> &'static str {
        self.role.default_landing()
    }

    pub fn navigation(&self) -> &'static [NavGroup] {
        navigation_for(self.role)
    }

    pub fn question_bank(&self) -> Option<QuestionBankRoutes> {
        self.role
            .question_bank_base()
            .map(|base| QuestionBankRoutes { base })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_derive_from_role() {
        let session = Session::new(UserRole::SuperAdmin);
        let routes = session.question_bank().unwrap();
        assert_eq!(routes.list(), "/superAdmin/questionBank");
        assert_eq!(routes.create(), "/superAdmin/questionBank/create");
        assert_eq!(routes.edit("q-003"), "/superAdmin/questionBank/q-003/edit");
        assert_eq!(session.landing_path(), "/superAdmin/dashboard");
    }

    #[test]
    fn test_resolve_from_config() {
        let config = Config {
            role: UserRole::Student,
            ..Config::default()
        };
        let session = Session::resolve(&config);
        assert_eq!(session.role, UserRole::Student);
        assert!(session.question_bank().is_none());
        assert_eq!(session.navigation().len(), 3);
    }
}
