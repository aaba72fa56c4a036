use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// 门户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    BranchAdmin,
    Teacher,
    Student,
    Platform,
}

impl UserRole {
    pub const ALL: [UserRole; 6] = [
        UserRole::SuperAdmin,
        UserRole::Admin,
        UserRole::BranchAdmin,
        UserRole::Teacher,
        UserRole::Student,
        UserRole::Platform,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "superAdmin",
            UserRole::Admin => "admin",
            UserRole::BranchAdmin => "branchAdmin",
            UserRole::Teacher => "teacher",
            UserRole::Student => "student",
            UserRole::Platform => "platform",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        UserRole::ALL.into_iter().find(|r| r.as_str() == s.trim())
    }

    pub fn label(self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Admin",
            UserRole::Admin => "Institute Admin",
            UserRole::BranchAdmin => "Branch Admin",
            UserRole::Teacher => "Teacher",
            UserRole::Student => "Student",
            UserRole::Platform => "Platform",
        }
    }

    /// 登录后的默认页面
    pub fn default_landing(self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "/superAdmin/dashboard",
            UserRole::Admin => "/admin/dashboard",
            UserRole::BranchAdmin => "/branch-admin/dashboard",
            UserRole::Teacher => "/teacher/dashboard",
            UserRole::Student => "/student/dashboard",
            UserRole::Platform => "/platform/student",
        }
    }

    /// 题库路由前缀，没有题库入口的角色返回 None
    pub fn question_bank_base(self) -> Option<&'static str> {
        match self {
            UserRole::SuperAdmin => Some("/superAdmin/questionBank"),
            UserRole::Admin => Some("/admin/questionBank"),
            UserRole::Teacher => Some("/teacher/questionBank"),
            UserRole::BranchAdmin | UserRole::Student | UserRole::Platform => None,
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
