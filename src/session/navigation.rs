//! 各角色的侧边栏导航树
//!
//! 分组 → 菜单项 → 子菜单，全部为静态数据

use serde::Serialize;

use super::role::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavChild {
    pub label: &'static str,
    pub href: &'static str,
}

/// 菜单项：有 `href` 的直接跳转，有 `children` 的可展开
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: Option<&'static str>,
    pub children: &'static [NavChild],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    pub label: &'static str,
    pub items: &'static [NavItem],
}

impl NavGroup {
    /// 组内所有可跳转地址
    pub fn hrefs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.items.iter().flat_map(|item| {
            item.href
                .into_iter()
                .chain(item.children.iter().map(|c| c.href))
        })
    }
}

macro_rules! link {
    ($label:expr, $icon:expr, $href:expr) => {
        NavItem {
            label: $label,
            icon: $icon,
            href: Some($href),
            children: &[],
        }
    };
}

macro_rules! menu {
    ($label:expr, $icon:expr, [$($child:expr),* $(,)?] $(,)?) => {
        NavItem {
            label: $label,
            icon: $icon,
            href: None,
            children: &[$($child),*],
        }
    };
}

macro_rules! child {
    ($label:expr, $href:expr) => {
        NavChild {
            label: $label,
            href: $href,
        }
    };
}

static SUPER_ADMIN_NAV: &[NavGroup] = &[
    NavGroup {
        label: "Dashboard",
        items: &[link!("Dashboard", "LayoutDashboard", "/superAdmin/dashboard")],
    },
    NavGroup {
        label: "Management",
        items: &[
            menu!(
                "Tenants",
                "Building2",
                [
                    child!("All Tenants", "/superAdmin/tenants"),
                    child!("Add Tenant", "/superAdmin/tenants/new"),
                ],
            ),
            link!("Users", "Users", "/superAdmin/users"),
        ],
    },
    NavGroup {
        label: "Content",
        items: &[
            menu!(
                "Question Bank",
                "BookOpen",
                [
                    child!("All Questions", "/superAdmin/questionBank"),
                    child!("Add Question", "/superAdmin/questionBank/create"),
                ],
            ),
            menu!(
                "Question Types",
                "Layers",
                [child!("All Types", "/superAdmin/questionTypes")],
            ),
        ],
    },
    NavGroup {
        label: "Finance",
        items: &[link!("Billing", "CreditCard", "/superAdmin/billing")],
    },
    NavGroup {
        label: "System",
        items: &[link!("Settings", "Settings2", "/superAdmin/settings")],
    },
];

static ADMIN_NAV: &[NavGroup] = &[
    NavGroup {
        label: "Dashboard",
        items: &[link!("Dashboard", "LayoutDashboard", "/admin/dashboard")],
    },
    NavGroup {
        label: "Course",
        items: &[
            menu!(
                "Question Bank",
                "BookOpen",
                [
                    child!("All Questions", "/admin/questionBank"),
                    child!("Add Question", "/admin/questionBank/create"),
                ],
            ),
            menu!("Tests", "ClipboardList", [child!("All Tests", "/admin/tests")]),
        ],
    },
    NavGroup {
        label: "Student",
        items: &[menu!(
            "Students",
            "GraduationCap",
            [
                child!("All Students", "/admin/users"),
                child!("Enroll Student", "/admin/users/enroll"),
            ],
        )],
    },
    NavGroup {
        label: "Staff",
        items: &[
            link!("Teachers", "Users", "/admin/teachers"),
            link!("Branches", "GitBranch", "/admin/branches"),
        ],
    },
];

static BRANCH_ADMIN_NAV: &[NavGroup] = &[
    NavGroup {
        label: "Dashboard",
        items: &[link!("Dashboard", "LayoutDashboard", "/branch-admin/dashboard")],
    },
    NavGroup {
        label: "Branch",
        items: &[
            link!("Students", "GraduationCap", "/branch-admin/students"),
            link!("Teachers", "Users", "/branch-admin/teachers"),
        ],
    },
];

static TEACHER_NAV: &[NavGroup] = &[
    NavGroup {
        label: "Dashboard",
        items: &[link!("Dashboard", "LayoutDashboard", "/teacher/dashboard")],
    },
    NavGroup {
        label: "Students",
        items: &[menu!(
            "My Students",
            "Users",
            [
                child!("Student List", "/teacher/students"),
                child!("Progress Reports", "/teacher/students/progress"),
            ],
        )],
    },
    NavGroup {
        label: "Content",
        items: &[
            menu!(
                "Tests",
                "ClipboardList",
                [
                    child!("All Tests", "/teacher/tests"),
                    child!("Create Test", "/teacher/tests/create"),
                ],
            ),
            link!("Question Bank", "BookOpen", "/teacher/questionBank"),
        ],
    },
];

static STUDENT_NAV: &[NavGroup] = &[
    NavGroup {
        label: "Dashboard",
        items: &[link!("Dashboard", "LayoutDashboard", "/student/dashboard")],
    },
    NavGroup {
        label: "Practice",
        items: &[
            menu!(
                "Practice Tests",
                "BookOpen",
                [
                    child!("All Tests", "/student/practice"),
                    child!("Mock Exams", "/student/practice/mock"),
                ],
            ),
            link!("Results", "BarChart3", "/student/results"),
        ],
    },
    NavGroup {
        label: "Account",
        items: &[link!("My Profile", "User", "/student/profile")],
    },
];

static PLATFORM_NAV: &[NavGroup] = &[
    NavGroup {
        label: "Dashboard",
        items: &[link!("Dashboard", "LayoutDashboard", "/platform/dashboard")],
    },
    NavGroup {
        label: "Students",
        items: &[link!("Students", "GraduationCap", "/platform/student")],
    },
    NavGroup {
        label: "Analytics",
        items: &[link!("Reports", "TrendingUp", "/platform/reports")],
    },
];

pub fn navigation_for(role: UserRole) -> &'static [NavGroup] {
    match role {
        UserRole::SuperAdmin => SUPER_ADMIN_NAV,
        UserRole::Admin => ADMIN_NAV,
        UserRole::BranchAdmin => BRANCH_ADMIN_NAV,
        UserRole::Teacher => TEACHER_NAV,
        UserRole::Student => STUDENT_NAV,
        UserRole::Platform => PLATFORM_NAV,
    }
}
