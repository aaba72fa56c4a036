use std::str::FromStr;

use crate::error::ConfigError;
use crate::session::UserRole;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 题库种子数据（TOML）存放目录
    pub question_data_folder: String,
    /// 当前会话角色
    pub role: UserRole,
    /// 模拟保存请求的延迟（毫秒）
    pub simulated_save_delay_ms: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            question_data_folder: "data".to_string(),
            role: UserRole::SuperAdmin,
            simulated_save_delay_ms: 600,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量读取，未设置的使用默认值，已设置但无法解析的返回错误
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::try_from_lookup(|name| std::env::var(name).ok())
    }

    fn try_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default = Self::default();
        let role = match lookup("PORTAL_ROLE") {
            Some(value) => UserRole::from_str(&value).ok_or_else(|| ConfigError::EnvVarParseFailed {
                var_name: "PORTAL_ROLE".to_string(),
                value,
                expected_type: "UserRole".to_string(),
            })?,
            None => default.role,
        };
        Ok(Self {
            question_data_folder: lookup("QUESTION_DATA_FOLDER").unwrap_or(default.question_data_folder),
            role,
            simulated_save_delay_ms: parse_var(&lookup, "SIMULATED_SAVE_DELAY_MS", "u64")?
                .unwrap_or(default.simulated_save_delay_ms),
            verbose_logging: parse_var(&lookup, "VERBOSE_LOGGING", "bool")?
                .unwrap_or(default.verbose_logging),
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var_name: &str,
    expected_type: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var_name) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::try_from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.question_data_folder, "data");
        assert_eq!(config.role, UserRole::SuperAdmin);
        assert_eq!(config.simulated_save_delay_ms, 600);
    }

    #[test]
    fn test_reads_values() {
        let config = Config::try_from_lookup(lookup_from(&[
            ("PORTAL_ROLE", "teacher"),
            ("SIMULATED_SAVE_DELAY_MS", "0"),
            ("VERBOSE_LOGGING", "true"),
        ]))
        .unwrap();
        assert_eq!(config.role, UserRole::Teacher);
        assert_eq!(config.simulated_save_delay_ms, 0);
        assert!(config.verbose_logging);
    }

    #[test]
    fn test_invalid_value_is_reported() {
        let err = Config::try_from_lookup(lookup_from(&[("SIMULATED_SAVE_DELAY_MS", "soon")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::EnvVarParseFailed {
                var_name: "SIMULATED_SAVE_DELAY_MS".to_string(),
                value: "soon".to_string(),
                expected_type: "u64".to_string(),
            }
        );
        assert!(Config::try_from_lookup(lookup_from(&[("PORTAL_ROLE", "root")])).is_err());
    }
}
