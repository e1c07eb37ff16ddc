use serde::de::{self, SeqAccess, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::client::CliArgs;
use crate::sequence::DEFAULT_DATA;

/// arraylab 配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArrayLabConfig {
    /// 会话配置
    #[serde(default)]
    pub session: SessionConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 会话配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// 初始数组
    #[serde(
        default = "default_initial_data",
        deserialize_with = "deserialize_initial_data"
    )]
    pub initial_data: Vec<i32>,

    /// 彩色输出
    #[serde(default = "default_color")]
    pub color: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别：trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 日志输出：stderr, stdout, file
    #[serde(default = "default_log_output")]
    pub output: String,

    /// 日志文件路径（当 output = file 时）
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// 默认值函数
// ============================================================================

fn default_initial_data() -> Vec<i32> {
    DEFAULT_DATA.to_vec()
}

fn default_color() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_output() -> String {
    "stderr".to_string()
}

/// 接受整数数组、单个整数或逗号分隔的字符串
///
/// 环境变量只给一个值（`ARRAYLAB__SESSION__INITIAL_DATA=5`）时会被解析成整数而不是列表。
fn deserialize_initial_data<'de, D>(deserializer: D) -> Result<Vec<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(InitialDataVisitor)
}

struct InitialDataVisitor;

impl<'de> Visitor<'de> for InitialDataVisitor {
    type Value = Vec<i32>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a list of integers")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Vec<i32>, E> {
        i32::try_from(value)
            .map(|value| vec![value])
            .map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Vec<i32>, E> {
        i32::try_from(value)
            .map(|value| vec![value])
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Vec<i32>, E> {
        value
            .split(',')
            .map(|item| item.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vec<i32>, A::Error> {
        // 元素交给配置源自己转换，环境变量拆出来的元素是字符串
        let mut values = Vec::new();
        while let Some(value) = seq.next_element::<i32>()? {
            values.push(value);
        }
        Ok(values)
    }
}

// ============================================================================
// 实现
// ============================================================================

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_data: default_initial_data(),
            color: default_color(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            output: default_log_output(),
            log_file: None,
        }
    }
}

impl ArrayLabConfig {
    /// 从文件加载配置
    ///
    /// 配置加载顺序（优先级从低到高）：
    /// 1. 默认配置（内嵌的 default.toml）
    /// 2. 用户配置文件（可选）
    /// 3. 环境变量（ARRAYLAB__ 前缀，使用双下划线分隔嵌套）
    ///
    /// 环境变量中的 `initial_data` 以逗号分隔，例如
    /// `ARRAYLAB__SESSION__INITIAL_DATA=3,1,2`。
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use arraylab::config::ArrayLabConfig;
    ///
    /// // 加载配置（如果文件不存在，使用默认配置）
    /// let config = ArrayLabConfig::from_file("arraylab.toml").unwrap();
    /// ```
    pub fn from_file(path: &str) -> crate::Result<Self> {
        Self::load(path, Self::environment())
    }

    /// 环境变量配置源（ARRAYLAB__ 前缀，双下划线分隔嵌套）
    fn environment() -> config::Environment {
        config::Environment::with_prefix("ARRAYLAB")
            .prefix_separator("__")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("session.initial_data")
            .try_parsing(true)
    }

    fn load(path: &str, environment: config::Environment) -> crate::Result<Self> {
        let settings = config::Config::builder()
            // 1. 加载默认配置（内嵌）
            .add_source(config::File::from_str(
                include_str!("default.toml"),
                config::FileFormat::Toml,
            ))
            // 2. 加载用户配置（可选，不存在不报错）
            .add_source(config::File::with_name(path).required(false))
            // 3. 加载环境变量
            .add_source(environment)
            .build()
            .map_err(|e| format!("Failed to load config: {}", e))?;

        Ok(settings
            .try_deserialize()
            .map_err(|e| format!("Failed to parse config: {}", e))?)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &str) -> crate::Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, toml_string)
            .map_err(|e| format!("Failed to write config file: {}", e))?;
        Ok(())
    }

    /// 命令行参数覆盖配置文件
    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(data) = &args.data {
            self.session.initial_data = data.clone();
        }
        if let Some(level) = &args.log_level {
            self.logging.level = level.clone();
        }
        if args.no_color {
            self.session.color = false;
        }
    }

    /// 验证配置
    ///
    /// 检查日志级别、日志输出方式，以及 file 输出时是否给出了文件路径。
    pub fn validate(&self) -> Result<(), String> {
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(format!(
                    "Invalid log level: '{}'. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ))
            }
        }

        match self.logging.output.as_str() {
            "stderr" | "stdout" | "file" => {}
            _ => {
                return Err(format!(
                    "Invalid log output: '{}'. Must be one of: stderr, stdout, file",
                    self.logging.output
                ))
            }
        }

        if self.logging.output == "file" && self.logging.log_file.is_none() {
            return Err("Log output is 'file' but log_file path is not specified".to_string());
        }

        Ok(())
    }

    /// 打印配置摘要
    pub fn print_summary(&self) {
        println!("📋 arraylab Configuration:");
        println!("   Initial Data: {:?}", self.session.initial_data);
        println!(
            "   Color:        {}",
            if self.session.color {
                "enabled"
            } else {
                "disabled"
            }
        );
        println!();
        println!("   Log Level:    {}", self.logging.level);
        println!("   Log Output:   {}", self.logging.output);
        if let Some(ref log_file) = self.logging.log_file {
            println!("   Log File:     {}", log_file.display());
        }
        println!();
    }
}
