use std::num::ParseIntError;
use thiserror::Error;

/// 用户输入错误
///
/// 替代"读取失败后流进入错误状态"的做法：非法输入被显式拒绝，会话继续。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// 菜单选项不存在
    #[error("invalid choice '{0}'")]
    InvalidChoice(String),

    /// 查找目标不是整数
    #[error("expected an integer target, got '{input}'")]
    InvalidTarget {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// 参数数量不对
    #[error("wrong number of arguments for '{command}' command. Expected {expected}, got {got}")]
    WrongArgCount {
        command: &'static str,
        expected: usize,
        got: usize,
    },
}

/// 参数解析工具
pub struct ArgumentParser<'a> {
    args: &'a [String],
    command_name: &'static str,
}

impl<'a> ArgumentParser<'a> {
    pub fn new(args: &'a [String], command_name: &'static str) -> Self {
        Self { args, command_name }
    }

    /// 检查参数数量
    pub fn check_arg_count(&self, expected: usize) -> Result<(), InputError> {
        if self.args.len() != expected {
            return Err(InputError::WrongArgCount {
                command: self.command_name,
                expected,
                got: self.args.len(),
            });
        }
        Ok(())
    }

    /// 获取整数参数，允许前后空白
    pub fn get_integer(&self, index: usize) -> Result<i32, InputError> {
        let raw = self.args.get(index).map(String::as_str).unwrap_or("");
        let trimmed = raw.trim();
        trimmed.parse::<i32>().map_err(|source| InputError::InvalidTarget {
            input: trimmed.to_string(),
            source,
        })
    }

    /// 解析查找命令的唯一参数：目标值
    pub fn parse_target(&self) -> Result<i32, InputError> {
        self.check_arg_count(1)?;
        self.get_integer(0)
    }
}
