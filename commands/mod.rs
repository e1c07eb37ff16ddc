pub mod args;
pub mod exit;
pub mod registry;
pub mod search;
pub mod sort;

use crate::algorithms::{SearchAlgorithm, SortAlgorithm};
use crate::sequence::Sequence;

use exit::ExitCommand;
use search::SearchCommand;
use sort::SortCommand;

// 重新导出常用的类型
pub use args::{ArgumentParser, InputError};
pub use registry::CommandRegistry;

/// 菜单命令
///
/// `args` 在交互模式下是用户对提示的回答，在命令模式下是命令行上命令名之后的参数。
pub trait Command {
    fn name(&self) -> &'static str;

    /// 菜单编号
    fn menu_key(&self) -> u32;

    /// 菜单中显示的说明文字
    fn description(&self) -> String;

    /// 需要额外输入时的提示语
    fn target_prompt(&self) -> Option<String> {
        None
    }

    fn execute(&self, sequence: &mut Sequence, args: &[String]) -> Result<Reply, InputError>;
}

/// 命令执行结果，由 `OutputFormatter` 负责渲染
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Sorted {
        algorithm: SortAlgorithm,
        data: Sequence,
    },
    Found {
        algorithm: SearchAlgorithm,
        index: usize,
    },
    NotFound {
        algorithm: SearchAlgorithm,
    },
    Exit,
}

impl Reply {
    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit)
    }
}

pub enum CommandType {
    Sort(SortCommand),
    Search(SearchCommand),
    Exit(ExitCommand),
}

impl CommandType {
    fn as_command(&self) -> &dyn Command {
        match self {
            CommandType::Sort(cmd) => cmd,
            CommandType::Search(cmd) => cmd,
            CommandType::Exit(cmd) => cmd,
        }
    }

    pub fn name(&self) -> &'static str {
        self.as_command().name()
    }

    pub fn menu_key(&self) -> u32 {
        self.as_command().menu_key()
    }

    pub fn description(&self) -> String {
        self.as_command().description()
    }

    pub fn target_prompt(&self) -> Option<String> {
        self.as_command().target_prompt()
    }

    pub fn execute(&self, sequence: &mut Sequence, args: &[String]) -> Result<Reply, InputError> {
        self.as_command().execute(sequence, args)
    }
}
