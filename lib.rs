pub mod algorithms;
pub mod client;
pub mod commands;
pub mod config;
pub mod sequence;

use std::error::Error;

// 重新导出主要的公共接口
pub use algorithms::{SearchAlgorithm, SortAlgorithm};
pub use commands::{CommandRegistry, InputError, Reply};
pub use sequence::Sequence;

// 重新导出常用类型，便于二进制文件使用
pub use client::{CliArgs, OutputFormatter, Session};
pub use config::ArrayLabConfig;

/// 进程退出码
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;
