use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::commands::{CommandRegistry, InputError, Reply};
use crate::sequence::Sequence;
use crate::{Result, EXIT_FAILURE, EXIT_SUCCESS};

use super::OutputFormatter;

/// 一次控制台会话
///
/// 会话独占序列，每轮循环读取一个选项并执行到底后才进入下一轮。
/// 输入输出以泛型注入，测试时可以用内存缓冲代替标准输入输出。
pub struct Session<R, W> {
    registry: CommandRegistry,
    sequence: Sequence,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(sequence: Sequence, input: R, output: W) -> Self {
        Self {
            registry: CommandRegistry::new(),
            sequence,
            input,
            output,
        }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 交互模式：显示菜单直到用户选择退出或输入结束
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "{}",
            OutputFormatter::format_original(&self.sequence)
        )?;

        loop {
            write!(self.output, "{}", OutputFormatter::format_menu(&self.registry))?;
            write!(self.output, "{}", OutputFormatter::format_choice_prompt())?;
            self.output.flush()?;

            let Some(choice) = read_line(&mut self.input)? else {
                // EOF (Ctrl+D)
                writeln!(self.output)?;
                info!("end of input, leaving session");
                return Ok(());
            };

            let Some(command) = self.registry.lookup(&choice) else {
                warn!("rejected menu choice {:?}", choice.trim());
                writeln!(self.output, "{}", OutputFormatter::format_invalid_choice())?;
                continue;
            };
            debug!("menu choice {} -> {}", command.menu_key(), command.name());

            // 查找命令需要再读一行目标值
            let mut args = Vec::new();
            if let Some(prompt) = command.target_prompt() {
                write!(self.output, "{}", prompt)?;
                self.output.flush()?;
                match read_line(&mut self.input)? {
                    Some(line) => args.push(line),
                    None => {
                        writeln!(self.output)?;
                        info!("end of input, leaving session");
                        return Ok(());
                    }
                }
            }

            match command.execute(&mut self.sequence, &args) {
                Ok(reply) => {
                    writeln!(self.output, "{}", OutputFormatter::format_reply(&reply))?;
                    if reply.is_exit() {
                        return Ok(());
                    }
                }
                Err(e) => {
                    warn!("rejected input for {}: {}", command.name(), e);
                    writeln!(self.output, "{}", OutputFormatter::format_input_error(&e))?;
                }
            }
        }
    }

    /// 命令模式：执行一条命令并输出结果
    ///
    /// `words[0]` 是菜单编号或命令名，其余为命令参数。
    pub fn run_command(&mut self, words: &[String]) -> Result<Reply> {
        let (name, args) = match words.split_first() {
            Some((name, args)) => (name.as_str(), args),
            None => ("", words),
        };

        let command = self
            .registry
            .lookup(name)
            .ok_or_else(|| InputError::InvalidChoice(name.to_string()))?;
        debug!("command mode: {} {:?}", command.name(), args);

        let reply = command.execute(&mut self.sequence, args)?;
        writeln!(self.output, "{}", OutputFormatter::format_reply(&reply))?;
        Ok(reply)
    }

    /// 命令模式的退出码：成功为 0；失败时把错误写到 `errors` 并返回 1
    pub fn run_command_with_status<E: Write>(&mut self, words: &[String], errors: &mut E) -> i32 {
        match self.run_command(words) {
            Ok(_) => EXIT_SUCCESS,
            Err(e) => {
                warn!("command failed: {}", e);
                // stderr 写失败时已无处报告
                let _ = writeln!(errors, "Error: {}", e);
                EXIT_FAILURE
            }
        }
    }
}

/// 读取一行，去掉行尾换行；输入结束时返回 `None`
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
