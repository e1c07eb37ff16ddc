use crate::commands::{ArgumentParser, Command, InputError, Reply};
use crate::sequence::Sequence;

/// 退出会话
pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "EXIT"
    }

    fn menu_key(&self) -> u32 {
        6
    }

    fn description(&self) -> String {
        "Exit".to_string()
    }

    fn execute(&self, _sequence: &mut Sequence, args: &[String]) -> Result<Reply, InputError> {
        ArgumentParser::new(args, self.name()).check_arg_count(0)?;
        Ok(Reply::Exit)
    }
}
