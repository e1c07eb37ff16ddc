use colored::*;

use crate::commands::{CommandRegistry, InputError, Reply};
use crate::sequence::Sequence;

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format_reply(reply: &Reply) -> String {
        match reply {
            Reply::Sorted { algorithm, data } => Self::format_sorted(&algorithm.to_string(), data),
            Reply::Found { index, .. } => Self::format_found(*index),
            Reply::NotFound { .. } => Self::format_not_found(),
            Reply::Exit => Self::format_exit_message(),
        }
    }

    fn format_sorted(algorithm: &str, data: &Sequence) -> String {
        format!(
            "Sorted Data ({}): {}",
            algorithm.cyan(),
            data.to_string().green()
        )
    }

    fn format_found(index: usize) -> String {
        format!("Element found at index {}", index.to_string().green())
    }

    fn format_not_found() -> String {
        "Element not found!".yellow().to_string()
    }

    fn format_exit_message() -> String {
        "Exiting program.".to_string()
    }

    pub fn format_original(sequence: &Sequence) -> String {
        format!("Original Data: {}", sequence.to_string().cyan())
    }

    /// 菜单，开头带一个空行
    pub fn format_menu(registry: &CommandRegistry) -> String {
        let mut menu = format!("\n{}\n", "Select an option:".bold());
        for command in registry.entries() {
            menu.push_str(&format!(
                "{}. {}\n",
                command.menu_key().to_string().blue(),
                command.description()
            ));
        }
        menu
    }

    pub fn format_choice_prompt() -> String {
        "Enter your choice: ".to_string()
    }

    pub fn format_invalid_choice() -> String {
        "Invalid choice, please try again!".red().to_string()
    }

    pub fn format_input_error(err: &InputError) -> String {
        format!("{} {}", "Invalid input:".red(), err)
    }
}
