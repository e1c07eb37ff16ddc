use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "arraylab",
    version,
    about = "Interactive console demo of classic sorting and searching algorithms",
    long_about = "arraylab keeps one in-memory integer array and lets you sort it with quick, merge or heap sort\nand search it with binary or linear search, either from an interactive menu or as a single command\n(for example `arraylab quick` or `arraylab linear 13`)."
)]
pub struct CliArgs {
    /// Configuration file path (missing file falls back to defaults)
    #[arg(short, long, default_value = "arraylab.toml")]
    pub config: String,

    /// Write the default configuration to --config and exit
    #[arg(long)]
    pub generate_config: bool,

    /// Print the effective configuration before starting
    #[arg(long)]
    pub show_config: bool,

    /// Initial array, comma separated (overrides config file)
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    pub data: Option<Vec<i32>>,

    /// Log level (overrides config file)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Command to execute, e.g. `quick`, `binary 6`, `5 13` (interactive menu if omitted)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.generate_config && !self.command.is_empty() {
            return Err("--generate-config cannot be combined with a command".to_string());
        }

        if let Some(level) = &self.log_level {
            match level.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => {}
                _ => {
                    return Err(format!(
                        "Invalid log level: '{}'. Must be one of: trace, debug, info, warn, error",
                        level
                    ))
                }
            }
        }

        Ok(())
    }

    pub fn should_run_interactive(&self) -> bool {
        self.command.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_run_interactive() {
        let args = CliArgs::try_parse_from(["arraylab"]).unwrap();
        assert_eq!(args.config, "arraylab.toml");
        assert!(args.data.is_none());
        assert!(args.should_run_interactive());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_command_mode_with_data() {
        let args =
            CliArgs::try_parse_from(["arraylab", "--data", "3,-1,2", "binary", "6"]).unwrap();
        assert_eq!(args.data, Some(vec![3, -1, 2]));
        assert_eq!(args.command, vec!["binary".to_string(), "6".to_string()]);
        assert!(!args.should_run_interactive());
    }

    #[test]
    fn test_validate_rejects_bad_log_level() {
        let args = CliArgs::try_parse_from(["arraylab", "--log-level", "loud"]).unwrap();
        assert!(args.validate().is_err());

        let args = CliArgs::try_parse_from(["arraylab", "--log-level", "DEBUG"]).unwrap();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_generate_with_command() {
        let args = CliArgs::try_parse_from(["arraylab", "--generate-config", "quick"]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_rejects_non_integer_data() {
        assert!(CliArgs::try_parse_from(["arraylab", "--data", "1,x"]).is_err());
    }
}
