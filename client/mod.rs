pub mod cli_args;
pub mod formatter;
pub mod session;

pub use cli_args::CliArgs;
pub use formatter::OutputFormatter;
pub use session::Session;
