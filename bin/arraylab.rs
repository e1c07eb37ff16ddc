use std::io;

use arraylab::client::{CliArgs, Session};
use arraylab::config::LoggingConfig;
use arraylab::{ArrayLabConfig, Result, Sequence, EXIT_SUCCESS};
use tracing::{info, Level};

fn main() -> Result<()> {
    let args = CliArgs::parse_args();

    // 验证参数
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // 生成默认配置文件
    if args.generate_config {
        let config = ArrayLabConfig::default();
        config.save_to_file(&args.config)?;
        println!("✅ Generated default configuration: {}", args.config);
        return Ok(());
    }

    // 加载配置
    let mut config = ArrayLabConfig::from_file(&args.config)?;

    // 命令行参数覆盖配置文件
    config.apply_args(&args);

    // 验证配置
    config.validate()?;

    init_logging(&config.logging)?;
    if !config.session.color {
        colored::control::set_override(false);
    }

    info!("arraylab {} starting", env!("CARGO_PKG_VERSION"));
    if args.show_config {
        config.print_summary();
    }

    let sequence = Sequence::new(config.session.initial_data.clone());
    let stdin = io::stdin();
    let mut session = Session::new(sequence, stdin.lock(), io::stdout());

    if args.should_run_interactive() {
        session.run()?;
    } else {
        let status = session.run_command_with_status(&args.command, &mut io::stderr());
        if status != EXIT_SUCCESS {
            std::process::exit(status);
        }
    }

    Ok(())
}

/// 初始化日志系统
fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(filter);

    match config.output.as_str() {
        "stdout" => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().with_target(false))
                .with(level_filter)
                .init();
        }
        "file" => {
            let log_file = config
                .log_file
                .as_ref()
                .ok_or("Log output is 'file' but log_file path is not specified")?;

            // 确保日志目录存在
            if let Some(parent) = log_file.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .map_err(|e| format!("Failed to open log file '{}': {}", log_file.display(), e))?;

            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::sync::Mutex::new(file))
                        .with_ansi(false)
                        .with_target(false),
                )
                .with(level_filter)
                .init();
        }
        _ => {
            // 默认写到 stderr，避免和菜单输出混在一起
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(false),
                )
                .with(level_filter)
                .init();
        }
    }

    Ok(())
}
