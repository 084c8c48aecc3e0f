use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use todo::{repl, Output, Settings, Terminal, SETTINGS_FILE};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Interactive todo list manager")]
struct Cli {
    /// JSON file the task list is loaded from and saved to
    #[arg(long)]
    data_file: Option<PathBuf>,
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
    /// Diagnostic log level, written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Off)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let settings_result = Settings::load(Path::new(SETTINGS_FILE));
    let settings = settings_result.as_ref().cloned().unwrap_or_default();

    let color = settings.color && !cli.no_color && std::io::stdout().is_terminal();
    let mut out = Terminal::stdout(color);

    if let Err(e) = settings_result {
        log::warn!("ignoring {}: {}", SETTINGS_FILE, e);
        out.error(&format!("Ignoring {}: {}", SETTINGS_FILE, e));
    }

    let data_file = settings.resolve_data_file(cli.data_file);
    log::info!("using data file {}", data_file.display());

    let mut ctx = repl::open_context(data_file, &mut out);
    let exit = repl::run(&mut ctx, std::io::stdin().lock(), &mut out);
    log::debug!("session ended: {:?}", exit);
}

fn init_logging(level: LogLevel) {
    let filter = LevelFilter::from(level);
    if filter == LevelFilter::Off {
        return;
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Err(e) = TermLogger::init(filter, log_config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("failed to initialise logging: {}", e);
    }
}
