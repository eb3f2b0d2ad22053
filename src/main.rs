use clap::Parser;
use jokebox::Category;
use jokebox::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "jokebox", about = "A random joke in your terminal")]
struct Args {
    /// Joke category to start with
    #[arg(short, long, value_enum)]
    category: Option<Category>,

    /// Start in dark mode
    #[arg(short, long)]
    dark: bool,

    /// Override the joke endpoint base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to jokebox.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("jokebox.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}; falling back to defaults", e);
        config::JokeboxConfig::default()
    });
    let cli = CliOverrides {
        category: args.category,
        dark: args.dark,
        base_url: args.base_url,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Jokebox starting up: category={}, theme={:?}, endpoint={}",
        resolved.category.as_str(),
        resolved.theme,
        resolved.base_url
    );

    jokebox::tui::run(resolved)
}
