use anyhow::Context;
use clap::Parser;
use shoe_stock::utils::logger;
use shoe_stock::{app, CliConfig, FileSource, InventoryStore, Settings};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let settings = Settings::resolve(&cli).context("invalid configuration")?;

    // 初始化日誌
    logger::init_cli_logger(settings.verbose, settings.json_logs);
    tracing::debug!("Settings: {:?}", settings);

    let source =
        FileSource::new(&settings.inventory_path).with_atomic_rewrite(settings.atomic_rewrite);
    let (mut store, report) = InventoryStore::load(source)
        .with_context(|| format!("failed to load {}", settings.inventory_path.display()))?;

    app::report_load_issues(&report, std::io::stderr().lock())?;
    tracing::info!(
        "Loaded {} shoes from {}",
        store.len(),
        store.source().path().display()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = app::execute(&cli.command(), &mut store, stdin.lock(), stdout.lock()) {
        if e.is_recoverable() {
            // 可恢復錯誤：提示後以非零碼結束
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(2);
        }
        return Err(e).context("command failed");
    }

    Ok(())
}
