use carom_convert::core::etl::write_report;
use carom_convert::core::ConfigProvider;
use carom_convert::utils::error::ErrorSeverity;
use carom_convert::utils::{logger, validation::Validate};
use carom_convert::{CliConfig, EtlEngine, FilePipeline, LocalStorage, Result, TomlConfig};

fn run<C: ConfigProvider + Validate>(config: C, cli: &CliConfig) -> Result<()> {
    // 驗證配置
    config.validate()?;
    tracing::debug!(
        "Base dir: {}, {} candidates, marker '{}' -> '{}'",
        config.base_dir(),
        config.candidates().len(),
        config.input_marker(),
        config.output_marker()
    );

    let storage = LocalStorage::new(config.base_dir().to_string());
    let pipeline = FilePipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline).with_dry_run(cli.dry_run);

    // JSON 日誌佔用 stdout
    let summary = if cli.json_logs {
        engine.run_to(&mut std::io::stderr().lock())?
    } else {
        engine.run()?
    };
    tracing::info!(
        "✅ {} files converted, {} rows written, {} rows skipped",
        summary.files_converted(),
        summary.rows_written(),
        summary.rows_skipped()
    );

    if let Some(path) = &cli.report_json {
        write_report(&summary, path)?;
        tracing::info!("📁 Report saved to: {}", path);
    }

    Ok(())
}

fn main() {
    let cli = CliConfig::parse_args();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting carom-convert");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path).and_then(|config| run(config, &cli))
        }
        None => run(cli.clone(), &cli),
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}
