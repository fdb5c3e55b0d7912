use clap::Parser;
use nb2zed::utils::{logger, validation::Validate};
use nb2zed::{convert, CliConfig};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting nb2zed");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 執行轉換；失敗已在轉換邊界輸出診斷訊息
    let success = convert(&config.input, &config.output);

    if success {
        tracing::info!("✅ Conversion completed successfully");
    }

    std::process::exit(if success { 0 } else { 1 });
}
