use aqadvisor::utils::error::{AdvisorError, ErrorSeverity};
use aqadvisor::utils::{logger, validation::Validate};
use aqadvisor::{AqAdvisorClient, Assessment, CliConfig, Stocking, Tank, TomlConfig};
use clap::Parser;

fn exit_with(e: &AdvisorError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2, // 稍後重試
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting aqadvisor CLI");
    tracing::debug!("CLI config: {:?}", cli);

    // 載入 TOML 配置 (可選)
    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path).unwrap_or_else(|e| exit_with(&e))
        }
        None => TomlConfig::default(),
    };

    // 驗證配置
    if let Err(e) = file_config.validate().and_then(|_| cli.validate()) {
        exit_with(&e);
    }
    let config = cli.apply_overrides(file_config.advisor_config());
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let catalogue = file_config
        .load_catalogue()
        .unwrap_or_else(|e| exit_with(&e));

    let mut stocking = Stocking::with_catalogue(catalogue.clone());
    for (name, quantity) in &cli.fish {
        stocking.insert(name.as_str(), *quantity);
    }

    let mut tank = Tank::with_catalogue(&cli.size, catalogue).with_policy(config.policy);
    if let Some(filter) = &cli.filter {
        tank = tank.select_filter(filter);
    }
    let tank = tank.attach_stocking(stocking);

    let assessment = if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - the remote service will not be contacted");
        None
    } else {
        let client = AqAdvisorClient::new(&config).unwrap_or_else(|e| exit_with(&e));
        Some(
            tank.evaluate_with(&client)
                .await
                .unwrap_or_else(|e| exit_with(&e)),
        )
    };

    let report = tank.report(assessment);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("My user-specified stocking is: {}", tank.stocking());
        println!("I translate this into: {}", report.resolved_stock);
        match tank.ldh() {
            Some((l, d, h)) => println!("My tank looks like {} ({} x {} x {})", tank, l, d, h),
            None => println!("My tank looks like {} (unknown dimensions)", tank),
        }
        if let Some(assessment) = &report.assessment {
            println!("Aqadvisor tells me: {}", assessment);
        }
    }

    if let Some(Assessment::Unavailable { reason }) = &report.assessment {
        eprintln!("❌ {}", reason);
        std::process::exit(2);
    }

    Ok(())
}
