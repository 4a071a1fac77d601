use clap::Parser;
use intake_support::config::cli::Command;
use intake_support::utils::{logger, validation::Validate};
use intake_support::{AppError, CliConfig, MunicipalityService, Notifier, NotifyOutcome, Serialization};
use std::sync::Arc;

fn fail(e: &AppError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let config = match cli.app_config() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    if let Err(e) = config.validate() {
        fail(&e);
    }
    tracing::debug!("Resolved config: {:?}", config);

    // 整個程序共用同一份序列化設定
    let serialization = Arc::new(Serialization::new());

    match cli.command {
        Command::Lookup { codes } => {
            let service = match MunicipalityService::from_config(&config, Arc::clone(&serialization)).await {
                Ok(service) => service,
                Err(e) => fail(&e),
            };
            tracing::info!(
                "✅ Municipality directory ready ({} entries, fetched {})",
                service.len(),
                service.fetched_at()
            );

            for code in &codes {
                match service.lookup(Some(code)) {
                    Some(municipality) => println!("{}\t{}", code, municipality.name),
                    None => println!("{}\t-", code),
                }
            }
        }
        Command::Notify { description } => {
            let notifier = match Notifier::from_config(&config, serialization) {
                Ok(notifier) => notifier,
                Err(e) => fail(&e),
            };

            match notifier.notify(&description).await {
                NotifyOutcome::Sent => println!("✅ Notification sent"),
                NotifyOutcome::Skipped(reason) => println!("Notification skipped: {:?}", reason),
                // 通知失敗只記錄警告，不影響結束碼
                NotifyOutcome::Failed(_) => println!("⚠️ Notification could not be delivered"),
            }
        }
    }
}
