use clap::Parser;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{AssignmentPipeline, CliConfig, LocalStorage, SantaEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting secret-santa CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let dry_run = config.dry_run;
    let storage = LocalStorage::new(".".to_string());
    let pipeline = AssignmentPipeline::new(storage, config);
    let engine = SantaEngine::new(pipeline);

    if dry_run {
        match engine.dry_run().await {
            Ok(summary) => {
                println!(
                    "✅ Input looks good: {} participants, {} previous assignments",
                    summary.participants, summary.previous_assignments
                );
                return Ok(());
            }
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
        }
    }

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Assignments drawn successfully!");
            println!("✅ Assignments drawn successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Draw failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
