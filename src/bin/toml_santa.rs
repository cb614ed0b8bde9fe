use clap::Parser;
use secret_santa::core::ConfigProvider;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{AssignmentPipeline, LocalStorage, SantaEngine, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-santa")]
#[command(about = "Secret Santa draw driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "santa.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the seed from config
    #[arg(long)]
    seed: Option<u64>,

    /// Dry run - validate the input files without drawing
    #[arg(long)]
    dry_run: bool,
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Exchange: {}", config.exchange.name);
    if let Some(description) = &config.exchange.description {
        tracing::info!("   {}", description);
    }
    tracing::info!("   Participants: {}", config.participants_file());
    tracing::info!(
        "   History: {}",
        config.history_file().unwrap_or("(none)")
    );
    tracing::info!(
        "   Output: {} [{}]",
        config.output_path(),
        config.output_formats().join(", ")
    );
    tracing::info!("   Max attempts: {}", config.max_attempts());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置（日誌設定也在其中，所以先載入再初始化日誌）
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if config.json_logging() {
        logger::init_json_logger(config.log_level(), args.verbose);
    } else if let Some(level) = config.log_level() {
        logger::init_with_level(level, args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based Secret Santa draw");
    tracing::info!("📁 Configuration loaded from: {}", args.config);

    // 套用命令列覆蓋設定
    if let Some(seed) = args.seed {
        config
            .matching
            .get_or_insert(secret_santa::config::toml_config::MatchingConfig {
                max_attempts: None,
                seed: None,
            })
            .seed = Some(seed);
        tracing::info!("🔧 Seed overridden to: {}", seed);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config);

    let storage = LocalStorage::new(".".to_string());
    let pipeline = AssignmentPipeline::new(storage, config);
    let engine = SantaEngine::new(pipeline);

    let outcome = if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be drawn or written");
        engine.dry_run().await.map(|summary| {
            format!(
                "Input looks good: {} participants, {} previous assignments",
                summary.participants, summary.previous_assignments
            )
        })
    } else {
        engine
            .run()
            .await
            .map(|output_path| format!("Output saved to: {}", output_path))
    };

    match outcome {
        Ok(message) => {
            println!("✅ {}", message);
        }
        Err(e) => {
            tracing::error!(
                "❌ Draw failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
