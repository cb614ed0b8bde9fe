use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `--verbose` 優先於設定檔的 level
fn filter_directive(level: Option<&str>, verbose: bool) -> String {
    match (level, verbose) {
        (_, true) => "secret_santa=debug,info".to_string(),
        (Some(level), false) => format!("secret_santa={}", level.trim()),
        (None, false) => "secret_santa=info".to_string(),
    }
}

// RUST_LOG 有設定時以它為準；無效的 level 退回預設
fn build_filter(level: Option<&str>, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(filter_directive(level, verbose))
            .unwrap_or_else(|_| EnvFilter::new(filter_directive(None, verbose)))
    })
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(build_filter(None, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// 以 `log_level` 指定的過濾字串初始化（TOML 設定檔用）
pub fn init_with_level(level: &str, verbose: bool) {
    tracing_subscriber::registry()
        .with(build_filter(Some(level), verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(level: Option<&str>, verbose: bool) {
    tracing_subscriber::registry()
        .with(build_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
