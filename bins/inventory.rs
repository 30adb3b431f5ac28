use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use cli::{args::Cli, bootstrap};
use configs::AppConfig;
use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

fn main() -> ExitCode {
    // 提前加载 .env，使得 RUST_LOG / CONFIG_PATH 等环境变量生效
    dotenv().ok();
    let cli = Cli::parse();

    // 配置读取失败时回退到默认值，日志初始化之后再报告
    let (cfg, cfg_error) = match AppConfig::load_and_validate() {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    common::utils::logging::init_logging(cfg.logging.json, &cfg.logging.filter);
    if let Some(e) = cfg_error {
        warn!(service = "inventory", event = "config_fallback", error = %e, "invalid config, using defaults");
    }

    let run_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "inventory",
            event = "panic",
            %run_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    info!(
        service = "inventory",
        event = "start",
        %run_id,
        pid,
        version,
        data_file = %cfg.inventory.data_file.display(),
        "inventory starting"
    );

    let mut out = io::stdout();
    match bootstrap::run(cli, &cfg, &mut out) {
        Ok(()) => {
            info!(service = "inventory", event = "stop", %run_id, "inventory finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "inventory", event = "run_failed", %run_id, error = %e, "inventory run failed");
            let _ = writeln!(out, "Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
