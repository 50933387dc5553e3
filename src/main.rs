use anyhow::Result;
use clap::Parser;

use pricewatch::app::{self, AppCfg};
use pricewatch::shared::config::Config;

#[derive(Parser, Debug)]
#[command(version, about = "E-commerce price tracker with one-shot email alerts")]
struct Args {
    /// Product name (free text, names the history file)
    #[arg(long)]
    name: Option<String>,

    /// Product page URL
    #[arg(long)]
    url: Option<String>,

    /// Desired price: alert fires once the listing drops to or below it
    #[arg(long)]
    target_price: Option<u64>,

    /// Seconds to wait between poll cycles
    #[arg(long, default_value = "60")]
    interval_secs: u64,

    /// Directory the history log is written to
    #[arg(long, default_value = ".")]
    history_dir: String,

    /// SMTP relay host
    #[arg(long, default_value = "smtp.gmail.com")]
    smtp_host: String,

    /// SMTP relay port (STARTTLS)
    #[arg(long, default_value = "587")]
    smtp_port: u16,

    /// Alert recipient (defaults to the sender address)
    #[arg(long)]
    recipient: Option<String>,

    /// Path to config file (optional)
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    // Load base configuration from file if provided
    let base_config = if let Some(config_path) = &args.config {
        Some(Config::from_file(config_path)?)
    } else {
        None
    };

    // CLI args > config file > defaults
    let app_cfg = if let Some(cfg) = base_config {
        let mut app_cfg = AppCfg::from_config(cfg)?;

        if let Some(name) = args.name {
            app_cfg.product_name = name;
        }
        if let Some(url) = args.url {
            app_cfg.product_url = url;
        }
        if let Some(target_price) = args.target_price {
            app_cfg.target_price = target_price;
        }
        if args.interval_secs != 60 {
            // Only override if not default
            app_cfg.interval_secs = args.interval_secs;
        }
        if args.history_dir != "." {
            // Only override if not default
            app_cfg.history_dir = args.history_dir;
        }
        if args.smtp_host != "smtp.gmail.com" {
            app_cfg.smtp_host = args.smtp_host;
        }
        if args.smtp_port != 587 {
            app_cfg.smtp_port = args.smtp_port;
        }
        if let Some(recipient) = args.recipient {
            app_cfg.smtp_recipient = Some(recipient);
        }

        app_cfg
    } else {
        // Use CLI args only (required fields must be provided)
        let name = args
            .name
            .ok_or_else(|| anyhow::anyhow!("--name is required when not using --config"))?;
        let url = args
            .url
            .ok_or_else(|| anyhow::anyhow!("--url is required when not using --config"))?;
        let target_price = args.target_price.ok_or_else(|| {
            anyhow::anyhow!("--target-price is required when not using --config")
        })?;

        AppCfg::from_cli_args(
            name,
            url,
            target_price,
            args.interval_secs,
            args.history_dir,
            args.smtp_host,
            args.smtp_port,
            args.recipient,
        )?
    };

    app::run(app_cfg).await
}
