use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use referral_banner::admin::PublicAssetContext;
use referral_banner::config::Config;
use referral_banner::notices::{load_notice_file, save_notice_file, NoticeQueue};
use referral_banner::pipeline::{FormSubmission, RenderPipeline, SavePipeline};
use referral_banner::resolver::RenderContext;
use referral_banner::settings::{notice_path, open_store, SettingsStore};

/// Referral banner settings tool - validate, save and render banner settings
#[derive(Parser, Debug)]
#[command(name = "referral-banner")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (memory store when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured site title
    #[arg(long)]
    site_title: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate configuration and exit
    Check,
    /// Save settings from key=value assignments
    Save {
        /// Field assignments, e.g. referral_link=https://brave.com/ab12XY
        #[arg(required = true)]
        fields: Vec<String>,
        /// Treat the assignments as the complete form (missing fields are empty)
        #[arg(long)]
        full_form: bool,
    },
    /// Render the public banner, or the admin settings page
    Render {
        #[arg(long)]
        admin: bool,
    },
    /// Print the resolved banner state as JSON
    State {
        #[arg(long)]
        admin: bool,
    },
    /// List the assets to enqueue for a page
    Assets {
        /// Admin screen hook; public page assets when omitted
        #[arg(long)]
        hook: Option<String>,
        /// jQuery is already enqueued
        #[arg(long)]
        jquery_enqueued: bool,
    },
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::in_memory(""),
    };
    if let Some(title) = &args.site_title {
        config.site.title = title.clone();
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    referral_banner::logging::init_subscriber(&config.logging)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging subsystem: {}", e))?;

    tracing::info!(
        config_file = ?args.config,
        backend = ?config.store.backend,
        anchored_links = config.link_policy.anchored,
        "Configuration loaded successfully"
    );

    if let Command::Check = args.command {
        println!("configuration ok");
        return Ok(());
    }

    let store = open_store(&config.store);
    let notice_file = notice_path(&config.store);
    let notices = Arc::new(match &notice_file {
        Some(path) => load_notice_file(path)
            .with_context(|| format!("Failed to load notices from {}", path.display()))?,
        None => NoticeQueue::new(),
    });

    // Notices queued before a failure still reach the next admin render
    let result = run_command(&args.command, &config, store, notices.clone());

    if let Some(path) = &notice_file {
        let persisted = save_notice_file(path, &notices)
            .with_context(|| format!("Failed to persist notices to {}", path.display()));
        if let Err(e) = persisted {
            if result.is_ok() {
                return Err(e);
            }
            tracing::error!(error = %e, "Notices dropped after failed command");
        }
    }
    result
}

fn run_command(
    command: &Command,
    config: &Config,
    store: Arc<dyn SettingsStore>,
    notices: Arc<NoticeQueue>,
) -> anyhow::Result<()> {
    match command {
        Command::Check => {}
        Command::Save { fields, full_form } => {
            let mut submission = FormSubmission::from_assignments(fields)?;
            if *full_form {
                submission = submission.complete();
            }

            let pipeline = SavePipeline::from_config(store, notices, config);
            let report = pipeline.save(&submission).context("Failed to save settings")?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Render { admin } => {
            let pipeline = RenderPipeline::new(store, notices, &config.site.title);
            if *admin {
                println!("{}", pipeline.render_admin()?);
            } else if let Some(html) = pipeline.render_public()? {
                println!("{}", html);
            }
        }
        Command::State { admin } => {
            let context = if *admin {
                RenderContext::AdminPreview
            } else {
                RenderContext::Public
            };
            let pipeline = RenderPipeline::new(store, notices, &config.site.title);
            println!("{}", serde_json::to_string_pretty(&pipeline.state(context)?)?);
        }
        Command::Assets {
            hook,
            jquery_enqueued,
        } => {
            let pipeline = RenderPipeline::new(store, notices, &config.site.title);
            let assets = match hook {
                Some(hook) => pipeline.admin_assets(hook),
                None => pipeline.public_assets(PublicAssetContext {
                    is_admin: false,
                    jquery_enqueued: *jquery_enqueued,
                })?,
            };
            println!("{}", serde_json::to_string_pretty(&assets)?);
        }
    }

    Ok(())
}
