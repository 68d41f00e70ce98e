mod commands;
mod i18n;
mod pages;
mod render;

use campus_api::{endpoints, forms, Section};
use campus_core::{config, lang::Language};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{App, ShowOptions};

#[derive(Parser)]
#[command(
    name = "campus",
    version,
    about = "University portal: localized content from the campus REST API"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "campus.toml")]
    config: String,

    /// UI language (ru, kg, en). Defaults to `campus.default_language`.
    #[arg(short, long, global = true)]
    lang: Option<Language>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a section of the site.
    Show {
        /// about, admissions, infrastructure, student-life, research, news, navbar, gallery.
        section: Section,
        /// Text to search for.
        #[arg(short, long)]
        search: Option<String>,
        /// Category filter (label, slug, or id).
        #[arg(long)]
        category: Option<String>,
        /// Print every language's title under each card.
        #[arg(long)]
        all_languages: bool,
        /// Page number for long lists.
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Send an appeal to the administration.
    Appeal {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
        /// File to attach.
        #[arg(long)]
        attach: Option<PathBuf>,
    },
    /// Apply for a research grant.
    Grant {
        #[arg(long)]
        grant_id: String,
        #[arg(long)]
        applicant: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        organization: String,
        #[arg(long)]
        summary: String,
        #[arg(long)]
        amount: Option<f64>,
    },
    /// Print the absolute URL of a downloadable document.
    Download {
        /// Document path as given by the API (or an absolute URL).
        path: String,
    },
    /// Check configuration and backend availability.
    Status,
}

/// Install the tracing subscriber. The returned guard flushes the log file
/// on drop and must live until exit.
fn init_logging(
    cfg: &config::CampusConfig,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_level.as_str()));
    let stderr = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = if cfg.log_file.trim().is_empty() {
        (None, None)
    } else {
        let path = Path::new(cfg.log_file.trim());
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "campus.log".to_string());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        (
            Some(fmt::layer().with_ansi(false).with_writer(writer)),
            Some(guard),
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(file_layer)
        .init();
    guard
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = config::load(&cli.config)?;
    let _log_guard = init_logging(&cfg.campus);
    let lang = cli.lang.unwrap_or(cfg.campus.default_language);
    let app = App::from_config(cfg)?;

    match cli.command {
        Commands::Show {
            section,
            search,
            category,
            all_languages,
            page,
        } => {
            let opts = ShowOptions {
                search,
                category,
                all_languages,
                page,
            };
            println!("{}", commands::show(&app, section, lang, opts).await);
        }
        Commands::Appeal {
            name,
            email,
            phone,
            subject,
            message,
            attach,
        } => {
            let form = forms::AppealForm {
                full_name: name,
                email,
                phone,
                subject,
                message,
                attachment: attach,
            };
            println!("{}", commands::appeal(&app, &form, lang).await?);
        }
        Commands::Grant {
            grant_id,
            applicant,
            email,
            organization,
            summary,
            amount,
        } => {
            let application = forms::GrantApplication {
                grant_id,
                applicant_name: applicant,
                email,
                organization,
                project_summary: summary,
                requested_amount: amount,
            };
            println!("{}", commands::grant(&app, &application, lang).await?);
        }
        Commands::Download { path } => {
            println!(
                "{}",
                endpoints::download_url(app.client().base_url(), &path)
            );
        }
        Commands::Status => {
            println!("{}", commands::status(&app, &cli.config, lang).await);
        }
    }

    Ok(())
}
