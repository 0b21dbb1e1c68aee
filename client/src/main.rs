//! SnareShare CLI - upload a file through a presigned URL
//!
//! ```bash
//! snareshare upload set.als                          # Print a shareable link
//! snareshare upload flyer.png --content-type image/png
//! snareshare advertise flyer.png --event-name "Warehouse Night" --budget 250
//! snareshare advertise flyer.png --form campaign.json
//! ```
//!
//! The link goes to stdout, progress to stderr. A failed upload prints
//! the generic message and exits with status 1; `-v` shows the detail.

use clap::{Args, Parser, Subcommand};
use snareshare::{
    models::split_list, AdFormData, HttpBackend, Orchestrator, SelectedFile, UploadPhase,
    API_BASE_URL,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "snareshare")]
#[command(about = "Upload a file through a presigned URL and share the link", long_about = None)]
struct Cli {
    /// Backend API origin
    #[arg(long, global = true, default_value = API_BASE_URL)]
    api_url: String,

    /// Show step-level diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a file and print its shareable link
    Upload {
        /// File to upload
        input: PathBuf,

        /// Content-Type for the storage PUT (default: application/octet-stream)
        #[arg(short, long)]
        content_type: Option<String>,
    },

    /// Upload a creative and submit an event ad form pointing at it
    Advertise {
        /// Creative file to upload
        input: PathBuf,

        /// Content-Type for the storage PUT (default: application/octet-stream)
        #[arg(short, long)]
        content_type: Option<String>,

        /// Load form fields from a JSON file (flags override it)
        #[arg(long)]
        form: Option<PathBuf>,

        #[command(flatten)]
        fields: AdFormArgs,
    },
}

#[derive(Args, Default)]
struct AdFormArgs {
    /// Event name
    #[arg(long)]
    event_name: Option<String>,

    /// Event date (YYYY-MM-DD)
    #[arg(long)]
    event_date: Option<String>,

    /// Ticketing page URL
    #[arg(long)]
    ticket_link: Option<String>,

    /// Campaign budget
    #[arg(long)]
    budget: Option<f64>,

    /// Targeted location
    #[arg(long)]
    location: Option<String>,

    /// Targeting radius around the location
    #[arg(long)]
    radius: Option<u32>,

    /// First day the ad runs (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<String>,

    /// Last day the ad runs (YYYY-MM-DD)
    #[arg(long)]
    end_date: Option<String>,

    /// Audience tag (repeatable or comma-separated)
    #[arg(long = "audience-tag")]
    audience_tags: Vec<String>,

    /// Audience type (repeatable or comma-separated)
    #[arg(long = "audience-type")]
    audience_types: Vec<String>,

    /// Conversion type (e.g. ticket_sales)
    #[arg(long)]
    conversion_type: Option<String>,

    /// Page the campaign links from
    #[arg(long)]
    page_source: Option<String>,
}

impl AdFormArgs {
    /// Overwrite `form` with every field given on the command line.
    fn apply(self, form: &mut AdFormData) {
        if let Some(v) = self.event_name {
            form.event_name = v;
        }
        if let Some(v) = self.event_date {
            form.event_date = v;
        }
        if let Some(v) = self.ticket_link {
            form.ticket_link = v;
        }
        if self.budget.is_some() {
            form.budget = self.budget;
        }
        if let Some(v) = self.location {
            form.location = v;
        }
        if self.radius.is_some() {
            form.radius = self.radius;
        }
        if let Some(v) = self.start_date {
            form.start_date = v;
        }
        if let Some(v) = self.end_date {
            form.end_date = v;
        }
        if !self.audience_tags.is_empty() {
            form.audience_tags = self.audience_tags.iter().flat_map(|t| split_list(t)).collect();
        }
        if !self.audience_types.is_empty() {
            form.audience_types = self.audience_types.iter().flat_map(|t| split_list(t)).collect();
        }
        if let Some(v) = self.conversion_type {
            form.conversion_type = v;
        }
        if let Some(v) = self.page_source {
            form.page_source = v;
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Upload { input, content_type } => {
            cmd_upload(&cli.api_url, &input, content_type, None).await
        }

        Commands::Advertise {
            input,
            content_type,
            form,
            fields,
        } => cmd_advertise(&cli.api_url, &input, content_type, form.as_deref(), fields).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();
}

fn build_form(path: Option<&Path>, fields: AdFormArgs) -> Result<AdFormData, Box<dyn std::error::Error>> {
    let mut form = match path {
        Some(p) => {
            let content = fs::read_to_string(p)?;
            serde_json::from_str(&content)?
        }
        None => AdFormData::default(),
    };
    fields.apply(&mut form);
    Ok(form)
}

async fn cmd_advertise(
    api_url: &str,
    input: &Path,
    content_type: Option<String>,
    form_path: Option<&Path>,
    fields: AdFormArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = build_form(form_path, fields)?;
    cmd_upload(api_url, input, content_type, Some(form)).await
}

async fn cmd_upload(
    api_url: &str,
    input: &Path,
    content_type: Option<String>,
    form: Option<AdFormData>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = SelectedFile::from_path(input).await?;
    if let Some(ct) = content_type {
        file = file.with_mime_type(ct);
    }
    eprintln!("📄 {} ({} bytes, {})", file.name, file.len(), file.content_type());
    if file.is_empty() {
        log::warn!("⚠️  {} is empty, uploading zero bytes", file.name);
    }

    let backend = HttpBackend::new(api_url);
    let orchestrator = match form {
        Some(form) => Orchestrator::with_ad_form(backend, form),
        None => Orchestrator::new(backend),
    }
    .with_observer(|phase| {
        if phase.is_loading() {
            eprintln!("⏳ {}", phase.button_label());
        }
    });
    orchestrator.select_file(file);

    match orchestrator.upload().await? {
        UploadPhase::Succeeded(link) => {
            eprintln!("✅ Share this link:");
            println!("{}", link);
            Ok(())
        }
        UploadPhase::Failed(err) => Err(err.user_message().into()),
        other => Err(format!("Upload did not settle: {:?}", other).into()),
    }
}
