//! auditplan CLI - sector audit plan reports
//!
//! Usage:
//!   auditplan init                  Write a default .auditplan/config.toml
//!   auditplan sectors               List the sectors of a catalog
//!   auditplan template <sector>     Show a sector's template
//!   auditplan criteria              Show the risk assessment criteria
//!   auditplan allocate <n>          Split a team across risk tiers
//!   auditplan generate ...          Build and render an audit plan
//!   auditplan sample                Render the demonstration plan

use anyhow::{Context, Result};
use auditplan_core::{AuditPlan, AuditPlanConfig, ByTier, CatalogKind, RiskTier, TeamConfig};
use auditplan_planning::{
    allocate, criteria_for, sample_plan, slot_labels, PlanRequest, TemplateStore,
};
use auditplan_render::{renderer_for, report_filename, report_stem, RenderOptions, ReportFormat};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "auditplan")]
#[command(author, version, about = "Financial audit plan generator")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to .auditplan/config.toml in the current directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// List the sectors available in a catalog
    Sectors {
        #[arg(long, value_enum)]
        catalog: Option<CliCatalog>,
    },

    /// Show the objectives, scope and risk areas of a sector
    Template {
        /// Sector name, e.g. "Technology"
        sector: String,

        #[arg(long, value_enum)]
        catalog: Option<CliCatalog>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the risk assessment criteria for each tier
    Criteria,

    /// Split a team across High/Medium/Low risk sub-teams
    Allocate {
        /// Total team size
        team_size: u32,

        /// Also print the name slot labels for each sub-team
        #[arg(long)]
        labels: bool,
    },

    /// Build an audit plan and render it
    Generate(GenerateArgs),

    /// Render the demonstration plan
    Sample {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Read the request from a JSON or TOML file instead of flags
    #[arg(long, value_name = "FILE", conflicts_with_all = ["company", "sector", "start", "end"])]
    request: Option<PathBuf>,

    /// Company name
    #[arg(long, required_unless_present = "request")]
    company: Option<String>,

    /// Sector name, e.g. "Technology"
    #[arg(long, required_unless_present = "request")]
    sector: Option<String>,

    /// Audit start date (YYYY-MM-DD)
    #[arg(long, required_unless_present = "request")]
    start: Option<NaiveDate>,

    /// Audit end date (YYYY-MM-DD)
    #[arg(long, required_unless_present = "request")]
    end: Option<NaiveDate>,

    /// Team size (clamped to the configured range)
    #[arg(short = 'n', long)]
    team_size: Option<u32>,

    /// High risk team member name (repeatable)
    #[arg(long = "high", value_name = "NAME")]
    high: Vec<String>,

    /// Medium risk team member name (repeatable)
    #[arg(long = "medium", value_name = "NAME")]
    medium: Vec<String>,

    /// Low risk team member name (repeatable)
    #[arg(long = "low", value_name = "NAME")]
    low: Vec<String>,

    #[arg(long, value_enum)]
    catalog: Option<CliCatalog>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "pdf")]
    format: OutputFormat,

    /// Output directory (defaults to report.output_dir from config)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Write the report to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,
}

/// CLI-friendly catalog enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CliCatalog {
    Compliance,
    Topical,
}

impl From<CliCatalog> for CatalogKind {
    fn from(c: CliCatalog) -> Self {
        match c {
            CliCatalog::Compliance => CatalogKind::Compliance,
            CliCatalog::Topical => CatalogKind::Topical,
        }
    }
}

/// Report formats plus a raw JSON dump of the assembled plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Pdf,
    Markdown,
    Json,
}

impl OutputFormat {
    fn report_format(self) -> Option<ReportFormat> {
        match self {
            Self::Pdf => Some(ReportFormat::Pdf),
            Self::Markdown => Some(ReportFormat::Markdown),
            Self::Json => None,
        }
    }

    fn extension(self) -> &'static str {
        match self.report_format() {
            Some(report) => report.extension(),
            None => "json",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `--stdout` output stays clean
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = || load_config(cli.config.as_deref());
    match cli.command {
        Commands::Init { path, force } => cmd_init(path, force).await,
        Commands::Sectors { catalog } => cmd_sectors(resolve_catalog(catalog, &config()?)),
        Commands::Template {
            sector,
            catalog,
            json,
        } => cmd_template(&sector, resolve_catalog(catalog, &config()?), json),
        Commands::Criteria => cmd_criteria(),
        Commands::Allocate { team_size, labels } => cmd_allocate(team_size, labels),
        Commands::Generate(args) => cmd_generate(args, &config()?).await,
        Commands::Sample { output } => cmd_sample(output, &config()?).await,
    }
}

fn load_config(path: Option<&Path>) -> Result<AuditPlanConfig> {
    let config = match path {
        Some(path) => AuditPlanConfig::load(path)
            .with_context(|| format!("Failed to load config {:?}", path))?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            AuditPlanConfig::load_or_default(&cwd).context("Failed to load config")?
        }
    };
    Ok(config)
}

fn resolve_catalog(flag: Option<CliCatalog>, config: &AuditPlanConfig) -> CatalogKind {
    flag.map(CatalogKind::from).unwrap_or(config.catalog)
}

/// Apply the configured team size range the way the input form does
fn clamp_team_size(team: &TeamConfig, requested: Option<u32>) -> u32 {
    let Some(requested) = requested else {
        return team.default_size;
    };
    let size = team.clamp(requested);
    if size != requested {
        warn!(
            "Team size {} is outside {}..={}, using {}",
            requested, team.min_size, team.max_size, size
        );
    }
    size
}

async fn cmd_init(path: PathBuf, force: bool) -> Result<()> {
    let config_path = AuditPlanConfig::path_in(&path);
    if config_path.exists() && !force {
        println!("Config already exists at {:?} (use --force to overwrite)", config_path);
        return Ok(());
    }

    info!("Initializing auditplan in {:?}", path);
    tokio::fs::create_dir_all(&path).await?;
    let written = AuditPlanConfig::write_default(&path).context("Failed to write config")?;

    println!("Created {}", written.display());
    println!("\nNext steps:");
    println!("  1. Edit the catalog, team bounds and report settings as needed");
    println!("  2. Run 'auditplan sectors' to see the available sectors");
    println!("  3. Run 'auditplan generate --help' to build a report");
    Ok(())
}

fn cmd_sectors(kind: CatalogKind) -> Result<()> {
    let store = TemplateStore::get(kind);
    println!("Sectors ({} catalog)", kind);
    println!("{}", "=".repeat(20 + kind.to_string().len()));
    for sector in store.sectors() {
        println!("  {}", sector);
    }
    Ok(())
}

fn cmd_template(sector: &str, kind: CatalogKind, json: bool) -> Result<()> {
    let template = TemplateStore::get(kind).lookup(sector)?;

    if json {
        println!("{}", serde_json::to_string_pretty(template)?);
        return Ok(());
    }

    println!("{} ({} catalog)", template.sector, kind);
    println!("\nObjectives:");
    for item in &template.objectives {
        println!("  - {}", item);
    }
    println!("\nScope:");
    for item in &template.scope {
        println!("  - {}", item);
    }
    println!("\nRisk areas:");
    for (tier, risks) in template.risks.iter() {
        println!("  {}:", tier);
        for risk in risks {
            println!("    - {}", risk);
        }
    }
    Ok(())
}

fn cmd_criteria() -> Result<()> {
    println!("Risk Assessment Criteria");
    println!("========================");
    for tier in RiskTier::ALL {
        println!("\n{} Risk", tier);
        for (dimension, description) in criteria_for(tier) {
            println!("  {}: {}", dimension, description);
        }
    }
    Ok(())
}

fn cmd_allocate(team_size: u32, labels: bool) -> Result<()> {
    let allocation = allocate(team_size)?;
    println!("{}", allocation);

    if labels {
        for tier in RiskTier::ALL {
            for label in slot_labels(&allocation, tier) {
                println!("{}", label);
            }
        }
    }
    Ok(())
}

async fn cmd_generate(args: GenerateArgs, config: &AuditPlanConfig) -> Result<()> {
    let kind = resolve_catalog(args.catalog, config);
    let mut request = match &args.request {
        Some(path) => read_request(path).await?,
        None => request_from_args(&args, &config.team)?,
    };
    request.team_size = clamp_team_size(&config.team, Some(request.team_size));

    let plan = request
        .assemble(TemplateStore::get(kind))
        .context("Failed to assemble audit plan")?;
    debug!("Assembled plan for {} ({})", plan.company_name, plan.sector);

    let blank = blank_slots(&plan)?;
    if !blank.is_empty() {
        info!("{} team slot(s) left blank: {}", blank.len(), blank.join(", "));
    }

    let file_name = output_filename(&plan.company_name, args.output.format);
    write_report(&plan, &args.output, config, &file_name).await
}

/// Form labels of the team slots that have no name
fn blank_slots(plan: &AuditPlan) -> Result<Vec<String>> {
    let allocation = allocate(plan.team_size)?;
    let mut blank = Vec::new();
    for tier in RiskTier::ALL {
        let names = &plan.team_members[tier];
        for (label, name) in slot_labels(&allocation, tier).into_iter().zip(names) {
            if name.trim().is_empty() {
                blank.push(label);
            }
        }
    }
    Ok(blank)
}

async fn cmd_sample(output: OutputArgs, config: &AuditPlanConfig) -> Result<()> {
    let plan = sample_plan(TemplateStore::get(config.catalog))
        .context("Failed to build sample plan")?;
    write_report(&plan, &output, config, &sample_filename(output.format)).await
}

fn request_from_args(args: &GenerateArgs, team: &TeamConfig) -> Result<PlanRequest> {
    Ok(PlanRequest {
        company_name: args.company.clone().context("--company is required")?,
        sector: args.sector.clone().context("--sector is required")?,
        start_date: args.start.context("--start is required")?,
        end_date: args.end.context("--end is required")?,
        team_size: clamp_team_size(team, args.team_size),
        team_members: ByTier::new(
            args.high.clone(),
            args.medium.clone(),
            args.low.clone(),
        ),
    })
}

async fn read_request(path: &Path) -> Result<PlanRequest> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read request file {:?}", path))?;
    parse_request(path, &content)
}

/// Parse a request file, TOML for `.toml` and JSON otherwise
fn parse_request(path: &Path, content: &str) -> Result<PlanRequest> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(content).context("Failed to parse request TOML"),
        _ => serde_json::from_str(content).context("Failed to parse request JSON"),
    }
}

fn encode_plan(plan: &AuditPlan, format: OutputFormat, options: RenderOptions) -> Result<Vec<u8>> {
    let bytes = match format.report_format() {
        Some(report) => renderer_for(report, options)
            .render(plan)
            .with_context(|| format!("Failed to render {} report", report))?,
        None => serde_json::to_vec_pretty(plan)?,
    };
    Ok(bytes)
}

fn output_filename(company_name: &str, format: OutputFormat) -> String {
    match format.report_format() {
        Some(report) => report_filename(company_name, report),
        None => format!("{}.{}", report_stem(company_name), format.extension()),
    }
}

/// The demonstration plan keeps the fixed download name of the sample page
fn sample_filename(format: OutputFormat) -> String {
    format!("audit_report.{}", format.extension())
}

async fn write_report(
    plan: &AuditPlan,
    output: &OutputArgs,
    config: &AuditPlanConfig,
    file_name: &str,
) -> Result<()> {
    let options = RenderOptions::from_config(&config.report);
    let bytes = encode_plan(plan, output.format, options)?;

    if output.stdout {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(&bytes).await?;
        stdout.flush().await?;
        return Ok(());
    }

    let dir = output
        .output
        .clone()
        .unwrap_or_else(|| config.report.output_dir.clone());
    tokio::fs::create_dir_all(&dir).await?;
    let path = dir.join(file_name);
    tokio::fs::write(&path, &bytes)
        .await
        .with_context(|| format!("Failed to write report to {:?}", path))?;

    info!("Wrote {} byte report to {:?}", bytes.len(), path);
    println!("{}", path.display());
    Ok(())
}
