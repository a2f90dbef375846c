//! Parse command - extract accounts from a single pasted batch.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use akun_core::{AccountBatchParser, BatchParser, LineClass, LineReport, OutputFormat, ParseResult};

use super::load_config;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file (default: stdin, also "-")
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Show how each input line was classified
    #[arg(long)]
    explain: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Format {
    /// JSON output
    Json,
    /// CSV output, one row per account
    Csv,
    /// Plain text summary
    Text,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Csv => OutputFormat::Csv,
            Format::Text => OutputFormat::Text,
        }
    }
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let text = read_input(args.input.as_ref()).await?;
    let parser = AccountBatchParser::from_config(&config.parser);

    if args.explain {
        for report in parser.explain(&text) {
            eprintln!("{}", format_report(&report));
        }
    }

    let result = parser.parse(&text);

    if result.shared_password() == Some("") {
        eprintln!(
            "{} {} accounts found but no PIN/password line",
            style("⚠").yellow(),
            result.detected_count()
        );
    }

    let format = args.format.map(OutputFormat::from).unwrap_or(config.output.format);
    let output = format_result(&result, format, args.pretty || config.output.pretty)?;

    if let Some(output_path) = &args.output {
        tokio::fs::write(output_path, &output).await?;
        println!(
            "{} {} accounts written to {}",
            style("✓").green(),
            result.detected_count(),
            output_path.display()
        );
    } else {
        println!("{}", output.trim_end());
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

async fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            info!("Reading batch from {}", path.display());
            Ok(tokio::fs::read_to_string(path).await?)
        }
        _ => {
            info!("Reading batch from stdin");
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            Ok(text)
        }
    }
}

fn format_report(report: &LineReport) -> String {
    let detail = match &report.class {
        LineClass::Phone(phone) => style(format!("phone {}", phone)).green().to_string(),
        LineClass::Password(_) => style("password").cyan().to_string(),
        LineClass::Expiry { date, applied: true } => style(format!("expiry {}", date)).cyan().to_string(),
        LineClass::Expiry { date, applied: false } => {
            style(format!("expiry {} (ignored, already set)", date)).yellow().to_string()
        }
        LineClass::FallbackDate(date) => style(format!("expiry {} (bare date)", date)).cyan().to_string(),
        LineClass::Ignored => style("-").dim().to_string(),
    };

    format!("{:>4} | {:<40} | {}", report.line, report.text, detail)
}

/// Render a parse result in the requested format.
pub fn format_result(result: &ParseResult, format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &ParseResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["phone", "international", "password", "expiry"])?;

    let expiry = result.global_expiry.map(|d| d.to_string()).unwrap_or_default();
    for account in &result.accounts {
        wtr.write_record([
            account.phone.as_str(),
            account.international_phone().as_str(),
            account.password.as_str(),
            expiry.as_str(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ParseResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Accounts: {}\n", result.detected_count()));
    for (i, account) in result.accounts.iter().enumerate() {
        output.push_str(&format!("  {:>3}. {}\n", i + 1, account.phone));
    }
    output.push('\n');

    match result.shared_password() {
        Some("") | None => output.push_str("Password: (none)\n"),
        Some(password) => output.push_str(&format!("Password: {}\n", password)),
    }

    match result.global_expiry {
        Some(date) => output.push_str(&format!("Expiry:   {}\n", date)),
        None => output.push_str("Expiry:   (none)\n"),
    }

    output
}
