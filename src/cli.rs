// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::LookupConfig;
use crate::history::SearchHistory;
use crate::lookup::{lookup_companies, LookupClient, ProfileSearchClient, MAX_COMPANIES};
use crate::report::EmployeeReport;
use crate::types::ProfileSearchFilters;
use crate::utils::{format_company_input, normalize_regions, InputMode};

#[derive(Parser)]
#[command(name = "leadscout")]
#[command(about = "Find company leadership and LinkedIn profiles")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, default_value = "config.yaml")]
    pub config: PathBuf,

    #[arg(long, default_value = "data/search_history.json")]
    pub history_path: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// List directors, VPs and executives of up to 5 companies
    Employees {
        /// Company names, or LinkedIn company URLs with --url
        #[arg(required = true)]
        companies: Vec<String>,
        /// Region code, repeat for several
        #[arg(long = "region", default_value = "us")]
        regions: Vec<String>,
        /// Inputs are LinkedIn company URLs
        #[arg(long)]
        url: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Free-text LinkedIn profile search
    Profiles {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        job_title: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long, default_value = "")]
        keywords: String,
        /// At most 50
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Do not record this search in the history
        #[arg(long)]
        no_history: bool,
    },
    /// Show or clear recent profile searches
    History {
        #[arg(long)]
        clear: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Employees {
            companies,
            regions,
            url,
            format,
        } => {
            let config = LookupConfig::load(&cli.config)?;
            let mode = if url { InputMode::Url } else { InputMode::Name };
            let company_urls = prepare_companies(&companies, mode)?;
            let regions = normalize_regions(&regions);
            if regions.is_empty() {
                anyhow::bail!("Please select at least one region");
            }

            let client = LookupClient::new(&config)?;
            let results = lookup_companies(&client, &company_urls, &regions).await;
            let failed = results.iter().filter(|r| !r.is_success()).count();
            if failed > 0 {
                warn!("{} of {} company lookups failed", failed, results.len());
            }

            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&results)
                        .context("Failed to serialize results")?;
                    println!("{}", json);
                }
                OutputFormat::Csv => {
                    EmployeeReport::from_results(&results).write_csv(std::io::stdout())?;
                }
                OutputFormat::Text => {
                    print!("{}", EmployeeReport::from_results(&results).render_text());
                }
            }
        }

        Command::Profiles {
            name,
            job_title,
            location,
            company,
            keywords,
            limit,
            no_history,
        } => {
            let config = LookupConfig::load(&cli.config)?;
            let filters = ProfileSearchFilters::default()
                .with_name(name)
                .with_job_title(job_title)
                .with_location(location)
                .with_company_name(company)
                .with_keywords(keywords)
                .with_limit(limit);

            let client = ProfileSearchClient::new(&config)?;
            let profiles = client.search_profiles(&filters).await?;

            if !no_history {
                let history = SearchHistory::new(&cli.history_path);
                let entry = history.record(&filters.clamped(), &profiles).await?;
                info!("Saved search {} to {}", entry.id, history.path().display());
            }

            let json =
                serde_json::to_string_pretty(&profiles).context("Failed to serialize profiles")?;
            println!("{}", json);
        }

        Command::History { clear } => {
            let history = SearchHistory::new(&cli.history_path);
            if clear {
                history.clear().await?;
                println!("Search history cleared");
                return Ok(());
            }

            let entries = history.load().await?;
            if entries.is_empty() {
                println!("No recent searches");
            }
            for entry in entries {
                println!(
                    "{}  name='{}' title='{}' location='{}' -> {} results",
                    entry.searched_at.format("%Y-%m-%d %H:%M:%S"),
                    entry.filters.name,
                    entry.filters.job_title,
                    entry.filters.location,
                    entry.results.len()
                );
            }
        }
    }

    Ok(())
}

/// Format company inputs and enforce the batch limit
fn prepare_companies(inputs: &[String], mode: InputMode) -> Result<Vec<String>> {
    let companies: Vec<String> = inputs
        .iter()
        .filter_map(|input| format_company_input(input, mode))
        .collect();

    if companies.is_empty() {
        anyhow::bail!("Please enter at least one company");
    }
    if companies.len() > MAX_COMPANIES {
        anyhow::bail!(
            "At most {} companies can be searched at once, got {}",
            MAX_COMPANIES,
            companies.len()
        );
    }
    Ok(companies)
}
