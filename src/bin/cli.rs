//! CoverMatch CLI
//!
//! Command-line interface for CoverMatch:
//! - Request recommendations from a running server
//! - Rank a local catalog offline
//! - Check server status
//! - Generate a config file

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use covermatch::catalog::CatalogLoader;
use covermatch::config::Config;
use covermatch::scoring::{recommend, HealthProfile, Recommendations, SelectionLimits};
use serde_json::{json, Value};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "covermatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Health insurance policy recommendations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, default_value = "http://localhost:5000", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Config file for offline scoring (default: the server's lookup order)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask the server for recommendations
    Predict {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Rank a local catalog without a server
    Score {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Policy catalog CSV (default: `[catalog] policies_csv`)
        #[arg(long)]
        policies: Option<PathBuf>,
        /// Number of primary recommendations (default: `[recommend] primary_count`)
        #[arg(long)]
        primary: Option<usize>,
        /// Number of additional recommendations (default: `[recommend] secondary_count`)
        #[arg(long)]
        secondary: Option<usize>,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Health attributes, passed through as the strings the web form would send
#[derive(Args)]
pub struct ProfileArgs {
    #[arg(long, default_value = "")]
    age: String,
    /// 1 if diabetic
    #[arg(long, default_value = "0")]
    diabetes: String,
    #[arg(long, default_value = "0")]
    blood_pressure_problems: String,
    #[arg(long, default_value = "0")]
    any_transplants: String,
    #[arg(long, default_value = "0")]
    any_chronic_diseases: String,
    /// Height in centimetres
    #[arg(long, default_value = "")]
    height: String,
    /// Weight in kilograms
    #[arg(long, default_value = "")]
    weight: String,
    #[arg(long, default_value = "0")]
    known_allergies: String,
    #[arg(long, default_value = "0")]
    history_of_cancer_in_family: String,
    #[arg(long, default_value = "0")]
    number_of_major_surgeries: String,
    /// Maximum premium (empty for no limit)
    #[arg(long, default_value = "")]
    budget: String,
}

impl ProfileArgs {
    fn payload(&self) -> Value {
        json!({
            "Age": self.age,
            "Diabetes": self.diabetes,
            "BloodPressureProblems": self.blood_pressure_problems,
            "AnyTransplants": self.any_transplants,
            "AnyChronicDiseases": self.any_chronic_diseases,
            "Height": self.height,
            "Weight": self.weight,
            "KnownAllergies": self.known_allergies,
            "HistoryOfCancerInFamily": self.history_of_cancer_in_family,
            "NumberOfMajorSurgeries": self.number_of_major_surgeries,
            "budget": self.budget,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Predict { profile } => {
            let response = client
                .post(format!("{}/predict", cli.api_url))
                .json(&profile.payload())
                .send()
                .await
                .with_context(|| format!("Cannot connect to CoverMatch at {}", cli.api_url))?;

            let status = response.status();
            let data: Value = response.json().await.context("Invalid response body")?;

            if !status.is_success() {
                bail!(
                    "Prediction failed ({}): {}",
                    status,
                    data["error"].as_str().unwrap_or("Unknown")
                );
            }

            print_recommendations(&data, &cli.format)?;
        }

        Commands::Score {
            profile,
            policies,
            primary,
            secondary,
        } => {
            let config = match &cli.config {
                Some(path) => Config::load_with_env(path)
                    .with_context(|| format!("Failed to load config {:?}", path))?,
                None => Config::load_default(),
            };
            let result = score_offline(&config, &profile, policies, primary, secondary)?;

            print_recommendations(&serde_json::to_value(&result)?, &cli.format)?;
        }

        Commands::Status => {
            let response = client
                .get(format!("{}/health", cli.api_url))
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: Value = resp.json().await?;

                    println!("CoverMatch v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!("Server status: {}", health["status"].as_str().unwrap_or("unknown"));
                    println!("Catalog: {}", health["catalog"].as_str().unwrap_or("unknown"));
                    println!("Policies loaded: {}", health["policies"].as_u64().unwrap_or(0));

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => bail!("Server returned error: {}", resp.status()),
                Err(e) => {
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin covermatch");
                    return Err(e).with_context(|| {
                        format!("Cannot connect to CoverMatch at {}", cli.api_url)
                    });
                }
            }
        }

        Commands::Config { output } => {
            let config = covermatch::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Rank a local catalog the way the server would with the same config
fn score_offline(
    config: &Config,
    profile: &ProfileArgs,
    policies: Option<PathBuf>,
    primary: Option<usize>,
    secondary: Option<usize>,
) -> anyhow::Result<Recommendations> {
    let policies = policies.unwrap_or_else(|| PathBuf::from(&config.catalog.policies_csv));
    let catalog = CatalogLoader::new(config.catalog.default_url.as_str())
        .load(&policies)
        .with_context(|| format!("Failed to load {:?}", policies))?;

    let defaults = config.recommend.limits();
    let limits = SelectionLimits {
        primary: primary.unwrap_or(defaults.primary),
        secondary: secondary.unwrap_or(defaults.secondary),
    };

    Ok(recommend(
        &HealthProfile::from_json(&profile.payload()),
        catalog.policies(),
        limits,
    ))
}

fn print_recommendations(data: &Value, format: &str) -> anyhow::Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(data)?);
        return Ok(());
    }

    println!("Risk score: {}", data["risk_score"]);
    println!();
    print_table("Recommended", &data["recommendations"]);

    if data["more_recommendations"]
        .as_array()
        .is_some_and(|more| !more.is_empty())
    {
        println!();
        print_table("More policies", &data["more_recommendations"]);
    }

    Ok(())
}

fn print_table(title: &str, items: &Value) {
    let rows = match items.as_array() {
        Some(rows) if !rows.is_empty() => rows,
        _ => {
            println!("{}: none", title);
            return;
        }
    };

    println!("{}:", title);
    println!("{:<16} {:<28} {:>10}  {}", "Brand", "Policy", "Price", "Suitability");
    println!("{}", "-".repeat(80));

    for row in rows {
        println!(
            "{:<16} {:<28} {:>10}  {}",
            row["brand"].as_str().unwrap_or("-"),
            row["policy"].as_str().unwrap_or("-"),
            row["price"].as_i64().unwrap_or(0),
            row["suitability"].as_str().unwrap_or("")
        );
    }
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
