//! Suite entry point
//!
//! This binary runs the browser suite against a live deployment.
//! Run with: cargo test --package beingfit-suite --test site

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use beingfit_harness::{DriverConfig, HarnessResult, SessionConfig, Site, DEFAULT_BASE_URL};
use beingfit_suite::cases::{self, Category};
use beingfit_suite::runner::{SuiteConfig, SuiteRunner};

#[derive(Parser, Debug)]
#[command(name = "beingfit-suite")]
#[command(about = "End-to-end browser suite for the BeingFIT site")]
struct Args {
    /// Base URL of the deployment under test
    #[arg(long, env = "BEINGFIT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Run only the case with this name
    #[arg(short, long)]
    name: Option<String>,

    /// Run only the cases in this category
    #[arg(short, long)]
    category: Option<Category>,

    /// Run the browser headless
    #[arg(long)]
    headless: bool,

    /// Use an already-running WebDriver server instead of spawning chromedriver
    #[arg(long)]
    webdriver_url: Option<String>,

    /// Explicit path to the chromedriver binary
    #[arg(long)]
    driver_binary: Option<PathBuf>,

    /// Output directory for the JSON report
    #[arg(short, long, default_value = "test-results")]
    output: PathBuf,

    /// List the registered cases and exit
    #[arg(long)]
    list: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    let args = Args::parse();

    if args.list {
        for case in cases::inventory() {
            println!("{:<32} [{}] {}", case.name, case.category, case.description);
        }
        return;
    }

    // Run async main
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let result = rt.block_on(async_main(args));

    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

async fn async_main(args: Args) -> HarnessResult<i32> {
    let config = SuiteConfig {
        site: Site::new(args.base_url),
        driver: DriverConfig {
            binary: args.driver_binary,
            ..Default::default()
        },
        session: SessionConfig {
            headless: args.headless,
            ..Default::default()
        },
        webdriver_url: args.webdriver_url,
        output_dir: args.output,
    };

    let mut runner = SuiteRunner::new(config);

    let report = if let Some(name) = args.name {
        runner.run_named(&name).await?
    } else if let Some(category) = args.category {
        runner.run_category(category).await?
    } else {
        runner.run_all().await?
    };

    runner.write_report(&report)?;

    Ok(report.exit_code())
}
