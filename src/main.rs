// src/main.rs
// =============================================================================
// Entry point of linkgate.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Check the site and print the report
// 4. Exit with 0 when every link is valid, 1 otherwise
//
// Exit code 1 also covers the two fatal cases: the output directory is
// missing (the build did not run), or something unexpected went wrong. In
// both cases no report is printed.
// =============================================================================

use anyhow::Result;
use clap::Parser;

use linkgate::cli::Cli;
use linkgate::crawl::SiteError;
use linkgate::{checker, logging, CheckConfig};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let exit_code = match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            if let Some(SiteError::RootNotFound(_)) = e.downcast_ref::<SiteError>() {
                eprintln!("❌ {}", e);
            } else {
                log::error!("{:?}", e);
                eprintln!("Unexpected error: {:#}", e);
            }
            1
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = every link is valid
//   Ok(1) = at least one broken link
//   Err   = fatal, no report was produced
async fn run(cli: &Cli) -> Result<i32> {
    let config = CheckConfig::from(cli);

    if !cli.json {
        println!("🔍 Checking links in built HTML files...\n");
    }

    let report = checker::check_site(&config).await?;

    if cli.json {
        println!("{}", report.render_json()?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(report.exit_code())
}
