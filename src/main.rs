// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Create the graph output file and the HTTP fetcher
// 3. Run the breadth-first crawl
// 4. Print the final report (summary or JSON)
// 5. Exit with proper code (0 = crawl completed, 1 = fatal error,
//    2 = usage error, emitted by clap itself)
//
// Rust concepts used:
// - async/await: The crawl awaits each page fetch in turn
// - Result<T, E>: For error handling (T = success type, E = error type)
// - The ? operator: Propagates errors up to main's match
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod crawl;         // src/crawl/ - canonicalization, dedup, frontier, crawl loop
mod graph;         // src/graph/ - DOT graph output
mod page;          // src/page/ - page fetching and HTML extraction
mod site;          // src/site.rs - the wiki being crawled

use std::fs::File;
use std::io::BufWriter;

// Import items we need from our modules
use cli::Cli;
use clap::Parser;  // Parser trait enables the parse() method
use crawl::{CrawlReport, Crawler};
use graph::GraphWriter;
use page::PageFetcher;
use site::SiteConfig;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{Context, Result};

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // A fatal error occurred: print it and exit with code 1
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl completed
//   Err = fatal error (bad start article, unresolvable random page,
//         graph file not writable)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();
    let site = SiteConfig::default();

    println!("🔍 Starting from: {}", cli.url);
    println!("📊 Step budget: {}", cli.steps);
    println!("📄 Graph file: {}", cli.graph);
    println!();

    // Create (or truncate) the graph file up front, so a bad path fails
    // before any network traffic happens.
    let file = File::create(&cli.graph)
        .with_context(|| format!("could not create graph file '{}'", cli.graph))?;
    let graph = GraphWriter::new(BufWriter::new(file));

    let fetcher = PageFetcher::new().context("could not build the HTTP client")?;

    // The crawler owns everything for the duration of the run
    let crawler = Crawler::new(site, fetcher, graph, cli.steps);
    let report = crawler.run(&cli.url).await?;

    // Print results in the requested format
    print_report(&report, cli.json)?;

    Ok(0)
}

// Prints the report either as a human-readable summary or JSON
// Parameters:
//   report: the final crawl diagnostics
//   json: whether to output JSON format
fn print_report(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        // Serialize the report to JSON and print
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        print_summary(report);
    }
    Ok(())
}

// Prints the human-readable end-of-crawl summary
fn print_summary(report: &CrawlReport) {
    println!();
    println!("✅ Done exploring");
    println!("📊 Summary:");
    println!("   🔍 Start page: {}", report.start);
    println!("   📄 Pages visited: {}", report.pages_visited);
    println!("   🌐 Edges recorded: {}", report.edges_recorded);
    println!("   📋 Frontier remaining: {}", report.frontier_remaining);
    println!("   🔁 Hash collisions: {}", report.collisions);
}
