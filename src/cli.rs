// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// There is a single action (crawl and write the graph), so the CLI is a
// flat set of flags rather than subcommands. clap handles --help (exit
// code 0) and rejects unknown flags or bad values with a non-zero exit on
// its own.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Attributes: Configure how each field maps to a flag
// =============================================================================

use clap::Parser;

use crate::site;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "wiki-mapper",
    version = "0.1.0",
    about = "A CLI tool that crawls wiki articles breadth-first and maps the link graph",
    long_about = "wiki-mapper starts from a wiki article (a random one by default), follows \
                  article links breadth-first up to a step budget, and writes every discovered \
                  link as an edge of a DOT graph file."
)]
pub struct Cli {
    /// Start article name (default: a random article)
    ///
    /// Plain article names work best: `-u Chat`. Percent-encoded names
    /// are decoded before use.
    #[arg(
        short = 'u',
        long = "url",
        value_name = "ARTICLE",
        default_value = site::RANDOM_ARTICLE
    )]
    pub url: String,

    /// Number of pages to visit before stopping
    #[arg(short = 's', long = "steps", value_name = "N", default_value_t = 100)]
    pub steps: usize,

    /// Path of the DOT graph file to write (created or truncated)
    #[arg(short = 'g', long = "graph", value_name = "FILE", default_value = "out.dot")]
    pub graph: String,

    /// Print the final crawl report as JSON instead of a summary
    ///
    /// This is an optional flag: --json
    #[arg(long)]
    pub json: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 2. Where does the help text come from?
//    - The /// doc comments on each field become that flag's help text
//    - The first line shows in -h, the rest in --help
//
// 3. What is default_value vs default_value_t?
//    - default_value takes a string that clap parses like user input
//    - default_value_t takes a typed Rust value directly (here, 100)
//
// 4. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wiki-mapper"]).unwrap();
        assert_eq!(cli.url, site::RANDOM_ARTICLE);
        assert_eq!(cli.steps, 100);
        assert_eq!(cli.graph, "out.dot");
        assert!(!cli.json);
    }

    #[test]
    fn test_explicit_arguments() {
        let cli = Cli::try_parse_from([
            "wiki-mapper", "-u", "Chat", "-s", "5", "-g", "graphe.dot", "--json",
        ])
        .unwrap();
        assert_eq!(cli.url, "Chat");
        assert_eq!(cli.steps, 5);
        assert_eq!(cli.graph, "graphe.dot");
        assert!(cli.json);
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from(["wiki-mapper", "--url", "Chat", "--steps", "3"]).unwrap();
        assert_eq!(cli.url, "Chat");
        assert_eq!(cli.steps, 3);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["wiki-mapper", "--inconnu"]).is_err());
    }

    #[test]
    fn test_non_numeric_steps_is_rejected() {
        assert!(Cli::try_parse_from(["wiki-mapper", "-s", "beaucoup"]).is_err());
    }
}
