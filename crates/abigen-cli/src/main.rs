//! abigen CLI
//!
//! Generate statically importable TypeScript ABI constants from JSON artifacts.

use abigen_cli::AbiProcessor;
use abigen_compiler::ident::is_identifier;
use abigen_compiler::{AggregateStyle, CodegenConfig, DEFAULT_EXCLUDE};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use glob::Pattern;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "abigen", version, about = "ABI to TypeScript code generator")]
struct Args {
    /// Source directory containing JSON ABI files
    #[arg(short, long)]
    source: PathBuf,

    /// Output directory for TypeScript files
    #[arg(short, long, default_value = "./abis")]
    out_dir: PathBuf,

    /// Extra file-name pattern of artifacts to skip (repeatable); `*.dbg.json` is always skipped
    #[arg(long, value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Spaces per indentation level; 0 prints each constant on one line
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Export the collection of all constants under this name instead of as default
    #[arg(long, value_name = "NAME")]
    named_export: Option<String>,

    /// Omit the generated-file header comment
    #[arg(long)]
    no_header: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn codegen_config(&self) -> Result<CodegenConfig> {
        let aggregate = match &self.named_export {
            Some(name) if !is_identifier(name) => {
                anyhow::bail!("--named-export '{}' is not a valid identifier", name)
            }
            Some(name) => AggregateStyle::Named(name.clone()),
            None => AggregateStyle::Default,
        };

        Ok(CodegenConfig {
            indent: self.indent,
            aggregate,
            header: !self.no_header,
            ..CodegenConfig::default()
        })
    }

    /// The default exclusion followed by any `--exclude` patterns
    fn exclude_patterns(&self) -> Result<Vec<Pattern>> {
        std::iter::once(DEFAULT_EXCLUDE)
            .chain(self.exclude.iter().map(String::as_str))
            .map(|p| Pattern::new(p).context(format!("Invalid --exclude pattern: {}", p)))
            .collect()
    }
}

fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter(verbose)));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.codegen_config()?;
    let exclude = args.exclude_patterns()?;

    println!("🚀 abigen");
    println!("   Source: {}", args.source.display());
    println!("   Output: {}", args.out_dir.display());
    println!();

    let mut processor = AbiProcessor::new(&args.out_dir, config).with_exclude(exclude);
    processor.collect_abi_files(&args.source)?;
    processor.generate_typescript_files()?;

    let report = processor.report();
    if report.has_failures() {
        println!("⚠️  Finished with failures");
    } else {
        println!("✅ Done");
    }
    println!("{}", report);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["abigen", "--source", "out"]).unwrap();

        assert_eq!(args.source, PathBuf::from("out"));
        assert_eq!(args.out_dir, PathBuf::from("./abis"));
        assert!(args.exclude.is_empty());
        assert_eq!(args.indent, 2);
        assert_eq!(args.verbose, 0);

        let patterns = args.exclude_patterns().unwrap();
        assert_eq!(patterns.len(), 1);
        assert!(patterns[0].matches("Token.dbg.json"));
    }

    #[test]
    fn test_args_source_required() {
        assert!(Args::try_parse_from(["abigen"]).is_err());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::try_parse_from(["abigen", "-s", "artifacts", "-o", "gen", "-vv"]).unwrap();

        assert_eq!(args.out_dir, PathBuf::from("gen"));
        assert_eq!(args.verbose, 2);
        assert_eq!(log_filter(args.verbose), "debug");
    }

    #[test]
    fn test_named_export_config() {
        let args =
            Args::try_parse_from(["abigen", "-s", "out", "--named-export", "abi", "--no-header"])
                .unwrap();

        let config = args.codegen_config().unwrap();
        assert_eq!(config.aggregate, AggregateStyle::Named("abi".to_string()));
        assert!(!config.header);
    }

    #[test]
    fn test_named_export_must_be_identifier() {
        let args =
            Args::try_parse_from(["abigen", "-s", "out", "--named-export", "my-abi"]).unwrap();
        assert!(args.codegen_config().is_err());
    }

    #[test]
    fn test_exclude_patterns_extend_default() {
        let args =
            Args::try_parse_from(["abigen", "-s", "out", "--exclude", "build-info*"]).unwrap();

        let patterns = args.exclude_patterns().unwrap();
        assert_eq!(patterns.len(), 2);
        assert!(patterns[0].matches("Token.dbg.json"));
        assert!(patterns[1].matches("build-info-1.json"));
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        let args = Args::try_parse_from(["abigen", "-s", "out", "--exclude", "[unclosed"]).unwrap();
        assert!(args.exclude_patterns().is_err());
    }
}
