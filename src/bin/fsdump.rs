//! Filesystem image export CLI (fsdump) - Main binary entry point

use fsdump::cli::args::{CliArgs, parse_args};
use fsdump::io::image::JsonImageLoader;
use fsdump::services::sink::text::TextSink;
use fsdump::{Error, ExportOptions, OutputShape, ProvenanceTags};
use std::fs::File;
use std::io::BufReader;
use std::process;
use std::str::FromStr;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug fsdump image.jsonl
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            print_version();
            return;
        }
        _ => {}
    }

    // Parse arguments
    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    process::exit(handle_export(&cli_args));
}

fn handle_export(args: &CliArgs) -> i32 {
    // Parse output shape
    let shape = match OutputShape::from_str(&args.format) {
        Ok(s) => s,
        Err(_) => {
            eprintln!(
                "Invalid format: {}. Use 'delimited' or 'json'",
                args.format
            );
            return 2;
        }
    };

    let mut tags = ProvenanceTags::default();
    if let Some(area) = &args.area {
        tags.area.clone_from(area);
    }
    if let Some(cluster) = &args.cluster {
        tags.cluster.clone_from(cluster);
    }
    if let Some(namespace) = &args.namespace {
        tags.namespace.clone_from(namespace);
    }

    let opts = ExportOptions {
        shape,
        delimiter: args.delimiter.clone(),
        batch_size: args.batch_size,
        tags,
    };

    let image = match File::open(&args.image) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: cannot open image '{}': {e}", args.image);
            return 2;
        }
    };
    let mut loader = JsonImageLoader::new(BufReader::new(image));

    if !args.quiet {
        eprintln!("Exporting: {}", args.image);
    }

    let outcome = match &args.output {
        Some(path) => {
            let out = match File::create(path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Error: cannot create output '{path}': {e}");
                    return 4;
                }
            };
            let mut sink = TextSink::new(out);
            fsdump::export(&mut loader, &mut sink, &opts)
        }
        None => {
            let mut sink = TextSink::new(std::io::stdout());
            fsdump::export(&mut loader, &mut sink, &opts)
        }
    };

    match outcome {
        Ok(count) => {
            if !args.quiet {
                eprintln!("Exported {count} records");
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            match e {
                Error::InvalidConfiguration(_) => 2,
                Error::TruncatedInput => 3,
                _ => 4,
            }
        }
    }
}

fn print_help() {
    println!("Filesystem Image Export CLI (fsdump) - Export image metadata as flat records");
    println!();
    println!("USAGE:");
    println!("    fsdump <IMAGE> [OPTIONS]");
    println!();
    println!("ARGUMENTS:");
    println!("    <IMAGE>                   Decoded image file (JSON Lines, pre-ordered)");
    println!();
    println!("GLOBAL OPTIONS:");
    println!("    -h, --help                Show this help message");
    println!("    -v, --version             Show version information");
    println!();
    println!("EXPORT OPTIONS:");
    println!("    -o, --output <FILE>       Write records to FILE (default: stdout)");
    println!("    --format <SHAPE>          Output shape: delimited (default) or json");
    println!("    --delimiter <STR>         Column delimiter for delimited shape (default: tab)");
    println!("    --batch-size <N>          Records buffered per output batch (default: 1024)");
    println!("    --area <NAME>             Provenance tag: area");
    println!("    --cluster <NAME>          Provenance tag: cluster name");
    println!("    --namespace <NAME>        Provenance tag: namespace");
    println!("    --quiet                   Suppress non-error output");
    println!();
    println!("EXAMPLES:");
    println!("    fsdump image.jsonl --output image.tsv");
    println!("    fsdump image.jsonl --format json --cluster prod-hdfs --namespace warehouse");
    println!("    fsdump image.jsonl --delimiter ',' -o image.csv");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("fsdump {VERSION}");
    println!("Commit: {GIT_HASH} ({GIT_DATE})");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
