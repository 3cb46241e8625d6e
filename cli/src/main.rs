//! textract-hocr CLI - convert Textract JSON output to hOCR markup

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use textract_hocr::{to_hocr, ConvertOptions, TextractDocument};

#[derive(Parser)]
#[command(name = "textract-hocr")]
#[command(version)]
#[command(about = "Convert AWS Textract JSON output to hOCR markup", long_about = None)]
struct Cli {
    /// Input Textract JSON file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Source image or PDF for page dimension lookup
    #[arg(short, long, value_name = "FILE")]
    source: Option<PathBuf>,

    /// First page to convert (1-indexed, default 1)
    #[arg(long, value_name = "N")]
    first_page: Option<u32>,

    /// Last page to convert (1-indexed inclusive, default last)
    #[arg(long, value_name = "N")]
    last_page: Option<u32>,

    /// Force page width in pixels (requires --height)
    #[arg(long, value_name = "PX", requires = "height")]
    width: Option<u32>,

    /// Force page height in pixels (requires --width)
    #[arg(long, value_name = "PX", requires = "width")]
    height: Option<u32>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("reading {}", cli.input.display());
    let doc = TextractDocument::from_file(&cli.input)?;

    let mut options = ConvertOptions::new();
    if let Some(ref source) = cli.source {
        options = options.with_source(source);
    }
    if let (Some(width), Some(height)) = (cli.width, cli.height) {
        options = options.with_dimensions(width, height);
    }
    if cli.first_page.is_some() || cli.last_page.is_some() {
        // An unspecified bound defaults to the document edge.
        let first = cli.first_page.unwrap_or(1);
        let last = cli.last_page.unwrap_or(doc.total_pages()?);
        options = options.with_pages(first, last);
    }

    let hocr = to_hocr(&doc, &options)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, hocr)?;
            eprintln!("{} wrote {}", "ok:".green().bold(), path.display());
        }
        None => println!("{}", hocr),
    }

    Ok(())
}
