use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use fieldquill::config::Config;
use fieldquill::document::serialize_compact;
use fieldquill::file::loader::{load_json_text, load_json_text_from_stdin};
use fieldquill::nodes::{
    error_payload, try_extract_field, try_remove_fields_text, try_replace_field, FieldExtraction,
};

/// FieldQuill - dotted-path editing for JSON documents
#[derive(Parser)]
#[command(name = "fieldquill")]
#[command(version)]
#[command(about = "Replace, remove and extract JSON fields by dotted path", long_about = None)]
struct Cli {
    /// Spaces per indentation level in the output (overrides config)
    #[arg(short, long, global = true)]
    indent: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assign a value at a dotted path, creating missing structure
    Set {
        /// Dotted path, e.g. `items.1.name`; empty to only reformat
        path: String,
        /// Literal value; `true`, `false`, `null` and numbers are typed
        value: String,
        /// JSON file to read (stdin when omitted; `.gz` is decompressed)
        #[arg(short, long)]
        file: Option<String>,
    },
    /// Remove one or more `|`-separated dotted paths
    Remove {
        /// Paths to remove, e.g. `a.b | a.c`
        spec: String,
        /// JSON file to read (stdin when omitted; `.gz` is decompressed)
        #[arg(short, long)]
        file: Option<String>,
    },
    /// Print the value at a dotted path
    Get {
        /// Dotted field name, e.g. `info.city`
        field: String,
        /// JSON file to read (stdin when omitted; `.gz` is decompressed)
        #[arg(short, long)]
        file: Option<String>,
        /// Which view of the value to print
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Int,
    Float,
    Json,
    List,
}

fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => load_json_text(path),
        None => load_json_text_from_stdin(),
    }
}

/// Runs the command and returns its output, plus whether it failed.
///
/// Field-level failures are printed as `[ERROR] ...` on stdout like the
/// string entry points do; only input loading errors abort with `Err`.
fn run(cli: Cli) -> Result<(String, bool)> {
    let mut config = Config::load();
    if let Some(indent) = cli.indent {
        config.indent_size = indent;
        config.extract_indent_size = indent;
    }

    let outcome = match cli.command {
        Command::Set { path, value, file } => {
            let text = read_input(file.as_deref())?;
            try_replace_field(&config, &text, &path, &value).map_err(|err| error_payload(&err))
        }
        Command::Remove { spec, file } => {
            let text = read_input(file.as_deref())?;
            try_remove_fields_text(&config, &text, &spec).map_err(|err| error_payload(&err))
        }
        Command::Get {
            field,
            file,
            format,
        } => {
            let text = read_input(file.as_deref())?;
            try_extract_field(&config, &text, &field)
                .map(|extraction| render_extraction(extraction, format))
                .map_err(|err| error_payload(&err))
        }
    };

    Ok(match outcome {
        Ok(output) => (output, false),
        Err(report) => (report, true),
    })
}

fn render_extraction(extraction: FieldExtraction, format: Format) -> String {
    match format {
        Format::Text => extraction.text,
        Format::Int => extraction.int.to_string(),
        Format::Float => extraction.float.to_string(),
        Format::Json => extraction.json,
        Format::List => extraction
            .list
            .iter()
            .map(serialize_compact)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fieldquill=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (output, failed) = run(cli)?;
    println!("{}", output);

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
