use std::fs;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use curl_schema_parser::{
    OutputFormat, extract_commands, format_outcome, format_outcomes, parse_command,
};

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Text,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(fmt: CliOutputFormat) -> Self {
        match fmt {
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Yaml => Self::Yaml,
            CliOutputFormat::Text => Self::Text,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "curl-parse")]
#[command(about = "Parse curl command lines into structured requests")]
struct Cli {
    /// Curl command string to parse.
    command: Option<String>,
    /// Read commands from a file (may hold several concatenated commands).
    #[arg(short, long, conflicts_with = "command")]
    file: Option<PathBuf>,
    /// Write the rendering to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Output format (default: text).
    #[arg(long, default_value = "text")]
    format: CliOutputFormat,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let format: OutputFormat = cli.format.into();

    let rendered = if let Some(ref command) = cli.command {
        render_one(command, format)?
    } else if let Some(ref path) = cli.file {
        let content = fs::read_to_string(path)
            .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?;
        render_many(&content, format)?
    } else if !std::io::stdin().is_terminal() {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|err| format!("Failed to read stdin: {err}"))?;
        render_one(content.trim(), format)?
    } else {
        return Err(
            "no command given: pass a command string, use --file, or pipe stdin".to_string(),
        );
    };

    match cli.output {
        Some(path) => fs::write(&path, rendered)
            .map_err(|err| format!("Failed to write '{}': {err}", path.display())),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}

fn render_one(command: &str, format: OutputFormat) -> Result<String, String> {
    let outcome = parse_command(command).map_err(|err| err.to_string())?;
    format_outcome(&outcome, format)
}

fn render_many(content: &str, format: OutputFormat) -> Result<String, String> {
    let commands = extract_commands(content);
    if commands.is_empty() {
        return Err("no commands found in input".to_string());
    }

    let outcomes = commands
        .iter()
        .map(|command| parse_command(command).map_err(|err| err.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    format_outcomes(&outcomes, format)
}
