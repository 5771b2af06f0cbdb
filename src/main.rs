use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use sidediff::EmitMode;
use sidediff::areas::viewer::Viewer;
use sidediff::commands::porcelain::render::RenderOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sidediff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Syntax-highlighted side-by-side diffs as HTML",
    long_about = "This tool diffs two revisions of a file line by line, highlights both \
    revisions with tree-sitter and renders them as aligned HTML panes, padding the \
    shorter pane so unchanged lines stay side by side.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, action = ArgAction::Count, global = true, help = "Log more (-v info, -vv debug)")]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "render",
        about = "Render the diff of two files as HTML",
        long_about = "This command diffs OLD against NEW and writes the highlighted view. \
        A path that does not exist is treated as an empty file (/dev/null)."
    )]
    Render {
        #[arg(index = 1, help = "The old revision")]
        old: PathBuf,
        #[arg(index = 2, help = "The new revision")]
        new: PathBuf,
        #[arg(short, long, value_enum, default_value_t = EmitMode::Split, help = "Panes layout")]
        mode: EmitMode,
        #[arg(short, long, help = "Language id overriding the one guessed from the file name")]
        language: Option<String>,
        #[arg(long, help = "Emit a complete HTML document with embedded styles")]
        standalone: bool,
        #[arg(long, help = "Print a +added -deleted line summary to stderr")]
        stat: bool,
        #[arg(short, long, help = "Write to this file instead of stdout")]
        output: Option<PathBuf>,
    },
    #[command(
        name = "tokens",
        about = "Print the classified segments of a file",
        long_about = "This command highlights one file and prints one segment per line as \
        start..end, category, kind and grammar name separated by tabs."
    )]
    Tokens {
        #[arg(index = 1)]
        file: PathBuf,
        #[arg(short, long, help = "Language id overriding the one guessed from the file name")]
        language: Option<String>,
    },
    #[command(
        name = "hunks",
        about = "Print the line diff of two files as hunks",
        long_about = "This command prints one hunk per line as kind, byte length and line \
        break count separated by tabs."
    )]
    Hunks {
        #[arg(index = 1)]
        old: PathBuf,
        #[arg(index = 2)]
        new: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let pwd = std::env::current_dir()?;

    match cli.command {
        Commands::Render {
            old,
            new,
            mode,
            language,
            standalone,
            stat,
            output,
        } => {
            let writer: Box<dyn std::io::Write> = match &output {
                Some(path) => Box::new(
                    std::fs::File::create(path)
                        .with_context(|| format!("Failed to create output file: {:?}", path))?,
                ),
                None => Box::new(std::io::stdout()),
            };
            let viewer = Viewer::new(&pwd.to_string_lossy(), writer)?;

            viewer.render(&old, &new, &RenderOptions::new(mode, language, standalone, stat))?
        }
        Commands::Tokens { file, language } => {
            let viewer = Viewer::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            viewer.tokens(&file, language.as_deref())?
        }
        Commands::Hunks { old, new } => {
            let viewer = Viewer::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            viewer.hunks(&old, &new)?
        }
    }

    Ok(())
}
