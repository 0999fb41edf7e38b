use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::display::{display_csv, display_details, display_summary};
use crate::render::{render_page, render_section};
use clap::{Parser, Subcommand, ValueEnum};
use eyre::{ensure, Error, WrapErr};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod display;
mod model;
mod render;

#[derive(Parser)]
#[command(name = "projboard")]
#[command(author, version, about = "Render a static dashboard of project cards", long_about = None)]
struct Cli {
    /// Use FILE instead of projboard.toml
    #[arg(short, long, global = true, env = "PROJBOARD_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Set verbosity level (repeat for more)
    #[arg(short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the dashboard as HTML
    Render {
        /// Write to FILE instead of standard output
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Only emit the dashboard section, without the surrounding document
        #[arg(long)]
        fragment: bool,
    },
    /// List the configured projects
    List {
        #[arg(long, default_value = "text")]
        format: ListFormat,
    },
    /// Validate the configuration
    Check,
    /// Write a starter configuration
    Init {
        /// Project titles to list (defaults to djangoproject)
        names: Vec<String>,
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum ListFormat {
    #[default]
    Text,
    Csv,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("projboard={level}"))),
        )
        .with_writer(io::stderr)
        .init();
}

/// Open FILE for writing, or standard output when no file is given.
fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>, Error> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).wrap_err_with(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    })
}

fn render(config: &Config, output: Option<&Path>, fragment: bool) -> Result<(), Error> {
    let catalog = config.catalog()?;
    let options = config.page_options();
    let markup = if fragment {
        render_section(&catalog, &options)
    } else {
        render_page(&catalog, &options)
    };
    let mut out = open_output(output)?;
    writeln!(out, "{}", markup.into_string()).wrap_err("cannot write dashboard")?;
    out.flush()?;
    info!(
        projects = catalog.len(),
        output = %output.map_or_else(|| "-".into(), |p| p.display().to_string()),
        "dashboard rendered"
    );
    Ok(())
}

fn init(names: &[String], output: &Path, force: bool) -> Result<(), Error> {
    ensure!(
        force || !output.exists(),
        "{} already exists, use --force to overwrite it",
        output.display()
    );
    let config = Config::starter(names);
    config.catalog()?;
    fs::write(output, config.to_toml()?)
        .wrap_err_with(|| format!("cannot write {}", output.display()))?;
    println!(
        "Wrote {} with {} project(s)",
        output.display(),
        config.projects.len()
    );
    Ok(())
}

fn main() -> Result<(), Error> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let load = || Config::locate(cli.config.as_deref(), Path::new("."));
    match cli.command {
        Command::Render { output, fragment } => render(&load()?, output.as_deref(), fragment)?,
        Command::List { format } => {
            let catalog = load()?.catalog()?;
            let mut out = io::stdout().lock();
            match format {
                ListFormat::Text => display_details(&catalog, &mut out)?,
                ListFormat::Csv => display_csv(&catalog, &mut out)?,
            }
        }
        Command::Check => {
            let catalog = load()?.catalog()?;
            if catalog.is_empty() {
                warn!("configuration lists no projects, the dashboard grid will be empty");
            }
            display_summary(&catalog, &mut io::stdout().lock())?;
            println!("Configuration is valid");
        }
        Command::Init {
            names,
            output,
            force,
        } => init(&names, &output, force)?,
    }
    Ok(())
}
