use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use divi_blocks_config::Config;
use divi_blocks_engine::{
    Assembler, HtmlTextParser, Node, PageDocument, PageReport, SourceFile, UuidKeys, io,
};
use std::{
    io::Read,
    path::{Path, PathBuf},
    process,
};

/// Reads stdin instead of a file.
const STDIN_MARKER: &str = "-";

#[derive(Parser)]
#[command(name = "divi-blocks", version, about = "Convert Divi shortcode markup into page-builder blocks")]
struct Cli {
    /// Config file (defaults to ~/.config/divi-blocks/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert markup files into JSON blocks
    Convert(ConvertArgs),
    /// Summarize what each input contains without writing output
    Report {
        /// Markup files or directories, `-` for stdin
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Write a config file with default settings
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct ConvertArgs {
    /// Markup files or directories, `-` for stdin
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Page title for log output and NDJSON records (single input only)
    #[arg(long)]
    title: Option<String>,

    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,

    /// Write one page record per input per line
    #[arg(long)]
    ndjson: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Length of generated block keys
    #[arg(long)]
    key_length: Option<usize>,
}

/// One input to convert, read into memory.
struct Page {
    title: String,
    markup: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Init { force } => {
            let path = cli.config.unwrap_or_else(Config::config_path);
            init_config(&path, force)
        }
        Command::Convert(args) => convert(&config_or_exit(cli.config.as_deref()), args),
        Command::Report { inputs } => report(&config_or_exit(cli.config.as_deref()), &inputs),
    }
}

fn config_or_exit(path: Option<&Path>) -> Config {
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} does not exist", path.display());
            }
            Config::load_from_path(path)?
        }
        None => Config::load()?,
    };
    if loaded.is_some() {
        log::debug!("Loaded config");
    }
    Ok(loaded.unwrap_or_default())
}

fn convert(config: &Config, args: ConvertArgs) -> Result<()> {
    let pages = read_pages(&args.inputs, args.title.as_deref(), &mut std::io::stdin())?;
    if args.title.is_some() && pages.len() > 1 {
        bail!("--title can only be used with a single input");
    }

    let keys = UuidKeys::new(key_length(args.key_length, config)?);
    let assembler = Assembler::new(&HtmlTextParser, &keys);
    let pretty = args.pretty || config.pretty;

    let mut documents = Vec::with_capacity(pages.len());
    for page in pages {
        let (nodes, report) = assembler.assemble_page(&page.markup, &page.title);
        if config.report_inert_tags {
            log_skipped_tags(&page.title, &report);
        }
        documents.push(PageDocument::new(page.title, nodes));
    }

    let rendered = if args.ndjson {
        render_ndjson(&documents)?
    } else {
        match documents.as_slice() {
            [single] => render_nodes(&single.page_builder, pretty)?,
            _ => bail!("multiple inputs need --ndjson"),
        }
    };

    match args.output.or_else(|| config.output_path.clone()) {
        Some(path) => {
            io::write_output(&path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("Wrote {} page(s) to {}", documents.len(), path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn key_length(requested: Option<usize>, config: &Config) -> Result<usize> {
    let Some(len) = requested else {
        return Ok(config.key_length);
    };
    if !(UuidKeys::MIN_LEN..=UuidKeys::MAX_LEN).contains(&len) {
        bail!(
            "--key-length must be between {} and {}",
            UuidKeys::MIN_LEN,
            UuidKeys::MAX_LEN
        );
    }
    Ok(len)
}

fn report(config: &Config, inputs: &[PathBuf]) -> Result<()> {
    let keys = UuidKeys::new(config.key_length);
    let assembler = Assembler::new(&HtmlTextParser, &keys);

    for page in read_pages(inputs, None, &mut std::io::stdin())? {
        let (_, report) = assembler.assemble_page(&page.markup, &page.title);
        println!("{}", report_line(&page.title, &report));
    }
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists, pass --force to replace it", path.display());
    }
    Config::default()
        .save_to_path(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("Wrote default config to {}", path.display());
    Ok(())
}

/// Reads every input in argument order; `-` takes its markup from `stdin`.
fn read_pages(
    inputs: &[PathBuf],
    title: Option<&str>,
    stdin: &mut dyn Read,
) -> Result<Vec<Page>> {
    let mut pages = Vec::new();

    for input in inputs {
        if input.as_os_str() == STDIN_MARKER {
            let mut markup = String::new();
            stdin
                .read_to_string(&mut markup)
                .context("failed to read stdin")?;
            pages.push(Page {
                title: title.unwrap_or("stdin").to_string(),
                markup,
            });
            continue;
        }
        for source in io::collect_sources(std::slice::from_ref(input))? {
            pages.push(read_page(&source, title)?);
        }
    }
    Ok(pages)
}

fn read_page(source: &SourceFile, title: Option<&str>) -> Result<Page> {
    let markup = io::read_markup(source.path())
        .with_context(|| format!("failed to read {}", source.path().display()))?;
    Ok(Page {
        title: title.unwrap_or(source.title()).to_string(),
        markup,
    })
}

fn log_skipped_tags(title: &str, report: &PageReport) {
    for (tag, count) in &report.inert_tags {
        log::debug!("Page {title}: ignored {count} [{tag}] tag(s)");
    }
    for (tag, count) in &report.unmatched_tags {
        log::warn!("Page {title}: dropped {count} malformed or unterminated [{tag}] tag(s)");
    }
    let total: usize = report.inert_tags.values().sum();
    if total > 0 {
        log::info!(
            "Page {title}: {total} unrecognized tag(s) across {} kind(s)",
            report.inert_tags.len()
        );
    }
}

fn render_nodes(nodes: &[Node], pretty: bool) -> Result<String> {
    let mut out = if pretty {
        serde_json::to_string_pretty(nodes)?
    } else {
        serde_json::to_string(nodes)?
    };
    out.push('\n');
    Ok(out)
}

fn render_ndjson(documents: &[PageDocument]) -> Result<String> {
    let mut out = String::new();
    for doc in documents {
        out.push_str(&serde_json::to_string(doc)?);
        out.push('\n');
    }
    Ok(out)
}

fn report_line(title: &str, report: &PageReport) -> String {
    let mut line = format!(
        "{title}: {} section(s) found, {} kept, {} block(s)",
        report.sections_found, report.sections_retained, report.blocks_emitted
    );
    if !report.inert_tags.is_empty() {
        let tags: Vec<String> = report
            .inert_tags
            .iter()
            .map(|(tag, count)| format!("{tag}x{count}"))
            .collect();
        line.push_str(&format!("; ignored {}", tags.join(", ")));
    }
    if !report.unmatched_tags.is_empty() {
        let tags: Vec<String> = report
            .unmatched_tags
            .iter()
            .map(|(tag, count)| format!("{tag}x{count}"))
            .collect();
        line.push_str(&format!("; unmatched {}", tags.join(", ")));
    }
    line
}
