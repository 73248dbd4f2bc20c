use anyhow::Context as _;
use clap::Args;
use colored::Colorize;
use mailsmith_compiler_html::{render_with_options, RenderOptions};
use mailsmith_editor::{Command, EditSession};
use mailsmith_model::{BlockKind, BlockProps};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Where to write the document JSON
    pub output: PathBuf,

    /// Session name (seeds block ids)
    #[arg(short, long, default_value = "untitled")]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Document JSON file
    pub input: PathBuf,

    /// Output HTML file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact HTML without indentation
    #[arg(long)]
    pub compact: bool,

    /// Override the footer copyright year
    #[arg(long)]
    pub year: Option<i32>,
}

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Document JSON file
    pub input: PathBuf,

    /// JSON array of edit commands
    pub script: PathBuf,

    /// Where to write the edited document (defaults to in-place)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn new(args: NewArgs) -> anyhow::Result<()> {
    let mut session = EditSession::new(args.name.as_str());
    session
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "{} {}",
        "Created".green().bold(),
        args.output.display()
    );
    Ok(())
}

pub fn export(args: ExportArgs) -> anyhow::Result<()> {
    let session = EditSession::load("export", &args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;

    let mut options = RenderOptions::default();
    options.pretty = !args.compact;
    if let Some(year) = args.year {
        options.copyright_year = year;
    }

    let html = render_with_options(session.document(), &options);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &html).with_context(|| format!("writing {}", path.display()))?;
            println!(
                "{} {} ({} blocks, {} bytes)",
                "Exported".green().bold(),
                path.display(),
                session.document().block_count(),
                html.len()
            );
        }
        None => print!("{html}"),
    }
    Ok(())
}

pub fn apply(args: ApplyArgs) -> anyhow::Result<()> {
    let mut session = EditSession::load("apply", &args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;

    let script = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading {}", args.script.display()))?;
    let commands: Vec<Command> =
        serde_json::from_str(&script).context("parsing command script")?;

    let total = commands.len();
    for command in commands {
        session.dispatch(command);
    }

    let out = args.output.unwrap_or(args.input);
    session
        .save(&out)
        .with_context(|| format!("writing {}", out.display()))?;

    println!(
        "{} {} commands ({} effective)",
        "Applied".green().bold(),
        total,
        session.version()
    );
    Ok(())
}

pub fn blocks() -> anyhow::Result<()> {
    println!("{}", "Block catalog:".bold());
    for kind in BlockKind::ALL {
        let singleton = match BlockProps::defaults(kind) {
            p if p.is_header() => " (header singleton)",
            p if p.is_footer() => " (footer singleton)",
            _ => "",
        };
        println!("  {}{}", kind.tag().cyan(), singleton.dimmed());
    }
    Ok(())
}
