use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use jigsawkit::{
    generate, init_logging, parse_length, ExportFormat, GeneratorConfig, PieceStyle, PuzzleForm,
    BUILD_DATE, VERSION,
};
use jigsawkit_settings::default_config_path;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "jigsawkit", version, about = "Interlocking jigsaw puzzle generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a puzzle and write it as SVG, DXF or JSON.
    Generate(GenerateArgs),
    /// Write a config file holding the defaults.
    InitConfig {
        /// Target file (.toml or .json). Defaults to the platform config directory.
        #[arg(long)]
        path: Option<PathBuf>,
        /// Replace an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Config file to start from. The platform config file is used when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// rectangular, square or circular
    #[arg(long)]
    form: Option<PuzzleForm>,
    /// grid or classic
    #[arg(long)]
    style: Option<PieceStyle>,
    /// Columns, or segments for circular puzzles.
    #[arg(long)]
    cols: Option<u32>,
    /// Rows, or rings for circular puzzles.
    #[arg(long)]
    rows: Option<u32>,
    /// Canvas width: pixels, or with a `mm`, `in` or `px` suffix.
    #[arg(long, value_parser = parse_length)]
    width: Option<f64>,
    /// Canvas height: pixels, or with a `mm`, `in` or `px` suffix.
    #[arg(long, value_parser = parse_length)]
    height: Option<f64>,
    #[arg(long, value_parser = parse_length)]
    margin: Option<f64>,
    #[arg(long, value_parser = parse_length)]
    line_width: Option<f64>,
    /// Tab size as a percentage of the smaller piece dimension (10-30).
    #[arg(long)]
    tab_size: Option<f64>,
    #[arg(long)]
    seed: Option<u32>,
    /// Picture width / height; swaps columns and rows to match the picture.
    #[arg(long)]
    aspect: Option<f64>,
    /// Segments per curve in DXF output.
    #[arg(long)]
    resolution: Option<usize>,
    /// print-svg, cut-svg, dxf or json
    #[arg(long, default_value = "print-svg")]
    format: ExportFormat,
    /// Image reference used to fill the print document.
    #[arg(long)]
    fill: Option<String>,
    /// Output file. Writes to stdout when absent. The format's extension is
    /// added when the name has none.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    match path {
        Some(path) => GeneratorConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => match default_config_path() {
            Ok(path) => GeneratorConfig::load_or_default(&path)
                .with_context(|| format!("Failed to load config {}", path.display())),
            Err(_) => Ok(GeneratorConfig::default()),
        },
    }
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;

    let puzzle = &mut config.puzzle;
    if let Some(form) = args.form {
        puzzle.form = form;
    }
    if let Some(style) = args.style {
        puzzle.piece_style = style;
    }
    if let Some(cols) = args.cols {
        puzzle.columns = cols;
    }
    if let Some(rows) = args.rows {
        puzzle.rows = rows;
    }
    if let Some(width) = args.width {
        puzzle.width = width;
    }
    if let Some(height) = args.height {
        puzzle.height = height;
    }
    if let Some(margin) = args.margin {
        puzzle.margin = margin;
    }
    if let Some(line_width) = args.line_width {
        puzzle.line_width = line_width;
    }
    if let Some(tab_size) = args.tab_size {
        puzzle.tab_size_percent = tab_size;
    }
    if args.seed.is_some() {
        puzzle.seed = args.seed;
    }
    if let Some(resolution) = args.resolution {
        config.export.flatten_resolution = resolution;
    }
    if args.fill.is_some() {
        config.export.fill = args.fill;
    }

    let (puzzle, document) = generate(&config, args.aspect, args.format)?;
    info!(
        seed = puzzle.seed,
        pieces = puzzle.pieces.len(),
        format = %args.format,
        "Puzzle generated"
    );

    match args.output.map(|path| with_format_extension(path, args.format)) {
        Some(path) => std::fs::write(&path, document)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", document),
    }
    Ok(())
}

fn with_format_extension(mut path: PathBuf, format: ExportFormat) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension(format.extension());
    }
    path
}

fn run_init_config(path: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path,
        None => default_config_path().context("No config path given")?,
    };
    if path.exists() && !force {
        bail!("{} already exists, pass --force to replace it", path.display());
    }
    GeneratorConfig::default()
        .save_to_file(&path)
        .with_context(|| format!("Failed to write config {}", path.display()))?;
    println!("{}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;
    info!(version = VERSION, build_date = BUILD_DATE, "Starting JigsawKit");

    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::InitConfig { path, force } => run_init_config(path, force),
    }
}
