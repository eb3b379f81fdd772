use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "shotframe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite the screenshots of a layout file onto its background.
    Compose(ComposeArgs),
    /// Print the resolved geometry of one placement as JSON.
    Geometry(GeometryArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Layout JSON.
    #[arg(long)]
    layout: PathBuf,

    /// Output image path. Overrides the layout's `output`.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct GeometryArgs {
    /// Background size as WxH.
    #[arg(long, value_parser = parse_size)]
    background_size: shotframe::PixelSize,

    /// Native screenshot size as WxH.
    #[arg(long, value_parser = parse_size)]
    source_size: shotframe::PixelSize,

    /// Device width as a fraction of the background width.
    #[arg(long)]
    relative_width: f64,

    /// Frame center as x,y fractions of the background.
    #[arg(long, value_parser = parse_pair, default_value = "0.5,0.5")]
    center: (f64, f64),

    /// Border as a fraction of device width.
    #[arg(long, default_value_t = shotframe::DEFAULT_RELATIVE_BORDER_WIDTH)]
    relative_border_width: f64,

    /// Outer corner radius as a fraction of device width.
    #[arg(long, default_value_t = shotframe::DEFAULT_RELATIVE_CORNER_RADIUS)]
    relative_corner_radius: f64,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Geometry(args) => cmd_geometry(args),
    }
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let layout = shotframe::Layout::from_path(&args.layout)
        .with_context(|| format!("load layout '{}'", args.layout.display()))?;

    let out = args
        .out
        .or_else(|| layout.output.clone())
        .context("no output path: pass --out or set \"output\" in the layout")?;

    let report =
        shotframe::compose_layout(&layout, Some(out.as_path())).context("compose screenshot")?;

    for e in &report.entries {
        if let Some(reason) = e.skip_reason() {
            eprintln!("  entry #{}: skipped: {reason}", e.index);
        }
    }
    eprintln!("placed {} of {} entries", report.placed(), report.entries.len());

    match report.output {
        shotframe::Output::Saved(path) => {
            eprintln!("wrote {}", path.display());
            Ok(())
        }
        shotframe::Output::SaveFailed { error, .. } => {
            Err(anyhow::Error::new(error).context(format!("write '{}'", out.display())))
        }
        shotframe::Output::InMemory(_) => anyhow::bail!("composite was not written (bug)"),
    }
}

fn cmd_geometry(args: GeometryArgs) -> anyhow::Result<()> {
    let mut warnings = Vec::new();
    let geometry = shotframe::resolve_geometry_with_warnings(
        &shotframe::GeometryInput {
            background: args.background_size,
            source: args.source_size,
            relative_width: args.relative_width,
            relative_center: args.center,
            relative_border_width: args.relative_border_width,
            relative_corner_radius: args.relative_corner_radius,
        },
        &mut warnings,
    )
    .map_err(|reason| anyhow::anyhow!("placement cannot be resolved: {reason}"))?;

    for w in &warnings {
        eprintln!("  warning: {w}");
    }

    println!("{}", serde_json::to_string_pretty(&geometry)?);
    Ok(())
}

fn parse_size(s: &str) -> Result<shotframe::PixelSize, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let width = w.trim().parse().map_err(|e| format!("width '{w}': {e}"))?;
    let height = h.trim().parse().map_err(|e| format!("height '{h}': {e}"))?;
    Ok(shotframe::PixelSize { width, height })
}

fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("x '{x}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("y '{y}': {e}"))?;
    Ok((x, y))
}
