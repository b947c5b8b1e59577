use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use motif::{Composition, FrameIndex, FrameRange, RenderThreading, fingerprint_frame};

#[derive(Parser, Debug)]
#[command(name = "motif", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the composition's format, scene placements and artifact hooks.
    Info(SourceArgs),
    /// Print the full output of a single frame as JSON.
    Frame(FrameArgs),
    /// Render a frame range and print one fingerprint per frame.
    Dump(DumpArgs),
    /// Write the composition as JSON.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct SourceArgs {
    /// Input composition JSON (defaults to the built-in promo).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Frame index (0-based).
    #[arg(long, allow_negative_numbers = true)]
    frame: i64,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the composition duration.
    #[arg(long)]
    end: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per parallel batch.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Dump(args) => cmd_dump(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn load(source: &SourceArgs) -> anyhow::Result<Composition> {
    match &source.in_path {
        Some(path) => Composition::from_path(path)
            .with_context(|| format!("load composition '{}'", path.display())),
        None => motif::reference::promo_composition().context("build promo composition"),
    }
}

fn emit(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes()).context("write stdout")?;
            if !text.ends_with('\n') {
                stdout.write_all(b"\n").context("write stdout")?;
            }
        }
    }
    Ok(())
}

fn cmd_info(args: SourceArgs) -> anyhow::Result<()> {
    let comp = load(&args)?;
    let d = comp.descriptor();
    let scenes: Vec<_> = comp
        .timeline()
        .scenes()
        .zip(comp.timeline().scene_spans())
        .map(|(slot, span)| {
            serde_json::json!({
                "kind": slot.scene.kind_name(),
                "duration_in_frames": slot.duration_in_frames,
                "start": span.range.start.0,
                "end": span.range.end.0,
            })
        })
        .collect();

    let info = serde_json::json!({
        "id": d.id,
        "fps": d.fps,
        "width": d.width,
        "height": d.height,
        "duration_in_frames": d.duration_in_frames,
        "scenes": scenes,
        "artifacts": comp.artifacts(),
    });
    emit(None, &serde_json::to_string_pretty(&info)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = load(&args.source)?;
    let out = comp.render_frame_at(args.frame)?;
    let json = serde_json::to_string_pretty(&out).context("serialize frame output")?;
    emit(args.out.as_deref(), &json)
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let comp = load(&args.source)?;
    let end = args.end.unwrap_or_else(|| comp.duration_in_frames());
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;
    let threading = RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };

    let frames = comp.render_frames(range, &threading)?;
    let mut text = String::with_capacity(frames.len() * 40);
    for out in &frames {
        text.push_str(&format!("{}\t{}\n", out.frame.0, fingerprint_frame(out)));
    }
    emit(args.out.as_deref(), &text)
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let comp = load(&args.source)?;
    emit(args.out.as_deref(), &comp.to_json_string()?)
}
