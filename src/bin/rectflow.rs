use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rectflow", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a scene and print the geometry tree as JSON.
    Layout(LayoutArgs),
    /// Render a scene to a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct ViewportArgs {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 800)]
    height: u32,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    viewport: ViewportArgs,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    viewport: ViewportArgs,

    /// Background color (#RRGGBB or #RRGGBBAA) the surface is cleared to.
    #[arg(long, default_value = "#12141C")]
    clear: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<rectflow::SceneNode> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let r = BufReader::new(f);
    let scene: rectflow::SceneNode =
        serde_json::from_reader(r).with_context(|| "parse scene JSON")?;
    Ok(scene)
}

fn make_viewport(args: &ViewportArgs) -> anyhow::Result<rectflow::Viewport> {
    Ok(rectflow::Viewport::new(args.width, args.height)?)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    let viewport = make_viewport(&args.viewport)?;
    let geometry = rectflow::layout_scene(&scene, viewport)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &geometry).with_context(|| "write geometry JSON")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    let viewport = make_viewport(&args.viewport)?;

    let clear = rectflow::ColorSpec::hex(args.clear.as_str())
        .to_rgba8_premul()
        .with_context(|| format!("parse --clear '{}'", args.clear))?;
    let settings = rectflow::RenderSettings {
        clear_rgba: Some(clear.to_straight_rgba()),
    };
    let mut painter = rectflow::CpuPainter::new(viewport, settings)?;

    let stats = rectflow::render_scene(&scene, viewport, &mut painter)?;
    let frame = painter
        .into_frame()
        .context("painter produced no frame (bug)")?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    let t = stats.timings;
    eprintln!(
        "rendered {} rectangles ({} nodes): build {:?}, layout {:?}, render {:?}, paint {:?}, total {:?}",
        stats.rectangles_drawn,
        stats.nodes_built,
        t.build,
        t.layout,
        t.render,
        t.paint,
        t.total
    );
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
