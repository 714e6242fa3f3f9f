//! Headless particle-web-to-PNG render command

use anyhow::{Context, Result};
use folio_canvas::{FieldConfig, FixedFrames, HostEvent, ParticleWeb, RasterSurface, RenderLoop};
use folio_core::{Rgba, Vec2};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

pub struct RenderArgs {
    pub output: String,
    pub width: u32,
    pub height: u32,
    pub frames: u64,
    pub seed: Option<u32>,
    pub pointer: Option<[f64; 2]>,
    pub config: Option<String>,
    pub background: Option<[u8; 3]>,
}

pub struct RenderSummary {
    pub seed: u32,
    pub frames: u64,
    pub points: usize,
    pub links: usize,
    pub pointer: Vec2,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let summary = render_to_file(&args)?;
    println!("Rendered {} ({}x{})", args.output, args.width, args.height);
    println!("Frames: {}", summary.frames);
    println!("Points: {}, links: {}", summary.points, summary.links);
    println!("Seed: {}", summary.seed);
    Ok(())
}

pub fn render_to_file(args: &RenderArgs) -> Result<RenderSummary> {
    let config = match &args.config {
        Some(path) => FieldConfig::load(Path::new(path))
            .with_context(|| format!("Failed to load field config from {}", path))?,
        None => FieldConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(clock_seed);

    let mut surface = match args.background {
        Some([r, g, b]) => RasterSurface::with_background(args.width, args.height, Rgba::new(r, g, b, 1.0)),
        None => RasterSurface::new(args.width, args.height),
    };

    // The pointer is placed before the first frame and then held
    let mut web = ParticleWeb::new(config, seed);
    if let Some([x, y]) = args.pointer {
        web.handle_event(
            HostEvent::PointerMove {
                client: Vec2::new(x, y),
                origin: Vec2::ZERO,
            },
            &mut surface,
        );
    }

    let mut render_loop = RenderLoop::new(web, surface, FixedFrames::new(args.frames));
    let frames = render_loop.run();
    let points = render_loop.web().field().particles().len();
    let links = render_loop.web().field().links().len();
    let pointer = render_loop.web().pointer();

    let surface = render_loop.into_surface();
    surface
        .save_png(Path::new(&args.output))
        .context("Failed to save rendered image")?;
    log::info!("wrote {} after {} frames", args.output, frames);

    Ok(RenderSummary {
        seed,
        frames,
        points,
        links,
        pointer,
    })
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
