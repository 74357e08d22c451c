use std::io;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use mandelbrot_zoom::{
    DEFAULT_DENSITY, DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_EXTENT, ExplorerController,
    LineEventSource, MandelbrotConfig, PixelRect, PpmFilePresenter,
};

/// Zoom into the Mandelbrot set from the terminal.
///
/// Each frame is written as a PPM scatter plot. Zoom by typing two corner
/// points, one `x y` pair per line; `-` is a pick outside the plot and `q`
/// quits. End of input also quits.
#[derive(Parser, Debug)]
#[command(name = "mandelbrot_zoom", version)]
struct Args {
    /// Samples along the longer axis of the viewport
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    density: u32,

    /// Escape-time iteration budget per point
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,

    /// Narrowest width or height a zoom may produce
    #[arg(long, default_value_t = DEFAULT_MIN_EXTENT)]
    min_extent: f64,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Where to write frames
    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,

    /// Write every frame to its own numbered file
    #[arg(long)]
    numbered: bool,

    /// Classify on the calling thread only
    #[arg(long)]
    serial: bool,
}

impl Args {
    fn config(&self) -> MandelbrotConfig {
        MandelbrotConfig {
            density: self.density,
            max_iterations: self.max_iterations,
            min_extent: self.min_extent,
            parallel: !self.serial,
            ..MandelbrotConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let pixel_rect = PixelRect::from_size(args.width, args.height)?;

    let mut controller = ExplorerController::new(args.config())?;
    let mut presenter = PpmFilePresenter::new(&args.output, pixel_rect).numbered(args.numbered);
    let mut events = LineEventSource::new(io::stdin().lock());

    let summary = controller.run(&mut presenter, &mut events)?;

    info!(
        "rendered {} frames, final viewport {:?}",
        summary.frames_rendered, summary.final_viewport
    );

    Ok(())
}
