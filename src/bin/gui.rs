use clap::Parser;
use mandelbrot_zoom::{DEFAULT_DENSITY, DEFAULT_MAX_ITERATIONS, MandelbrotConfig};

/// Zoom into the Mandelbrot set in a window: click two corners, press q to quit.
#[derive(Parser, Debug)]
#[command(name = "gui", version)]
struct Args {
    /// Samples along the longer axis of the viewport
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    density: u32,

    /// Escape-time iteration budget per point
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = MandelbrotConfig {
        density: args.density,
        max_iterations: args.max_iterations,
        ..MandelbrotConfig::default()
    };

    mandelbrot_zoom::run_gui(config).map_err(|err| anyhow::anyhow!("{}", err))
}
