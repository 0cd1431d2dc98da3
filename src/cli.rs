// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "flatbread-viewer")]
#[command(about = "Procedural flatbread scene viewer", long_about = None)]
pub struct Cli {
    /// Seed for the disc edge randomization
    #[arg(long, default_value = "7")]
    pub seed: u64,

    /// Initial window width
    #[arg(long, default_value = "1280")]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value = "720")]
    pub height: u32,

    /// Grid subdivisions per side of the flatbread plane
    #[arg(long, default_value = "256")]
    pub segments: u32,

    /// Nominal disc radius
    #[arg(long, default_value = "4.0")]
    pub radius: f32,

    /// Half-width of the random edge perturbation
    #[arg(long, default_value = "0.1")]
    pub irregularity: f32,

    /// Depth the rim sinks below the disc plane
    #[arg(long, default_value = "0.2")]
    pub sink_depth: f32,

    /// Directory holding color.png, normal.png, displacement.png and
    /// roughness.png; missing maps fall back to neutral textures
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Disable the FPS overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    pub fn disc_params(&self) -> crate::disc::DiscParams {
        crate::disc::DiscParams {
            radius: self.radius,
            irregularity: self.irregularity,
            sink_depth: self.sink_depth,
        }
    }
}
