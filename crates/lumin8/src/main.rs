//! CHIP-8 emulator front end.
//!
//! ```bash
//! cargo run --release -- <rom.ch8>
//! ```

mod app;
mod keymap;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use winit::dpi::LogicalSize;

use lumin8_core::{Chip8, Screen};
use lumin8_engine::device::GpuInit;
use lumin8_engine::logging::{LoggingConfig, init_logging};
use lumin8_engine::render::grid::Projection;
use lumin8_engine::window::{Runtime, RuntimeConfig};

use app::EmulatorApp;

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Path to the ROM image to run
    rom: PathBuf,

    /// Instructions executed per rendered frame
    #[arg(long, value_name = "N", default_value_t = 60)]
    cycles_per_frame: u32,

    /// Window pixels per tile at startup
    #[arg(long, value_name = "PX", default_value_t = 16)]
    scale: u32,

    /// Vertex projection mode
    #[arg(long, value_enum, default_value_t = ProjectionOpt::Fixed)]
    projection: ProjectionOpt,
}

#[derive(clap::ValueEnum, Debug, Copy, Clone)]
enum ProjectionOpt {
    /// Bake the grid extent into the vertex stage
    Fixed,
    /// Transform through the uniform projection matrix
    Matrix,
}

impl From<ProjectionOpt> for Projection {
    fn from(opt: ProjectionOpt) -> Self {
        match opt {
            ProjectionOpt::Fixed => Projection::FixedExtent,
            ProjectionOpt::Matrix => Projection::Matrix,
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let opts = Opts::parse();

    let rom = std::fs::read(&opts.rom)
        .with_context(|| format!("failed to read ROM {}", opts.rom.display()))?;

    let mut vm = Chip8::new();
    vm.load_rom(&rom)?;
    log::info!("running {} ({} bytes)", opts.rom.display(), rom.len());

    let rom_name = opts
        .rom
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let scale = f64::from(opts.scale.max(1));
    let config = RuntimeConfig {
        title: format!("lumin8 - {rom_name}"),
        initial_size: LogicalSize::new(
            Screen::WIDTH as f64 * scale,
            Screen::HEIGHT as f64 * scale,
        ),
    };

    let app = EmulatorApp::new(vm, opts.cycles_per_frame, opts.projection.into());
    Runtime::run(config, GpuInit::default(), app)
}
