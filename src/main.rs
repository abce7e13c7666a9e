use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use meshpaint::prelude::*;

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Wireframe,
    Filled,
}

impl From<Mode> for RenderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Wireframe => RenderMode::Wireframe,
            Mode::Filled => RenderMode::Filled,
        }
    }
}

/// Runs the mesh pipeline headless and prints every frame.
#[derive(Parser)]
#[command(name = "meshpaint", version)]
struct Cli {
    /// Mesh file (`v`/`f` records)
    mesh: PathBuf,

    /// JSON scene config; missing fields use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 1)]
    ticks: u32,

    #[arg(long, default_value_t = 1000)]
    width: u32,

    #[arg(long, default_value_t = 1000)]
    height: u32,

    /// Overrides the config's render mode
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Command to apply before the first tick (repeatable, e.g. turn-left)
    #[arg(long = "command", value_name = "NAME")]
    commands: Vec<Command>,

    /// Print one summary line per tick instead of the full frame as JSON
    #[arg(short, long)]
    summary: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let mut config = match &cli.config {
        Some(path) => SceneConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SceneConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config.render_mode = mode.into();
    }

    let mesh = Mesh::load(&cli.mesh)
        .with_context(|| format!("loading mesh {}", cli.mesh.display()))?;
    let engine = Engine::new(mesh, config);
    let mut state = engine.initial_state();

    for &command in &cli.commands {
        log::debug!("applying {command}");
        engine.apply(&mut state, command);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for tick in 0..cli.ticks {
        let frame = engine.tick(&mut state, cli.width, cli.height);
        if cli.summary {
            writeln!(
                out,
                "tick {tick}: {} primitives, {} degenerate, order {:?}",
                frame.len(),
                frame.degenerate_count(),
                frame.face_order()
            )?;
        } else {
            serde_json::to_writer(&mut out, &frame)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}
