//! Command line front end for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_sim::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_grids, load_grid_from_file, save_grid_to_file, GameOfLifeRules},
    session::{Command, Outcome, Session},
    simulator_from_settings,
    utils::{ColorOutput, FrameRenderer},
};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "life_sim")]
#[command(about = "Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug, Default)]
struct BoardArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Board width in cells (overrides config)
    #[arg(long)]
    columns: Option<usize>,

    /// Board height in cells (overrides config)
    #[arg(long)]
    rows: Option<usize>,

    /// Seed for the random board (overrides config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Wrap neighbor counting around the edges
    #[arg(short, long)]
    wrap: bool,

    /// Start from a pattern file instead of a random board
    #[arg(short, long)]
    pattern: Option<PathBuf>,

    /// Tick interval in milliseconds (overrides config)
    #[arg(short, long)]
    interval: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation and print a frame every tick
    Run {
        #[command(flatten)]
        board: BoardArgs,

        /// Stop after this many generations; otherwise run until the board settles
        #[arg(short, long)]
        generations: Option<u64>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Do not wait between generations
        #[arg(long)]
        no_delay: bool,
    },

    /// Interactive session driven by commands read from stdin
    Play {
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Advance a pattern file a number of generations
    Evolve {
        /// Pattern file
        pattern: PathBuf,

        /// Number of generations
        #[arg(short, long, default_value_t = 1)]
        generations: usize,

        /// Wrap neighbor counting around the edges
        #[arg(short, long)]
        wrap: bool,

        /// Save the result instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run { board, generations, format, no_delay } => {
            run_command(board, generations, format.map(Into::into), no_delay)
        }
        Commands::Play { board } => play_command(board),
        Commands::Evolve { pattern, generations, wrap, output } => {
            evolve_command(pattern, generations, wrap, output)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "life_sim=debug" } else { "life_sim=warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_settings(board: &BoardArgs, format: Option<OutputFormat>) -> Result<Settings> {
    let mut settings = if board.config.exists() {
        Settings::from_file(&board.config)
            .with_context(|| format!("Failed to load config from {}", board.config.display()))?
    } else {
        info!(path = %board.config.display(), "config file not found, using defaults");
        Settings::default()
    };

    let cli_overrides = CliOverrides {
        columns: board.columns,
        rows: board.rows,
        seed: board.seed,
        wrap_edges: board.wrap,
        pattern_file: board.pattern.clone(),
        tick_interval_ms: board.interval,
        format,
    };
    settings.merge_with_cli(&cli_overrides);

    settings.validate()
        .context("Configuration validation failed")?;

    Ok(settings)
}

fn run_command(
    board: BoardArgs,
    generations: Option<u64>,
    format: Option<OutputFormat>,
    no_delay: bool,
) -> Result<()> {
    let settings = load_settings(&board, format)?;
    let simulator = simulator_from_settings(&settings)
        .context("Failed to create simulator")?;
    let mut session = Session::new(simulator, &settings);
    let renderer = FrameRenderer::new(&settings.display);
    let format = settings.output.format;

    // Nothing can unpause a non-interactive run
    if session.is_paused() {
        session.apply(Command::TogglePause)?;
    }

    info!(?generations, ?format, "starting run");
    emit(&renderer, &session, format)?;

    loop {
        let interval = session.tick_interval();
        if !no_delay {
            std::thread::sleep(interval);
        }

        let mut settled = false;
        for diff in session.advance(interval) {
            settled |= diff.is_stable();
        }
        emit(&renderer, &session, format)?;

        let sim = session.simulator();
        match generations {
            Some(limit) if sim.generation() >= limit => break,
            None if settled || sim.live_count() == 0 => break,
            _ => {}
        }
    }

    if format == OutputFormat::Text {
        println!("{}", ColorOutput::success(&format!(
            "Finished at generation {} with {} live cells",
            session.simulator().generation(),
            session.simulator().live_count()
        )));
    }

    Ok(())
}

fn emit(renderer: &FrameRenderer, session: &Session, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", renderer.format_frame(session)),
        OutputFormat::Json => {
            let line = serde_json::to_string(&session.simulator().stats())
                .context("Failed to serialize statistics")?;
            println!("{}", line);
        }
    }
    Ok(())
}

fn play_command(board: BoardArgs) -> Result<()> {
    let settings = load_settings(&board, None)?;
    let simulator = simulator_from_settings(&settings)
        .context("Failed to create simulator")?;
    let session = Session::new(simulator, &settings);
    let renderer = FrameRenderer::new(&settings.display);

    println!("{}", ColorOutput::info(
        "Commands: p pause, r reset, g grid, w wrap, +/- speed, s step, t X Y toggle, q quit"
    ));

    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut player = Player::new(session, renderer, Instant::now());
    player.show(&mut out)?;

    loop {
        match rx.recv_timeout(player.session.tick_interval()) {
            Ok(line) => {
                let line = line.context("Failed to read command")?;
                if !player.on_line(&line, &mut out)? {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        player.on_tick(Instant::now(), &mut out)?;
    }

    Ok(())
}

/// Drives an interactive session. Commands act on the board last printed;
/// elapsed time is only fed to the session on ticks, and every generation a
/// tick produces is printed.
struct Player {
    session: Session,
    renderer: FrameRenderer,
    last_tick: Instant,
}

impl Player {
    fn new(session: Session, renderer: FrameRenderer, now: Instant) -> Self {
        Self { session, renderer, last_tick: now }
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.renderer.format_frame(&self.session))?;
        Ok(())
    }

    /// Apply one input line. Returns `false` once the user quits.
    fn on_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        if line.trim().is_empty() {
            return Ok(true);
        }

        match Command::parse(line).and_then(|command| self.session.apply(command)) {
            Ok(Outcome::Quit) => return Ok(false),
            Ok(_) => self.show(out)?,
            Err(e) => writeln!(out, "{}", ColorOutput::error(&e.to_string()))?,
        }
        Ok(true)
    }

    /// Feed the time since the previous tick, one interval at a time, so each
    /// generation gets its own frame
    fn on_tick<W: Write>(&mut self, now: Instant, out: &mut W) -> Result<()> {
        let mut remaining = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        while !remaining.is_zero() {
            let chunk = remaining.min(self.session.tick_interval());
            remaining -= chunk;
            if !self.session.advance(chunk).is_empty() {
                self.show(out)?;
            }
        }
        Ok(())
    }
}

fn evolve_command(
    pattern: PathBuf,
    generations: usize,
    wrap: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let grid = load_grid_from_file(&pattern)
        .with_context(|| format!("Failed to load pattern from {}", pattern.display()))?;
    let start = grid.living_count();
    let evolved = GameOfLifeRules::evolve_generations(grid, generations, wrap);

    match output {
        Some(path) => {
            save_grid_to_file(&evolved, &path)?;
            println!("{}", ColorOutput::success(&format!("Saved to {}", path.display())));
        }
        None => {
            let renderer = FrameRenderer::new(&Settings::default().display);
            println!("{}", renderer.format_grid_compact(&evolved));
        }
    }
    println!(
        "Living cells: {} -> {} after {} generation(s)",
        start,
        evolved.living_count(),
        generations
    );

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let pattern_dir = directory.join("patterns");

    for dir in [&config_dir, &pattern_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Skipped: {} (already exists)", config_path.display()
        )));
    }

    create_example_grids(&pattern_dir)
        .context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", pattern_dir.display());

    let mut glider_config = Settings::default();
    glider_config.board.wrap_edges = true;
    glider_config.board.pattern_file = Some(PathBuf::from("patterns/glider.txt"));
    glider_config.to_file(&config_dir.join("glider.yaml"))?;

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("Run: life_sim run --config config/default.yaml");

    Ok(())
}
