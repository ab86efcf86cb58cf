// sortty: sorting and searching algorithms, one step at a time

mod cli;

use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use sortty::config::EngineConfig;
use sortty::engine::{
    ChannelObserver, EngineError, RunController, RunState, StepObserver, StepRecord, SystemClock,
};
use sortty::ui::App;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = EngineConfig {
        array_length: cli.length,
        speed: cli.speed,
        seed: cli.seed,
        ..EngineConfig::default()
    };

    if cli.headless {
        init_tracing_to_stderr();
        let state = run_headless(&cli, config)?;
        if !matches!(state, RunState::Completed(_)) {
            std::process::exit(1);
        }
        return Ok(());
    }

    init_tui_tracing_to_file(&cli.log_path())?;

    let (observer, events) = ChannelObserver::channel();
    let controller = RunController::new(config, Arc::new(SystemClock), Arc::new(observer))
        .context("invalid configuration")?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(
        controller,
        events,
        cli.algorithm,
        cli.search.clone().unwrap_or_default(),
    );
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal event loop failed")
}

/// Prints each step as it is published, numbered from 1
struct PrintObserver {
    count: Mutex<usize>,
}

impl StepObserver for PrintObserver {
    fn on_step(&self, record: &StepRecord, array: &[u32]) {
        let mut count = self.count.lock();
        *count += 1;
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{:>5}  {}", *count, record);
        if record.array_snapshot.is_some() {
            let _ = writeln!(out, "       {:?}", array);
        }
    }
}

fn run_headless(cli: &Cli, config: EngineConfig) -> Result<RunState> {
    let observer = Arc::new(PrintObserver {
        count: Mutex::new(0),
    });
    let mut controller = RunController::new(config, Arc::new(SystemClock), observer)
        .context("invalid configuration")?;

    println!("{} on {:?}", cli.algorithm.name(), controller.array());

    match controller.start(cli.algorithm, cli.search.as_deref()) {
        Ok(_) => {}
        Err(EngineError::InvalidInput { input }) => {
            eprintln!("Error: {:?} is not a number to search for", input);
            return Ok(RunState::Idle);
        }
        Err(err) => return Err(err).context("could not start run"),
    }

    let state = controller.wait();
    println!("{}", controller.board().message());
    println!("final state: {}", state);
    println!("final array: {:?}", controller.array());
    Ok(state)
}

fn init_tracing_to_stderr() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn init_tui_tracing_to_file(log_path: &Path) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("open log file {}", log_path.display()))?;
    let writer = Arc::new(Mutex::new(file));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(move || FileLogWriter::new(Arc::clone(&writer)))
        .try_init();
    Ok(())
}

struct FileLogWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl FileLogWriter {
    fn new(file: Arc<Mutex<std::fs::File>>) -> Self {
        Self { file }
    }
}

impl Write for FileLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.lock().write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.lock().flush()
    }
}
