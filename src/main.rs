// ══════════════════════════════════════════════════════════════════════════════
// CONKIT DEMO
// ══════════════════════════════════════════════════════════════════════════════
//
// Walks through the logger and the progress widgets so their output can be
// seen on a real terminal. Configuration comes from the `CONKIT_*` environment
// first; command-line flags override it.

use std::io;
use std::process;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::*;

use conkit::{
	BarStyle, Config, Logger, Palette, ProgressBar, Severity, SimpleProgressBar, SinkTarget, Spinner,
	SpinnerStyle, log, log_done, log_info, log_warn,
};

/// Leveled console logging and progress indicators
#[derive(Parser)]
#[command(name = "conkit")]
#[command(version)]
#[command(about = "Demonstrates the conkit logger, progress bars and spinner", long_about = None)]
struct Cli {
	/// Threshold: error, warning, info, time, done, debug
	#[arg(long, global = true)]
	level: Option<Severity>,

	/// Status tag colors: none, regular, bold, background, underline
	#[arg(long, global = true)]
	palette: Option<Palette>,

	/// Where log lines go: stdout or stderr
	#[arg(long, global = true)]
	sink: Option<SinkTarget>,

	/// Prefix each line with date and time
	#[arg(long, global = true)]
	time: bool,

	/// Prefix each line with its status tag
	#[arg(long, global = true)]
	status: bool,

	/// Prefix each line with the file and line that wrote it
	#[arg(long, global = true)]
	location: bool,

	/// Prefix each line with the writing thread
	#[arg(long, global = true)]
	thread: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Levels, styles and time snapshots
	Logger,

	/// Two worker threads logging at the same time
	Threads {
		/// Statements per thread
		#[arg(short, long, default_value_t = 20)]
		count: usize,
	},

	/// Redrawing progress bar with rate and ETA
	Bar {
		/// Total number of steps
		#[arg(short, long, default_value_t = 5_000_000)]
		max: u64,

		/// Bar width in cells
		#[arg(short, long, default_value_t = 30)]
		width: u64,

		/// Unit shown in the rate column
		#[arg(short, long, default_value = "")]
		unit: String,

		/// Use the `|==  |` glyphs
		#[arg(long)]
		fancy: bool,
	},

	/// Append-only progress bar
	SimpleBar {
		/// Total number of steps
		#[arg(short, long, default_value_t = 1_000_000)]
		max: u64,

		/// Bar width in cells
		#[arg(short, long, default_value_t = 60)]
		width: u64,
	},

	/// Activity spinner
	Spinner {
		/// Number of updates to run
		#[arg(short, long, default_value_t = 40)]
		steps: u64,

		/// Use the circle frames
		#[arg(long)]
		circle: bool,

		/// Finish with the failure mark
		#[arg(long)]
		fail: bool,
	},
}

fn main() {
	let cli = Cli::parse();

	let mut config = match Config::from_env() {
		Ok(config) => config,
		Err(e) => {
			eprintln!("{} {}", "✘".red().bold(), e);
			process::exit(2);
		}
	};
	if let Some(level) = cli.level { config.level = level; }
	if let Some(palette) = cli.palette { config.palette = palette; }
	if let Some(sink) = cli.sink { config.sink = sink; }
	config.flags.time |= cli.time;
	config.flags.status |= cli.status;
	config.flags.location |= cli.location;
	config.flags.thread |= cli.thread;

	let logger = Logger::from_config(&config);
	log(Severity::Info, &format!("Welcome to {}!", "conkit".cyan()));

	match cli.command {
		Commands::Logger => demo_logger(logger),
		Commands::Threads { count } => demo_threads(logger, count),
		Commands::Bar { max, width, unit, fancy } => demo_bar(max, width, &unit, fancy),
		Commands::SimpleBar { max, width } => demo_simple_bar(max, width),
		Commands::Spinner { steps, circle, fail } => demo_spinner(steps, circle, fail),
	}
}

fn heading(title: &str) {
	println!("\n{} {}\n", "~~~~~~".dimmed(), title.cyan().bold());
}

fn demo_logger(logger: &Logger) {
	heading("LEVELS");
	let initial = logger.level();
	logger.debug() << "Before DEBUG was allowed";
	logger.set_level(Severity::Debug);
	logger.debug() << "After DEBUG was allowed, the line above never appeared";
	for severity in Severity::ALL {
		logger.open(severity) << "log " << severity;
	}
	logger.set_level(initial);
	logger.debug() << "Hidden again";
	logger.done() << "Threshold restored to " << initial;

	heading("STYLES");
	let style = logger.style();
	logger.set_style_time(false);
	logger.set_style_status(false);
	logger.info() << "#1 without prefix segments";
	logger.set_style_time(true);
	logger.info() << "#2 with TIME";
	logger.set_style_status(true);
	logger.info() << "#3 with TIME and STATUS";
	for palette in Palette::ALL {
		logger.set_color_palette(palette);
		logger.warning() << "palette " << palette;
	}
	logger.set_style_time(style.flags.time);
	logger.set_style_status(style.flags.status);
	logger.set_color_palette(style.palette);

	heading("VALUES");
	for (i, arg) in std::env::args().enumerate() {
		logger.info() << "Arg [" << i << "] : " << arg;
	}
	log_info!(logger, "{} + {} = {}", 2, 2, 2 + 2);

	heading("SNAPSHOTS");
	let level = logger.level();
	logger.set_level(Severity::Debug);
	logger.add_snapshot("first");
	thread::sleep(Duration::from_millis(500));
	logger.time_since_last_snapshot();
	logger.add_snapshot_quiet("second");
	thread::sleep(Duration::from_millis(250));
	logger.time_since_snapshot("first");
	logger.time_since_snapshot("second");
	logger.time_since_snapshot("never-added");
	logger.time_since_start();
	log_done!(logger, "{} snapshots recorded", logger.snapshot_count());
	logger.set_level(level);
}

fn demo_threads(logger: &'static Logger, count: usize) {
	heading("THREADS");
	let spawn = move |name: &str, severity: Severity, value: u32| {
		let name = name.to_string();
		thread::Builder::new()
			.name(name.clone())
			.spawn(move || {
				logger.info() << "thread " << &name << " is alive";
				for _ in 0..count {
					logger.open(severity) << "thread " << &name << " : " << value << " val";
				}
				logger.info() << "thread " << &name << " done";
			})
	};

	let workers = [spawn("one", Severity::Warning, 1111), spawn("two", Severity::Error, 2222)];
	for worker in workers {
		match worker {
			Ok(handle) => {
				if handle.join().is_err() {
					log_warn!(logger, "a worker thread panicked");
				}
			}
			Err(e) => log_warn!(logger, "could not spawn worker: {}", e),
		}
	}
}

fn demo_bar(max: u64, width: u64, unit: &str, fancy: bool) {
	heading("PROGRESS BAR");
	let style = if fancy { BarStyle::Fancy } else { BarStyle::Hash };
	let mut bar = ProgressBar::new(io::stdout(), max)
		.width(width)
		.unit(unit)
		.style(style)
		.poll_interval(Duration::from_millis(100));
	let mut i = 0;
	while i < max {
		bar.add(2);
		bar.inc();
		bar.inc();
		i += 4;
		if i % 1_000_000 == 0 {
			thread::sleep(Duration::from_millis(200));
		}
	}
	bar.finalize();
}

fn demo_simple_bar(max: u64, width: u64) {
	heading("SIMPLE PROGRESS BAR");
	let mut bar = SimpleProgressBar::with_width(io::stdout(), max, width);
	for i in 0..max {
		bar.inc();
		if i % (max / 10).max(1) == 0 {
			thread::sleep(Duration::from_millis(100));
		}
	}
	bar.finalize();
}

fn demo_spinner(steps: u64, circle: bool, fail: bool) {
	heading("SPINNER");
	let mut spinner = Spinner::new(io::stdout());
	if circle {
		spinner.set_style(SpinnerStyle::Circle);
	}
	spinner.process("working", steps);
	for _ in 0..steps {
		spinner.update();
		thread::sleep(Duration::from_millis(80));
	}
	if fail {
		spinner.error();
	} else {
		spinner.done();
	}
}
