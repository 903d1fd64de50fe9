// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                                  CONKIT                                      ║
// ║                 Console logging and progress indicators                      ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 PROJECT GOAL
// ---------------
// Human-readable, colorized status output for command-line programs, with
// optional timing instrumentation. Everything is in-memory state rendered
// synchronously to an output stream.
//
// 📦 HOW IT WORKS
// ---------------
// One process-wide `Logger` is bound to a sink on first use. Each statement
// is opened at a severity, collects streamed values in its own buffer and is
// written in one piece when it goes out of scope:
//
//   [ D 2024-03-01; T 14:02:11 ][ INFO    ]‣ loaded 12 files
//   └──── time prefix ────────┘└─ status ┘   └─ streamed text
//
// Named snapshots measure time between points of the program. Progress bars
// and spinners draw to their own writers and never touch logger state.
//
// 🛡️ THREAD SAFETY
// ----------------
// - Threshold, styles and snapshots sit behind one lock.
// - The sink sits behind another and receives exactly one write per line,
//   so lines from concurrent threads never splice into each other.
//
// ══════════════════════════════════════════════════════════════════════════════

mod assembler;
pub mod config;
pub mod constants;
pub mod error;
pub mod level;
mod logger;
mod macros;
pub mod progress;
pub mod snapshot;
pub mod style;

pub use assembler::Statement;
pub use config::{Config, SinkTarget};
pub use error::{Error, Result};
pub use level::Severity;
pub use logger::{Logger, log};
pub use progress::{BarStyle, ProgressBar, SimpleProgressBar, Spinner, SpinnerStyle, format_duration};
pub use snapshot::{Snapshot, SnapshotTable};
pub use style::{Palette, StyleFlags, StyleState};
