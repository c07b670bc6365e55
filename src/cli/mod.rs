//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `init` | Create `folio.toml`, `layout.toml` and sample content |
//! | `build` | Render the page once |
//! | `watch` | Render, then re-render on content changes |
//! | `sections` | Show the navigation order `config.json` yields |
//! | `check` | Report which content documents fail to load |
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Logging
//!
//! Diagnostics go to stderr. Use `--verbose` (or `-v`) for debug output,
//! or set `RUST_LOG` for fine-grained control:
//! ```bash
//! folio --verbose build
//! RUST_LOG=folio=trace folio build
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod build;
mod inspect;
mod logging;
mod output;

pub use app::{run, Cli, Commands};
pub use build::{build_once, BuildOptions, BuildSummary};
pub use output::{Output, OutputFormat};
