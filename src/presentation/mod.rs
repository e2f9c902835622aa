//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON) and design tokens
//!
//! ## Usage
//!
//! ```ignore
//! use funcsync::presentation::factory;
//!
//! let use_case = factory::create_refresh_use_case(&config, "acme-prod");
//! let report = use_case.execute(&options, &sink)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;
pub mod theme;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::create_refresh_use_case;
