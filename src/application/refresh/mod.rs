//! Refresh Module
//!
//! Orchestrates one reconciliation run.
//!
//! ## Structure
//!
//! - `options` - Run configuration (`RefreshOptions`)
//! - `result` - Run outcome (`RefreshReport`)
//! - `use_case` - Core orchestration (`RefreshUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use funcsync::application::refresh::{RefreshOptions, RefreshUseCase};
//!
//! let use_case = RefreshUseCase::new(platform, history, registry);
//! let report = use_case.execute(&RefreshOptions::new("acme-prod"), &sink)?;
//! std::process::exit(report.exit_code().into());
//! ```

mod options;
mod result;
mod use_case;

pub use options::RefreshOptions;
pub use result::RefreshReport;
pub use use_case::RefreshUseCase;
