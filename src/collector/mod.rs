//! Read-then-decode layer over `/proc/[pid]/stat`.
//!
//! The decoder itself never touches the filesystem; this module supplies the
//! thin collaborator that does, behind a `FileSystem` trait so everything is
//! testable without a Linux `/proc`.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                StatCollector                 │
//! │   <proc_path>/<pid>/stat ──► parser::decode  │
//! │                     │                        │
//! │              ┌──────▼──────┐                 │
//! │              │  FileSystem │ (trait)         │
//! │              └──────┬──────┘                 │
//! └─────────────────────┼────────────────────────┘
//!                ┌──────┴───────┐
//!         ┌──────▼──────┐ ┌─────▼───────┐
//!         │   RealFs    │ │   MockFs    │
//!         │  (Linux)    │ │  (Testing)  │
//!         └─────────────┘ └─────────────┘
//! ```
//!
//! # Usage
//!
//! ## Production (Linux)
//!
//! ```ignore
//! use procstat::{RealFs, StatCollector};
//!
//! let collector = StatCollector::new(RealFs::new(), "/proc");
//! let stat = collector.collect(std::process::id() as i32)?;
//! ```
//!
//! ## Testing (with MockFs)
//!
//! ```
//! use procstat::{MockFs, StatCollector};
//!
//! let fs = MockFs::typical_system();
//! let collector = StatCollector::new(fs, "/proc");
//! let stat = collector.collect(1).unwrap();
//! assert_eq!(stat.comm, "systemd");
//! ```

pub mod mock;
mod stat;
pub mod traits;

pub use mock::MockFs;
pub use stat::{CollectError, StatCollector};
pub use traits::{FileSystem, RealFs};
