//! procstat — typed decoder for Linux `/proc/[pid]/stat` records.
//!
//! Provides:
//! - `parser` — tokenizer and decoder for the stat record format (the core)
//! - `schema` — the ordered column table the decoder follows
//! - `model` — the decoded `ProcStat` record
//! - `collector` — read-then-decode layer over a mockable `FileSystem`
//!
//! The stat record is a single line with a pathological shape: the executable
//! name sits between the fixed integer columns, wrapped in parentheses, and
//! may itself contain spaces, parentheses or newlines. The decoder isolates it
//! by scanning to the *last* `)` in the buffer, then walks the remaining
//! whitespace-separated tokens against [`schema::TAIL_FIELDS`].
//!
//! Decoding is pure: no shared state, no I/O, safe to call from any number of
//! threads. Each call yields an independent snapshot; callers computing deltas
//! (CPU usage, memory growth) keep their own previous records.

pub mod collector;
pub mod model;
pub mod parser;
pub mod schema;

pub use collector::{CollectError, FileSystem, MockFs, RealFs, StatCollector};
pub use model::ProcStat;
pub use parser::{ParseError, decode, parse_proc_stat};
pub use schema::{FieldKind, FieldSpec, TAIL_FIELDS};
