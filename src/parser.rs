//! Tokenizer and decoder for the `/proc/[pid]/stat` record format.
//!
//! The format is tricky because the comm field can contain spaces and
//! parentheses. The record head is `pid (comm) state`; comm is everything
//! between the first `(` and the *last* `)` in the buffer. That is the
//! documented policy, not a heuristic to improve on: it handles names with
//! embedded parentheses, and it keeps the format's residual ambiguity (a
//! name ending in `) ` followed by text that mimics the numeric tail can
//! still misparse — an inherited limitation of the source format).
//!
//! Everything after the state code is split on whitespace and consumed
//! against [`crate::schema::TAIL_FIELDS`] in order. Decoding is atomic: a record
//! decodes completely or not at all, and extra trailing tokens from newer
//! kernels are ignored.

use crate::model::ProcStat;
use crate::schema::{FieldKind, FieldSpec, TAIL_FIELDS};
use std::fmt;
use std::str::FromStr;

/// Error type for decode failures.
///
/// Field decode failures name the offending column and carry the token
/// verbatim, so a caller can tell which one of the 41 tail columns broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The caller supplied a pid the kernel cannot report on (zero is the
    /// idle/invalid placeholder, negatives are not pids). Raised before the
    /// buffer is looked at.
    InvalidPid(i32),
    /// A structural delimiter was missing; the message names which one.
    Malformed(&'static str),
    /// A token did not decode as its column's declared kind: non-numeric,
    /// wrong sign, or out of the declared width. Never wrapped or truncated.
    InvalidField { field: &'static str, token: String },
    /// The record ended before the schema did.
    NotEnoughFields { expected: usize, got: usize },
    /// The record's own pid disagrees with the pid supplied as context.
    PidMismatch { expected: i32, found: i32 },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidPid(pid) => write!(f, "cannot decode stat for pid {}", pid),
            ParseError::Malformed(what) => write!(f, "malformed stat record: {}", what),
            ParseError::InvalidField { field, token } => {
                write!(f, "invalid {} field: {:?}", field, token)
            }
            ParseError::NotEnoughFields { expected, got } => {
                write!(f, "not enough fields in stat: expected {}, got {}", expected, got)
            }
            ParseError::PidMismatch { expected, found } => {
                write!(f, "stat record is for pid {}, expected {}", found, expected)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Walks the tail token slice and the schema table in lockstep.
///
/// The token count is checked against the table before the cursor is built,
/// so advancing never runs off the end; extra tokens past the table are
/// simply never visited.
struct FieldCursor<'a> {
    tokens: &'a [&'a str],
    pos: usize,
}

impl<'a> FieldCursor<'a> {
    fn new(tokens: &'a [&'a str]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn next(&mut self, kind: FieldKind) -> (&'static FieldSpec, &'a str) {
        let spec = &TAIL_FIELDS[self.pos];
        debug_assert_eq!(spec.kind, kind, "decode out of step with schema at {}", spec.name);
        let token = self.tokens[self.pos];
        self.pos += 1;
        (spec, token)
    }

    fn decode<T: FromStr>(&mut self, kind: FieldKind) -> Result<T, ParseError> {
        let (spec, token) = self.next(kind);
        token.parse().map_err(|_| ParseError::InvalidField {
            field: spec.name,
            token: token.to_string(),
        })
    }

    fn u32(&mut self) -> Result<u32, ParseError> {
        self.decode(FieldKind::U32)
    }

    fn i32(&mut self) -> Result<i32, ParseError> {
        self.decode(FieldKind::I32)
    }

    fn u64(&mut self) -> Result<u64, ParseError> {
        self.decode(FieldKind::U64)
    }

    fn i64(&mut self) -> Result<i64, ParseError> {
        self.decode(FieldKind::I64)
    }

    fn uword(&mut self) -> Result<usize, ParseError> {
        self.decode(FieldKind::Uword)
    }
}

/// Decodes one `/proc/[pid]/stat` record with the pid as cross-check
/// context.
///
/// Rejects `pid <= 0` before touching the buffer, then parses, then verifies
/// the buffer's own leading pid against the argument. The pid is context
/// only; it is never substituted into the record.
pub fn decode(pid: i32, content: &str) -> Result<ProcStat, ParseError> {
    if pid <= 0 {
        return Err(ParseError::InvalidPid(pid));
    }
    let stat = parse_proc_stat(content)?;
    if stat.pid != pid {
        return Err(ParseError::PidMismatch { expected: pid, found: stat.pid });
    }
    Ok(stat)
}

/// Parses one `/proc/[pid]/stat` record.
///
/// The buffer must hold the entire record: the comm span cannot be found
/// without scanning to the final `)`, so there is no streaming variant.
pub fn parse_proc_stat(content: &str) -> Result<ProcStat, ParseError> {
    // Head: pid, then comm between the first '(' and the last ')'.
    let open = content
        .find('(')
        .ok_or(ParseError::Malformed("no '(' opening the comm field"))?;
    let close = content
        .rfind(')')
        .ok_or(ParseError::Malformed("no ')' closing the comm field"))?;
    if close < open {
        return Err(ParseError::Malformed("')' precedes '('"));
    }

    let pid: i32 = content[..open]
        .trim()
        .parse()
        .map_err(|_| ParseError::Malformed("no pid digits before the comm field"))?;

    let comm = content[open + 1..close].to_string();

    // Exactly one space, then a single-character state code.
    let rest = content[close + 1..]
        .strip_prefix(' ')
        .ok_or(ParseError::Malformed("no space after the comm field"))?;
    let mut chars = rest.chars();
    let state = chars
        .next()
        .filter(|c| !c.is_whitespace())
        .ok_or(ParseError::Malformed("no state code after the comm field"))?;
    if chars.next().is_some_and(|c| !c.is_whitespace()) {
        return Err(ParseError::Malformed("state code is not a single character"));
    }

    // Tail: whitespace-separated numeric columns in schema order.
    let tail: Vec<&str> = rest[state.len_utf8()..].split_whitespace().collect();
    if tail.len() < TAIL_FIELDS.len() {
        return Err(ParseError::NotEnoughFields {
            expected: TAIL_FIELDS.len(),
            got: tail.len(),
        });
    }

    let mut cur = FieldCursor::new(&tail);
    Ok(ProcStat {
        pid,
        comm,
        state,
        ppid: cur.i32()?,
        pgrp: cur.i32()?,
        session: cur.i32()?,
        tty_nr: cur.i32()?,
        tpgid: cur.i32()?,
        flags: cur.u32()?,
        minflt: cur.i64()?,
        cminflt: cur.u64()?,
        majflt: cur.u64()?,
        cmajflt: cur.u64()?,
        utime: cur.u64()?,
        stime: cur.u64()?,
        cutime: cur.i64()?,
        cstime: cur.i64()?,
        priority: cur.i64()?,
        nice: cur.i64()?,
        num_threads: cur.i64()?,
        itrealvalue: cur.i64()?,
        starttime: cur.u64()?,
        vsize: cur.u64()?,
        rss: cur.u64()?,
        rsslim: cur.u64()?,
        startcode: cur.u64()?,
        endcode: cur.u64()?,
        startstack: cur.u64()?,
        kstkesp: cur.u64()?,
        kstkeip: cur.u64()?,
        signal: cur.u64()?,
        blocked: cur.u64()?,
        sigignore: cur.u64()?,
        sigcatch: cur.u64()?,
        wchan: cur.u64()?,
        nswap: cur.u64()?,
        cnswap: cur.u64()?,
        exit_signal: cur.i32()?,
        processor: cur.i32()?,
        rt_priority: cur.uword()?,
        policy: cur.uword()?,
        delayacct_blkio_ticks: cur.u64()?,
        guest_time: cur.u64()?,
        cguest_time: cur.uword()?,
    })
}
