//! The positional schema of the stat record.
//!
//! Column order and typing follow `man 5 proc` and the kernel's own
//! structure. The signedness is deliberately uneven (minflt is signed while
//! cminflt is not, and so on) because the kernel's is; the decoder preserves
//! it rather than normalizing.

/// Declared signedness and width of a stat column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 32-bit integer.
    I32,
    /// Unsigned 64-bit integer.
    U64,
    /// Signed 64-bit integer.
    I64,
    /// Unsigned machine word (`usize`), for the columns the kernel ABI
    /// declares as plain `unsigned int`/`long` of platform width.
    Uword,
    /// A single pass-through character (the state code).
    Char,
}

/// One column of the record: its kernel name and declared kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, kind }
}

/// The state column (field 3), decoded by the tokenizer as part of the
/// record head.
pub const STATE: FieldSpec = field("state", FieldKind::Char);

/// The columns that follow the state code, in kernel order (fields 4 to 44
/// of `man 5 proc`).
///
/// Kernels have appended columns over time; the decoder reads exactly this
/// prefix and ignores anything after it, so supporting a longer record is a
/// change to this table, not to the parsing code. A record with fewer tokens
/// than this table is rejected outright.
pub const TAIL_FIELDS: &[FieldSpec] = &[
    field("ppid", FieldKind::I32),
    field("pgrp", FieldKind::I32),
    field("session", FieldKind::I32),
    field("tty_nr", FieldKind::I32),
    field("tpgid", FieldKind::I32),
    field("flags", FieldKind::U32),
    field("minflt", FieldKind::I64),
    field("cminflt", FieldKind::U64),
    field("majflt", FieldKind::U64),
    field("cmajflt", FieldKind::U64),
    field("utime", FieldKind::U64),
    field("stime", FieldKind::U64),
    field("cutime", FieldKind::I64),
    field("cstime", FieldKind::I64),
    field("priority", FieldKind::I64),
    field("nice", FieldKind::I64),
    field("num_threads", FieldKind::I64),
    field("itrealvalue", FieldKind::I64),
    field("starttime", FieldKind::U64),
    field("vsize", FieldKind::U64),
    field("rss", FieldKind::U64),
    field("rsslim", FieldKind::U64),
    field("startcode", FieldKind::U64),
    field("endcode", FieldKind::U64),
    field("startstack", FieldKind::U64),
    field("kstkesp", FieldKind::U64),
    field("kstkeip", FieldKind::U64),
    field("signal", FieldKind::U64),
    field("blocked", FieldKind::U64),
    field("sigignore", FieldKind::U64),
    field("sigcatch", FieldKind::U64),
    field("wchan", FieldKind::U64),
    field("nswap", FieldKind::U64),
    field("cnswap", FieldKind::U64),
    field("exit_signal", FieldKind::I32),
    field("processor", FieldKind::I32),
    field("rt_priority", FieldKind::Uword),
    field("policy", FieldKind::Uword),
    field("delayacct_blkio_ticks", FieldKind::U64),
    field("guest_time", FieldKind::U64),
    field("cguest_time", FieldKind::Uword),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_covers_fields_4_to_44() {
        assert_eq!(TAIL_FIELDS.len(), 41);
        assert_eq!(TAIL_FIELDS[0].name, "ppid");
        assert_eq!(TAIL_FIELDS[40].name, "cguest_time");
    }

    #[test]
    fn test_fault_counter_signedness_is_uneven() {
        // The kernel's own quirk: self minor faults signed, children unsigned.
        let minflt = TAIL_FIELDS.iter().find(|f| f.name == "minflt").unwrap();
        let cminflt = TAIL_FIELDS.iter().find(|f| f.name == "cminflt").unwrap();
        assert_eq!(minflt.kind, FieldKind::I64);
        assert_eq!(cminflt.kind, FieldKind::U64);
    }

    #[test]
    fn test_state_is_a_passthrough_char() {
        assert_eq!(STATE.kind, FieldKind::Char);
    }
}
