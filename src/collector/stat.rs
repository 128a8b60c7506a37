//! Read-then-decode collector for `/proc/[pid]/stat`.

use crate::collector::traits::FileSystem;
use crate::model::ProcStat;
use crate::parser::{self, ParseError};
use std::fmt;
use std::io;
use std::path::Path;
use tracing::debug;

/// Error type for collection failures.
#[derive(Debug)]
pub enum CollectError {
    /// The pid cannot exist (zero or negative); nothing was read.
    InvalidPid(i32),
    /// The process vanished between snapshot requests.
    ProcessGone(i32),
    /// I/O error reading the stat file.
    Io(io::Error),
    /// The record was read but did not decode.
    Parse(ParseError),
}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectError::InvalidPid(pid) => write!(f, "cannot collect stat for pid {}", pid),
            CollectError::ProcessGone(pid) => write!(f, "process {} disappeared", pid),
            CollectError::Io(e) => write!(f, "I/O error: {}", e),
            CollectError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CollectError {}

/// Reads and decodes `/proc/[pid]/stat` records.
///
/// Holds a [`FileSystem`] so tests can swap the real `/proc` for a mock, and
/// a configurable proc root for the same reason. Each `collect` call
/// produces an independent snapshot; pollers computing CPU or I/O deltas
/// call it repeatedly and diff the records themselves.
///
/// Any error means "this snapshot is unusable" — nothing is retried here.
/// A process exiting mid-poll is an expected race ([`CollectError::ProcessGone`]);
/// the typical recovery is to wait for the next poll tick.
pub struct StatCollector<F: FileSystem> {
    fs: F,
    proc_path: String,
}

impl<F: FileSystem> StatCollector<F> {
    /// Creates a new stat collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        Self { fs, proc_path: proc_path.into() }
    }

    /// Takes one snapshot of `pid`.
    ///
    /// Rejects non-positive pids before touching the filesystem, then reads
    /// `<proc_path>/<pid>/stat` and decodes it, cross-checking the record's
    /// own pid against the requested one.
    pub fn collect(&self, pid: i32) -> Result<ProcStat, CollectError> {
        if pid <= 0 {
            return Err(CollectError::InvalidPid(pid));
        }

        let path = format!("{}/{}/stat", self.proc_path, pid);
        let content = match self.fs.read_to_string(Path::new(&path)) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(pid, "stat file missing, process gone");
                return Err(CollectError::ProcessGone(pid));
            }
            Err(e) => return Err(CollectError::Io(e)),
        };

        parser::decode(pid, &content).map_err(CollectError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;
    use crate::collector::traits::RealFs;
    use std::io::Write;

    #[test]
    fn test_collect_single_process() {
        let fs = MockFs::typical_system();
        let collector = StatCollector::new(fs, "/proc");

        let stat = collector.collect(1).unwrap();
        assert_eq!(stat.pid, 1);
        assert_eq!(stat.comm, "systemd");
        assert_eq!(stat.state, 'S');
        assert_eq!(stat.ppid, 0);
        assert_eq!(stat.rsslim, u64::MAX);
    }

    #[test]
    fn test_collect_repeatedly_yields_equal_snapshots() {
        let fs = MockFs::typical_system();
        let collector = StatCollector::new(fs, "/proc");

        let first = collector.collect(1000).unwrap();
        let second = collector.collect(1000).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_collect_process_with_special_name() {
        let fs = MockFs::with_special_names();
        let collector = StatCollector::new(fs, "/proc");

        let stat = collector.collect(5000).unwrap();
        assert_eq!(stat.comm, "Web Content");

        let stat = collector.collect(5001).unwrap();
        assert_eq!(stat.comm, "worker (pool 2)");
        assert_eq!(stat.state, 'R');
        assert_eq!(stat.num_threads, 4);
    }

    #[test]
    fn test_collect_zombie_process() {
        let fs = MockFs::with_zombie_process();
        let collector = StatCollector::new(fs, "/proc");

        let stat = collector.collect(4000).unwrap();
        assert_eq!(stat.state, 'Z');
        assert_eq!(stat.vsize, 0);
        assert_eq!(stat.exit_signal, -1);
    }

    #[test]
    fn test_collect_invalid_pid_reads_nothing() {
        // Empty filesystem: any read attempt would surface as ProcessGone.
        let collector = StatCollector::new(MockFs::new(), "/proc");

        assert!(matches!(collector.collect(0), Err(CollectError::InvalidPid(0))));
        assert!(matches!(collector.collect(-1), Err(CollectError::InvalidPid(-1))));
    }

    #[test]
    fn test_collect_process_gone() {
        let fs = MockFs::typical_system();
        let collector = StatCollector::new(fs, "/proc");

        assert!(matches!(
            collector.collect(9999),
            Err(CollectError::ProcessGone(9999))
        ));
    }

    #[test]
    fn test_collect_pid_mismatch() {
        let mut fs = MockFs::new();
        // A stat file whose record belongs to a different pid.
        fs.add_file(
            "/proc/42/stat",
            "43 (impostor) R 1 43 43 0 -1 4194304 0 0 0 0 0 0 0 0 20 0 1 0 10 0 0 18446744073709551615 0 0 0 0 0 0 0 0 0 0 0 0 17 0 0 0 0 0 0",
        );
        let collector = StatCollector::new(fs, "/proc");

        assert!(matches!(
            collector.collect(42),
            Err(CollectError::Parse(ParseError::PidMismatch { expected: 42, found: 43 }))
        ));
    }

    #[test]
    fn test_collect_from_real_filesystem() {
        let root = tempfile::tempdir().unwrap();
        let pid_dir = root.path().join("4242");
        std::fs::create_dir(&pid_dir).unwrap();
        let mut file = std::fs::File::create(pid_dir.join("stat")).unwrap();
        writeln!(
            file,
            "4242 (sleep) S 1 4242 4242 0 -1 4194304 180 0 0 0 0 0 0 0 20 0 1 0 7777 8003584 215 18446744073709551615 0 0 0 0 0 0 0 0 0 0 0 0 17 3 0 0 0 0 0"
        )
        .unwrap();

        let collector = StatCollector::new(RealFs::new(), root.path().to_str().unwrap());
        let stat = collector.collect(4242).unwrap();
        assert_eq!(stat.comm, "sleep");
        assert_eq!(stat.starttime, 7777);
        assert_eq!(stat.processor, 3);
    }
}
