//! The decoded `/proc/[pid]/stat` record.

use serde::{Deserialize, Serialize};

/// One decoded snapshot of `/proc/[pid]/stat`.
///
/// A plain value: every decode produces a fresh, fully-populated record and
/// nothing mutates it afterwards. Callers computing deltas keep their own
/// previous snapshots.
///
/// Field numbers refer to the column order of `man 5 proc`. Times are in
/// clock ticks (USER_HZ); converting to seconds is the caller's business.
/// The mix of signed and unsigned fields mirrors the kernel's structure and
/// is preserved as-is.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ProcStat {
    /// (1) Process ID.
    pub pid: i32,

    /// (2) Executable name, as found between the parentheses. Usually
    /// truncated to 16 bytes by the kernel, but may contain spaces,
    /// parentheses, even newlines.
    pub comm: String,

    /// (3) Scheduling state: `R` running, `S` interruptible sleep, `D`
    /// uninterruptible disk wait, `Z` zombie, `T` traced or stopped, `W`
    /// paging. Kernels have added codes over time; unknown ones are kept
    /// verbatim rather than rejected.
    pub state: char,

    /// (4) PID of the parent.
    pub ppid: i32,

    /// (5) Process group ID.
    pub pgrp: i32,

    /// (6) Session ID.
    pub session: i32,

    /// (7) Controlling terminal (major/minor device numbers packed into
    /// bit ranges).
    pub tty_nr: i32,

    /// (8) Foreground process group of the controlling terminal, or -1.
    pub tpgid: i32,

    /// (9) Kernel flags word (PF_* bits).
    pub flags: u32,

    /// (10) Minor faults: page reclaims that needed no disk I/O.
    pub minflt: i64,

    /// (11) Minor faults of waited-for children.
    pub cminflt: u64,

    /// (12) Major faults: page loads that required disk I/O.
    pub majflt: u64,

    /// (13) Major faults of waited-for children.
    pub cmajflt: u64,

    /// (14) Time scheduled in user mode, in clock ticks. Includes
    /// guest_time so tick-summing callers do not lose guest time.
    pub utime: u64,

    /// (15) Time scheduled in kernel mode, in clock ticks.
    pub stime: u64,

    /// (16) User-mode ticks of waited-for children. May go negative on
    /// wraparound/exited-child accounting.
    pub cutime: i64,

    /// (17) Kernel-mode ticks of waited-for children.
    pub cstime: i64,

    /// (18) Scheduling priority as the kernel stores it: for real-time
    /// policies the negated rt priority minus one (-2 to -100), otherwise
    /// the raw nice value in kernel form (0 to 39).
    pub priority: i64,

    /// (19) Nice value, 19 (low) to -20 (high).
    pub nice: i64,

    /// (20) Number of threads.
    pub num_threads: i64,

    /// (21) Jiffies until the next SIGALRM from an interval timer; hard
    /// coded to 0 since Linux 2.6.17.
    pub itrealvalue: i64,

    /// (22) Time the process started after boot, in clock ticks.
    pub starttime: u64,

    /// (23) Virtual memory size in bytes.
    pub vsize: u64,

    /// (24) Resident set size in pages (text, data and stack actually in
    /// memory; demand-loaded and swapped-out pages excluded).
    pub rss: u64,

    /// (25) Current soft limit on rss in bytes (RLIMIT_RSS).
    pub rsslim: u64,

    /// (26) Address above which program text can run.
    pub startcode: u64,

    /// (27) Address below which program text can run.
    pub endcode: u64,

    /// (28) Address of the bottom of the stack.
    pub startstack: u64,

    /// (29) Current stack pointer, from the process's kernel stack page.
    pub kstkesp: u64,

    /// (30) Current instruction pointer.
    pub kstkeip: u64,

    /// (31) Pending signals bitmap, as a decimal number. Obsolete for
    /// real-time signals.
    pub signal: u64,

    /// (32) Blocked signals bitmap.
    pub blocked: u64,

    /// (33) Ignored signals bitmap.
    pub sigignore: u64,

    /// (34) Caught signals bitmap.
    pub sigcatch: u64,

    /// (35) Address of the syscall the process is waiting in, if any.
    pub wchan: u64,

    /// (36) Pages swapped (not maintained).
    pub nswap: u64,

    /// (37) Cumulative nswap of children (not maintained).
    pub cnswap: u64,

    /// (38) Signal sent to the parent on death.
    pub exit_signal: i32,

    /// (39) CPU number last executed on.
    pub processor: i32,

    /// (40) Real-time scheduling priority, 1-99 for real-time policies,
    /// 0 otherwise.
    pub rt_priority: usize,

    /// (41) Scheduling policy (SCHED_* constants).
    pub policy: usize,

    /// (42) Aggregated block I/O delay, in clock ticks.
    pub delayacct_blkio_ticks: u64,

    /// (43) Guest time: ticks spent running a virtual CPU.
    pub guest_time: u64,

    /// (44) Guest time of waited-for children.
    pub cguest_time: usize,
}
