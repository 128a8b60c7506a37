//! Pre-built mock filesystem scenarios for testing.
//!
//! Realistic `/proc/[pid]/stat` contents for common process shapes. All
//! records carry the full 41-column tail a current kernel writes.

use super::filesystem::MockFs;

impl MockFs {
    /// Creates a typical system: init (pid 1), a shell, and a kernel thread.
    pub fn typical_system() -> Self {
        let mut fs = Self::new();

        fs.add_stat(
            1,
            "1 (systemd) S 0 1 1 0 -1 4194560 45132 1745528 89 1523 201 186 2900 770 20 0 1 0 5 175247360 2384 18446744073709551615 94093520850944 94093521521349 140726723600528 0 0 0 671173123 4096 1260 1 0 0 17 4 0 0 12 0 0\n",
        );
        fs.add_stat(
            1000,
            "1000 (bash) S 999 1000 1000 34816 1205 4194304 5861 21928 0 3 13 8 24 15 20 0 1 0 100000 11468800 1422 18446744073709551615 94184585424896 94184586342561 140729673131600 0 0 0 65536 3670020 1266777851 0 0 0 17 2 0 0 5 0 0\n",
        );
        fs.add_stat(
            1001,
            "1001 (kworker/0:1) I 2 0 0 0 -1 69238880 0 0 0 0 0 9 0 0 20 0 1 0 30 0 0 18446744073709551615 0 0 0 0 0 0 0 2147483647 0 0 0 0 17 0 0 0 0 0 0\n",
        );

        fs
    }

    /// Processes whose comm fields abuse the delimiters: embedded spaces and
    /// parentheses.
    pub fn with_special_names() -> Self {
        let mut fs = Self::new();

        fs.add_stat(
            5000,
            "5000 (Web Content) S 4999 5000 4999 0 -1 4194304 100000 0 500 0 5000 1000 0 0 20 0 20 0 500000 2000000000 50000 18446744073709551615 0 0 0 0 0 0 0 0 0 0 0 0 17 0 0 0 0 0 0\n",
        );
        fs.add_stat(
            5001,
            "5001 (worker (pool 2)) R 1 5001 5001 0 -1 4194304 1000 0 0 0 10 5 0 0 20 0 4 0 500100 10000000 1000 18446744073709551615 0 0 0 0 0 0 0 0 0 0 0 0 17 1 0 0 0 0 0\n",
        );

        fs
    }

    /// A reaped-but-unwaited child: state `Z`, memory fields all zero.
    pub fn with_zombie_process() -> Self {
        let mut fs = Self::new();

        fs.add_stat(
            4000,
            "4000 (defunct) Z 1000 4000 1000 0 -1 4194308 95 0 0 0 2 1 0 0 20 0 1 0 400000 0 0 18446744073709551615 0 0 0 0 0 0 0 0 0 0 0 0 -1 0 0 0 0 0 0\n",
        );

        fs
    }
}
