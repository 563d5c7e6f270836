//! Output policy for a test run.

use bitflags::bitflags;

bitflags! {
    /// Which outcome categories produce printed output.
    ///
    /// The assertion dispatcher consults the two assertion flags. The
    /// test-outcome flags belong to the runner that owns the run; they
    /// live here so a single policy value covers the whole harness.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Verbosity: u8 {
        /// Print assertions that pass.
        const ASSERTION_PASSED = 1 << 0;
        /// Print assertions that fail.
        const ASSERTION_FAILED = 1 << 1;
        /// Print test cases that pass.
        const TEST_PASSED = 1 << 2;
        /// Print test cases that fail.
        const TEST_FAILED = 1 << 3;
        /// Print test cases that were skipped.
        const TEST_SKIPPED = 1 << 4;
        /// Print test cases that hit the runner's timeout.
        const TEST_TIMED_OUT = 1 << 5;

        /// Both assertion outcomes.
        const ASSERTION_ALL =
            Self::ASSERTION_PASSED.bits() | Self::ASSERTION_FAILED.bits();
        /// Every test-case outcome.
        const TEST_ALL = Self::TEST_PASSED.bits()
            | Self::TEST_FAILED.bits()
            | Self::TEST_SKIPPED.bits()
            | Self::TEST_TIMED_OUT.bits();
        /// Failed assertions plus every test-case outcome.
        const DEFAULT = Self::ASSERTION_FAILED.bits() | Self::TEST_ALL.bits();
    }
}
