//! Aver Report - where assertion output goes and how a run keeps score.
//!
//! Three small pieces, consumed by the dispatcher in `aver_assert`:
//!
//! - `SinkImpl`: enum-dispatched output destination (stdout, capture
//!   buffer, or nowhere)
//! - `Verbosity`: bitflag policy deciding which outcomes are printed
//! - `RunState`: the sticky pass/fail accumulator for one test run
//!
//! All three are plain values handed to the dispatcher at construction.
//! Nothing here is process-wide: two contexts with two buffers observe
//! two independent runs.

mod run_state;
mod sink;
mod verbosity;

pub use run_state::RunState;
pub use sink::{
    buffer_sink, silent_sink, stdout_sink, BufferSink, SharedSink, SinkImpl, StdoutSink,
};
pub use verbosity::Verbosity;
