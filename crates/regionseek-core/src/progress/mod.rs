mod clock;
mod feed;
mod loading;
mod poller;
mod tracker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use feed::{ProgressLogSource, ProgressReport, ProgressSource, ScriptedSource};
pub use loading::LoadingState;
pub use poller::{apply_event, DrainSummary, PollEvent, ProgressPoller};
pub use tracker::{visibility, ProgressPhase, ProgressSnapshot, ProgressTracker};
