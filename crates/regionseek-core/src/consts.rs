/// Stroke width (in canvas pixels) of the selection outline.
pub const DEFAULT_STROKE_WIDTH: u32 = 2;

/// Selection outline colour, `#42b983` fully opaque.
pub const DEFAULT_STROKE_COLOR: [u8; 4] = [0x42, 0xb9, 0x83, 0xff];

/// Time the progress indicator stays visible after a job reports completion.
pub const DEFAULT_AUTO_HIDE_MS: u64 = 2000;

/// Interval between two progress polls.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Status sentinel that, together with a value of 100, marks a finished job.
pub const STATUS_DONE: &str = "done";

/// Status reported for a failed job.
pub const STATUS_FAILED: &str = "failed";

/// Status reported while a job is running.
pub const STATUS_PROCESSING: &str = "processing";

/// Status reported before the job wrote its first progress line.
pub const STATUS_PENDING: &str = "pending";

/// Status the backend uses for a finished job in its JSON replies.
pub const STATUS_COMPLETED: &str = "completed";

/// Completion value.
pub const PROGRESS_COMPLETE: i32 = 100;

/// Default REST base path.
pub const DEFAULT_API_BASE: &str = "/api";

/// Default request timeout for REST calls.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Default number of results requested from `POST /search`.
pub const DEFAULT_TOP_K: u32 = 10;

/// Default message shown by a busy indicator.
pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";
