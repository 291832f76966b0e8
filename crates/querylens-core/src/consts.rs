/// Lower bound of the view scale.
pub const MIN_SCALE: f32 = 0.2;

/// Upper bound of the view scale.
pub const MAX_SCALE: f32 = 6.0;

/// Wheel zoom sensitivity `k` in `exp(-delta_y * k)`. One notch of a typical
/// mouse wheel (delta 100) zooms by roughly 14%.
pub const DEFAULT_WHEEL_SENSITIVITY: f32 = 0.0015;

/// Default base URL of the analysis server.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Number of random questions requested per refill of the question cache.
pub const DEFAULT_RANDOM_QUESTION_COUNT: usize = 10;

/// Seconds allowed for establishing a connection to the server.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Seconds allowed for a whole request. Question answering runs an LLM round
/// trip plus plotting on the server, so this is generous.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Substring of a content-type hint that marks vector content.
pub const VECTOR_TYPE_MARKER: &str = "svg";

/// Prefix of an inline vector document carried in the source reference.
pub const INLINE_VECTOR_PREFIX: &str = "data:image/svg+xml";

/// Path suffix of a vector document.
pub const VECTOR_SUFFIX: &str = ".svg";

/// Server path segment under which generated plots are published.
pub const STATIC_SEGMENT: &str = "/static/";

/// Questions shorter than this (after cleanup) are dropped from the cache.
pub const MIN_QUESTION_LEN: usize = 4;
