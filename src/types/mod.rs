pub mod error;
pub mod utils;

pub use error::{DocError, ErrorCategory, ErrorClassifier, LlmError, Result};
pub use utils::{
    decode_lossy, json_display, json_keys, log_filter_error, title_case, truncate_chars,
    yaml_display,
};
