mod output;

pub use output::{Output, preview};
