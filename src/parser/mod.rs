mod finding;
mod unix;

pub use finding::{Finding, Report};
pub use unix::parse_unix_lines;
