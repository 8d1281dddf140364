pub mod record;
mod util;

pub use record::MetricRecord;
pub use util::*;
