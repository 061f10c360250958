mod greet;
mod health_check;
mod metrics;
mod simple_greet;

pub use greet::*;
pub use health_check::*;
pub use metrics::*;
pub use simple_greet::*;
