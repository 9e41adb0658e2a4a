pub mod snake_metrics;

pub use snake_metrics::{analyze, SnakeMetrics};
