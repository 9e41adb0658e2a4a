pub mod catalog;
pub mod data_model;

pub use data_model::{Catalog, NodeAngle, SnakeModel, NODE_COUNT};
