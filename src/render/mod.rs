pub mod snake_renderer;

pub use snake_renderer::{centre_of_mass, node_centres, node_transforms, project};
