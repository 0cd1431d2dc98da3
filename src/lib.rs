pub mod camera;
pub mod cli;
pub mod disc;
pub mod frame;
pub mod mesh;
pub mod renderer;
pub mod scene;
pub mod texture;
pub mod types;
pub mod window;

pub use disc::{generate, DiscParams};
pub use mesh::GridMesh;
pub use scene::Scene;
