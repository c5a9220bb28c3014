//! Geometry and data engine of a terrain viewer: elevation grids and their
//! file format, altitude interpolation, terrain and annotation meshes, and
//! orthographic camera navigation.

pub mod camera;
pub mod dem;
pub mod mesh;
pub mod settings;
pub mod viewer;

#[cfg(test)]
mod test;
