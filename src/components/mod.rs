//! UI components: the particle background and the landing page behaviours.

pub mod landing;
pub mod particle_field;
