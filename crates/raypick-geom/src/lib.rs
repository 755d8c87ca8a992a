#![warn(missing_docs)]

//! Geometric primitives and ray collision tests for raypick.
//!
//! This crate provides the shapes that rays are tested against
//! ([`Aabb`], [`Triangle`], [`Sphere`], [`Plane`], [`Disc`]), the [`Line`]
//! ray type with its transform and unprojection helpers, and the closed-form
//! ray collision tests in [`collision`].
//!
//! # Example
//!
//! ```
//! use raypick_geom::{collision::get_ray_collision_triangle, Line, Triangle};
//! use raypick_math::Vec3;
//!
//! let tri = Triangle::new(
//!     Vec3::new(-1.0, -1.0, 0.0),
//!     Vec3::new(1.0, -1.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//! );
//! let ray = Line::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
//! let hit = get_ray_collision_triangle(&ray, &tri).unwrap();
//! assert!((hit.distance - 5.0).abs() < 1e-6);
//! ```

mod aabb;
mod index;
mod line;
mod plane;
mod sphere;
mod triangle;

pub mod collision;

pub use aabb::Aabb;
pub use collision::RayCollision;
pub use index::MeshIndex;
pub use line::{
    inverse_transform_line, perspective_unproject_top_left_screen_pos_to_world_ray,
    transform_line, Line,
};
pub use plane::{Disc, Plane};
pub use sphere::{bounding_sphere_of, Sphere};
pub use triangle::Triangle;

pub use raypick_math;
