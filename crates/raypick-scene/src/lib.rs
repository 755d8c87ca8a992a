#![warn(missing_docs)]

//! Mesh and scene-level ray hit-testing.
//!
//! Builds on [`raypick_bvh`] to answer "what did the user click on?":
//!
//! - [`Mesh`] owns vertex and index buffers plus their triangle BVH.
//! - [`SceneDecoration`] places a shared mesh in the world.
//! - [`update_scene_bvh`] builds a BVH over the decorations' world bounds,
//!   and [`get_closest_scene_collision`] runs a broad phase against it
//!   followed by a narrow phase against each candidate's triangles.
//! - [`draw_bvh`] and friends turn bounding boxes into decorations for
//!   debug rendering, controlled by [`SceneSettings`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use raypick_bvh::Bvh;
//! use raypick_geom::Line;
//! use raypick_math::{Transform, Vec3};
//! use raypick_scene::{get_closest_scene_collision, update_scene_bvh, Mesh, SceneDecoration};
//!
//! let cube = Arc::new(Mesh::unit_cube());
//! let decorations = vec![
//!     SceneDecoration::new(cube.clone(), Transform::identity()).with_id("left"),
//!     SceneDecoration::new(cube, Transform::identity().with_position(Vec3::new(5.0, 0.0, 0.0)))
//!         .with_id("right"),
//! ];
//!
//! let mut scene_bvh = Bvh::new();
//! update_scene_bvh(&decorations, &mut scene_bvh);
//!
//! let ray = Line::new(Vec3::new(5.2, 0.3, 10.0), Vec3::new(0.0, 0.0, -1.0));
//! let hit = get_closest_scene_collision(&scene_bvh, &decorations, &ray).unwrap();
//! assert_eq!(hit.decoration_id, "right");
//! ```

mod collision;
mod debug_draw;
mod decoration;
mod error;
mod mesh;
mod settings;

pub use collision::{
    get_all_scene_collisions, get_closest_scene_collision, get_closest_worldspace_ray_collision,
    update_scene_bvh, SceneCollision,
};
pub use debug_draw::{draw_aabb, draw_aabbs, draw_bvh, draw_bvh_leaf_nodes};
pub use decoration::SceneDecoration;
pub use error::{Result, SceneError};
pub use mesh::{Mesh, MeshIndices};
pub use settings::SceneSettings;
