//! Scene-level ray hit-testing.
//!
//! A scene BVH over the decorations' world-space bounds narrows a ray down
//! to candidate decorations, then each candidate's own triangle BVH is
//! queried in model space.

use raypick_bvh::Bvh;
use raypick_geom::{inverse_transform_line, Aabb, Line, RayCollision};
use raypick_math::{Transform, Vec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::decoration::SceneDecoration;
use crate::mesh::Mesh;

/// A ray hit against a decoration's triangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneCollision {
    /// [`SceneDecoration::id`] of the decoration that was hit.
    pub decoration_id: String,
    /// Position of the decoration in the slice that was queried.
    pub decoration_index: usize,
    /// World-space hit position.
    pub position: Vec3,
    /// World-space distance from the ray origin to `position`.
    pub distance: f32,
}

/// Rebuild `bvh` over the world-space bounds of `decorations`.
///
/// Prim ids are positions in `decorations`.
pub fn update_scene_bvh(decorations: &[SceneDecoration], bvh: &mut Bvh) {
    let aabbs: Vec<Aabb> = decorations.iter().map(SceneDecoration::world_aabb).collect();
    bvh.build_from_aabbs(&aabbs);

    debug!(
        decorations = decorations.len(),
        nodes = bvh.nodes().len(),
        "updated scene BVH"
    );
}

/// Closest hit between a world-space ray and a mesh placed with `transform`.
///
/// The ray is mapped into model space, so the mesh's own BVH is reused
/// regardless of placement. The returned distance is measured in world
/// space from `world_ray.origin`.
pub fn get_closest_worldspace_ray_collision(
    mesh: &Mesh,
    transform: &Transform,
    world_ray: &Line,
) -> Option<RayCollision> {
    let model_ray = inverse_transform_line(world_ray, transform);
    let hit = mesh.get_closest_ray_collision(&model_ray)?;

    let position = transform.transform_point(&hit.position);
    let distance = (position - world_ray.origin).norm();
    Some(RayCollision::new(distance, position))
}

/// Every decoration whose triangles a world-space ray hits.
///
/// `bvh` must have been built from `decorations` with [`update_scene_bvh`].
/// Results come out in the scene BVH's depth-first order, not sorted by
/// distance. Candidates whose id falls outside `decorations` are skipped.
pub fn get_all_scene_collisions(
    bvh: &Bvh,
    decorations: &[SceneDecoration],
    world_ray: &Line,
) -> Vec<SceneCollision> {
    let candidates = bvh.get_ray_aabb_collisions(world_ray);

    let collisions: Vec<SceneCollision> = candidates
        .iter()
        .filter_map(|c| {
            let decoration = decorations.get(c.id)?;
            let hit = get_closest_worldspace_ray_collision(
                &decoration.mesh,
                &decoration.transform,
                world_ray,
            )?;
            Some(SceneCollision {
                decoration_id: decoration.id.clone(),
                decoration_index: c.id,
                position: hit.position,
                distance: hit.distance,
            })
        })
        .collect();

    trace!(
        candidates = candidates.len(),
        hits = collisions.len(),
        "scene ray query"
    );

    collisions
}

/// The closest of [`get_all_scene_collisions`].
pub fn get_closest_scene_collision(
    bvh: &Bvh,
    decorations: &[SceneDecoration],
    world_ray: &Line,
) -> Option<SceneCollision> {
    get_all_scene_collisions(bvh, decorations, world_ray)
        .into_iter()
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use raypick_math::Quat;
    use std::sync::Arc;

    fn cube_at(cube: &Arc<Mesh>, id: &str, x: f32) -> SceneDecoration {
        let t = Transform::identity().with_position(Vec3::new(x, 0.0, 0.0));
        SceneDecoration::new(Arc::clone(cube), t).with_id(id)
    }

    fn row_of_cubes() -> Vec<SceneDecoration> {
        let cube = Arc::new(Mesh::unit_cube());
        vec![
            cube_at(&cube, "a", 0.0),
            cube_at(&cube, "b", 5.0),
            cube_at(&cube, "c", 10.0),
        ]
    }

    #[test]
    fn test_worldspace_collision_scaled() {
        let mesh = Mesh::unit_cube();
        let t = Transform::identity()
            .with_scale(Vec3::new(1.0, 1.0, 3.0))
            .with_position(Vec3::new(0.0, 0.0, 2.0));
        let ray = Line::new(Vec3::new(0.3, -0.2, 20.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = get_closest_worldspace_ray_collision(&mesh, &t, &ray).unwrap();
        // top face at z = 2 + 3
        assert_relative_eq!(hit.position, Vec3::new(0.3, -0.2, 5.0), epsilon = 1e-5);
        assert_relative_eq!(hit.distance, 15.0, epsilon = 1e-5);
    }

    #[test]
    fn test_worldspace_collision_rotated() {
        let mesh = Mesh::unit_cube();
        let t = Transform::identity()
            .with_rotation(Quat::from_axis_angle(&Vec3::z_axis(), std::f32::consts::FRAC_PI_4))
            .with_position(Vec3::new(0.0, 3.0, 0.0));
        // approach along -x just above the corner edge at x = sqrt(2): the
        // face there satisfies x + (y - 3) = sqrt(2)
        let ray = Line::new(Vec3::new(10.0, 3.2, 0.0), Vec3::new(-2.0, 0.0, 0.0));
        let hit = get_closest_worldspace_ray_collision(&mesh, &t, &ray).unwrap();
        let x = std::f32::consts::SQRT_2 - 0.2;
        assert_relative_eq!(hit.position, Vec3::new(x, 3.2, 0.0), epsilon = 1e-4);
        assert_relative_eq!(hit.distance, 10.0 - x, epsilon = 1e-4);
    }

    #[test]
    fn test_worldspace_collision_miss() {
        let mesh = Mesh::unit_cube();
        let ray = Line::new(Vec3::new(0.0, 5.0, 20.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(get_closest_worldspace_ray_collision(&mesh, &Transform::identity(), &ray).is_none());
    }

    #[test]
    fn test_update_scene_bvh() {
        let decorations = row_of_cubes();
        let mut bvh = Bvh::new();
        update_scene_bvh(&decorations, &mut bvh);
        assert_eq!(bvh.prims().len(), 3);
        assert_eq!(
            bvh.root_aabb(),
            Some(Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(11.0, 1.0, 1.0)))
        );

        update_scene_bvh(&[], &mut bvh);
        assert!(bvh.is_empty());
    }

    #[test]
    fn test_all_scene_collisions_along_row() {
        let decorations = row_of_cubes();
        let mut bvh = Bvh::new();
        update_scene_bvh(&decorations, &mut bvh);

        let ray = Line::new(Vec3::new(-10.0, 0.2, 0.1), Vec3::new(1.0, 0.0, 0.0));
        let mut hits = get_all_scene_collisions(&bvh, &decorations, &ray);
        assert_eq!(hits.len(), 3);
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        let ids: Vec<&str> = hits.iter().map(|h| h.decoration_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(hits[1].decoration_index, 1);
        assert_relative_eq!(hits[0].distance, 9.0, epsilon = 1e-5);
        assert_relative_eq!(hits[2].position, Vec3::new(9.0, 0.2, 0.1), epsilon = 1e-5);

        let closest = get_closest_scene_collision(&bvh, &decorations, &ray).unwrap();
        assert_eq!(closest.decoration_id, "a");
    }

    #[test]
    fn test_scene_ray_between_decorations_misses() {
        let decorations = row_of_cubes();
        let mut bvh = Bvh::new();
        update_scene_bvh(&decorations, &mut bvh);

        let ray = Line::new(Vec3::new(2.5, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(get_all_scene_collisions(&bvh, &decorations, &ray).is_empty());
        assert!(get_closest_scene_collision(&bvh, &decorations, &ray).is_none());
    }

    #[test]
    fn test_broad_phase_hit_narrow_phase_miss() {
        // a single triangle covers only half of its bounding box
        let verts = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let tri = Arc::new(Mesh::new(verts, vec![0u16, 1, 2]).unwrap());
        let decorations = vec![SceneDecoration::new(tri, Transform::identity()).with_id("tri")];
        let mut bvh = Bvh::new();
        update_scene_bvh(&decorations, &mut bvh);

        let ray = Line::new(Vec3::new(0.9, 0.9, 1.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(bvh.get_ray_aabb_collisions(&ray).len(), 1);
        assert!(get_all_scene_collisions(&bvh, &decorations, &ray).is_empty());

        let ray = Line::new(Vec3::new(0.1, 0.1, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let hits = get_all_scene_collisions(&bvh, &decorations, &ray);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].decoration_id, "tri");
    }

    #[test]
    fn test_stale_scene_bvh_skips_missing_decorations() {
        let decorations = row_of_cubes();
        let mut bvh = Bvh::new();
        update_scene_bvh(&decorations, &mut bvh);

        let ray = Line::new(Vec3::new(-10.0, 0.2, 0.1), Vec3::new(1.0, 0.0, 0.0));
        let hits = get_all_scene_collisions(&bvh, &decorations[..2], &ray);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.decoration_index < 2));
    }
}
