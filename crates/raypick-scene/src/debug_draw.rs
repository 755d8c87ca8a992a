//! Debug decorations for visualizing bounding boxes and BVHes.

use std::sync::Arc;

use raypick_bvh::Bvh;
use raypick_geom::Aabb;
use raypick_math::Transform;

use crate::decoration::SceneDecoration;
use crate::mesh::Mesh;
use crate::settings::SceneSettings;

fn aabb_transform(aabb: &Aabb) -> Transform {
    Transform::identity()
        .with_scale(0.5 * aabb.dimensions())
        .with_position(aabb.midpoint())
}

/// A decoration that places `cube_mesh` over `aabb`.
///
/// `cube_mesh` is expected to span `[-1, 1]` on every axis, like
/// [`Mesh::unit_cube`].
pub fn draw_aabb(cube_mesh: &Arc<Mesh>, aabb: &Aabb, color: [f32; 4]) -> SceneDecoration {
    SceneDecoration::new(Arc::clone(cube_mesh), aabb_transform(aabb)).with_color(color)
}

/// One decoration per box in `aabbs`.
pub fn draw_aabbs(
    cube_mesh: &Arc<Mesh>,
    aabbs: &[Aabb],
    color: [f32; 4],
    out: &mut Vec<SceneDecoration>,
) {
    out.extend(aabbs.iter().map(|bb| draw_aabb(cube_mesh, bb, color)));
}

/// One decoration per BVH node, in node-array order.
///
/// Does nothing unless `settings.draw_bvh` is set. Uses `settings.bvh_color`.
/// Nodes deeper than `settings.bvh_max_draw_depth` (root is depth 1) are
/// skipped.
pub fn draw_bvh(
    cube_mesh: &Arc<Mesh>,
    bvh: &Bvh,
    settings: &SceneSettings,
    out: &mut Vec<SceneDecoration>,
) {
    if !settings.draw_bvh {
        return;
    }

    let max_depth = settings.bvh_max_draw_depth.unwrap_or(usize::MAX);
    let nodes = bvh.nodes();
    out.extend(
        bvh.iter_depth_first()
            .filter(|&(_, depth)| depth <= max_depth)
            .map(|(idx, _)| draw_aabb(cube_mesh, nodes[idx].bounds(), settings.bvh_color)),
    );
}

/// One decoration per BVH leaf.
pub fn draw_bvh_leaf_nodes(
    cube_mesh: &Arc<Mesh>,
    bvh: &Bvh,
    color: [f32; 4],
    out: &mut Vec<SceneDecoration>,
) {
    out.extend(
        bvh.nodes()
            .iter()
            .filter(|node| node.is_leaf())
            .map(|node| draw_aabb(cube_mesh, node.bounds(), color)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use raypick_math::Vec3;

    fn drawing() -> SceneSettings {
        SceneSettings {
            draw_bvh: true,
            ..Default::default()
        }
    }

    fn boxes(n: usize) -> Vec<Aabb> {
        (0..n)
            .map(|i| {
                let min = Vec3::new(i as f32 * 2.0, 0.0, 0.0);
                Aabb::new(min, min + Vec3::new(1.0, 2.0, 4.0))
            })
            .collect()
    }

    #[test]
    fn test_draw_aabb_covers_box() {
        let cube = Arc::new(Mesh::unit_cube());
        let bb = Aabb::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(3.0, 6.0, 4.0));
        let dec = draw_aabb(&cube, &bb, [1.0, 0.0, 0.0, 1.0]);

        assert_relative_eq!(dec.transform.scale, Vec3::new(1.0, 2.0, 0.5));
        assert_relative_eq!(dec.transform.position, Vec3::new(2.0, 4.0, 3.5));
        assert_eq!(dec.color, [1.0, 0.0, 0.0, 1.0]);

        let world = dec.world_aabb();
        assert_relative_eq!(world.min, bb.min, epsilon = 1e-6);
        assert_relative_eq!(world.max, bb.max, epsilon = 1e-6);
    }

    #[test]
    fn test_draw_bvh_one_per_node() {
        let cube = Arc::new(Mesh::unit_cube());
        let mut bvh = Bvh::new();
        bvh.build_from_aabbs(&boxes(8));

        let mut out = Vec::new();
        draw_bvh(&cube, &bvh, &drawing(), &mut out);
        assert_eq!(out.len(), bvh.nodes().len());

        let root = out[0].world_aabb();
        let expected = bvh.root_aabb().unwrap();
        assert_relative_eq!(root.min, expected.min, epsilon = 1e-5);
        assert_relative_eq!(root.max, expected.max, epsilon = 1e-5);
        assert!(out.iter().all(|d| d.color == [0.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_draw_bvh_max_depth() {
        let cube = Arc::new(Mesh::unit_cube());
        let mut bvh = Bvh::new();
        bvh.build_from_aabbs(&boxes(8));

        let settings = SceneSettings {
            bvh_max_draw_depth: Some(2),
            ..drawing()
        };
        let mut out = Vec::new();
        draw_bvh(&cube, &bvh, &settings, &mut out);
        // root plus its two children
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_draw_empty_bvh() {
        let cube = Arc::new(Mesh::unit_cube());
        let mut out = Vec::new();
        draw_bvh(&cube, &Bvh::new(), &drawing(), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_draw_bvh_disabled() {
        let cube = Arc::new(Mesh::unit_cube());
        let mut bvh = Bvh::new();
        bvh.build_from_aabbs(&boxes(8));

        let mut out = Vec::new();
        draw_bvh(&cube, &bvh, &SceneSettings::default(), &mut out);
        assert!(out.is_empty());

        draw_bvh(&cube, &bvh, &drawing(), &mut out);
        assert_eq!(out.len(), bvh.nodes().len());
    }

    #[test]
    fn test_draw_leaves_and_aabbs() {
        let cube = Arc::new(Mesh::unit_cube());
        let input = boxes(5);
        let mut bvh = Bvh::new();
        bvh.build_from_aabbs(&input);

        let mut out = Vec::new();
        draw_bvh_leaf_nodes(&cube, &bvh, [0.0, 1.0, 0.0, 1.0], &mut out);
        assert_eq!(out.len(), 5);

        draw_aabbs(&cube, &input, [0.0, 0.0, 1.0, 1.0], &mut out);
        assert_eq!(out.len(), 10);
        assert_eq!(out[5].color, [0.0, 0.0, 1.0, 1.0]);
    }
}
