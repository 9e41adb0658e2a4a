// src/render/snake_renderer.rs
//
// Geometry for drawing the chain. Each piece's frame is derived from
// the previous one by moving to the piece centre, reorienting, stepping
// one unit (plus the explode gap) and pivoting by 180 degrees plus the
// joint's live angle.

use nannou::prelude::*;

use crate::models::NODE_COUNT;

/// One transform per piece; the first piece sits at the origin.
pub fn node_transforms(nodes: &[f32; NODE_COUNT], explode: f32) -> Vec<Mat4> {
    let mut transforms = Vec::with_capacity(NODE_COUNT);
    let mut m = Mat4::IDENTITY;

    for &angle in nodes.iter() {
        transforms.push(m);
        m = m * Mat4::from_translation(vec3(0.5, 0.5, 0.5))
            * Mat4::from_rotation_z(-90.0_f32.to_radians())
            * Mat4::from_translation(vec3(1.0 + explode, 0.0, 0.0))
            * Mat4::from_rotation_x((180.0 + angle).to_radians())
            * Mat4::from_translation(vec3(-0.5, -0.5, -0.5));
    }

    transforms
}

/// Centre point of each piece in chain space.
pub fn node_centres(transforms: &[Mat4]) -> Vec<Vec3> {
    transforms
        .iter()
        .map(|m| m.transform_point3(vec3(0.5, 0.5, 0.5)))
        .collect()
}

pub fn centre_of_mass(centres: &[Vec3]) -> Vec3 {
    let sum: Vec3 = centres.iter().sum();
    sum / centres.len() as f32
}

/// Spin the chain by the two continuous rotation angles (degrees) and
/// drop to screen coordinates orthographically.
pub fn project(point: Vec3, rot_y: f32, rot_z: f32, scale: f32) -> Point2 {
    let spun =
        Mat4::from_rotation_y(rot_y.to_radians()) * Mat4::from_rotation_z(rot_z.to_radians());
    let p = spun.transform_point3(point);
    pt2(p.x * scale, p.y * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_transform_per_piece() {
        let transforms = node_transforms(&[0.0; NODE_COUNT], 0.0);
        assert_eq!(transforms.len(), NODE_COUNT);
        assert_eq!(transforms[0], Mat4::IDENTITY);
    }

    #[test]
    fn first_centre_is_the_unit_cell_centre() {
        let transforms = node_transforms(&[0.0; NODE_COUNT], 0.0);
        let centres = node_centres(&transforms);
        assert!(centres[0].abs_diff_eq(vec3(0.5, 0.5, 0.5), 1e-5));
    }

    #[test]
    fn straight_chain_spaces_pieces_one_unit_apart() {
        let transforms = node_transforms(&[0.0; NODE_COUNT], 0.0);
        let centres = node_centres(&transforms);
        for pair in centres.windows(2) {
            let gap = (pair[1] - pair[0]).length();
            assert!((gap - 1.0).abs() < 1e-4, "gap was {}", gap);
        }
    }

    #[test]
    fn explode_widens_the_gaps() {
        let tight = node_centres(&node_transforms(&[0.0; NODE_COUNT], 0.0));
        let wide = node_centres(&node_transforms(&[0.0; NODE_COUNT], 0.5));
        let tight_gap = (tight[1] - tight[0]).length();
        let wide_gap = (wide[1] - wide[0]).length();
        assert!(wide_gap > tight_gap);
    }

    #[test]
    fn projection_without_spin_is_orthographic() {
        let p = project(vec3(1.0, 2.0, 3.0), 0.0, 0.0, 10.0);
        assert!((p.x - 10.0).abs() < 1e-4);
        assert!((p.y - 20.0).abs() < 1e-4);
    }
}
