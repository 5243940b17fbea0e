//! Cross-section frames along the spine.

use config::constants::EPSILON;
use glam::{DMat3, DQuat, DVec3};

/// Computes one orthonormal frame per spine point.
///
/// `spine` holds the distinct points (closing duplicate already removed).
/// Each frame maps the local cross-section plane into model space: column Y
/// follows the spine tangent, column Z is the binormal of the local bend and
/// column X completes the basis as `Y × Z`.
///
/// - Tangent: central difference, wrapping for a closed spine, one-sided at
///   the ends of an open spine.
/// - Binormal: `(next - cur) × (prev - cur)`; the ends of an open spine reuse
///   the first/last three points. A straight stretch keeps the previous
///   binormal; points before the first bend take the first bend's binormal.
///   Consecutive binormals are kept in the same half-space.
/// - A spine with two points or no bend at all falls back to the shortest
///   rotation taking +Y onto the tangent.
pub fn spine_frames(spine: &[DVec3], closed: bool) -> Vec<DMat3> {
    let n = spine.len();
    if n < 2 {
        return vec![DMat3::IDENTITY; n];
    }
    if n == 2 {
        let frame = arc_frame(spine[1] - spine[0]);
        return vec![frame; 2];
    }

    let mut tangents = Vec::with_capacity(n);
    let mut binormals = Vec::with_capacity(n);
    let mut previous = DVec3::ZERO;
    let mut first_bend = None;

    for i in 0..n {
        let (tangent, mut binormal) = if i == 0 && !closed {
            (spine[1] - spine[0], bend(spine[0], spine[1], spine[2]))
        } else if i == n - 1 && !closed {
            (
                spine[n - 1] - spine[n - 2],
                bend(spine[n - 3], spine[n - 2], spine[n - 1]),
            )
        } else {
            let prev = spine[(i + n - 1) % n];
            let next = spine[(i + 1) % n];
            (next - prev, bend(prev, spine[i], next))
        };

        if binormal == DVec3::ZERO {
            if first_bend.is_some() {
                binormal = previous;
            }
        } else {
            first_bend.get_or_insert(i);
            previous = binormal;
        }

        tangents.push(tangent);
        binormals.push(binormal);
    }

    let Some(first_bend) = first_bend else {
        return tangents.into_iter().map(arc_frame).collect();
    };

    let mut frames = Vec::with_capacity(n);
    for i in 0..n {
        if i < first_bend {
            binormals[i] = binormals[first_bend];
        }
        if i > 0 && binormals[i].dot(binormals[i - 1]) < 0.0 {
            binormals[i] = -binormals[i];
        }
        let y = unit_tangent(tangents[i]);
        let z = binormals[i].normalize_or_zero();
        frames.push(DMat3::from_cols(y.cross(z), y, z));
    }
    frames
}

/// Binormal of the turn at `cur`, or zero when the neighbours are collinear.
///
/// Collinearity is judged relative to the segment lengths so the result does
/// not depend on the spine's scale.
fn bend(prev: DVec3, cur: DVec3, next: DVec3) -> DVec3 {
    let (a, b) = (next - cur, prev - cur);
    let binormal = a.cross(b);
    if binormal.length() <= EPSILON * a.length() * b.length() {
        DVec3::ZERO
    } else {
        binormal
    }
}

fn unit_tangent(tangent: DVec3) -> DVec3 {
    tangent.try_normalize().unwrap_or(DVec3::Y)
}

/// Shortest rotation taking +Y onto the tangent.
fn arc_frame(tangent: DVec3) -> DMat3 {
    DMat3::from_quat(DQuat::from_rotation_arc(DVec3::Y, unit_tangent(tangent)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_orthonormal(frame: &DMat3) {
        assert_relative_eq!(frame.determinant(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(frame.x_axis.length(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(frame.x_axis.dot(frame.y_axis), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_two_point_spine_along_y_is_identity() {
        let frames = spine_frames(&[DVec3::ZERO, DVec3::Y * 3.0], false);
        assert_eq!(frames.len(), 2);
        for frame in &frames {
            assert!(frame.abs_diff_eq(DMat3::IDENTITY, 1e-12));
        }
    }

    #[test]
    fn test_two_point_spine_pointing_down() {
        let frames = spine_frames(&[DVec3::ZERO, -DVec3::Y], false);
        let y = frames[0].y_axis;
        assert!(y.abs_diff_eq(-DVec3::Y, 1e-12));
        assert_orthonormal(&frames[0]);
    }

    #[test]
    fn test_two_point_spine_along_x() {
        let frames = spine_frames(&[DVec3::ZERO, DVec3::X], false);
        assert!(frames[0].y_axis.abs_diff_eq(DVec3::X, 1e-12));
        assert_orthonormal(&frames[0]);
    }

    #[test]
    fn test_straight_spine_falls_back() {
        let spine = [DVec3::ZERO, DVec3::Z, DVec3::Z * 2.0, DVec3::Z * 3.0];
        let frames = spine_frames(&spine, false);
        for frame in &frames {
            assert!(frame.y_axis.abs_diff_eq(DVec3::Z, 1e-12));
            assert_orthonormal(frame);
        }
    }

    #[test]
    fn test_bent_spine_tangents_and_binormals() {
        // Right angle in the XY plane
        let spine = [DVec3::ZERO, DVec3::Y, DVec3::new(1.0, 1.0, 0.0)];
        let frames = spine_frames(&spine, false);

        assert!(frames[0].y_axis.abs_diff_eq(DVec3::Y, 1e-12));
        assert!(frames[2].y_axis.abs_diff_eq(DVec3::X, 1e-12));
        // Binormal is perpendicular to the bend plane
        for frame in &frames {
            assert_relative_eq!(frame.z_axis.z.abs(), 1.0, epsilon = 1e-12);
            assert_orthonormal(frame);
        }
        assert!(frames[0].z_axis.abs_diff_eq(frames[1].z_axis, 1e-12));
        assert!(frames[1].z_axis.abs_diff_eq(frames[2].z_axis, 1e-12));
    }

    #[test]
    fn test_straight_start_inherits_first_bend() {
        let spine = [
            DVec3::ZERO,
            DVec3::Y,
            DVec3::Y * 2.0,
            DVec3::new(1.0, 2.0, 0.0),
        ];
        let frames = spine_frames(&spine, false);
        // Points 0 and 1 are collinear with their neighbours
        assert!(frames[0].z_axis.abs_diff_eq(frames[2].z_axis, 1e-12));
        assert!(frames[1].z_axis.abs_diff_eq(frames[2].z_axis, 1e-12));
    }

    #[test]
    fn test_small_bent_spine_keeps_bend_frames() {
        let spine = [DVec3::ZERO, DVec3::Y, DVec3::new(1.0, 1.0, 0.0)];
        let tiny: Vec<DVec3> = spine.iter().map(|&p| p * 1e-6).collect();

        let frames = spine_frames(&spine, false);
        let tiny_frames = spine_frames(&tiny, false);
        for (frame, tiny_frame) in frames.iter().zip(&tiny_frames) {
            assert!(frame.abs_diff_eq(*tiny_frame, 1e-9));
            assert_relative_eq!(tiny_frame.z_axis.z.abs(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_nearly_collinear_spine_is_straight() {
        let spine = [
            DVec3::ZERO,
            DVec3::Z,
            DVec3::new(1e-13, 0.0, 2.0),
        ];
        let frames = spine_frames(&spine, false);
        for frame in &frames {
            assert!(frame.y_axis.abs_diff_eq(DVec3::Z, 1e-9));
        }
    }

    #[test]
    fn test_binormals_do_not_flip_on_s_curve() {
        let spine = [
            DVec3::ZERO,
            DVec3::Y,
            DVec3::new(1.0, 2.0, 0.0),
            DVec3::new(1.0, 3.0, 0.0),
            DVec3::new(0.0, 4.0, 0.0),
        ];
        let frames = spine_frames(&spine, false);
        for pair in frames.windows(2) {
            assert!(pair[0].z_axis.dot(pair[1].z_axis) > 0.0);
        }
    }

    #[test]
    fn test_closed_square_spine() {
        let spine = [
            DVec3::ZERO,
            DVec3::X,
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::Z,
        ];
        let frames = spine_frames(&spine, true);
        // Corner tangents are the diagonals between neighbours
        let expected = (DVec3::X - DVec3::Z).normalize();
        assert!(frames[0].y_axis.abs_diff_eq(expected, 1e-12));
        for frame in &frames {
            assert!(frame.z_axis.abs_diff_eq(frames[0].z_axis, 1e-12));
            assert_orthonormal(frame);
        }
    }
}
