//! Math utilities and types
//!
//! Provides fundamental math types for 3D graphics and game development.

pub use nalgebra::{Matrix3, Matrix4, Point3, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Translation column of a world matrix.
pub fn matrix_position(matrix: &Mat4) -> Vec3 {
    matrix.column(3).xyz()
}

/// First basis column (local X axis) of a world matrix.
pub fn matrix_basis_x(matrix: &Mat4) -> Vec3 {
    matrix.column(0).xyz()
}

/// Second basis column (local Y axis) of a world matrix.
pub fn matrix_basis_y(matrix: &Mat4) -> Vec3 {
    matrix.column(1).xyz()
}

/// Third basis column (local Z axis) of a world matrix.
pub fn matrix_basis_z(matrix: &Mat4) -> Vec3 {
    matrix.column(2).xyz()
}

/// Transform a 3D point by a homogeneous world matrix.
pub fn transform_point(matrix: &Mat4, point: Vec3) -> Vec3 {
    matrix.transform_point(&Point3::from(point)).coords
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matrix_position_reads_translation_column() {
        let matrix = Mat4::new_translation(&Vec3::new(1.0, 2.0, 3.0));
        let position = matrix_position(&matrix);
        assert_relative_eq!(position.x, 1.0);
        assert_relative_eq!(position.y, 2.0);
        assert_relative_eq!(position.z, 3.0);
    }

    #[test]
    fn test_matrix_basis_columns_scale_with_matrix() {
        let matrix = Mat4::new_scaling(2.0);
        assert_relative_eq!(matrix_basis_x(&matrix), Vec3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(matrix_basis_y(&matrix), Vec3::new(0.0, 2.0, 0.0));
        assert_relative_eq!(matrix_basis_z(&matrix), Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_transform_point_applies_translation() {
        let matrix = Mat4::new_translation(&Vec3::new(0.0, 10.0, 0.0));
        let result = transform_point(&matrix, Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(result, Vec3::new(1.0, 10.0, 0.0));
    }

    #[test]
    fn test_transform_point_identity_is_noop() {
        let point = Vec3::new(4.0, -5.0, 6.0);
        assert_relative_eq!(transform_point(&Mat4::identity(), point), point);
    }
}
