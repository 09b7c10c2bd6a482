//! Row-major 3x3 and 4x4 matrices.
//!
//! Storage is `e[row][col]`, so `m[i][j]` addresses row `i`, column `j` and
//! [`Mat4::to_array`] flattens row by row. Operators and transform factories
//! use the column-vector convention: a transform applies as `M * v` and
//! translation lives in the fourth column.

use core::ops;

use bytemuck::{Pod, Zeroable};

use crate::vec::{Vec3, Vec4};
use crate::MathError;

/// Determinants below this magnitude are treated as singular.
const DET_EPSILON: f32 = 1e-30;

macro_rules! mat_impl {
    ($m: ident, $v: ident, $n: literal) => {
        #[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
        #[repr(C)]
        pub struct $m {
            pub e: [[f32; $n]; $n],
        }

        impl $m {
            #[inline]
            pub fn identity() -> $m {
                let mut m = $m::zero();
                for i in 0..$n {
                    m.e[i][i] = 1.0;
                }
                m
            }

            #[inline]
            fn zero() -> $m {
                $m { e: [[0.0; $n]; $n] }
            }

            /// Each vector becomes one full row.
            #[inline]
            pub fn from_rows(rows: [$v; $n]) -> $m {
                let mut m = $m::zero();
                for i in 0..$n {
                    m.e[i] = rows[i].to_array();
                }
                m
            }

            #[inline]
            pub fn at(&self, row: usize, col: usize) -> f32 {
                self.e[row][col]
            }

            #[inline]
            pub fn row(&self, i: usize) -> $v {
                $v::from_array(self.e[i])
            }

            /// Returns a new matrix with `[i][j]` and `[j][i]` swapped; the
            /// receiver is untouched.
            #[inline]
            pub fn transpose(&self) -> $m {
                let mut m = $m::zero();
                for i in 0..$n {
                    for j in 0..$n {
                        m.e[j][i] = self.e[i][j];
                    }
                }
                m
            }
        }

        impl Default for $m {
            /// The identity matrix.
            fn default() -> $m {
                $m::identity()
            }
        }

        impl ops::Index<usize> for $m {
            type Output = [f32; $n];

            /// Row access; `m[i][j]` reads row `i`, column `j`. Panics when
            /// the row is out of range.
            #[inline]
            fn index(&self, row: usize) -> &[f32; $n] {
                &self.e[row]
            }
        }

        impl ops::IndexMut<usize> for $m {
            #[inline]
            fn index_mut(&mut self, row: usize) -> &mut [f32; $n] {
                &mut self.e[row]
            }
        }

        impl ops::Mul<$m> for $m {
            type Output = $m;

            #[inline]
            fn mul(self, rhs: $m) -> $m {
                let mut m = $m::zero();
                for i in 0..$n {
                    for j in 0..$n {
                        let mut acc = 0.0;
                        for k in 0..$n {
                            acc += self.e[i][k] * rhs.e[k][j];
                        }
                        m.e[i][j] = acc;
                    }
                }
                m
            }
        }

        impl ops::Mul<$v> for $m {
            type Output = $v;

            #[inline]
            fn mul(self, rhs: $v) -> $v {
                let v = rhs.to_array();
                let mut out = [0.0; $n];
                for i in 0..$n {
                    for k in 0..$n {
                        out[i] += self.e[i][k] * v[k];
                    }
                }
                $v::from_array(out)
            }
        }
    }
}

mat_impl!(Mat3, Vec3, 3);
mat_impl!(Mat4, Vec4, 4);

impl Mat3 {
    /// Fills the matrix row-major from a flat 9-element array.
    #[inline]
    pub fn from_array(a: [f32; 9]) -> Mat3 {
        Mat3 { e: bytemuck::cast(a) }
    }

    /// The 9 entries flattened in row-major order.
    #[inline]
    pub fn to_array(&self) -> [f32; 9] {
        bytemuck::cast(self.e)
    }
}

impl Mat4 {
    /// Fills the matrix row-major in argument order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Mat4 {
        Mat4 {
            e: [
                [m00, m01, m02, m03],
                [m10, m11, m12, m13],
                [m20, m21, m22, m23],
                [m30, m31, m32, m33],
            ],
        }
    }

    /// Fills the matrix row-major from a flat 16-element array; the inverse
    /// of [`Mat4::to_array`].
    #[inline]
    pub fn from_array(a: [f32; 16]) -> Mat4 {
        Mat4 { e: bytemuck::cast(a) }
    }

    /// The 16 entries flattened in row-major order, matching the fill order
    /// of [`Mat4::from_array`] and [`Mat4::new`].
    #[inline]
    pub fn to_array(&self) -> [f32; 16] {
        bytemuck::cast(self.e)
    }

    /// Each vector fills the first three columns of its row; the fourth
    /// column is the homogeneous identity column `[0, 0, 0, 1]`, so the last
    /// row can carry a translation for row-vector pipelines.
    #[inline]
    pub fn from_vec3_rows(rows: [Vec3; 4]) -> Mat4 {
        let mut m = Mat4::zero();
        for i in 0..4 {
            m.e[i][..3].copy_from_slice(&rows[i].to_array());
        }
        m.e[3][3] = 1.0;
        m
    }

    /// The upper-left 3x3 block.
    #[inline]
    pub fn to_mat3(&self) -> Mat3 {
        let mut m = Mat3::zero();
        for i in 0..3 {
            m.e[i].copy_from_slice(&self.e[i][..3]);
        }
        m
    }

    /// Determinant of the 3x3 minor left after deleting `skip_row` and
    /// `skip_col`.
    fn minor(&self, skip_row: usize, skip_col: usize) -> f32 {
        let mut sub = [[0.0f32; 3]; 3];
        let mut r = 0;
        for i in 0..4 {
            if i == skip_row {
                continue;
            }
            let mut c = 0;
            for j in 0..4 {
                if j == skip_col {
                    continue;
                }
                sub[r][c] = self.e[i][j];
                c += 1;
            }
            r += 1;
        }
        sub[0][0] * (sub[1][1] * sub[2][2] - sub[1][2] * sub[2][1])
            - sub[0][1] * (sub[1][0] * sub[2][2] - sub[1][2] * sub[2][0])
            + sub[0][2] * (sub[1][0] * sub[2][1] - sub[1][1] * sub[2][0])
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let mut det = 0.0;
        for j in 0..4 {
            let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
            det += sign * self.e[0][j] * self.minor(0, j);
        }
        det
    }

    /// Inverse via the classical adjugate/cofactor method: the transposed
    /// cofactor matrix divided by the determinant.
    ///
    /// # Errors
    ///
    /// [`MathError::SingularMatrix`] when the determinant is at or near
    /// zero.
    pub fn inverse(&self) -> Result<Mat4, MathError> {
        let det = self.determinant();
        if det.abs() < DET_EPSILON {
            return Err(MathError::SingularMatrix(det));
        }

        let inv_det = 1.0 / det;
        let mut m = Mat4::zero();
        for i in 0..4 {
            for j in 0..4 {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                m.e[j][i] = sign * self.minor(i, j) * inv_det;
            }
        }
        Ok(m)
    }

    pub fn translation(v: Vec3) -> Mat4 {
        let mut m = Mat4::identity();
        m.e[0][3] = v.x;
        m.e[1][3] = v.y;
        m.e[2][3] = v.z;
        m
    }

    pub fn scale(v: Vec3) -> Mat4 {
        let mut m = Mat4::identity();
        m.e[0][0] = v.x;
        m.e[1][1] = v.y;
        m.e[2][2] = v.z;
        m
    }

    /// Axis-angle rotation; `axis` is expected to be unit length.
    pub fn rotation(axis: Vec3, angle: f32) -> Mat4 {
        let (x, y, z) = (axis.x, axis.y, axis.z);
        let (sin, cos) = angle.sin_cos();
        let k = 1.0 - cos;

        let mut m = Mat4::identity();
        m.e[0][0] = x * x * k + cos;
        m.e[0][1] = x * y * k - z * sin;
        m.e[0][2] = x * z * k + y * sin;

        m.e[1][0] = x * y * k + z * sin;
        m.e[1][1] = y * y * k + cos;
        m.e[1][2] = y * z * k - x * sin;

        m.e[2][0] = x * z * k - y * sin;
        m.e[2][1] = y * z * k + x * sin;
        m.e[2][2] = z * z * k + cos;

        m
    }

    /// Translate-rotate-scale composition; scale applies first.
    pub fn trs(t: Vec3, axis: Vec3, angle: f32, s: Vec3) -> Mat4 {
        Mat4::translation(t) * Mat4::rotation(axis, angle) * Mat4::scale(s)
    }

    /// OpenGL-style orthographic projection mapping the box onto the
    /// [-1, 1] clip cube. Inverted axes (e.g. `left > right`) fall out of
    /// the formula.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
        let mut m = Mat4::identity();
        m.e[0][0] = 2.0 / (right - left);
        m.e[1][1] = 2.0 / (top - bottom);
        m.e[2][2] = -2.0 / (far - near);
        m.e[0][3] = -(right + left) / (right - left);
        m.e[1][3] = -(top + bottom) / (top - bottom);
        m.e[2][3] = -(far + near) / (far - near);
        m
    }

    /// OpenGL-style perspective projection, right-handed with depth mapped
    /// to [-1, 1]. `fov_y` is the vertical field of view in radians.
    pub fn perspective(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
        let f = 1.0 / (fov_y * 0.5).tan();

        let mut m = Mat4::zero();
        m.e[0][0] = f / aspect_ratio;
        m.e[1][1] = f;
        m.e[2][2] = (far + near) / (near - far);
        m.e[2][3] = 2.0 * far * near / (near - far);
        m.e[3][2] = -1.0;
        m
    }

    /// Right-handed view matrix looking from `eye` towards `target`.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let f = (target - eye).normalized();
        let s = f.cross(up).normalized();
        let u = s.cross(f);

        let mut m = Mat4::identity();
        m.e[0] = [s.x, s.y, s.z, -s.dot(eye)];
        m.e[1] = [u.x, u.y, u.z, -u.dot(eye)];
        m.e[2] = [-f.x, -f.y, -f.z, f.dot(eye)];
        m
    }
}

impl ops::Mul<Vec3> for Mat4 {
    type Output = Vec3;

    /// Transforms `rhs` as a homogeneous point (implicit w = 1) and drops
    /// the resulting w without perspective division.
    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        (self * Vec4::from_vec3(rhs, 1.0)).xyz()
    }
}
