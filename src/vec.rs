use core::fmt;
use core::ops;

use bytemuck::{Pod, Zeroable};

use crate::MathError;

macro_rules! vec_impl {
    ($v: ident, $n: literal, $($e: ident),+) => {
        #[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
        #[repr(C)]
        pub struct $v {
            $( pub $e: f32, )+
        }

        impl $v {
            #[inline]
            pub fn new($( $e: f32, )+) -> $v {
                $v { $( $e, )+ }
            }

            /// Every component set to `a`.
            #[inline]
            pub fn from_scalar(a: f32) -> $v {
                $v { $( $e: a, )+ }
            }

            #[inline]
            pub fn from_array(a: [f32; $n]) -> $v {
                bytemuck::cast(a)
            }

            #[inline]
            pub fn to_array(self) -> [f32; $n] {
                bytemuck::cast(self)
            }

            #[inline]
            pub fn dot(self, b: $v) -> f32 {
                $( self.$e * b.$e + )+ 0.0
            }

            /// Squared length; cheaper than [`Self::length`] when only
            /// comparisons are needed.
            #[inline]
            pub fn length2(self) -> f32 {
                self.dot(self)
            }

            #[inline]
            pub fn length(self) -> f32 {
                self.length2().sqrt()
            }

            /// Scales the vector to unit length.
            ///
            /// A zero-length input divides by zero and yields non-finite
            /// components per IEEE-754; use [`Self::try_normalized`] to catch
            /// that case instead.
            #[inline]
            pub fn normalized(self) -> $v {
                self / self.length()
            }

            /// Errors on a zero-length input instead of producing non-finite
            /// components.
            pub fn try_normalized(self) -> Result<$v, MathError> {
                let len = self.length();
                if len == 0.0 {
                    return Err(MathError::ZeroLength);
                }
                Ok(self / len)
            }
        }

        impl ops::Add for $v {
            type Output = $v;

            #[inline]
            fn add(self, rhs: $v) -> $v {
                $v { $( $e: self.$e + rhs.$e, )+ }
            }
        }

        impl ops::Sub for $v {
            type Output = $v;

            #[inline]
            fn sub(self, rhs: $v) -> $v {
                $v { $( $e: self.$e - rhs.$e, )+ }
            }
        }

        // Componentwise product, not dot
        impl ops::Mul for $v {
            type Output = $v;

            #[inline]
            fn mul(self, rhs: $v) -> $v {
                $v { $( $e: self.$e * rhs.$e, )+ }
            }
        }

        impl ops::Mul<f32> for $v {
            type Output = $v;

            #[inline]
            fn mul(self, rhs: f32) -> $v {
                $v { $( $e: self.$e * rhs, )+ }
            }
        }

        impl ops::Mul<$v> for f32 {
            type Output = $v;

            #[inline]
            fn mul(self, rhs: $v) -> $v {
                $v { $( $e: self * rhs.$e, )+ }
            }
        }

        impl ops::Div<f32> for $v {
            type Output = $v;

            #[inline]
            fn div(self, rhs: f32) -> $v {
                $v { $( $e: self.$e / rhs, )+ }
            }
        }

        impl ops::Neg for $v {
            type Output = $v;

            #[inline]
            fn neg(self) -> $v {
                $v { $( $e: -self.$e, )+ }
            }
        }

        impl ops::AddAssign for $v {
            #[inline]
            fn add_assign(&mut self, rhs: $v) {
                $( self.$e += rhs.$e; )+
            }
        }

        impl ops::SubAssign for $v {
            #[inline]
            fn sub_assign(&mut self, rhs: $v) {
                $( self.$e -= rhs.$e; )+
            }
        }

        impl ops::MulAssign<f32> for $v {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                $( self.$e *= rhs; )+
            }
        }

        impl ops::DivAssign<f32> for $v {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                $( self.$e /= rhs; )+
            }
        }

        impl ops::Index<usize> for $v {
            type Output = f32;

            /// Panics when the index is outside the vector's dimension.
            #[inline]
            fn index(&self, i: usize) -> &f32 {
                let a: &[f32; $n] = bytemuck::cast_ref(self);
                &a[i]
            }
        }

        impl ops::IndexMut<usize> for $v {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut f32 {
                let a: &mut [f32; $n] = bytemuck::cast_mut(self);
                &mut a[i]
            }
        }

        impl fmt::Display for $v {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let prec = f.precision().unwrap_or(3);
                let parts = [$( format!("{:.prec$}", self.$e), )+];
                write!(f, "{}({})", stringify!($v), parts.join(", "))
            }
        }
    }
}

vec_impl!(Vec3, 3, x, y, z);
vec_impl!(Vec4, 4, x, y, z, w);

impl Vec3 {
    #[inline]
    pub fn cross(self, b: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * b.z - self.z * b.y,
            y: self.z * b.x - self.x * b.z,
            z: self.x * b.y - self.y * b.x,
        }
    }
}

impl Vec4 {
    /// Extends `v` with the given homogeneous coordinate.
    #[inline]
    pub fn from_vec3(v: Vec3, w: f32) -> Vec4 {
        Vec4 { x: v.x, y: v.y, z: v.z, w }
    }

    /// Drops the homogeneous coordinate.
    #[inline]
    pub fn xyz(self) -> Vec3 {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn componentwise_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn scalar_arithmetic_both_orders() {
        let a = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Vec3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn assign_ops() {
        let mut a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        a += Vec4::from_scalar(1.0);
        assert_eq!(a, Vec4::new(2.0, 3.0, 4.0, 5.0));
        a *= 2.0;
        assert_eq!(a, Vec4::new(4.0, 6.0, 8.0, 10.0));
    }

    #[test]
    fn dot_product() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -5.0, 6.0);
        assert_eq!(a.dot(b), 12.0);

        let c = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(c.dot(c), 30.0);
    }

    #[test]
    fn cross_product_follows_right_hand_rule() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);

        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn length() {
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length2(), 25.0);
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = Vec3::new(1.0, 2.0, -2.0).normalized();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn normalized_zero_vector_is_non_finite() {
        let n = Vec3::from_scalar(0.0).normalized();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }

    #[test]
    fn try_normalized_rejects_zero_vector() {
        assert_eq!(
            Vec3::from_scalar(0.0).try_normalized(),
            Err(MathError::ZeroLength)
        );
        assert_eq!(
            Vec3::new(2.0, 0.0, 0.0).try_normalized(),
            Ok(Vec3::new(1.0, 0.0, 0.0))
        );
    }

    #[test]
    fn indexed_access() {
        let mut a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a[0], 1.0);
        assert_eq!(a[3], 4.0);

        a[1] = 9.0;
        assert_eq!(a, Vec4::new(1.0, 9.0, 3.0, 4.0));
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let _ = Vec3::new(1.0, 2.0, 3.0)[3];
    }

    #[test]
    fn array_round_trip() {
        let a = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(Vec4::from_array(a).to_array(), a);
    }

    #[test]
    fn homogeneous_helpers() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let h = Vec4::from_vec3(v, 1.0);
        assert_eq!(h, Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(h.xyz(), v);
    }

    #[test]
    fn display_respects_precision() {
        let v = Vec3::new(1.0, 2.5, -3.0);
        assert_eq!(format!("{:.1}", v), "Vec3(1.0, 2.5, -3.0)");
    }
}
