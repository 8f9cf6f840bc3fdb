//! Fixed-size vectors.
//!
//! [`Vector`] is one type parameterized over component type and dimension.
//! The familiar names are aliases:
//!
//! | Alias | Type |
//! |-------|------|
//! | [`Vector2d`] | `Vector<f64, 2>` |
//! | [`Vector3d`] | `Vector<f64, 3>` |
//! | [`Vector4d`] | `Vector<f64, 4>` |
//! | [`Vector3f`] | `Vector<f32, 3>` |
//!
//! # Mutation
//!
//! Mutating methods work in place and return `&mut Self` so calls chain:
//!
//! ```rust
//! use vecmath::Vector3d;
//!
//! let mut v = Vector3d::new(1.0, 2.0, 2.0);
//! v.mul(2.0).sub(&Vector3d::new(2.0, 4.0, 4.0)).add_array([0.0, 0.0, 3.0]);
//! assert_eq!(v.to_array(), [0.0, 0.0, 3.0]);
//! assert_eq!(v.length(), 3.0);
//! ```
//!
//! Value-style operators (`+`, `-`, `*`, `/`) are available as well and
//! never touch their operands.
//!
//! # IEEE-754
//!
//! Nothing is guarded. Normalizing a zero vector or taking the angle to a
//! zero vector yields NaN, the same as the underlying float arithmetic.

use std::ops;

use vecmath_core::{Error, Result, Scalar};

/// A vector of `N` components of type `T`.
///
/// Components are stored contiguously (`#[repr(C)]`), so a `Vector3f` has
/// the layout of `[f32; 3]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Vector<T, const N: usize> {
    components: [T; N],
}

/// Two-component double-precision vector.
pub type Vector2d = Vector<f64, 2>;
/// Three-component double-precision vector.
pub type Vector3d = Vector<f64, 3>;
/// Four-component double-precision vector.
pub type Vector4d = Vector<f64, 4>;
/// Three-component single-precision vector.
pub type Vector3f = Vector<f32, 3>;
/// Compact name for [`Vector3f`]; the same type.
pub type Vec3f = Vector3f;

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Number of components.
    pub const DIMENSION: usize = N;

    /// Number of components, for sizing flat buffers.
    pub const SIZE: usize = N;

    /// Size of one component in bytes.
    pub const FLOAT_SIZE: usize = size_of::<T>();

    /// Size of all components in bytes.
    pub const BYTES: usize = N * size_of::<T>();

    /// Size of all components in bytes once exported to `f64`.
    pub const FLOAT_BYTES: usize = N * size_of::<f64>();

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// All components set to `v`.
    #[inline]
    pub fn splat(v: T) -> Self {
        Self { components: [v; N] }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(components: [T; N]) -> Self {
        Self { components }
    }

    /// Returns an independent copy.
    #[inline]
    #[must_use]
    pub fn dup(&self) -> Self {
        *self
    }

    /// Copies the components of `other` into this vector.
    #[inline]
    pub fn set(&mut self, other: &Self) -> &mut Self {
        self.components = other.components;
        self
    }

    /// Overwrites all components.
    #[inline]
    pub fn set_array(&mut self, components: [T; N]) -> &mut Self {
        self.components = components;
        self
    }

    /// Adds `other` to this vector.
    #[inline]
    pub fn add(&mut self, other: &Self) -> &mut Self {
        self.add_array(other.components)
    }

    /// Adds the given components to this vector.
    #[inline]
    pub fn add_array(&mut self, components: [T; N]) -> &mut Self {
        for (c, v) in self.components.iter_mut().zip(components) {
            *c += v;
        }
        self
    }

    /// Sets this vector to `a + b`.
    #[inline]
    pub fn set_sum(&mut self, a: &Self, b: &Self) -> &mut Self {
        for i in 0..N {
            self.components[i] = a.components[i] + b.components[i];
        }
        self
    }

    /// Subtracts `other` from this vector.
    #[inline]
    pub fn sub(&mut self, other: &Self) -> &mut Self {
        self.sub_array(other.components)
    }

    /// Subtracts the given components from this vector.
    #[inline]
    pub fn sub_array(&mut self, components: [T; N]) -> &mut Self {
        for (c, v) in self.components.iter_mut().zip(components) {
            *c -= v;
        }
        self
    }

    /// Sets this vector to `a - b`.
    #[inline]
    pub fn set_difference(&mut self, a: &Self, b: &Self) -> &mut Self {
        for i in 0..N {
            self.components[i] = a.components[i] - b.components[i];
        }
        self
    }

    /// Multiplies every component by `k`.
    #[inline]
    pub fn mul(&mut self, k: T) -> &mut Self {
        for c in &mut self.components {
            *c *= k;
        }
        self
    }

    /// Divides every component by `k`.
    #[inline]
    pub fn div(&mut self, k: T) -> &mut Self {
        for c in &mut self.components {
            *c /= k;
        }
        self
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        let mut sum = T::ZERO;
        for i in 0..N {
            sum += self.components[i] * other.components[i];
        }
        sum
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Scales this vector to unit length.
    ///
    /// A zero vector becomes NaN in every component.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        self.mul(T::ONE / len)
    }

    /// Angle to `other` in radians, in `[0, π]`.
    ///
    /// NaN if either vector has zero length.
    #[inline]
    pub fn angle(&self, other: &Self) -> T {
        (self.dot(other) / (self.length_squared() * other.length_squared()).sqrt()).acos()
    }

    /// Interpolates from this vector toward `other`.
    ///
    /// See [`Vector::set_lerp`].
    #[inline]
    pub fn lerp(&mut self, other: &Self, t: T) -> &mut Self {
        let start = *self;
        self.set_lerp(&start, other, t)
    }

    /// Sets this vector to `a + (b - a) * t`.
    ///
    /// `t = 0` yields `a`, `t = 1` yields `b`. `t` must lie in `[0, 1]`; this
    /// is checked with a debug assertion only. Release builds do not clamp,
    /// so out-of-range values extrapolate along the line.
    #[inline]
    pub fn set_lerp(&mut self, a: &Self, b: &Self, t: T) -> &mut Self {
        debug_assert!(
            (T::ZERO..=T::ONE).contains(&t),
            "interpolation factor out of range: {t:?}"
        );
        for i in 0..N {
            self.components[i] = (b.components[i] - a.components[i]) * t + a.components[i];
        }
        self
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(&self) -> [T; N] {
        self.components
    }

    /// Returns the components widened to `f64`.
    #[inline]
    pub fn to_f64_array(&self) -> [f64; N] {
        self.components.map(Scalar::to_f64)
    }

    /// Writes the components into `target` starting at `offset`.
    ///
    /// Elements outside `offset..offset + N` are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `target` is shorter than `offset + N`, like slice indexing.
    /// [`Vector::try_write_to_slice`] reports the condition instead.
    pub fn write_to_slice<'a>(&self, target: &'a mut [f64], offset: usize) -> &'a mut [f64] {
        for (slot, c) in target[offset..offset + N].iter_mut().zip(self.components) {
            *slot = c.to_f64();
        }
        target
    }

    /// Checked variant of [`Vector::write_to_slice`].
    pub fn try_write_to_slice<'a>(
        &self,
        target: &'a mut [f64],
        offset: usize,
    ) -> Result<&'a mut [f64]> {
        match offset.checked_add(N) {
            Some(end) if end <= target.len() => Ok(self.write_to_slice(target, offset)),
            _ => Err(Error::buffer_too_small(N, target.len(), offset)),
        }
    }

    /// Exact component-wise equality (no epsilon).
    #[inline]
    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.components == other.components
    }

    /// Diagnostic rendering, e.g. `(1.0, 2.0, 3.0)`.
    pub fn as_string(&self) -> String {
        let parts: Vec<String> = self.components.iter().map(|c| format!("{:?}", c)).collect();
        format!("({})", parts.join(", "))
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.components.iter().all(|c| c.to_f64().is_finite())
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.components.iter().any(|c| c.to_f64().is_nan())
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> T {
        self.components[0]
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> T {
        self.components[1]
    }

    /// Overwrites both components.
    #[inline]
    pub fn set_xy(&mut self, x: T, y: T) -> &mut Self {
        self.set_array([x, y])
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);
    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);
    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> T {
        self.components[0]
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> T {
        self.components[1]
    }

    /// Z component.
    #[inline]
    pub fn z(&self) -> T {
        self.components[2]
    }

    /// Overwrites all three components.
    #[inline]
    pub fn set_xyz(&mut self, x: T, y: T, z: T) -> &mut Self {
        self.set_array([x, y, z])
    }
}

impl<T: Scalar> Vector<T, 4> {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> T {
        self.components[0]
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> T {
        self.components[1]
    }

    /// Z component.
    #[inline]
    pub fn z(&self) -> T {
        self.components[2]
    }

    /// W component.
    #[inline]
    pub fn w(&self) -> T {
        self.components[3]
    }

    /// Overwrites all four components.
    #[inline]
    pub fn set_xyzw(&mut self, x: T, y: T, z: T, w: T) -> &mut Self {
        self.set_array([x, y, z, w])
    }
}

// Indexing
impl<T, const N: usize> ops::Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.components[i]
    }
}

impl<T, const N: usize> ops::IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.components[i]
    }
}

// Vector + Vector
impl<T: Scalar, const N: usize> ops::Add for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        out.add_array(rhs.components);
        out
    }
}

// Vector - Vector
impl<T: Scalar, const N: usize> ops::Sub for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        out.sub_array(rhs.components);
        out
    }
}

// Vector * scalar
impl<T: Scalar, const N: usize> ops::Mul<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::from_array(self.components.map(|c| c * rhs))
    }
}

// Vector / scalar
impl<T: Scalar, const N: usize> ops::Div<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::from_array(self.components.map(|c| c / rhs))
    }
}

impl<T: Scalar, const N: usize> ops::Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_array(self.components.map(|c| -c))
    }
}

impl<T: Scalar, const N: usize> ops::AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.add_array(rhs.components);
    }
}

impl<T: Scalar, const N: usize> ops::SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_array(rhs.components);
    }
}

impl<T: Scalar, const N: usize> ops::MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        Vector::mul(self, rhs);
    }
}

impl<T: Scalar, const N: usize> ops::DivAssign<T> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        Vector::div(self, rhs);
    }
}

macro_rules! scalar_lhs_mul_impl {
    ($t: ty) => {
        // scalar * Vector
        impl<const N: usize> ops::Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            #[inline]
            fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs * self
            }
        }
    };
}

scalar_lhs_mul_impl!(f32);
scalar_lhs_mul_impl!(f64);

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self { components }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> [T; N] {
        v.components
    }
}

macro_rules! glam_vec_impl {
    ($glam: ty, $t: ty, $n: literal) => {
        impl From<$glam> for Vector<$t, $n> {
            #[inline]
            fn from(v: $glam) -> Self {
                Self::from_array(v.to_array())
            }
        }

        impl From<Vector<$t, $n>> for $glam {
            #[inline]
            fn from(v: Vector<$t, $n>) -> $glam {
                <$glam>::from_array(v.to_array())
            }
        }
    };
}

glam_vec_impl!(glam::Vec2, f32, 2);
glam_vec_impl!(glam::Vec3, f32, 3);
glam_vec_impl!(glam::Vec4, f32, 4);
glam_vec_impl!(glam::DVec2, f64, 2);
glam_vec_impl!(glam::DVec3, f64, 3);
glam_vec_impl!(glam::DVec4, f64, 4);
