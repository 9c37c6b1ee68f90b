use std::{
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::format::FormatSpec;

/// A 4-component `f32` vector with components `x`, `y`, `z` and `w`.
///
/// Components that are not given at construction are `0.0`, so the same type
/// serves as a 2D (`Vec4::xy`) or 3D (`Vec4::xyz`) vector.
///
/// # Equality
///
/// Two vectors compare equal when their `x`, `y` and `z` components are equal.
/// **The `w` component is not part of the comparison**, so changing only `w`
/// never changes the result of `==`. Components are compared with plain IEEE
/// float equality: there is no tolerance and a `NaN` component never equals
/// anything.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Vec4 {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    pub const fn from_x(x: f32) -> Self {
        Self::new(x, 0.0, 0.0, 0.0)
    }

    pub const fn xy(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }

    pub const fn xyz(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Builds a vector from up to four leading values, the rest default to `0.0`.
    ///
    /// Values past the fourth are ignored.
    pub fn from_slice(values: &[f32]) -> Self {
        let mut data = [0.0; 4];
        for (slot, value) in data.iter_mut().zip(values) {
            *slot = *value;
        }
        data.into()
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub const fn x(&self) -> f32 {
        self.x
    }

    pub const fn y(&self) -> f32 {
        self.y
    }

    pub const fn z(&self) -> f32 {
        self.z
    }

    pub const fn w(&self) -> f32 {
        self.w
    }

    pub fn set_x(&mut self, value: f32) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: f32) {
        self.y = value;
    }

    pub fn set_z(&mut self, value: f32) {
        self.z = value;
    }

    pub fn set_w(&mut self, value: f32) {
        self.w = value;
    }

    pub const fn with_x(self, value: f32) -> Self {
        Self { x: value, ..self }
    }

    pub const fn with_y(self, value: f32) -> Self {
        Self { y: value, ..self }
    }

    pub const fn with_z(self, value: f32) -> Self {
        Self { z: value, ..self }
    }

    pub const fn with_w(self, value: f32) -> Self {
        Self { w: value, ..self }
    }

    /// Component-wise sum `self + other`.
    pub fn add_vec(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }

    /// Adds `scalar` to every component.
    pub fn add_scalar(self, scalar: f32) -> Self {
        Self::new(
            self.x + scalar,
            self.y + scalar,
            self.z + scalar,
            self.w + scalar,
        )
    }

    /// Component-wise difference `self - other`.
    pub fn sub_vec(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }

    /// Subtracts `scalar` from every component.
    pub fn sub_scalar(self, scalar: f32) -> Self {
        Self::new(
            self.x - scalar,
            self.y - scalar,
            self.z - scalar,
            self.w - scalar,
        )
    }

    /// Component-wise product `(x * x', y * y', z * z', w * w')`.
    ///
    /// Unlike the classical dot product the products are **not** summed; the
    /// result is a vector. Use [`Vec4::dot_sum`] for the scalar.
    pub fn dot(self, other: Self) -> Self {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }

    /// Classical dot product `x * x' + y * y' + z * z' + w * w'`.
    pub fn dot_sum(self, other: Self) -> f32 {
        let [x, y, z, w] = self.dot(other).to_array();
        x + y + z + w
    }

    /// Compares `x`, `y` and `z`. `w` is ignored.
    pub fn equals(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }

    /// Renders `"(x, y, z, w)"` with every component formatted by `spec`.
    pub fn format(&self, spec: &FormatSpec) -> String {
        let mut out = String::with_capacity(32);
        out.push('(');
        for (idx, component) in self.to_array().iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            spec.write_f32(&mut out, *component);
        }
        out.push(')');
        out
    }
}

impl PartialEq for Vec4 {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for Vec4 {
    /// Formatter options (`{:.2}`, `{:>8}`, `{:+}`, ...) apply to each component.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = FormatSpec::from_formatter(f);
        f.write_str(&self.format(&spec))
    }
}

impl Add<Vec4> for Vec4 {
    type Output = Vec4;

    fn add(self, rhs: Vec4) -> Self::Output {
        self.add_vec(rhs)
    }
}

impl Add<f32> for Vec4 {
    type Output = Vec4;

    fn add(self, rhs: f32) -> Self::Output {
        self.add_scalar(rhs)
    }
}

impl Sub<Vec4> for Vec4 {
    type Output = Vec4;

    fn sub(self, rhs: Vec4) -> Self::Output {
        self.sub_vec(rhs)
    }
}

impl Sub<f32> for Vec4 {
    type Output = Vec4;

    fn sub(self, rhs: f32) -> Self::Output {
        self.sub_scalar(rhs)
    }
}

impl AddAssign<Vec4> for Vec4 {
    fn add_assign(&mut self, rhs: Vec4) {
        *self = self.add_vec(rhs);
    }
}

impl AddAssign<f32> for Vec4 {
    fn add_assign(&mut self, rhs: f32) {
        *self = self.add_scalar(rhs);
    }
}

impl SubAssign<Vec4> for Vec4 {
    fn sub_assign(&mut self, rhs: Vec4) {
        *self = self.sub_vec(rhs);
    }
}

impl SubAssign<f32> for Vec4 {
    fn sub_assign(&mut self, rhs: f32) {
        *self = self.sub_scalar(rhs);
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(value: Vec4) -> Self {
        value.to_array()
    }
}

macro_rules! impl_from_short_array {
    ( $( $len:literal )+ ) => {
        $(
            impl From<[f32; $len]> for Vec4 {
                fn from(data: [f32; $len]) -> Self {
                    Self::from_slice(&data)
                }
            }
        )+
    };
}

impl_from_short_array! { 0 1 2 3 }

impl From<(f32,)> for Vec4 {
    fn from((x,): (f32,)) -> Self {
        Self::from_x(x)
    }
}

impl From<(f32, f32)> for Vec4 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::xy(x, y)
    }
}

impl From<(f32, f32, f32)> for Vec4 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::xyz(x, y, z)
    }
}

impl From<(f32, f32, f32, f32)> for Vec4 {
    fn from((x, y, z, w): (f32, f32, f32, f32)) -> Self {
        Self::new(x, y, z, w)
    }
}
