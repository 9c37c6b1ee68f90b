use crate::vector::Vec4;

/// Component-wise comparison with an error margin. Unlike `==` this also
/// checks `w`.
#[derive(Debug, Clone)]
pub struct VecCmp {
    error_margin: f32,
}

impl VecCmp {
    pub const DEFAULT: Self = Self { error_margin: 1e-3 };

    pub fn eq_margin(&self, is: &Vec4, should: &Vec4, error_margin: f32) {
        let names = ["x", "y", "z", "w"];

        let (is, should) = (is.to_array(), should.to_array());
        for ((v1, v2), name) in is.iter().zip(should.iter()).zip(names.iter()) {
            let diff_abs = (v1 - v2).abs();

            assert!(
                diff_abs <= error_margin,
                "is: {:?} should: {:?} (+- {:?}) @ {}",
                v1,
                v2,
                error_margin,
                name
            );
        }
    }

    pub fn eq(&self, is: &Vec4, should: &Vec4) {
        self.eq_margin(is, should, self.error_margin)
    }
}

impl Default for VecCmp {
    fn default() -> Self {
        Self::DEFAULT
    }
}
