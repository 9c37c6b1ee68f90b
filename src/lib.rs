mod error;
mod format;
mod vector;

#[cfg(test)]
mod test_util;

pub use error::{FormatSpecError, Result};
pub use format::{Align, FormatSpec, Kind, Sign, MAX_FORMAT_ARGUMENT};
pub use vector::Vec4;

/// Whether the vector code runs natively compiled. Always `true` for this crate.
pub const COMPILED: bool = true;

pub mod prelude {
    pub use crate::format::FormatSpec;
    pub use crate::vector::Vec4;
}

#[cfg(test)]
mod tests {
    #[test]
    fn compiled_flag_is_set() {
        assert!(super::COMPILED);
    }
}
