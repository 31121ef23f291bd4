//! Index buffer element types accepted by the optimizer

use std::fmt::{Debug, Display};
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// An index buffer element: 16-bit or 32-bit vertex indices
pub trait MeshIndex:
    sealed::Sealed + Copy + Eq + Hash + Debug + Display + Send + Sync + 'static
{
    /// Size of one index in bytes
    const WIDTH_BYTES: usize;
}

impl MeshIndex for u16 {
    const WIDTH_BYTES: usize = 2;
}

impl MeshIndex for u32 {
    const WIDTH_BYTES: usize = 4;
}
