//! Types and functions on geometries in cartesian coordinates.

mod impls;
mod orient;
mod rect;
mod traits;

pub use impls::*;
pub use orient::{Orientation, Winding};
pub use rect::Rect;
pub use traits::*;
