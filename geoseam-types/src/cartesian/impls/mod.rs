mod contour;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use contour::{ClosedContour, Contour, MultiContour};
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::{Point2, Point2d, Point3, Point3d};
pub use polygon::Polygon;
