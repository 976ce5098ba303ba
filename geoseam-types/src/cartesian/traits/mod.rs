mod cartesian_point;

pub use cartesian_point::{
    CartesianPoint2d, CartesianPoint2dFloat, CartesianPoint3d, NewCartesianPoint2d,
    NewCartesianPoint3d,
};
