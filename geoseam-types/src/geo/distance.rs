use crate::geo::datum::Datum;
use crate::geo::traits::point::GeoPoint;

/// Distance in meters between two points along the great circle over the
/// datum's sphere, computed with the haversine formula.
///
/// The calculation is stateless: no per-CRS setup is cached and no scratch
/// buffers are shared, so concurrent calls need no synchronization.
pub fn great_circle_distance(
    a: &impl GeoPoint<Num = f64>,
    b: &impl GeoPoint<Num = f64>,
    datum: &Datum,
) -> f64 {
    let lat_a = a.lat_rad();
    let lat_b = b.lat_rad();
    let half_d_lat = (lat_b - lat_a) / 2.0;
    let half_d_lon = (b.lon_rad() - a.lon_rad()) / 2.0;

    let h = half_d_lat.sin().powi(2) + lat_a.cos() * lat_b.cos() * half_d_lon.sin().powi(2);
    2.0 * datum.semimajor() * h.sqrt().asin()
}
