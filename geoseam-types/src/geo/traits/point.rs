use num_traits::Float;

/// A point on the surface of a celestial body, given as latitude and
/// longitude in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }
}

/// A geographic point that can be constructed from latitude and longitude.
pub trait NewGeoPoint<N: Float = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a new point with the given latitude and longitude in degrees.
    fn latlon(lat: N, lon: N) -> Self;

    /// Creates a new point with the given longitude and latitude in degrees.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}
