//! Great-circle distance between coordinate pairs.

use crate::types::Coordinates;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometers
///
/// Always defined for finite inputs; NaN or out-of-range coordinates are the
/// caller's responsibility and are not validated here.
pub fn haversine_distance(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const PORTLAND: Coordinates = Coordinates {
        latitude: 45.5,
        longitude: -122.6,
    };

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(haversine_distance(PORTLAND, PORTLAND), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let b = Coordinates {
            latitude: 45.52,
            longitude: -122.67,
        };

        let ab = haversine_distance(PORTLAND, b);
        let ba = haversine_distance(b, PORTLAND);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_known_distance_portland_neighborhood() {
        // A few km between downtown Portland and a nearby neighborhood
        let b = Coordinates {
            latitude: 45.52,
            longitude: -122.67,
        };

        let d = haversine_distance(PORTLAND, b);
        assert!(d > 5.0 && d < 6.5, "unexpected distance {}", d);
    }

    #[test]
    fn test_known_distance_portland_seattle() {
        // Portland to Seattle is roughly 233km
        let seattle = Coordinates {
            latitude: 47.6062,
            longitude: -122.3321,
        };

        let d = haversine_distance(PORTLAND, seattle);
        assert!(d > 225.0 && d < 240.0, "unexpected distance {}", d);
    }
}
