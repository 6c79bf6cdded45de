//! Built-in cities.

use tf_core::GeoPoint;

/// Key of the city used when an unknown key is requested.
pub const DEFAULT_CITY_KEY: &str = "ankara";

/// Static city reference data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct City {
    pub key:    &'static str,
    pub name:   &'static str,
    /// Map center.
    pub center: GeoPoint,
    /// Default map zoom level.
    pub zoom:   u8,
}

pub static CITIES: [City; 3] = [
    City { key: "ankara",   name: "Ankara",   center: GeoPoint::new(39.9334, 32.8597), zoom: 12 },
    City { key: "istanbul", name: "İstanbul", center: GeoPoint::new(41.0082, 28.9784), zoom: 11 },
    City { key: "izmir",    name: "İzmir",    center: GeoPoint::new(38.4237, 27.1428), zoom: 12 },
];

/// Look up a built-in city by key.
pub fn find_city(key: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.key == key)
}

/// Look up a built-in city by key, falling back to [`DEFAULT_CITY_KEY`].
pub fn city_or_default(key: &str) -> &'static City {
    find_city(key).unwrap_or(&CITIES[0])
}
