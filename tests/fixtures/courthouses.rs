//! Courthouse locations for realistic test fixtures.
//!
//! Coordinates are approximate city-centre positions; they only need to be
//! routable for the live OSRM test and plausible for great-circle estimates.

use itinerary_planner::WorkItem;

/// A named courthouse with coordinates.
#[derive(Debug, Clone)]
pub struct Courthouse {
    pub key: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Courthouse {
    pub const fn new(key: &'static str, name: &'static str, city: &'static str, lat: f64, lon: f64) -> Self {
        Self { key, name, city, lat, lon }
    }

    /// A work item located at this courthouse.
    pub fn item(&self, reference: &str) -> WorkItem {
        WorkItem::new(reference, self.city)
            .with_key(self.key)
            .with_display_name(self.name)
            .with_coordinates(self.lat, self.lon)
    }
}

// ============================================================================
// Marmara
// ============================================================================

pub const MARMARA: &[Courthouse] = &[
    Courthouse::new("ist-caglayan", "İstanbul Çağlayan Adliyesi", "İstanbul", 41.0683, 28.9783),
    Courthouse::new("ist-kartal", "İstanbul Anadolu Adliyesi", "İstanbul", 40.8880, 29.1860),
    Courthouse::new("bursa", "Bursa Adliyesi", "Bursa", 40.2105, 29.0080),
    Courthouse::new("kocaeli", "Kocaeli Adliyesi", "Kocaeli", 40.7650, 29.9400),
    Courthouse::new("sakarya", "Sakarya Adliyesi", "Sakarya", 40.7731, 30.3948),
    Courthouse::new("balikesir", "Balıkesir Adliyesi", "Balıkesir", 39.6533, 27.8903),
    Courthouse::new("canakkale", "Çanakkale Adliyesi", "Çanakkale", 40.1467, 26.4086),
];

// ============================================================================
// Central and Aegean
// ============================================================================

pub const INTERIOR: &[Courthouse] = &[
    Courthouse::new("ankara-sihhiye", "Ankara Adliyesi", "Ankara", 39.9270, 32.8580),
    Courthouse::new("ankara-bam", "Ankara Bölge Adliye Mahkemesi", "Ankara", 39.9120, 32.8100),
    Courthouse::new("eskisehir", "Eskişehir Adliyesi", "Eskişehir", 39.7780, 30.5100),
    Courthouse::new("konya", "Konya Adliyesi", "Konya", 37.8900, 32.4900),
    Courthouse::new("izmir", "İzmir Adliyesi", "İzmir", 38.4440, 27.1530),
    Courthouse::new("denizli", "Denizli Adliyesi", "Denizli", 37.7830, 29.0950),
    Courthouse::new("kayseri", "Kayseri Adliyesi", "Kayseri", 38.7220, 35.4870),
];

/// Every fixture courthouse.
pub fn all_courthouses() -> Vec<Courthouse> {
    MARMARA.iter().chain(INTERIOR.iter()).cloned().collect()
}
