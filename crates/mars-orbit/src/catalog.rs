//! Bodies shown around the globe.

use crate::descriptor::{AltitudeReference, OrbitClass, OrbitDescriptor};

/// Moons, orbiters and the Perseverance rover.
pub static SATELLITES: [OrbitDescriptor; 8] = [
    OrbitDescriptor {
        id: "phobos",
        name: "Phobos",
        catalog_id: "MARS-PHOBOS",
        class: OrbitClass::MartianMoon,
        altitude_km: 9377.0,
        altitude_reference: AltitudeReference::Center,
        speed_km_s: 2.14,
        inclination_deg: 1.08,
        period_days: 0.319,
        eccentricity: 0.0151,
        raan_deg: 0.0,
        mass: "1.0659 × 10^16 kg",
        size: "22.2 km",
        description: "Larger and closer of Mars's two moons",
        color: "#FFD700",
        landing_site: None,
    },
    OrbitDescriptor {
        id: "deimos",
        name: "Deimos",
        catalog_id: "MARS-DEIMOS",
        class: OrbitClass::MartianMoon,
        altitude_km: 23460.0,
        altitude_reference: AltitudeReference::Center,
        speed_km_s: 1.35,
        inclination_deg: 0.93,
        period_days: 1.263,
        eccentricity: 0.0002,
        raan_deg: 0.0,
        mass: "1.4762 × 10^15 kg",
        size: "12.6 km",
        description: "Smaller and more distant of Mars's two moons",
        color: "#FFA500",
        landing_site: None,
    },
    OrbitDescriptor {
        id: "mars-express",
        name: "Mars Express",
        catalog_id: "27827",
        class: OrbitClass::PolarOrbit,
        altitude_km: 298.0,
        altitude_reference: AltitudeReference::Surface,
        speed_km_s: 3.4,
        inclination_deg: 86.3,
        period_days: 0.075,
        eccentricity: 0.571,
        raan_deg: 0.0,
        mass: "1123 kg",
        size: "1.5 m × 1.8 m × 1.4 m",
        description: "ESA orbiter studying Mars atmosphere and surface",
        color: "#00BFFF",
        landing_site: None,
    },
    OrbitDescriptor {
        id: "mars-reconnaissance",
        name: "Mars Reconnaissance Orbiter",
        catalog_id: "28788",
        class: OrbitClass::SunSynchronous,
        altitude_km: 255.0,
        altitude_reference: AltitudeReference::Surface,
        speed_km_s: 3.4,
        inclination_deg: 93.0,
        period_days: 0.072,
        eccentricity: 0.011,
        raan_deg: 0.0,
        mass: "2180 kg",
        size: "6.5 m × 13.6 m",
        description: "NASA orbiter providing high-resolution imaging",
        color: "#4169E1",
        landing_site: None,
    },
    OrbitDescriptor {
        id: "mars-odyssey",
        name: "Mars Odyssey",
        catalog_id: "26734",
        class: OrbitClass::SunSynchronous,
        altitude_km: 400.0,
        altitude_reference: AltitudeReference::Surface,
        speed_km_s: 3.2,
        inclination_deg: 93.1,
        period_days: 0.088,
        eccentricity: 0.011,
        raan_deg: 0.0,
        mass: "725 kg",
        size: "2.2 m × 1.7 m × 2.6 m",
        description: "NASA orbiter mapping surface composition",
        color: "#1E90FF",
        landing_site: None,
    },
    OrbitDescriptor {
        id: "maven",
        name: "MAVEN",
        catalog_id: "39378",
        class: OrbitClass::Elliptical,
        altitude_km: 150.0,
        altitude_reference: AltitudeReference::Surface,
        speed_km_s: 3.5,
        inclination_deg: 75.0,
        period_days: 0.083,
        eccentricity: 0.571,
        raan_deg: 0.0,
        mass: "2550 kg",
        size: "2.3 m × 2.3 m × 2.0 m",
        description: "NASA mission studying Mars upper atmosphere",
        color: "#9370DB",
        landing_site: None,
    },
    OrbitDescriptor {
        id: "trace-gas-orbiter",
        name: "Trace Gas Orbiter",
        catalog_id: "41382",
        class: OrbitClass::Circular,
        altitude_km: 400.0,
        altitude_reference: AltitudeReference::Surface,
        speed_km_s: 3.2,
        inclination_deg: 74.0,
        period_days: 0.088,
        eccentricity: 0.0,
        raan_deg: 0.0,
        mass: "3732 kg",
        size: "3.2 m × 2.0 m × 2.0 m",
        description: "ESA-Roscosmos orbiter detecting atmospheric trace gases",
        color: "#32CD32",
        landing_site: None,
    },
    OrbitDescriptor {
        id: "mars-2020",
        name: "Mars 2020 (Perseverance)",
        catalog_id: "47827",
        class: OrbitClass::Surface,
        altitude_km: 0.0,
        altitude_reference: AltitudeReference::Surface,
        speed_km_s: 0.0,
        inclination_deg: 0.0,
        period_days: 0.0,
        eccentricity: 0.0,
        raan_deg: 0.0,
        mass: "1025 kg",
        size: "3 m × 2.7 m × 2.2 m",
        description: "NASA rover exploring Jezero Crater",
        color: "#FF6347",
        landing_site: Some((18.38, 77.58)),
    },
];

/// Look up a catalog body by id.
pub fn find_satellite(id: &str) -> Option<&'static OrbitDescriptor> {
    SATELLITES.iter().find(|s| s.id == id)
}
