//! Named points of interest on the surface.

use glam::Vec3;
use mars_orbit::{hex_to_rgb, lat_lon_to_cartesian};

/// Kind of surface feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiteKind {
    Volcano,
    CanyonSystem,
    ImpactBasin,
    VolcanicPlateau,
    IceCap,
    ImpactCrater,
}

impl SiteKind {
    pub fn label(self) -> &'static str {
        match self {
            SiteKind::Volcano => "Volcano",
            SiteKind::CanyonSystem => "Canyon System",
            SiteKind::ImpactBasin => "Impact Basin",
            SiteKind::VolcanicPlateau => "Volcanic Plateau",
            SiteKind::IceCap => "Ice Cap",
            SiteKind::ImpactCrater => "Impact Crater",
        }
    }
}

/// A surface point of interest.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceSite {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: SiteKind,
    pub lat: f64,
    pub lon: f64,
    pub mass: &'static str,
    pub diameter: &'static str,
    pub height: Option<&'static str>,
    pub depth: Option<&'static str>,
    pub thickness: Option<&'static str>,
    pub atmosphere: &'static str,
    pub description: &'static str,
    /// Display color as `#RRGGBB`.
    pub color: &'static str,
}

impl SurfaceSite {
    /// Position on a globe of `radius` centred at the origin.
    pub fn position(&self, radius: f32) -> Vec3 {
        lat_lon_to_cartesian(self.lat, self.lon, f64::from(radius)).as_vec3()
    }

    /// Display color in unit RGB; magenta if malformed.
    pub fn color_rgb(&self) -> [f32; 3] {
        hex_to_rgb(self.color).unwrap_or([1.0, 0.0, 1.0])
    }
}

pub static SITES: [SurfaceSite; 8] = [
    SurfaceSite {
        id: "olympus-mons",
        name: "Olympus Mons",
        kind: SiteKind::Volcano,
        lat: 18.65,
        lon: -133.8,
        mass: "2.5 × 10^15 kg",
        diameter: "624 km",
        height: Some("21.9 km"),
        depth: None,
        thickness: None,
        atmosphere: "Thin CO₂ atmosphere at summit",
        description: "Largest volcano in the solar system",
        color: "#8B4513",
    },
    SurfaceSite {
        id: "valles-marineris",
        name: "Valles Marineris",
        kind: SiteKind::CanyonSystem,
        lat: -13.9,
        lon: -59.2,
        mass: "1.8 × 10^14 kg",
        diameter: "4000 km",
        height: None,
        depth: Some("7 km"),
        thickness: None,
        atmosphere: "Surface pressure ~0.6 kPa",
        description: "Largest canyon system in the solar system",
        color: "#654321",
    },
    SurfaceSite {
        id: "hellas-planitia",
        name: "Hellas Planitia",
        kind: SiteKind::ImpactBasin,
        lat: -42.4,
        lon: 70.5,
        mass: "3.2 × 10^15 kg",
        diameter: "2300 km",
        height: None,
        depth: Some("7.2 km"),
        thickness: None,
        atmosphere: "Denser atmosphere due to depth",
        description: "One of the largest impact craters on Mars",
        color: "#A0522D",
    },
    SurfaceSite {
        id: "tharsis-rise",
        name: "Tharsis Rise",
        kind: SiteKind::VolcanicPlateau,
        lat: 0.0,
        lon: -112.0,
        mass: "5.0 × 10^15 kg",
        diameter: "5000 km",
        height: Some("10 km"),
        depth: None,
        thickness: None,
        atmosphere: "Thin atmosphere, high altitude",
        description: "Massive volcanic plateau with several large volcanoes",
        color: "#CD853F",
    },
    SurfaceSite {
        id: "north-polar-cap",
        name: "North Polar Cap",
        kind: SiteKind::IceCap,
        lat: 85.0,
        lon: 0.0,
        mass: "1.6 × 10^16 kg",
        diameter: "1000 km",
        height: None,
        depth: None,
        thickness: Some("3 km"),
        atmosphere: "Seasonal CO₂ and water ice",
        description: "Permanent water ice cap with seasonal CO₂",
        color: "#E0E0E0",
    },
    SurfaceSite {
        id: "south-polar-cap",
        name: "South Polar Cap",
        kind: SiteKind::IceCap,
        lat: -87.0,
        lon: 0.0,
        mass: "1.2 × 10^16 kg",
        diameter: "350 km",
        height: None,
        depth: None,
        thickness: Some("3.7 km"),
        atmosphere: "Permanent CO₂ ice cap",
        description: "Permanent carbon dioxide ice cap",
        color: "#F0F0F0",
    },
    SurfaceSite {
        id: "gale-crater",
        name: "Gale Crater",
        kind: SiteKind::ImpactCrater,
        lat: -5.4,
        lon: 137.8,
        mass: "8.5 × 10^13 kg",
        diameter: "154 km",
        height: None,
        depth: Some("4.5 km"),
        thickness: None,
        atmosphere: "Surface pressure ~0.7 kPa",
        description: "Landing site of Curiosity rover, contains Mount Sharp",
        color: "#9C7B3C",
    },
    SurfaceSite {
        id: "jezero-crater",
        name: "Jezero Crater",
        kind: SiteKind::ImpactCrater,
        lat: 18.38,
        lon: 77.58,
        mass: "7.2 × 10^13 kg",
        diameter: "49 km",
        height: None,
        depth: Some("500 m"),
        thickness: None,
        atmosphere: "Surface pressure ~0.7 kPa",
        description: "Landing site of Perseverance rover, ancient river delta",
        color: "#8B7355",
    },
];

/// Look up a site by id.
pub fn find_site(id: &str) -> Option<&'static SurfaceSite> {
    SITES.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(find_site("gale-crater").map(|s| s.name), Some("Gale Crater"));
        assert!(find_site("cydonia").is_none());
    }

    #[test]
    fn test_positions_on_globe() {
        for site in &SITES {
            let p = site.position(2.0);
            assert!((p.length() - 2.0).abs() < 1e-5, "{}", site.id);
        }
        assert!(find_site("north-polar-cap").unwrap().position(1.0).y > 0.99);
        assert!(find_site("south-polar-cap").unwrap().position(1.0).y < -0.99);
    }

    #[test]
    fn test_colors_parse() {
        assert!(SITES.iter().all(|s| hex_to_rgb(s.color).is_some()));
    }

    #[test]
    fn test_optional_measurements() {
        let olympus = find_site("olympus-mons").unwrap();
        assert_eq!(olympus.height, Some("21.9 km"));
        assert!(olympus.depth.is_none());
        assert_eq!(olympus.kind.label(), "Volcano");
    }
}
