//! Static scene tables: the sun, nine planets, the Moon, asteroid fields and
//! the near-Earth / potentially hazardous object lists.
//!
//! Distances and sizes are scene units chosen for readability, not physical
//! scale. Angles are in degrees here and converted once at scene build.

pub const PLANET_COUNT: usize = 9;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 15.0;
pub const SUN_COLOR: u32 = 0xffcc33;
/// Self-rotation per tick at speed 1.
pub const SUN_SPIN: f32 = 0.004;
pub const SUN_LIGHT_INTENSITY: f32 = 4.0;
pub const SUN_LIGHT_RANGE: f32 = 300.0;

// ── Planets ──────────────────────────────────────────────────────────

/// A flat ring around a planet, in planet-local units.
#[derive(Debug, Clone, Copy)]
pub struct RingDef {
    pub inner: f32,
    pub outer: f32,
    pub color: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct PlanetDef {
    pub name: &'static str,
    pub radius: f32,
    pub semi_major: f64,
    pub semi_minor: f64,
    pub inclination_deg: f64,
    /// Radians per tick at speed 1.
    pub speed: f64,
    pub color: u32,
    pub ring: Option<RingDef>,
    pub has_moon: bool,
}

const fn planet(
    name: &'static str,
    radius: f32,
    semi_major: f64,
    semi_minor: f64,
    inclination_deg: f64,
    speed: f64,
    color: u32,
) -> PlanetDef {
    PlanetDef {
        name,
        radius,
        semi_major,
        semi_minor,
        inclination_deg,
        speed,
        color,
        ring: None,
        has_moon: false,
    }
}

pub const PLANETS: [PlanetDef; PLANET_COUNT] = [
    planet("Mercury", 3.2, 28.0, 22.0, 7.0, 0.004, 0x8c8c8c),
    planet("Venus", 5.8, 44.0, 35.0, 3.4, 0.015, 0xe6c27a),
    PlanetDef { has_moon: true, ..planet("Earth", 6.0, 62.0, 50.0, 0.0, 0.01, 0x2f6ad9) },
    planet("Mars", 4.0, 78.0, 65.0, 1.85, 0.008, 0xc1440e),
    planet("Jupiter", 12.0, 100.0, 85.0, 1.3, 0.002, 0xd8ca9d),
    PlanetDef {
        ring: Some(RingDef { inner: 10.0, outer: 20.0, color: 0xc9b28a }),
        ..planet("Saturn", 10.0, 138.0, 110.0, 2.49, 0.0009, 0xe3c07b)
    },
    PlanetDef {
        ring: Some(RingDef { inner: 7.0, outer: 12.0, color: 0x9fd8e0 }),
        ..planet("Uranus", 7.0, 176.0, 145.0, 0.77, 0.0004, 0x7fd6e0)
    },
    planet("Neptune", 7.0, 200.0, 160.0, 1.77, 0.0001, 0x3f54ba),
    planet("Pluto", 2.8, 216.0, 175.0, 17.16, 0.0007, 0xb8a38a),
];

pub const PATH_COLOR: u32 = 0xffffff;

// ── Moon ─────────────────────────────────────────────────────────────

pub const MOON_RADIUS: f32 = 1.5;
/// Offset from Earth in the Earth pivot's frame.
pub const MOON_OFFSET: f32 = 10.0;
/// Fixed spin of the Moon's pivot, per tick, independent of speed.
pub const MOON_SPIN: f32 = 0.02;
pub const MOON_COLOR: u32 = 0xaaaaaa;

// ── Asteroid fields ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct BeltDef {
    pub inner: f64,
    pub outer: f64,
    pub count: usize,
}

/// Main belt between Mars and Jupiter, then a wide scattered field.
pub const BELTS: [BeltDef; 2] = [
    BeltDef { inner: 85.0, outer: 95.0, count: 2000 },
    BeltDef { inner: 0.0, outer: 1000.0, count: 5000 },
];
pub const ASTEROID_RADIUS: f32 = 0.2;
pub const ASTEROID_COLOR: u32 = 0x808080;
pub const ASTEROID_SPEED: (f64, f64) = (0.0005, 0.002);

// ── Near-Earth and potentially hazardous objects ─────────────────────

#[derive(Debug, Clone, Copy)]
pub struct SmallBodyDef {
    pub name: &'static str,
    pub diameter: f32,
    pub semi_major: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
}

const fn small(name: &'static str, diameter: f32, semi_major: f64, eccentricity: f64, inclination_deg: f64) -> SmallBodyDef {
    SmallBodyDef { name, diameter, semi_major, eccentricity, inclination_deg }
}

pub const NEOS: [SmallBodyDef; 20] = [
    small("Apollo", 1.1, 70.0, 0.7, 10.0),
    small("Amor", 0.9, 80.0, 0.4, 5.0),
    small("Aten", 1.0, 85.0, 0.5, 8.0),
    small("Phaethon", 1.1, 90.0, 0.6, 7.0),
    small("Eros", 0.8, 95.0, 0.3, 11.0),
    small("Ganymed", 0.7, 100.0, 0.4, 9.0),
    small("Icarus", 1.2, 105.0, 0.5, 6.0),
    small("Geographos", 0.6, 110.0, 0.4, 15.0),
    small("Hathor", 1.1, 115.0, 0.5, 12.0),
    small("Toro", 1.0, 120.0, 0.3, 5.0),
    small("Anteros", 0.9, 125.0, 0.6, 10.0),
    small("Alinda", 0.8, 130.0, 0.7, 14.0),
    small("Bacchus", 1.2, 135.0, 0.5, 7.0),
    small("Castalia", 0.9, 140.0, 0.6, 8.0),
    small("Hermes", 0.8, 145.0, 0.7, 5.0),
    small("Hektor", 1.1, 150.0, 0.4, 11.0),
    small("Orpheus", 1.0, 155.0, 0.6, 9.0),
    small("Daedalus", 1.2, 160.0, 0.5, 10.0),
    small("Juno", 1.1, 165.0, 0.3, 12.0),
    small("Kleopatra", 0.7, 170.0, 0.4, 15.0),
];

pub const PHOS: [SmallBodyDef; 20] = [
    small("Apophis", 0.9, 180.0, 0.7, 20.0),
    small("Toutatis", 0.8, 190.0, 0.5, 25.0),
    small("Bennu", 0.6, 200.0, 0.4, 15.0),
    small("1999 RQ36", 0.9, 210.0, 0.6, 10.0),
    small("Didymos", 1.0, 220.0, 0.5, 8.0),
    small("Psyche", 1.2, 230.0, 0.7, 7.0),
    small("Ryugu", 1.1, 240.0, 0.3, 11.0),
    small("Florence", 1.2, 250.0, 0.4, 9.0),
    small("Aegis", 1.0, 260.0, 0.6, 12.0),
    small("2005 YU55", 0.8, 270.0, 0.5, 14.0),
    small("1998 OR2", 1.1, 280.0, 0.4, 5.0),
    small("1989 JA", 0.9, 290.0, 0.7, 10.0),
    small("2007 VK184", 1.2, 300.0, 0.5, 7.0),
    small("1997 XF11", 0.7, 310.0, 0.6, 8.0),
    small("1994 WR12", 1.0, 320.0, 0.5, 11.0),
    small("1991 VG", 1.1, 330.0, 0.4, 6.0),
    small("2012 DA14", 1.2, 340.0, 0.7, 12.0),
    small("2014 JO25", 1.0, 350.0, 0.5, 10.0),
    small("2013 TX68", 0.9, 360.0, 0.6, 8.0),
    small("2010 RF12", 1.1, 370.0, 0.4, 9.0),
];

/// Per-tick speed band at speed 1: `base + rand × spread`.
pub const SMALL_BODY_SPEED: (f64, f64) = (0.001, 0.001);
pub const SMALL_BODY_COLOR: u32 = 0x9a8f84;

pub const TAIL_LENGTH: usize = 100;
pub const TAIL_MARKER_RADIUS: f32 = 0.25;
pub const NEO_TAIL_COLOR: u32 = 0xff0000;
pub const PHO_TAIL_COLOR: u32 = 0xff9900;

/// Name label: offset above the body and quad size.
pub const LABEL_HEIGHT: f32 = 10.0;
pub const LABEL_SIZE: (f32, f32) = (20.0, 10.0);
