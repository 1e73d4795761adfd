//! # Direction Module
//!
//! Orientation helpers shared by player implementations.
//!
//! Angles are in degrees. Yaw 0 faces +Z and yaw 90 faces -X. Pitch 0 is level,
//! 90 looks straight down. Compass labels follow the classic convention in which
//! -X is north, so a yaw of 90 reads as `N`.

use std::fmt;

use cgmath::{Angle, Deg, InnerSpace, Vector3};

/// The eight compass points, as shown to players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CardinalDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CardinalDirection {
    /// The compass point a player with the given yaw is facing.
    pub fn from_yaw(yaw: f64) -> Self {
        let rot = (yaw - 90.0).rem_euclid(360.0);

        if rot < 22.5 {
            CardinalDirection::North
        } else if rot < 67.5 {
            CardinalDirection::NorthEast
        } else if rot < 112.5 {
            CardinalDirection::East
        } else if rot < 157.5 {
            CardinalDirection::SouthEast
        } else if rot < 202.5 {
            CardinalDirection::South
        } else if rot < 247.5 {
            CardinalDirection::SouthWest
        } else if rot < 292.5 {
            CardinalDirection::West
        } else if rot < 337.5 {
            CardinalDirection::NorthWest
        } else {
            CardinalDirection::North
        }
    }

    /// Short compass label, e.g. `NW`.
    pub fn as_str(self) -> &'static str {
        match self {
            CardinalDirection::North => "N",
            CardinalDirection::NorthEast => "NE",
            CardinalDirection::East => "E",
            CardinalDirection::SouthEast => "SE",
            CardinalDirection::South => "S",
            CardinalDirection::SouthWest => "SW",
            CardinalDirection::West => "W",
            CardinalDirection::NorthWest => "NW",
        }
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit vector a player with the given pitch and yaw is looking along.
pub fn view_vector(pitch: f64, yaw: f64) -> Vector3<f64> {
    let (yaw_sin, yaw_cos) = Deg(yaw).sin_cos();
    let (pitch_sin, pitch_cos) = Deg(pitch).sin_cos();
    Vector3::new(-yaw_sin * pitch_cos, -pitch_sin, yaw_cos * pitch_cos).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compass_boundaries() {
        assert_eq!(CardinalDirection::from_yaw(90.0), CardinalDirection::North);
        assert_eq!(CardinalDirection::from_yaw(112.4), CardinalDirection::North);
        assert_eq!(CardinalDirection::from_yaw(112.5), CardinalDirection::NorthEast);
        assert_eq!(CardinalDirection::from_yaw(180.0), CardinalDirection::East);
        assert_eq!(CardinalDirection::from_yaw(270.0), CardinalDirection::South);
        assert_eq!(CardinalDirection::from_yaw(0.0), CardinalDirection::West);
        assert_eq!(CardinalDirection::from_yaw(45.0), CardinalDirection::NorthWest);
        assert_eq!(CardinalDirection::from_yaw(80.0), CardinalDirection::North);
    }

    #[test]
    fn negative_and_wrapped_yaw() {
        assert_eq!(CardinalDirection::from_yaw(-90.0), CardinalDirection::South);
        assert_eq!(CardinalDirection::from_yaw(450.0), CardinalDirection::North);
        assert_eq!(CardinalDirection::from_yaw(-315.0), CardinalDirection::NorthWest);
    }

    #[test]
    fn labels() {
        assert_eq!(CardinalDirection::SouthWest.to_string(), "SW");
        assert_eq!(CardinalDirection::North.to_string(), "N");
    }

    #[test]
    fn view_vector_follows_yaw_and_pitch() {
        let south = view_vector(0.0, 0.0);
        assert!((south - Vector3::new(0.0, 0.0, 1.0)).magnitude() < 1e-9);

        let west = view_vector(0.0, 90.0);
        assert!((west - Vector3::new(-1.0, 0.0, 0.0)).magnitude() < 1e-9);

        let down = view_vector(90.0, 0.0);
        assert!((down - Vector3::new(0.0, -1.0, 0.0)).magnitude() < 1e-9);
    }
}
