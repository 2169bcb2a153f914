//! Orbiting hero scene: a core, six satellites and two tilted rings.

use std::f64::consts::TAU;

pub const SATELLITE_COLORS: [&str; 6] = [
    "#6366f1", "#8b5cf6", "#ec4899", "#10b981", "#f59e0b", "#06b6d4",
];

const TIME_SCALE: f64 = 0.4;
const GROUP_SPIN: f64 = 0.2;
const ORBIT_RADIUS: f64 = 3.0;
const BOB_HEIGHT: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SatellitePose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl SatellitePose {
    /// CSS transform with scene units scaled to `unit_px`. Scene `y` points up,
    /// CSS `y` points down.
    pub fn transform(&self, unit_px: f64) -> String {
        format!(
            "transform: translate3d({:.2}px, {:.2}px, {:.2}px) rotateX({:.4}rad) rotateY({:.4}rad);",
            self.x * unit_px,
            -self.y * unit_px,
            self.z * unit_px,
            self.rotate_x,
            self.rotate_y,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScenePose {
    pub group_yaw: f64,
    pub satellites: [SatellitePose; 6],
}

impl ScenePose {
    pub fn at(elapsed_secs: f64) -> Self {
        let time = elapsed_secs * TIME_SCALE;
        let satellites = std::array::from_fn(|index| {
            let offset = index as f64 * TAU / SATELLITE_COLORS.len() as f64;
            SatellitePose {
                x: (time + offset).cos() * ORBIT_RADIUS,
                y: (time * 2.0 + offset).sin() * BOB_HEIGHT,
                z: (time + offset).sin() * ORBIT_RADIUS,
                rotate_x: time + offset,
                rotate_y: time * 0.5 + offset,
            }
        });

        Self {
            group_yaw: time * GROUP_SPIN,
            satellites,
        }
    }

    pub fn group_transform(&self) -> String {
        format!("transform: rotateY({:.4}rad);", self.group_yaw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satellites_ride_a_fixed_radius_orbit() {
        for elapsed in [0.0, 1.3, 17.0, 240.5] {
            let pose = ScenePose::at(elapsed);
            for satellite in pose.satellites {
                let radius = (satellite.x.powi(2) + satellite.z.powi(2)).sqrt();
                assert!((radius - ORBIT_RADIUS).abs() < 1e-9);
                assert!(satellite.y.abs() <= BOB_HEIGHT + 1e-12);
            }
        }
    }

    #[test]
    fn satellites_start_evenly_spaced() {
        let pose = ScenePose::at(0.0);
        assert_eq!(pose.group_yaw, 0.0);
        assert!((pose.satellites[0].x - ORBIT_RADIUS).abs() < 1e-12);

        for (index, satellite) in pose.satellites.iter().enumerate() {
            let expected = index as f64 * TAU / 6.0;
            assert!((satellite.rotate_x - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn group_spins_slower_than_the_orbit() {
        let pose = ScenePose::at(10.0);
        assert!((pose.group_yaw - 0.8).abs() < 1e-12);
        assert!(pose.group_transform().contains("rotateY(0.8000rad)"));
    }

    #[test]
    fn transform_flips_vertical_axis() {
        let pose = SatellitePose {
            x: 1.0,
            y: 0.5,
            z: -2.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
        };
        assert!(pose
            .transform(40.0)
            .starts_with("transform: translate3d(40.00px, -20.00px, -80.00px)"));
    }
}
