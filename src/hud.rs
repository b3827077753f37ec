use nalgebra::{Point2, Rotation2, Vector2};

// ---------------------------------------------------------------------------
// Artificial horizon geometry
// ---------------------------------------------------------------------------
// Screen convention: y grows downward, as in the windowing layer. The
// horizon line is rotated by -roll and shifted along the rotated vertical
// by pitch, so a nose-up attitude pushes the horizon down the screen.

/// One rung of the pitch ladder: the pitch angle it marks and its endpoints.
#[derive(Debug, Clone, Copy)]
pub struct LadderRung {
    pub angle: f64, // deg
    pub left: Point2<f64>,
    pub right: Point2<f64>,
}

/// Maps attitude angles to screen-space line segments for the HUD.
#[derive(Debug, Clone)]
pub struct HorizonGeometry {
    pub center: Point2<f64>,
    pub half_width: f64,  // px, horizon line half length
    pub pitch_scale: f64, // px per degree of pitch
}

impl HorizonGeometry {
    pub fn new(center: Point2<f64>, half_width: f64, pitch_scale: f64) -> Self {
        Self { center, half_width, pitch_scale }
    }

    fn attitude_frame(&self, roll_deg: f64) -> Rotation2<f64> {
        Rotation2::new((-roll_deg).to_radians())
    }

    /// Screen endpoints of a line parallel to the horizon, `angle_deg` of
    /// pitch away from the aircraft's nose.
    fn attitude_line(
        &self,
        angle_deg: f64,
        pitch_deg: f64,
        roll_deg: f64,
        half_len: f64,
    ) -> (Point2<f64>, Point2<f64>) {
        let frame = self.attitude_frame(roll_deg);
        let along = frame * Vector2::new(1.0, 0.0);
        let down = frame * Vector2::new(0.0, 1.0);
        let mid = self.center + down * (pitch_deg - angle_deg) * self.pitch_scale;
        (mid - along * half_len, mid + along * half_len)
    }

    /// The horizon line itself.
    pub fn horizon_line(&self, pitch_deg: f64, roll_deg: f64) -> (Point2<f64>, Point2<f64>) {
        self.attitude_line(0.0, pitch_deg, roll_deg, self.half_width)
    }

    /// Pitch-ladder rungs every 10 deg within 30 deg of the current pitch,
    /// excluding the horizon itself.
    pub fn pitch_ladder(&self, pitch_deg: f64, roll_deg: f64) -> Vec<LadderRung> {
        let mut rungs = Vec::new();
        let mut angle = -80.0;
        while angle <= 80.0 {
            if angle != 0.0 && (angle - pitch_deg).abs() <= 30.0 {
                let (left, right) =
                    self.attitude_line(angle, pitch_deg, roll_deg, self.half_width * 0.3);
                rungs.push(LadderRung { angle, left, right });
            }
            angle += 10.0;
        }
        rungs
    }

    /// Bank pointer on an arc of the given radius; straight up at zero roll.
    pub fn bank_pointer(&self, roll_deg: f64, radius: f64) -> Point2<f64> {
        self.center + self.attitude_frame(roll_deg) * Vector2::new(0.0, -radius)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn geometry() -> HorizonGeometry {
        HorizonGeometry::new(Point2::new(400.0, 300.0), 200.0, 4.0)
    }

    #[test]
    fn level_flight_horizon_is_level_through_center() {
        let geo = geometry();
        let (a, b) = geo.horizon_line(0.0, 0.0);
        assert_relative_eq!(a.y, 300.0, epsilon = 1e-9);
        assert_relative_eq!(b.y, 300.0, epsilon = 1e-9);
        assert_relative_eq!(a.x, 200.0, epsilon = 1e-9);
        assert_relative_eq!(b.x, 600.0, epsilon = 1e-9);
    }

    #[test]
    fn nose_up_pushes_horizon_down_the_screen() {
        let geo = geometry();
        let (a, b) = geo.horizon_line(10.0, 0.0);
        assert_relative_eq!(a.y, 340.0, epsilon = 1e-9);
        assert_relative_eq!(b.y, 340.0, epsilon = 1e-9);
    }

    #[test]
    fn right_bank_raises_the_right_end() {
        let geo = geometry();
        let (left, right) = geo.horizon_line(0.0, 30.0);
        assert!(right.y < left.y, "Banking right should raise the horizon's right end");
        assert_relative_eq!(left.y - 300.0, 300.0 - right.y, epsilon = 1e-9);
    }

    #[test]
    fn ladder_skips_the_horizon_and_stays_near_current_pitch() {
        let geo = geometry();
        let rungs = geo.pitch_ladder(15.0, 0.0);
        assert!(rungs.iter().all(|r| r.angle != 0.0));
        assert!(rungs.iter().all(|r| (r.angle - 15.0).abs() <= 30.0));
        // -10 through 40, minus the horizon
        assert_eq!(rungs.len(), 5);
    }

    #[test]
    fn rung_at_current_pitch_passes_through_center() {
        let geo = geometry();
        let rungs = geo.pitch_ladder(20.0, 45.0);
        let at_pitch = rungs.iter().find(|r| r.angle == 20.0).unwrap();
        let mid = nalgebra::center(&at_pitch.left, &at_pitch.right);
        assert_relative_eq!(mid.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(mid.y, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn bank_pointer_tracks_roll() {
        let geo = geometry();
        let up = geo.bank_pointer(0.0, 100.0);
        assert_relative_eq!(up.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(up.y, 200.0, epsilon = 1e-9);

        // Rolling right swings the sky pointer left across the screen
        let banked = geo.bank_pointer(90.0, 100.0);
        assert_relative_eq!(banked.x, 300.0, epsilon = 1e-9);
        assert_relative_eq!(banked.y, 300.0, epsilon = 1e-9);
    }
}
