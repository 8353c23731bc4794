//! Gravity, integration, and bounce response

use glam::Vec2;

use super::line::Line;
use super::world::Circle;
use crate::consts::MAX_BOUNCE_STEPS;
use crate::geom::reflect_velocity;
use crate::profile::PhysicsProfile;

/// Add the per-tick gravity increment to the circle's vertical velocity
pub fn apply_gravity(circle: &mut Circle, profile: PhysicsProfile) {
    circle.velocity.y += profile.gravity();
}

/// Advance the circle by one motion step
pub fn move_circle(circle: &mut Circle, profile: PhysicsProfile) {
    circle.center += circle.velocity * profile.velocity_scale();
}

/// Bounce `circle` off `line`, assuming they currently intersect.
///
/// Reflects the velocity about the contact normal, then re-applies the
/// motion step until the circle has cleared the line, so the same contact
/// cannot re-trigger within this tick. The step count is capped; past the
/// cap the circle is left where it is.
pub fn bounce_circle(circle: &mut Circle, line: &Line, profile: PhysicsProfile) {
    let closest = line.closest_point(circle.center, profile);
    let normal = (circle.center - closest).normalize_or_zero();
    if normal == Vec2::ZERO {
        // center sits exactly on the segment: no usable contact normal
        return;
    }

    circle.velocity = reflect_velocity(circle.velocity, normal);

    let mut steps = 0;
    while line.intersects_circle(circle.center, circle.radius, profile) {
        if steps >= MAX_BOUNCE_STEPS {
            log::warn!(
                "bounce failed to clear line at {:?} after {MAX_BOUNCE_STEPS} steps",
                line.center
            );
            break;
        }
        move_circle(circle, profile);
        steps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: PhysicsProfile = PhysicsProfile::Classic;

    fn falling_circle(center: Vec2, velocity: Vec2) -> Circle {
        let mut circle = Circle::new(center);
        circle.velocity = velocity;
        circle
    }

    #[test]
    fn test_gravity_only_touches_vertical_velocity() {
        let mut circle = falling_circle(Vec2::ZERO, Vec2::new(1.0, 2.0));
        apply_gravity(&mut circle, PROFILE);
        assert_eq!(circle.velocity.x, 1.0);
        assert!((circle.velocity.y - 2.06).abs() < 1e-5);
    }

    #[test]
    fn test_move_integrates_velocity() {
        let mut circle = falling_circle(Vec2::new(10.0, 10.0), Vec2::new(3.0, -1.0));
        move_circle(&mut circle, PROFILE);
        assert_eq!(circle.center, Vec2::new(13.0, 9.0));

        // scaled profile integrates at 1/30
        let mut circle = falling_circle(Vec2::ZERO, Vec2::new(30.0, 60.0));
        move_circle(&mut circle, PhysicsProfile::Scaled);
        assert!((circle.center - Vec2::new(1.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn test_bounce_preserves_speed() {
        let line = Line::new(Vec2::new(100.0, 100.0));
        let mut circle = falling_circle(Vec2::new(100.0, 97.0), Vec2::new(1.5, 2.0));
        let speed = circle.velocity.length();

        bounce_circle(&mut circle, &line, PROFILE);
        assert!((circle.velocity.length() - speed).abs() < 1e-3);
    }

    #[test]
    fn test_bounce_clears_the_line() {
        let line = Line::new(Vec2::new(100.0, 100.0));
        // penetrating from above, moving down
        let mut circle = falling_circle(Vec2::new(100.0, 97.0), Vec2::new(0.0, 2.0));
        assert!(line.intersects_circle(circle.center, circle.radius, PROFILE));

        bounce_circle(&mut circle, &line, PROFILE);

        // no residual overlap: distance to the line is at least the radius
        assert!(!line.intersects_circle(circle.center, circle.radius, PROFILE));
        // reflected straight back up
        assert!(circle.velocity.y < 0.0);
    }

    #[test]
    fn test_bounce_reflects_about_contact_normal() {
        let line = Line::new(Vec2::new(100.0, 100.0));
        let mut circle = falling_circle(Vec2::new(90.0, 98.0), Vec2::new(2.0, 3.0));
        bounce_circle(&mut circle, &line, PROFILE);
        // horizontal line above: normal is (0, -1), so vx survives and vy flips
        assert!((circle.velocity.x - 2.0).abs() < 1e-3);
        assert!((circle.velocity.y - (-3.0)).abs() < 1e-3);
    }

    #[test]
    fn test_bounce_cap_terminates_with_zero_velocity() {
        let line = Line::new(Vec2::new(100.0, 100.0));
        // stationary circle resting inside the line can never clear it
        let mut circle = falling_circle(Vec2::new(100.0, 98.0), Vec2::ZERO);
        bounce_circle(&mut circle, &line, PROFILE);
        // the loop gave up instead of hanging; position unchanged
        assert_eq!(circle.center, Vec2::new(100.0, 98.0));
    }

    #[test]
    fn test_bounce_skips_degenerate_contact() {
        let line = Line::new(Vec2::new(100.0, 100.0));
        // center exactly on the segment: normalization is undefined
        let mut circle = falling_circle(Vec2::new(100.0, 100.0), Vec2::new(1.0, 1.0));
        bounce_circle(&mut circle, &line, PROFILE);
        assert_eq!(circle.velocity, Vec2::new(1.0, 1.0));
        assert_eq!(circle.center, Vec2::new(100.0, 100.0));
    }
}
