//! Receiver capabilities and the vehicles composed from them

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Single-threaded shared handle to a receiver
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a receiver in a [`Shared`] handle
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Ground-plane movement: translate along the current heading, turn in place
pub trait HorizontalMovement: fmt::Debug {
    /// Move `distance` units along the current heading
    fn move_by(&mut self, distance: f64);

    /// Turn by `degrees` (counter-clockwise positive)
    fn rotate_by(&mut self, degrees: f64);
}

/// Vertical movement
pub trait VerticalMovement: fmt::Debug {
    /// Change altitude by `altitude` units
    fn rise_by(&mut self, altitude: f64);
}

/// Position and heading on the ground plane
///
/// Heading is kept in degrees and is not normalized, so a rotate followed by
/// its inverse lands on exactly the same heading value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HorizontalMover {
    x: f64,
    y: f64,
    heading: f64,
}

impl HorizontalMover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Heading in degrees
    pub fn heading(&self) -> f64 {
        self.heading
    }
}

impl HorizontalMovement for HorizontalMover {
    fn move_by(&mut self, distance: f64) {
        let rad = self.heading.to_radians();
        self.x += distance * rad.cos();
        self.y += distance * rad.sin();
    }

    fn rotate_by(&mut self, degrees: f64) {
        self.heading += degrees;
    }
}

/// Altitude above the starting point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VerticalMover {
    altitude: f64,
}

impl VerticalMover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }
}

impl VerticalMovement for VerticalMover {
    fn rise_by(&mut self, altitude: f64) {
        self.altitude += altitude;
    }
}

// Values that round to zero at status precision print as 0, never -0
fn for_status(value: f64) -> f64 {
    if value.abs() < 5e-7 {
        0.0
    } else {
        value
    }
}

/// Remote-controlled drone: moves on the ground plane and vertically
#[derive(Debug, Clone)]
pub struct RcDrone {
    horizontal: Shared<HorizontalMover>,
    vertical: Shared<VerticalMover>,
}

impl RcDrone {
    pub fn new() -> Self {
        Self {
            horizontal: shared(HorizontalMover::new()),
            vertical: shared(VerticalMover::new()),
        }
    }

    /// Handle to the horizontal capability, for connecting to a controller
    pub fn horizontal(&self) -> Shared<HorizontalMover> {
        Rc::clone(&self.horizontal)
    }

    /// Handle to the vertical capability, for connecting to a controller
    pub fn vertical(&self) -> Shared<VerticalMover> {
        Rc::clone(&self.vertical)
    }

    /// Current ground-plane state (copied out)
    pub fn ground(&self) -> HorizontalMover {
        *self.horizontal.borrow()
    }

    pub fn altitude(&self) -> f64 {
        self.vertical.borrow().altitude()
    }

    /// One-line status, e.g. `pos: x[98.000000], y[0.000000], z[0.000000]; angle: 0.000000`
    pub fn status(&self) -> String {
        let ground = self.ground();
        format!(
            "pos: x[{:.6}], y[{:.6}], z[{:.6}]; angle: {:.6}",
            for_status(ground.x()),
            for_status(ground.y()),
            for_status(self.altitude()),
            for_status(ground.heading())
        )
    }
}

impl Default for RcDrone {
    fn default() -> Self {
        Self::new()
    }
}

/// Remote-controlled car: ground-plane movement only
#[derive(Debug, Clone)]
pub struct RcCar {
    horizontal: Shared<HorizontalMover>,
}

impl RcCar {
    pub fn new() -> Self {
        Self {
            horizontal: shared(HorizontalMover::new()),
        }
    }

    pub fn horizontal(&self) -> Shared<HorizontalMover> {
        Rc::clone(&self.horizontal)
    }

    pub fn ground(&self) -> HorizontalMover {
        *self.horizontal.borrow()
    }

    pub fn status(&self) -> String {
        let ground = self.ground();
        format!(
            "pos: x[{:.6}], y[{:.6}]; angle: {:.6}",
            for_status(ground.x()),
            for_status(ground.y()),
            for_status(ground.heading())
        )
    }
}

impl Default for RcCar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_move_follows_heading() {
        let mut mover = HorizontalMover::new();
        mover.move_by(10.0);
        assert!((mover.x() - 10.0).abs() < EPS);
        assert!(mover.y().abs() < EPS);

        mover.rotate_by(90.0);
        mover.move_by(5.0);
        assert!((mover.x() - 10.0).abs() < EPS);
        assert!((mover.y() - 5.0).abs() < EPS);
        assert_eq!(mover.heading(), 90.0);
    }

    #[test]
    fn test_rise_accumulates() {
        let mut mover = VerticalMover::new();
        mover.rise_by(11.0);
        mover.rise_by(-4.0);
        assert_eq!(mover.altitude(), 7.0);
    }

    #[test]
    fn test_drone_handles_share_state() {
        let drone = RcDrone::new();
        drone.horizontal().borrow_mut().move_by(3.0);
        drone.vertical().borrow_mut().rise_by(2.0);

        assert!((drone.ground().x() - 3.0).abs() < EPS);
        assert_eq!(drone.altitude(), 2.0);
    }

    #[test]
    fn test_status_reports_y_not_x() {
        let car = RcCar::new();
        car.horizontal().borrow_mut().rotate_by(90.0);
        car.horizontal().borrow_mut().move_by(4.0);

        let status = car.status();
        assert!(status.contains("y[4.000000]"), "status was: {}", status);
        assert!(status.ends_with("angle: 90.000000"));
    }

    #[test]
    fn test_status_never_prints_negative_zero() {
        let car = RcCar::new();
        car.horizontal().borrow_mut().move_by(-1e-12);
        assert_eq!(car.status(), "pos: x[0.000000], y[0.000000]; angle: 0.000000");
    }

    #[test]
    fn test_drone_status_includes_altitude() {
        let drone = RcDrone::new();
        drone.vertical().borrow_mut().rise_by(11.0);
        assert_eq!(
            drone.status(),
            "pos: x[0.000000], y[0.000000], z[11.000000]; angle: 0.000000"
        );
    }
}
