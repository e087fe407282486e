use crate::{
    angle::Angle,
    geometry::{angle_of, circle_point, Point},
};

/// A circular arc swept from `start_angle` to `end_angle` around `center`.
///
/// The end points are derived from the angles, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcElement {
    pub center: Point,
    pub radius: f64,
    pub start_angle: Angle,
    pub end_angle: Angle,
    /// Clockwise when true.
    pub negative_direction: bool,
}

impl ArcElement {
    pub fn new(
        center: Point,
        radius: f64,
        start_angle: Angle,
        end_angle: Angle,
        negative_direction: bool,
    ) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            negative_direction,
        }
    }

    /// Builds an arc whose angles point at `start` and `end`. The points themselves do not
    /// need to lie on the circle.
    pub fn from_points(
        center: Point,
        radius: f64,
        start: Point,
        end: Point,
        negative_direction: bool,
    ) -> Self {
        Self::new(
            center,
            radius,
            angle_of(start, center),
            angle_of(end, center),
            negative_direction,
        )
    }

    pub fn start(&self) -> Point {
        circle_point(self.center, self.radius, self.start_angle.radians())
    }

    pub fn end(&self) -> Point {
        circle_point(self.center, self.radius, self.end_angle.radians())
    }

    pub fn start_heading(&self) -> Angle {
        self.tangent(self.start_angle)
    }

    pub fn end_heading(&self) -> Angle {
        self.tangent(self.end_angle)
    }

    /// Heading of the arc where the radius through `point` crosses it.
    pub fn heading_at(&self, point: Point) -> Angle {
        self.tangent(angle_of(point, self.center))
    }

    fn tangent(&self, radius_angle: Angle) -> Angle {
        if self.negative_direction {
            Angle::from_degrees(radius_angle.degrees() - 90.0)
        } else {
            Angle::from_degrees(radius_angle.degrees() + 90.0)
        }
    }

    /// Angle swept when walking from the start of the arc, in its direction, to `point`.
    pub fn angular_length(&self, point: Point) -> Angle {
        self.sweep_between(self.start_angle, angle_of(point, self.center))
    }

    /// Angle swept when continuing past the current end of the arc to `point`.
    pub fn angular_distance_from_end(&self, point: Point) -> Angle {
        self.sweep_between(self.end_angle, angle_of(point, self.center))
    }

    fn sweep_between(&self, from: Angle, to: Angle) -> Angle {
        let factor = if self.negative_direction { -1.0 } else { 1.0 };
        Angle::from_radians(factor * (to.radians() - from.radians()))
    }

    /// The same curve walked the other way round.
    pub fn reversed(&self) -> Self {
        Self::new(
            self.center,
            self.radius,
            self.end_angle,
            self.start_angle,
            !self.negative_direction,
        )
    }

    pub fn with_end(&self, end: Point) -> Self {
        Self {
            end_angle: angle_of(end, self.center),
            ..*self
        }
    }
}
