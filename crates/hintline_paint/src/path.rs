//! Path building and representation

use bytemuck::{Pod, Zeroable};
use smallvec::SmallVec;

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// Path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, end: Point },
    Close,
}

/// A 2D path composed of commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 4]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single quadratic curve from `start` to `end` bent toward `control`
    pub fn quad(start: Point, control: Point, end: Point) -> Self {
        PathBuilder::new()
            .move_to(start.x, start.y)
            .quad_to(control.x, control.y, end.x, end.y)
            .build()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Approximate the path with line segments, splitting each curve into
    /// `segments` pieces. Hosts that can only stroke polylines draw these.
    pub fn flatten(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        let mut points = Vec::new();
        let mut current = Point::ZERO;
        let mut subpath_start = Point::ZERO;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    points.push(p);
                    current = p;
                    subpath_start = p;
                }
                PathCommand::LineTo(p) => {
                    points.push(p);
                    current = p;
                }
                PathCommand::QuadTo { control, end } => {
                    for i in 1..=segments {
                        let t = i as f32 / segments as f32;
                        let a = current.lerp(control, t);
                        let b = control.lerp(end, t);
                        points.push(a.lerp(b, t));
                    }
                    current = end;
                }
                PathCommand::Close => {
                    points.push(subpath_start);
                    current = subpath_start;
                }
            }
        }

        points
    }
}

/// Builder for constructing paths
pub struct PathBuilder {
    path: Path,
    current: Point,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            path: Path::new(),
            current: Point::ZERO,
        }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.commands.push(PathCommand::MoveTo(point));
        self.current = point;
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.commands.push(PathCommand::LineTo(point));
        self.current = point;
        self
    }

    pub fn quad_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        let end = Point::new(x, y);
        self.path.commands.push(PathCommand::QuadTo {
            control: Point::new(cx, cy),
            end,
        });
        self.current = end;
        self
    }

    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    /// The pen position after the last command
    pub fn current(&self) -> Point {
        self.current
    }

    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}
