use egui::{Color32, Pos2, Shape, Stroke, Vec2};

/// Points closer than this to the previous point are not recorded.
pub const MIN_POINT_SPACING: f32 = 0.5;

/// A finished freehand path. Points are relative to the canvas' top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasPath {
    points: Vec<Pos2>,
    width: f32,
    color: Color32,
    erase: bool,
}

impl CanvasPath {
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn is_eraser(&self) -> bool {
        self.erase
    }

    /// Shapes for this path offset to `origin`. Eraser paths paint in `canvas_color`.
    pub fn shapes(&self, origin: Vec2, canvas_color: Color32) -> Vec<Shape> {
        let color = if self.erase { canvas_color } else { self.color };
        let radius = self.width / 2.0;
        let points: Vec<Pos2> = self.points.iter().map(|p| *p + origin).collect();

        match points.as_slice() {
            [] => Vec::new(),
            [dot] => vec![Shape::circle_filled(*dot, radius, color)],
            [first, .., last] => {
                // egui lines have butt caps, so round off both ends
                let caps = [
                    Shape::circle_filled(*first, radius, color),
                    Shape::circle_filled(*last, radius, color),
                ];
                let line = Shape::line(points, Stroke::new(self.width, color));
                std::iter::once(line).chain(caps).collect()
            }
        }
    }
}

/// Collects points for the path currently under the pointer.
///
/// Style is fixed when the path begins so config changes mid-drag do not restyle it.
#[derive(Clone, Debug)]
pub struct PathBuilder {
    points: Vec<Pos2>,
    width: f32,
    color: Color32,
    erase: bool,
}

impl PathBuilder {
    pub fn begin(start: Pos2, width: f32, color: Color32, erase: bool) -> Self {
        Self {
            points: vec![start],
            width,
            color,
            erase,
        }
    }

    pub fn extend(&mut self, point: Pos2) {
        let far_enough = self
            .points
            .last()
            .is_none_or(|last| last.distance(point) >= MIN_POINT_SPACING);
        if far_enough {
            self.points.push(point);
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn finish(self) -> CanvasPath {
        CanvasPath {
            points: self.points,
            width: self.width,
            color: self.color,
            erase: self.erase,
        }
    }

    /// Snapshot for drawing the in-progress path
    pub fn preview(&self) -> CanvasPath {
        self.clone().finish()
    }
}
