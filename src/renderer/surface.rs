//! Drawing surface abstraction.
//!
//! The chord renderer only talks to [`Surface`]. A backend receives
//! coordinates in the unscaled space given to [`Surface::create`] and is
//! responsible for fitting that space into its container (see [`Fit`]).

/// Measured size of the host element a diagram is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    pub width: f64,
    pub height: f64,
}

impl Container {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Uniform scale + translation placing a `width x height` drawing centered
/// in a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Fit {
    pub fn new(container: Container, width: f64, height: f64) -> Self {
        let scale = (container.height / height).min(container.width / width);
        Self {
            scale,
            translate_x: (container.width - width * scale) / 2.0,
            translate_y: (container.height - height * scale) / 2.0,
        }
    }

    /// Map an unscaled point into container coordinates.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.scale + self.translate_x, y * self.scale + self.translate_y)
    }
}

/// Index of a primitive within its surface, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font<'a> {
    pub family: &'a str,
    pub size: f64,
    pub style: &'a str,
    pub weight: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke<'a> {
    pub color: &'a str,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle<'a> {
    pub stroke: Stroke<'a>,
    pub fill: &'a str,
}

/// Fill/stroke for rects and circles. `None` leaves the part unpainted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShapeStyle<'a> {
    pub fill: Option<&'a str>,
    pub stroke: Option<Stroke<'a>>,
    pub corner_radius: Option<f64>,
}

/// Primitive 2D drawing operations a chord diagram is built from.
pub trait Surface: Sized {
    /// Allocate a `width x height` drawing area fitted into `container`.
    fn create(container: Container, width: f64, height: f64) -> Self;

    /// Text horizontally centered on `x`, top edge at `y`.
    fn text(&mut self, x: f64, y: f64, text: &str, font: &Font<'_>, style: &TextStyle<'_>) -> ElementId;

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &Stroke<'_>) -> ElementId;

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &ShapeStyle<'_>) -> ElementId;

    fn circle(&mut self, cx: f64, cy: f64, radius: f64, style: &ShapeStyle<'_>) -> ElementId;
}
