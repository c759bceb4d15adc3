use skrifa::outline::pen::OutlinePen;
use zeno::{Command, Point};

/// Pen that records an outline as zeno path commands.
///
/// Font outlines are y-up while zeno (and the surface it paints) is y-down,
/// so every y coordinate is negated. The recorded path is positioned
/// relative to the glyph origin on the baseline.
#[derive(Clone, Default, Debug)]
pub struct ZenoPen {
    commands: Vec<Command>,
}

impl ZenoPen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

fn point(x: f32, y: f32) -> Point {
    Point::new(x, -y)
}

impl OutlinePen for ZenoPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(Command::MoveTo(point(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(Command::LineTo(point(x, y)));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.commands.push(Command::QuadTo(point(cx0, cy0), point(x, y)));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.commands.push(Command::CurveTo(
            point(cx0, cy0),
            point(cx1, cy1),
            point(x, y),
        ));
    }

    fn close(&mut self) {
        self.commands.push(Command::Close);
    }
}
