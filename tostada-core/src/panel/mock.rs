//! Test doubles for the panel collaborators

use crate::color::Color;
use crate::layout::{Point, Rect};
use crate::shade::Shade;
use crate::traits::{
    DisplayDriver, DisplayError, LinkError, ShadeLink, TouchError, TouchSensor,
};

/// Drawing operation recorded by [`MockDisplay`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Fill(Color),
    Outline(Rect, Color),
    FillRect(Rect, Color),
    Text(Point, String, Color),
    Flush,
}

/// Display that records every call
pub struct MockDisplay {
    pub ops: Vec<Op>,
    fail_after: Option<usize>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            fail_after: None,
        }
    }

    /// Fail every call once `n` operations have succeeded
    pub fn failing_after(n: usize) -> Self {
        Self {
            ops: Vec::new(),
            fail_after: Some(n),
        }
    }

    fn record(&mut self, op: Op) -> Result<(), DisplayError> {
        if self.fail_after.is_some_and(|n| self.ops.len() >= n) {
            return Err(DisplayError::Communication);
        }
        self.ops.push(op);
        Ok(())
    }

    pub fn fills(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Fill(_))).count()
    }

    pub fn first_fill(&self) -> Option<Color> {
        self.ops.iter().find_map(|op| match op {
            Op::Fill(c) => Some(*c),
            _ => None,
        })
    }

    /// Outlines drawn in `color`, in drawing order
    pub fn outlines(&self, color: Color) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Outline(r, c) if *c == color => Some(*r),
                _ => None,
            })
            .collect()
    }
}

impl DisplayDriver for MockDisplay {
    fn fill_screen(&mut self, color: Color) -> Result<(), DisplayError> {
        self.record(Op::Fill(color))
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError> {
        self.record(Op::Outline(rect, color))
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError> {
        self.record(Op::FillRect(rect, color))
    }

    fn draw_text(&mut self, origin: Point, text: &str, color: Color) -> Result<(), DisplayError> {
        self.record(Op::Text(origin, text.into(), color))
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.record(Op::Flush)
    }
}

/// Touch sensor reporting a fixed state
pub struct MockTouch {
    count: Result<u8, TouchError>,
    point: Option<Point>,
}

impl MockTouch {
    pub fn at(point: Point) -> Self {
        Self {
            count: Ok(1),
            point: Some(point),
        }
    }

    pub fn released() -> Self {
        Self {
            count: Ok(0),
            point: None,
        }
    }

    /// Count says touched but the point is gone by the time it is read
    pub fn lifted() -> Self {
        Self {
            count: Ok(1),
            point: None,
        }
    }

    pub fn failing(e: TouchError) -> Self {
        Self {
            count: Err(e),
            point: None,
        }
    }
}

impl TouchSensor for MockTouch {
    fn contact_count(&mut self) -> Result<u8, TouchError> {
        self.count
    }

    fn first_contact(&mut self) -> Result<Option<Point>, TouchError> {
        Ok(self.point)
    }
}

/// Link that records payload bytes
pub struct MockLink {
    pub sent: Vec<u8>,
    pub fail_with: Option<LinkError>,
}

impl MockLink {
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            fail_with: None,
        }
    }
}

impl ShadeLink for MockLink {
    fn send(&mut self, shade: Shade) -> Result<(), LinkError> {
        if let Some(e) = self.fail_with {
            return Err(e);
        }
        self.sent.extend_from_slice(&shade.message().encode());
        Ok(())
    }
}
