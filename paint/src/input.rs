//! Values extracted from mouse and keyboard events.

use kurbo::{Point, Rect, Size};

/// The set of mouse buttons held during an event, as the DOM `buttons` mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MouseButtons(u16);

impl MouseButtons {
    pub const NONE: MouseButtons = MouseButtons(0);
    pub const PRIMARY: MouseButtons = MouseButtons(1);
    pub const SECONDARY: MouseButtons = MouseButtons(1 << 1);
    pub const AUXILIARY: MouseButtons = MouseButtons(1 << 2);
    pub const BACK: MouseButtons = MouseButtons(1 << 3);
    pub const FORWARD: MouseButtons = MouseButtons(1 << 4);

    pub const fn from_bits(bits: u16) -> MouseButtons {
        MouseButtons(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Whether every button in `other` is held.
    pub const fn contains(self, other: MouseButtons) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for MouseButtons {
    type Output = MouseButtons;

    fn bitor(self, rhs: MouseButtons) -> MouseButtons {
        MouseButtons(self.0 | rhs.0)
    }
}

/// A legacy DOM `keyCode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const BACKSPACE: KeyCode = KeyCode(8);
    pub const ENTER: KeyCode = KeyCode(13);
    pub const ESCAPE: KeyCode = KeyCode(27);
    pub const SPACE: KeyCode = KeyCode(32);
    pub const LEFT: KeyCode = KeyCode(37);
    pub const UP: KeyCode = KeyCode(38);
    pub const RIGHT: KeyCode = KeyCode(39);
    pub const DOWN: KeyCode = KeyCode(40);
}

/// Map a position in client (viewport) coordinates to canvas pixels.
///
/// `bounds` is where the canvas is laid out on the page and `bitmap` is the
/// size of its pixel buffer; the two differ when the canvas is scaled by CSS.
/// A zero-sized `bounds` yields non-finite coordinates, as on the platform.
pub fn canvas_position(client: Point, bounds: Rect, bitmap: Size) -> Point {
    let scale_x = bitmap.width / bounds.width();
    let scale_y = bitmap.height / bounds.height();
    Point::new(
        (client.x - bounds.x0) * scale_x,
        (client.y - bounds.y0) * scale_y,
    )
}
