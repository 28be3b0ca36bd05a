use super::rect::{CropRect, Point};

/// One press-move*-release pointer interaction.
///
/// The host routes every pointer event to the selector; the gesture decides
/// whether the event means anything. Events outside a gesture are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging { anchor: Point, current: Point },
}

impl Gesture {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Rectangle spanned so far, if dragging.
    pub fn rect(&self) -> Option<CropRect> {
        match *self {
            Self::Idle => None,
            Self::Dragging { anchor, current } => Some(CropRect::from_corners(anchor, current)),
        }
    }

    /// Start a fresh gesture at `at`. If a gesture was still live, it is
    /// released at its last known position and that rectangle is returned.
    pub fn press(&mut self, at: Point) -> Option<CropRect> {
        let forced = self.rect();
        *self = Self::Dragging {
            anchor: at,
            current: at,
        };
        forced
    }

    /// Move the live end of the gesture. Returns the preview rect.
    pub fn drag_to(&mut self, at: Point) -> Option<CropRect> {
        match self {
            Self::Idle => None,
            Self::Dragging { current, .. } => {
                *current = at;
                self.rect()
            }
        }
    }

    /// Finish the gesture at `at`. Returns the committed rect.
    pub fn release(&mut self, at: Point) -> Option<CropRect> {
        let rect = self.drag_to(at)?;
        *self = Self::Idle;
        Some(rect)
    }

    /// Drop the gesture without committing anything.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}
