use super::{TextWidget, Widget};
use std::any::Any;
use tessera_core::math::Vec2;

/// Average glyph advance, as a fraction of the font size.
const AVERAGE_ADVANCE: f32 = 0.5;
/// Line height, as a fraction of the font size.
const LINE_HEIGHT: f32 = 1.25;

/// Font face and size used by text widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescription {
    pub id: String,
    pub size: f32,
}

impl FontDescription {
    pub fn new(id: impl Into<String>, size: f32) -> Self {
        Self {
            id: id.into(),
            size,
        }
    }

    /// Approximate extent of `text` without shaping.
    pub fn measure(&self, text: &str) -> Vec2 {
        let lines = text.lines().count().max(1);
        let widest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        Vec2::new(
            widest as f32 * self.size * AVERAGE_ADVANCE,
            lines as f32 * self.size * LINE_HEIGHT,
        )
    }
}

impl Default for FontDescription {
    fn default() -> Self {
        Self::new("Vera", 12.0)
    }
}

bitflags::bitflags! {
    /// Edges of the parent a widget sticks to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Gravity: u8 {
        const LEFT = 0b0001;
        const TOP = 0b0010;
        const RIGHT = 0b0100;
        const BOTTOM = 0b1000;
        const LEFT_RIGHT = Self::LEFT.bits() | Self::RIGHT.bits();
        const TOP_BOTTOM = Self::TOP.bits() | Self::BOTTOM.bits();
        const ALL = Self::LEFT_RIGHT.bits() | Self::TOP_BOTTOM.bits();
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Gravity::LEFT | Gravity::TOP
    }
}

/// Single or multi-line text field.
#[derive(Debug, Clone)]
pub struct Text {
    pub content: String,
    pub font: FontDescription,
    pub gravity: Gravity,
    pub pointer_target: bool,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font: FontDescription::default(),
            gravity: Gravity::default(),
            pointer_target: true,
        }
    }

    pub fn font(mut self, font: FontDescription) -> Self {
        self.font = font;
        self
    }

    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Forward pointer interaction to the parent.
    pub fn passthrough(mut self) -> Self {
        self.pointer_target = false;
        self
    }
}

impl Widget for Text {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn debug_name(&self) -> &str {
        "Text"
    }

    fn is_pointer_target(&self) -> bool {
        self.pointer_target
    }

    fn measure(&self, _children: &[Vec2]) -> Vec2 {
        self.font.measure(&self.content)
    }

    fn as_text_widget(&self) -> Option<&dyn TextWidget> {
        Some(self)
    }

    fn as_text_widget_mut(&mut self) -> Option<&mut dyn TextWidget> {
        Some(self)
    }
}

impl TextWidget for Text {
    fn text(&self) -> &str {
        &self.content
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.content);
    }
}
