use super::Widget;
use std::any::Any;
use tessera_core::math::Vec2;

/// Axis along which a [`Container`] stacks its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutAxis {
    #[default]
    Vertical,
    Horizontal,
}

/// A layout widget that sizes itself around its children.
#[derive(Debug, Clone)]
pub struct Container {
    pub axis: LayoutAxis,
    pub padding: f32,
    pub spacing: f32,
    pub pointer_target: bool,
}

impl Container {
    pub fn new() -> Self {
        Self {
            axis: LayoutAxis::Vertical,
            padding: 0.0,
            spacing: 0.0,
            pointer_target: true,
        }
    }

    pub fn axis(mut self, axis: LayoutAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Forward pointer interaction to the parent.
    pub fn passthrough(mut self) -> Self {
        self.pointer_target = false;
        self
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Container {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn debug_name(&self) -> &str {
        "Container"
    }

    fn is_pointer_target(&self) -> bool {
        self.pointer_target
    }

    fn measure(&self, children: &[Vec2]) -> Vec2 {
        let gaps = self.spacing * children.len().saturating_sub(1) as f32;
        let content = match self.axis {
            LayoutAxis::Vertical => Vec2::new(
                children.iter().map(|s| s.x).fold(0.0, f32::max),
                children.iter().map(|s| s.y).sum::<f32>() + gaps,
            ),
            LayoutAxis::Horizontal => Vec2::new(
                children.iter().map(|s| s.x).sum::<f32>() + gaps,
                children.iter().map(|s| s.y).fold(0.0, f32::max),
            ),
        };
        content + Vec2::splat(self.padding * 2.0)
    }
}
