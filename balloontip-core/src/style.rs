use vello::peniko::Color;

/// Border drawn around the balloon and tip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipBorder {
    /// Stroke width. Zero disables the border.
    pub width: f32,
    /// Stroke color.
    pub color: Color,
}

impl Default for TooltipBorder {
    fn default() -> Self {
        Self {
            width: 0.0,
            color: Color::TRANSPARENT,
        }
    }
}

/// Style of a tooltip.
///
/// An immutable configuration bundle read on every layout and paint pass.
/// To change a tooltip's style, build a new value and re-run layout; the
/// geometry engine picks up the replacement on its next pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipStyle {
    /// Background color of balloon and tip.
    pub color: Color,
    /// Corner radius of the balloon.
    pub corner_radius: f32,
    /// Extent of the tip along the edge it sits on.
    pub tip_width: f32,
    /// Extent of the tip away from the balloon.
    pub tip_height: f32,
    /// Padding between the balloon and its content.
    pub content_padding: f32,
    /// Border around balloon and tip.
    pub border: TooltipBorder,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgba8(50, 50, 50, 230),
            corner_radius: 8.0,
            tip_width: 24.0,
            tip_height: 8.0,
            content_padding: 12.0,
            border: TooltipBorder::default(),
        }
    }
}

impl TooltipStyle {
    /// Create a style with the default dimensions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the balloon corner radius.
    pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Set the tip dimensions.
    pub fn with_tip_size(mut self, tip_width: f32, tip_height: f32) -> Self {
        self.tip_width = tip_width;
        self.tip_height = tip_height;
        self
    }

    /// Set the padding between balloon and content.
    pub fn with_content_padding(mut self, content_padding: f32) -> Self {
        self.content_padding = content_padding;
        self
    }

    /// Set the border.
    pub fn with_border(mut self, width: f32, color: Color) -> Self {
        self.border = TooltipBorder { width, color };
        self
    }

    /// Whether a border should be stroked.
    pub fn has_border(&self) -> bool {
        self.border.width > 0.0
    }
}
