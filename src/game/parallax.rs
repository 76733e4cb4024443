//! Parallax background layers
//!
//! Each layer texture is drawn at 2x scale, so one copy covers two texture
//! widths on screen. Two copies are drawn side by side and the offset wraps
//! once the first copy has fully scrolled off.

/// Scale each layer texture is drawn at
pub const LAYER_SCALE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollLayer {
    /// Unscaled texture width in pixels
    pub texture_width: f32,
    /// Screen x of the first copy (<= 0)
    pub offset_x: f32,
}

impl ScrollLayer {
    pub fn new(texture_width: f32) -> Self {
        debug_assert!(texture_width > 0.0);
        Self { texture_width, offset_x: 0.0 }
    }

    /// Distance after which the offset wraps back to 0
    pub fn wrap_width(&self) -> f32 {
        self.texture_width * LAYER_SCALE
    }

    /// Screen x of both copies, left to right
    pub fn copy_positions(&self) -> [f32; 2] {
        [self.offset_x, self.offset_x + self.wrap_width()]
    }
}

/// Scroll a layer left by `speed * delta_time`, wrapping at two texture widths
pub fn advance_layer(mut layer: ScrollLayer, speed: f32, delta_time: f32) -> ScrollLayer {
    layer.offset_x -= speed * delta_time;
    if layer.offset_x <= -layer.wrap_width() {
        layer.offset_x = 0.0;
    }
    layer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolls_left() {
        let layer = advance_layer(ScrollLayer::new(256.0), 40.0, 0.5);
        assert_eq!(layer.offset_x, -20.0);
    }

    #[test]
    fn test_wraps_at_two_widths() {
        let mut layer = ScrollLayer::new(100.0);
        layer = advance_layer(layer, 100.0, 1.0);
        assert_eq!(layer.offset_x, -100.0);
        layer = advance_layer(layer, 100.0, 1.0);
        assert_eq!(layer.offset_x, 0.0);
    }

    #[test]
    fn test_never_below_wrap_threshold() {
        let mut layer = ScrollLayer::new(64.0);
        let mut wrapped = 0;
        for _ in 0..1000 {
            let before = layer.offset_x;
            layer = advance_layer(layer, 80.0, 1.0 / 60.0);
            assert!(layer.offset_x > -128.0);
            assert!(layer.offset_x <= 0.0);
            if layer.offset_x > before {
                assert_eq!(layer.offset_x, 0.0);
                wrapped += 1;
            }
        }
        assert!(wrapped > 0);
    }

    #[test]
    fn test_copies_are_two_widths_apart() {
        let layer = ScrollLayer { texture_width: 200.0, offset_x: -50.0 };
        assert_eq!(layer.copy_positions(), [-50.0, 350.0]);
    }
}
