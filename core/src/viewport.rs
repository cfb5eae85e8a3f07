pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewportMode {
    Mobile,
    #[default]
    Desktop,
}

impl ViewportMode {
    /// Widths that are not a finite, non-negative number count as mobile.
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width.is_finite() && width >= breakpoint {
            ViewportMode::Desktop
        } else {
            ViewportMode::Mobile
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, ViewportMode::Mobile)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewportMode::Mobile => "mobile",
            ViewportMode::Desktop => "desktop",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive_for_mobile() {
        assert_eq!(ViewportMode::from_width(767.9, MOBILE_BREAKPOINT_PX), ViewportMode::Mobile);
        assert_eq!(ViewportMode::from_width(768.0, MOBILE_BREAKPOINT_PX), ViewportMode::Desktop);
    }

    #[test]
    fn bogus_widths_are_mobile() {
        assert!(ViewportMode::from_width(f64::NAN, MOBILE_BREAKPOINT_PX).is_mobile());
        assert!(ViewportMode::from_width(-1.0, MOBILE_BREAKPOINT_PX).is_mobile());
    }
}
