//! Viewport-aware tooltip placement.

/// Gap between the trigger element and the tooltip edge.
pub const TOOLTIP_GAP: f64 = 5.0;
/// Distance kept between the tooltip's right edge and the viewport edge when
/// the horizontal correction applies.
pub const VIEWPORT_MARGIN: f64 = 10.0;
/// Height assumed for the first paint, before the rendered size is known.
pub const ESTIMATED_HEIGHT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

/// Bounding box of the hovered trigger, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerRect {
    pub left: f64,
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

/// Computes tooltip placement: above the trigger with aligned left edges,
/// then two independent corrections. Off-screen above relocates below the
/// trigger; right-edge overflow shifts left to [`VIEWPORT_MARGIN`] inside
/// the viewport. If the relocated tooltip still overflows below, no further
/// correction is attempted.
pub fn place(tooltip: BoxSize, trigger: TriggerRect, viewport: Viewport) -> Placement {
    let mut left = trigger.left;
    let mut top = trigger.top - tooltip.height - TOOLTIP_GAP;

    if top < 0.0 {
        top = trigger.bottom + TOOLTIP_GAP;
    }
    if left + tooltip.width > viewport.width {
        left = viewport.width - tooltip.width - VIEWPORT_MARGIN;
    }

    Placement { left, top }
}

/// Placement for the first paint, before layout has produced a real size.
pub fn initial(trigger: TriggerRect) -> Placement {
    Placement {
        left: trigger.left,
        top: trigger.top - ESTIMATED_HEIGHT - TOOLTIP_GAP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOOLTIP: BoxSize = BoxSize {
        width: 200.0,
        height: 60.0,
    };
    const VIEWPORT: Viewport = Viewport { width: 1000.0 };

    fn trigger(left: f64, top: f64) -> TriggerRect {
        TriggerRect {
            left,
            top,
            bottom: top + 20.0,
        }
    }

    #[test]
    fn default_placement_sits_above_with_gap() {
        let placed = place(TOOLTIP, trigger(300.0, 400.0), VIEWPORT);
        assert_eq!(placed.left, 300.0);
        assert_eq!(placed.top, 400.0 - 60.0 - TOOLTIP_GAP);
    }

    #[test]
    fn trigger_near_the_top_relocates_below() {
        let placed = place(TOOLTIP, trigger(300.0, 40.0), VIEWPORT);
        assert_eq!(placed.top, 60.0 + TOOLTIP_GAP);
        assert_eq!(placed.left, 300.0);
    }

    #[test]
    fn right_overflow_shifts_left_inside_the_viewport() {
        let placed = place(TOOLTIP, trigger(900.0, 400.0), VIEWPORT);
        assert_eq!(placed.left + TOOLTIP.width, VIEWPORT.width - VIEWPORT_MARGIN);
        assert_eq!(placed.top, 400.0 - 60.0 - TOOLTIP_GAP);
    }

    #[test]
    fn both_corrections_apply_together() {
        let placed = place(TOOLTIP, trigger(950.0, 10.0), VIEWPORT);
        assert_eq!(placed.top, 30.0 + TOOLTIP_GAP);
        assert_eq!(placed.left, VIEWPORT.width - TOOLTIP.width - VIEWPORT_MARGIN);
    }

    #[test]
    fn exact_fit_needs_no_horizontal_correction() {
        let placed = place(TOOLTIP, trigger(800.0, 400.0), VIEWPORT);
        assert_eq!(placed.left, 800.0);
    }

    #[test]
    fn initial_placement_uses_the_height_estimate() {
        let placed = initial(trigger(120.0, 500.0));
        assert_eq!(placed.left, 120.0);
        assert_eq!(placed.top, 500.0 - ESTIMATED_HEIGHT - TOOLTIP_GAP);
    }
}
