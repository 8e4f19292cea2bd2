mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_between_points() {
        let start = Point::new(100.0, 100.0);
        let offset = start.offset_to(Point::new(130.0, 95.0));
        assert_eq!(offset, Offset { dx: 30.0, dy: -5.0 });
    }

    #[test]
    fn offset_exceeds_is_strict() {
        let at = Offset { dx: 5.0, dy: -5.0 };
        assert!(!at.exceeds(5.0));
        let past = Offset { dx: 0.0, dy: -5.5 };
        assert!(past.exceeds(5.0));
    }

    #[test]
    fn viewport_max_origin_for_element() {
        let viewport = Viewport::new(375.0, 667.0);
        let max = viewport.max_origin(Size::square(56.0));
        assert_eq!(max, Point::new(319.0, 611.0));
    }

    #[test]
    fn viewport_smaller_than_element_pins_to_zero() {
        let viewport = Viewport::new(40.0, 40.0);
        assert_eq!(viewport.max_origin(Size::square(56.0)), Point::new(0.0, 0.0));
    }

    #[test]
    fn viewport_clamp() {
        let viewport = Viewport::new(375.0, 667.0);
        let clamped = viewport.clamp(Point::new(-50.0, 10_000.0), Size::square(56.0));
        assert_eq!(clamped, Point::new(0.0, 611.0));
    }

    #[test]
    fn point_serializes_as_x_y() {
        let json = serde_json::to_string(&Point::new(120.0, 340.0)).unwrap();
        assert_eq!(json, r#"{"x":120.0,"y":340.0}"#);
    }

    #[test]
    fn panel_kind_display() {
        assert_eq!(PanelKind::Tools.to_string(), "tools");
        assert_eq!(PanelKind::Chat.to_string(), "chat");
    }
}
