use iced::{Point, Size};

pub const WINDOW_SIZE: Size = Size {
    width: 420.0,
    height: 220.0,
};

/// Gap between the popup and the right and bottom screen edges.
pub const SCREEN_MARGIN: f32 = 50.0;

/// Top-left corner that parks `window` in the bottom-right corner of `monitor`.
///
/// The signature matches `window::Position::SpecificWith`, which hands over
/// the window size first and the monitor resolution second.
pub fn bottom_right(window: Size, monitor: Size) -> Point {
    Point::new(
        monitor.width - window.width - SCREEN_MARGIN,
        monitor.height - window.height - SCREEN_MARGIN,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Size::new(1920.0, 1080.0), Point::new(1450.0, 810.0))]
    #[case(Size::new(1366.0, 768.0), Point::new(896.0, 498.0))]
    #[case(Size::new(2560.0, 1440.0), Point::new(2090.0, 1170.0))]
    fn popup_sits_in_the_bottom_right_corner(#[case] monitor: Size, #[case] expected: Point) {
        assert_eq!(bottom_right(WINDOW_SIZE, monitor), expected);
    }

    #[test]
    fn margin_is_kept_on_both_edges() {
        let monitor = Size::new(1280.0, 1024.0);
        let corner = bottom_right(WINDOW_SIZE, monitor);

        assert_eq!(monitor.width - (corner.x + WINDOW_SIZE.width), SCREEN_MARGIN);
        assert_eq!(monitor.height - (corner.y + WINDOW_SIZE.height), SCREEN_MARGIN);
    }
}
