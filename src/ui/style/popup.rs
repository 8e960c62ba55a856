use iced::{
    border, color, font,
    widget::container,
    Background, Color, Font, Shadow, Vector,
};

use crate::core::Scheme;

pub const MESSAGE_SIZE: u16 = 17;

pub const MESSAGE_FONT: Font = Font {
    weight: font::Weight::Medium,
    ..Font::DEFAULT
};

/// Gap between the window edge and the card. It doubles as the room the
/// shadow needs, and leaves the message a 380x180 area.
pub const CARD_MARGIN: u16 = 20;

struct Palette {
    background: Color,
    border: Color,
    text: Color,
}

impl From<Scheme> for Palette {
    fn from(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Light => Palette {
                background: color!(0xffffff),
                border: color!(0xdfe3e6),
                text: color!(0x202124),
            },
            Scheme::Dark => Palette {
                background: color!(0x202124),
                border: color!(0x5f6368),
                text: color!(0xe8eaed),
            },
        }
    }
}

pub struct Style;

impl Style {
    pub fn card(scheme: Scheme, opacity: f32) -> container::Style {
        let palette = Palette::from(scheme);

        container::Style {
            text_color: Some(faded(palette.text, opacity)),
            background: Some(Background::Color(faded(palette.background, opacity))),
            border: border::rounded(12)
                .width(1)
                .color(faded(palette.border, opacity)),
            shadow: Shadow {
                color: faded(Color::from_rgba8(0, 0, 0, 160.0 / 255.0), opacity),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 25.0,
            },
        }
    }

    pub fn message_color(scheme: Scheme, opacity: f32) -> Color {
        faded(Palette::from(scheme).text, opacity)
    }
}

/// Window opacity is emulated by scaling the alpha of everything we paint.
fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn invisible_card_paints_nothing() {
        let style = Style::card(Scheme::Light, 0.0);

        assert_eq!(style.background, Some(Background::Color(Color { a: 0.0, ..Color::WHITE })));
        assert_eq!(style.shadow.color.a, 0.0);
        assert_eq!(style.border.color.a, 0.0);
    }

    #[test]
    fn opaque_card_keeps_shadow_geometry() {
        let style = Style::card(Scheme::Dark, 1.0);

        assert_eq!(style.shadow.offset, Vector::new(0.0, 4.0));
        assert_eq!(style.shadow.blur_radius, 25.0);
        assert!((style.shadow.color.a - 160.0 / 255.0).abs() < 1e-6);
        assert_eq!(Style::message_color(Scheme::Dark, 1.0), color!(0xe8eaed));
    }

    #[test]
    fn message_area_matches_window_minus_margins() {
        use crate::core::placement::WINDOW_SIZE;

        let margin = 2.0 * f32::from(CARD_MARGIN);

        assert_eq!(WINDOW_SIZE.width - margin, 380.0);
        assert_eq!(WINDOW_SIZE.height - margin, 180.0);
    }

    #[test]
    fn message_fades_with_the_window() {
        assert_eq!(Style::message_color(Scheme::Light, 0.5).a, 0.5);
    }
}
