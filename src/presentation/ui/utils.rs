use ratatui::layout::Rect;
use ratatui::style::Color;
use unicode_width::UnicodeWidthChar;

const AVATAR_PALETTE: [Color; 6] = [
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
];

/// Stable color for a persona's avatar, derived from its id.
#[must_use]
pub fn avatar_color(id: &str) -> Color {
    let hash = id
        .bytes()
        .fold(0_usize, |acc, b| acc.wrapping_mul(31).wrapping_add(usize::from(b)));
    AVATAR_PALETTE[hash % AVATAR_PALETTE.len()]
}

/// Centers a fixed-size box, shrinking it to fit `r`.
#[must_use]
pub fn modal_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

/// Cuts `s` to at most `max_width` columns, marking the cut with an ellipsis.
#[must_use]
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            let rest: usize = s.chars().skip(out.chars().count()).filter_map(|c| c.width()).sum();
            if width + rest <= max_width {
                out.extend(s.chars().skip(out.chars().count()));
            } else {
                out.push('…');
            }
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Fitness coach", 20), "Fitness coach");
        assert_eq!(truncate_to_width("Fitness coach", 8), "Fitness…");
        assert_eq!(truncate_to_width("abc", 3), "abc");
        assert_eq!(truncate_to_width("", 4), "");
    }

    #[test]
    fn test_modal_rect_fits_area() {
        let area = Rect::new(0, 0, 40, 10);
        let modal = modal_rect(60, 5, area);

        assert_eq!(modal.width, 40);
        assert_eq!(modal.y, 2);
    }

    #[test]
    fn test_avatar_color_is_stable() {
        assert_eq!(avatar_color("p1"), avatar_color("p1"));
    }
}
