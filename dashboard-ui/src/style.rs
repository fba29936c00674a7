/// Spacing and sizing knobs for the page. Earlier drafts of this
/// dashboard existed as three near-identical copies differing only in
/// these values; they are one configuration object now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageStyle {
    pub grid_gap_px: u16,
    pub stat_icon_px: u16,
    pub marker_icon_px: u16,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            grid_gap_px: 16,
            stat_icon_px: 50,
            marker_icon_px: 25,
        }
    }
}

impl PageStyle {
    pub fn gap_style(self) -> String {
        format!("gap: {}px", self.grid_gap_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_shipped_page() {
        let style = PageStyle::default();
        assert_eq!(style.marker_icon_px, 25);
        assert_eq!(style.stat_icon_px, 50);
    }

    #[test]
    fn gap_style_is_inline_css() {
        assert_eq!(PageStyle::default().gap_style(), "gap: 16px");
    }
}
