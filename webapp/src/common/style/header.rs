use crate::config::Theme;

pub const HEADER_HEIGHT_PX: u32 = 80;

// nav items sit in fixed slots so the underline position can be computed
pub const NAV_SLOT_WIDTH_PX: f64 = 80.0;
pub const NAV_SLOT_GAP_PX: f64 = 20.0;
pub const UNDERLINE_WIDTH_PX: f64 = 35.0;

pub fn header_styles(theme: &Theme) -> String {
    let red = &theme.red;
    let lighter = &theme.white.lighter;
    let darker = &theme.white.darker;

    format!(
        r#"
.site-header {{
  height: {HEADER_HEIGHT_PX}px;
  display: flex;
  justify-content: space-between;
  align-items: center;
  position: fixed;
  width: 100%;
  top: 0;
  z-index: 10;
  font-size: 14px;
  padding: 20px 60px;
  color: white;
}}

.site-header.scrolled {{
  box-shadow: 0 2px 10px rgba(0, 0, 0, 0.6);
}}

.header-col {{
  display: flex;
  align-items: center;
}}

.logo {{
  margin-right: 50px;
  width: 95px;
  height: 25px;
  fill: {red};
  cursor: pointer;
}}

.logo path {{
  stroke-width: 6px;
  stroke: white;
}}

.logo.active {{
  animation: logo-flash 1s linear infinite;
}}

.nav-track {{
  position: relative;
}}

.nav-items {{
  display: flex;
  align-items: center;
  gap: {NAV_SLOT_GAP_PX}px;
}}

.nav-item {{
  width: {NAV_SLOT_WIDTH_PX}px;
  text-align: center;
  color: {darker};
  transition: color 0.3s ease-in-out;
}}

.nav-item:hover,
.nav-item.active {{
  color: {lighter};
}}

.underline {{
  position: absolute;
  width: {UNDERLINE_WIDTH_PX}px;
  height: 1px;
  bottom: -5px;
  left: 0;
  background-color: {red};
  transition: transform 0.3s ease-out;
}}

.search {{
  color: white;
  display: flex;
  position: relative;
  align-items: center;
}}

.search svg {{
  height: 25px;
  cursor: pointer;
}}

.search-input {{
  transform-origin: right center;
  position: absolute;
  right: 0;
  padding: 5px 10px;
  padding-left: 38px;
  z-index: -1;
  color: white;
  font-size: 16px;
  background-color: transparent;
  border: 1px solid {lighter};
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underline_and_logo_use_accent_color() {
        let css = header_styles(&Theme::default());

        assert!(css.contains("fill: #E51013;"));
        assert!(css.contains("background-color: #E51013;"));
    }

    #[test]
    fn scrolled_header_and_nav_track_have_rules() {
        let css = header_styles(&Theme::default());

        assert!(css.contains(".site-header.scrolled {"));
        assert!(css.contains(".nav-track {\n  position: relative;"));
    }

    #[test]
    fn nav_item_shades_follow_theme() {
        let mut theme = Theme::default();
        theme.white.darker = String::from("#cccccc");

        let css = header_styles(&theme);

        assert!(css.contains("color: #cccccc;"));
        assert!(css.contains("border: 1px solid #ffffff;"));
    }
}
