use dioxus::prelude::*;

// brand wordmark, drawn in a 1024 x 276.742 box
pub const LOGO_VIEWBOX: &str = "0 0 1024 276.742";
pub const LOGO_PATH: &str = "M0 276.742V0h58.5l80.6 173.9L219.6 0h58.5v276.742h-52V96.8l-66.1 143.5h-42.2L52 96.8v179.942z\
M318.9 276.742V0h178.4v46.3H370.9v68.2h112.6v46.3H370.9v69.6h126.4v46.342z\
M537.6 276.742V0h52v230.4h117.3v46.342z\
M732.4 276.742V0h52v276.742z\
M824.2 276.742L909.6 0h38.8L1024 276.742h-54.3l-17.2-60.5h-88.4l-17.2 60.5zm53.8-106.8h61.6L908.8 61.7z";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoVariant {
    #[default]
    Normal,
    Active,
}

impl LogoVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Normal => "logo",
            Self::Active => "logo active",
        }
    }
}

#[component]
pub fn Logo() -> Element {
    let mut variant = use_signal(LogoVariant::default);

    rsx! {
        svg {
            class: variant().class(),
            width: "1024",
            height: "276.742",
            view_box: LOGO_VIEWBOX,
            onmouseenter: move |_| variant.set(LogoVariant::Active),
            onmouseleave: move |_| variant.set(LogoVariant::Normal),
            path { d: LOGO_PATH }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_variant_adds_flash_class() {
        assert_eq!(LogoVariant::default().class(), "logo");
        assert_eq!(LogoVariant::Active.class(), "logo active");
    }

    #[test]
    fn path_stays_inside_viewbox() {
        let numbers = LOGO_PATH
            .split(|c: char| !(c.is_ascii_digit() || c == '.'))
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>().unwrap());

        for n in numbers {
            assert!(n <= 1024.0, "{n} is outside the viewbox");
        }
    }
}
