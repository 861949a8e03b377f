// templates/theme.rs

pub struct Colors {
    pub white: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub gray_300: &'static str,
    pub gray_700: &'static str,
    pub gray_900: &'static str,
}

pub const COLORS: Colors = Colors {
    white: "hsl(0deg 0% 100%)",
    primary: "hsl(340deg 65% 47%)",
    secondary: "hsl(240deg 60% 63%)",
    gray_300: "hsl(225deg 8% 80%)",
    gray_700: "hsl(220deg 5% 40%)",
    gray_900: "hsl(220deg 3% 20%)",
};

pub struct Weights {
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

pub const WEIGHTS: Weights = Weights {
    normal: 500,
    medium: 600,
    bold: 800,
};

/// Stylesheet for the header and the shoe grid.
pub fn stylesheet() -> String {
    let c = &COLORS;
    let w = &WEIGHTS;
    format!(
        r#"
body {{ margin: 0; font-family: 'Raleway', sans-serif; font-weight: {normal}; }}
.super-header {{ padding: 12px 32px; background: {gray_900}; color: {white}; font-size: 0.875rem; }}
.main-header {{ padding: 18px 32px; border-bottom: 1px solid {gray_300}; display: flex; justify-content: center; align-items: baseline; height: 72px; box-sizing: border-box; }}
.logo-wrapper {{ flex: 1; }}
.logo {{ font-size: 1.5rem; font-weight: {bold}; color: {gray_900}; text-decoration: none; }}
.main-nav {{ display: flex; gap: 48px; flex: 1 0 fit-content; margin: 0 48px; }}
.nav-link {{ font-size: 1.125rem; text-transform: uppercase; text-decoration: none; color: {gray_900}; font-weight: {medium}; }}
.nav-link:first-of-type {{ color: {secondary}; }}
.shoe-grid {{ display: flex; flex-wrap: wrap; gap: 32px; padding: 32px; }}
.shoe-link {{ text-decoration: none; color: inherit; flex: 1 0 256px; }}
.shoe-image-wrapper {{ position: relative; }}
.shoe-image {{ width: 100%; border-radius: 16px 16px 4px 4px; }}
.shoe-tag {{ position: absolute; right: -4px; top: 12px; padding: 8px 12px; border-radius: 2px; font-size: 0.875rem; font-weight: 700; color: {white}; background-color: var(--background-color); }}
.shoe-row {{ font-size: 1rem; display: flex; justify-content: space-between; }}
.shoe-name {{ font-weight: {medium}; color: {gray_900}; }}
.shoe-price.cancelled {{ text-decoration: line-through; }}
.shoe-colors {{ color: {gray_700}; }}
.shoe-sale-price {{ font-weight: {medium}; color: {primary}; }}
"#,
        normal = w.normal,
        medium = w.medium,
        bold = w.bold,
        white = c.white,
        primary = c.primary,
        secondary = c.secondary,
        gray_300 = c.gray_300,
        gray_700 = c.gray_700,
        gray_900 = c.gray_900,
    )
}
