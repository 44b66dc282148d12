//! Named continuous color interpolators.

use crate::error::ScaleError;

/// RGB anchor stops for the registered schemes, dark end last.
///
/// The ramps follow the ColorBrewer palettes the chart's stylesheets were
/// built around (`ylorrd` being the default calendar palette).
#[rustfmt::skip]
const SCHEMES: &[(&str, &[[u8; 3]; 5])] = &[
    ("ylorrd", &[
        [0xff, 0xff, 0xcc], [0xfe, 0xd9, 0x76], [0xfd, 0x8d, 0x3c],
        [0xe3, 0x1a, 0x1c], [0x80, 0x00, 0x26],
    ]),
    ("ylgnbu", &[
        [0xff, 0xff, 0xd9], [0xc7, 0xe9, 0xb4], [0x41, 0xb6, 0xc4],
        [0x22, 0x5e, 0xa8], [0x08, 0x1d, 0x58],
    ]),
    ("greens", &[
        [0xf7, 0xfc, 0xf5], [0xc7, 0xe9, 0xc0], [0x74, 0xc4, 0x76],
        [0x23, 0x8b, 0x45], [0x00, 0x44, 0x1b],
    ]),
    ("greys", &[
        [0xff, 0xff, 0xff], [0xd9, 0xd9, 0xd9], [0x96, 0x96, 0x96],
        [0x52, 0x52, 0x52], [0x00, 0x00, 0x00],
    ]),
];

/// A continuous `t in [0, 1] -> #rrggbb` color function.
#[derive(Debug, Clone, Copy)]
pub struct Interpolator {
    anchors: &'static [[u8; 3]; 5],
}

impl Interpolator {
    /// Returns the color at `t`, clamping `t` into `[0, 1]`.
    ///
    /// Interpolation is piecewise linear in RGB between the anchor stops.
    /// NaN clamps to the light end.
    pub fn color_at(&self, t: f64) -> String {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let pos = t * (self.anchors.len() - 1) as f64;
        let i = (pos.floor() as usize).min(self.anchors.len() - 2);
        let frac = pos - i as f64;
        let (a, b) = (self.anchors[i], self.anchors[i + 1]);
        let channel = |lo: u8, hi: u8| -> u8 {
            (lo as f64 + (hi as f64 - lo as f64) * frac).round() as u8
        };
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(a[0], b[0]),
            channel(a[1], b[1]),
            channel(a[2], b[2])
        )
    }
}

/// Looks up a registered interpolation scheme by name, case-insensitively.
///
/// # Errors
///
/// Returns [`ScaleError::UnknownScheme`] listing the registered names.
pub fn scheme(name: &str) -> Result<Interpolator, ScaleError> {
    let lower = name.to_ascii_lowercase();
    SCHEMES
        .iter()
        .find(|(n, _)| *n == lower)
        .map(|(_, anchors)| Interpolator { anchors })
        .ok_or_else(|| ScaleError::UnknownScheme {
            name: name.to_string(),
            known: SCHEMES
                .iter()
                .map(|(n, _)| *n)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_schemes() {
        for name in ["ylorrd", "ylgnbu", "greens", "greys"] {
            assert!(scheme(name).is_ok(), "scheme {name} should resolve");
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(scheme("YlOrRd").is_ok());
        assert!(scheme("GREYS").is_ok());
    }

    #[test]
    fn lookup_unknown_scheme() {
        let err = scheme("plasma").unwrap_err();
        let ScaleError::UnknownScheme { name, known } = err else {
            panic!("expected UnknownScheme");
        };
        assert_eq!(name, "plasma");
        assert!(known.contains("ylorrd"));
    }

    #[test]
    fn endpoints_hit_the_anchor_colors() {
        let greys = scheme("greys").unwrap();
        assert_eq!(greys.color_at(0.0), "#ffffff");
        assert_eq!(greys.color_at(1.0), "#000000");
    }

    #[test]
    fn midpoint_lands_on_middle_anchor() {
        let greys = scheme("greys").unwrap();
        assert_eq!(greys.color_at(0.5), "#969696");
    }

    #[test]
    fn out_of_range_t_clamps() {
        let greys = scheme("greys").unwrap();
        assert_eq!(greys.color_at(-1.0), "#ffffff");
        assert_eq!(greys.color_at(2.0), "#000000");
        assert_eq!(greys.color_at(f64::NAN), "#ffffff");
    }

    #[test]
    fn interpolation_is_monotone_for_greys() {
        let greys = scheme("greys").unwrap();
        let mut previous = 256i32;
        for step in 0..=20 {
            let color = greys.color_at(step as f64 / 20.0);
            let r = i32::from_str_radix(&color[1..3], 16).unwrap();
            assert!(r <= previous, "channel should darken monotonically");
            previous = r;
        }
    }
}
