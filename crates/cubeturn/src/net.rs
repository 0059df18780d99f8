//! Unfolded-net rendering of a cube for the terminal.

use std::fmt;

use cubeturn_core::{Color, CubeState, Face};
use cubeturn_prefs::ColorPreferences;
use owo_colors::OwoColorize;

/// Faces in the middle band of the net, left to right.
const MIDDLE_BAND: [Face; 4] = [Face::Left, Face::Front, Face::Right, Face::Back];

/// Width of one face row, plus the gap after it.
const FACE_INDENT: &str = "       ";

/// Cube drawn as an unfolded net using 24-bit background colors.
pub(crate) struct ColoredNet<'a> {
    pub state: &'a CubeState,
    pub colors: &'a ColorPreferences,
}
impl fmt::Display for ColoredNet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            write!(f, "{FACE_INDENT}")?;
            self.write_face_row(f, Face::Top, row)?;
            writeln!(f)?;
        }
        for row in 0..3 {
            for (i, &face) in MIDDLE_BAND.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                self.write_face_row(f, face, row)?;
            }
            writeln!(f)?;
        }
        for row in 0..3 {
            write!(f, "{FACE_INDENT}")?;
            self.write_face_row(f, Face::Bottom, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
impl ColoredNet<'_> {
    fn write_face_row(&self, f: &mut fmt::Formatter<'_>, face: Face, row: usize) -> fmt::Result {
        let stickers = self.state.face_stickers(face);
        for &color in stickers.chunks(3).nth(row).into_iter().flatten() {
            write!(f, "{}", self.cell(color))?;
        }
        Ok(())
    }

    fn cell(&self, color: Color) -> impl fmt::Display {
        let [r, g, b] = self.colors.get(color.home_face()).rgb;
        "  ".on_truecolor(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const CELL_START: &str = "\u{1b}[48;2;";

    #[test]
    fn test_colored_net_shape() {
        let colors = ColorPreferences::default();
        let net = ColoredNet {
            state: &CubeState::new(),
            colors: &colors,
        }
        .to_string();
        assert_eq!(net.lines().count(), 9);
        assert_eq!(net.matches(CELL_START).count(), 54);
        // Every line of the middle band has 12 stickers.
        let middle = net.lines().nth(4).expect("middle band");
        assert_eq!(middle.matches(CELL_START).count(), 12);
        assert!(net.lines().next().is_some_and(|l| l.starts_with(FACE_INDENT)));
    }

    #[test]
    fn test_colored_net_uses_palette() {
        let mut cube = CubeState::new();
        cube.perform_turn(Face::Front);
        let colors = ColorPreferences::default();
        let net = ColoredNet {
            state: &cube,
            colors: &colors,
        }
        .to_string();

        // After a front turn, the top face's bottom row shows the left color.
        let top_bottom_row = net.lines().nth(2).expect("top face");
        let [r, g, b] = colors.left.rgb;
        let left_cell = format!("{CELL_START}{r};{g};{b}m");
        assert_eq!(top_bottom_row.matches(&left_cell).count(), 3);
        let expected_cell = "  ".on_truecolor(r, g, b).to_string();
        assert!(top_bottom_row.contains(&expected_cell));
    }
}
