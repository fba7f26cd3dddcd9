use std::fmt;

use serde::Serialize;

/// Label of a named construction point.
///
/// Labels are produced in alphabetical order by the construction steps, so
/// the discriminant doubles as the production index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PointLabel {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
}

impl PointLabel {
    /// Number of labels.
    pub const COUNT: usize = 23;

    /// All labels in production order.
    pub const ALL: [PointLabel; Self::COUNT] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
    ];

    /// Position of this label in production order.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The label's letter.
    #[must_use]
    pub fn letter(self) -> char {
        // Discriminants are 0..23, always within ASCII.
        char::from(b'A' + self as u8)
    }
}

impl fmt::Display for PointLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_discriminant_order() {
        for (i, label) in PointLabel::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
        }
    }

    #[test]
    fn letters_run_a_to_w() {
        let letters: String = PointLabel::ALL.iter().map(|l| l.letter()).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVW");
        assert_eq!(PointLabel::M.to_string(), "M");
    }
}
