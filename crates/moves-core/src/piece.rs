//! Piece representation.

/// The four pieces whose moves are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Rook,
    Bishop,
    Queen,
    Knight,
}

impl Piece {
    /// All pieces, in the order they are printed.
    pub const ALL: [Piece; 4] = [Piece::Rook, Piece::Bishop, Piece::Queen, Piece::Knight];

    /// Returns the block label used in rendered output (e.g. "TORRE").
    pub const fn label(self) -> &'static str {
        match self {
            Piece::Rook => "TORRE",
            Piece::Bishop => "BISPO",
            Piece::Queen => "RAINHA",
            Piece::Knight => "CAVALO",
        }
    }

    /// Returns the name used in the configuration summary (e.g. "Torre").
    pub const fn summary_name(self) -> &'static str {
        match self {
            Piece::Rook => "Torre",
            Piece::Bishop => "Bispo",
            Piece::Queen => "Rainha",
            Piece::Knight => "Cavalo",
        }
    }

    /// Returns true if the piece slides any distance along its lines.
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, Piece::Rook | Piece::Bishop | Piece::Queen)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Piece::Rook => "Rook",
            Piece::Bishop => "Bishop",
            Piece::Queen => "Queen",
            Piece::Knight => "Knight",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(Piece::Rook.label(), "TORRE");
        assert_eq!(Piece::Bishop.label(), "BISPO");
        assert_eq!(Piece::Queen.label(), "RAINHA");
        assert_eq!(Piece::Knight.label(), "CAVALO");
    }

    #[test]
    fn summary_names() {
        let names: Vec<&str> = Piece::ALL.iter().map(|p| p.summary_name()).collect();
        assert_eq!(names, vec!["Torre", "Bispo", "Rainha", "Cavalo"]);
    }

    #[test]
    fn is_slider() {
        assert!(Piece::Rook.is_slider());
        assert!(Piece::Bishop.is_slider());
        assert!(Piece::Queen.is_slider());
        assert!(!Piece::Knight.is_slider());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Piece::Queen), "Queen");
        assert_eq!(format!("{}", Piece::Knight), "Knight");
    }
}
