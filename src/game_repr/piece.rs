#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: Kind,
}

impl Piece {
    pub fn man(color: Color) -> Self {
        Self {
            color,
            kind: Kind::Man,
        }
    }

    pub fn king(color: Color) -> Self {
        Self {
            color,
            kind: Kind::King,
        }
    }

    pub fn is_king(&self) -> bool {
        self.kind == Kind::King
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }
}
