//! Card hover lift

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardHover {
    #[default]
    Resting,
    Lifted,
}

impl CardHover {
    pub fn from_pointer_inside(inside: bool) -> Self {
        if inside {
            CardHover::Lifted
        } else {
            CardHover::Resting
        }
    }

    pub fn transform(&self) -> &'static str {
        match self {
            CardHover::Resting => "translateY(0) scale(1)",
            CardHover::Lifted => "translateY(-10px) scale(1.02)",
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            CardHover::Resting => "0 8px 32px rgba(0, 0, 0, 0.1)",
            CardHover::Lifted => "0 15px 50px rgba(0, 0, 0, 0.2)",
        }
    }
}
