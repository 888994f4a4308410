//! Modality tags.

use serde::{Deserialize, Serialize};

/// Rule family used to score a palpite against a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    /// One group anywhere in range.
    Group,
    /// Two groups, both in range.
    DoubleGroup,
    /// Three groups, all in range.
    TripleGroup,
    /// Four groups, all in range.
    QuadrupleGroup,
    /// Five groups, all in range.
    QuintupleGroup,
    /// Last two digits, per position.
    Decade,
    /// Last three digits, per position.
    Hundred,
    /// All four digits, per position.
    Thousand,
    /// Any arrangement of a decade's digits, per position.
    InvertedDecade,
    /// Any arrangement of a hundred's digits, per position.
    InvertedHundred,
    /// Any arrangement of a thousand's digits, per position.
    InvertedThousand,
    /// Two groups at 1st and 2nd prize, in order.
    Passe,
    /// Two groups at 1st and 2nd prize, either order.
    PasseVaiEVem,
}

impl Modality {
    /// Every modality.
    pub const ALL: [Modality; 13] = [
        Modality::Group,
        Modality::DoubleGroup,
        Modality::TripleGroup,
        Modality::QuadrupleGroup,
        Modality::QuintupleGroup,
        Modality::Decade,
        Modality::Hundred,
        Modality::Thousand,
        Modality::InvertedDecade,
        Modality::InvertedHundred,
        Modality::InvertedThousand,
        Modality::Passe,
        Modality::PasseVaiEVem,
    ];

    /// Number of groups a palpite takes, for group-set modalities.
    #[must_use]
    pub const fn group_arity(self) -> Option<usize> {
        match self {
            Modality::Group => Some(1),
            Modality::DoubleGroup => Some(2),
            Modality::TripleGroup => Some(3),
            Modality::QuadrupleGroup => Some(4),
            Modality::QuintupleGroup => Some(5),
            _ => None,
        }
    }

    /// Number of trailing digits compared, for number modalities.
    #[must_use]
    pub const fn digit_count(self) -> Option<usize> {
        match self {
            Modality::Decade | Modality::InvertedDecade => Some(2),
            Modality::Hundred | Modality::InvertedHundred => Some(3),
            Modality::Thousand | Modality::InvertedThousand => Some(4),
            _ => None,
        }
    }

    /// True for the inverted number modalities.
    #[must_use]
    pub const fn is_inverted(self) -> bool {
        matches!(
            self,
            Modality::InvertedDecade | Modality::InvertedHundred | Modality::InvertedThousand
        )
    }

    /// True for the two passe modalities.
    #[must_use]
    pub const fn is_passe(self) -> bool {
        matches!(self, Modality::Passe | Modality::PasseVaiEVem)
    }

    /// True for modalities that compare all four digits.
    #[must_use]
    pub const fn is_thousand(self) -> bool {
        matches!(self, Modality::Thousand | Modality::InvertedThousand)
    }

    /// Display name used on tickets.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Modality::Group => "Grupo",
            Modality::DoubleGroup => "Dupla de Grupo",
            Modality::TripleGroup => "Terno de Grupo",
            Modality::QuadrupleGroup => "Quadra de Grupo",
            Modality::QuintupleGroup => "Quina de Grupo",
            Modality::Decade => "Dezena",
            Modality::Hundred => "Centena",
            Modality::Thousand => "Milhar",
            Modality::InvertedDecade => "Dezena Invertida",
            Modality::InvertedHundred => "Centena Invertida",
            Modality::InvertedThousand => "Milhar Invertida",
            Modality::Passe => "Passe",
            Modality::PasseVaiEVem => "Passe Vai e Vem",
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
