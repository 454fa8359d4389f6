//! MBTI personality tags.

use std::fmt;

use rand::Rng;
use rand::distributions::{Distribution, Standard};
use serde::{Deserialize, Serialize};

/// One of the 16 Myers-Briggs type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Personality {
    Intj,
    Intp,
    Entj,
    Entp,
    Infj,
    Infp,
    Enfj,
    Enfp,
    Istj,
    Isfj,
    Estj,
    Esfj,
    Istp,
    Isfp,
    Estp,
    Esfp,
}

impl Personality {
    pub const ALL: [Personality; 16] = [
        Personality::Intj,
        Personality::Intp,
        Personality::Entj,
        Personality::Entp,
        Personality::Infj,
        Personality::Infp,
        Personality::Enfj,
        Personality::Enfp,
        Personality::Istj,
        Personality::Isfj,
        Personality::Estj,
        Personality::Esfj,
        Personality::Istp,
        Personality::Isfp,
        Personality::Estp,
        Personality::Esfp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Intj => "INTJ",
            Personality::Intp => "INTP",
            Personality::Entj => "ENTJ",
            Personality::Entp => "ENTP",
            Personality::Infj => "INFJ",
            Personality::Infp => "INFP",
            Personality::Enfj => "ENFJ",
            Personality::Enfp => "ENFP",
            Personality::Istj => "ISTJ",
            Personality::Isfj => "ISFJ",
            Personality::Estj => "ESTJ",
            Personality::Esfj => "ESFJ",
            Personality::Istp => "ISTP",
            Personality::Isfp => "ISFP",
            Personality::Estp => "ESTP",
            Personality::Esfp => "ESFP",
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform over all 16 types.
impl Distribution<Personality> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Personality {
        Personality::ALL[rng.gen_range(0..Personality::ALL.len())]
    }
}
