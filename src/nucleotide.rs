use std::fmt::{self, Write};

use crate::errors::SequenceError;

/// A DNA nucleotide.
///
/// Sorts in ATCG order, not alphabetical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
#[repr(u8)]
pub enum DnaBase {
    A = 0,
    T = 1,
    C = 2,
    G = 3,
}

/// An RNA nucleotide.
///
/// Sorts in AUCG order, mirroring [`DnaBase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
#[repr(u8)]
pub enum RnaBase {
    A = 0,
    U = 1,
    C = 2,
    G = 3,
}

const fn ascii_to_dna_table() -> [Option<DnaBase>; 256] {
    // 256 entries so any u8 can index directly, without a bounds check.
    let mut pack_table = [None; 256];

    macro_rules! insert {
        ($chr:literal, $variant:expr) => {
            pack_table[$chr.to_ascii_uppercase() as usize] = Some($variant);
            pack_table[$chr.to_ascii_lowercase() as usize] = Some($variant);
        };
    }

    insert!(b'a', DnaBase::A);
    insert!(b't', DnaBase::T);
    insert!(b'c', DnaBase::C);
    insert!(b'g', DnaBase::G);

    pack_table
}

const fn ascii_to_rna_table() -> [Option<RnaBase>; 256] {
    let mut pack_table = [None; 256];

    macro_rules! insert {
        ($chr:literal, $variant:expr) => {
            pack_table[$chr.to_ascii_uppercase() as usize] = Some($variant);
            pack_table[$chr.to_ascii_lowercase() as usize] = Some($variant);
        };
    }

    insert!(b'a', RnaBase::A);
    insert!(b'u', RnaBase::U);
    insert!(b'c', RnaBase::C);
    insert!(b'g', RnaBase::G);

    pack_table
}

const ASCII_TO_DNA: [Option<DnaBase>; 256] = ascii_to_dna_table();
const ASCII_TO_RNA: [Option<RnaBase>; 256] = ascii_to_rna_table();

impl DnaBase {
    pub const ALL: [Self; 4] = [Self::A, Self::T, Self::C, Self::G];

    /// The base this one pairs with on the complementary strand.
    pub fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }

    /// The RNA base this one is rewritten to during transcription.
    ///
    /// The substitution expects bases of the complementary strand: composed
    /// with [`complement`](Self::complement) it reproduces the T→U rewrite
    /// of the original template.
    pub fn transcribe(self) -> RnaBase {
        match self {
            Self::A => RnaBase::U,
            Self::T => RnaBase::A,
            Self::C => RnaBase::G,
            Self::G => RnaBase::C,
        }
    }

    pub fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::T => b'T',
            Self::C => b'C',
            Self::G => b'G',
        }
    }
}

impl RnaBase {
    pub const ALL: [Self; 4] = [Self::A, Self::U, Self::C, Self::G];

    pub fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::U => b'U',
            Self::C => b'C',
            Self::G => b'G',
        }
    }
}

impl TryFrom<u8> for DnaBase {
    type Error = SequenceError;

    #[inline(always)]
    fn try_from(u: u8) -> Result<Self, Self::Error> {
        if u >= 128 {
            return Err(SequenceError::NonAsciiByte(u));
        }

        match ASCII_TO_DNA[u as usize] {
            Some(b) => Ok(b),
            None => Err(SequenceError::BadDnaBase(u.into())),
        }
    }
}

impl TryFrom<u8> for RnaBase {
    type Error = SequenceError;

    #[inline(always)]
    fn try_from(u: u8) -> Result<Self, Self::Error> {
        if u >= 128 {
            return Err(SequenceError::NonAsciiByte(u));
        }

        match ASCII_TO_RNA[u as usize] {
            Some(b) => Ok(b),
            None => Err(SequenceError::BadRnaBase(u.into())),
        }
    }
}

impl From<DnaBase> for u8 {
    fn from(b: DnaBase) -> Self {
        b.to_ascii()
    }
}

impl From<DnaBase> for char {
    fn from(b: DnaBase) -> Self {
        b.to_ascii() as char
    }
}

impl From<RnaBase> for u8 {
    fn from(b: RnaBase) -> Self {
        b.to_ascii()
    }
}

impl From<RnaBase> for char {
    fn from(b: RnaBase) -> Self {
        b.to_ascii() as char
    }
}

impl fmt::Display for DnaBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((*self).into())
    }
}

impl fmt::Display for RnaBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((*self).into())
    }
}

/// Three consecutive RNA bases, the unit of translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash)]
pub struct Codon(pub [RnaBase; 3]);

impl TryFrom<[u8; 3]> for Codon {
    type Error = SequenceError;

    fn try_from(value: [u8; 3]) -> Result<Self, Self::Error> {
        Ok(Self([
            RnaBase::try_from(value[0])?,
            RnaBase::try_from(value[1])?,
            RnaBase::try_from(value[2])?,
        ]))
    }
}

impl From<Codon> for [RnaBase; 3] {
    fn from(c: Codon) -> Self {
        c.0
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}
