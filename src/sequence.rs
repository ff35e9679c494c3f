use core::fmt;
use std::fmt::Write;
use std::str::FromStr;

pub use crate::errors::SequenceError;
use crate::nucleotide::{Codon, DnaBase, RnaBase};
use crate::residue::Residue;

/// Water mass added once per peptide when summing residue masses.
const WATER_AVERAGE_MASS: f64 = 18.01524;

pub trait BaseSequence: std::marker::Sized {
    type Item: Into<u8> + Copy;

    fn as_slice(&self) -> &[Self::Item];

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impls {
    ($type:ty) => {
        impl From<$type> for String {
            fn from(seq: $type) -> Self {
                let mut str = String::with_capacity(seq.len());
                for i in seq.as_slice() {
                    let c = u8::from(*i) as char;
                    str.push(c);
                }
                str
            }
        }

        impl std::ops::Index<usize> for $type {
            type Output = <Self as BaseSequence>::Item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.as_slice()[index]
            }
        }

        impl $type {
            pub fn iter(&self) -> impl Iterator<Item = <Self as BaseSequence>::Item> + '_ {
                self.as_slice().iter().copied()
            }
        }
    };
}

/// A DNA strand, read 5'→3'.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
pub struct DnaSequence {
    bases: Vec<DnaBase>,
}

impl DnaSequence {
    /// Construct a new DnaSequence from a Vec of bases
    pub fn new(bases: Vec<DnaBase>) -> Self {
        Self { bases }
    }

    /// Derive the complementary strand: every base replaced by its pairing
    /// partner, positions unchanged.
    ///
    /// This is a plain per-position complement, not a reverse complement;
    /// applying it twice returns the original strand.
    pub fn complement(&self) -> Self {
        Self::new(self.bases.iter().map(|b| b.complement()).collect())
    }

    /// Transcribe this strand to mRNA with the fixed substitution
    /// A→U, T→A, C→G, G→C.
    ///
    /// The pipeline feeds this the *complementary* strand, so the composed
    /// effect on the template is the conventional T→U rewrite.
    pub fn transcribe(&self) -> RnaSequence {
        RnaSequence::new(self.bases.iter().map(|b| b.transcribe()).collect())
    }
}

impl BaseSequence for DnaSequence {
    type Item = DnaBase;

    fn as_slice(&self) -> &[Self::Item] {
        &self.bases
    }
}

impls!(DnaSequence);

/// A messenger-RNA strand, read 5'→3'.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
pub struct RnaSequence {
    bases: Vec<RnaBase>,
}

impl RnaSequence {
    /// Construct a new RnaSequence from a Vec of bases
    pub fn new(bases: Vec<RnaBase>) -> Self {
        Self { bases }
    }

    /// Returns an iterator over the complete codons of the first reading
    /// frame. A trailing fragment of 1 or 2 bases yields no codon.
    pub fn codons(&self) -> impl Iterator<Item = Codon> + '_ {
        self.bases
            .chunks_exact(3)
            .map(|c| Codon([c[0], c[1], c[2]]))
    }

    /// Translate this mRNA into a polypeptide.
    ///
    /// Codons are consumed left to right in frame 0. Translation stops
    /// after the first stop codon, which is included in the output as the
    /// stop sentinel; any trailing partial codon is dropped silently.
    pub fn translate(&self) -> Polypeptide {
        let mut residues = Vec::with_capacity(self.bases.len() / 3);

        for codon in self.codons() {
            let residue = codon.translate();
            residues.push(residue);
            if residue.is_stop() {
                break;
            }
        }

        Polypeptide::new(residues)
    }
}

impl BaseSequence for RnaSequence {
    type Item = RnaBase;

    fn as_slice(&self) -> &[Self::Item] {
        &self.bases
    }
}

impls!(RnaSequence);

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bases {
            let u: u8 = b.into();
            f.write_char(u.into())?;
        }
        Ok(())
    }
}

impl fmt::Display for RnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bases {
            let u: u8 = b.into();
            f.write_char(u.into())?;
        }
        Ok(())
    }
}

impl TryFrom<&[u8]> for DnaSequence {
    type Error = SequenceError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(value.len());
        for &b in value {
            vec.push(DnaBase::try_from(b)?);
        }
        Ok(Self::new(vec))
    }
}

impl TryFrom<Vec<u8>> for DnaSequence {
    type Error = SequenceError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(&value[..])
    }
}

impl FromStr for DnaSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for RnaSequence {
    type Error = SequenceError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(value.len());
        for &b in value {
            vec.push(RnaBase::try_from(b)?);
        }
        Ok(Self::new(vec))
    }
}

impl TryFrom<Vec<u8>> for RnaSequence {
    type Error = SequenceError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(&value[..])
    }
}

impl FromStr for RnaSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.as_bytes())
    }
}

/// An ordered chain of residues, possibly terminated by the stop sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, std::hash::Hash)]
pub struct Polypeptide {
    residues: Vec<Residue>,
}

impl Polypeptide {
    pub fn new(residues: Vec<Residue>) -> Self {
        Self { residues }
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Residue> + '_ {
        self.residues.iter().copied()
    }

    /// Average mass of the chain in daltons: the sum of residue masses
    /// plus one water. The stop sentinel contributes nothing, and a chain
    /// with no amino acids weighs 0.
    pub fn average_mass(&self) -> f64 {
        let mut mass = 0.0;
        let mut amino_acids = 0;

        for residue in &self.residues {
            if let Residue::AminoAcid(aa) = residue {
                mass += aa.average_mass();
                amino_acids += 1;
            }
        }

        if amino_acids == 0 {
            0.0
        } else {
            mass + WATER_AVERAGE_MASS
        }
    }
}

impl fmt::Display for Polypeptide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, residue) in self.residues.iter().enumerate() {
            if i > 0 {
                f.write_char('-')?;
            }
            f.write_str(residue.label())?;
        }
        Ok(())
    }
}

impl From<Polypeptide> for String {
    fn from(p: Polypeptide) -> Self {
        p.to_string()
    }
}

impl FromStr for Polypeptide {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::default());
        }

        let residues = s
            .split('-')
            .map(|label| label.parse())
            .collect::<Result<Vec<Residue>, _>>()?;
        Ok(Self::new(residues))
    }
}

#[cfg(feature = "serde")]
crate::serde_utils::impl_stringlike!(DnaSequence);
#[cfg(feature = "serde")]
crate::serde_utils::impl_stringlike!(RnaSequence);
#[cfg(feature = "serde")]
crate::serde_utils::impl_stringlike!(Polypeptide);
