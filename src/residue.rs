use std::fmt;
use std::str::FromStr;

use crate::errors::SequenceError;

/// One of the 20 proteinogenic amino acids, named by three-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
#[repr(u8)]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
}

impl AminoAcid {
    pub const ALL: [Self; 20] = [
        Self::Ala,
        Self::Arg,
        Self::Asn,
        Self::Asp,
        Self::Cys,
        Self::Gln,
        Self::Glu,
        Self::Gly,
        Self::His,
        Self::Ile,
        Self::Leu,
        Self::Lys,
        Self::Met,
        Self::Phe,
        Self::Pro,
        Self::Ser,
        Self::Thr,
        Self::Trp,
        Self::Tyr,
        Self::Val,
    ];

    /// Three-letter abbreviation as it appears in polypeptide output.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Ala => "Ala",
            Self::Arg => "Arg",
            Self::Asn => "Asn",
            Self::Asp => "Asp",
            Self::Cys => "Cys",
            Self::Gln => "Gln",
            Self::Glu => "Glu",
            Self::Gly => "Gly",
            Self::His => "His",
            Self::Ile => "Ile",
            Self::Leu => "Leu",
            Self::Lys => "Lys",
            Self::Met => "Met",
            Self::Phe => "Phe",
            Self::Pro => "Pro",
            Self::Ser => "Ser",
            Self::Thr => "Thr",
            Self::Trp => "Trp",
            Self::Tyr => "Tyr",
            Self::Val => "Val",
        }
    }

    pub fn from_abbreviation(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|aa| aa.abbreviation() == s)
    }

    /// Average residue mass in daltons (the monomer minus one water).
    pub fn average_mass(self) -> f64 {
        match self {
            Self::Ala => 71.0788,
            Self::Arg => 156.1875,
            Self::Asn => 114.1038,
            Self::Asp => 115.0886,
            Self::Cys => 103.1388,
            Self::Gln => 128.1307,
            Self::Glu => 129.1155,
            Self::Gly => 57.0519,
            Self::His => 137.1411,
            Self::Ile => 113.1594,
            Self::Leu => 113.1594,
            Self::Lys => 128.1741,
            Self::Met => 131.1926,
            Self::Phe => 147.1766,
            Self::Pro => 97.1167,
            Self::Ser => 87.0782,
            Self::Thr => 101.1051,
            Self::Trp => 186.2132,
            Self::Tyr => 163.1760,
            Self::Val => 99.1326,
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// One unit of a polypeptide chain: an amino acid, or the stop signal that
/// terminated translation.
///
/// The stop signal is a distinct variant so it can never be mistaken for a
/// real residue abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash)]
pub enum Residue {
    AminoAcid(AminoAcid),
    Stop,
}

impl Residue {
    /// The label rendered into polypeptide output: a three-letter
    /// abbreviation, or `STOP`.
    pub fn label(self) -> &'static str {
        match self {
            Self::AminoAcid(aa) => aa.abbreviation(),
            Self::Stop => "STOP",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        if s == "STOP" {
            return Some(Self::Stop);
        }
        AminoAcid::from_abbreviation(s).map(Self::AminoAcid)
    }

    pub fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}

impl FromStr for Residue {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| SequenceError::BadResidue(s.to_string()))
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviation_roundtrip() {
        for aa in AminoAcid::ALL {
            assert_eq!(AminoAcid::from_abbreviation(aa.abbreviation()), Some(aa));
        }
    }

    #[test]
    fn test_stop_label() {
        assert_eq!(Residue::Stop.to_string(), "STOP");
        assert_eq!(Residue::from_label("STOP"), Some(Residue::Stop));
        assert!(Residue::Stop.is_stop());
        assert!(!Residue::AminoAcid(AminoAcid::Met).is_stop());
    }

    #[test]
    fn test_bad_label() {
        assert_eq!(Residue::from_label("Xyz"), None);
        assert!(matches!(
            "met".parse::<Residue>(),
            Err(SequenceError::BadResidue(_))
        ));
    }

    #[test]
    fn test_masses_are_positive() {
        for aa in AminoAcid::ALL {
            assert!(aa.average_mass() > 0.0);
        }
        // glycine is the lightest, tryptophan the heaviest
        for aa in AminoAcid::ALL {
            assert!(aa.average_mass() >= AminoAcid::Gly.average_mass());
            assert!(aa.average_mass() <= AminoAcid::Trp.average_mass());
        }
    }
}
