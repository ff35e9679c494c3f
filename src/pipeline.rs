use crate::sequence::{DnaSequence, Polypeptide, RnaSequence};

/// Every representation produced by one pass through the pipeline.
///
/// Constructed fresh per input; carries no identity beyond its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TranslationResult {
    #[cfg_attr(feature = "serde", serde(rename = "templateDNA"))]
    pub template_dna: DnaSequence,
    #[cfg_attr(feature = "serde", serde(rename = "complementaryDNA"))]
    pub complementary_dna: DnaSequence,
    #[cfg_attr(feature = "serde", serde(rename = "mRNA"))]
    pub mrna: RnaSequence,
    pub polypeptide: Polypeptide,
}

impl DnaSequence {
    /// Run the whole pipeline on this template strand: derive the
    /// complementary strand, transcribe it to mRNA, and translate the mRNA
    /// into a polypeptide.
    ///
    /// The sub-operations stay public for standalone use, but they are
    /// meant to be composed in exactly this order.
    pub fn translate_full(&self) -> TranslationResult {
        let complementary_dna = self.complement();
        let mrna = complementary_dna.transcribe();
        let polypeptide = mrna.translate();

        TranslationResult {
            template_dna: self.clone(),
            complementary_dna,
            mrna,
            polypeptide,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::nucleotide::DnaBase;
    use crate::residue::{AminoAcid, Residue};
    use crate::sequence::BaseSequence;

    fn dna(s: &str) -> DnaSequence {
        DnaSequence::from_str(s).unwrap()
    }

    #[test]
    fn test_single_codon_template() {
        let result = dna("ATG").translate_full();

        assert_eq!(result.template_dna.to_string(), "ATG");
        assert_eq!(result.complementary_dna.to_string(), "TAC");
        assert_eq!(result.mrna.to_string(), "AUG");
        assert_eq!(result.polypeptide.to_string(), "Met");
    }

    #[test]
    fn test_template_with_stop() {
        let result = dna("ATGTTTAAACCCTAA").translate_full();

        assert_eq!(result.complementary_dna.to_string(), "TACAAATTTGGGATT");
        assert_eq!(result.mrna.to_string(), "AUGUUUAAACCCUAA");
        assert_eq!(result.polypeptide.to_string(), "Met-Phe-Lys-Pro-STOP");
    }

    #[test]
    fn test_lowercase_template() {
        assert_eq!(dna("atg").translate_full(), dna("ATG").translate_full());
    }

    #[test]
    fn test_strand_invariants() {
        let result = dna("GATTACAGATTACA").translate_full();

        assert_eq!(result.template_dna.len(), result.complementary_dna.len());
        assert_eq!(result.template_dna.len(), result.mrna.len());
        for (t, c) in result.template_dna.iter().zip(result.complementary_dna.iter()) {
            assert_eq!(t.complement(), c);
        }
        for (c, m) in result.complementary_dna.iter().zip(result.mrna.iter()) {
            assert_eq!(c.transcribe(), m);
        }
    }

    #[test]
    fn test_stop_is_sentinel_not_label() {
        let result = dna("ATGTAA").translate_full();
        assert_eq!(
            result.polypeptide.residues(),
            &[Residue::AminoAcid(AminoAcid::Met), Residue::Stop]
        );
    }

    #[test]
    fn test_empty_template() {
        let result = DnaSequence::new(Vec::<DnaBase>::new()).translate_full();

        assert!(result.template_dna.is_empty());
        assert!(result.complementary_dna.is_empty());
        assert!(result.mrna.is_empty());
        assert!(result.polypeptide.is_empty());
    }
}
