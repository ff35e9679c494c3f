use crate::nucleotide::{Codon, RnaBase};
use crate::residue::{AminoAcid, Residue};

/// Index of a codon in [`GENETIC_CODE`]: two bits per base, first base in
/// the high bits.
const fn codon_index(a: RnaBase, b: RnaBase, c: RnaBase) -> usize {
    (a as usize) << 4 | (b as usize) << 2 | c as usize
}

const fn genetic_code_table() -> [Residue; 64] {
    let mut table = [Residue::Stop; 64];

    macro_rules! insert {
        ($a:ident $b:ident $c:ident => STOP) => {
            table[codon_index(RnaBase::$a, RnaBase::$b, RnaBase::$c)] = Residue::Stop;
        };
        ($a:ident $b:ident $c:ident => $aa:ident) => {
            table[codon_index(RnaBase::$a, RnaBase::$b, RnaBase::$c)] =
                Residue::AminoAcid(AminoAcid::$aa);
        };
    }

    insert!(U U U => Phe);
    insert!(U U C => Phe);
    insert!(U U A => Leu);
    insert!(U U G => Leu);
    insert!(C U U => Leu);
    insert!(C U C => Leu);
    insert!(C U A => Leu);
    insert!(C U G => Leu);
    insert!(A U U => Ile);
    insert!(A U C => Ile);
    insert!(A U A => Ile);
    insert!(A U G => Met);
    insert!(G U U => Val);
    insert!(G U C => Val);
    insert!(G U A => Val);
    insert!(G U G => Val);
    insert!(U C U => Ser);
    insert!(U C C => Ser);
    insert!(U C A => Ser);
    insert!(U C G => Ser);
    insert!(C C U => Pro);
    insert!(C C C => Pro);
    insert!(C C A => Pro);
    insert!(C C G => Pro);
    insert!(A C U => Thr);
    insert!(A C C => Thr);
    insert!(A C A => Thr);
    insert!(A C G => Thr);
    insert!(G C U => Ala);
    insert!(G C C => Ala);
    insert!(G C A => Ala);
    insert!(G C G => Ala);
    insert!(U A U => Tyr);
    insert!(U A C => Tyr);
    insert!(U A A => STOP);
    insert!(U A G => STOP);
    insert!(C A U => His);
    insert!(C A C => His);
    insert!(C A A => Gln);
    insert!(C A G => Gln);
    insert!(A A U => Asn);
    insert!(A A C => Asn);
    insert!(A A A => Lys);
    insert!(A A G => Lys);
    insert!(G A U => Asp);
    insert!(G A C => Asp);
    insert!(G A A => Glu);
    insert!(G A G => Glu);
    insert!(U G U => Cys);
    insert!(U G C => Cys);
    insert!(U G A => STOP);
    insert!(U G G => Trp);
    insert!(C G U => Arg);
    insert!(C G C => Arg);
    insert!(C G A => Arg);
    insert!(C G G => Arg);
    insert!(A G U => Ser);
    insert!(A G C => Ser);
    insert!(A G A => Arg);
    insert!(A G G => Arg);
    insert!(G G U => Gly);
    insert!(G G C => Gly);
    insert!(G G A => Gly);
    insert!(G G G => Gly);

    table
}

/// The standard genetic code over all 64 codons.
const GENETIC_CODE: [Residue; 64] = genetic_code_table();

impl Codon {
    /// Resolve this codon to a residue per the standard genetic code.
    pub fn translate(self) -> Residue {
        GENETIC_CODE[codon_index(self.0[0], self.0[1], self.0[2])]
    }

    /// Returns an iterator over all 64 codons.
    pub fn all_codons() -> impl Iterator<Item = Self> {
        const B: [RnaBase; 4] = RnaBase::ALL;
        B.iter().flat_map(move |&a| {
            B.iter()
                .flat_map(move |&b| B.iter().map(move |&c| Codon([a, b, c])))
        })
    }
}
