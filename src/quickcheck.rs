use quickcheck::{Arbitrary, Gen};

use crate::{Codon, DnaBase, DnaSequence, RnaBase, RnaSequence};

impl Arbitrary for DnaBase {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Self::ALL)
            .expect("Gen should be able to choose a DnaBase")
    }
}

impl Arbitrary for RnaBase {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Self::ALL)
            .expect("Gen should be able to choose an RnaBase")
    }
}

impl Arbitrary for Codon {
    fn arbitrary(g: &mut Gen) -> Self {
        Self([
            RnaBase::arbitrary(g),
            RnaBase::arbitrary(g),
            RnaBase::arbitrary(g),
        ])
    }
}

impl Arbitrary for DnaSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        Self::new(Arbitrary::arbitrary(g))
    }
}

impl Arbitrary for RnaSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        Self::new(Arbitrary::arbitrary(g))
    }
}
