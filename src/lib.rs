mod errors;
pub use errors::*;

mod nucleotide;
pub use nucleotide::*;

mod residue;
pub use residue::*;

mod genetic_code;

mod sequence;
pub use sequence::*;

mod pipeline;
pub use pipeline::*;

mod request;
pub use request::*;

#[cfg(feature = "quickcheck")]
mod quickcheck;

#[cfg(feature = "serde")]
mod serde_utils;
