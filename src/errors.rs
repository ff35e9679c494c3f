use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SequenceError {
    #[error("non-ascii byte: {:x?}", .0)]
    NonAsciiByte(u8),
    #[error("bad DNA base: {:?}", .0)]
    BadDnaBase(char),
    #[error("bad RNA base: {:?}", .0)]
    BadRnaBase(char),
    #[error("bad residue label: {:?}", .0)]
    BadResidue(String),
}
