//! PKM (`.pkm`) support for the texcodec texture readers.
//!
//! PKM is the container written by Ericsson's `etcpack`: a 16-byte header
//! followed by a single level of ETC1 / ETC2 / EAC blocks.
#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub mod pkm;

pub use pkm::{decode_pkm, likely_pkm};
