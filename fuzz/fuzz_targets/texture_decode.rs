#![no_main]

// Every container reader must reject malformed input with an error, never a panic.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texcodec_texture_api::{load_texture, LoadOptions};
use texcodec_texture_common::SliceSource;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub suffix: u8,
    pub allow_3d: bool,
    pub data: Vec<u8>,
}

const SUFFIXES: [&str; 4] = ["dds", "ktx", "pkm", "hdr"];

fuzz_target!(|input: Input| {
    let suffix = SUFFIXES[input.suffix as usize % SUFFIXES.len()];
    let options = LoadOptions::new().with_allow_3d(input.allow_3d);

    if let Ok(loaded) = load_texture(&mut SliceSource::new(&input.data), suffix, &options, None) {
        let texture = loaded.texture;
        let required = texture.descriptor().payload_size();
        assert!(
            required.is_some_and(|size| texture.payload().len() >= size),
            "payload is smaller than the descriptor requires"
        );
    }
});
