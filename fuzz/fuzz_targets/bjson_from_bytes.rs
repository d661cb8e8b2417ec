#![no_main]

// Arbitrary bytes must never panic the reader, whether validated or not.
// Anything that passes validation must survive compaction and validate again.

use libfuzzer_sys::fuzz_target;
use texcodec_bjson::{Document, DocumentRef, Validation};

fuzz_target!(|data: &[u8]| {
    if let Ok(view) = DocumentRef::from_raw_bytes(data, Validation::BypassValidation) {
        let _ = view.to_tree();
    }

    let Ok(mut doc) = Document::from_bytes(data, Validation::Validate) else {
        return;
    };
    let tree = doc.to_tree();
    doc.compact();
    assert_eq!(doc.to_tree(), tree, "compaction changed the contents");

    let bytes = doc.to_bytes();
    assert!(
        DocumentRef::from_raw_bytes(&bytes, Validation::Validate).is_ok(),
        "compacted document failed validation"
    );
});
