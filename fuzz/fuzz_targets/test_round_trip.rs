#![no_main]

use huff_flex::count_simple;
use huff_flex::build_tree;
use huff_flex::tree_to_table;
use huff_flex::{decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() == 0 {
        return;
    }
    let counts = count_simple(&data);
    let tree = build_tree(&counts).unwrap();
    let table = tree_to_table(&tree);
    let encoded = encode(&data, &table).unwrap();
    let decoded = decode(&encoded, &tree).unwrap();
    assert_eq!(decoded, data);
});
