#![no_main]

use huff_flex::count_simple;
use huff_flex::build_tree;
use huff_flex::check_prefix_property;
use huff_flex::tree_to_table;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() == 0 {
        return;
    }
    let counts = count_simple(&data);
    let tree = build_tree(&counts).unwrap();
    check_prefix_property(&tree_to_table(&tree));
});
