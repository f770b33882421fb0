/*!
Small end to end demo, compresses a random uppercase message and prints the
codes and sizes.

    demo [MESSAGE_LEN] [SEED]

Both arguments are optional. The message is drawn from a seeded generator,
the same arguments print the same run.
*/

use std::env;
use std::process::exit;
use std::time::Instant;

use huff_flex::{build_tree, count_simple, decode, encode, tree_to_table, CodeTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_MESSAGE_LEN: usize = 80;
const DEFAULT_SEED: u64 = 42;
/// longer messages and bit-strings are cut off in the output
const PRINT_LIMIT: usize = 512;

fn main() {
    let (message_len, seed) = match parse_args() {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: demo [MESSAGE_LEN] [SEED]");
            exit(1);
        }
    };

    let message = random_message(message_len, seed);

    let started = Instant::now();
    let counts = count_simple(&message);
    let tree = match build_tree(&counts) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("error: {}", err);
            exit(1);
        }
    };
    let table = tree_to_table(&tree);
    let encoded = match encode(&message, &table) {
        Ok(encoded) => encoded,
        Err(err) => {
            eprintln!("error: {}", err);
            exit(1);
        }
    };
    let elapsed = started.elapsed();

    println!("Original Message: {}", clipped(&String::from_utf8_lossy(&message)));
    println!("Encoded Message: {}", clipped(&encoded.to_string()));
    println!();
    println!("Huffman Codes:");
    print_codes(&table);
    println!();
    println!("{}", tree);

    let original_bits = message.len() * 8;
    let encoded_bits = encoded.len();
    println!("Original size: {} bits", original_bits);
    println!("Encoded size: {} bits", encoded_bits);
    println!(
        "Compression ratio: {}%",
        100_i64 - (encoded_bits as i64 * 100 / original_bits as i64)
    );
    println!("Time taken: {:.3} ms", elapsed.as_secs_f64() * 1e3);

    match decode(&encoded, &tree) {
        Ok(decoded) if decoded == message => println!("Round trip: ok"),
        Ok(_) => {
            eprintln!("error: decoded message differs from the original");
            exit(1);
        }
        Err(err) => {
            eprintln!("error: {}", err);
            exit(1);
        }
    }
}

fn parse_args() -> Result<(usize, u64), String> {
    let mut args = env::args().skip(1);
    let message_len = match args.next() {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| format!("invalid message length {:?}", raw))?,
        None => DEFAULT_MESSAGE_LEN,
    };
    if message_len == 0 {
        return Err("message length must be at least 1".to_string());
    }
    let seed = match args.next() {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| format!("invalid seed {:?}", raw))?,
        None => DEFAULT_SEED,
    };
    Ok((message_len, seed))
}

fn random_message(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(b'A'..=b'Z')).collect()
}

fn print_codes(table: &CodeTable) {
    for (symbol, code) in table.iter() {
        println!("{}: {}", symbol as char, code);
    }
}

fn clipped(text: &str) -> String {
    if text.len() <= PRINT_LIMIT {
        text.to_string()
    } else {
        format!("{}.. ({} more)", &text[..PRINT_LIMIT], text.len() - PRINT_LIMIT)
    }
}
