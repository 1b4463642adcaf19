#![no_main]

use libfuzzer_sys::fuzz_target;
use silk_arma4::silk::resampler_private_arma4::{
    resampler_private_arma4, resampler_private_arma4_in_place,
};

const SETUP_BYTE_COUNT: usize = 2 * 7 + 4 * 4 + 2;
const MAX_SAMPLES: usize = 4096;

fn read_le_i16(bytes: &[u8]) -> i16 {
    i16::from_le_bytes([bytes[0], bytes[1]])
}

fn read_le_i32(bytes: &[u8]) -> i32 {
    i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

// Layout: 7 coefficients, 4 state words, split point, then samples.
fuzz_target!(|data: &[u8]| {
    if data.len() < SETUP_BYTE_COUNT {
        return;
    }

    let mut coefs = [0i16; 7];
    for (k, coef) in coefs.iter_mut().enumerate() {
        *coef = read_le_i16(&data[2 * k..]);
    }
    let mut start = [0i32; 4];
    for (k, s) in start.iter_mut().enumerate() {
        *s = read_le_i32(&data[14 + 4 * k..]);
    }
    let split_seed = usize::from(u16::from_le_bytes([data[30], data[31]]));

    let input: Vec<i16> = data[SETUP_BYTE_COUNT..]
        .chunks_exact(2)
        .take(MAX_SAMPLES)
        .map(read_le_i16)
        .collect();
    let split = split_seed % (input.len() + 1);

    let mut whole_state = start;
    let mut whole = vec![0i16; input.len()];
    resampler_private_arma4(&mut whole_state, &mut whole, &input, &coefs);

    let mut split_state = start;
    let mut split_out = vec![0i16; input.len()];
    let (out_head, out_tail) = split_out.split_at_mut(split);
    resampler_private_arma4(&mut split_state, out_head, &input[..split], &coefs);
    resampler_private_arma4(&mut split_state, out_tail, &input[split..], &coefs);
    assert_eq!(whole, split_out);
    assert_eq!(whole_state, split_state);

    let mut in_place_state = start;
    let mut buf = input;
    resampler_private_arma4_in_place(&mut in_place_state, &mut buf, &coefs);
    assert_eq!(whole, buf);
    assert_eq!(whole_state, in_place_state);
});
