use silk_arma4::silk::arma4_coefs::Arma4Coefs;
use silk_arma4::silk::resampler_private_arma4::{
    ResamplerStateArma4, resampler_private_arma4, resampler_private_arma4_in_place,
};
use silk_arma4::silk::sigproc_fix::{sat16, smlawb};

const UNIT_ZEROS: [i16; 7] = [16_384, 16_384, 0, 0, 0, 0, i16::MAX];
const LOWPASS: [i16; 7] = [23_492, -6_457, 14_358, -4_856, 14_654, -13_008, 4_456];
const NARROW: [i16; 7] = [13_248, -23_849, 24_126, -9_486, 26_806, -14_286, 1_065];

/// Deterministic pseudo-noise covering the full 16-bit range.
fn noise(len: usize, seed: u32) -> Vec<i16> {
    let mut x = seed;
    (0..len)
        .map(|_| {
            x = x.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (x >> 16) as u16 as i16
        })
        .collect()
}

#[test]
fn single_sample_trace() {
    let mut state = [0i32; 4];
    let mut output = [0i16; 1];

    resampler_private_arma4(&mut state, &mut output, &[1000], &UNIT_ZEROS);

    // in_Q8 = 256000, both sections pass it through, every state slot picks up 64000.
    assert_eq!(output, [500]);
    assert_eq!(state, [64_000; 4]);
}

#[test]
fn gain_above_sixteen_bits_aliases_to_truncation() {
    // A Q16 gain of 65536 does not fit the packed slot; its low 16 bits are zero.
    let coefs = [16_384, 16_384, 0, 0, 0, 0, 65_536u32 as u16 as i16];
    let mut state = [0i32; 4];
    let mut output = [0i16; 1];

    resampler_private_arma4(&mut state, &mut output, &[1000], &coefs);

    assert_eq!(output, [0]);
    assert_eq!(state, [64_000; 4]);
}

#[test]
fn zero_input_from_zero_state_stays_at_rounding_offset() {
    let coefs = [1i16, 2, 3, 4, 5, 6, 7];
    let expected = sat16(smlawb(128, 0, i32::from(coefs[6])) >> 8);
    let mut state = [0i32; 4];
    let mut output = [123i16; 32];

    resampler_private_arma4(&mut state, &mut output, &[0; 32], &coefs);

    assert!(output.iter().all(|&sample| sample == expected));
    assert_eq!(state, [0; 4]);
}

#[test]
fn repeated_calls_are_deterministic() {
    let input = noise(257, 7);
    let start = [1_000, -2_000, 3_000, -4_000];

    let run = || {
        let mut state = start;
        let mut output = vec![0i16; input.len()];
        resampler_private_arma4(&mut state, &mut output, &input, &LOWPASS);
        (output, state)
    };

    assert_eq!(run(), run());
}

#[test]
fn split_blocks_match_single_call() {
    let input = noise(480, 42);

    let mut whole_state = [0i32; 4];
    let mut whole = vec![0i16; input.len()];
    resampler_private_arma4(&mut whole_state, &mut whole, &input, &NARROW);

    for split in [0, 1, 160, 479, 480] {
        let mut state = [0i32; 4];
        let mut output = vec![0i16; input.len()];
        let (head, tail) = input.split_at(split);
        let (out_head, out_tail) = output.split_at_mut(split);
        resampler_private_arma4(&mut state, out_head, head, &NARROW);
        resampler_private_arma4(&mut state, out_tail, tail, &NARROW);

        assert_eq!(output, whole, "split at {split}");
        assert_eq!(state, whole_state, "split at {split}");
    }
}

#[test]
fn step_response_reference() {
    let mut filter = ResamplerStateArma4::new(Arma4Coefs::new(NARROW));
    let mut output = [0i16; 10];

    filter.process(&mut output, &[8000; 10]);

    assert_eq!(
        output,
        [130, 450, 1_050, 1_886, 2_946, 4_194, 5_541, 6_855, 7_992, 8_826]
    );
    assert_eq!(
        filter.state(),
        &[13_274_268, -7_301_013, 22_775_151, -16_813_542]
    );
}

#[test]
fn output_saturates_without_error() {
    let coefs = [0i16, 0, 0, 0, 0, 0, i16::MAX];

    let mut state = [1 << 27, 0, 1 << 27, 0];
    let mut output = [0i16; 1];
    resampler_private_arma4(&mut state, &mut output, &[i16::MAX], &coefs);
    assert_eq!(output, [i16::MAX]);
    assert_eq!(state, [0, 2_097_088, 0, 136_314_816]);

    let mut state = [-(1 << 27), 0, -(1 << 27), 0];
    resampler_private_arma4(&mut state, &mut output, &[i16::MIN], &coefs);
    assert_eq!(output, [i16::MIN]);
    assert_eq!(state, [0, -2_097_152, 0, -136_314_880]);
}

#[test]
fn empty_block_is_a_no_op() {
    let mut state = [11i32, -22, 33, -44];
    let mut output: [i16; 0] = [];

    resampler_private_arma4(&mut state, &mut output, &[], &LOWPASS);
    assert_eq!(state, [11, -22, 33, -44]);

    let mut filter = ResamplerStateArma4::with_state(state, Arma4Coefs::new(LOWPASS));
    assert_eq!(filter.try_process(&mut [], &[]), Ok(0));
    assert_eq!(filter.state(), &[11, -22, 33, -44]);
}

#[test]
fn offsets_into_shared_buffers() {
    let input = noise(64, 3);
    let mut padded_in = vec![0i16; 100];
    padded_in[20..84].copy_from_slice(&input);

    let mut reference_state = [0i32; 4];
    let mut reference = vec![0i16; 64];
    resampler_private_arma4(&mut reference_state, &mut reference, &input, &LOWPASS);

    let mut state = [0i32; 4];
    let mut padded_out = vec![-1i16; 100];
    resampler_private_arma4(
        &mut state,
        &mut padded_out[30..94],
        &padded_in[20..84],
        &LOWPASS,
    );

    assert_eq!(&padded_out[30..94], reference.as_slice());
    assert!(padded_out[..30].iter().all(|&s| s == -1));
    assert!(padded_out[94..].iter().all(|&s| s == -1));
    assert_eq!(state, reference_state);
}

#[test]
fn in_place_matches_out_of_place() {
    let input = noise(300, 99);

    let mut state_a = [0i32; 4];
    let mut output = vec![0i16; input.len()];
    resampler_private_arma4(&mut state_a, &mut output, &input, &LOWPASS);

    let mut state_b = [0i32; 4];
    let mut buf = input.clone();
    resampler_private_arma4_in_place(&mut state_b, &mut buf, &LOWPASS);

    assert_eq!(buf, output);
    assert_eq!(state_a, state_b);
}

#[test]
fn coefficient_swap_carries_state() {
    let input = noise(200, 5);

    let mut filter = ResamplerStateArma4::new(Arma4Coefs::new(LOWPASS));
    let mut output = vec![0i16; input.len()];
    filter.process(&mut output[..100], &input[..100]);
    filter.set_coefs(Arma4Coefs::new(NARROW));
    filter.process(&mut output[100..], &input[100..]);

    let mut state = [0i32; 4];
    let mut expected = vec![0i16; input.len()];
    resampler_private_arma4(&mut state, &mut expected[..100], &input[..100], &LOWPASS);
    resampler_private_arma4(&mut state, &mut expected[100..], &input[100..], &NARROW);

    assert_eq!(output, expected);
    assert_eq!(filter.state(), &state);
}

#[test]
fn independent_channels_on_separate_threads() {
    let left = noise(960, 1);
    let right = noise(960, 2);

    let filter_channel = |input: Vec<i16>| {
        std::thread::spawn(move || {
            let mut filter = ResamplerStateArma4::new(Arma4Coefs::new(LOWPASS));
            let mut output = vec![0i16; input.len()];
            for (inp, out) in input.chunks(160).zip(output.chunks_mut(160)) {
                filter.process(out, inp);
            }
            output
        })
    };

    let threaded = [filter_channel(left.clone()), filter_channel(right.clone())]
        .map(|handle| handle.join().unwrap());

    for (input, threaded) in [left, right].iter().zip(threaded.iter()) {
        let mut state = [0i32; 4];
        let mut output = vec![0i16; input.len()];
        resampler_private_arma4(&mut state, &mut output, input, &LOWPASS);
        assert_eq!(&output, threaded);
    }
}
