use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use silk_arma4::silk::arma4_coefs::Arma4Coefs;
use silk_arma4::silk::resampler_private_arma4::ResamplerStateArma4;

/// 10 ms at 48 kHz.
const DEFAULT_BLOCK: usize = 480;

const USAGE: &str = "usage: arma4_vectors [--block <n>] <b1,b2,a11,a12,a21,a22,gain> <in.pcm> <out.pcm>\n\
       arma4_vectors [--block <n>] <in.pcm> <out.pcm>   (coefficients from ARMA4_COEFS)\n\
       PCM files are raw signed 16-bit little-endian mono";

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(1);
    }
}

struct Args {
    coefs: Arma4Coefs,
    input: PathBuf,
    output: PathBuf,
    block: usize,
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let bytes = fs::read(&args.input)
        .map_err(|err| format!("Error reading {}: {err}", args.input.display()))?;
    let input = decode_s16le(&bytes)?;

    let mut filter = ResamplerStateArma4::new(args.coefs);
    let mut output = vec![0i16; input.len()];
    let mut blocks = 0usize;
    for (inp, out) in input.chunks(args.block).zip(output.chunks_mut(args.block)) {
        filter.process(out, inp);
        blocks += 1;
    }

    let encoded: Vec<u8> = output.iter().flat_map(|s| s.to_le_bytes()).collect();
    fs::write(&args.output, encoded)
        .map_err(|err| format!("Error writing {}: {err}", args.output.display()))?;

    let saturated = output
        .iter()
        .filter(|&&s| s == i16::MAX || s == i16::MIN)
        .count();
    println!("coefficients: {:?}", args.coefs.packed());
    println!(
        "dc gain: {:.6}, stable: {}",
        args.coefs.dc_gain(),
        args.coefs.is_stable()
    );
    println!(
        "filtered {} samples in {blocks} blocks of {}",
        input.len(),
        args.block
    );
    println!("saturated samples: {saturated}");
    println!("final state: {:?}", filter.state());

    Ok(())
}

fn parse_args() -> Result<Args, String> {
    let mut positional = Vec::new();
    let mut block = DEFAULT_BLOCK;
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--block" {
            let Some(value) = iter.next() else {
                return Err(USAGE.to_string());
            };
            block = value
                .parse()
                .map_err(|err| format!("Invalid block size {value:?}: {err}"))?;
            if block == 0 {
                return Err("Block size must be greater than zero".to_string());
            }
        } else if arg == "--help" || arg == "-h" {
            return Err(USAGE.to_string());
        } else {
            positional.push(arg);
        }
    }

    let (coefs, input, output) = match positional.len() {
        2 => {
            let coefs = env::var("ARMA4_COEFS")
                .map_err(|_| format!("Missing coefficients (set ARMA4_COEFS).\n{USAGE}"))?;
            (coefs, &positional[0], &positional[1])
        }
        3 => (positional[0].clone(), &positional[1], &positional[2]),
        _ => return Err(USAGE.to_string()),
    };

    Ok(Args {
        coefs: parse_coefs(&coefs)?,
        input: PathBuf::from(input),
        output: PathBuf::from(output),
        block,
    })
}

fn parse_coefs(list: &str) -> Result<Arma4Coefs, String> {
    let values = list
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<i16>()
                .map_err(|err| format!("Invalid coefficient {v:?}: {err}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Arma4Coefs::from_slice(&values).map_err(|err| err.to_string())
}

fn decode_s16le(bytes: &[u8]) -> Result<Vec<i16>, String> {
    if bytes.len() % 2 != 0 {
        return Err(format!(
            "Input has {} bytes; expected whole 16-bit samples",
            bytes.len()
        ));
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}
