extern crate clap;
extern crate image;
extern crate num_cpus;
extern crate starfish;

use clap::{App, Arg, ArgMatches};
use image::png::PNGEncoder;
use image::ColorType;
use starfish::JuliaRenderer;
use std::fs::File;
use std::str::FromStr;

const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const OUTPUT: &str = "output";
const THREADS: &str = "threads";

const DEFAULT_SIZE: &str = "1024";
const DEFAULT_ITERATIONS: &str = "1024";
const DEFAULT_OUTPUT: &str = "julia_starfish.png";

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("julia")
        .version("0.1.0")
        .about("Julia set \"starfish\" renderer")
        .arg(
            Arg::with_name(SIZE)
                .index(1)
                .default_value(DEFAULT_SIZE)
                .help("Width and height of the square output image, in pixels"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .index(2)
                .default_value(DEFAULT_ITERATIONS)
                .help("Maximum number of iterations per point"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .index(3)
                .default_value(DEFAULT_OUTPUT)
                .help("Output PNG file"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the sweep"),
        )
        .get_matches()
}

/// The contract for a bad size or iteration cap is a usage message
/// and exit status 2, distinct from the status-1 render and I/O
/// failures.
fn usage(complaint: &str) -> ! {
    eprintln!("{}", complaint);
    eprintln!("Usage: julia [N] [M] [OUTPUT]");
    eprintln!("  N       width and height of the square image in pixels (default {})", DEFAULT_SIZE);
    eprintln!("  M       iteration cap per point (default {})", DEFAULT_ITERATIONS);
    eprintln!("  OUTPUT  output PNG path (default {})", DEFAULT_OUTPUT);
    std::process::exit(2);
}

fn parse_positive(s: &str) -> Option<usize> {
    match usize::from_str(s) {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}

fn write_image(outfile: &str, pixels: &[u8], size: usize) -> Result<(), std::io::Error> {
    let output = File::create(outfile)?;
    let encoder = PNGEncoder::new(output);
    encoder.encode(pixels, size as u32, size as u32, ColorType::RGBA(8))?;
    Ok(())
}

fn main() {
    let matches = args();

    let size = match parse_positive(matches.value_of(SIZE).unwrap()) {
        Some(n) => n,
        None => usage("N must be a positive integer"),
    };
    let iterations = match parse_positive(matches.value_of(ITERATIONS).unwrap()) {
        Some(n) => n,
        None => usage("M must be a positive integer"),
    };
    let outfile = matches.value_of(OUTPUT).unwrap();
    let threads = match matches.value_of(THREADS) {
        Some(t) => usize::from_str(t).expect("Could not parse thread count"),
        None => num_cpus::get(),
    };

    let renderer = match JuliaRenderer::starfish(size, iterations) {
        Ok(renderer) => renderer,
        Err(e) => usage(&e.to_string()),
    };

    match renderer.render_threaded(threads) {
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
        Ok(pixels) => {
            if let Err(e) = write_image(outfile, &pixels, size) {
                eprintln!("Could not write {}: {}", outfile, e);
                std::process::exit(1);
            }
            println!("Wrote {} ({}x{}, M={})", outfile, size, size, iterations);
        }
    }
}
