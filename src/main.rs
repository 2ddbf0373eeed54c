extern crate clap;
extern crate env_logger;
extern crate failure;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use failure::{err_msg, Error};
use mandelbrot::{render_threaded, write_png, RenderConfig};
use num::Complex;
use std::str::FromStr;
use std::time::Instant;

/// Given a string and a separator, returns the two values
/// separated by the separator.
fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

/// A specific implementation of parse_pair using a comma and expecting
/// floating point numbers.
fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

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

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get() * 4;

    App::new("mandelbrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Mandelbrot set renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .index(1)
                .required(false)
                .default_value("mandelbrot.png")
                .help("Output PNG file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("3840x2160")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.5,-1.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the mandelbrot space"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1.0,1.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the mandelbrot space"),
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
                .help("Number of threads to use in solver [default: one per CPU]"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("1000")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Iterations before a point is considered inside the set"),
        )
        .get_matches()
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, Error> {
    matches
        .value_of(name)
        .ok_or_else(|| err_msg(format!("Missing value for {}", name)))
}

fn config_from(matches: &ArgMatches) -> Result<RenderConfig, Error> {
    let (width, height) = parse_pair::<usize>(required(matches, SIZE)?, 'x')
        .ok_or_else(|| err_msg("Error parsing image dimensions"))?;
    let leftlower = parse_complex(required(matches, LEFTLOWER)?)
        .ok_or_else(|| err_msg("Error parsing left lower point"))?;
    let rightupper = parse_complex(required(matches, RIGHTUPPER)?)
        .ok_or_else(|| err_msg("Error parsing right upper point"))?;
    let iterations = usize::from_str(required(matches, ITERATIONS)?)?;
    Ok(RenderConfig::new(width, height, leftlower, rightupper, iterations)?)
}

fn threads_from(matches: &ArgMatches) -> Result<usize, Error> {
    match matches.value_of(THREADS) {
        Some(threads) => Ok(usize::from_str(threads)?),
        None => Ok(num_cpus::get()),
    }
}

fn settings(matches: &ArgMatches) -> Result<(RenderConfig, usize), Error> {
    Ok((config_from(matches)?, threads_from(matches)?))
}

fn main() {
    env_logger::init();

    let matches = args();
    let (config, threads) = match settings(&matches) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    let output = matches.value_of(OUTPUT).unwrap_or("mandelbrot.png");

    println!("Generating Mandelbrot fractal...");
    println!("Resolution: {}x{} pixels", config.width(), config.height());
    println!("Max iterations: {}", config.limit());

    let start = Instant::now();
    let pixels = render_threaded(&config, threads);
    println!(
        "Computation completed in {:.2} seconds",
        start.elapsed().as_secs_f64()
    );

    match write_png(&pixels, output) {
        Ok(()) => println!("Saved to: {}", output),
        Err(e) => {
            error!("write to {} failed: {:?}", output, e);
            eprintln!("Error saving image: {}", e);
            std::process::exit(1);
        }
    }
}
