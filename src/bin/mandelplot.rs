extern crate clap;
extern crate mandelplot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use std::path::Path;
use std::str::FromStr;

use mandelplot::{write_bmp, CosinePalette, MonoPalette, Palette, RenderConfig, Renderer};

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

fn validate_positive_float(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(v) if v > 0.0 => Ok(()),
        _ => Err(err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const BREAKOUT: &str = "breakout";
const THREADS: &str = "threads";
const PALETTE: &str = "palette";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandelplot")
        .version("0.1.0")
        .about("Mandelbrot escape-time plotter")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("mandelbrot.bmp")
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("8192x8192")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("100")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Escape-time iteration cap"),
        )
        .arg(
            Arg::with_name(BREAKOUT)
                .required(false)
                .long(BREAKOUT)
                .short("b")
                .takes_value(true)
                .default_value("4")
                .validator(|s| {
                    validate_positive_float(&s, "Breakout threshold must be a positive number")
                })
                .help("Squared-magnitude escape threshold"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the render"),
        )
        .arg(
            Arg::with_name(PALETTE)
                .required(false)
                .long(PALETTE)
                .short("p")
                .takes_value(true)
                .default_value("cosine")
                .possible_values(&["cosine", "mono"])
                .help("Colour mapping for escaped points"),
        )
        .get_matches()
}

fn main() {
    let matches = args();
    let (width, height) = parse_pair::<usize>(matches.value_of(SIZE).unwrap(), 'x')
        .expect("Error parsing image dimensions");
    let iterations =
        u32::from_str(matches.value_of(ITERATIONS).unwrap()).expect("Could not parse iteration count");
    let breakout =
        f64::from_str(matches.value_of(BREAKOUT).unwrap()).expect("Could not parse breakout threshold");
    let threads =
        usize::from_str(matches.value_of(THREADS).unwrap()).expect("Could not parse thread count");

    let config = match RenderConfig::new(width, height, iterations, breakout) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
    };

    let palette: Box<dyn Palette> = match matches.value_of(PALETTE).unwrap() {
        "mono" => Box::new(MonoPalette),
        _ => Box::new(CosinePalette),
    };

    let renderer = Renderer::new(&config, palette.as_ref());
    let result = renderer.render_threaded(threads).and_then(|buffer| {
        write_bmp(Path::new(matches.value_of(OUTPUT).unwrap()), &buffer)
    });

    if let Err(e) = result {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
