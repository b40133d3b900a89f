use std::fmt::Display;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use itertools::Itertools;
use matrix_steps::input::parse_matrix;
use matrix_steps::solvers::inverse::is_inverse_of;
use matrix_steps::matrix::matrix::Element;
use matrix_steps::{
    determinant_with_steps, gaussian_elimination, inverse_with_steps, Fraction, Matrix,
};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// Solve [A | b] by Gaussian elimination
    Gaussian,
    /// Exact inverse by Gauss-Jordan
    Inverse,
    /// Determinant by triangularization
    Determinant,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(value_enum)]
    pub mode: Mode,

    /// Matrix text: rows separated by ';' or newlines, cells by spaces
    #[arg(short, long, conflicts_with = "file")]
    pub matrix: Option<String>,

    /// Read the matrix from a file (stdin when neither option is given)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print every intermediate matrix
    #[arg(short, long)]
    pub steps: bool,

    /// Decimal places for floating-point output
    #[arg(short, long, default_value_t = 3)]
    pub places: usize,
}

fn read_matrix_text(args: &Args) -> Result<String> {
    if let Some(text) = &args.matrix {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading matrix from {}", path.display()));
    }
    std::io::read_to_string(std::io::stdin()).context("reading matrix from stdin")
}

fn print_matrix<T: Element, F: Fn(&T) -> String>(m: &Matrix<T>, cell: F) {
    let rendered = m
        .to_list()
        .iter()
        .map(|row| row.iter().map(&cell).collect_vec())
        .collect_vec();
    let width = rendered.iter().flatten().map(String::len).max().unwrap_or(0);
    for row in rendered {
        println!("  [ {} ]", row.iter().map(|c| format!("{c:>width$}")).join("  "));
    }
}

fn print_steps<T: Element, F: Fn(&T) -> String>(steps: &[Matrix<T>], cell: F) {
    for (i, step) in steps.iter().enumerate() {
        println!("Step {}/{}", i, steps.len() - 1);
        print_matrix(step, &cell);
        println!();
    }
}

fn decimal(places: usize) -> impl Fn(&f64) -> String {
    move |x| format!("{x:.places$}")
}

fn exact<T: Display>(x: &T) -> String {
    x.to_string()
}

fn run(args: &Args) -> Result<()> {
    let matrix = parse_matrix(&read_matrix_text(args)?).context("parsing matrix")?;
    log::debug!("{}x{} matrix, mode {:?}", matrix.rows(), matrix.cols(), args.mode);

    match args.mode {
        Mode::Gaussian => {
            let res = gaussian_elimination(&matrix).context("gaussian elimination")?;
            if args.steps {
                print_steps(&res.steps, decimal(args.places));
            }
            match res.result {
                Some(x) => {
                    for (i, value) in x.iter().enumerate() {
                        println!("x{} = {}", i + 1, decimal(args.places)(value));
                    }
                }
                None => println!("No unique solution"),
            }
        }
        Mode::Inverse => {
            let res = inverse_with_steps(&matrix).context("matrix inversion")?;
            if args.steps {
                print_steps(&res.steps, exact::<Fraction>);
            }
            match res.result {
                Some(inverse) => {
                    println!("Inverse:");
                    print_matrix(&inverse, exact::<Fraction>);
                    log::debug!(
                        "A x A^-1 = I: {}",
                        is_inverse_of(&inverse, &matrix).context("checking inverse")?
                    );
                }
                None => println!("Singular matrix, no inverse"),
            }
        }
        Mode::Determinant => {
            let res = determinant_with_steps(&matrix).context("determinant")?;
            if args.steps {
                print_steps(&res.steps, decimal(args.places));
            }
            println!("det = {}", decimal(args.places)(&res.result));
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run(&args) {
        eprintln!("ran into error: {err:?}");
        process::exit(1)
    }
}
