use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use triangular::data::linear_algebra::matrix::TriangularMatrix;
use triangular::io::{ReadValues, Tokens};

/// Combine two upper triangular matrices read from a file.
///
/// The file starts with the dimension, followed by the values on and above the diagonal of both
/// matrices, row by row.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// File containing the two matrices
    problem_file: PathBuf,
    /// What to do with the matrices
    #[arg(short, long, value_enum, default_value_t = Operation::Add)]
    operation: Operation,
}

#[derive(Clone, Copy, ValueEnum)]
enum Operation {
    Add,
    Subtract,
    Compare,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opts = Opts::parse();

    println!("Reading matrices: \"{}\"...", opts.problem_file.to_string_lossy());
    let file = File::open(&opts.problem_file)
        .with_context(|| format!("Couldn't open {:?}", opts.problem_file))?;
    let mut tokens = Tokens::new(BufReader::new(file));

    let dimension: usize = tokens.next_value().context("Couldn't read the dimension")?;
    let mut left = TriangularMatrix::<f64>::new(dimension)?;
    let mut right = TriangularMatrix::<f64>::new(dimension)?;
    left.read_values(&mut tokens).context("Couldn't read the first matrix")?;
    right.read_values(&mut tokens).context("Couldn't read the second matrix")?;

    match opts.operation {
        Operation::Add => print!("{}", left.try_add(&right)?),
        Operation::Subtract => print!("{}", left.try_sub(&right)?),
        Operation::Compare => if left == right {
            println!("Matrices are equal.");
        } else {
            println!("Matrices are not equal.");
        },
    }

    Ok(())
}
