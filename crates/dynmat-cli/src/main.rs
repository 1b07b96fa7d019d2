use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;

use dynmat_cli::config::resolve_limits;
use dynmat_cli::ops::{self, Operation};

fn input_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn factor_arg() -> Arg {
    Arg::new("factor")
        .help("Scalar factor applied to every element")
        .required(true)
        .allow_negative_numbers(true)
        .value_parser(clap::value_parser!(f64))
}

const BINARY_COMMANDS: [(&str, &str, &str, &str); 7] = [
    ("dot", "Dot product of two vectors", "First vector file", "Second vector file"),
    ("vadd", "Elementwise sum of two vectors", "First vector file", "Second vector file"),
    ("vsub", "Elementwise difference of two vectors", "First vector file", "Second vector file"),
    ("madd", "Sum of two matrices", "First matrix file", "Second matrix file"),
    ("msub", "Difference of two matrices", "First matrix file", "Second matrix file"),
    ("matmul", "Product of two matrices", "Left matrix file", "Right matrix file"),
    ("matvec", "Product of a matrix and a vector", "Matrix file", "Vector file"),
];

fn scale_command(name: &'static str, about: &'static str, input: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(input_arg("input", input))
        .arg(factor_arg())
}

fn build_cli() -> Command {
    let cli = Command::new("dynmat")
        .version(clap::crate_version!())
        .about("Dense vector and square matrix arithmetic on text files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .global(true)
                .help("JSON file with size limits (max_vector_size, max_matrix_size)")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(scale_command("vscale", "Multiply a vector by a scalar", "Vector file"))
        .subcommand(scale_command("mscale", "Multiply a matrix by a scalar", "Matrix file"));

    BINARY_COMMANDS
        .iter()
        .fold(cli, |cli, &(name, about, lhs, rhs)| {
            cli.subcommand(
                Command::new(name)
                    .about(about)
                    .arg(input_arg("lhs", lhs))
                    .arg(input_arg("rhs", rhs)),
            )
        })
}

fn collect_inputs(matches: &ArgMatches) -> Vec<PathBuf> {
    ["input", "lhs", "rhs"]
        .iter()
        .filter_map(|id| matches.try_get_one::<PathBuf>(id).ok().flatten().cloned())
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DYNMAT_LOG", "error,dynmat=info"))
        .init();

    let matches = build_cli().get_matches();
    let (name, sub_m) = match matches.subcommand() {
        Some(pair) => pair,
        None => unreachable!("subcommand_required is set"),
    };

    let limits = resolve_limits(sub_m.get_one::<PathBuf>("config"))?;
    let factor = sub_m.try_get_one::<f64>("factor").ok().flatten().copied();
    let op = Operation::from_name(name, factor)?;
    let inputs = collect_inputs(sub_m);

    let rendered = ops::run(op, &inputs, &limits)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
