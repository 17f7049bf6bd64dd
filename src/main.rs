//! Kirchhoff - circuit equation generator
//!
//! Reads a netlist and prints the independent equations of the network.
//!
//! # Usage
//!
//! ```bash
//! kirchhoff circuit.net --equations all --matrices -vv
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use kirchhoff_core::{dsl, error::Result, Analysis, AnalysisConfig};
use log::LevelFilter;

/// Which equations to print.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum EquationSet {
    /// Mixed node-potential / branch-current system
    Model,
    /// KCL from the fundamental cut-set matrix
    Kcl,
    /// KVL from the fundamental loop matrix
    Kvl,
    /// Branch constitutive relations
    Constitutive,
    /// Everything above
    All,
}

/// Element type used for elimination.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ScalarType {
    F32,
    F64,
}

/// Circuit equation generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the netlist file
    #[arg(value_name = "CIRCUIT_FILE")]
    circuit_file: PathBuf,

    /// Equations to print
    #[arg(short, long, value_enum, default_value_t = EquationSet::Model)]
    equations: EquationSet,

    /// Also print the incidence, loop and cut-set matrices
    #[arg(long)]
    matrices: bool,

    /// Keep the branch order of the netlist
    #[arg(long)]
    no_normalize: bool,

    /// Element type for elimination
    #[arg(long, value_enum, default_value_t = ScalarType::F64)]
    scalar: ScalarType,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    // Parse the netlist
    let circuit = dsl::parse_file(&args.circuit_file)?;

    let config = AnalysisConfig::new().with_normalize(!args.no_normalize);
    let analysis = match args.scalar {
        ScalarType::F32 => Analysis::with_config::<f32>(circuit, config)?,
        ScalarType::F64 => Analysis::with_config::<f64>(circuit, config)?,
    };

    println!("circuit:\n{}", analysis.normalized_circuit());
    println!("spanning tree:\n{}", analysis.spanning_tree().circuit());

    if args.matrices {
        println!("A = {}", analysis.incidence());
        println!("B = {}", analysis.loop_matrix());
        println!("D = {}", analysis.cutset_matrix());
    }

    let all = args.equations == EquationSet::All;
    if all || args.equations == EquationSet::Kcl {
        println!("KCL(A):\n{}", analysis.incidence_kcl_equations());
        println!("KCL(D):\n{}", analysis.kcl_equations());
    }
    if all || args.equations == EquationSet::Kvl {
        println!("KVL(B):\n{}", analysis.kvl_equations());
    }
    if all || args.equations == EquationSet::Constitutive {
        println!("constitutive:");
        for relation in analysis.constitutive_equations() {
            println!("{relation}");
        }
        println!();
    }
    if all || args.equations == EquationSet::Model {
        println!("model:\n{}", analysis.model_equations());
    }

    Ok(())
}
