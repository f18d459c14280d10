// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! `gai-solve`: generates (or reads) a Group Assignment on Intervals
//! instance, solves it with one of the three strategies, prints a summary
//! and writes a JSON run report.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use gai_solver::generators::{
    all_full, hard_no_amount_version, hard_yes_amount_version, max_group_witnesses_no, max_group_witnesses_yes,
    max_witnesses_no, max_witnesses_yes, simple_no, simple_yes, GeneratedInstance,
};
use gai_solver::multiset::IntervalMultiset;
use gai_solver::solver::{breadth_first, depth_first, parallel};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown instance family '{0}'")]
    UnknownFamily(String),
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),
    #[error("failed to write the run report")]
    Report(#[from] gai_solver::report::ReportError),
}

#[derive(Debug, Clone, Copy)]
enum Family {
    SimpleYes,
    SimpleNo,
    MaxWitnessesYes,
    MaxWitnessesNo,
    MaxGroupWitnessesYes,
    MaxGroupWitnessesNo,
    HardYesAmountVersion,
    HardNoAmountVersion,
    AllFull,
}

impl FromStr for Family {
    type Err = CliError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple-yes" => Ok(Family::SimpleYes),
            "simple-no" => Ok(Family::SimpleNo),
            "max-witnesses-yes" => Ok(Family::MaxWitnessesYes),
            "max-witnesses-no" => Ok(Family::MaxWitnessesNo),
            "max-group-witnesses-yes" => Ok(Family::MaxGroupWitnessesYes),
            "max-group-witnesses-no" => Ok(Family::MaxGroupWitnessesNo),
            "hard-yes-amount-version" => Ok(Family::HardYesAmountVersion),
            "hard-no-amount-version" => Ok(Family::HardNoAmountVersion),
            "all-full" => Ok(Family::AllFull),
            other => Err(CliError::UnknownFamily(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum StrategyArg {
    Breadth,
    Depth,
    Parallel,
}

impl FromStr for StrategyArg {
    type Err = CliError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breadth" => Ok(StrategyArg::Breadth),
            "depth" => Ok(StrategyArg::Depth),
            "parallel" => Ok(StrategyArg::Parallel),
            other => Err(CliError::UnknownStrategy(other.to_owned())),
        }
    }
}

/// Solve a Group Assignment on Intervals instance.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of intervals in the generated instance.
    n_intervals: u32,

    /// Which generator family to draw the instance from.
    #[arg(long, default_value = "simple-yes")]
    family: Family,

    /// Which execution strategy to solve with.
    #[arg(long, default_value = "breadth")]
    strategy: StrategyArg,

    /// Number of worker threads for the parallel strategy (defaults to the
    /// number of logical CPUs).
    #[arg(long)]
    threads: Option<usize>,

    /// Seed for the instance generator's RNG, for reproducible instances.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Directory run reports are written to.
    #[arg(long, default_value = "results")]
    results_dir: PathBuf,
}

impl clap::ValueEnum for Family {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Family::SimpleYes,
            Family::SimpleNo,
            Family::MaxWitnessesYes,
            Family::MaxWitnessesNo,
            Family::MaxGroupWitnessesYes,
            Family::MaxGroupWitnessesNo,
            Family::HardYesAmountVersion,
            Family::HardNoAmountVersion,
            Family::AllFull,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        let name = match self {
            Family::SimpleYes => "simple-yes",
            Family::SimpleNo => "simple-no",
            Family::MaxWitnessesYes => "max-witnesses-yes",
            Family::MaxWitnessesNo => "max-witnesses-no",
            Family::MaxGroupWitnessesYes => "max-group-witnesses-yes",
            Family::MaxGroupWitnessesNo => "max-group-witnesses-no",
            Family::HardYesAmountVersion => "hard-yes-amount-version",
            Family::HardNoAmountVersion => "hard-no-amount-version",
            Family::AllFull => "all-full",
        };
        Some(clap::builder::PossibleValue::new(name))
    }
}

impl clap::ValueEnum for StrategyArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[StrategyArg::Breadth, StrategyArg::Depth, StrategyArg::Parallel]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        let name = match self {
            StrategyArg::Breadth => "breadth",
            StrategyArg::Depth => "depth",
            StrategyArg::Parallel => "parallel",
        };
        Some(clap::builder::PossibleValue::new(name))
    }
}

fn generate(family: Family, n: u32, rng: &mut StdRng) -> GeneratedInstance {
    match family {
        Family::SimpleYes => simple_yes(n, rng),
        Family::SimpleNo => simple_no(n, rng),
        Family::MaxWitnessesYes => max_witnesses_yes(n, rng),
        Family::MaxWitnessesNo => max_witnesses_no(n, rng),
        Family::MaxGroupWitnessesYes => max_group_witnesses_yes(n, rng),
        Family::MaxGroupWitnessesNo => max_group_witnesses_no(n, rng),
        Family::HardYesAmountVersion => hard_yes_amount_version(n, rng),
        Family::HardNoAmountVersion => hard_no_amount_version(n, rng),
        Family::AllFull => all_full(n),
    }
}

fn solve(strategy: StrategyArg, instance: &IntervalMultiset, threads: Option<usize>) -> gai_solver::SolveResult {
    match strategy {
        StrategyArg::Breadth => breadth_first::solve(instance),
        StrategyArg::Depth => depth_first::solve(instance),
        StrategyArg::Parallel => parallel::solve(instance, threads),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);
    let generated = generate(args.family, args.n_intervals, &mut rng);

    let result = solve(args.strategy, &generated.instance, args.threads);

    println!("Family          : {}", generated.name);
    println!("N Intervals     : {}", args.n_intervals);
    println!("Solution Found  : {}", result.solution_found);
    println!("Run Time        : {:?}", result.run_time);
    println!("Groups Built    : {}", result.metrics.n_groups_built);
    println!("Groups Kept     : {}", result.metrics.n_groups_kept);
    println!("Steps           : {}", result.metrics.n_steps);

    let mut info = result.run_info(generated.name);
    info.metadata = generated.metadata;
    let path = gai_solver::report::save_to_file(&info, &args.results_dir).map_err(CliError::from)?;
    println!("Report          : {}", path.display());

    Ok(())
}
