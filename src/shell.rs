use std::io::{self, Write};

use thiserror::Error;

use crate::{
    cli::{self, CliError, Invocation, Mode},
    core::{StoreError, Ticks},
    scheduler::Algorithm,
    sim::{Report, Sim, Workload},
};

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Cli(#[from] CliError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Runs the command line and writes the report to `out`.
///
/// Returns the process exit status: `0` on success, `1` after printing
/// `ERROR: <reason>` for any rejected input or failed run.
pub fn run_main<I, S>(args: I, out: &mut impl Write) -> u8
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match run(args, out) {
        Ok(()) => 0,
        Err(err) => {
            // Nothing left to report to if stdout itself is gone
            let _ = writeln!(out, "ERROR: {err}");
            if let ShellError::Cli(_) = err {
                eprintln!("{}", cli::USAGE);
            }
            1
        }
    }
}

pub fn run<I, S>(args: I, out: &mut impl Write) -> Result<(), ShellError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let Invocation { mode, trace } = cli::parse_args(args)?;

    match mode {
        Mode::Run { algorithm, bursts } => {
            writeln!(out, "Using {algorithm}\n")?;
            write_accepted(out, &bursts)?;
            let report = simulate(out, algorithm, &bursts, trace)?;
            write_report(out, &report)?;
        }
        Mode::Random {
            count,
            quantum,
            seed,
        } => {
            let bursts = Workload::with_count(count).bursts(seed)?;
            writeln!(out, "Random workload (seed {seed})\n")?;
            write_accepted(out, &bursts)?;

            for algorithm in [Algorithm::Fcfs, Algorithm::RoundRobin { quantum }] {
                writeln!(out, "\nUsing {algorithm}")?;
                let report = simulate(out, algorithm, &bursts, trace)?;
                write_report(out, &report)?;
            }
        }
    }

    Ok(())
}

fn simulate(
    out: &mut impl Write,
    algorithm: Algorithm,
    bursts: &[Ticks],
    trace: bool,
) -> Result<Report, ShellError> {
    let mut sim = Sim::from_bursts(algorithm.scheduler(), bursts)?;
    if !trace {
        return Ok(sim.run_to_completion());
    }

    while !sim.all_completed() {
        let now = sim.now();
        for event in sim.step() {
            writeln!(out, "t={now} {event}")?;
        }
    }
    write!(out, "{}", sim.store())?;
    Ok(sim.report())
}

fn write_accepted(out: &mut impl Write, bursts: &[Ticks]) -> io::Result<()> {
    for (pid, burst) in bursts.iter().enumerate() {
        writeln!(out, "Accepted P{pid}: Burst {burst}")?;
    }
    Ok(())
}

fn write_report(out: &mut impl Write, report: &Report) -> io::Result<()> {
    writeln!(out, "Average wait time: {:.2}", report.average_wait())
}
