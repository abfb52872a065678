use std::str::FromStr;

use thiserror::Error;

use crate::{
    core::{Ticks, total_burst},
    scheduler::Algorithm,
};

pub const USAGE: &str = "usage: cpu_sched_sim [--trace] fcfs <burst>...\n       \
                         cpu_sched_sim [--trace] rr <quantum> <burst>...\n       \
                         cpu_sched_sim [--trace] random <count> <quantum> [seed]";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Missing arguments")]
    MissingArguments,

    #[error("invalid {what}: {value:?}")]
    InvalidNumber { what: &'static str, value: String },

    #[error("quantum must be positive")]
    ZeroQuantum,

    #[error("total burst of {count} processes is too large")]
    BurstTotalOverflow { count: usize },

    #[error("unknown mode {0:?}")]
    UnknownMode(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Run {
        algorithm: Algorithm,
        bursts: Vec<Ticks>,
    },
    // Seeded workload run under both FCFS and RR
    Random {
        count: usize,
        quantum: Ticks,
        seed: u64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub mode: Mode,
    pub trace: bool,
}

/// Parses the arguments following the program name.
pub fn parse_args<I, S>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut trace = false;
    let mut rest = Vec::new();
    for arg in args {
        match arg.as_ref() {
            "--trace" => trace = true,
            other => rest.push(other.to_string()),
        }
    }

    let (mode, operands) = rest.split_first().ok_or(CliError::MissingArguments)?;
    let mode = match mode.as_str() {
        "fcfs" => {
            if operands.is_empty() {
                return Err(CliError::MissingArguments);
            }
            Mode::Run {
                algorithm: Algorithm::Fcfs,
                bursts: parse_bursts(operands)?,
            }
        }
        "rr" => {
            let [quantum, bursts @ ..] = operands else {
                return Err(CliError::MissingArguments);
            };
            if bursts.is_empty() {
                return Err(CliError::MissingArguments);
            }
            Mode::Run {
                algorithm: Algorithm::RoundRobin {
                    quantum: parse_quantum(quantum)?,
                },
                bursts: parse_bursts(bursts)?,
            }
        }
        "random" => match operands {
            [count, quantum, seed @ ..] if seed.len() <= 1 => Mode::Random {
                count: parse_number("process count", count)?,
                quantum: parse_quantum(quantum)?,
                seed: seed
                    .first()
                    .map(|seed| parse_number("seed", seed))
                    .transpose()?
                    .unwrap_or_default(),
            },
            _ => return Err(CliError::MissingArguments),
        },
        other => return Err(CliError::UnknownMode(other.to_string())),
    };

    Ok(Invocation { mode, trace })
}

/// Parses burst operands, rejecting any list whose total would not fit in
/// the elapsed-time counter.
pub fn parse_bursts<S: AsRef<str>>(values: &[S]) -> Result<Vec<Ticks>, CliError> {
    let bursts = values
        .iter()
        .map(|value| parse_number("burst", value.as_ref()))
        .collect::<Result<Vec<Ticks>, _>>()?;

    if total_burst(&bursts).is_none() {
        return Err(CliError::BurstTotalOverflow {
            count: bursts.len(),
        });
    }
    Ok(bursts)
}

fn parse_quantum(value: &str) -> Result<Ticks, CliError> {
    match parse_number("quantum", value)? {
        0 => Err(CliError::ZeroQuantum),
        quantum => Ok(quantum),
    }
}

fn parse_number<T: FromStr>(what: &'static str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidNumber {
        what,
        value: value.to_string(),
    })
}
