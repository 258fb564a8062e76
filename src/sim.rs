//! Driver: operator prompt, simulation run, and before/after reporting.

use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::board::Board;
use crate::config::SimConfig;
use crate::error::{InputError, SimError};
use crate::load::LoadSimulator;
use crate::peg::Peg;
use crate::pool::WorkerPool;
use crate::solver::{optimal_move_count, solve};

/// What a finished run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub submitted: usize,
    pub failed: usize,
    pub pegs: Vec<Peg>,
}

impl RunSummary {
    /// Every disc sits on the last (destination) peg.
    pub fn is_solved(&self) -> bool {
        match self.pegs.split_last() {
            Some((destination, rest)) => {
                !destination.is_empty() && rest.iter().all(Peg::is_empty)
            }
            None => false,
        }
    }
}

/// Process CPU user/system time in seconds, where the platform reports it.
#[cfg(unix)]
fn cpu_times_seconds() -> Option<(f64, f64)> {
    let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) };
    if rc != 0 {
        return None;
    }
    let seconds = |tv: libc::timeval| tv.tv_sec as f64 + tv.tv_usec as f64 / 1_000_000.0;
    Some((seconds(usage.ru_utime), seconds(usage.ru_stime)))
}

#[cfg(not(unix))]
fn cpu_times_seconds() -> Option<(f64, f64)> {
    None
}

/// Parse an operator-supplied disc count.
pub fn parse_disc_count(text: &str, min_discs: u32) -> Result<u32, InputError> {
    let trimmed = text.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if value < i64::from(min_discs) {
        return Err(InputError::TooFew { min: min_discs });
    }
    u32::try_from(value).map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// Prompt until the operator enters a valid disc count.
pub fn prompt_disc_count<R, W>(
    input: &mut R,
    output: &mut W,
    min_discs: u32,
) -> Result<u32, InputError>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(
            output,
            "Enter the number of discs for the Tower of Hanoi (minimum {min_discs}): "
        )?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        match parse_disc_count(&line, min_discs) {
            Ok(discs) => return Ok(discs),
            Err(InputError::TooFew { min }) => {
                writeln!(output, "Please enter a number greater than or equal to {min}.")?;
            }
            Err(_) => writeln!(output, "Please enter a valid integer.")?,
        }
    }
}

fn print_pegs(title: &str, pegs: &[Peg]) {
    println!();
    println!("{title}");
    for peg in pegs {
        println!("{peg}");
    }
}

/// Solve a tower of `discs` discs on the worker pool and report the result.
pub fn run(config: &SimConfig, discs: u32) -> Result<RunSummary, SimError> {
    let board = Arc::new(Board::with_tower(config.peg_names.iter().cloned(), discs));
    print_pegs("Initial state:", &board.snapshot());

    let load = LoadSimulator::new(config.load_min, config.load_max);
    info!(
        discs,
        workers = config.workers,
        expected_moves = optimal_move_count(discs),
        "starting simulation"
    );

    let cpu_start = cpu_times_seconds();
    let start = Instant::now();
    let mut failed = 0usize;
    let submitted = {
        let mut pool = WorkerPool::spawn(config.workers, Arc::clone(&board))?;
        let handles = solve(discs, 0, 1, 2, &mut pool);
        for completion in pool.as_completed(&handles) {
            let completion = load.simulate(completion);
            if let Err(err) = &completion.result {
                failed += 1;
                warn!(
                    move_id = completion.id,
                    worker = completion.worker,
                    error = %err,
                    "move failed"
                );
            }
        }
        pool.join();
        handles.len()
    };
    let elapsed = start.elapsed();

    let pegs = board.snapshot();
    print_pegs("Final state:", &pegs);
    println!();
    println!("Total execution time: {:.2} seconds", elapsed.as_secs_f64());
    if let (Some((user_start, sys_start)), Some((user_end, sys_end))) =
        (cpu_start, cpu_times_seconds())
    {
        info!(
            cpu_user_s = user_end - user_start,
            cpu_sys_s = sys_end - sys_start,
            "cpu time"
        );
    }
    info!(submitted, failed, elapsed_ms = elapsed.as_millis() as u64, "simulation finished");

    Ok(RunSummary {
        submitted,
        failed,
        pegs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;

    fn prompt(script: &str) -> (Result<u32, InputError>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prompt_disc_count(&mut input, &mut output, 3);
        (result, String::from_utf8(output).expect("utf8 output"))
    }

    #[test]
    fn reprompts_until_valid_count() {
        let (result, output) = prompt("abc\n2\n4\n");
        assert_eq!(result.expect("valid count"), 4);
        assert_eq!(output.matches("Enter the number of discs").count(), 3);
        assert_eq!(output.matches("Please enter a valid integer.").count(), 1);
        assert_eq!(
            output
                .matches("Please enter a number greater than or equal to 3.")
                .count(),
            1
        );
    }

    #[test]
    fn negative_count_is_too_few() {
        let (result, output) = prompt(" -1 \n 5 \n");
        assert_eq!(result.expect("valid count"), 5);
        assert!(output.contains("greater than or equal to 3"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let (result, _) = prompt("x\n");
        assert!(matches!(result, Err(InputError::Closed)));
    }

    #[test]
    fn parse_rejects_out_of_range_values() {
        assert!(matches!(
            parse_disc_count("99999999999", 3),
            Err(InputError::NotANumber(_))
        ));
        assert!(matches!(
            parse_disc_count("1", 3),
            Err(InputError::TooFew { min: 3 })
        ));
        assert_eq!(parse_disc_count("+3", 3).expect("valid"), 3);
    }

    #[test]
    fn run_moves_tower_to_last_peg() {
        let config = SimConfig {
            load_min: Duration::ZERO,
            load_max: Duration::ZERO,
            ..SimConfig::default()
        };
        let summary = run(&config, 4).expect("run succeeds");
        assert_eq!(summary.submitted, 15);
        assert_eq!(summary.failed, 0);
        assert!(summary.is_solved());
        let rendered: Vec<String> = summary.pegs.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["Tower_0: []", "Tower_1: []", "Tower_2: [4, 3, 2, 1]"]
        );
    }

    #[test]
    fn unsolved_summary_is_detected() {
        let mut source = Peg::new("Tower_0");
        assert!(source.push(crate::types::Disc::new(1)));
        let summary = RunSummary {
            submitted: 1,
            failed: 1,
            pegs: vec![source, Peg::new("Tower_1"), Peg::new("Tower_2")],
        };
        assert!(!summary.is_solved());
    }
}
