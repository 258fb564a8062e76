mod board;
mod config;
mod error;
mod gate;
mod load;
mod logging;
mod mover;
mod peg;
mod pool;
mod sim;
mod solver;
mod types;

use std::io;

use tracing::warn;

use crate::config::SimConfig;

fn main() {
    logging::init();
    let config = SimConfig::default();

    let discs = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        match sim::prompt_disc_count(&mut input, &mut output, config.min_discs) {
            Ok(discs) => discs,
            Err(err) => {
                eprintln!();
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
    };

    match sim::run(&config, discs) {
        Ok(summary) => {
            if summary.failed > 0 {
                warn!(
                    failed = summary.failed,
                    submitted = summary.submitted,
                    "some moves were rejected"
                );
            }
            if !summary.is_solved() {
                warn!("tower did not end up on the destination peg");
            }
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
