use std::process;
use std::thread;
use std::time::Duration;

use structopt::StructOpt;

use cdp1802::cli::CliOptions;
use cdp1802::cpu::{Cpu, StepOutcome};
use cdp1802::io::StdIo;
use cdp1802::load::load_image;
use cdp1802::machine_state::MachineState;
use cdp1802::trace::{ConsoleTrace, NullTrace, TraceSink};

fn main() {
    let options = CliOptions::from_args();

    let image = match load_image(&options.image) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    };

    let trace: Box<dyn TraceSink> = if options.debug {
        Box::new(ConsoleTrace)
    } else {
        Box::new(NullTrace)
    };

    let mut cpu = Cpu::new(
        MachineState::with_image(&image),
        Box::new(StdIo),
        trace,
    );

    let outcome = if options.delay_ms == 0 {
        cpu.run_until(options.max_steps)
    } else {
        run_throttled(&mut cpu, options.max_steps, options.delay_ms)
    };

    match outcome {
        StepOutcome::Halted => process::exit(0),
        StepOutcome::Continue => {
            let max_steps = options.max_steps.unwrap_or(0);
            cpu.trace.on_max_steps_exceeded(max_steps);
            process::exit(2);
        }
    }
}

fn run_throttled(cpu: &mut Cpu, max_steps: Option<u64>, delay_ms: u64) -> StepOutcome {
    let mut steps = 0u64;
    loop {
        if let Some(max) = max_steps {
            if steps >= max {
                return StepOutcome::Continue;
            }
        }
        if cpu.step() == StepOutcome::Halted {
            return StepOutcome::Halted;
        }
        steps += 1;
        thread::sleep(Duration::from_millis(delay_ms));
    }
}
