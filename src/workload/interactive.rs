//! Keyboard entry of a workload.
//!
//! Asks for a process count, then for the arrival time, burst time and
//! priority of `P1..=Pn` in turn. PIDs are assigned in entry order.
//!
//! Any line that does not parse, or input that ends early, fails the
//! whole entry with [`SimError::Input`] naming the line. The finished set
//! is validated before it is returned.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::info;

use crate::error::{Result, SimError};
use crate::models::{Pid, Process, Ticks};
use crate::validation::validate_processes;

/// Reads a workload from `input`, writing prompts to `output`.
///
/// # Errors
/// - [`SimError::Input`] on an unparsable line or premature end of input
/// - [`SimError::Validation`] when the entered descriptors are invalid
/// - [`SimError::Io`] when reading or prompting fails
///
/// # Example
/// ```
/// use std::io::Cursor;
/// use u_cpusched::workload::interactive;
///
/// let input = Cursor::new("1\n0\n5\n2\n");
/// let processes = interactive::read_processes(input, std::io::sink()).unwrap();
/// assert_eq!(processes[0].burst_time, 5);
/// ```
pub fn read_processes<R: BufRead, W: Write>(input: R, output: W) -> Result<Vec<Process>> {
    let mut prompter = Prompter::new(input, output);

    let count: Pid = prompter.ask("Enter number of processes")?;
    let mut processes = Vec::new();
    for pid in 1..=count {
        prompter.say(&format!("--- Input for P{pid} ---"))?;
        let arrival: Ticks = prompter.ask(&format!("Arrival time of P{pid}"))?;
        let burst: Ticks = prompter.ask(&format!("Burst time of P{pid}"))?;
        let priority: i32 = prompter.ask(&format!("Priority of P{pid}"))?;

        processes.push(
            Process::new(pid, burst)
                .with_arrival(arrival)
                .with_priority(priority),
        );
    }

    validate_processes(&processes).map_err(SimError::Validation)?;
    info!(count = processes.len(), "read workload from keyboard");
    Ok(processes)
}

struct Prompter<R, W> {
    input: R,
    output: W,
    line: usize,
    buf: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: 0,
            buf: String::new(),
        }
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn ask<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        self.buf.clear();
        self.line += 1;
        let line = self.line;
        if self.input.read_line(&mut self.buf)? == 0 {
            return Err(SimError::Input {
                line,
                message: format!("input ended while waiting for {prompt:?}"),
            });
        }

        let raw = self.buf.trim();
        raw.parse().map_err(|_| SimError::Input {
            line,
            message: format!("{prompt}: expected an integer, got {raw:?}"),
        })
    }
}
