//! Evaluates a realized step function over an inclusive range and renders the results.
use std::io;

use log::{debug, info};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::{
    error::{DemoError, DemoResult},
    steps::{StepKind, StepResult},
};

/// A step evaluated over `from..=to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub step: StepKind,
    pub from: i64,
    pub to: i64,
}

impl Run {
    pub fn new(step: StepKind, from: i64, to: i64) -> DemoResult<Self> {
        if from > to {
            return Err(DemoError::EmptyRange { step, from, to });
        }
        Ok(Self { step, from, to })
    }

    /// Runs used when neither the command line nor the configuration names any.
    pub fn defaults() -> Vec<Run> {
        vec![
            Run {
                step: StepKind::Factorial,
                from: 0,
                to: 10,
            },
            Run {
                step: StepKind::Fibonacci,
                from: 1,
                to: 12,
            },
        ]
    }

    pub fn evaluate(&self) -> Vec<(i64, StepResult)> {
        info!("Evaluating `{}` over {}..={}", self.step, self.from, self.to);
        let function = self.step.realize();
        (self.from..=self.to)
            .map(|n| {
                let result = function.call(n);
                debug!("{}({}) -> {:?}", self.step, n, result);
                (n, result)
            })
            .collect()
    }
}

/// Write one line per input: `step(n) = value`, or the step's error.
pub fn render(
    out: &mut impl WriteColor,
    step: StepKind,
    rows: &[(i64, StepResult)],
) -> io::Result<()> {
    for (n, result) in rows {
        write!(out, "{step}({n}) = ")?;
        match result {
            Ok(value) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write!(out, "{value}")?;
            }
            Err(error) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
                write!(out, "error: {error}")?;
            }
        }
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}
