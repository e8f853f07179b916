use std::fmt::Display;
use std::str::FromStr;

use num_bigint::BigUint;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};

/// Overflow policy used when computing a factorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 32-bit signed arithmetic, `Error::Overflow` past 12!.
    Checked,
    /// 32-bit signed arithmetic with two's-complement wraparound.
    Wrapping,
    /// Arbitrary precision.
    Big,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Checked
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Mode::Checked => "checked",
            Mode::Wrapping => "wrapping",
            Mode::Big => "big",
        })
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "checked" => Ok(Mode::Checked),
            "wrapping" => Ok(Mode::Wrapping),
            "big" => Ok(Mode::Big),
            _ => Err(Error::UnknownMode(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Factorial {
    Small(i32),
    Big(BigUint),
}

impl Display for Factorial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Factorial::Small(v) => write!(f, "{}", v),
            Factorial::Big(v) => write!(f, "{}", v),
        }
    }
}

fn non_negative(n: i32) -> Result<i32> {
    if n < 0 {
        warn!(n, "rejecting negative input");
        return Err(Error::InvalidInput { n });
    }
    Ok(n)
}

/// Computes `n!` in 32-bit signed arithmetic.
///
/// Fails with [`Error::Overflow`] once the product leaves the `i32` range,
/// which happens from `13!` on.
pub fn factorial(n: i32) -> Result<i32> {
    let mut counter = non_negative(n)?;
    let mut acc: i32 = 1;
    loop {
        if counter == 0 {
            return Ok(acc);
        }
        acc = acc.checked_mul(counter).ok_or(Error::Overflow { n })?;
        trace!(counter, acc, "step");
        counter -= 1;
    }
}

/// Computes `n!` in 32-bit signed arithmetic, wrapping on overflow.
///
/// The result matches what a plain `int` loop produces, so `13!` comes out
/// as `1932053504`.
pub fn wrapping_factorial(n: i32) -> Result<i32> {
    let mut counter = non_negative(n)?;
    let mut acc: i32 = 1;
    loop {
        // once every bit has been shifted out the product stays zero
        if counter == 0 || acc == 0 {
            return Ok(acc);
        }
        acc = acc.wrapping_mul(counter);
        trace!(counter, acc, "step");
        counter -= 1;
    }
}

/// Computes `n!` without any upper bound.
pub fn big_factorial(n: u32) -> BigUint {
    let mut counter = n;
    let mut acc = BigUint::from(1_u32);
    loop {
        if counter == 0 {
            return acc;
        }
        acc *= counter;
        trace!(counter, "step");
        counter -= 1;
    }
}

pub fn compute(n: i32, mode: Mode) -> Result<Factorial> {
    debug!(n, %mode, "computing factorial");
    match mode {
        Mode::Checked => factorial(n).map(Factorial::Small),
        Mode::Wrapping => wrapping_factorial(n).map(Factorial::Small),
        Mode::Big => {
            let n = non_negative(n)? as u32;
            Ok(Factorial::Big(big_factorial(n)))
        }
    }
}
