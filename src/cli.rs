use clap::Parser;

use crate::config::Config;
use crate::factorial::Mode;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Prints the factorial of N", long_about = None)]
#[clap(allow_negative_numbers = true)]
pub struct Args {
    /// Non-negative integer; defaults to JFACTORIAL_N or 10
    pub n: Option<i32>,
    /// Overflow policy: checked, wrapping or big
    #[clap(short, long)]
    pub mode: Option<Mode>,
}

impl Args {
    pub fn resolve(&self, config: Config) -> Config {
        config.with_overrides(self.n, self.mode)
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Prints the length of a string", long_about = None)]
pub struct StrLenArgs {
    #[clap(default_value = "Bob")]
    pub text: String,
}
