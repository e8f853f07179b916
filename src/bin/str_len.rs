use clap::Parser;

use jfactorial::{cli::StrLenArgs, config::Config, length_of, logging};

fn main() {
    let args = StrLenArgs::parse();
    // only the log filter matters here
    let config = Config::from_env().unwrap_or_default();
    logging::init(&config.log_filter);
    println!("{}", length_of(&args.text));
}
