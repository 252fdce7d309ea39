use log::info;
use clap::{Parser, Subcommand};

use super::cmd::{code, inv, pd};
use super::utils::*;
use super::err::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="lower")]
pub enum Cmd {
    /// Convert between braid words, Gauss, DT and PD codes.
    Code(code::Args),
    /// Compute Seifert-matrix invariants.
    Inv(inv::Args),
    /// PD code of a braid word or of an oriented Gauss code.
    Pd(pd::Args),
}

impl CliArgs {
    fn log_level(&self) -> log::LevelFilter {
        use log::LevelFilter::*;
        let level = match &self.command {
            Cmd::Code(args) => args.log,
            Cmd::Inv(args)  => args.log,
            Cmd::Pd(args)   => args.log,
        };
        match level {
            1 => Info,
            2 => Debug,
            3 => Trace,
            _ => Off,
        }
    }
}

pub struct App {
    pub args: CliArgs
}

impl App {
    pub fn new() -> Self {
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> {
        self.init_logger()?;

        info!("args: {:?}", self.args);

        let (res, time) = measure(||
            self.dispatch()
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) -> Result<(), Box<dyn std::error::Error>> {
        let l = self.args.log_level();
        kinv::util::log::init_simple_logger(l).or_else(|e|
            err!("failed to initialize logger: {e}")
        )
    }

    fn dispatch(&self) -> Result<String, Box<dyn std::error::Error>> {
        guard_panic(||
            match &self.args.command {
                Cmd::Code(args) => code::dispatch(args),
                Cmd::Inv(args)  => inv::dispatch(args),
                Cmd::Pd(args)   => pd::dispatch(args),
            }
        )
    }
}
