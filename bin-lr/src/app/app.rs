use log::info;
use clap::{Parser, Subcommand};

use super::cmd::{seq, rec, mul, demo};
use super::utils::*;

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
    /// Evaluate a named sequence.
    Seq(seq::Args),
    /// Evaluate a(n) = c1·a(n-1) + c0·a(n-2).
    Rec2(rec::Args),
    /// Evaluate a(n) = c2·a(n-1) + c1·a(n-2) + c0·a(n-3).
    Rec3(rec::Args),
    /// Multiply two elements of Z[X]/(X² - c1·X - c0) or Z[X]/(X³ - c2·X² - c1·X - c0).
    Mul(mul::Args),
    /// Print every named sequence at one index.
    Demo(demo::Args),
}

impl CliArgs { 
    fn log_level(&self) -> log::LevelFilter { 
        let level = match &self.command { 
            Cmd::Seq(args)  => args.log,
            Cmd::Rec2(args) => args.log,
            Cmd::Rec3(args) => args.log,
            Cmd::Mul(args)  => args.log,
            Cmd::Demo(args) => args.log,
        };
        linrec::util::log::level_from_verbosity(level)
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
        info!("int-type: {}", std::any::type_name::<super::utils::dispatch::Int>());

        let (res, time) = measure(||
            self.dispatch()
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) -> Result<(), Box<dyn std::error::Error>> {
        let l = self.args.log_level();
        if l != log::LevelFilter::Off { 
            linrec::util::log::init_simple_logger(l)?;
        }
        Ok(())
    }

    fn dispatch(&self) -> Result<String, Box<dyn std::error::Error>> { 
        guard_panic(||
            match &self.args.command { 
                Cmd::Seq(args)  => seq::dispatch(args),
                Cmd::Rec2(args) => rec::dispatch2(args),
                Cmd::Rec3(args) => rec::dispatch3(args),
                Cmd::Mul(args)  => mul::dispatch(args),
                Cmd::Demo(args) => demo::dispatch(args),
            }
        )
    }
}
