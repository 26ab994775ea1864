use crate::config::Config;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use itertools::Itertools;
use sphream::SpRes;

mod condition;
mod config;
mod input;
mod op;
mod output;
mod parse;
mod print;

fn main() {
    if let Err(e) = run() {
        e.termination();
    }
}

fn run() -> SpRes<()> {
    let mut args = std::env::args().skip(1).peekable();
    let configs = config::parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        print::print_help();
        return Ok(());
    }
    if configs.contains(&Config::Version) {
        println!("sp {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // 所有参数以空格连接，并以空格结尾
    let mut token = args.join(" ");
    token.push(' ');
    let (input, ops, output) = parse::parse(&token)?;
    if configs.contains(&Config::Verbose) {
        print_pipeline(&input, &ops, &output);
    }
    if configs.contains(&Config::DryRun) {
        return Ok(());
    }

    let mut sphream = input.try_into_sphream()?;
    for op in ops {
        op.wrap(&mut sphream)?;
    }
    output.handle(sphream)
}

fn print_pipeline(input: &Input, ops: &[Op], output: &Output) {
    println_info!("Input:");
    println!("    {:?}", input);
    println_info!("Op:");
    if !ops.is_empty() {
        println!("{}", ops.iter().map(|op| format!("    {:?}", op)).join("\n"));
    }
    println_info!("Output:");
    println!("    {:?}", output);
}
