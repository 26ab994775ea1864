use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use crate::parse::input::parse_input;
use crate::parse::op::parse_ops;
use crate::parse::output::parse_out;
use nom::combinator::opt;
use nom::Parser;
use nom_language::error::convert_error;
use sphream::{SpErr, SpRes};

mod base_parser;
mod condition;
mod input;
mod op;
mod output;

/// 解析以空格结尾的完整命令行参数。
pub(crate) fn parse(token: &str) -> SpRes<(Input, Vec<Op>, Output)> {
    match (opt(parse_input), parse_ops, parse_out).parse(token) {
        Ok((remaining, (input, ops, output))) => {
            let input = input.ok_or(SpErr::MissingInput)?;
            if remaining.trim().is_empty() {
                Ok((input, ops, output))
            } else {
                Err(SpErr::UnknownArgs { args: remaining.split_whitespace().map(String::from).collect() })
            }
        }
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => Err(SpErr::ParseTokenErr(convert_error(token, err))),
        Err(nom::Err::Incomplete(_)) => Err(SpErr::ParseTokenErr(format!("incomplete arguments: {token}"))),
    }
}
