use nom::bytes::complete::tag_no_case;
use nom::character::complete::{i64 as parse_i64, space1, usize as parse_usize};
use nom::combinator::value;
use nom::error::context;
use nom::{IResult, Parser};
use nom_language::error::VerboseError;
use sphream::Integer;

pub(in crate::parse) type ParserError<'a> = VerboseError<&'a str>;
pub(in crate::parse) type ParserResult<'a, O> = IResult<&'a str, O, ParserError<'a>>;

/// 构造一个解析器，解析命令标记及其后的空白，例如`:take `。
pub(in crate::parse) fn cmd<'a>(name: &'static str) -> impl Parser<&'a str, Output = (), Error = ParserError<'a>> {
    value((), (tag_no_case(name), space1))
}

/// 解析带可选符号的整数。
pub(in crate::parse) fn parse_integer(input: &str) -> ParserResult<'_, Integer> {
    context("Integer", parse_i64).parse(input)
}

/// 解析非负的数量。
pub(in crate::parse) fn parse_count(input: &str) -> ParserResult<'_, usize> {
    context("Count", parse_usize).parse(input)
}
