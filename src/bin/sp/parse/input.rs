use crate::input::Input;
use crate::parse::base_parser::{ParserResult, cmd, parse_integer};
use nom::branch::alt;
use nom::character::complete::{char, space1};
use nom::combinator::{cut, map, opt};
use nom::error::context;
use nom::multi::many1;
use nom::sequence::{preceded, separated_pair, terminated};
use nom::Parser;

pub(in crate::parse) fn parse_input(input: &str) -> ParserResult<'_, Input> {
    context("Input", alt((parse_of, parse_range, parse_repeat, parse_gen))).parse(input)
}

fn parse_of(input: &str) -> ParserResult<'_, Input> {
    context(
        "Input::Of",
        map(
            preceded(
                cmd(":of"),                                           // 丢弃命令
                cut(many1(terminated(parse_integer, space1))), // 至少一个整数
            ),
            Input::new_of,
        ),
    )
    .parse(input)
}

fn parse_range(input: &str) -> ParserResult<'_, Input> {
    context(
        "Input::Range",
        map(
            preceded(
                cmd(":range"),
                cut(terminated(separated_pair(parse_integer, char(','), parse_integer), space1)),
            ),
            |(from, to)| Input::new_range(from, to),
        ),
    )
    .parse(input)
}

fn parse_repeat(input: &str) -> ParserResult<'_, Input> {
    context(
        "Input::Repeat",
        map(
            preceded(
                cmd(":repeat"),
                cut(terminated(separated_pair(parse_integer, space1, parse_integer), space1)),
            ),
            |(value, count)| Input::new_repeat(value, count),
        ),
    )
    .parse(input)
}

fn parse_gen(input: &str) -> ParserResult<'_, Input> {
    context(
        "Input::Gen",
        map(
            preceded(
                cmd(":gen"),
                cut(terminated((parse_integer, opt(preceded(char(','), parse_integer))), space1)),
            ),
            |(start, step)| Input::new_gen(start, step.unwrap_or(1)),
        ),
    )
    .parse(input)
}
