use crate::condition::{Condition, Select};
use crate::parse::base_parser::{ParserResult, parse_integer};
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, space1};
use nom::combinator::{map, map_opt, opt, value};
use nom::error::context;
use nom::sequence::{preceded, separated_pair};
use nom::Parser;

/// 解析条件，不包含结尾空格。
pub(in crate::parse) fn parse_cond(input: &str) -> ParserResult<'_, Condition> {
    context(
        "Condition",
        map(
            (
                context("Condition::[!]", opt(char('!'))), // 可选否定
                parse_select,
            ),
            |(not, select)| Condition::new(select, not.is_some()),
        ),
    )
    .parse(input)
}

fn parse_select(input: &str) -> ParserResult<'_, Select> {
    alt((
        context("Select::Even", value(Select::new_parity(true), tag_no_case("even"))),
        context("Select::Odd", value(Select::new_parity(false), tag_no_case("odd"))),
        context(
            "Select::NumSpec",
            map(preceded((tag_no_case("num"), space1, char('=')), parse_integer), Select::new_num_spec),
        ),
        context(
            "Select::NumRange",
            preceded(
                (tag_no_case("num"), space1),
                map_opt(
                    separated_pair(opt(parse_integer), char(','), opt(parse_integer)),
                    |(min, max)| (min.is_some() || max.is_some()).then(|| Select::new_num_range(min, max)),
                ),
            ),
        ),
    ))
    .parse(input)
}
