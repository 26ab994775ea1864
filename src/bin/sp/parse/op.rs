use crate::op::{Arith, Op};
use crate::parse::base_parser::{ParserResult, cmd, parse_count, parse_integer};
use crate::parse::condition::parse_cond;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{one_of, space1};
use nom::combinator::{cut, map, map_opt};
use nom::error::context;
use nom::multi::many0;
use nom::sequence::{preceded, terminated};
use nom::Parser;

pub(in crate::parse) type OpsResult<'a> = ParserResult<'a, Vec<Op>>;
pub(in crate::parse) type OpResult<'a> = ParserResult<'a, Op>;

pub(in crate::parse) fn parse_ops(input: &str) -> OpsResult<'_> {
    context(
        "Op",
        many0(alt((parse_map, parse_filter, parse_take_while, parse_drop_while, parse_take, parse_drop))),
    )
    .parse(input)
}

fn parse_map(input: &str) -> OpResult<'_> {
    context(
        "Op::Map",
        map(
            preceded(
                cmd(":map"),
                cut(terminated(
                    map_opt((one_of("+-*/%"), parse_integer), |(op, operand)| Arith::new(op, operand)),
                    space1,
                )),
            ),
            Op::Map,
        ),
    )
    .parse(input)
}

fn parse_filter(input: &str) -> OpResult<'_> {
    context("Op::Filter", map(preceded(cmd(":filter"), cut(terminated(parse_cond, space1))), Op::Filter))
        .parse(input)
}

fn parse_take_while(input: &str) -> OpResult<'_> {
    context(
        "Op::TakeWhile",
        map(
            preceded(
                (tag_no_case(":take"), space1, tag_no_case("while"), space1),
                cut(terminated(parse_cond, space1)),
            ),
            Op::TakeWhile,
        ),
    )
    .parse(input)
}

fn parse_drop_while(input: &str) -> OpResult<'_> {
    context(
        "Op::DropWhile",
        map(
            preceded(
                (tag_no_case(":drop"), space1, tag_no_case("while"), space1),
                cut(terminated(parse_cond, space1)),
            ),
            Op::DropWhile,
        ),
    )
    .parse(input)
}

fn parse_take(input: &str) -> OpResult<'_> {
    context("Op::Take", map(preceded(cmd(":take"), cut(terminated(parse_count, space1))), Op::Take)).parse(input)
}

fn parse_drop(input: &str) -> OpResult<'_> {
    context("Op::Drop", map(preceded(cmd(":drop"), cut(terminated(parse_count, space1))), Op::Drop)).parse(input)
}
