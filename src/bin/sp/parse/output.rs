use crate::output::Output;
use crate::parse::base_parser::{ParserResult, cmd};
use nom::branch::alt;
use nom::combinator::{map, success};
use nom::error::context;
use nom::Parser;

pub(in crate::parse) fn parse_out(input: &str) -> ParserResult<'_, Output> {
    context(
        "Output",
        alt((
            map(cmd(":array"), |_| Output::Array),
            map(cmd(":first"), |_| Output::First),
            map(cmd(":last"), |_| Output::Last),
            map(cmd(":count"), |_| Output::Count),
            map(cmd(":empty"), |_| Output::Empty),
            map(success(()), |_| Output::Array), // 默认输出全部数据
        )),
    )
    .parse(input)
}
