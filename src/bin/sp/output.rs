use cmd_help::CmdHelp;
use sphream::{Integer, SpRes, Sphream};
use std::io::Write;

#[derive(Debug, Eq, PartialEq, CmdHelp)]
pub(crate) enum Output {
    /// :array      逐行输出全部数据到标准输出。
    ///             未指定终结操作时的默认输出。
    Array,
    /// :first      输出第一个数据，没有数据时失败。
    First,
    /// :last       输出最后一个数据，没有数据时失败。
    Last,
    /// :count      输出数据的数量。
    Count,
    /// :empty      输出是否没有任何数据：`true`或`false`。
    Empty,
}

impl Output {
    /// 执行终结操作并输出到标准输出。
    pub(crate) fn handle(self, sphream: Sphream<Integer>) -> SpRes<()> {
        self.write_to(sphream, &mut std::io::stdout().lock())
    }

    fn write_to(self, mut sphream: Sphream<Integer>, writer: &mut impl Write) -> SpRes<()> {
        let res = match self {
            Output::Array => {
                let mut res = Ok(());
                for item in sphream.to_array()? {
                    res = writeln!(writer, "{item}");
                    if res.is_err() {
                        break;
                    }
                }
                res
            }
            Output::First => writeln!(writer, "{}", sphream.first()?),
            Output::Last => writeln!(writer, "{}", sphream.last()?),
            Output::Count => writeln!(writer, "{}", sphream.count()?),
            Output::Empty => writeln!(writer, "{}", sphream.is_empty()?),
        };
        // 标准输出被关闭（例如管道另一端提前退出）时不视为错误
        if let Err(err) = res {
            crate::println_err!("[Output] Write result to stdout error: {err}");
        }
        Ok(())
    }
}
