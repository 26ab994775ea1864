use cmd_help::CmdHelp;
use sphream::{Integer, SpRes, Sphream};

#[derive(Debug, Eq, PartialEq, CmdHelp)]
pub(crate) enum Input {
    /// :of         使用直接字面值作为输入。
    ///             :of <int>[ <int>][...]
    ///                 <int>   整数字面值，至少指定一个。
    ///             例如：
    ///                 :of 1
    ///                 :of 1 2 3
    Of { values: Vec<Integer> },
    /// :range      生成左闭右开区间内的升序整数作为输入。
    ///             :range <from>,<to>
    ///                 <from>  起始值，包含，必选。
    ///                 <to>    结束值，不包含，必选，不能小于<from>。
    ///             例如：
    ///                 :range 0,10     生成：0 1 2 3 4 5 6 7 8 9
    ///                 :range 5,5      无数据生成
    Range { from: Integer, to: Integer },
    /// :repeat     重复字面值作为输入。
    ///             :repeat <value> <count>
    ///                 <value> 需要重复的整数，必选。
    ///                 <count> 需要重复的次数，必须为非负数，必选。
    Repeat { value: Integer, count: Integer },
    /// :gen        从起始值开始按步长无限生成整数作为输入。
    ///             无限输入必须使用`:take`、`:take while`或`:first`终止。
    ///             :gen <start>[,<step>]
    ///                 <start> 起始值，包含，必选。
    ///                 <step>  步长，可选，未指定时取步长为1。
    ///             例如：
    ///                 :gen 0          生成：0 1 2 3 4 5 ...
    ///                 :gen 0,2        生成：0 2 4 6 8 ...
    ///                 :gen 10,-1      生成：10 9 8 7 6 ...
    Gen { start: Integer, step: Integer },
}

impl Input {
    pub(crate) fn new_of(values: Vec<Integer>) -> Input {
        Input::Of { values }
    }
    pub(crate) fn new_range(from: Integer, to: Integer) -> Input {
        Input::Range { from, to }
    }
    pub(crate) fn new_repeat(value: Integer, count: Integer) -> Input {
        Input::Repeat { value, count }
    }
    pub(crate) fn new_gen(start: Integer, step: Integer) -> Input {
        Input::Gen { start, step }
    }

    pub(crate) fn try_into_sphream(self) -> SpRes<Sphream<Integer>> {
        match self {
            Input::Of { values } => Ok(Sphream::of(values)),
            Input::Range { from, to } => Sphream::range(from, to),
            Input::Repeat { value, count } => Sphream::repeat(value, count),
            Input::Gen { start, step } => {
                let mut next = start;
                Ok(Sphream::generate(move || {
                    let current = next;
                    next = next.wrapping_add(step);
                    current
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sphream::SpErr;

    #[test]
    fn test_of() {
        assert_eq!(Input::new_of(vec![3, 1]).try_into_sphream().unwrap().to_array(), Ok(vec![3, 1]));
    }

    #[test]
    fn test_range() {
        assert_eq!(Input::new_range(0, 3).try_into_sphream().unwrap().to_array(), Ok(vec![0, 1, 2]));
        assert!(matches!(Input::new_range(3, 0).try_into_sphream(), Err(SpErr::InvalidArg { .. })));
    }

    #[test]
    fn test_repeat() {
        assert_eq!(Input::new_repeat(7, 2).try_into_sphream().unwrap().to_array(), Ok(vec![7, 7]));
        assert!(matches!(Input::new_repeat(7, -2).try_into_sphream(), Err(SpErr::InvalidArg { .. })));
    }

    #[test]
    fn test_gen() {
        let mut sphream = Input::new_gen(10, -3).try_into_sphream().unwrap();
        assert_eq!(sphream.take(4).unwrap().to_array(), Ok(vec![10, 7, 4, 1]));
    }
}
