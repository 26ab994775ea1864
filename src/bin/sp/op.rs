use crate::condition::Condition;
use cmd_help::CmdHelp;
use sphream::{Integer, SpRes, Sphream};

#[derive(Debug, Eq, PartialEq, CmdHelp)]
pub(crate) enum Op {
    /* **************************************** 转换 **************************************** */
    /// :map        对每个整数做算术运算，溢出时回绕。
    ///             :map <op><operand>
    ///                 <op>        运算符，`+`、`-`、`*`、`/`、`%`之一，必选。
    ///                 <operand>   整数操作数，必选，除法和取余时不能为0。
    ///             例如：
    ///                 :map +1
    ///                 :map *-2
    ///                 :map %3
    Map(Arith),
    /* **************************************** 减少 **************************************** */
    /// :filter     根据指定条件选择数据保留，其他数据丢弃。
    ///             :filter <condition>
    ///                 <condition> 条件表达式，参考`-h`中的条件部分。
    Filter(Condition),
    /// :take       保留前N个数据，之后立即结束遍历。
    ///             :take <count>
    ///                 <count> 需要保留的数量，必须为非负整数，必选。
    Take(usize),
    /// :drop       丢弃前N个数据，保留后续的其他数据。
    ///             :drop <count>
    ///                 <count> 需要丢弃的数量，必须为非负整数，必选。
    Drop(usize),
    /// :take while 根据指定条件选择数据持续保留，条件首次不满足时结束遍历。
    ///             :take while <condition>
    ///                 <condition> 条件表达式，参考`-h`中的条件部分。
    TakeWhile(Condition),
    /// :drop while 根据指定条件选择数据持续丢弃，直到条件首次不满足。
    ///             :drop while <condition>
    ///                 <condition> 条件表达式，参考`-h`中的条件部分。
    DropWhile(Condition),
}

impl Op {
    pub(crate) fn wrap(self, sphream: &mut Sphream<Integer>) -> SpRes<()> {
        match self {
            Op::Map(arith) => sphream.map(move |item| arith.apply(item))?,
            Op::Filter(cond) => sphream.filter(move |item| cond.test(item))?,
            Op::Take(n) => sphream.take(n)?,
            Op::Drop(n) => sphream.drop(n)?,
            Op::TakeWhile(cond) => sphream.take_while(move |item| cond.test(item))?,
            Op::DropWhile(cond) => sphream.drop_while(move |item| cond.test(item))?,
        };
        Ok(())
    }
}

/// 算术运算，全部使用回绕语义，不会因溢出而崩溃。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Arith {
    Add(Integer),
    Sub(Integer),
    Mul(Integer),
    /// 除数不为0，由解析阶段保证。
    Div(Integer),
    /// 除数不为0，由解析阶段保证。
    Rem(Integer),
}

impl Arith {
    pub(crate) fn new(op: char, operand: Integer) -> Option<Arith> {
        match op {
            '+' => Some(Arith::Add(operand)),
            '-' => Some(Arith::Sub(operand)),
            '*' => Some(Arith::Mul(operand)),
            '/' if operand != 0 => Some(Arith::Div(operand)),
            '%' if operand != 0 => Some(Arith::Rem(operand)),
            _ => None,
        }
    }

    pub(crate) fn apply(&self, x: Integer) -> Integer {
        match *self {
            Arith::Add(v) => x.wrapping_add(v),
            Arith::Sub(v) => x.wrapping_sub(v),
            Arith::Mul(v) => x.wrapping_mul(v),
            Arith::Div(v) => x.wrapping_div(v),
            Arith::Rem(v) => x.wrapping_rem(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Select;
    use sphream::SpErr;

    fn run(values: Vec<Integer>, ops: Vec<Op>) -> SpRes<Vec<Integer>> {
        let mut sphream = Sphream::of(values);
        for op in ops {
            op.wrap(&mut sphream)?;
        }
        sphream.to_array()
    }

    #[test]
    fn test_arith() {
        assert_eq!(Arith::new('+', 2).map(|a| a.apply(3)), Some(5));
        assert_eq!(Arith::new('-', 2).map(|a| a.apply(3)), Some(1));
        assert_eq!(Arith::new('*', -2).map(|a| a.apply(3)), Some(-6));
        assert_eq!(Arith::new('/', 2).map(|a| a.apply(7)), Some(3));
        assert_eq!(Arith::new('%', 4).map(|a| a.apply(7)), Some(3));
        assert_eq!(Arith::new('/', 0), None);
        assert_eq!(Arith::new('%', 0), None);
        assert_eq!(Arith::new('^', 1), None);
        assert_eq!(Arith::Add(1).apply(Integer::MAX), Integer::MIN);
        assert_eq!(Arith::Div(-1).apply(Integer::MIN), Integer::MIN);
    }

    #[test]
    fn test_wrap() {
        let even = || Condition::new(Select::new_parity(true), false);
        assert_eq!(run(vec![1, 2, 3, 4], vec![Op::Filter(even()), Op::Map(Arith::Mul(10))]), Ok(vec![20, 40]));
        assert_eq!(run(vec![1, 2, 3, 4], vec![Op::Drop(1), Op::Take(2)]), Ok(vec![2, 3]));
        assert_eq!(run(vec![2, 4, 5, 6], vec![Op::TakeWhile(even())]), Ok(vec![2, 4]));
        assert_eq!(run(vec![2, 4, 5, 6], vec![Op::DropWhile(even())]), Ok(vec![5, 6]));
    }

    #[test]
    fn test_wrap_on_closed_sphream() {
        let mut sphream = Sphream::of(vec![1]);
        sphream.close();
        assert_eq!(Op::Take(1).wrap(&mut sphream), Err(SpErr::ClosedSphream));
    }
}
