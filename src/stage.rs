use crate::err::SpErr;
use crate::fuse::Flow;
use crate::SpRes;
use std::fmt::{Debug, Formatter};

pub type MapFn<T> = Box<dyn FnMut(T) -> T>;
pub type Predicate<T> = Box<dyn FnMut(&T) -> bool>;

/// 流水线中的单个操作阶段。
///
/// 每个阶段持有仅在一次遍历中有效的私有状态，并提供三个钩子：
///  - [`Stage::prologue`]：遍历前初始化状态；
///  - [`Stage::handle`]：逐项决策，透传给下游、跳过当前项或停止整个遍历；
///  - [`Stage::epilogue`]：遍历结束后的检查。
pub enum Stage<T> {
    /// 转换数据后透传。
    Map(MapFn<T>),
    /// 满足条件则透传，否则跳过。
    Filter(Predicate<T>),
    /// 透传前`n`个数据，之后停止遍历。
    Take { n: usize, taken: usize },
    /// 跳过前`n`个数据，之后全部透传。
    Drop { n: usize, dropped: usize },
    /// 条件满足时透传，首次不满足时停止遍历。
    TakeWhile(Predicate<T>),
    /// 条件满足时持续跳过，首次不满足后全部透传。
    DropWhile { pred: Predicate<T>, dropping: bool },
    /// 透传第一个数据后停止遍历，没有数据时结束检查失败。
    First { found: bool },
    /// 透传每个数据，没有数据时结束检查失败。
    Last { found: bool },
    /// 遇到第一个数据即停止遍历。
    IsEmpty,
}

impl<T> Stage<T> {
    pub fn new_map(f: impl FnMut(T) -> T + 'static) -> Stage<T> {
        Stage::Map(Box::new(f))
    }
    pub fn new_filter(pred: impl FnMut(&T) -> bool + 'static) -> Stage<T> {
        Stage::Filter(Box::new(pred))
    }
    pub fn new_take(n: usize) -> Stage<T> {
        Stage::Take { n, taken: 0 }
    }
    pub fn new_drop(n: usize) -> Stage<T> {
        Stage::Drop { n, dropped: 0 }
    }
    pub fn new_take_while(pred: impl FnMut(&T) -> bool + 'static) -> Stage<T> {
        Stage::TakeWhile(Box::new(pred))
    }
    pub fn new_drop_while(pred: impl FnMut(&T) -> bool + 'static) -> Stage<T> {
        Stage::DropWhile { pred: Box::new(pred), dropping: true }
    }
    pub fn new_first() -> Stage<T> {
        Stage::First { found: false }
    }
    pub fn new_last() -> Stage<T> {
        Stage::Last { found: false }
    }
    pub fn new_is_empty() -> Stage<T> {
        Stage::IsEmpty
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Map(_) => "map",
            Stage::Filter(_) => "filter",
            Stage::Take { .. } => "take",
            Stage::Drop { .. } => "drop",
            Stage::TakeWhile(_) => "take_while",
            Stage::DropWhile { .. } => "drop_while",
            Stage::First { .. } => "first",
            Stage::Last { .. } => "last",
            Stage::IsEmpty => "is_empty",
        }
    }

    /// 遍历开始前重置本阶段的状态。
    pub fn prologue(&mut self) {
        match self {
            Stage::Take { taken, .. } => *taken = 0,
            Stage::Drop { dropped, .. } => *dropped = 0,
            Stage::DropWhile { dropping, .. } => *dropping = true,
            Stage::First { found } | Stage::Last { found } => *found = false,
            Stage::Map(_) | Stage::Filter(_) | Stage::TakeWhile(_) | Stage::IsEmpty => {}
        }
    }

    /// 处理单个数据，`next`是已经融合好的下游处理链。
    ///
    /// 跳过时不调用`next`并返回`Continue`；透传时原样返回下游的结果，
    /// 因此下游任意位置产生的`Break`都会不经拦截地回到遍历循环。
    pub fn handle(&mut self, item: T, next: impl FnOnce(T) -> Flow) -> Flow {
        match self {
            Stage::Map(f) => next(f(item)),
            Stage::Filter(pred) => {
                if pred(&item) {
                    next(item)
                } else {
                    Flow::Continue(())
                }
            }
            Stage::Take { n, taken } => {
                if *taken < *n {
                    *taken += 1;
                    let flow = next(item);
                    // 第n个数据透传后立即停止，不再多拉取一个数据
                    if *taken == *n {
                        trace!("take({}) reached its limit, stop", n);
                        Flow::Break(())
                    } else {
                        flow
                    }
                } else {
                    trace!("take({}) stops on the first item", n);
                    Flow::Break(())
                }
            }
            Stage::Drop { n, dropped } => {
                if *dropped < *n {
                    *dropped += 1;
                    Flow::Continue(())
                } else {
                    next(item)
                }
            }
            Stage::TakeWhile(pred) => {
                if pred(&item) {
                    next(item)
                } else {
                    trace!("take_while predicate failed, stop");
                    Flow::Break(())
                }
            }
            Stage::DropWhile { pred, dropping } => {
                if *dropping && pred(&item) {
                    Flow::Continue(())
                } else {
                    *dropping = false;
                    next(item)
                }
            }
            Stage::First { found } => {
                let _ = next(item);
                *found = true;
                Flow::Break(())
            }
            Stage::Last { found } => {
                let flow = next(item);
                *found = true;
                flow
            }
            Stage::IsEmpty => {
                let _ = next(item);
                Flow::Break(())
            }
        }
    }

    /// 遍历结束后的检查，仅`First`和`Last`在未获取到数据时失败。
    pub fn epilogue(&self) -> SpRes<()> {
        match self {
            Stage::First { found: false } | Stage::Last { found: false } => Err(SpErr::EmptySphream),
            _ => Ok(()),
        }
    }
}

impl<T> Debug for Stage<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Take { n, .. } | Stage::Drop { n, .. } => write!(f, "{}({})", self.name(), n),
            Stage::Map(_) | Stage::Filter(_) | Stage::TakeWhile(_) | Stage::DropWhile { .. } => {
                write!(f, "{}(..)", self.name())
            }
            Stage::First { .. } | Stage::Last { .. } | Stage::IsEmpty => write!(f, "{}", self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 依次处理`items`，记录透传到下游的数据，遇到停止信号即结束。
    fn drive(stage: &mut Stage<i32>, items: &[i32]) -> (Vec<i32>, bool) {
        stage.prologue();
        let mut passed = vec![];
        for item in items {
            let flow = stage.handle(*item, |x| {
                passed.push(x);
                Flow::Continue(())
            });
            if flow.is_break() {
                return (passed, true);
            }
        }
        (passed, false)
    }

    #[test]
    fn test_map() {
        assert_eq!(drive(&mut Stage::new_map(|x: i32| x * 10), &[1, 2]), (vec![10, 20], false));
    }

    #[test]
    fn test_filter_skips_without_stopping() {
        assert_eq!(drive(&mut Stage::new_filter(|x: &i32| *x > 1), &[1, 2, 0, 3]), (vec![2, 3], false));
    }

    #[test]
    fn test_take() {
        assert_eq!(drive(&mut Stage::new_take(2), &[1, 2, 3]), (vec![1, 2], true));
        assert_eq!(drive(&mut Stage::new_take(0), &[1, 2, 3]), (vec![], true));
        assert_eq!(drive(&mut Stage::new_take(5), &[1, 2, 3]), (vec![1, 2, 3], false));
    }

    #[test]
    fn test_take_stops_right_after_limit() {
        let mut stage = Stage::new_take(1);
        stage.prologue();
        assert!(stage.handle(1, |_| Flow::Continue(())).is_break());
    }

    #[test]
    fn test_drop() {
        assert_eq!(drive(&mut Stage::new_drop(2), &[1, 2, 3, 4]), (vec![3, 4], false));
        assert_eq!(drive(&mut Stage::new_drop(0), &[1]), (vec![1], false));
        assert_eq!(drive(&mut Stage::new_drop(9), &[1, 2]), (vec![], false));
    }

    #[test]
    fn test_take_while() {
        assert_eq!(drive(&mut Stage::new_take_while(|x: &i32| *x < 3), &[1, 2, 3, 1]), (vec![1, 2], true));
    }

    #[test]
    fn test_drop_while_only_drops_prefix() {
        assert_eq!(drive(&mut Stage::new_drop_while(|x: &i32| *x < 3), &[1, 2, 3, 1]), (vec![3, 1], false));
    }

    #[test]
    fn test_first_and_last() {
        let mut first = Stage::new_first();
        assert_eq!(drive(&mut first, &[4, 5]), (vec![4], true));
        assert_eq!(first.epilogue(), Ok(()));
        assert_eq!(drive(&mut first, &[]), (vec![], false));
        assert_eq!(first.epilogue(), Err(SpErr::EmptySphream));

        let mut last = Stage::new_last();
        assert_eq!(drive(&mut last, &[4, 5]), (vec![4, 5], false));
        assert_eq!(last.epilogue(), Ok(()));
        assert_eq!(drive(&mut last, &[]), (vec![], false));
        assert_eq!(last.epilogue(), Err(SpErr::EmptySphream));
    }

    #[test]
    fn test_is_empty() {
        assert_eq!(drive(&mut Stage::new_is_empty(), &[7, 8]), (vec![7], true));
        assert_eq!(drive(&mut Stage::new_is_empty(), &[]), (vec![], false));
    }

    #[test]
    fn test_prologue_resets_state() {
        let mut stage = Stage::new_take(1);
        assert_eq!(drive(&mut stage, &[1, 2]), (vec![1], true));
        assert_eq!(drive(&mut stage, &[3, 4]), (vec![3], true));

        let mut stage = Stage::new_drop_while(|x: &i32| *x == 0);
        assert_eq!(drive(&mut stage, &[0, 1, 0]), (vec![1, 0], false));
        assert_eq!(drive(&mut stage, &[0, 2]), (vec![2], false));
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Stage::<i32>::new_take(3)), "take(3)");
        assert_eq!(format!("{:?}", Stage::<i32>::new_filter(|_| true)), "filter(..)");
        assert_eq!(format!("{:?}", Stage::<i32>::new_last()), "last");
    }
}
