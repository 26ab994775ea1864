//! 操作融合：把有序的阶段列表编译为一个逐项处理函数，再驱动数据源完成唯一一次遍历。
//!
//! 融合是一次右折叠：从终结消费者开始，由后向前把每个阶段包裹在已经组合好的下游处理链之外。
//! 所得的处理函数对每个数据只调用一次，各阶段的状态保存在阶段自身之中。

use crate::SpRes;
use crate::source::Source;
use crate::stage::Stage;
use std::ops::ControlFlow;

/// 逐项处理的结果：`Continue`表示继续拉取下一个数据（无论当前数据被透传还是被跳过），
/// `Break`表示停止整个遍历。
pub type Flow = ControlFlow<()>;

/// 融合后的逐项处理函数。
pub type Handler<'a, T> = Box<dyn FnMut(T) -> Flow + 'a>;

/// 一次遍历的统计信息。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Traversal {
    /// 从数据源拉取的数据个数。
    pub pulled: usize,
    /// 是否因停止信号提前结束，`false`表示数据源已耗尽。
    pub stopped: bool,
}

/// 将`stages`与终结消费者`terminal`融合为单个处理函数。
pub fn fuse<'a, T: 'a>(stages: &'a mut [Stage<T>], mut terminal: impl FnMut(T) + 'a) -> Handler<'a, T> {
    let body: Handler<'a, T> = Box::new(move |item| {
        terminal(item);
        Flow::Continue(())
    });
    stages.iter_mut().rev().fold(body, |mut inner, stage| -> Handler<'a, T> {
        Box::new(move |item| stage.handle(item, &mut inner))
    })
}

/// 执行序言、拉取循环和尾声。
///
/// 数据源耗尽是正常结束；任意阶段返回`Break`时立即结束循环，不再拉取数据。
/// 尾声按流水线顺序执行，第一个失败的检查作为结果返回。
pub fn run<T>(source: &mut Source<T>, stages: &mut [Stage<T>], terminal: impl FnMut(T)) -> SpRes<Traversal> {
    stages.iter_mut().for_each(Stage::prologue);
    let mut traversal = Traversal::default();
    {
        let mut body = fuse(stages, terminal);
        while let Some(item) = source.pull() {
            traversal.pulled += 1;
            if body(item).is_break() {
                traversal.stopped = true;
                break;
            }
        }
    }
    debug!("traversal finished, pulled: {}, stopped: {}", traversal.pulled, traversal.stopped);
    stages.iter().try_for_each(Stage::epilogue)?;
    Ok(traversal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err::SpErr;

    fn run_to_vec(values: Vec<i32>, stages: &mut [Stage<i32>]) -> (Vec<i32>, Traversal) {
        let mut out = vec![];
        let traversal = run(&mut Source::of(values), stages, |item| out.push(item)).unwrap();
        (out, traversal)
    }

    #[test]
    fn test_empty_pipeline_passes_everything() {
        let (out, traversal) = run_to_vec(vec![1, 2, 3], &mut []);
        assert_eq!(out, vec![1, 2, 3]);
        assert_eq!(traversal, Traversal { pulled: 3, stopped: false });
    }

    #[test]
    fn test_stages_apply_in_pipeline_order() {
        let mut stages = [Stage::new_filter(|x: &i32| x % 2 == 0), Stage::new_take(1)];
        assert_eq!(run_to_vec(vec![1, 2, 3, 4], &mut stages).0, vec![2]);

        let mut stages = [Stage::new_take(1), Stage::new_filter(|x: &i32| x % 2 == 0)];
        assert_eq!(run_to_vec(vec![1, 2, 3, 4], &mut stages).0, vec![]);
    }

    #[test]
    fn test_stop_unwinds_through_skipping_stages() {
        // take在最内层产生的停止信号必须穿过drop和filter直接结束循环
        let mut stages = [Stage::new_drop(1), Stage::new_filter(|x: &i32| *x > 0), Stage::new_take(2)];
        let (out, traversal) = run_to_vec(vec![1, 2, -3, 4, 5, 6], &mut stages);
        assert_eq!(out, vec![2, 4]);
        assert_eq!(traversal, Traversal { pulled: 4, stopped: true });
    }

    #[test]
    fn test_stop_over_unbounded_source() {
        let mut stages = [Stage::new_map(|x: i32| x * 2), Stage::new_take_while(|x: &i32| *x < 10)];
        let mut next = 0;
        let mut source = Source::generate(move || {
            next += 1;
            next
        });
        let mut out = vec![];
        let traversal = run(&mut source, &mut stages, |item| out.push(item)).unwrap();
        assert_eq!(out, vec![2, 4, 6, 8]);
        assert_eq!(traversal, Traversal { pulled: 5, stopped: true });
        // 数据源停在停止处，后续数据仍未被拉取
        assert_eq!(source.pull(), Some(6));
    }

    #[test]
    fn test_epilogue_failure() {
        let mut stages = [Stage::new_filter(|_: &i32| false), Stage::new_last()];
        let res = run(&mut Source::of(vec![1, 2]), &mut stages, |_| {});
        assert_eq!(res, Err(SpErr::EmptySphream));
    }

    #[test]
    fn test_prologue_runs_before_each_traversal() {
        let mut stages = [Stage::new_drop(1)];
        assert_eq!(run_to_vec(vec![1, 2], &mut stages).0, vec![2]);
        assert_eq!(run_to_vec(vec![3, 4], &mut stages).0, vec![4]);
    }
}
