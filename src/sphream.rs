use crate::err::SpErr;
use crate::fuse;
use crate::source::Source;
use crate::stage::Stage;
use crate::{Integer, SpRes};
use itertools::Itertools;
use std::fmt::{Debug, Formatter};

/// 只能消费一次的惰性流水线。
///
/// 中间操作只向流水线追加阶段，不会触碰数据源；终结操作先关闭流水线，再融合全部阶段，
/// 对数据源执行唯一一次遍历。关闭后的任何操作都返回[`SpErr::ClosedSphream`]。
///
/// ```
/// use sphream::Sphream;
///
/// let evens = Sphream::of(vec![1, 2, 3, 4]).filter(|x| x % 2 == 0)?.take(1)?.to_array()?;
/// assert_eq!(evens, vec![2]);
/// # Ok::<(), sphream::SpErr>(())
/// ```
pub struct Sphream<T> {
    source: Source<T>,
    stages: Vec<Stage<T>>,
    closed: bool,
}

impl<T> Debug for Sphream<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sphream").field("stages", &self.stages).field("closed", &self.closed).finish()
    }
}

impl<T: 'static> Sphream<T> {
    pub fn from_source(source: Source<T>) -> Sphream<T> {
        Sphream { source, stages: Vec::new(), closed: false }
    }

    /// 包装已有的有限序列或任意迭代器。
    pub fn of<I>(values: I) -> Sphream<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::from_source(Source::of(values))
    }

    /// 空流水线，等价于`of`一个空序列。
    pub fn mempty() -> Sphream<T> {
        Self::from_source(Source::empty())
    }

    pub fn from_fn(pull: impl FnMut() -> Option<T> + 'static) -> Sphream<T> {
        Self::from_source(Source::from_fn(pull))
    }

    /// 无限流水线，必须由`take`、`take_while`或`first`保证终止。
    pub fn generate(supplier: impl FnMut() -> T + 'static) -> Sphream<T> {
        Self::from_source(Source::generate(supplier))
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// 手动关闭，此后的任何操作都会失败。
    pub fn close(&mut self) -> &mut Self {
        self.closed = true;
        self
    }

    /// 当前流水线中各阶段的名称，按追加顺序。
    pub fn stages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(Stage::name)
    }

    /// 流水线的文字描述，例如`filter(..) -> take(3)`。
    pub fn describe(&self) -> String {
        self.stages.iter().map(|stage| format!("{stage:?}")).join(" -> ")
    }

    /* **************************************** 中间操作 **************************************** */

    pub fn filter(&mut self, pred: impl FnMut(&T) -> bool + 'static) -> SpRes<&mut Self> {
        self.push(Stage::new_filter(pred))
    }

    pub fn map(&mut self, f: impl FnMut(T) -> T + 'static) -> SpRes<&mut Self> {
        self.push(Stage::new_map(f))
    }

    pub fn take(&mut self, n: usize) -> SpRes<&mut Self> {
        self.push(Stage::new_take(n))
    }

    pub fn drop(&mut self, n: usize) -> SpRes<&mut Self> {
        self.push(Stage::new_drop(n))
    }

    pub fn take_while(&mut self, pred: impl FnMut(&T) -> bool + 'static) -> SpRes<&mut Self> {
        self.push(Stage::new_take_while(pred))
    }

    pub fn drop_while(&mut self, pred: impl FnMut(&T) -> bool + 'static) -> SpRes<&mut Self> {
        self.push(Stage::new_drop_while(pred))
    }

    /* **************************************** 终结操作 **************************************** */

    pub fn is_empty(&mut self) -> SpRes<bool> {
        self.terminate("is_empty", Some(Stage::new_is_empty()))?;
        let mut empty = true;
        fuse::run(&mut self.source, &mut self.stages, |_| empty = false)?;
        Ok(empty)
    }

    pub fn first(&mut self) -> SpRes<T> {
        self.terminate("first", Some(Stage::new_first()))?;
        let mut value = None;
        fuse::run(&mut self.source, &mut self.stages, |item| value = Some(item))?;
        value.ok_or(SpErr::EmptySphream)
    }

    pub fn last(&mut self) -> SpRes<T> {
        self.terminate("last", Some(Stage::new_last()))?;
        let mut value = None;
        fuse::run(&mut self.source, &mut self.stages, |item| value = Some(item))?;
        value.ok_or(SpErr::EmptySphream)
    }

    pub fn count(&mut self) -> SpRes<usize> {
        self.terminate("count", None)?;
        let mut total = 0;
        fuse::run(&mut self.source, &mut self.stages, |_| total += 1)?;
        Ok(total)
    }

    pub fn to_array(&mut self) -> SpRes<Vec<T>> {
        self.terminate("to_array", None)?;
        let mut array = Vec::new();
        fuse::run(&mut self.source, &mut self.stages, |item| array.push(item))?;
        Ok(array)
    }

    fn ensure_open(&self) -> SpRes<()> {
        if self.closed { Err(SpErr::ClosedSphream) } else { Ok(()) }
    }

    fn push(&mut self, stage: Stage<T>) -> SpRes<&mut Self> {
        self.ensure_open()?;
        debug!("append stage `{}` at position {}", stage.name(), self.stages.len());
        self.stages.push(stage);
        Ok(self)
    }

    /// 终结操作的公共前置：检查并关闭，必要时追加终结阶段，之后才开始遍历。
    fn terminate(&mut self, name: &'static str, stage: Option<Stage<T>>) -> SpRes<()> {
        self.ensure_open()?;
        self.closed = true;
        self.stages.extend(stage);
        debug!("terminal `{}` over {} stage(s): {}", name, self.stages.len(), self.describe());
        Ok(())
    }
}

impl<T: Clone + 'static> Sphream<T> {
    /// 将`value`重复`n`次，`n`为负数时失败。
    pub fn repeat(value: T, n: Integer) -> SpRes<Sphream<T>> {
        Source::repeat(value, n).map(Self::from_source)
    }
}

impl Sphream<Integer> {
    /// 左闭右开的升序整数区间`[from, to)`，`from > to`时失败。
    pub fn range(from: Integer, to: Integer) -> SpRes<Sphream<Integer>> {
        Source::range(from, to).map(Self::from_source)
    }
}
