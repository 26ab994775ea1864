use crate::err::SpErr;
use crate::{Integer, SpRes};
use std::fmt::{Debug, Formatter};

/// 数据源：只能单向拉取一次的数据生产者，可能无限。
pub struct Source<T> {
    iter: Box<dyn Iterator<Item = T>>,
}

impl<T> Iterator for Source<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

impl<T> Debug for Source<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Source").finish_non_exhaustive()
    }
}

impl<T> Source<T> {
    /// 拉取下一个数据，`None`表示数据源已耗尽。
    #[inline]
    pub fn pull(&mut self) -> Option<T> {
        self.iter.next()
    }
}

impl<T: 'static> Source<T> {
    /// 包装已有的有限序列或任意迭代器。
    pub fn of<I>(values: I) -> Source<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Source { iter: Box::new(values.into_iter()) }
    }

    pub fn empty() -> Source<T> {
        Source { iter: Box::new(std::iter::empty()) }
    }

    /// 以拉取函数作为数据源，返回`None`表示数据耗尽。
    pub fn from_fn(pull: impl FnMut() -> Option<T> + 'static) -> Source<T> {
        Source { iter: Box::new(std::iter::from_fn(pull)) }
    }

    /// 无限数据源，每次拉取都调用一次`supplier`。
    pub fn generate(mut supplier: impl FnMut() -> T + 'static) -> Source<T> {
        Source { iter: Box::new(std::iter::from_fn(move || Some(supplier()))) }
    }
}

impl<T: Clone + 'static> Source<T> {
    /// 将`value`重复`n`次，`n`不能为负数。
    pub fn repeat(value: T, n: Integer) -> SpRes<Source<T>> {
        match usize::try_from(n) {
            Ok(count) => Ok(Source { iter: Box::new(itertools::repeat_n(value, count)) }),
            Err(_) => Err(SpErr::InvalidArg {
                cmd: "repeat",
                arg: "n",
                reason: format!("amount to repeat cannot be negative, got {n}"),
            }),
        }
    }
}

impl Source<Integer> {
    /// 左闭右开的升序整数区间`[from, to)`，要求`from <= to`。
    pub fn range(from: Integer, to: Integer) -> SpRes<Source<Integer>> {
        if from > to {
            Err(SpErr::InvalidArg {
                cmd: "range",
                arg: "from",
                reason: format!("`from` must not be greater than `to`, got {from} > {to}"),
            })
        } else {
            Ok(Source { iter: Box::new(from..to) })
        }
    }
}
