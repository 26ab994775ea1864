//! 惰性序列流水线：在一个只能消费一次的数据源上串联`map`、`filter`、`take`、`drop`、
//! `take_while`、`drop_while`等操作，最后由一个终结操作（`first`、`last`、`count`、
//! `to_array`、`is_empty`）触发唯一一次遍历。
//!
//! 所有操作在终结时被融合为一个逐项处理函数，整个流水线只遍历数据源一次，
//! 任意阶段都可以通过停止信号提前结束遍历，因此可以安全地处理无限数据源：
//!
//! ```
//! use sphream::Sphream;
//!
//! let res = Sphream::generate(|| 7).take(3)?.to_array()?;
//! assert_eq!(res, vec![7, 7, 7]);
//! # Ok::<(), sphream::SpErr>(())
//! ```

#[macro_use]
mod log;

pub mod err;
pub mod fuse;
pub mod source;
pub mod sphream;
pub mod stage;

pub use err::SpErr;
pub use fuse::{Flow, Traversal};
pub use source::Source;
pub use sphream::Sphream;
pub use stage::Stage;

/// 整数类型
pub type Integer = i64;

pub type SpRes<T> = Result<T, SpErr>;
