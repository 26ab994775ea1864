use cmd_help::CmdHelp;
use sphream::Integer;

/// 条件
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum Condition {
    Yes(Select),
    No(Select),
}

impl Condition {
    pub(crate) fn new(select: Select, not: bool) -> Condition {
        if not { Condition::No(select) } else { Condition::Yes(select) }
    }

    pub(crate) fn test(&self, input: &Integer) -> bool {
        match self {
            Condition::Yes(select) => select.select(*input),
            Condition::No(select) => !select.select(*input),
        }
    }
}

/// 选择
#[derive(Debug, Clone, Eq, PartialEq, CmdHelp)]
pub(crate) enum Select {
    /// [!]even
    ///     选择偶数，支持可选否定。
    /// [!]odd
    ///     选择奇数，支持可选否定。
    Parity { even: bool },
    /// [!]num [<min>],[<max>]
    ///     按照数值范围选择，包含两端，最小值和最大值至少指定其一，支持可选否定。
    ///     例如：
    ///         num 2,5
    ///         num -2,
    ///         num ,5
    ///         !num 2,5
    NumRange { min: Option<Integer>, max: Option<Integer> },
    /// [!]num =<spec>
    ///     按照特定数值选择，支持可选否定。
    ///     例如：
    ///         num =3
    ///         !num =3
    NumSpec { spec: Integer },
}

impl Select {
    pub(crate) fn new_parity(even: bool) -> Select {
        Select::Parity { even }
    }
    pub(crate) fn new_num_range(min: Option<Integer>, max: Option<Integer>) -> Select {
        Select::NumRange { min, max }
    }
    pub(crate) fn new_num_spec(spec: Integer) -> Select {
        Select::NumSpec { spec }
    }

    #[cfg(test)]
    pub(crate) fn yes(self) -> Condition {
        Condition::Yes(self)
    }

    #[cfg(test)]
    pub(crate) fn no(self) -> Condition {
        Condition::No(self)
    }

    fn select(&self, input: Integer) -> bool {
        match self {
            Select::Parity { even } => (input % 2 == 0) == *even,
            Select::NumRange { min, max } => {
                min.is_none_or(|min| input >= min) && max.is_none_or(|max| input <= max)
            }
            Select::NumSpec { spec } => input == *spec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity() {
        assert!(Select::new_parity(true).yes().test(&4));
        assert!(Select::new_parity(true).yes().test(&-2));
        assert!(!Select::new_parity(true).yes().test(&3));
        assert!(Select::new_parity(false).yes().test(&-3));
        assert!(Select::new_parity(false).no().test(&0));
    }

    #[test]
    fn test_num_range() {
        assert!(!Select::new_num_range(Some(3), Some(5)).yes().test(&2));
        assert!(Select::new_num_range(Some(3), Some(5)).yes().test(&3));
        assert!(Select::new_num_range(Some(3), Some(5)).yes().test(&5));
        assert!(!Select::new_num_range(Some(3), Some(5)).yes().test(&6));
        assert!(Select::new_num_range(Some(3), None).yes().test(&100));
        assert!(Select::new_num_range(None, Some(-1)).yes().test(&-100));
        assert!(!Select::new_num_range(None, Some(-1)).yes().test(&0));
        assert!(Select::new_num_range(Some(3), Some(5)).no().test(&6));
    }

    #[test]
    fn test_num_spec() {
        assert!(Select::new_num_spec(3).yes().test(&3));
        assert!(!Select::new_num_spec(3).yes().test(&4));
        assert!(Condition::new(Select::new_num_spec(3), true).test(&4));
    }
}
