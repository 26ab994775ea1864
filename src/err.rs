use std::process::{ExitCode, Termination};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum SpErr {
    #[error("[Closed] Sphream is already closed")]
    ClosedSphream,

    #[error("[Empty] Sphream is empty, no item to return")]
    EmptySphream,

    #[error("[Bad Arg] Invalid argument `{arg}` of `{cmd}`: {reason}")]
    InvalidArg { cmd: &'static str, arg: &'static str, reason: String },

    #[error("[Token] Invalid token:\n{0}")]
    ParseTokenErr(String),

    #[error("[Missing Input] An input such as `:of`, `:range`, `:repeat` or `:gen` is required")]
    MissingInput,

    #[error("[Bad Arg] Unknown arguments: {args:?}")]
    UnknownArgs { args: Vec<String> },
}

impl Termination for SpErr {
    fn report(self) -> ExitCode {
        eprintln!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl SpErr {
    pub fn termination(self) -> ! {
        let exit_code = self.exit_code();
        self.report();
        std::process::exit(exit_code as i32);
    }

    /// 退出码，从1开始按变体顺序递增，0保留给成功。
    pub fn exit_code(&self) -> u8 {
        match self {
            SpErr::ClosedSphream => 1,
            SpErr::EmptySphream => 2,
            SpErr::InvalidArg { .. } => 3,
            SpErr::ParseTokenErr(_) => 4,
            SpErr::MissingInput => 5,
            SpErr::UnknownArgs { .. } => 6,
        }
    }
}
