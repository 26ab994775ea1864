use std::iter::Peekable;

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Config {
    /// 帮助 `-h`
    Help,
    /// 版本 `-V`
    Version,
    /// 打印流水线信息 `-v`
    Verbose,
    /// 仅解析，不执行 `-d`
    DryRun,
}

/// 从参数开头连续解析配置，遇到第一个非配置参数即停止。
pub(crate) fn parse_configs(args: &mut Peekable<impl Iterator<Item = String>>) -> Vec<Config> {
    let mut configs = Vec::new();
    while let Some(config) = parse_config(args.peek()) {
        args.next();
        configs.push(config);
    }
    configs
}

fn parse_config(arg: Option<&String>) -> Option<Config> {
    match arg?.as_str() {
        "-h" | "--help" => Some(Config::Help),
        "-V" | "--version" => Some(Config::Version),
        "-v" => Some(Config::Verbose),
        "-d" => Some(Config::DryRun),
        _ => None,
    }
}
