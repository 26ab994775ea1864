use crate::condition::Select;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;

/// 在终端中以指定的ANSI颜色输出到标准错误，非终端时原样输出。
#[macro_export]
macro_rules! println_err {
    ($($arg:tt)*) => {
        if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
            eprintln!("\x1b[1;31m{}\x1b[0m", format_args!($($arg)*));
        } else {
            eprintln!($($arg)*);
        }
    };
}

/// 在终端中以蓝色粗体输出到标准输出，非终端时原样输出。
#[macro_export]
macro_rules! println_info {
    ($($arg:tt)*) => {
        if std::io::IsTerminal::is_terminal(&std::io::stdout()) {
            println!("\x1b[1;34m{}\x1b[0m", format_args!($($arg)*));
        } else {
            println!($($arg)*);
        }
    };
}

pub(crate) fn print_help() {
    println!("Usage: sp [-h] [-V] [-v] [-d] <input> [<op>...] [<terminal>]");
    println!();
    println!("    -h, --help      打印帮助信息。");
    println!("    -V, --version   打印版本信息。");
    println!("    -v              执行前打印解析得到的流水线。");
    println!("    -d              仅解析，不执行。");
    print_section("Input", Input::all_help());
    print_section("Op", Op::all_help());
    print_section("Terminal", Output::all_help());
    print_section("Condition", Select::all_help());
}

fn print_section(title: &str, entries: &[(&str, &str)]) {
    println!();
    println_info!("{title}:");
    for (_, help) in entries {
        for line in help.lines() {
            println!("    {line}");
        }
    }
}
