// src/args.rs
use clap::Parser;
use std::ffi::OsString;
use std::iter;

/// Every command-line entry is a file name; there are no options.
#[derive(Parser, Debug)]
#[command(
    name = "myls",
    about = "カレントディレクトリ内のファイル情報を表示するツール",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// 対象ファイル名 (カレントディレクトリ内のエントリ名)
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub names: Vec<OsString>,
}

impl Args {
    /// Parse `argv` so that every entry after the program name, `--` included,
    /// becomes a name.
    pub fn from_argv<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_else(|| OsString::from("myls"));
        // 先頭に `--` を挟み、以降を全て値として扱わせる
        Self::parse_from(
            iter::once(program)
                .chain(iter::once(OsString::from("--")))
                .chain(argv),
        )
    }
}
