use std::env;
use std::path::Path;
use std::process::ExitCode;

use unicode_tables_prepare::fetch::UcdFetcher;
use unicode_tables_prepare::generate::UcdGenerate;
use unicode_tables_prepare::output::stats;
use unicode_tables_prepare::pipeline;
use unicode_tables_prepare::{CategorySet, UnicodeVersion};

const USAGE: &str = "Usage: unicode_tables_prepare <unicode version>";

fn main() -> ExitCode
{
    let args: Vec<String> = env::args().skip(1).collect();

    let version = match args.as_slice() {
        [version] => UnicodeVersion::new(version.as_str()),
        _ => {
            println!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let categories = CategorySet::leaf();
    let fetcher = UcdFetcher::default();
    let builder = UcdGenerate;

    match pipeline::run(&version, &fetcher, &builder, &categories, Path::new(".")) {
        Ok((path, bytes)) => {
            stats::print(&path, categories.len(), bytes);

            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("ошибка: {}", error);

            ExitCode::FAILURE
        }
    }
}
