use std::io::{self, Write};
use std::{env, process};

use abspath::cli::run;
use abspath::infrastructure::SystemEnvironment;

fn main() {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = run(
        env::args_os().skip(1),
        &SystemEnvironment,
        &mut stdout.lock(),
        &mut stderr.lock(),
    );

    let _ = io::stdout().flush();
    process::exit(code);
}
