use libtest_mimic::Arguments;

mod create;

pub use utils::*;

fn main() {
    let args = Arguments::from_args();

    let mut tests = Vec::new();
    create::tests(&mut tests);
    sizes::tests(&mut tests);

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    libtest_mimic::run(&args, tests).exit()
}
