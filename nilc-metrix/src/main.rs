//! Textual complexity metrics for Portuguese, served over HTTP.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use nilc_metrix_lib::{Host, run};
use std::io::{Read, Write};
use std::io::{stderr, stdin, stdout};

/// Default host backed by the process's standard streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn input(&mut self) -> impl Read {
        stdin()
    }

    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
#[cfg_attr(coverage_nightly, coverage(off))]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}
