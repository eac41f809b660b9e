use std::process::ExitCode;

use mem_init::{
    DotProductInputs, MemoryConfig, MemoryImage, constant::DEFAULT_OUTPUT_FILE,
    logs::init_tracing,
};
use tracing::error;

fn main() -> ExitCode {
    init_tracing();

    let image = match MemoryImage::build(MemoryConfig::default(), &DotProductInputs::default()) {
        Ok(image) => image,
        Err(err) => {
            error!(%err, "invalid memory configuration, nothing written");
            return ExitCode::FAILURE;
        }
    };

    match image.write_to_path(DEFAULT_OUTPUT_FILE) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, path = DEFAULT_OUTPUT_FILE, "could not write memory image");
            ExitCode::FAILURE
        }
    }
}
