use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use tracing::{info, instrument, warn};

use crate::{
    config::{DotProductInputs, MemoryConfig},
    errors::{ConfigError, MifError},
    layout::{self, MemoryWord, RegionSpan, region::Region},
    render,
};

/// A fully validated memory image, buffered before anything is written.
///
/// Building the image runs every configuration check, so a `MemoryImage` can
/// always be rendered and no output sink is touched for an invalid layout.
#[derive(Clone, Debug)]
pub struct MemoryImage {
    config: MemoryConfig,
    words: Vec<MemoryWord>,
    spans: Vec<RegionSpan>,
}

impl MemoryImage {
    /// Lays out `inputs` in a memory described by `config`.
    ///
    /// # Errors
    /// * `ConfigError::VectorLengthMismatch` if either vector disagrees with
    ///   the declared vector length.
    /// * `ConfigError::InsufficientDepth` if the regions need more words than
    ///   `config.depth()`.
    #[instrument(skip_all)]
    pub fn build(config: MemoryConfig, inputs: &DotProductInputs) -> Result<Self, ConfigError> {
        inputs.check_vector_lengths().inspect_err(|err| {
            warn!(%err, "rejecting dot-product inputs");
        })?;

        let regions = Region::sequence(inputs);
        layout::validate(&config, &regions)?;

        let words = layout::assign_addresses(&config, &regions);
        let spans = layout::region_spans(&regions);

        let used = layout::padding_start(&regions);
        info!(
            depth = config.depth(),
            width = config.width(),
            used,
            padding = config.depth() - used,
            "memory image built"
        );

        Ok(Self {
            config,
            words,
            spans,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// Every record, one per address in `[0, depth)`.
    #[must_use]
    pub fn words(&self) -> &[MemoryWord] {
        &self.words
    }

    /// Address ranges of the regions, in layout order.
    #[must_use]
    pub fn spans(&self) -> &[RegionSpan] {
        &self.spans
    }

    /// The value at `address`, or `None` past the end of memory.
    #[must_use]
    pub fn get(&self, address: usize) -> Option<i64> {
        self.words.get(address).map(|word| word.value)
    }

    /// First padding address.
    #[must_use]
    pub fn padding_start(&self) -> usize {
        self.spans.last().map_or(0, RegionSpan::end)
    }

    #[must_use]
    pub fn render(&self) -> String {
        render::render(&self.config, &self.words)
    }

    pub fn write_to<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        render::write_mif(writer, &self.config, &self.words)
    }

    /// Writes the rendered image to `path`, replacing any existing file.
    ///
    /// The image is written to a hidden sibling file first and renamed over
    /// `path` only once it is complete, so a failed write leaves `path` as it was
    /// and removes the partial sibling.
    pub fn write_to_path<P>(&self, path: P) -> Result<(), MifError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let staging = staging_path(path)?;

        commit_staged(&staging, path, |file| {
            let mut writer = BufWriter::new(file);
            self.write_to(&mut writer)?;
            writer.into_inner().map_err(io::IntoInnerError::into_error)?.sync_all()
        })?;

        info!(
            path = %path.display(),
            words = self.words.len(),
            "memory-initialization file written"
        );
        Ok(())
    }
}

/// Hidden file next to `path`, on the same filesystem so the final rename is atomic.
fn staging_path(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("output path '{}' has no file name", path.display()),
        )
    })?;
    let mut staged = std::ffi::OsString::from(".");
    staged.push(name);
    staged.push(format!(".{}.tmp", std::process::id()));
    Ok(path.with_file_name(staged))
}

/// Creates `staging`, fills it with `write` and renames it to `path`.
///
/// Nothing at `path` is touched unless the rename runs. Once `staging` exists,
/// any failure removes it again.
fn commit_staged<F>(staging: &Path, path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let mut file = File::create(staging).inspect_err(|err| {
        warn!(path = %staging.display(), %err, "cannot create staging file");
    })?;

    let result = write(&mut file).and_then(|()| {
        drop(file);
        fs::rename(staging, path)
    });

    if let Err(err) = &result {
        warn!(path = %path.display(), %err, "write failed, discarding partial output");
        if let Err(remove_err) = fs::remove_file(staging) {
            warn!(path = %staging.display(), err = %remove_err, "cannot remove staging file");
        }
    }
    result
}
