use crate::error::WrResult;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads the whole input source into memory.
///
/// Acquisition is the only fallible stage of the pipeline; the analysis
/// itself is total over any string.
pub fn read_text<P: AsRef<Path>>(path: P) -> WrResult<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    debug!("Read {} bytes from {:?}", text.len(), path);
    Ok(text)
}
