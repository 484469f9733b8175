use crate::utils::error::Result;

/// Where the inventory text lives. Each call opens, finishes and releases
/// the underlying resource before returning.
pub trait InventorySource {
    /// Full text of the source, or `None` when it does not exist.
    fn read_all(&self) -> Result<Option<String>>;

    /// Appends `text` verbatim; callers supply any separating newline.
    fn append(&mut self, text: &str) -> Result<()>;

    /// Replaces the whole source with `contents`.
    fn rewrite(&mut self, contents: &str) -> Result<()>;

    /// Human-readable name used in logs and error messages.
    fn describe(&self) -> String;
}
