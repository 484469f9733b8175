use crate::core::InventorySource;
use crate::utils::error::Result;

/// Source kept entirely in memory, for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    contents: Option<String>,
}

impl MemorySource {
    pub fn missing() -> Self {
        Self { contents: None }
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl InventorySource for MemorySource {
    fn read_all(&self) -> Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn append(&mut self, text: &str) -> Result<()> {
        self.contents.get_or_insert_with(String::new).push_str(text);
        Ok(())
    }

    fn rewrite(&mut self, contents: &str) -> Result<()> {
        self.contents = Some(contents.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
