use crate::core::codec::{self, HEADER};
use crate::core::{InventorySource, ItemValue, ShoeRecord};
use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::{
    parse_whole_number, validate_non_empty_string, validate_text_field,
};

/// Problems recovered from while loading. None of them abort the load.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub issues: Vec<InventoryError>,
}

impl LoadReport {
    pub fn source_missing(&self) -> bool {
        self.issues
            .iter()
            .any(|e| matches!(e, InventoryError::SourceNotFound { .. }))
    }

    pub fn skipped_lines(&self) -> usize {
        self.issues
            .iter()
            .filter(|e| matches!(e, InventoryError::MalformedLine { .. }))
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// In-memory ordered shoe records plus the source they persist to.
pub struct InventoryStore<S: InventorySource> {
    source: S,
    records: Vec<ShoeRecord>,
}

impl<S: InventorySource> InventoryStore<S> {
    /// Reads the whole source. Absence and malformed lines are reported in the
    /// returned `LoadReport`; only genuine I/O failures are errors.
    pub fn load(source: S) -> Result<(Self, LoadReport)> {
        let mut report = LoadReport::default();

        let records = match source.read_all()? {
            Some(text) => {
                let parsed = codec::parse_source(&text)?;
                report.issues.extend(parsed.skipped);
                parsed.records
            }
            None => {
                tracing::warn!("Inventory source {} not found", source.describe());
                report.issues.push(InventoryError::SourceNotFound {
                    path: source.describe(),
                });
                Vec::new()
            }
        };

        tracing::debug!(
            "Loaded {} records from {} ({} skipped)",
            records.len(),
            source.describe(),
            report.skipped_lines()
        );

        Ok((Self { source, records }, report))
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Builds a record from raw user text and appends it. Nothing is touched
    /// unless every field validates.
    pub fn capture(
        &mut self,
        country: &str,
        code: &str,
        product: &str,
        cost: &str,
        quantity: &str,
    ) -> Result<&ShoeRecord> {
        let cost = parse_whole_number("cost", cost)?;
        let quantity = parse_whole_number("quantity", quantity)?;
        self.append(ShoeRecord::new(
            country.trim(),
            code.trim(),
            product.trim(),
            cost,
            quantity,
        ))
    }

    /// Appends one line to the source, then to the in-memory sequence.
    pub fn append(&mut self, record: ShoeRecord) -> Result<&ShoeRecord> {
        validate_text_field("country", &record.country)?;
        validate_text_field("code", &record.code)?;
        validate_text_field("product", &record.product)?;
        validate_non_empty_string("code", &record.code)?;

        let line = codec::format_record(&record);
        let text = match self.source.read_all()? {
            None => format!("{}\n{}\n", HEADER, line),
            Some(existing) if existing.is_empty() => format!("{}\n{}\n", HEADER, line),
            Some(existing) if existing.ends_with('\n') => format!("{}\n", line),
            Some(_) => format!("\n{}\n", line),
        };
        self.source.append(&text)?;

        tracing::debug!("Appended {} to {}", record, self.source.describe());
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn list_all(&self) -> &[ShoeRecord] {
        &self.records
    }

    pub fn find_by_code(&self, code: &str) -> Result<&ShoeRecord> {
        self.records
            .iter()
            .find(|r| r.matches_code(code))
            .ok_or_else(|| InventoryError::NotFound {
                code: code.trim().to_string(),
            })
    }

    pub fn lowest_quantity(&self) -> Result<&ShoeRecord> {
        self.lowest_index().map(|i| &self.records[i])
    }

    /// Adds `additional` units to the lowest-stock record and rewrites the
    /// whole source. The rewrite is not atomic unless the source makes it so.
    pub fn restock_lowest(&mut self, additional: i64) -> Result<ShoeRecord> {
        if additional <= 0 {
            return Err(InventoryError::invalid_input(
                "quantity",
                additional.to_string(),
                "must be a positive number",
            ));
        }
        let index = self.lowest_index()?;

        let current = self.records[index].quantity;
        let updated = u32::try_from(additional)
            .ok()
            .and_then(|extra| current.checked_add(extra))
            .ok_or_else(|| {
                InventoryError::invalid_input(
                    "quantity",
                    additional.to_string(),
                    "would exceed the maximum stock level",
                )
            })?;

        self.records[index].quantity = updated;
        tracing::info!(
            "Restocked {} from {} to {}",
            self.records[index].code,
            current,
            updated
        );

        self.source.rewrite(&codec::render_source(&self.records))?;
        Ok(self.records[index].clone())
    }

    pub fn highest_quantity(&self) -> Result<&ShoeRecord> {
        let mut best: Option<&ShoeRecord> = None;
        for record in &self.records {
            match best {
                Some(b) if record.quantity <= b.quantity => {}
                _ => best = Some(record),
            }
        }
        best.ok_or(InventoryError::EmptyInventory)
    }

    pub fn value_per_item(&self) -> Vec<ItemValue> {
        self.records.iter().map(ItemValue::from).collect()
    }

    // First occurrence wins on ties.
    fn lowest_index(&self) -> Result<usize> {
        let mut best: Option<usize> = None;
        for (i, record) in self.records.iter().enumerate() {
            match best {
                Some(b) if record.quantity >= self.records[b].quantity => {}
                _ => best = Some(i),
            }
        }
        best.ok_or(InventoryError::EmptyInventory)
    }
}
