use crate::app::menu::Menu;
use crate::app::table::render_grid;
use crate::config::Command;
use crate::core::store::InventoryStore;
use crate::core::InventorySource;
use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::parse_amount;
use std::io::{BufRead, Write};

/// Runs one subcommand against a loaded store. The menu reads from `input`;
/// every other command only writes to `output`.
pub fn execute<S, R, W>(
    command: &Command,
    store: &mut InventoryStore<S>,
    input: R,
    mut output: W,
) -> Result<()>
where
    S: InventorySource,
    R: BufRead,
    W: Write,
{
    match command {
        Command::Menu => Menu::new(store, input, output).run(),
        Command::List { json } => {
            if *json {
                serde_json::to_writer_pretty(&mut output, store.list_all())
                    .map_err(std::io::Error::from)?;
                writeln!(output)?;
            } else if store.is_empty() {
                writeln!(output, "{}", InventoryError::EmptyInventory.user_friendly_message())?;
            } else {
                let rows: Vec<Vec<String>> = store
                    .list_all()
                    .iter()
                    .map(|s| {
                        vec![
                            s.country.clone(),
                            s.code.clone(),
                            s.product.clone(),
                            s.cost.to_string(),
                            s.quantity.to_string(),
                        ]
                    })
                    .collect();
                let headers = ["Country", "Code", "Product", "Cost", "Quantity"];
                write!(output, "{}", render_grid(&headers, &rows))?;
            }
            Ok(())
        }
        Command::Find { code } => {
            let shoe = store.find_by_code(code)?;
            writeln!(output, "{}", shoe)?;
            Ok(())
        }
        Command::Add {
            country,
            code,
            product,
            cost,
            quantity,
        } => {
            let shoe = store.capture(country, code, product, cost, quantity)?;
            writeln!(output, "Added {}", shoe)?;
            Ok(())
        }
        Command::Restock { amount } => {
            let amount = parse_amount("quantity", amount)?;
            let shoe = store.restock_lowest(amount)?;
            writeln!(output, "Updated quantity for {}: {}", shoe.product, shoe.quantity)?;
            Ok(())
        }
        Command::Highest => {
            let shoe = store.highest_quantity()?;
            writeln!(output, "{}", shoe)?;
            Ok(())
        }
        Command::Values { json } => {
            let values = store.value_per_item();
            if *json {
                serde_json::to_writer_pretty(&mut output, &values)
                    .map_err(std::io::Error::from)?;
                writeln!(output)?;
            } else if values.is_empty() {
                writeln!(output, "{}", InventoryError::EmptyInventory.user_friendly_message())?;
            } else {
                let rows: Vec<Vec<String>> = values
                    .into_iter()
                    .map(|v| {
                        vec![
                            v.product,
                            v.cost.to_string(),
                            v.quantity.to_string(),
                            v.value.to_string(),
                        ]
                    })
                    .collect();
                let headers = ["Product", "Cost", "Quantity", "Total Value"];
                write!(output, "{}", render_grid(&headers, &rows))?;
            }
            Ok(())
        }
    }
}
