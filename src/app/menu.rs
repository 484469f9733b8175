use crate::app::table::render_grid;
use crate::core::store::InventoryStore;
use crate::core::InventorySource;
use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::parse_amount;
use std::io::{BufRead, Write};

const MENU: &str = "\nShoe Inventory Management System\n\
                    1. Capture new shoe data\n\
                    2. View all shoes\n\
                    3. Restock shoe with lowest quantity\n\
                    4. Search for a shoe by code\n\
                    5. Calculate value per item\n\
                    6. Show shoe with highest quantity for sale\n\
                    7. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Capture,
    ViewAll,
    Restock,
    Search,
    ValuePerItem,
    Highest,
    Exit,
}

impl Action {
    fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Capture),
            "2" => Some(Self::ViewAll),
            "3" => Some(Self::Restock),
            "4" => Some(Self::Search),
            "5" => Some(Self::ValuePerItem),
            "6" => Some(Self::Highest),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Text menu over an `InventoryStore`. Reads answers from `input` and
/// writes everything shown to the user to `output`.
pub struct Menu<'a, S: InventorySource, R: BufRead, W: Write> {
    store: &'a mut InventoryStore<S>,
    input: R,
    output: W,
}

impl<'a, S: InventorySource, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(store: &'a mut InventoryStore<S>, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Runs until the user picks Exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                tracing::debug!("Input closed, leaving menu");
                return Ok(());
            };

            let action = match Action::from_choice(&choice) {
                Some(action) => action,
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    continue;
                }
            };

            match self.dispatch(action) {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(e) => self.report(&e)?,
            }
        }
    }

    // Ok(false) ends the loop: Exit was chosen or input ran out mid-action.
    fn dispatch(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Capture => self.capture(),
            Action::ViewAll => self.view_all().map(|_| true),
            Action::Restock => self.restock(),
            Action::Search => self.search(),
            Action::ValuePerItem => self.value_per_item().map(|_| true),
            Action::Highest => self.highest().map(|_| true),
            Action::Exit => {
                writeln!(self.output, "Exiting the program.")?;
                Ok(false)
            }
        }
    }

    fn report(&mut self, err: &InventoryError) -> Result<()> {
        if err.is_recoverable() {
            tracing::debug!("Action failed: {}", err);
        } else {
            tracing::error!("Action failed: {}", err);
        }
        writeln!(self.output, "{}", err.user_friendly_message())?;
        Ok(())
    }

    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn capture(&mut self) -> Result<bool> {
        let questions = [
            "Enter the country of the shoe: ",
            "Enter the code of the shoe: ",
            "Enter the product name of the shoe: ",
            "Enter the cost of the shoe: ",
            "Enter the quantity of the shoe: ",
        ];

        let mut answers = Vec::with_capacity(questions.len());
        for question in questions {
            match self.prompt(question)? {
                Some(answer) => answers.push(answer),
                None => return Ok(false),
            }
        }

        self.store
            .capture(&answers[0], &answers[1], &answers[2], &answers[3], &answers[4])?;
        writeln!(self.output, "Shoe added successfully!")?;
        Ok(true)
    }

    fn view_all(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return Err(InventoryError::EmptyInventory);
        }

        let rows: Vec<Vec<String>> = self
            .store
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

        let table = render_grid(&["Country", "Code", "Product", "Cost", "Quantity"], &rows);
        write!(self.output, "{}", table)?;
        Ok(())
    }

    fn restock(&mut self) -> Result<bool> {
        let lowest = self.store.lowest_quantity()?;
        writeln!(
            self.output,
            "\nShoe with the lowest quantity: {} (Quantity: {})",
            lowest.product, lowest.quantity
        )?;

        let Some(answer) = self.prompt("Do you want to add more stock for this shoe? (yes/no): ")?
        else {
            return Ok(false);
        };
        if !answer.trim().eq_ignore_ascii_case("yes") {
            return Ok(true);
        }

        let Some(raw) = self.prompt("Enter the quantity to add: ")? else {
            return Ok(false);
        };
        let amount = parse_amount("quantity", &raw)?;
        let updated = self.store.restock_lowest(amount)?;
        writeln!(
            self.output,
            "Updated quantity for {}: {}",
            updated.product, updated.quantity
        )?;
        Ok(true)
    }

    fn search(&mut self) -> Result<bool> {
        let Some(code) = self.prompt("Enter the shoe code to search: ")? else {
            return Ok(false);
        };
        let shoe = self.store.find_by_code(&code)?;
        writeln!(self.output, "\nShoe found: {}", shoe)?;
        Ok(true)
    }

    fn value_per_item(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return Err(InventoryError::EmptyInventory);
        }

        let rows: Vec<Vec<String>> = self
            .store
            .value_per_item()
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

        writeln!(self.output, "\n--- Stock Value Per Item ---")?;
        let table = render_grid(&["Product", "Cost", "Quantity", "Total Value"], &rows);
        write!(self.output, "{}", table)?;
        Ok(())
    }

    fn highest(&mut self) -> Result<()> {
        let shoe = self.store.highest_quantity()?;
        writeln!(
            self.output,
            "\nShoe with the highest quantity: {} (Quantity: {}) - ON SALE!",
            shoe.product, shoe.quantity
        )?;
        Ok(())
    }
}
