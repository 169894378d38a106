use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{info, instrument, warn};

use super::{parse_count, parse_price, Terminal};
use crate::clients::InventoryClient;
use crate::domain::Product;
use crate::inventory_actor::InventoryError;

/// Actions offered by the form UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    ListProducts,
    AddProduct,
    TotalValue,
    Quit,
}

impl FromStr for FormAction {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "list" | "list products" => Ok(FormAction::ListProducts),
            "2" | "add" | "add product" => Ok(FormAction::AddProduct),
            "3" | "total" | "total inventory value" => Ok(FormAction::TotalValue),
            "4" | "quit" | "q" => Ok(FormAction::Quit),
            _ => Err(InventoryError::UnknownAction(s.to_string())),
        }
    }
}

/// Field values collected by the "Add Product" form.
///
/// Numeric fields default to zero; identifier, name and brand are required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddProductForm {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub warranty_years: u32,
    pub brand: String,
}

impl AddProductForm {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [("Product ID", &self.id), ("Name", &self.name), ("Brand", &self.brand)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(label, _)| label)
            .collect()
    }

    /// Builds the electronics product, or reports which required fields are empty.
    pub fn into_product(self) -> Result<Product, InventoryError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(InventoryError::MissingFields(missing));
        }
        Ok(Product::electronics(
            self.id,
            self.name,
            self.price,
            self.quantity,
            self.warranty_years,
            self.brand,
        ))
    }
}

/// Terminal rendition of the interactive form UI.
///
/// The inventory behind `client` persists across every action of the
/// session. Ends on `Quit` or at end of input.
#[instrument(name = "form_session", skip_all)]
pub async fn run_form<R: BufRead, W: Write>(
    client: &InventoryClient,
    terminal: &mut Terminal<R, W>,
) -> Result<(), InventoryError> {
    info!("Form session started");
    terminal.say("Inventory Management System")?;
    loop {
        terminal.say("\nActions: 1. List Products | 2. Add Product | 3. Total Inventory Value | 4. Quit")?;
        let Some(raw) = terminal.prompt("Choose Action: ")? else {
            break;
        };
        let action = match raw.parse::<FormAction>() {
            Ok(action) => action,
            Err(e) => {
                warn!(error = %e, "Unrecognised form action");
                terminal.say(format_args!("Error: {}", e))?;
                continue;
            }
        };

        match action {
            FormAction::ListProducts => {
                terminal.say("\nAll Products")?;
                let products = client.list_products().await?;
                if products.is_empty() {
                    terminal.say("No products in inventory.")?;
                }
                for product in &products {
                    terminal.say(product)?;
                }
            }
            FormAction::AddProduct => {
                terminal.say("\nAdd New Electronics Product")?;
                let Some(form) = fill_form(terminal)? else {
                    break;
                };
                submit(client, terminal, form).await?;
            }
            FormAction::TotalValue => {
                let total = client.total_value().await?;
                terminal.say(format_args!("Total Inventory Value: ${:.2}", total))?;
            }
            FormAction::Quit => break,
        }
    }
    info!("Form session ended");
    Ok(())
}

/// Reads every field of the add form. `Ok(None)` means input ended.
///
/// A malformed number is reported and leaves that field at zero, so
/// the required-field check still runs on submit.
fn fill_form<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
) -> Result<Option<AddProductForm>, InventoryError> {
    let mut form = AddProductForm::default();
    let Some(id) = terminal.prompt("Product ID: ")? else { return Ok(None) };
    form.id = id;
    let Some(name) = terminal.prompt("Name: ")? else { return Ok(None) };
    form.name = name;
    let Some(raw) = terminal.prompt("Price [0.00]: ")? else { return Ok(None) };
    form.price = number_or_zero(terminal, &raw, |raw| parse_price("Price", raw))?;
    let Some(raw) = terminal.prompt("Quantity [0]: ")? else { return Ok(None) };
    form.quantity = number_or_zero(terminal, &raw, |raw| parse_count("Quantity", raw))?;
    let Some(raw) = terminal.prompt("Warranty (years) [0]: ")? else { return Ok(None) };
    form.warranty_years = number_or_zero(terminal, &raw, |raw| parse_count("Warranty (years)", raw))?;
    let Some(brand) = terminal.prompt("Brand: ")? else { return Ok(None) };
    form.brand = brand;
    Ok(Some(form))
}

fn number_or_zero<R, W, N>(
    terminal: &mut Terminal<R, W>,
    raw: &str,
    parse: impl Fn(&str) -> Result<N, InventoryError>,
) -> Result<N, InventoryError>
where
    R: BufRead,
    W: Write,
    N: Default,
{
    if raw.trim().is_empty() {
        return Ok(N::default());
    }
    match parse(raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(error = %e, "Form field reset to zero");
            terminal.say(format_args!("Error: {}", e))?;
            Ok(N::default())
        }
    }
}

async fn submit<R: BufRead, W: Write>(
    client: &InventoryClient,
    terminal: &mut Terminal<R, W>,
    form: AddProductForm,
) -> Result<(), InventoryError> {
    match form.into_product() {
        Ok(product) => {
            let name = product.name.clone();
            client.add_product(product).await?;
            terminal.say(format_args!("Product '{}' added successfully!", name))?;
        }
        Err(e @ InventoryError::MissingFields(_)) => {
            warn!(error = %e, "Add skipped");
            terminal.say("Warning: Please fill all required fields.")?;
        }
        Err(e) => return Err(e),
    }
    Ok(())
}
