use std::io::{BufRead, Write};

use tracing::{info, instrument, warn};

use super::{parse_count, parse_price, Terminal};
use crate::clients::InventoryClient;
use crate::domain::Product;
use crate::inventory_actor::InventoryError;

const MENU: &str = "\nInventory Management
1. Add Electronics Product
2. List All Products
3. Total Inventory Value
4. Exit";

/// What the loop does after a menu entry has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Numbered text menu loop.
///
/// Ends on choice 4 or at end of input. A malformed number aborts only the
/// current entry; the loop then shows the menu again.
#[instrument(name = "menu_session", skip_all)]
pub async fn run_menu<R: BufRead, W: Write>(
    client: &InventoryClient,
    terminal: &mut Terminal<R, W>,
) -> Result<(), InventoryError> {
    info!("Menu session started");
    loop {
        terminal.say(MENU)?;
        let Some(choice) = terminal.prompt("Enter choice: ")? else {
            break;
        };

        let step = match choice.as_str() {
            "1" => add_electronics(client, terminal).await,
            "2" => list_products(client, terminal).await,
            "3" => show_total(client, terminal).await,
            "4" => {
                terminal.say("Exiting...")?;
                break;
            }
            other => {
                warn!(choice = %other, "Invalid menu choice");
                terminal.say("Invalid choice.")?;
                Ok(Step::Continue)
            }
        };

        match step {
            Ok(Step::Continue) => {}
            Ok(Step::Exit) => break,
            Err(e @ InventoryError::InvalidNumber { .. }) => {
                warn!(error = %e, "Menu entry aborted");
                terminal.say(format_args!("Error: {}", e))?;
            }
            Err(e) => return Err(e),
        }
    }
    info!("Menu session ended");
    Ok(())
}

async fn add_electronics<R: BufRead, W: Write>(
    client: &InventoryClient,
    terminal: &mut Terminal<R, W>,
) -> Result<Step, InventoryError> {
    let Some(id) = terminal.prompt("Product ID: ")? else { return Ok(Step::Exit) };
    let Some(name) = terminal.prompt("Name: ")? else { return Ok(Step::Exit) };
    let Some(raw) = terminal.prompt("Price: ")? else { return Ok(Step::Exit) };
    let price = parse_price("Price", &raw)?;
    let Some(raw) = terminal.prompt("Quantity: ")? else { return Ok(Step::Exit) };
    let quantity = parse_count("Quantity", &raw)?;
    let Some(raw) = terminal.prompt("Warranty (years): ")? else { return Ok(Step::Exit) };
    let warranty_years = parse_count("Warranty (years)", &raw)?;
    let Some(brand) = terminal.prompt("Brand: ")? else { return Ok(Step::Exit) };

    let product = Product::electronics(id, name, price, quantity, warranty_years, brand);
    client.add_product(product).await?;
    terminal.say("Product added successfully.")?;
    Ok(Step::Continue)
}

async fn list_products<R: BufRead, W: Write>(
    client: &InventoryClient,
    terminal: &mut Terminal<R, W>,
) -> Result<Step, InventoryError> {
    terminal.say("\n--- All Products ---")?;
    for product in client.list_products().await? {
        terminal.say(&product)?;
    }
    Ok(Step::Continue)
}

async fn show_total<R: BufRead, W: Write>(
    client: &InventoryClient,
    terminal: &mut Terminal<R, W>,
) -> Result<Step, InventoryError> {
    let total = client.total_value().await?;
    terminal.say(format_args!("Total Value: ${:.2}", total))?;
    Ok(Step::Continue)
}
