//! Command definitions and handlers
//!
//! Each command has a clap argument struct that converts into a core
//! parameter type, keeping clap out of `bastion-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Shop
//! ```

use anyhow::{bail, Context, Result};
use bastion_core::{
    display::{AddResult, CartView, Money, OperationStatus, RemoveResult},
    params::{Id, ListPlanOptions, Quote, RemoveLine, SelectPlan},
    Database, Shop,
};
use clap::{Args, Subcommand};
use log::debug;

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// List catalog packages with their availability
#[derive(Args)]
pub struct ListCatalogArgs {
    /// Company size to price each package for
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub employees: Option<u32>,
}

impl From<ListCatalogArgs> for ListPlanOptions {
    fn from(val: ListCatalogArgs) -> Self {
        ListPlanOptions {
            employees: val.employees,
        }
    }
}

/// Show one catalog package in full
#[derive(Args)]
pub struct ShowCatalogArgs {
    #[arg(help = "Identifier of the package, e.g. soc2-blueprint")]
    pub id: String,
}

impl From<ShowCatalogArgs> for Id {
    fn from(val: ShowCatalogArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List packages, optionally priced for a company size
    #[command(alias = "ls")]
    List(ListCatalogArgs),
    /// Show pricing brackets and conflicts for a package
    #[command(alias = "s")]
    Show(ShowCatalogArgs),
    /// Report one-sided or dangling exclusivity declarations
    Check,
}

/// Price a package for a company size
#[derive(Args)]
pub struct QuoteArgs {
    #[arg(help = "Identifier of the package to price")]
    pub id: String,
    /// Number of employees in the company
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub employees: u32,
}

impl From<QuoteArgs> for Quote {
    fn from(val: QuoteArgs) -> Self {
        Quote {
            plan_id: val.id,
            employees: val.employees,
        }
    }
}

/// Add a package to the cart
///
/// The price is fixed at the moment the package is added. Packages that
/// cannot be combined with something already in the cart are refused.
#[derive(Args)]
pub struct AddCartArgs {
    #[arg(help = "Identifier of the package to add")]
    pub id: String,
    /// Number of employees in the company
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub employees: u32,
}

impl From<AddCartArgs> for SelectPlan {
    fn from(val: AddCartArgs) -> Self {
        SelectPlan {
            plan_id: val.id,
            employees: val.employees,
        }
    }
}

/// Remove a line from the cart
#[derive(Args)]
pub struct RemoveCartArgs {
    /// Line number as shown by `cart show`, starting at 1
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub position: u64,
}

impl RemoveCartArgs {
    /// One-based position as a usize, saturating on narrow platforms.
    fn position(&self) -> usize {
        usize::try_from(self.position).unwrap_or(usize::MAX)
    }
}

impl From<&RemoveCartArgs> for RemoveLine {
    fn from(val: &RemoveCartArgs) -> Self {
        RemoveLine {
            index: val.position() - 1,
        }
    }
}

/// Check out the cart
#[derive(Args)]
pub struct CheckoutArgs {
    /// Print the checkout payload as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum CartCommands {
    /// Show the cart
    #[command(alias = "s")]
    Show,
    /// Add a package to the cart
    #[command(alias = "a")]
    Add(AddCartArgs),
    /// Remove a line from the cart
    #[command(alias = "rm")]
    Remove(RemoveCartArgs),
    /// Remove every line from the cart
    Clear,
    /// Hand the cart over for payment and empty it
    Checkout(CheckoutArgs),
}

// ============================================================================
// Command Handlers
// ============================================================================

pub struct Cli {
    shop: Shop<Database>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(shop: Shop<Database>, renderer: TerminalRenderer) -> Self {
        Self { shop, renderer }
    }

    pub fn handle_catalog_command(self, command: CatalogCommands) -> Result<()> {
        match command {
            CatalogCommands::List(args) => self.list_catalog(&args.into()),
            CatalogCommands::Show(args) => self.show_catalog_entry(&args.into()),
            CatalogCommands::Check => self.check_catalog(),
        }
    }

    pub fn handle_cart_command(mut self, command: CartCommands) -> Result<()> {
        match command {
            CartCommands::Show => self.show_cart(),
            CartCommands::Add(args) => self.add_to_cart(&args.into()),
            CartCommands::Remove(args) => self.remove_from_cart(&args),
            CartCommands::Clear => self.clear_cart(),
            CartCommands::Checkout(args) => self.checkout(&args),
        }
    }

    pub fn list_catalog(&self, params: &ListPlanOptions) -> Result<()> {
        let options = self.shop.plan_options(params);
        let mut output = String::from("# Packages\n\n");
        output.push_str(&options.to_string());
        self.renderer.render(&output);
        Ok(())
    }

    fn show_catalog_entry(&self, params: &Id) -> Result<()> {
        let entry = self.shop.catalog().require(&params.id)?;
        let availability = self.shop.availability(params)?;

        let mut output = entry.to_string();
        if let Some(blocker) = availability.blocked_by() {
            output.push_str(&format!(
                "\nUnavailable while '{}' is in the cart.\n",
                blocker.title
            ));
        }
        self.renderer.render(&output);
        Ok(())
    }

    fn check_catalog(&self) -> Result<()> {
        let catalog = self.shop.catalog();
        let asymmetric = catalog.asymmetric_exclusions();
        let unknown = catalog.unknown_exclusions();

        if asymmetric.is_empty() && unknown.is_empty() {
            let status = OperationStatus::success(format!(
                "Catalog of {} package(s) is consistent",
                catalog.len()
            ));
            self.renderer.render(&status.to_string());
            return Ok(());
        }

        let mut output = String::from("# Catalog issues\n\n");
        for (from, to) in &asymmetric {
            output.push_str(&format!(
                "- '{from}' excludes '{to}' but '{to}' does not exclude '{from}'\n"
            ));
        }
        for (from, to) in &unknown {
            output.push_str(&format!("- '{from}' excludes unknown package '{to}'\n"));
        }
        output.push('\n');
        let status = OperationStatus::failure(format!(
            "Catalog has {} exclusivity issue(s)",
            asymmetric.len() + unknown.len()
        ));
        output.push_str(&status.to_string());
        self.renderer.render(&output);

        bail!("Catalog check failed")
    }

    pub fn quote(&self, params: &Quote) -> Result<()> {
        let price = self.shop.quote(params)?;
        let entry = self.shop.catalog().require(&params.plan_id)?;
        self.renderer.render(&format!(
            "{} for {} employees: {}\n",
            entry.title,
            params.employees,
            Money(price)
        ));
        Ok(())
    }

    pub fn show_cart(&self) -> Result<()> {
        self.renderer
            .render(&CartView(self.shop.cart().items()).to_string());
        Ok(())
    }

    fn add_to_cart(&mut self, params: &SelectPlan) -> Result<()> {
        let selection = self.shop.select_plan(params)?;
        let result = AddResult {
            selection,
            total_items: self.shop.cart().total_items(),
            total_price: self.shop.cart().total_price(),
        };
        self.renderer.render(&result.to_string());
        Ok(())
    }

    fn remove_from_cart(&mut self, args: &RemoveCartArgs) -> Result<()> {
        let removed = self.shop.remove_line(&args.into())?;
        let result = RemoveResult {
            position: args.position(),
            removed,
        };
        self.renderer.render(&result.to_string());
        Ok(())
    }

    fn clear_cart(&mut self) -> Result<()> {
        let count = self.shop.cart().total_items();
        self.shop.clear_cart()?;
        let status = OperationStatus::success(format!("Removed {count} item(s) from cart"));
        self.renderer.render(&status.to_string());
        Ok(())
    }

    fn checkout(&mut self, args: &CheckoutArgs) -> Result<()> {
        if self.shop.cart().is_empty() {
            bail!("Cart is empty; nothing to check out");
        }

        let request = self.shop.checkout()?;
        debug!("Checkout request built with {} line(s)", request.line_items.len());

        if args.json {
            let payload = serde_json::to_string_pretty(&request)
                .context("Failed to serialize checkout request")?;
            self.renderer.raw(&payload);
        } else {
            self.renderer.render(&request.to_string());
        }
        Ok(())
    }
}
