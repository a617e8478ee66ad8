//! High-level shop API tying the catalog, pricing and cart together.
//!
//! [`Shop`] is what a front-end talks to. It plays the role of the pricing
//! calculator and package pages: it prices entries, reports which ones are
//! blocked by the cart's contents, and only adds a plan after the
//! exclusivity check passes.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │      Shop       │    │   Catalog +     │    │   CartStore     │
//! │ (select, quote, │───▶│   pricing +     │───▶│ (persistence    │
//! │  plan options)  │    │   exclusivity   │    │     port)       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use bastion_core::{params::SelectPlan, MemoryPersistence, ShopBuilder, ShopError};
//!
//! # fn example() -> bastion_core::Result<()> {
//! let mut shop = ShopBuilder::new().build_with(MemoryPersistence::new())?;
//!
//! shop.select_plan(&SelectPlan {
//!     plan_id: "cloud-starter".to_string(),
//!     employees: 25,
//! })?;
//!
//! let blocked = shop.select_plan(&SelectPlan {
//!     plan_id: "vciso-lite".to_string(),
//!     employees: 25,
//! });
//! assert!(matches!(blocked, Err(ShopError::ExclusiveConflict { .. })));
//! assert_eq!(shop.cart().total_items(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use log::info;

use crate::{
    cart::CartStore,
    catalog::Catalog,
    display::PlanOptions,
    error::{Result, ShopError},
    exclusivity::{evaluate, Availability},
    models::{CheckoutRequest, PlanOption, PlanSelection},
    params::{Id, ListPlanOptions, Quote, RemoveLine, SelectPlan},
    persistence::CartPersistence,
    pricing::BracketFallback,
};

pub mod builder;


pub use builder::ShopBuilder;

/// Catalog plus cart, with the selection rules applied between them.
#[derive(Debug)]
pub struct Shop<P> {
    catalog: Catalog,
    cart: CartStore<P>,
    fallback: BracketFallback,
}

impl<P: CartPersistence> Shop<P> {
    pub(crate) fn new(catalog: Catalog, cart: CartStore<P>, fallback: BracketFallback) -> Self {
        Self {
            catalog,
            cart,
            fallback,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore<P> {
        &self.cart
    }

    pub fn fallback(&self) -> BracketFallback {
        self.fallback
    }

    /// Prices a plan for a company size without changing the cart.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a zero employee count, `PlanNotFound` for an
    /// unknown ID, `Unpriced` when the entry has no usable price.
    pub fn quote(&self, params: &Quote) -> Result<f64> {
        validate_employees(params.employees)?;
        let entry = self.catalog.require(&params.plan_id)?;
        entry
            .price_for(params.employees, self.fallback)
            .ok_or_else(|| ShopError::Unpriced {
                id: entry.id.clone(),
            })
    }

    /// Reports whether a plan can currently be added.
    pub fn availability(&self, params: &Id) -> Result<Availability<'_>> {
        let entry = self.catalog.require(&params.id)?;
        Ok(evaluate(&self.catalog, entry, &self.cart))
    }

    /// Lists every catalog entry with its price and availability.
    pub fn plan_options(&self, params: &ListPlanOptions) -> PlanOptions {
        let options = self
            .catalog
            .entries()
            .iter()
            .map(|entry| {
                let mut option = PlanOption::from_entry(entry);
                option.employees = params.employees;
                option.price = params
                    .employees
                    .and_then(|n| entry.price_for(n, self.fallback));
                option.in_cart = self.cart.is_plan_selected(&entry.title);
                option.blocked_by = evaluate(&self.catalog, entry, &self.cart)
                    .blocked_by()
                    .map(|blocker| blocker.title.clone());
                option
            })
            .collect();
        PlanOptions(options)
    }

    /// Adds a plan to the cart if no conflicting plan is present.
    ///
    /// The price is resolved now and stored on the line; later catalog or
    /// employee-count changes do not affect it.
    ///
    /// # Errors
    ///
    /// `ExclusiveConflict` naming the first blocking plan, plus every error
    /// [`Shop::quote`] can return. Storage errors from the cart are passed
    /// through after the line has been added in memory.
    pub fn select_plan(&mut self, params: &SelectPlan) -> Result<PlanSelection> {
        validate_employees(params.employees)?;
        let entry = self.catalog.require(&params.plan_id)?;

        if let Availability::Disabled { blocked_by } = evaluate(&self.catalog, entry, &self.cart) {
            return Err(ShopError::ExclusiveConflict {
                plan: entry.title.clone(),
                blocked_by: blocked_by.title.clone(),
            });
        }

        let price = entry
            .price_for(params.employees, self.fallback)
            .ok_or_else(|| ShopError::Unpriced {
                id: entry.id.clone(),
            })?;

        let selection = PlanSelection::new(entry.title.clone(), params.employees, price);
        self.cart.add_to_cart(selection.clone())?;
        info!(
            "Selected '{}' for {} employees at {}",
            selection.plan_title, selection.number_of_employees, selection.price
        );
        Ok(selection)
    }

    /// Removes a cart line; out-of-range positions are ignored.
    pub fn remove_line(&mut self, params: &RemoveLine) -> Result<Option<PlanSelection>> {
        self.cart.remove_from_cart(params.index)
    }

    pub fn clear_cart(&mut self) -> Result<()> {
        self.cart.clear_cart()
    }

    /// Hands the cart over for checkout and clears it.
    pub fn checkout(&mut self) -> Result<CheckoutRequest> {
        let request = self.cart.checkout()?;
        info!(
            "Checked out {} item(s) totalling {}",
            request.total_items, request.total_price
        );
        Ok(request)
    }
}

fn validate_employees(employees: u32) -> Result<()> {
    if employees == 0 {
        return Err(ShopError::invalid_input("employees")
            .with_reason("Employee count must be a positive integer"));
    }
    Ok(())
}
