//! Listed option book
//!
//! In-memory register of exchange-listed commodity options. Listings are
//! validated on entry and can be seeded from a JSON file.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::contract_month::{last_trading_day, Commodity, ContractMonth};
use crate::core::{parse_option_type, Black76Error, Black76Result, Field, OptionType};

/// Request to list a new option, as received from a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRequest {
    pub commodity: String,
    /// Futures contract month, e.g. "Mar24"
    pub expires_on: String,
    pub strike_price: f64,
    pub option_type: String,
    /// Defaults to the commodity's usual unit when absent
    #[serde(default)]
    pub unit_of_measure: Option<String>,
}

/// A validated, listed option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListedOption {
    pub id: u64,
    pub commodity: Commodity,
    /// Futures contract month code
    pub expires_on: String,
    pub strike_price: f64,
    pub option_type: OptionType,
    pub unit_of_measure: String,
    /// Option expiry derived from the contract month
    pub expiration_date: NaiveDate,
}

impl ListedOption {
    /// Validate a listing request against the valuation date `as_of`
    pub fn from_request(id: u64, request: &ListingRequest, as_of: NaiveDate) -> Black76Result<Self> {
        let commodity: Commodity = request.commodity.parse()?;
        let option_type = parse_option_type(&request.option_type)?;

        if !(request.strike_price > 0.0 && request.strike_price.is_finite()) {
            return Err(Black76Error::invalid(
                Field::Strike,
                format!("strike price must be > 0, got {}", request.strike_price),
            ));
        }

        let month: ContractMonth = request.expires_on.parse()?;
        let expiration_date = last_trading_day(commodity, month)?;
        if expiration_date <= as_of {
            return Err(Black76Error::market(format!(
                "Option on {} {} expired on {}, valuation date is {}",
                commodity, month, expiration_date, as_of
            )));
        }

        Ok(Self {
            id,
            commodity,
            expires_on: month.to_string(),
            strike_price: request.strike_price,
            option_type,
            unit_of_measure: request
                .unit_of_measure
                .clone()
                .unwrap_or_else(|| commodity.unit_of_measure().to_string()),
            expiration_date,
        })
    }

    /// Years from `as_of` to expiry on an Actual/`basis` count, floored at 0
    pub fn time_to_expiry(&self, as_of: NaiveDate, basis: f64) -> f64 {
        let days = (self.expiration_date - as_of).num_days();
        days.max(0) as f64 / basis
    }
}

/// Collection of listed options with sequential ids
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionBook {
    options: Vec<ListedOption>,
    next_id: u64,
}

impl OptionBook {
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            next_id: 1,
        }
    }

    /// Validate and list a new option
    pub fn add(&mut self, request: &ListingRequest, as_of: NaiveDate) -> Black76Result<&ListedOption> {
        let option = ListedOption::from_request(self.next_id, request, as_of)?;
        self.next_id += 1;
        self.options.push(option);
        Ok(&self.options[self.options.len() - 1])
    }

    pub fn get(&self, id: u64) -> Option<&ListedOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Page through listings in id order
    pub fn list(&self, skip: usize, limit: usize) -> &[ListedOption] {
        let start = skip.min(self.options.len());
        let end = start.saturating_add(limit).min(self.options.len());
        &self.options[start..end]
    }

    pub fn by_commodity(&self, commodity: Commodity) -> Vec<&ListedOption> {
        self.options.iter().filter(|o| o.commodity == commodity).collect()
    }

    pub fn remove(&mut self, id: u64) -> Option<ListedOption> {
        let index = self.options.iter().position(|o| o.id == id)?;
        Some(self.options.remove(index))
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Build a book from listing requests, stopping at the first invalid one
    pub fn from_requests(requests: &[ListingRequest], as_of: NaiveDate) -> Black76Result<Self> {
        let mut book = Self::new();
        for request in requests {
            book.add(request, as_of)?;
        }
        Ok(book)
    }

    /// Load a JSON array of listing requests
    pub fn from_json_file(path: impl AsRef<Path>, as_of: NaiveDate) -> Black76Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let requests: Vec<ListingRequest> = serde_json::from_str(&json)?;
        let book = Self::from_requests(&requests, as_of)?;
        tracing::info!("Loaded {} listed options from {:?}", book.len(), path);
        Ok(book)
    }
}

impl Default for OptionBook {
    fn default() -> Self {
        Self::new()
    }
}
