//! Builder pattern: concrete builders assemble a [`House`] step by step, and a
//! director fixes the order of those steps.
//!
//! The director comes in two ownership flavours, picked at the type level:
//! [`UniqueHouseDirector`] moves a `Box<dyn HouseBuilder>` in, while
//! [`SharedHouseDirector`] holds an `Rc<dyn HouseBuilder>` that other directors
//! may hold too.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;
use std::str::FromStr;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{PatternError, Result};

// =============================================================================
// Product
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct House {
    walls: String,
    doors: String,
    windows: String,
    roof: String,
    garage: String,
}

impl House {
    pub fn build_walls(&mut self, walls: impl Into<String>) {
        self.walls = walls.into();
    }

    pub fn build_doors(&mut self, doors: impl Into<String>) {
        self.doors = doors.into();
    }

    pub fn build_windows(&mut self, windows: impl Into<String>) {
        self.windows = windows.into();
    }

    pub fn build_roof(&mut self, roof: impl Into<String>) {
        self.roof = roof.into();
    }

    pub fn build_garage(&mut self, garage: impl Into<String>) {
        self.garage = garage.into();
    }

    pub fn summary(&self) -> String {
        format!(
            "This house has {} walls, {} doors, {} windows, {} roof, and {} garage.",
            self.walls, self.doors, self.windows, self.roof, self.garage
        )
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Shared handle to the house a builder is working on.
pub type HouseHandle = Rc<RefCell<House>>;

// =============================================================================
// Builders
// =============================================================================

/// Steps take `&self`: the builder writes through its [`HouseHandle`], so the
/// same builder can sit behind an `Rc` and still be driven by any holder.
pub trait HouseBuilder {
    fn style(&self) -> HouseStyle;
    fn build_walls(&self);
    fn build_doors(&self);
    fn build_windows(&self);
    fn build_roof(&self);
    fn build_garage(&self);
    fn result(&self) -> HouseHandle;
}

#[derive(Debug, Default)]
pub struct WoodenHouseBuilder {
    house: HouseHandle,
}

impl WoodenHouseBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HouseBuilder for WoodenHouseBuilder {
    fn style(&self) -> HouseStyle {
        HouseStyle::Wooden
    }

    fn build_walls(&self) {
        self.house.borrow_mut().build_walls("Wooden");
    }

    fn build_doors(&self) {
        self.house.borrow_mut().build_doors("Wooden");
    }

    fn build_windows(&self) {
        self.house.borrow_mut().build_windows("Glass");
    }

    fn build_roof(&self) {
        self.house.borrow_mut().build_roof("Metal");
    }

    fn build_garage(&self) {
        self.house.borrow_mut().build_garage("Cobblestone");
    }

    fn result(&self) -> HouseHandle {
        Rc::clone(&self.house)
    }
}

#[derive(Debug, Default)]
pub struct FancyHouseBuilder {
    house: HouseHandle,
}

impl FancyHouseBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HouseBuilder for FancyHouseBuilder {
    fn style(&self) -> HouseStyle {
        HouseStyle::Fancy
    }

    fn build_walls(&self) {
        self.house.borrow_mut().build_walls("Golden");
    }

    fn build_doors(&self) {
        self.house.borrow_mut().build_doors("Platinum");
    }

    fn build_windows(&self) {
        self.house.borrow_mut().build_windows("Diamond");
    }

    fn build_roof(&self) {
        self.house.borrow_mut().build_roof("Ruby");
    }

    fn build_garage(&self) {
        self.house.borrow_mut().build_garage("Emerald");
    }

    fn result(&self) -> HouseHandle {
        Rc::clone(&self.house)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseStyle {
    Wooden,
    Fancy,
}

impl HouseStyle {
    pub const ALL: [HouseStyle; 2] = [HouseStyle::Wooden, HouseStyle::Fancy];

    pub fn name(self) -> &'static str {
        match self {
            HouseStyle::Wooden => "wooden",
            HouseStyle::Fancy => "fancy",
        }
    }

    pub fn builder(self) -> Box<dyn HouseBuilder> {
        match self {
            HouseStyle::Wooden => Box::new(WoodenHouseBuilder::new()),
            HouseStyle::Fancy => Box::new(FancyHouseBuilder::new()),
        }
    }

    pub fn shared_builder(self) -> Rc<dyn HouseBuilder> {
        match self {
            HouseStyle::Wooden => Rc::new(WoodenHouseBuilder::new()),
            HouseStyle::Fancy => Rc::new(FancyHouseBuilder::new()),
        }
    }
}

impl fmt::Display for HouseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseStyle {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        HouseStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| PatternError::UnknownStyle { name: s.to_string() })
    }
}

// =============================================================================
// Director
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Unique,
    Shared,
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ownership::Unique => f.write_str("unique"),
            Ownership::Shared => f.write_str("shared"),
        }
    }
}

/// A smart pointer a director may hold its builder through.
pub trait BuilderOwnership: Deref<Target = dyn HouseBuilder> {
    const OWNERSHIP: Ownership;
}

impl BuilderOwnership for Box<dyn HouseBuilder> {
    const OWNERSHIP: Ownership = Ownership::Unique;
}

impl BuilderOwnership for Rc<dyn HouseBuilder> {
    const OWNERSHIP: Ownership = Ownership::Shared;
}

pub struct HouseDirector<P> {
    builder: Option<P>,
}

pub type UniqueHouseDirector = HouseDirector<Box<dyn HouseBuilder>>;
pub type SharedHouseDirector = HouseDirector<Rc<dyn HouseBuilder>>;

impl<P: BuilderOwnership> HouseDirector<P> {
    pub fn new() -> Self {
        Self { builder: None }
    }

    pub fn with_builder(builder: P) -> Self {
        Self {
            builder: Some(builder),
        }
    }

    /// Replaces the current builder. The director's hold on the previous one is
    /// released here.
    pub fn set_builder(&mut self, builder: P) {
        self.builder = Some(builder);
    }

    pub fn take_builder(&mut self) -> Option<P> {
        self.builder.take()
    }

    pub fn has_builder(&self) -> bool {
        self.builder.is_some()
    }

    pub fn ownership(&self) -> Ownership {
        P::OWNERSHIP
    }

    /// Runs walls, doors, windows, roof, garage against the builder and hands
    /// back its house.
    ///
    /// Fails with [`PatternError::HouseInUse`] while any handle to the
    /// builder's house is borrowed, since every step writes to it.
    pub fn construct(&self) -> Result<HouseHandle> {
        let builder = self
            .builder
            .as_deref()
            .ok_or(PatternError::BuilderNotConfigured {
                ownership: P::OWNERSHIP,
            })?;

        if builder.result().try_borrow_mut().is_err() {
            warn!(style = %builder.style(), "house still borrowed, not constructing");
            return Err(PatternError::HouseInUse);
        }

        debug!(style = %builder.style(), ownership = %P::OWNERSHIP, "building walls");
        builder.build_walls();
        debug!("building doors");
        builder.build_doors();
        debug!("building windows");
        builder.build_windows();
        debug!("building roof");
        builder.build_roof();
        debug!("building garage");
        builder.build_garage();

        let house = builder.result();
        info!(style = %builder.style(), ownership = %P::OWNERSHIP, "house constructed");
        Ok(house)
    }
}

impl<P: BuilderOwnership> Default for HouseDirector<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: BuilderOwnership> fmt::Debug for HouseDirector<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HouseDirector")
            .field("ownership", &P::OWNERSHIP)
            .field("builder", &self.builder.as_deref().map(|b| b.style()))
            .finish()
    }
}
