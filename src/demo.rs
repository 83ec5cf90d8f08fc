//! Runnable walkthroughs of each pattern. Every demo writes to the writer it
//! is given, so the binary passes stdout and tests pass a `Vec<u8>`.

use std::io::{BufRead, Write};
use std::rc::Rc;

use colored::Colorize;
use tracing::info;

use crate::config::{BuilderSection, DecoratorSection, DemoConfig, FactorySection};
use crate::creational::builder::{HouseHandle, SharedHouseDirector, UniqueHouseDirector};
use crate::creational::factory::TransportFactory;
use crate::error::{PatternError, Result};
use crate::structural::decorator::{
    decorate, ConcreteNotifier, FacebookDecorator, Notifier, SlackDecorator, SmsDecorator,
};

fn heading(out: &mut dyn Write, title: &str) -> Result<()> {
    writeln!(out, "{}", format!("=== {title} ===").bold().cyan())?;
    Ok(())
}

// =============================================================================
// Builder
// =============================================================================

/// `A` through `Z`, then the 1-based position once letters run out.
fn director_label(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        (index + 1).to_string()
    }
}

pub fn run_builder(config: &BuilderSection, out: &mut dyn Write) -> Result<()> {
    info!(demo = "builder", "starting");

    heading(out, "Unique Director")?;
    let mut unique = UniqueHouseDirector::new();
    unique.set_builder(config.unique_style.builder());
    let house = unique.construct()?;
    writeln!(out, "House1 => {}", house.borrow())?;

    writeln!(out)?;
    heading(out, "Shared Directors")?;
    let builder = config.shared_style.shared_builder();
    let directors: Vec<SharedHouseDirector> = (0..config.shared_directors)
        .map(|_| SharedHouseDirector::with_builder(Rc::clone(&builder)))
        .collect();
    writeln!(
        out,
        "{} directors share one {} builder (strong count {})",
        directors.len(),
        config.shared_style,
        Rc::strong_count(&builder)
    )?;

    let mut first: Option<HouseHandle> = None;
    for (index, director) in directors.iter().enumerate() {
        let house = director.construct()?;
        writeln!(out, "House{} => {}", director_label(index), house.borrow())?;
        match first.as_ref().map(|first| Rc::ptr_eq(first, &house)) {
            Some(same) => writeln!(out, "  same house as HouseA: {same}")?,
            None => first = Some(house),
        }
    }
    Ok(())
}

// =============================================================================
// Factory
// =============================================================================

pub fn run_factory(config: &FactorySection, out: &mut dyn Write) -> Result<()> {
    info!(demo = "factory", requests = config.requests.len(), "starting");

    heading(out, "Transport Factory")?;
    for kind in &config.requests {
        match TransportFactory::create_transport(kind) {
            Ok(transport) => transport.deliver(out)?,
            Err(err) if err.is_unknown_discriminator() => {
                writeln!(out, "{} {err}", "Exception caught:".red())?;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// Prompts for a transport name and returns the first word typed.
pub fn read_transport_kind(input: &mut dyn BufRead, out: &mut dyn Write) -> Result<String> {
    write!(out, "Enter transport type (truck/ship): ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.split_whitespace().next().unwrap_or_default().to_string())
}

/// Delivers with one transport. Unknown names come back as an error for the
/// caller to report.
pub fn run_deliver(kind: &str, out: &mut dyn Write) -> Result<()> {
    TransportFactory::create_transport(kind)?.deliver(out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Delivered,
    InvalidType,
}

impl DeliveryStatus {
    /// Process exit status for the `deliver` command.
    pub fn exit_code(self) -> u8 {
        match self {
            DeliveryStatus::Delivered => 0,
            DeliveryStatus::InvalidType => 1,
        }
    }
}

/// Like [`run_deliver`], but reports an unknown name on `out` as
/// `Invalid transport type!` instead of returning it.
pub fn deliver(kind: &str, out: &mut dyn Write) -> Result<DeliveryStatus> {
    match run_deliver(kind, out) {
        Ok(()) => Ok(DeliveryStatus::Delivered),
        Err(PatternError::UnknownTransport { .. }) => {
            writeln!(out, "{}", "Invalid transport type!".red())?;
            Ok(DeliveryStatus::InvalidType)
        }
        Err(err) => Err(err),
    }
}

// =============================================================================
// Decorator
// =============================================================================

fn report_handles(out: &mut dyn Write, name: &str, count: usize) -> Result<()> {
    writeln!(out, "{}", format!("{name} handles: {count}").dimmed())?;
    writeln!(out)?;
    Ok(())
}

pub fn run_decorator(config: &DecoratorSection, out: &mut dyn Write) -> Result<()> {
    info!(demo = "decorator", layers = config.layers.len(), "starting");

    heading(out, "Growing The Chain")?;
    let base = Rc::new(ConcreteNotifier::new());
    base.send("Base Notifier", out)?;
    report_handles(out, "base", Rc::strong_count(&base))?;

    let sms = Rc::new(SmsDecorator::new(base.clone()));
    sms.send("SMS Notifier", out)?;
    report_handles(out, "base", Rc::strong_count(&base))?;

    let facebook = Rc::new(FacebookDecorator::new(sms.clone()));
    facebook.send("Facebook Notifier", out)?;
    report_handles(out, "sms", Rc::strong_count(&sms))?;

    let slack = Rc::new(SlackDecorator::new(facebook.clone()));
    slack.send("Slack Notifier", out)?;
    report_handles(out, "facebook", Rc::strong_count(&facebook))?;

    heading(out, "Configured Chain")?;
    let names: Vec<&str> = config.layers.iter().map(|layer| layer.name()).collect();
    writeln!(out, "layers: base -> {}", names.join(" -> "))?;
    let chain = decorate(base.clone(), &config.layers);
    chain.send(&config.message, out)?;
    Ok(())
}

pub fn run_all(config: &DemoConfig, out: &mut dyn Write) -> Result<()> {
    run_builder(&config.builder, out)?;
    writeln!(out)?;
    run_factory(&config.factory, out)?;
    writeln!(out)?;
    run_decorator(&config.decorator, out)
}
