//! Decorator pattern: notifiers wrap other notifiers and add a channel on top.
//!
//! A decorator always forwards to the notifier it wraps before doing its own
//! work, so the innermost channel fires first. Wrappees are shared through
//! `Rc`, and a decorator never lets go of its wrappee or swaps it out.

use std::fmt;
use std::io::Write;
use std::rc::Rc;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::error::{PatternError, Result};

pub trait Notifier {
    /// Short label for the channel this notifier adds.
    fn channel(&self) -> &'static str;

    fn send(&self, message: &str, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteNotifier;

impl ConcreteNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConcreteNotifier {
    fn channel(&self) -> &'static str {
        "Concrete Notifier"
    }

    fn send(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        debug!(channel = self.channel(), "sending");
        writeln!(out, "[Concrete Notifier] Sending: {message}")?;
        Ok(())
    }
}

/// Holds the wrapped notifier and forwards to it.
pub struct BaseDecorator {
    wrappee: Rc<dyn Notifier>,
}

impl BaseDecorator {
    pub fn new(wrappee: Rc<dyn Notifier>) -> Self {
        Self { wrappee }
    }

    pub fn wrappee(&self) -> &Rc<dyn Notifier> {
        &self.wrappee
    }

    fn forward(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        self.wrappee.send(message, out)
    }
}

impl Notifier for BaseDecorator {
    fn channel(&self) -> &'static str {
        self.wrappee.channel()
    }

    fn send(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        self.forward(message, out)
    }
}

impl fmt::Debug for BaseDecorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseDecorator")
            .field("wrappee", &self.wrappee.channel())
            .finish()
    }
}

#[derive(Debug)]
pub struct SmsDecorator {
    base: BaseDecorator,
}

impl SmsDecorator {
    pub fn new(wrappee: Rc<dyn Notifier>) -> Self {
        Self {
            base: BaseDecorator::new(wrappee),
        }
    }

    pub fn wrappee(&self) -> &Rc<dyn Notifier> {
        self.base.wrappee()
    }

    fn send_sms(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "[SMS] Sending: {message}")?;
        Ok(())
    }
}

impl Notifier for SmsDecorator {
    fn channel(&self) -> &'static str {
        "SMS"
    }

    fn send(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        self.base.forward(message, out)?;
        debug!(channel = self.channel(), "sending");
        self.send_sms(message, out)
    }
}

#[derive(Debug)]
pub struct FacebookDecorator {
    base: BaseDecorator,
}

impl FacebookDecorator {
    pub fn new(wrappee: Rc<dyn Notifier>) -> Self {
        Self {
            base: BaseDecorator::new(wrappee),
        }
    }

    pub fn wrappee(&self) -> &Rc<dyn Notifier> {
        self.base.wrappee()
    }

    fn send_facebook(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "[Facebook] Sending: {message}")?;
        Ok(())
    }
}

impl Notifier for FacebookDecorator {
    fn channel(&self) -> &'static str {
        "Facebook"
    }

    fn send(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        self.base.forward(message, out)?;
        debug!(channel = self.channel(), "sending");
        self.send_facebook(message, out)
    }
}

#[derive(Debug)]
pub struct SlackDecorator {
    base: BaseDecorator,
}

impl SlackDecorator {
    pub fn new(wrappee: Rc<dyn Notifier>) -> Self {
        Self {
            base: BaseDecorator::new(wrappee),
        }
    }

    pub fn wrappee(&self) -> &Rc<dyn Notifier> {
        self.base.wrappee()
    }

    fn send_slack(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "[Slack] Sending: {message}")?;
        Ok(())
    }
}

impl Notifier for SlackDecorator {
    fn channel(&self) -> &'static str {
        "Slack"
    }

    fn send(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        self.base.forward(message, out)?;
        debug!(channel = self.channel(), "sending");
        self.send_slack(message, out)
    }
}

// =============================================================================
// Stacking layers by name
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Sms,
    Facebook,
    Slack,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Sms, Layer::Facebook, Layer::Slack];

    pub fn name(self) -> &'static str {
        match self {
            Layer::Sms => "sms",
            Layer::Facebook => "facebook",
            Layer::Slack => "slack",
        }
    }

    pub fn wrap(self, wrappee: Rc<dyn Notifier>) -> Rc<dyn Notifier> {
        match self {
            Layer::Sms => Rc::new(SmsDecorator::new(wrappee)),
            Layer::Facebook => Rc::new(FacebookDecorator::new(wrappee)),
            Layer::Slack => Rc::new(SlackDecorator::new(wrappee)),
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layer {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        Layer::ALL
            .into_iter()
            .find(|layer| layer.name() == s)
            .ok_or_else(|| PatternError::UnknownLayer { name: s.to_string() })
    }
}

/// Wraps `base` in each layer in turn; the last layer ends up outermost.
pub fn decorate(base: Rc<dyn Notifier>, layers: &[Layer]) -> Rc<dyn Notifier> {
    layers
        .iter()
        .fold(base, |notifier, layer| layer.wrap(notifier))
}
