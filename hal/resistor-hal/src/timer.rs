//! Tick timer abstraction
//!
//! The platform delivers wall-clock ticks at a subscribed granularity.

/// Tick granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickUnit {
    /// One tick per second
    Second,
    /// One tick per minute (on the minute)
    Minute,
}

/// Tick timer trait
///
/// Subscribing again replaces the previous subscription.
pub trait TickTimer {
    /// Deliver ticks at the given granularity from now on
    fn subscribe(&mut self, unit: TickUnit);
}

