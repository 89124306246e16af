//! The watchface state and its event handlers

use resistor_hal::{ConnectionVibes, SettingsStore, TickTimer, TickUnit};
use resistor_protocol::{ConfigMessage, TapEvent};

use super::events::{Effects, Event, RedrawPolicy};
use crate::beat::beat_time;
use crate::compose::{compose_frame, DisplayGeometry, Frame};
use crate::config::{Setting, Settings};
use crate::label::{LabelState, LowerLabel};
use crate::skin::SkinSelector;
use crate::time::TimeSample;

/// Application state
pub struct Watchface<S: SettingsStore> {
    store: S,
    settings: Settings,
    skin: SkinSelector,
    labels: LabelState,
    time: TimeSample,
    dirty: bool,
    policy: RedrawPolicy,
}

impl<S: SettingsStore> Watchface<S> {
    /// Load settings from `store` and start at `now`
    ///
    /// The face starts dirty so the first frame is drawn.
    pub fn new(mut store: S, now: TimeSample) -> Self {
        let settings = Settings::load(&mut store);

        #[cfg(feature = "defmt")]
        defmt::info!("watchface started with {}", settings);

        Self {
            skin: SkinSelector::new(settings.behavior.skin_mode),
            store,
            settings,
            labels: LabelState::new(),
            time: now,
            dirty: true,
            policy: RedrawPolicy::default(),
        }
    }

    /// Use a different redraw policy
    pub fn with_policy(mut self, policy: RedrawPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn skin(&self) -> &SkinSelector {
        &self.skin
    }

    pub fn labels(&self) -> &LabelState {
        &self.labels
    }

    /// Time of the last tick
    pub fn time(&self) -> &TimeSample {
        &self.time
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. to simulate a restart
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn policy(&self) -> RedrawPolicy {
        self.policy
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning its previous value
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    /// Force a redraw, e.g. after the drawable area changed
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Tick granularity the current settings need
    ///
    /// Minute ticks are enough only when nothing on screen changes within a
    /// minute.
    pub fn tick_unit(&self) -> TickUnit {
        let behavior = &self.settings.behavior;
        if behavior.skin_mode.is_cycling() || behavior.lower_label.needs_seconds() {
            TickUnit::Second
        } else {
            TickUnit::Minute
        }
    }

    /// What the lower label shows right now
    pub fn lower_label(&self) -> LowerLabel {
        self.settings
            .behavior
            .lower_label
            .select(self.time.second, &self.labels)
    }

    /// Handle any event
    pub fn handle(&mut self, event: Event) -> Effects {
        match event {
            Event::Tick(time) => self.on_tick(time),
            Event::Tap(tap) => self.on_tap(tap),
            Event::Config(message) => self.on_message(&message),
        }
    }

    /// Handle a clock tick
    pub fn on_tick(&mut self, time: TimeSample) -> Effects {
        let previous = core::mem::replace(&mut self.time, time);
        let skin_changed = self.skin.on_tick(time.second);

        if skin_changed {
            #[cfg(feature = "defmt")]
            defmt::debug!("skin -> {}", self.skin.active());
        }

        let redraw = match self.policy {
            RedrawPolicy::EveryTick => true,
            RedrawPolicy::OnChange => {
                let mode = self.settings.behavior.lower_label;
                let beats_shown = self.lower_label() == LowerLabel::Beats;
                skin_changed
                    || time.minute_changed(&previous)
                    || mode.is_boundary(time.second)
                    || (beats_shown && beat_time(time.utc_seconds) != beat_time(previous.utc_seconds))
            }
        };

        if redraw {
            self.dirty = true;
            Effects::redraw()
        } else {
            Effects::none()
        }
    }

    /// Handle a wrist tap
    pub fn on_tap(&mut self, _tap: TapEvent) -> Effects {
        if self.labels.on_tap(self.settings.behavior.lower_label) {
            self.dirty = true;
            Effects::redraw()
        } else {
            Effects::none()
        }
    }

    /// Handle a companion settings message
    ///
    /// Every recognized, valid value is applied and persisted. Unknown keys
    /// and invalid values are skipped.
    pub fn on_message(&mut self, message: &ConfigMessage) -> Effects {
        let unit_before = self.tick_unit();
        let mut effects = Effects::none();

        for update in message.updates() {
            let Some(setting) = self.settings.apply(update, &mut self.store) else {
                continue;
            };

            match setting {
                Setting::Vibes(policy) => effects.vibes = Some(policy),
                Setting::Skin(mode) => self.skin.set_mode(mode),
                Setting::LowerLabel(_) => self.labels.reset(),
                Setting::Background(_) | Setting::Silkscreen(_) => {}
            }

            if setting.affects_rendering() {
                effects.redraw = true;
            }
        }

        let unit = self.tick_unit();
        if unit != unit_before {
            effects.tick_unit = Some(unit);
        }
        if effects.redraw {
            self.dirty = true;
        }
        effects
    }

    /// Compose the current frame
    ///
    /// Has no side effects; the dirty flag is left alone.
    pub fn compose(&self, geometry: &DisplayGeometry) -> Frame {
        compose_frame(&self.time, &self.settings, &self.skin, &self.labels, geometry)
    }
}

/// Subscribe to ticks and apply the vibration policy for the loaded settings
pub fn start<S, V, T>(face: &Watchface<S>, vibes: &mut V, timer: &mut T)
where
    S: SettingsStore,
    V: ConnectionVibes,
    T: TickTimer,
{
    timer.subscribe(face.tick_unit());
    vibes.set_policy(face.settings().behavior.vibes);
}

/// Handle one event and apply its side effects
///
/// Returns true if the display needs a new frame.
pub fn dispatch<S, V, T>(face: &mut Watchface<S>, event: Event, vibes: &mut V, timer: &mut T) -> bool
where
    S: SettingsStore,
    V: ConnectionVibes,
    T: TickTimer,
{
    let effects = face.handle(event);
    if let Some(policy) = effects.vibes {
        vibes.set_policy(policy);
    }
    if let Some(unit) = effects.tick_unit {
        #[cfg(feature = "defmt")]
        defmt::debug!("resubscribing ticks every {}", unit);
        timer.subscribe(unit);
    }
    face.is_dirty()
}
