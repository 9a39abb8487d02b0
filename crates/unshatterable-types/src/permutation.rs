use serde_json::{json, Map, Value};

use crate::component::ComponentStore;
use crate::fields::{
    Breathability, Collision, EventTarget, Flammable, MaterialInstance, Number, OnTick,
    RandomTicking, Ticking,
};

/// A cluster of component overrides applied to a block.
///
/// Used both as a block's unconditional state and as the body of a
/// condition-selected permutation. Every setter funnels into
/// [`Permutation::upsert`], so re-setting a component overwrites it in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Permutation {
    components: ComponentStore,
}

impl Permutation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a component and return the permutation for chaining.
    pub fn upsert(mut self, identifier: impl Into<String>, data: impl Into<Value>) -> Self {
        self.components.upsert(identifier, data);
        self
    }

    /// In-place variant of [`Permutation::upsert`].
    pub fn set_component(
        &mut self,
        identifier: impl Into<String>,
        data: impl Into<Value>,
    ) -> &mut Self {
        self.components.upsert(identifier, data);
        self
    }

    pub fn components(&self) -> &ComponentStore {
        &self.components
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    // ---- Built-in components ----

    /// Light levels absorbed, rounded and clamped to 0..=15.
    pub fn light_absorption(self, level: impl Into<f64>) -> Self {
        let level = level.into().round().clamp(0.0, 15.0) as u8;
        self.upsert("minecraft:block_light_absorption", level)
    }

    /// Light emitted as a fraction clamped to 0.0..=1.0.
    pub fn light_emission(self, level: impl Into<f64>) -> Self {
        let level = level.into().clamp(0.0, 1.0);
        self.upsert("minecraft:block_light_emission", json!(Number(level)))
    }

    pub fn break_on_push(self, breaks: bool) -> Self {
        self.upsert("minecraft:breakonpush", breaks)
    }

    pub fn breathability(self, value: Breathability) -> Self {
        self.upsert("minecraft:breathability", json!(value))
    }

    /// Display name key, conventionally `tile.<name>.name`.
    pub fn display_name(self, name: impl Into<String>) -> Self {
        self.upsert("minecraft:display_name", name.into())
    }

    pub fn entity_collision(self, collision: Collision) -> Self {
        self.upsert("minecraft:entity_collision", json!(collision))
    }

    pub fn explosion_resistance(self, resistance: f64) -> Self {
        self.upsert("minecraft:explosion_resistance", json!(Number(resistance)))
    }

    pub fn flammable(self, burn_odds: u32, flame_odds: u32) -> Self {
        let flammable = Flammable {
            burn_odds,
            flame_odds,
        };
        self.upsert("minecraft:flammable", json!(flammable))
    }

    /// Movement friction; lower is slower.
    pub fn friction(self, friction: f64) -> Self {
        self.upsert("minecraft:friction", json!(Number(friction)))
    }

    pub fn geometry(self, geometry: impl Into<String>) -> Self {
        self.upsert("minecraft:geometry", geometry.into())
    }

    pub fn immovable(self, immovable: bool) -> Self {
        self.upsert("minecraft:immovable", immovable)
    }

    /// Map color as a hex string.
    pub fn map_color(self, color: impl Into<String>) -> Self {
        self.upsert("minecraft:map_color", color.into())
    }

    /// Per-face materials keyed by face name (`*`, `up`, `down`, `north`, ...).
    pub fn material_instances<K, I>(self, instances: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, MaterialInstance)>,
    {
        let faces: Map<String, Value> = instances
            .into_iter()
            .map(|(face, instance)| (face.into(), json!(instance)))
            .collect();
        self.upsert("minecraft:material_instances", json!(faces))
    }

    pub fn only_piston_push(self, only: bool) -> Self {
        self.upsert("minecraft:onlypistonpush", only)
    }

    pub fn pick_collision(self, collision: Collision) -> Self {
        self.upsert("minecraft:pick_collision", json!(collision))
    }

    /// Placement filter conditions, stored verbatim.
    pub fn placement_filter(self, filter: Value) -> Self {
        self.upsert("minecraft:placement_filter", filter)
    }

    pub fn prevents_jumping(self, prevents: bool) -> Self {
        self.upsert("minecraft:preventsjumping", prevents)
    }

    pub fn random_ticking_raw(self, value: Value) -> Self {
        self.upsert("minecraft:random_ticking", value)
    }

    /// Run an event on each random tick.
    pub fn random_ticking(
        self,
        event: Option<&str>,
        target: Option<EventTarget>,
        condition: Option<&str>,
    ) -> Self {
        let random_ticking = RandomTicking {
            on_tick: OnTick::new(event, target, condition),
        };
        self.random_ticking_raw(json!(random_ticking))
    }

    /// Rotation in x-y-z order, in degrees.
    pub fn rotation(self, rotation: [f64; 3]) -> Self {
        self.upsert("minecraft:rotation", json!(rotation.map(Number)))
    }

    pub fn ticking_raw(self, value: Value) -> Self {
        self.upsert("minecraft:ticking", value)
    }

    /// Run an event after a delay picked from `range` seconds.
    pub fn ticking(
        self,
        range: [f64; 2],
        looping: Option<bool>,
        event: Option<&str>,
        target: Option<EventTarget>,
        condition: Option<&str>,
    ) -> Self {
        let ticking = Ticking {
            range,
            looping,
            on_tick: OnTick::new(event, target, condition),
        };
        self.ticking_raw(json!(ticking))
    }

    /// Use the standard full-block geometry.
    pub fn unit_cube(self) -> Self {
        self.upsert("minecraft:unit_cube", json!({}))
    }

    pub fn unwalkable(self, unwalkable: bool) -> Self {
        self.upsert("minecraft:unwalkable", unwalkable)
    }
}
