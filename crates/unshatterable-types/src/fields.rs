//! Typed values for the built-in block components.
//!
//! Each type renders to the exact JSON shape the document format expects for
//! its component; [`Permutation`](crate::Permutation) setters store that
//! rendering through the ordinary upsert path.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Whether entities treat the block as air or as a solid when breathing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Breathability {
    Air,
    #[default]
    Solid,
}

/// Collision box of a block, or no collision at all.
///
/// Serializes as `false` when disabled, otherwise as `{ "origin", "size" }`.
#[derive(Clone, Debug, PartialEq)]
pub enum Collision {
    Disabled,
    Box { origin: [f64; 3], size: [f64; 3] },
}

impl Default for Collision {
    fn default() -> Self {
        Collision::Box {
            origin: [-8.0, 0.0, -8.0],
            size: [16.0, 16.0, 16.0],
        }
    }
}

impl Serialize for Collision {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Collision::Disabled => serializer.serialize_bool(false),
            Collision::Box { origin, size } => {
                let mut state = serializer.serialize_struct("Collision", 2)?;
                state.serialize_field("origin", &origin.map(Number))?;
                state.serialize_field("size", &size.map(Number))?;
                state.end()
            }
        }
    }
}

/// A float written as an integer when it has no fractional part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Number(pub f64);

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_number(&self.0, serializer)
    }
}

pub(crate) fn serialize_number<S: Serializer>(
    value: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn serialize_numbers<S: Serializer, const N: usize>(
    values: &[f64; N],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    values.map(Number).serialize(serializer)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMethod {
    #[default]
    Opaque,
    AlphaTest,
    Blend,
    DoubleSided,
}

/// Texture and render settings for one face (or `*` for all faces).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MaterialInstance {
    pub texture: String,
    pub render_method: RenderMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_dimming: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambient_occlusion: Option<bool>,
}

impl MaterialInstance {
    pub fn new(texture: impl Into<String>, render_method: RenderMethod) -> Self {
        Self {
            texture: texture.into(),
            render_method,
            face_dimming: None,
            ambient_occlusion: None,
        }
    }

    pub fn with_face_dimming(mut self, enabled: bool) -> Self {
        self.face_dimming = Some(enabled);
        self
    }

    pub fn with_ambient_occlusion(mut self, enabled: bool) -> Self {
        self.ambient_occlusion = Some(enabled);
        self
    }
}

/// Entity whose event list an event is looked up in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventTarget {
    #[default]
    #[serde(rename = "self")]
    SelfTarget,
    Other,
    Parent,
    Baby,
    Target,
    Player,
}

/// The `on_tick` trigger shared by the ticking components.
///
/// Unset fields are left out of the rendered object.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OnTick {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<EventTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl OnTick {
    pub fn new(event: Option<&str>, target: Option<EventTarget>, condition: Option<&str>) -> Self {
        Self {
            event: event.map(str::to_string),
            target,
            condition: condition.map(str::to_string),
        }
    }
}

/// Body of the `minecraft:ticking` component.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ticking {
    /// Delay bounds in seconds.
    #[serde(serialize_with = "serialize_numbers")]
    pub range: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub looping: Option<bool>,
    pub on_tick: OnTick,
}

/// Body of the `minecraft:random_ticking` component.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RandomTicking {
    pub on_tick: OnTick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Flammable {
    pub burn_odds: u32,
    pub flame_odds: u32,
}
