#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::rigid_body::{Body, Vec2};
use crate::voice::SoundEvent;

use super::collision::{contact, resolve};
use super::wrap::wrap_position;

/// Per-step tuning, taken from the world settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepParams {
    pub gravity: Vec2,
    /// Multiplier applied to gravity each frame
    pub gravity_scale: f32,
    /// Speed clamp, pixels per frame
    pub max_speed: f32,
    /// Contacts slower than this stay silent
    pub min_sound_velocity: f32,
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, 1.0),
            gravity_scale: 0.25,
            max_speed: 40.0,
            min_sound_velocity: 0.5,
        }
    }
}

/// What one step did (feeds perf stats)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepCounts {
    pub integrated: u32,
    pub contacts: u32,
    pub sound_events: u32,
}

/// Manages all placed bodies, in placement order
pub struct BodySystem {
    bodies: Vec<Body>,
    next_id: u32,
}

impl BodySystem {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    /// Insert a body and return its id
    pub fn add(&mut self, mut body: Body) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        body.id = id;
        self.bodies.push(body);
        id
    }

    /// Remove the most recently placed body
    pub fn undo(&mut self) -> Option<u32> {
        self.bodies.pop().map(|b| b.id)
    }

    pub fn remove(&mut self, id: u32) -> bool {
        match self.bodies.iter().position(|b| b.id == id) {
            Some(idx) => {
                self.bodies.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
        self.next_id = 1;
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Main update loop
    pub fn update(&mut self, params: &StepParams, events: &mut Vec<SoundEvent>) -> StepCounts {
        let mut counts = StepCounts::default();
        let before = events.len();

        counts.integrated = self.integrate(params);

        for body in self.bodies.iter_mut() {
            if body.is_static {
                continue;
            }
            if let Some(next) = wrap_position(body.pos, body.aabb(), &body.wrap) {
                body.pos = next;
            }
        }

        counts.contacts = self.collide(params, events);
        self.update_clouds(events);

        counts.sound_events = (events.len() - before) as u32;
        counts
    }

    fn integrate(&mut self, params: &StepParams) -> u32 {
        #[cfg(feature = "parallel")]
        {
            self.bodies
                .par_iter_mut()
                .map(|body| integrate_body(body, params) as u32)
                .sum()
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.bodies
                .iter_mut()
                .map(|body| integrate_body(body, params) as u32)
                .sum()
        }
    }

    fn collide(&mut self, params: &StepParams, events: &mut Vec<SoundEvent>) -> u32 {
        let mut contacts = 0u32;
        let n = self.bodies.len();

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = pair_mut(&mut self.bodies, i, j);
                if a.is_static && b.is_static {
                    continue;
                }
                if a.sensor || b.sensor {
                    continue;
                }
                let Some(c) = contact(a, b) else {
                    continue;
                };
                contacts += 1;

                let speed = resolve(a, b, &c);
                if speed > params.min_sound_velocity {
                    events.extend(a.voice.trigger(a.id, a.pitch, speed));
                    events.extend(b.voice.trigger(b.id, b.pitch, speed));
                }
            }
        }

        contacts
    }

    /// Clouds sound once when something enters and reset when empty.
    fn update_clouds(&mut self, events: &mut Vec<SoundEvent>) {
        for i in 0..self.bodies.len() {
            if !self.bodies[i].cloud {
                continue;
            }
            let cloud_box = self.bodies[i].aabb();
            let entering = self
                .bodies
                .iter()
                .enumerate()
                .filter(|(j, other)| *j != i && !other.sensor)
                .find(|(_, other)| other.aabb().overlaps(&cloud_box))
                .map(|(_, other)| other.velocity.length());

            let cloud = &mut self.bodies[i];
            match entering {
                Some(speed) if !cloud.is_sounding => {
                    cloud.is_sounding = true;
                    events.extend(cloud.voice.trigger(cloud.id, cloud.pitch, speed));
                }
                Some(_) => {}
                None => cloud.is_sounding = false,
            }
        }
    }
}

impl Default for BodySystem {
    fn default() -> Self {
        Self::new()
    }
}

fn integrate_body(body: &mut Body, params: &StepParams) -> bool {
    if body.is_static {
        return false;
    }

    // Damp last frame's velocity, then accelerate; friction 1 still falls.
    body.velocity = body.velocity * (1.0 - body.air_friction).clamp(0.0, 1.0);
    body.velocity += params.gravity * params.gravity_scale;
    body.velocity = body.velocity.clamp_length(params.max_speed);
    body.pos += body.velocity;
    true
}

/// Two distinct mutable bodies, `i < j`
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

#[cfg(test)]
#[path = "../tests/body_system_tests.rs"]
mod tests;
