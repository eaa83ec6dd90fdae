//! Timed visual effects (rotate / scale / tint / fade / delay) composed either as a
//! sequence (one after another) or in parallel (all start together).
//!
//! Effects are relative to the entity's state at the moment each effect starts, so a
//! sequence can chain a rotation and a fade without the fade snapping the rotation back.
use std::time::Duration;

use bevy::prelude::*;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Rotate about Z by this many radians (counter-clockwise positive) from the start pose.
    RotateBy(f32),
    /// Scale X/Y uniformly to the target.
    ScaleTo(f32),
    /// Blend the sprite's RGB toward the target; alpha is left alone.
    TintTo(Color),
    /// Blend the sprite's alpha to zero.
    FadeOut,
    Delay,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedEffect {
    pub effect: Effect,
    pub duration: Duration,
}

impl TimedEffect {
    pub fn new(effect: Effect, secs: f32) -> Self {
        Self {
            effect,
            duration: Duration::from_secs_f32(secs.max(0.0)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    Sequence,
    Parallel,
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Pending,
    Running(Baseline),
    Done,
}

#[derive(Debug, Clone, Copy)]
struct Baseline {
    rotation: Quat,
    scale: Vec3,
    color: Srgba,
}

#[derive(Component, Debug, Clone)]
pub struct EffectTrack {
    composition: Composition,
    effects: SmallVec<[TimedEffect; 3]>,
    slots: SmallVec<[Slot; 3]>,
    elapsed: Duration,
}

impl EffectTrack {
    pub fn new(composition: Composition, effects: impl IntoIterator<Item = TimedEffect>) -> Self {
        let effects: SmallVec<[TimedEffect; 3]> = effects.into_iter().collect();
        let slots = effects.iter().map(|_| Slot::Pending).collect();
        Self {
            composition,
            effects,
            slots,
            elapsed: Duration::ZERO,
        }
    }

    pub fn sequence(effects: impl IntoIterator<Item = TimedEffect>) -> Self {
        Self::new(Composition::Sequence, effects)
    }

    pub fn parallel(effects: impl IntoIterator<Item = TimedEffect>) -> Self {
        Self::new(Composition::Parallel, effects)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn effect(&self, i: usize) -> Option<&TimedEffect> {
        self.effects.get(i)
    }

    /// Offset from the track start at which effect `i` begins.
    pub fn start_of(&self, i: usize) -> Duration {
        match self.composition {
            Composition::Parallel => Duration::ZERO,
            Composition::Sequence => self.effects.iter().take(i).map(|e| e.duration).sum(),
        }
    }

    pub fn total_duration(&self) -> Duration {
        match self.composition {
            Composition::Parallel => self.effects.iter().map(|e| e.duration).max().unwrap_or_default(),
            Composition::Sequence => self.effects.iter().map(|e| e.duration).sum(),
        }
    }

    /// Completion of effect `i` in `0..=1` at the current elapsed time.
    pub fn progress(&self, i: usize) -> f32 {
        let Some(e) = self.effects.get(i) else {
            return 0.0;
        };
        let start = self.start_of(i);
        if self.elapsed < start {
            return 0.0;
        }
        if e.duration.is_zero() {
            return 1.0;
        }
        let into = self.elapsed - start;
        (into.as_secs_f32() / e.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.slots.iter().all(|s| matches!(s, Slot::Done))
    }

    /// Advance by `dt` and write the effects into the transform / sprite. Effects are
    /// applied in list order, so in a sequence an effect always reaches completion before
    /// the next one captures its starting state.
    pub fn advance(&mut self, dt: Duration, tf: &mut Transform, mut sprite: Option<&mut Sprite>) {
        if self.is_finished() {
            return;
        }
        self.elapsed += dt;
        for i in 0..self.effects.len() {
            if self.elapsed < self.start_of(i) {
                // Later effects of a sequence start even later.
                if self.composition == Composition::Sequence {
                    break;
                }
                continue;
            }
            let baseline = match self.slots[i] {
                Slot::Done => continue,
                Slot::Running(b) => b,
                Slot::Pending => Baseline {
                    rotation: tf.rotation,
                    scale: tf.scale,
                    color: sprite
                        .as_deref()
                        .map(|s| s.color.to_srgba())
                        .unwrap_or(Srgba::WHITE),
                },
            };
            let p = self.progress(i);
            apply_effect(self.effects[i].effect, &baseline, p, tf, sprite.as_deref_mut());
            self.slots[i] = if p >= 1.0 {
                Slot::Done
            } else {
                Slot::Running(baseline)
            };
        }
    }
}

fn apply_effect(effect: Effect, base: &Baseline, p: f32, tf: &mut Transform, sprite: Option<&mut Sprite>) {
    match effect {
        Effect::RotateBy(angle) => {
            tf.rotation = base.rotation * Quat::from_rotation_z(angle * p);
        }
        Effect::ScaleTo(target) => {
            let x = base.scale.x + (target - base.scale.x) * p;
            let y = base.scale.y + (target - base.scale.y) * p;
            tf.scale = Vec3::new(x, y, base.scale.z);
        }
        Effect::TintTo(target) => {
            if let Some(sprite) = sprite {
                let t = target.to_srgba();
                let cur = sprite.color.to_srgba();
                let lerp = |a: f32, b: f32| a + (b - a) * p;
                sprite.color = Color::srgba(
                    lerp(base.color.red, t.red),
                    lerp(base.color.green, t.green),
                    lerp(base.color.blue, t.blue),
                    cur.alpha,
                );
            }
        }
        Effect::FadeOut => {
            if let Some(sprite) = sprite {
                let alpha = base.color.alpha * (1.0 - p);
                sprite.color = sprite.color.with_alpha(alpha);
            }
        }
        Effect::Delay => {}
    }
}

pub fn advance_effect_tracks(
    time: Res<Time>,
    mut q: Query<(&mut EffectTrack, &mut Transform, Option<&mut Sprite>)>,
) {
    let dt = time.delta();
    if dt.is_zero() {
        return;
    }
    for (mut track, mut tf, sprite) in &mut q {
        if track.is_finished() {
            continue;
        }
        track.advance(dt, &mut tf, sprite.map(|s| s.into_inner()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn sequence_offsets_accumulate() {
        let track = EffectTrack::sequence([
            TimedEffect::new(Effect::RotateBy(TAU), 3.0),
            TimedEffect::new(Effect::FadeOut, 2.0),
        ]);
        assert_eq!(track.start_of(1), Duration::from_secs(3));
        assert_eq!(track.total_duration(), Duration::from_secs(5));
    }

    #[test]
    fn parallel_effects_share_start() {
        let track = EffectTrack::parallel([
            TimedEffect::new(Effect::RotateBy(TAU), 3.0),
            TimedEffect::new(Effect::ScaleTo(1.5), 1.0),
        ]);
        assert_eq!(track.start_of(1), Duration::ZERO);
        assert_eq!(track.total_duration(), Duration::from_secs(3));
    }

    #[test]
    fn boundary_spanning_tick_finishes_previous_effect_first() {
        let mut track = EffectTrack::sequence([
            TimedEffect::new(Effect::RotateBy(TAU * 0.25), 3.0),
            TimedEffect::new(Effect::FadeOut, 2.0),
        ]);
        let mut tf = Transform::default();
        let mut sprite = Sprite::from_color(Color::srgba(0.0, 0.0, 1.0, 0.5), Vec2::ONE);
        track.advance(ms(2900), &mut tf, Some(&mut sprite));
        assert!(track.progress(0) < 1.0);
        assert_eq!(sprite.color.alpha(), 0.5);
        // One tick from 2.9s to 3.5s crosses into the fade.
        track.advance(ms(600), &mut tf, Some(&mut sprite));
        assert_eq!(track.progress(0), 1.0);
        let expected = Quat::from_rotation_z(TAU * 0.25);
        assert!(tf.rotation.angle_between(expected) < 2e-3);
        assert!((track.progress(1) - 0.25).abs() < 1e-5);
        assert!((sprite.color.alpha() - 0.375).abs() < 1e-5);
    }

    #[test]
    fn tint_and_fade_compose_on_separate_channels() {
        let mut track = EffectTrack::parallel([
            TimedEffect::new(Effect::TintTo(Color::srgb(1.0, 1.0, 0.0)), 1.0),
            TimedEffect::new(Effect::FadeOut, 1.0),
        ]);
        let mut tf = Transform::default();
        let mut sprite = Sprite::from_color(Color::srgba(0.0, 0.0, 1.0, 1.0), Vec2::ONE);
        track.advance(ms(500), &mut tf, Some(&mut sprite));
        let c = sprite.color.to_srgba();
        assert!((c.red - 0.5).abs() < 1e-5);
        assert!((c.blue - 0.5).abs() < 1e-5);
        assert!((c.alpha - 0.5).abs() < 1e-5);
        track.advance(ms(500), &mut tf, Some(&mut sprite));
        assert!(track.is_finished());
        let c = sprite.color.to_srgba();
        assert_eq!((c.red, c.green, c.blue, c.alpha), (1.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn scale_to_keeps_depth() {
        let mut track = EffectTrack::parallel([TimedEffect::new(Effect::ScaleTo(1.5), 3.0)]);
        let mut tf = Transform::from_scale(Vec3::new(1.0, 1.0, 1.0));
        track.advance(ms(3000), &mut tf, None);
        assert_eq!(tf.scale, Vec3::new(1.5, 1.5, 1.0));
        assert!(track.is_finished());
    }
}
