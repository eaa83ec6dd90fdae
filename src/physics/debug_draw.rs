use bevy::prelude::*;
use bevy_rapier2d::render::{DebugRenderContext, DebugRenderMode};

/// Physics debug visualization, cycled with the space bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DebugDrawMode {
    #[default]
    None,
    Contact,
    Shape,
    All,
}

impl DebugDrawMode {
    pub const CYCLE: [DebugDrawMode; 4] = [
        DebugDrawMode::None,
        DebugDrawMode::Contact,
        DebugDrawMode::Shape,
        DebugDrawMode::All,
    ];

    pub fn index(self) -> usize {
        match self {
            DebugDrawMode::None => 0,
            DebugDrawMode::Contact => 1,
            DebugDrawMode::Shape => 2,
            DebugDrawMode::All => 3,
        }
    }

    pub fn from_index(i: usize) -> Self {
        Self::CYCLE[i % Self::CYCLE.len()]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Overlay mask for the Rapier debug renderer; `None` means the renderer is off.
    pub fn render_mask(self) -> Option<DebugRenderMode> {
        match self {
            DebugDrawMode::None => None,
            DebugDrawMode::Contact => Some(DebugRenderMode::CONTACTS),
            DebugDrawMode::Shape => Some(DebugRenderMode::COLLIDER_SHAPES),
            DebugDrawMode::All => Some(DebugRenderMode::all()),
        }
    }
}

/// Mirror the scene's debug-draw mode into Rapier's debug renderer.
pub fn apply_debug_draw_mask(
    state: Res<crate::gameplay::scene::SceneState>,
    ctx: Option<ResMut<DebugRenderContext>>,
) {
    let Some(mut ctx) = ctx else {
        return;
    };
    push_mask(state.debug_draw, &mut ctx);
}

fn push_mask(mode: DebugDrawMode, ctx: &mut DebugRenderContext) {
    match mode.render_mask() {
        None => {
            if ctx.enabled {
                ctx.enabled = false;
            }
        }
        Some(mask) => {
            if !ctx.enabled {
                ctx.enabled = true;
            }
            if ctx.pipeline.mode != mask {
                ctx.pipeline.mode = mask;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_after_four_steps() {
        let mut m = DebugDrawMode::default();
        let mut seen = Vec::new();
        for _ in 0..8 {
            m = m.next();
            seen.push(m);
        }
        use DebugDrawMode::*;
        assert_eq!(seen, vec![Contact, Shape, All, None, Contact, Shape, All, None]);
    }

    #[test]
    fn n_steps_equals_n_mod_four() {
        for n in 0..23usize {
            let mut m = DebugDrawMode::None;
            for _ in 0..n {
                m = m.next();
            }
            assert_eq!(m, DebugDrawMode::from_index(n % 4), "after {n} steps");
        }
    }

    #[test]
    fn masks_select_expected_overlays() {
        assert!(DebugDrawMode::None.render_mask().is_none());
        let contact = DebugDrawMode::Contact.render_mask().unwrap();
        assert!(contact.contains(DebugRenderMode::CONTACTS));
        assert!(!contact.contains(DebugRenderMode::COLLIDER_SHAPES));
        let shape = DebugDrawMode::Shape.render_mask().unwrap();
        assert!(shape.contains(DebugRenderMode::COLLIDER_SHAPES));
        assert!(!shape.contains(DebugRenderMode::CONTACTS));
        let all = DebugDrawMode::All.render_mask().unwrap();
        assert!(all.contains(contact | shape));
    }
}
