//! Central system ordering labels to make the frame sequence explicit.
//! Stages (high-level):
//! 1. PreUpdate: input snapshot collection (edges for this frame)
//! 2. InputReactSet: reactor dispatches spawn / gravity / debug-draw / restart
//! 3. SceneUpdateSet: effects, lifetimes, particles
//! 4. PhysicsSyncSet: push gravity & debug mask into Rapier
//! 5. Rapier step + rendering (handled by plugins)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputCollectSet; // PreUpdate: build InputSnapshot

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputReactSet; // react to this frame's edges

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SceneUpdateSet; // timed effects, lifetimes, particles

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PhysicsSyncSet; // mirror scene state into Rapier resources
