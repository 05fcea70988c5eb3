//! ECS components for running processors over a `hecs` world.
//!
//! A host that keeps its meshes as entities attaches [`MeshIn`] to anything a
//! processor should read, then calls [`run_processor`] once per update. The
//! result lands in a [`MeshOut`] component on the same entity.
//!
//! # Example
//!
//! ```
//! use vislab::*;
//!
//! let mut world = World::new();
//! let cube = world.spawn((MeshIn(Mesh::cube()),));
//!
//! let animator = MeshAnimator::new();
//! let produced = run_processor(&mut world, &animator);
//! assert_eq!(produced, 1);
//! assert!(world.get::<&MeshOut>(cube).is_ok());
//! ```

use hecs::{Entity, World};

use crate::mesh::Mesh;
use crate::processor::Processor;

/// Input mesh consumed by a processor.
#[derive(Clone, Debug)]
pub struct MeshIn(pub Mesh);

/// Output mesh published by a processor.
#[derive(Clone, Debug)]
pub struct MeshOut(pub Mesh);

/// Runs `processor` on every entity with a [`MeshIn`].
///
/// Each entity's [`MeshOut`] is inserted or replaced. When the processor
/// produces nothing for an entity, a stale `MeshOut` is removed. Returns the
/// number of outputs produced.
pub fn run_processor<P>(world: &mut World, processor: &P) -> usize
where
    P: Processor<Data = Mesh>,
{
    // Collect first: inserting components while a query borrows the world
    // is not allowed.
    let results: Vec<(Entity, Option<Mesh>)> = world
        .query::<&MeshIn>()
        .iter()
        .map(|(entity, input)| (entity, processor.process(Some(&input.0))))
        .collect();

    let mut produced = 0;
    for (entity, output) in results {
        match output {
            Some(mesh) => {
                // The entity came from the query above, so it still exists.
                let _ = world.insert_one(entity, MeshOut(mesh));
                produced += 1;
            }
            None => {
                let _ = world.remove_one::<MeshOut>(entity);
            }
        }
    }

    log::debug!(
        "{} produced {} mesh(es)",
        processor.info().display_name,
        produced
    );
    produced
}
