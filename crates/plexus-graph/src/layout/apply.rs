//! Applying a layout with hierarchical-to-force-directed fallback.

use tracing::{error, warn};

use plexus_core::errors::LayoutError;

use crate::surface::RenderSurface;

use super::types::{LayoutEdge, LayoutEngine, LayoutNode, LayoutOutcome, NodePosition};

/// Run the primary engine and apply its positions; on failure, retry on the
/// fallback engine. Both failing is logged and swallowed: positions stay as
/// they were and the viewer keeps running.
pub fn apply_with_fallback<S: RenderSurface + ?Sized>(
    primary: &dyn LayoutEngine,
    fallback: &dyn LayoutEngine,
    nodes: &[LayoutNode],
    edges: &[LayoutEdge],
    surface: &mut S,
) -> LayoutOutcome {
    match run_engine(primary, nodes, edges, surface) {
        Ok(()) => LayoutOutcome::Primary,
        Err(err) => {
            warn!(engine = primary.name(), error = %err, "layout engine failed, falling back");
            match run_engine(fallback, nodes, edges, surface) {
                Ok(()) => LayoutOutcome::Fallback,
                Err(err) => {
                    error!(engine = fallback.name(), error = %err, "fallback layout failed, keeping positions");
                    LayoutOutcome::Unchanged
                }
            }
        }
    }
}

/// Positions land on the surface only when the engine covered every node.
fn run_engine<S: RenderSurface + ?Sized>(
    engine: &dyn LayoutEngine,
    nodes: &[LayoutNode],
    edges: &[LayoutEdge],
    surface: &mut S,
) -> Result<(), LayoutError> {
    let positions: Vec<NodePosition> = engine.compute(nodes, edges)?;
    if positions.len() < nodes.len() {
        return Err(LayoutError::IncompleteLayout {
            engine: engine.name().to_string(),
            expected: nodes.len(),
            got: positions.len(),
        });
    }
    for position in positions {
        surface.set_position(&position.id, position.x, position.y);
    }
    Ok(())
}
