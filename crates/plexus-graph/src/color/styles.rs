//! Committing category colors to the render surface.

use crate::session::GraphSession;
use crate::surface::RenderSurface;

/// Resolve each graph node's category through the session palette and push
/// the result to the surface. Nodes without a category (or with a category
/// the palette has never seen) are reset to the default style.
pub fn apply_styles<S: RenderSurface + ?Sized>(session: &GraphSession, surface: &mut S) {
    for id in session.graph().node_ids() {
        let color = session
            .node_attributes(id)
            .and_then(|attrs| attrs.category.as_deref())
            .and_then(|category| session.palette().get(category));
        surface.set_node_color(id, color);
    }
}
