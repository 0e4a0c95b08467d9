//! The viewer controller: one method per UI trigger.
//!
//! Each trigger runs two separable phases: a pure data transformation
//! (parse, then replace or merge session state), then one render-surface
//! update. The shell owns the event loop and calls in; nothing here blocks
//! or spawns.

use tracing::{debug, info};

use plexus_core::config::ViewerConfig;
use plexus_core::errors::{IngestError, PlexusErrorCode, ViewerError};
use plexus_core::events::{
    EventDispatcher, HighlightAppliedEvent, LoadCompleteEvent, LoadFailedEvent, LoadSource,
    LoadStartedEvent, Message, MessageEvent,
};
use plexus_core::types::EdgeId;

use crate::color::{apply_styles, CategoryPalette};
use crate::ingest::{
    build_edge_graph, merge_node_attributes, IngestMode, IngestStats, NodeMergeStats,
};
use crate::layout::{apply_with_fallback, LayoutEdge, LayoutEngine, LayoutNode, LayoutOutcome};
use crate::presenter::{self, DetailPanel};
use crate::reachability::{reachable_from, HighlightSet};
use crate::session::GraphSession;
use crate::surface::{EdgeDrawAttributes, RenderSurface};

/// The viewer: session state wired to a render surface and layout engines.
pub struct Viewer<S: RenderSurface> {
    session: GraphSession,
    surface: S,
    primary_layout: Box<dyn LayoutEngine>,
    fallback_layout: Box<dyn LayoutEngine>,
    config: ViewerConfig,
    events: EventDispatcher,
    highlighted: Option<HighlightSet>,
}

impl<S: RenderSurface> Viewer<S> {
    /// Create a viewer over a surface and a primary/fallback engine pair.
    pub fn new(
        surface: S,
        primary_layout: Box<dyn LayoutEngine>,
        fallback_layout: Box<dyn LayoutEngine>,
        config: ViewerConfig,
    ) -> Self {
        let palette = CategoryPalette::new(config.effective_palette());
        Self {
            session: GraphSession::new(palette),
            surface,
            primary_layout,
            fallback_layout,
            config,
            events: EventDispatcher::new(),
            highlighted: None,
        }
    }

    /// The session state (graph, metadata, palette).
    pub fn session(&self) -> &GraphSession {
        &self.session
    }

    /// The render surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The viewer configuration.
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Register observers for load, highlight, and message events.
    pub fn events_mut(&mut self) -> &mut EventDispatcher {
        &mut self.events
    }

    /// Load a combined edge+metadata file, replacing the whole graph.
    pub fn load_combined(&mut self, text: &str) -> Result<IngestStats, IngestError> {
        self.load_edges(text, IngestMode::Combined, LoadSource::Combined)
    }

    /// Load a split-mode edge file, replacing the whole graph.
    pub fn load_edge_file(&mut self, text: &str) -> Result<IngestStats, IngestError> {
        self.load_edges(text, IngestMode::EdgeFile, LoadSource::EdgeFile)
    }

    fn load_edges(
        &mut self,
        text: &str,
        mode: IngestMode,
        source: LoadSource,
    ) -> Result<IngestStats, IngestError> {
        self.events.emit_load_started(&LoadStartedEvent { source });

        let build = match build_edge_graph(text, mode, source, &self.events) {
            Ok(build) => build,
            Err(err) => {
                self.report_failure(source, &err);
                return Err(err);
            }
        };

        let stats = build.stats;
        self.highlighted = None;
        self.session.replace_graph(build.graph, build.edge_meta);
        self.sync_surface();
        self.apply_layout();

        info!(nodes = stats.nodes, edges = stats.edges, "graph loaded");
        self.events.emit_load_complete(&LoadCompleteEvent {
            source,
            nodes: stats.nodes,
            edges: stats.edges,
            rows_skipped: stats.rows_skipped,
        });
        self.emit_message(Message::success(format!(
            "Loaded {} nodes and {} edges",
            stats.nodes, stats.edges
        )));
        Ok(stats)
    }

    /// Merge a node-attribute file. Never clears existing data; repeated
    /// loads are idempotent per field.
    pub fn load_node_file(&mut self, text: &str) -> Result<NodeMergeStats, IngestError> {
        let source = LoadSource::NodeFile;
        self.events.emit_load_started(&LoadStartedEvent { source });

        let stats = match merge_node_attributes(text, &mut self.session, &self.events) {
            Ok(stats) => stats,
            Err(err) => {
                self.report_failure(source, &err);
                return Err(err);
            }
        };

        apply_styles(&self.session, &mut self.surface);

        debug!(rows = stats.rows_merged, "node attributes applied");
        self.events.emit_load_complete(&LoadCompleteEvent {
            source,
            nodes: stats.rows_merged,
            edges: 0,
            rows_skipped: stats.rows_skipped,
        });
        self.emit_message(Message::success(format!(
            "Loaded attributes for {} nodes",
            stats.rows_merged
        )));
        Ok(stats)
    }

    /// Hover entry: clear old marks, then mark everything reachable from
    /// the hovered node along edge direction.
    pub fn hover_enter(&mut self, node_id: &str) {
        self.clear_highlights();

        let Some(set) = reachable_from(self.session.graph(), node_id) else {
            return;
        };
        for id in &set.nodes {
            self.surface.add_highlight_mark(id);
        }
        for id in &set.edges {
            self.surface.add_highlight_mark(&id.to_string());
        }
        self.events.emit_highlight_applied(&HighlightAppliedEvent {
            focus: node_id.to_string(),
            nodes: set.nodes.len(),
            edges: set.edges.len(),
        });
        self.highlighted = Some(set);
    }

    /// Hover exit: drop all highlight marks.
    pub fn hover_leave(&mut self) {
        self.clear_highlights();
    }

    /// Selection: detail panel for a node.
    pub fn select_node(&self, node_id: &str) -> Result<DetailPanel, ViewerError> {
        presenter::node_details(&self.session, node_id)
    }

    /// Selection: detail panel for an edge.
    pub fn select_edge(&self, edge_id: EdgeId) -> Result<DetailPanel, ViewerError> {
        presenter::edge_details(&self.session, edge_id)
    }

    /// Unselect: drop highlight marks; the shell resets its own panel.
    pub fn unselect(&mut self) {
        self.clear_highlights();
    }

    fn clear_highlights(&mut self) {
        if let Some(set) = self.highlighted.take() {
            for id in &set.nodes {
                self.surface.remove_highlight_mark(id);
            }
            for id in &set.edges {
                self.surface.remove_highlight_mark(&id.to_string());
            }
            self.events.emit_highlight_cleared();
        }
    }

    /// Rebuild the surface contents from the session graph.
    fn sync_surface(&mut self) {
        self.surface.remove_all();
        for id in self.session.graph().node_ids() {
            self.surface.add_node(id);
        }
        for record in self.session.graph().edges() {
            let attributes = EdgeDrawAttributes {
                weight: self
                    .session
                    .edge_metadata(record.id)
                    .and_then(|meta| meta.weight),
            };
            self.surface
                .add_edge(record.id, &record.source, &record.target, attributes);
        }
        apply_styles(&self.session, &mut self.surface);
    }

    fn apply_layout(&mut self) {
        let width = self.config.layout.effective_node_width();
        let height = self.config.layout.effective_node_height();
        let nodes: Vec<LayoutNode> = self
            .session
            .graph()
            .node_ids()
            .map(|id| LayoutNode {
                id: id.to_string(),
                width,
                height,
            })
            .collect();
        let edges: Vec<LayoutEdge> = self
            .session
            .graph()
            .edges()
            .map(|record| LayoutEdge {
                source: record.source.clone(),
                target: record.target.clone(),
            })
            .collect();

        let outcome = apply_with_fallback(
            self.primary_layout.as_ref(),
            self.fallback_layout.as_ref(),
            &nodes,
            &edges,
            &mut self.surface,
        );
        if outcome == LayoutOutcome::Fallback {
            self.emit_message(Message::info(format!(
                "Layout '{}' failed, using '{}'",
                self.primary_layout.name(),
                self.fallback_layout.name()
            )));
        }
    }

    fn report_failure(&self, source: LoadSource, err: &IngestError) {
        self.events.emit_load_failed(&LoadFailedEvent {
            source,
            code: err.error_code().to_string(),
            message: err.to_string(),
        });
        self.emit_message(Message::error(format!("Error: {err}")));
    }

    fn emit_message(&self, message: Message) {
        self.events.emit_message(&MessageEvent { message });
    }
}
