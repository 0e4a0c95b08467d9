//! Column schemas for the ingestion modes.

use plexus_core::errors::IngestError;

use crate::tabular::Header;

/// Which edge-bearing file shape is being ingested.
///
/// The two modes share one row pipeline and differ only in the required
/// column set; node-attribute files have their own schema below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestMode {
    /// Single combined file: only `Source` and `Target` are required.
    Combined,
    /// Split edge file: all five edge columns are mandatory.
    EdgeFile,
}

pub(crate) const COL_SOURCE: &str = "Source";
pub(crate) const COL_TARGET: &str = "Target";
pub(crate) const COL_EDGE_WEIGHT: &str = "EdgeWeight";
pub(crate) const COL_PAPERS: &str = "AffiliatedPapers";
pub(crate) const COL_ORGS: &str = "AffiliatedOrganizations";
pub(crate) const COL_ORG_SINGULAR: &str = "AffiliatedOrganization";
pub(crate) const COL_ORG_NAMES: &str = "AffiliatedOrganizationNames";
pub(crate) const COL_ORG_NAME_SINGULAR: &str = "AffiliatedOrganizationName";
pub(crate) const COL_NODE: &str = "Node";
pub(crate) const COL_NODE_TYPE: &str = "NodeType";
pub(crate) const COL_NODE_WEIGHT: &str = "NodeWeight";

fn require(header: &Header, name: &str) -> Result<usize, IngestError> {
    header
        .index_of(name)
        .ok_or_else(|| IngestError::MissingRequiredColumn {
            column: name.to_string(),
        })
}

/// Resolved column indexes for an edge-bearing file.
#[derive(Debug, Clone)]
pub(crate) struct EdgeColumns {
    pub source: usize,
    pub target: usize,
    pub weight: Option<usize>,
    pub papers: Option<usize>,
    pub organizations: Option<usize>,
    pub organization_names: Option<usize>,
    /// Rows with fewer fields than this are skipped with a warning.
    pub min_fields: usize,
}

impl EdgeColumns {
    pub fn resolve(header: &Header, mode: IngestMode) -> Result<Self, IngestError> {
        let source = require(header, COL_SOURCE)?;
        let target = require(header, COL_TARGET)?;
        let weight = header.index_of(COL_EDGE_WEIGHT);

        let (papers, organizations, organization_names, min_fields) = match mode {
            IngestMode::Combined => (
                header.index_of(COL_PAPERS),
                header.index_of_any(&[COL_ORGS, COL_ORG_SINGULAR]),
                header.index_of_any(&[COL_ORG_NAMES, COL_ORG_NAME_SINGULAR]),
                source.max(target) + 1,
            ),
            IngestMode::EdgeFile => {
                let papers = require(header, COL_PAPERS)?;
                let organizations = require(header, COL_ORGS)?;
                let organization_names = require(header, COL_ORG_NAMES)?;
                let min_fields = source
                    .max(target)
                    .max(papers)
                    .max(organizations)
                    .max(organization_names)
                    + 1;
                (
                    Some(papers),
                    Some(organizations),
                    Some(organization_names),
                    min_fields,
                )
            }
        };

        Ok(Self {
            source,
            target,
            weight,
            papers,
            organizations,
            organization_names,
            min_fields,
        })
    }
}

/// Resolved column indexes for a node-attribute file.
#[derive(Debug, Clone)]
pub(crate) struct NodeColumns {
    pub node: usize,
    pub node_type: Option<usize>,
    pub papers: Option<usize>,
    pub organizations: Option<usize>,
    pub organization_names: Option<usize>,
    pub weight: Option<usize>,
    pub min_fields: usize,
}

impl NodeColumns {
    pub fn resolve(header: &Header) -> Result<Self, IngestError> {
        let node = require(header, COL_NODE)?;
        Ok(Self {
            node,
            node_type: header.index_of(COL_NODE_TYPE),
            papers: header.index_of(COL_PAPERS),
            organizations: header.index_of(COL_ORGS),
            organization_names: header.index_of(COL_ORG_NAMES),
            weight: header.index_of(COL_NODE_WEIGHT),
            min_fields: node + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_mode_requires_only_source_and_target() {
        let header = Header::parse("Source,Target");
        let columns = EdgeColumns::resolve(&header, IngestMode::Combined).unwrap();
        assert_eq!(columns.source, 0);
        assert_eq!(columns.target, 1);
        assert_eq!(columns.min_fields, 2);
        assert!(columns.papers.is_none());
    }

    #[test]
    fn combined_mode_accepts_singular_header_variants() {
        let header =
            Header::parse("Source,Target,AffiliatedOrganization,AffiliatedOrganizationName");
        let columns = EdgeColumns::resolve(&header, IngestMode::Combined).unwrap();
        assert_eq!(columns.organizations, Some(2));
        assert_eq!(columns.organization_names, Some(3));
    }

    #[test]
    fn edge_file_mode_requires_all_five_columns() {
        let header = Header::parse("Source,Target,AffiliatedPapers,AffiliatedOrganizations");
        let err = EdgeColumns::resolve(&header, IngestMode::EdgeFile).unwrap_err();
        assert_eq!(
            err,
            IngestError::MissingRequiredColumn {
                column: COL_ORG_NAMES.to_string()
            }
        );
    }

    #[test]
    fn node_schema_requires_node_column() {
        let header = Header::parse("NodeType,NodeWeight");
        assert!(NodeColumns::resolve(&header).is_err());

        let header = Header::parse("Node,NodeType");
        let columns = NodeColumns::resolve(&header).unwrap();
        assert_eq!(columns.node, 0);
        assert_eq!(columns.node_type, Some(1));
        assert_eq!(columns.min_fields, 1);
    }
}
