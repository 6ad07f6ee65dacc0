//! Collection walker
//!
//! Depth-first traversal of the collection tree that flattens leaves into the
//! path → method → operation map and collects the tag list.

use crate::collection::{CollectionNode, NodeKind, RequestItem};
use crate::convert::options::{ConvertOptions, DefinitionKeyStrategy, TagStrategy};
use crate::convert::path::{build_path_key, extract_parameters, ExtractedParameters};
use crate::schema::{DefinitionRegistry, SchemaInferrer};
use crate::swagger::{Operation, Paths, Tag, FORM_MEDIA_TYPE, JSON_MEDIA_TYPE};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Tag of leaves that sit outside any folder
pub const DEFAULT_TAG: &str = "default";

/// Everything a traversal produced
#[derive(Debug, Clone, PartialEq)]
pub struct WalkOutput {
    /// Path map
    pub paths: Paths,
    /// Tags in visiting order, `default` first
    pub tags: Vec<Tag>,
    /// Inferred response schemas
    pub registry: DefinitionRegistry,
}

/// Walks a collection tree, merging every leaf into a shared path map
#[derive(Debug)]
pub struct CollectionWalker<'o> {
    options: &'o ConvertOptions,
    paths: Paths,
    tags: Vec<Tag>,
    registry: DefinitionRegistry,
}

impl<'o> CollectionWalker<'o> {
    /// Create a walker; the `default` tag is registered up front
    pub fn new(options: &'o ConvertOptions) -> Self {
        Self {
            options,
            paths: Paths::new(),
            tags: vec![Tag::new(DEFAULT_TAG, &options.default_tag_description)],
            registry: DefinitionRegistry::new(),
        }
    }

    /// Walk root-level nodes
    pub fn walk(&mut self, nodes: &[CollectionNode]) {
        self.walk_level(nodes, DEFAULT_TAG, 0);
    }

    fn walk_level(&mut self, nodes: &[CollectionNode], inherited_tag: &str, depth: usize) {
        for node in nodes {
            match &node.kind {
                NodeKind::Folder(children) => {
                    let tag = match (self.options.tag_strategy, depth) {
                        (TagStrategy::NearestFolder, _) | (TagStrategy::TopLevelFolder, 0) => {
                            self.tags.push(Tag::new(&node.name, &node.description));
                            node.name.as_str()
                        }
                        (TagStrategy::TopLevelFolder, _) => inherited_tag,
                    };
                    self.walk_level(children, tag, depth + 1);
                }
                NodeKind::Request(item) => self.visit_leaf(node, item, inherited_tag),
            }
        }
    }

    fn visit_leaf(&mut self, node: &CollectionNode, item: &RequestItem, tag: &str) {
        let path_key = build_path_key(&item.request.path_segments);
        let method = item.request.method_key();
        debug!("Visiting {} {} (tag '{}')", method, path_key, tag);

        let operation = self.build_operation(node, item, &path_key, &method, tag);

        let path_item = self.paths.entry(path_key.clone()).or_default();
        if path_item.insert(method.clone(), operation).is_some() {
            warn!(
                "{} {} defined more than once, keeping '{}'",
                method.to_uppercase(),
                path_key,
                node.name
            );
        }
    }

    fn build_operation(
        &mut self,
        node: &CollectionNode,
        item: &RequestItem,
        path_key: &str,
        method: &str,
        tag: &str,
    ) -> Operation {
        let ExtractedParameters {
            parameters,
            is_form_data,
        } = extract_parameters(path_key, &item.request.body);

        let consumes = if is_form_data {
            FORM_MEDIA_TYPE
        } else {
            JSON_MEDIA_TYPE
        };

        let key_strategy = self.options.definition_keys;
        let mut inferrer = SchemaInferrer::new(&mut self.registry);
        let responses: BTreeMap<_, _> = item
            .responses
            .iter()
            .map(|response| {
                let name = &response.display_name;
                let spec = match key_strategy {
                    DefinitionKeyStrategy::Name => inferrer.infer(name, &response.body_text),
                    DefinitionKeyStrategy::Operation => inferrer.infer_keyed(
                        &format!("{path_key} {method} {name}"),
                        name,
                        &response.body_text,
                    ),
                };
                (response.status_code.to_string(), spec)
            })
            .collect();

        Operation {
            tags: vec![tag.to_string()],
            summary: node.name.clone(),
            description: node.description.clone(),
            consumes: vec![consumes.to_string()],
            produces: vec![JSON_MEDIA_TYPE.to_string()],
            parameters,
            responses,
        }
    }

    /// Finish the traversal
    pub fn finish(self) -> WalkOutput {
        WalkOutput {
            paths: self.paths,
            tags: self.tags,
            registry: self.registry,
        }
    }
}
