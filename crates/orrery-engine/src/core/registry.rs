use std::collections::HashMap;

use serde::Serialize;

use crate::api::types::NodeId;
use crate::components::orbital::{AsteroidBeltMember, BodyKind, OrbitalBody, Spinner};

/// Descriptive metadata shown when the pointer rests on a body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverTarget {
    pub name: String,
    /// Ordered (label, value) rows.
    pub details: Vec<(String, String)>,
}

impl HoverTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), details: Vec::new() }
    }

    pub fn with_detail(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.push((label.into(), value.into()));
        self
    }

    /// "Label: value" lines, one per row.
    pub fn detail_text(&self) -> String {
        self.details
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A hover lookup result: the picked node and its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PickedTarget {
    pub node: NodeId,
    pub target: HoverTarget,
}

/// Every moving or describable thing in the scene.
///
/// Built once at startup and never shrunk. Indices returned by the `add_*`
/// methods stay valid for the registry's lifetime.
#[derive(Default)]
pub struct BodyRegistry {
    bodies: Vec<OrbitalBody>,
    belt: Vec<AsteroidBeltMember>,
    spinners: Vec<Spinner>,
    hover: HashMap<NodeId, HoverTarget>,
    /// Pickable nodes in registration order.
    interactive: Vec<NodeId>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_body(&mut self, body: OrbitalBody) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    pub fn add_belt_member(&mut self, member: AsteroidBeltMember) {
        self.belt.push(member);
    }

    pub fn add_spinner(&mut self, spinner: Spinner) {
        self.spinners.push(spinner);
    }

    /// Make `node` pickable and attach its metadata. Registering the same
    /// node again replaces the metadata but keeps its pick order.
    pub fn register_hover(&mut self, node: NodeId, target: HoverTarget) {
        if self.hover.insert(node, target).is_none() {
            self.interactive.push(node);
        }
    }

    /// Resolve a picked node to its metadata.
    pub fn hover_target(&self, node: NodeId) -> Option<&HoverTarget> {
        self.hover.get(&node)
    }

    pub fn interactive_nodes(&self) -> &[NodeId] {
        &self.interactive
    }

    pub fn bodies(&self) -> &[OrbitalBody] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [OrbitalBody] {
        &mut self.bodies
    }

    pub fn bodies_of_kind(&self, kind: BodyKind) -> impl Iterator<Item = &OrbitalBody> {
        self.bodies.iter().filter(move |b| b.kind == kind)
    }

    pub fn body_by_name(&self, name: &str) -> Option<&OrbitalBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn belt(&self) -> &[AsteroidBeltMember] {
        &self.belt
    }

    pub fn belt_mut(&mut self) -> &mut [AsteroidBeltMember] {
        &mut self.belt
    }

    pub fn spinners(&self) -> &[Spinner] {
        &self.spinners
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty() && self.belt.is_empty() && self.hover.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::orbit::EllipticalOrbit;

    #[test]
    fn empty_registry_has_no_targets() {
        let registry = BodyRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.hover_target(NodeId(0)).is_none());
        assert!(registry.interactive_nodes().is_empty());
    }

    #[test]
    fn hover_lookup_is_by_node_id() {
        let mut registry = BodyRegistry::new();
        registry.register_hover(NodeId(3), HoverTarget::new("Mars").with_detail("Diameter", "6,779 km"));
        registry.register_hover(NodeId(7), HoverTarget::new("Venus"));
        assert_eq!(registry.hover_target(NodeId(3)).map(|t| t.name.as_str()), Some("Mars"));
        assert_eq!(registry.hover_target(NodeId(7)).map(|t| t.name.as_str()), Some("Venus"));
        assert!(registry.hover_target(NodeId(4)).is_none());
        assert_eq!(registry.interactive_nodes(), &[NodeId(3), NodeId(7)]);
    }

    #[test]
    fn re_registering_keeps_order() {
        let mut registry = BodyRegistry::new();
        registry.register_hover(NodeId(1), HoverTarget::new("a"));
        registry.register_hover(NodeId(2), HoverTarget::new("b"));
        registry.register_hover(NodeId(1), HoverTarget::new("c"));
        assert_eq!(registry.interactive_nodes(), &[NodeId(1), NodeId(2)]);
        assert_eq!(registry.hover_target(NodeId(1)).map(|t| t.name.as_str()), Some("c"));
    }

    #[test]
    fn detail_text_joins_rows() {
        let target = HoverTarget::new("Moon")
            .with_detail("Diameter", "3,474 km")
            .with_detail("Rotation time", "27.3 days");
        assert_eq!(target.detail_text(), "Diameter: 3,474 km\nRotation time: 27.3 days");
    }

    #[test]
    fn bodies_filter_by_kind() {
        let mut registry = BodyRegistry::new();
        let orbit = EllipticalOrbit::from_eccentricity(80.0, 0.4, 0.0).unwrap();
        for (name, kind) in [("Amor", BodyKind::NearEarth), ("Bennu", BodyKind::Hazardous)] {
            let body = OrbitalBody::new(name, kind, orbit, 0.001, NodeId(0), NodeId(0)).unwrap();
            registry.add_body(body);
        }
        assert_eq!(registry.bodies_of_kind(BodyKind::NearEarth).count(), 1);
        assert_eq!(registry.body_by_name("Bennu").map(|b| b.kind), Some(BodyKind::Hazardous));
    }
}
