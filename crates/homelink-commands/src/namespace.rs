//! Node namespaces and the cross-namespace code audit.
//!
//! A [`Namespace`] pairs a node identity with the encoding mode chosen at
//! configuration time. It is the lookup the dispatch loop consults when a
//! command byte arrives: one byte in, symbolic command out.
//!
//! Codes are only guaranteed unique *within* one namespace. Historically the
//! ASCII-debug tables grew independently per node and some codes collide
//! across namespaces (controller `setBedroomSetPoint` and basement
//! `requestFurnaceStatus` are both `'B'`), so a single shared byte stream
//! cannot safely carry commands for more than one node in that mode.
//! [`cross_namespace_collisions`] finds and reports those overlaps instead
//! of papering over them.

use log::warn;

use crate::commands::{
    BasementCommand, BedroomCommand, ControllerCommand, EncodingMode, GarageCommand, NodeCommand,
};
use crate::error::{CommandError, CommandResult};

/// Identity of a physical node on the HomeLink network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    /// The central controller.
    Controller,
    /// The basement node (furnace, fan, moisture sensor).
    Basement,
    /// The garage node (door, outlets, temperature zones).
    Garage,
    /// The bedroom node (set point control).
    Bedroom,
}

impl NodeId {
    /// All node identities.
    pub const ALL: &'static [NodeId] = &[
        NodeId::Controller,
        NodeId::Basement,
        NodeId::Garage,
        NodeId::Bedroom,
    ];

    /// Short name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeId::Controller => "controller",
            NodeId::Basement => "basement",
            NodeId::Garage => "garage",
            NodeId::Bedroom => "bedroom",
        }
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node's command table under one encoding mode.
///
/// Constructed once at configuration time and passed by reference to the
/// dispatch collaborator; there is no mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    /// The node this namespace belongs to.
    pub node: NodeId,
    /// The encoding mode in effect for this build.
    pub mode: EncodingMode,
}

impl Namespace {
    /// Create the namespace for `node` under `mode`.
    pub fn new(node: NodeId, mode: EncodingMode) -> Self {
        Namespace { node, mode }
    }

    /// Look up a received command byte.
    ///
    /// This is the receive-side half of the mapping; the send side is
    /// `code()` on the per-node command enums.
    pub fn decode(&self, byte: u8) -> CommandResult<NodeCommand> {
        let cmd = match self.node {
            NodeId::Controller => {
                ControllerCommand::from_code(self.mode, byte).map(NodeCommand::Controller)
            }
            NodeId::Basement => {
                BasementCommand::from_code(self.mode, byte).map(NodeCommand::Basement)
            }
            NodeId::Garage => GarageCommand::from_code(self.mode, byte).map(NodeCommand::Garage),
            NodeId::Bedroom => {
                BedroomCommand::from_code(self.mode, byte).map(NodeCommand::Bedroom)
            }
        };

        cmd.ok_or(CommandError::UnknownCode {
            node: self.node,
            mode: self.mode,
            code: byte,
        })
    }

    /// Every command in this namespace with its code, in table order.
    pub fn commands(&self) -> Vec<(NodeCommand, u8)> {
        let commands: Vec<NodeCommand> = match self.node {
            NodeId::Controller => ControllerCommand::ALL
                .iter()
                .map(|&c| NodeCommand::Controller(c))
                .collect(),
            NodeId::Basement => BasementCommand::ALL
                .iter()
                .map(|&c| NodeCommand::Basement(c))
                .collect(),
            NodeId::Garage => GarageCommand::ALL
                .iter()
                .map(|&c| NodeCommand::Garage(c))
                .collect(),
            NodeId::Bedroom => BedroomCommand::ALL
                .iter()
                .map(|&c| NodeCommand::Bedroom(c))
                .collect(),
        };

        commands
            .into_iter()
            .map(|c| (c, c.code(self.mode)))
            .collect()
    }
}

/// Two commands from different namespaces that share one code byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeCollision {
    /// The shared byte value.
    pub code: u8,
    /// The earlier command (by node table order).
    pub first: (NodeId, NodeCommand),
    /// The later command.
    pub second: (NodeId, NodeCommand),
}

/// Find command codes shared between different node namespaces under `mode`.
///
/// Each hit is logged as a warning and returned. A non-empty result means a
/// single shared byte stream cannot carry commands for both nodes involved:
/// the dispatch collaborator must scope each stream to exactly one
/// namespace. The ASCII-debug tables are known to collide (see module docs);
/// the numeric tables do not.
pub fn cross_namespace_collisions(mode: EncodingMode) -> Vec<CodeCollision> {
    let mut entries: Vec<(NodeId, NodeCommand, u8)> = Vec::new();
    for &node in NodeId::ALL {
        for (cmd, code) in Namespace::new(node, mode).commands() {
            entries.push((node, cmd, code));
        }
    }

    let mut collisions = Vec::new();
    for (i, &(node_a, cmd_a, code_a)) in entries.iter().enumerate() {
        for &(node_b, cmd_b, code_b) in &entries[i + 1..] {
            if node_a != node_b && code_a == code_b {
                warn!(
                    "command code 0x{:02X} is shared by {} {} and {} {} in {:?} mode",
                    code_a,
                    node_a,
                    cmd_a.as_str(),
                    node_b,
                    cmd_b.as_str(),
                    mode
                );
                collisions.push(CodeCollision {
                    code: code_a,
                    first: (node_a, cmd_a),
                    second: (node_b, cmd_b),
                });
            }
        }
    }

    collisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_distinct_within_namespace() {
        for &node in NodeId::ALL {
            for mode in [EncodingMode::Numeric, EncodingMode::AsciiDebug] {
                let ns = Namespace::new(node, mode);
                let commands = ns.commands();
                let codes: HashSet<u8> = commands.iter().map(|&(_, code)| code).collect();
                assert_eq!(
                    codes.len(),
                    commands.len(),
                    "duplicate code in {} {:?} table",
                    node,
                    mode
                );
            }
        }
    }

    #[test]
    fn test_decode_known_byte() {
        let ns = Namespace::new(NodeId::Basement, EncodingMode::AsciiDebug);
        assert_eq!(
            ns.decode(b'G').unwrap(),
            NodeCommand::Basement(BasementCommand::RequestTemp)
        );
    }

    #[test]
    fn test_decode_unknown_byte() {
        let ns = Namespace::new(NodeId::Garage, EncodingMode::Numeric);
        let err = ns.decode(99).unwrap_err();
        assert_eq!(
            err,
            CommandError::UnknownCode {
                node: NodeId::Garage,
                mode: EncodingMode::Numeric,
                code: 99,
            }
        );
    }

    #[test]
    fn test_decode_respects_mode() {
        // 'G' is basement requestTemp in ASCII-debug mode but maps to
        // nothing in the basement numeric table.
        let ns = Namespace::new(NodeId::Basement, EncodingMode::Numeric);
        assert!(ns.decode(b'G').is_err());
    }

    #[test]
    fn test_ascii_collision_is_reported() {
        let collisions = cross_namespace_collisions(EncodingMode::AsciiDebug);
        let b_collision = collisions.iter().find(|c| c.code == b'B');
        let hit = b_collision.expect("the historical 'B' collision must be findable");

        let involved = [hit.first.1, hit.second.1];
        assert!(involved
            .contains(&NodeCommand::Controller(ControllerCommand::SetBedroomSetPoint)));
        assert!(involved
            .contains(&NodeCommand::Basement(BasementCommand::RequestFurnaceStatus)));
    }

    #[test]
    fn test_numeric_tables_do_not_collide() {
        assert!(cross_namespace_collisions(EncodingMode::Numeric).is_empty());
    }

    #[test]
    fn test_namespace_is_total() {
        // Both modes must cover the same command set.
        for &node in NodeId::ALL {
            let numeric = Namespace::new(node, EncodingMode::Numeric).commands();
            let ascii = Namespace::new(node, EncodingMode::AsciiDebug).commands();
            assert_eq!(numeric.len(), ascii.len());
            for (&(cmd_n, _), &(cmd_a, _)) in numeric.iter().zip(ascii.iter()) {
                assert_eq!(cmd_n, cmd_a);
            }
        }
    }
}
