//! Restricted StructuresPlus building pieces
//!
//! The table is fixed: five fence support variants may not be placed at all,
//! and the metal foundation is allowed but its owner is warned against spam.

/// How a restricted structure is treated at placement time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restriction {
    /// Placement is refused
    Deny,
    /// Placement goes ahead with a warning
    Warn,
}

/// A building piece with a placement restriction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestrictedStructure {
    StoneFenceSupport,
    WoodFenceSupport,
    AdobeFenceSupport,
    TekFenceSupport,
    MetalFenceSupport,
    MetalFoundation,
}

const DENY_MESSAGE: &str = "It is not allowed to use this structure !!!";
const WARN_MESSAGE: &str =
    "S+ foundations are not allowed for spam!!! Use for base building only!!!";

impl RestrictedStructure {
    /// Every restricted structure
    pub const ALL: [Self; 6] = [
        Self::StoneFenceSupport,
        Self::WoodFenceSupport,
        Self::AdobeFenceSupport,
        Self::TekFenceSupport,
        Self::MetalFenceSupport,
        Self::MetalFoundation,
    ];

    /// Blueprint path as produced by [`crate::blueprint::blueprint_path`]
    pub const fn blueprint(self) -> &'static str {
        match self {
            Self::StoneFenceSupport => "Blueprint'/Game/Mods/StructuresPlusMod/Structures/FenceSupports/Stone/BP_FenceSupport_Stone.BP_FenceSupport_Stone'",
            Self::WoodFenceSupport => "Blueprint'/Game/Mods/StructuresPlusMod/Structures/FenceSupports/Wood/BP_FenceSupport_Wood.BP_FenceSupport_Wood'",
            Self::AdobeFenceSupport => "Blueprint'/Game/Mods/StructuresPlusMod/Structures/FenceSupports/Adobe/BP_FenceSupport_Adobe.BP_FenceSupport_Adobe'",
            Self::TekFenceSupport => "Blueprint'/Game/Mods/StructuresPlusMod/Structures/FenceSupports/Tek/BP_FenceSupport_Tek.BP_FenceSupport_Tek'",
            Self::MetalFenceSupport => "Blueprint'/Game/Mods/StructuresPlusMod/Structures/FenceSupports/Metal/BP_FenceSupport_Metal.BP_FenceSupport_Metal'",
            Self::MetalFoundation => "Blueprint'/Game/Mods/StructuresPlusMod/Structures/Foundations/Square/Metal/BP_Foundation_Metal.BP_Foundation_Metal'",
        }
    }

    pub const fn restriction(self) -> Restriction {
        match self {
            Self::MetalFoundation => Restriction::Warn,
            _ => Restriction::Deny,
        }
    }

    /// Text shown to the player who tried to place it
    pub const fn message(self) -> &'static str {
        match self.restriction() {
            Restriction::Deny => DENY_MESSAGE,
            Restriction::Warn => WARN_MESSAGE,
        }
    }

    /// Look up a structure by exact (case-sensitive) blueprint path
    pub fn from_blueprint(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.blueprint() == path)
    }
}
