//! Role-Based Access Control
//!
//! Explicit role table owned by the ledger: a mapping from 32-byte role
//! identifiers to sets of member identities. Grant and revoke are plain
//! set mutations; the ledger layers the admin-role gate on top.

use indexmap::{IndexMap, IndexSet};
use serde::de::Error as SerdeError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::address::Address;

/// Role identifier (32 bytes)
pub type RoleId = [u8; 32];

/// Create a RoleId from a string name (Keccak-256 of the name, matching the
/// on-chain role constants)
pub fn role_id_from_name(name: &str) -> RoleId {
    let mut hasher = Keccak256::new();
    hasher.update(name.as_bytes());
    let result = hasher.finalize();
    let mut id = [0u8; 32];
    id.copy_from_slice(&result);
    id
}

// Predefined roles

/// Default admin role - can grant and revoke all other roles
pub const DEFAULT_ADMIN_ROLE: RoleId = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Mint-burn role - authorizes supply-increasing and supply-decreasing
/// operations. Keccak-256 of "MINT_BURN_ROLE".
pub const MINT_BURN_ROLE: RoleId = [
    0xa6, 0x0c, 0xb0, 0xdf, 0x7b, 0xc1, 0x78, 0x03, 0x8b, 0x99, 0x3a, 0xa2, 0xe0, 0xdf, 0x2e, 0x2c,
    0xfb, 0x66, 0x27, 0xf4, 0x69, 0x5e, 0x42, 0x61, 0x22, 0x7d, 0x47, 0x42, 0x2a, 0xe7, 0xe2, 0xa6,
];

/// Get the name of a predefined role
pub fn predefined_role_name(role: &RoleId) -> Option<&'static str> {
    if *role == DEFAULT_ADMIN_ROLE {
        Some("DEFAULT_ADMIN")
    } else if *role == MINT_BURN_ROLE {
        Some("MINT_BURN")
    } else {
        None
    }
}

/// Role membership table
///
/// Membership sets iterate in insertion order so snapshots of the table are
/// deterministic. Serializes as a map of hex role ids to member lists.
#[derive(Clone, Debug, Default)]
pub struct AccessControl {
    members: IndexMap<RoleId, IndexSet<Address>>,
}

impl Serialize for AccessControl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.members.len()))?;
        for (role, members) in &self.members {
            map.serialize_entry(&hex::encode(role), members)?;
        }
        map.end()
    }
}

impl<'a> Deserialize<'a> for AccessControl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let raw: IndexMap<String, IndexSet<Address>> = IndexMap::deserialize(deserializer)?;
        let mut members = IndexMap::with_capacity(raw.len());
        for (key, set) in raw {
            let bytes = hex::decode(&key).map_err(SerdeError::custom)?;
            let role: RoleId = bytes
                .try_into()
                .map_err(|_| SerdeError::custom("Invalid role id length"))?;
            members.insert(role, set);
        }
        Ok(Self { members })
    }
}

impl AccessControl {
    /// Create an empty role table
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure membership lookup, no access restriction
    pub fn has_role(&self, role: &RoleId, account: &Address) -> bool {
        self.members
            .get(role)
            .is_some_and(|set| set.contains(account))
    }

    /// Add `account` to `role`. Returns true if it was not already a member.
    pub fn grant_role(&mut self, role: RoleId, account: Address) -> bool {
        self.members.entry(role).or_default().insert(account)
    }

    /// Remove `account` from `role`. Returns true if it was a member.
    pub fn revoke_role(&mut self, role: &RoleId, account: &Address) -> bool {
        self.members
            .get_mut(role)
            .is_some_and(|set| set.shift_remove(account))
    }

    /// Number of members holding `role`
    pub fn role_member_count(&self, role: &RoleId) -> usize {
        self.members.get(role).map_or(0, |set| set.len())
    }

    /// Members of `role`, in grant order
    pub fn role_members(&self, role: &RoleId) -> impl Iterator<Item = &Address> {
        self.members.get(role).into_iter().flatten()
    }
}
