use safetynet_common::Identity;

/// The single persisted identity slot. No expiry, no versioning.
pub trait IdentityStore {
    fn load(&self) -> Option<Identity>;
    fn save(&mut self, identity: &Identity);
    fn clear(&mut self);
}

/// Process-local slot, used by tooling and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryIdentityStore {
    slot: Option<Identity>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holding(identity: Identity) -> Self {
        Self {
            slot: Some(identity),
        }
    }

    pub fn peek(&self) -> Option<&Identity> {
        self.slot.as_ref()
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn load(&self) -> Option<Identity> {
        self.slot.clone()
    }

    fn save(&mut self, identity: &Identity) {
        self.slot = Some(identity.clone());
    }

    fn clear(&mut self) {
        self.slot = None;
    }
}
