/// Whose private information an observation exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Privacy {
    None,
    Single,
    All,
}

/// A visibility policy.
///
/// - `public` — Information every player sees (points, who undercut)
/// - `recall` — Include the full history of the requester's own choices
/// - `private` — Whose private information is included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Visibility {
    pub public: bool,
    pub recall: bool,
    pub private: Privacy,
}

impl Visibility {
    /// Everything the requester knows, with perfect recall.
    pub const fn information_state() -> Self {
        Self {
            public: true,
            recall: true,
            private: Privacy::Single,
        }
    }
    /// The requester's current view, without recall.
    pub const fn observation() -> Self {
        Self {
            public: true,
            recall: false,
            private: Privacy::Single,
        }
    }
    /// Only what all players share.
    pub const fn public() -> Self {
        Self {
            public: true,
            recall: false,
            private: Privacy::None,
        }
    }
    /// Only the requester's private information.
    pub const fn private() -> Self {
        Self {
            public: false,
            recall: false,
            private: Privacy::Single,
        }
    }
    pub fn is_single(&self) -> bool {
        self.private == Privacy::Single
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::observation()
    }
}
