//! User service: profile and margins.

use std::sync::Arc;

use crate::client::{ClientInner, Params};
use crate::models::{Margins, Profile, Segment, SegmentMargins};
use crate::Result;

/// Service for account-level operations.
pub struct UserService {
    inner: Arc<ClientInner>,
}

impl UserService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch the user's profile.
    pub async fn profile(&self) -> Result<Profile> {
        self.inner.get("user.profile", Params::new()).await
    }

    /// Fetch funds and margins for all segments.
    pub async fn margins(&self) -> Result<Margins> {
        self.inner.get("user.margins", Params::new()).await
    }

    /// Fetch funds and margins for one segment.
    pub async fn margins_segment(&self, segment: Segment) -> Result<SegmentMargins> {
        self.inner
            .get("user.margins.segment", Params::new().push("segment", segment))
            .await
    }
}
