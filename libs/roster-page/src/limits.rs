//! Input caps for requested page sizes.

use crate::Error;

/// Default and maximum page size for an endpoint.
#[derive(Debug, Clone, Copy)]
pub struct PageLimits {
    /// Used when the caller does not specify a limit.
    pub default: u64,
    /// Requested limits are clamped to this.
    pub max: u64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default: 25,
            max: 1000,
        }
    }
}

impl PageLimits {
    #[must_use]
    pub fn new(default: u64, max: u64) -> Self {
        Self { default, max }
    }

    /// Effective limit for a request: the default when absent, otherwise the
    /// requested value clamped to `max`.
    #[must_use]
    pub fn effective(&self, requested: Option<u64>) -> u64 {
        match requested {
            Some(limit) => limit.min(self.max),
            None => self.default,
        }
    }

    /// Reject a limit a store cannot page with.
    ///
    /// # Errors
    /// Returns `Error::InvalidLimit` for a zero or over-cap limit.
    pub fn validate(&self, limit: u64) -> Result<(), Error> {
        if limit == 0 || limit > self.max {
            return Err(Error::InvalidLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_falls_back_to_default() {
        let limits = PageLimits::default();
        assert_eq!(limits.effective(None), 25);
    }

    #[test]
    fn effective_clamps_to_max() {
        let limits = PageLimits::new(25, 100);
        assert_eq!(limits.effective(Some(40)), 40);
        assert_eq!(limits.effective(Some(4000)), 100);
    }

    #[test]
    fn validate_rejects_zero_and_over_cap() {
        let limits = PageLimits::new(25, 100);
        assert_eq!(limits.validate(0), Err(Error::InvalidLimit));
        assert_eq!(limits.validate(101), Err(Error::InvalidLimit));
        assert!(limits.validate(100).is_ok());
    }
}
