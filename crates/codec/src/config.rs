use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CodecError;

/// Default upper bound on a single encoded message.
pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 16 * 1024 * 1024;

/// Limits applied before any bytes reach the wire decoder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Largest input, in bytes, any decoder accepts.
    pub max_message_bytes: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
        }
    }
}

impl CodecConfig {
    pub(crate) fn check_len(&self, len: usize) -> Result<(), CodecError> {
        if len > self.max_message_bytes {
            debug!(target: "codec", len, max = self.max_message_bytes, "rejecting oversized message");
            return Err(CodecError::Oversized {
                len,
                max: self.max_message_bytes,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: CodecConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, CodecConfig::default());
        assert_eq!(cfg.max_message_bytes, DEFAULT_MAX_MESSAGE_BYTES);
    }

    #[test]
    fn limit_is_read_from_toml() {
        let cfg: CodecConfig = toml::from_str("max_message_bytes = 1024").unwrap();
        assert_eq!(cfg.max_message_bytes, 1024);
        assert!(cfg.check_len(1024).is_ok());
        assert!(matches!(
            cfg.check_len(1025),
            Err(CodecError::Oversized { len: 1025, max: 1024 })
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let res: Result<CodecConfig, _> = toml::from_str("max_bytes = 1");
        assert!(res.is_err());
    }
}
