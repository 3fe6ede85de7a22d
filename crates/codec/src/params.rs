//! Translation between the consensus subsystem's parameter message and the
//! local [`ConsensusParams`].

use chainwire_types::consensus::raw::{
    RawAbciParams, RawBlockParams, RawConsensusParams, RawValidatorParams, RawVersionParams,
};
use chainwire_types::{AbciParams, BlockParams, ConsensusParams, ValidatorParams, VersionParams};

use crate::error::ConsensusParamsError;

/// The block, validator and version sections are required. The ABCI section
/// is optional and only its presence sets the vote-extension height.
pub fn consensus_params_from_raw(
    raw: &RawConsensusParams,
) -> Result<ConsensusParams, ConsensusParamsError> {
    let block = raw
        .block
        .as_ref()
        .ok_or(ConsensusParamsError::MissingBlock)?;
    let validator = raw
        .validator
        .as_ref()
        .ok_or(ConsensusParamsError::MissingValidator)?;
    let version = raw
        .version
        .as_ref()
        .ok_or(ConsensusParamsError::MissingVersion)?;

    Ok(ConsensusParams {
        block: BlockParams {
            max_bytes: block.max_bytes,
            max_gas: block.max_gas,
        },
        validator: ValidatorParams {
            pub_key_types: validator.pub_key_types.clone(),
        },
        version: VersionParams { app: version.app },
        abci: AbciParams {
            vote_extensions_enable_height: raw
                .abci
                .as_ref()
                .map(|a| a.vote_extensions_enable_height),
        },
    })
}

/// Inverse of [`consensus_params_from_raw`]. Evidence limits are not part of
/// the local view, so that section is left out.
pub fn consensus_params_to_raw(params: &ConsensusParams) -> RawConsensusParams {
    RawConsensusParams {
        block: Some(RawBlockParams {
            max_bytes: params.block.max_bytes,
            max_gas: params.block.max_gas,
        }),
        evidence: None,
        validator: Some(RawValidatorParams {
            pub_key_types: params.validator.pub_key_types.clone(),
        }),
        version: Some(RawVersionParams {
            app: params.version.app,
        }),
        abci: params
            .abci
            .vote_extensions_enable_height
            .map(|h| RawAbciParams {
                vote_extensions_enable_height: h,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chainwire_crypto::ED25519_KEY_TYPE;

    fn raw_params() -> RawConsensusParams {
        RawConsensusParams {
            block: Some(RawBlockParams {
                max_bytes: 12345,
                max_gas: 67890,
            }),
            validator: Some(RawValidatorParams {
                pub_key_types: vec![ED25519_KEY_TYPE.to_string()],
            }),
            version: Some(RawVersionParams { app: 42 }),
            ..RawConsensusParams::default()
        }
    }

    #[test]
    fn consensus_params_from_raw_copies_scalars() {
        let params = consensus_params_from_raw(&raw_params()).unwrap();

        assert_eq!(params.block.max_bytes, 12345);
        assert_eq!(params.block.max_gas, 67890);
        assert_eq!(params.version.app, 42);
        assert_eq!(
            params.validator.pub_key_types,
            vec![ED25519_KEY_TYPE.to_string()]
        );
        assert_eq!(params.abci.vote_extensions_enable_height, None);
    }

    #[test]
    fn abci_section_sets_activation_height() {
        let raw = RawConsensusParams {
            abci: Some(RawAbciParams {
                vote_extensions_enable_height: 100,
            }),
            ..raw_params()
        };
        let params = consensus_params_from_raw(&raw).unwrap();
        assert_eq!(params.abci.vote_extensions_enable_height, Some(100));
    }

    #[test]
    fn missing_sections_are_errors() {
        let raw = RawConsensusParams {
            block: None,
            ..raw_params()
        };
        assert_eq!(
            consensus_params_from_raw(&raw),
            Err(ConsensusParamsError::MissingBlock)
        );

        let raw = RawConsensusParams {
            validator: None,
            ..raw_params()
        };
        assert_eq!(
            consensus_params_from_raw(&raw),
            Err(ConsensusParamsError::MissingValidator)
        );

        let raw = RawConsensusParams {
            version: None,
            ..raw_params()
        };
        assert_eq!(
            consensus_params_from_raw(&raw),
            Err(ConsensusParamsError::MissingVersion)
        );
    }

    #[test]
    fn to_raw_inverts_from_raw() {
        let params = consensus_params_from_raw(&raw_params()).unwrap();
        let raw = consensus_params_to_raw(&params);
        assert_eq!(raw, raw_params());
        assert_eq!(consensus_params_from_raw(&raw).unwrap(), params);
    }
}
