//! # Header Checks
//!
//! Checks that need no chain context: certificate shape, quorum and the
//! epoch effects of validator lists. Batches and the dry-run predicate
//! share them.

use shared_types::HexDisplay;
use sr_01_header_codec::{Header, SealedHeader};
use sr_02_signature_quorum::{QuorumTally, SignatureQuorumApi};
use sr_03_validator_registry::ValidatorSetRegistry;
use tracing::debug;

use crate::domain::config::EngineConfig;
use crate::error::{FinalityError, FinalityResult};
use crate::metrics;

/// The QC must certify an earlier header from an earlier round.
pub(crate) fn check_certificate_shape(header: &Header) -> FinalityResult<()> {
    let proposed = header.quorum_cert().proposed;
    if proposed.number >= header.number {
        return Err(FinalityError::MalformedHeader(format!(
            "header #{} certifies #{}, which is not below it",
            header.number, proposed.number
        )));
    }
    if proposed.round >= header.round() {
        return Err(FinalityError::MalformedHeader(format!(
            "header #{} in round {} certifies round {}",
            header.number,
            header.round(),
            proposed.round
        )));
    }
    Ok(())
}

/// Count the QC against the epoch that produced the certified header.
pub(crate) fn verify_quorum<V: SignatureQuorumApi + ?Sized>(
    verifier: &V,
    registry: &ValidatorSetRegistry,
    sealed: &SealedHeader,
) -> FinalityResult<QuorumTally> {
    let cert = sealed.header.quorum_cert();
    let epoch = registry.active_set(cert.proposed.number);
    let tally = verifier.tally_quorum(cert, epoch);

    let uncounted = cert.signatures.len().saturating_sub(tally.valid);
    if uncounted > 0 {
        metrics::record_signatures_rejected(uncounted as u64);
    }

    if !tally.reached() {
        return Err(FinalityError::QuorumNotReached {
            number: sealed.header.number,
            valid: tally.valid,
            required: tally.required,
        });
    }

    debug!(
        number = sealed.header.number,
        hash = %HexDisplay(&sealed.hash),
        valid = tally.valid,
        required = tally.required,
        epoch = epoch.effective_from,
        "Quorum certificate verified"
    );
    Ok(tally)
}

/// Check the header's validator lists and schedule any rotation.
///
/// Returns true if a rotation was scheduled.
pub(crate) fn apply_epoch_effects(
    config: &EngineConfig,
    registry: &mut ValidatorSetRegistry,
    header: &Header,
) -> FinalityResult<bool> {
    let number = header.number;

    if !header.penalties.is_empty() && !header.carries_rotation() {
        return Err(FinalityError::invalid_epoch(
            number,
            "penalties without a next validator set",
        ));
    }

    if config.enforce_epoch_boundaries {
        if header.is_epoch_switch() && !config.schedule.is_switch_block(number) {
            return Err(FinalityError::invalid_epoch(
                number,
                "current validators outside an epoch switch block",
            ));
        }
        if header.carries_rotation() && !config.schedule.in_gap_window(number) {
            return Err(FinalityError::invalid_epoch(
                number,
                "next validators outside the gap window",
            ));
        }
    }

    if header.is_epoch_switch() && !registry.active_set(number).same_members(&header.validators) {
        return Err(FinalityError::invalid_epoch(
            number,
            "declared validators differ from the active set",
        ));
    }

    if !header.carries_rotation() {
        return Ok(false);
    }

    let effective_from = config
        .activation
        .effective_from(number, config.schedule.epoch_length);
    registry
        .schedule_rotation(&header.next_validators, &header.penalties, effective_from)
        .map_err(|e| FinalityError::invalid_epoch(number, e))?;
    metrics::record_epoch_scheduled();
    Ok(true)
}
