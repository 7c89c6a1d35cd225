//! Replay files and the runner that feeds them to a checkpoint.

use std::sync::Arc;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use shared_types::{parse_address, parse_hash, HexDisplay};
use sr_05_finality::{BatchOutcome, ManualHostChain};
use sr_06_checkpoint::{
    Bootstrap, CheckpointApi, CheckpointConfig, CheckpointError, CheckpointResult, CommitApi,
    FullCheckpoint, LiteCheckpoint, PeriodicCheckpoint, ReplenishApi,
};
use tracing::{debug, warn};

/// Which checkpoint variant to replay into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Every header stored and linked.
    Full,
    /// Checkpoint roots with commit calls.
    Lite,
    /// Lite plus replenish and check calls.
    Periodic,
}

/// A recorded relay session.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayFile {
    /// Subnet parameters; defaults when absent.
    #[serde(default)]
    pub config: CheckpointConfig,
    /// Variant the session was recorded against.
    pub policy: PolicyKind,
    /// Trusted starting state.
    pub bootstrap: BootstrapSpec,
    /// Calls in submission order.
    pub steps: Vec<Step>,
}

/// Hex-encoded bootstrap state.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapSpec {
    /// Initial validator addresses.
    pub validators: Vec<String>,
    /// Optional genesis header.
    #[serde(default)]
    pub genesis: Option<String>,
    /// Bootstrap header.
    pub header: String,
}

/// One recorded call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// `receive_header` with a batch.
    Receive(Vec<String>),
    /// `commit_header` for a run root.
    Commit {
        /// Run root hash
        root: String,
        /// Continuation headers
        headers: Vec<String>,
    },
    /// `replenish_header` for a run root.
    Replenish {
        /// Run root hash
        root: String,
        /// Gap headers
        headers: Vec<String>,
    },
    /// `check_header` dry run.
    Check(String),
}

impl Step {
    fn action(&self) -> &'static str {
        match self {
            Self::Receive(_) => "receive",
            Self::Commit { .. } => "commit",
            Self::Replenish { .. } => "replenish",
            Self::Check(_) => "check",
        }
    }
}

/// Result of one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepStatus {
    /// The call committed.
    Applied {
        /// Headers verified and applied
        accepted: usize,
        /// Headers skipped as already processed
        duplicates: usize,
        /// Numbers finalized by this call
        finalized: Vec<u64>,
    },
    /// The call was rejected and changed nothing.
    Rejected {
        /// Error kind label
        kind: String,
        /// Error message
        error: String,
    },
    /// A dry run.
    Checked {
        /// Whether the header would pass
        valid: bool,
    },
}

/// One line of the report.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    /// Position in the replay file
    pub index: usize,
    /// Call name
    pub action: &'static str,
    /// Host block the call was submitted at
    pub host_block: u64,
    /// What happened
    #[serde(flatten)]
    pub status: StepStatus,
}

/// A pointer in the final state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointerReport {
    /// Block number
    pub number: u64,
    /// Block hash, hex
    pub hash: String,
}

/// Everything a replay produced.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Variant replayed into
    pub policy: PolicyKind,
    /// Per-step results
    pub steps: Vec<StepReport>,
    /// Final head
    pub head: PointerReport,
    /// Final last finalized
    pub last_finalized: PointerReport,
    /// Validators for the next header
    pub validators: Vec<String>,
    /// Their threshold
    pub threshold: usize,
}

impl ReplayReport {
    /// Number of rejected steps.
    pub fn rejected(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step.status, StepStatus::Rejected { .. }))
            .count()
    }
}

/// A checkpoint of any variant.
pub enum Relay {
    /// Full storage
    Full(FullCheckpoint),
    /// Lite storage
    Lite(LiteCheckpoint),
    /// Periodic storage
    Periodic(PeriodicCheckpoint),
}

impl Relay {
    /// Bootstrap the chosen variant.
    pub fn bootstrap(
        policy: PolicyKind,
        config: CheckpointConfig,
        bootstrap: &Bootstrap,
        host: Arc<ManualHostChain>,
    ) -> CheckpointResult<Self> {
        Ok(match policy {
            PolicyKind::Full => Self::Full(FullCheckpoint::with_ecdsa(config, bootstrap, host)?),
            PolicyKind::Lite => Self::Lite(LiteCheckpoint::with_ecdsa(config, bootstrap, host)?),
            PolicyKind::Periodic => {
                Self::Periodic(PeriodicCheckpoint::with_ecdsa(config, bootstrap, host)?)
            }
        })
    }

    fn api(&self) -> &dyn CheckpointApi {
        match self {
            Self::Full(c) => c,
            Self::Lite(c) => c,
            Self::Periodic(c) => c,
        }
    }

    fn commit_api(&self) -> Option<&dyn CommitApi> {
        match self {
            Self::Full(_) => None,
            Self::Lite(c) => Some(c as &dyn CommitApi),
            Self::Periodic(c) => Some(c as &dyn CommitApi),
        }
    }

    fn replenish_api(&self) -> Option<&dyn ReplenishApi> {
        match self {
            Self::Periodic(c) => Some(c as &dyn ReplenishApi),
            _ => None,
        }
    }
}

/// Decode `0x`-prefixed or bare hex.
pub fn decode_hex(input: &str) -> anyhow::Result<Vec<u8>> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    hex::decode(trimmed).with_context(|| format!("invalid hex: {}", abbreviate(input)))
}

fn decode_batch(headers: &[String]) -> anyhow::Result<Vec<Vec<u8>>> {
    headers.iter().map(|h| decode_hex(h)).collect()
}

fn abbreviate(input: &str) -> String {
    if input.chars().count() > 18 {
        format!("{}…", input.chars().take(18).collect::<String>())
    } else {
        input.to_string()
    }
}

impl BootstrapSpec {
    /// Decode into engine bootstrap state.
    pub fn decode(&self) -> anyhow::Result<Bootstrap> {
        let validators = self
            .validators
            .iter()
            .map(|v| parse_address(v).with_context(|| format!("invalid validator {}", v)))
            .collect::<anyhow::Result<Vec<_>>>()?;
        let genesis = self.genesis.as_deref().map(decode_hex).transpose()?;
        Ok(Bootstrap {
            validators,
            genesis,
            header: decode_hex(&self.header).context("invalid bootstrap header")?,
        })
    }
}

/// Replay options.
#[derive(Debug, Clone, Copy)]
pub struct ReplayOptions {
    /// Replay into this variant instead of the recorded one
    pub policy: Option<PolicyKind>,
    /// Host block number at bootstrap; each step advances it by one
    pub host_start: u64,
    /// Stop at the first rejected step
    pub fail_fast: bool,
}

/// Run every step of `file` and report the final state.
pub fn run(file: &ReplayFile, options: ReplayOptions) -> anyhow::Result<ReplayReport> {
    let policy = options.policy.unwrap_or(file.policy);
    let bootstrap = file.bootstrap.decode()?;
    let host = Arc::new(ManualHostChain::new(options.host_start));
    let relay = Relay::bootstrap(policy, file.config.clone(), &bootstrap, host.clone())
        .context("bootstrap failed")?;

    let mut steps = Vec::with_capacity(file.steps.len());
    for (index, step) in file.steps.iter().enumerate() {
        let host_block = host.advance(1);
        let status = match execute(&relay, step)? {
            Ok(status) => status,
            Err(e) => {
                warn!(index, action = step.action(), error = %e, "Step rejected");
                let status = StepStatus::Rejected {
                    kind: e
                        .kind()
                        .map(|k| k.as_str().to_string())
                        .unwrap_or_else(|| "config".to_string()),
                    error: e.to_string(),
                };
                if options.fail_fast {
                    bail!("step {} ({}) rejected: {}", index, step.action(), e);
                }
                status
            }
        };
        debug!(index, action = step.action(), host_block, "Step replayed");
        steps.push(StepReport {
            index,
            action: step.action(),
            host_block,
            status,
        });
    }

    let api = relay.api();
    let latest = api.get_latest_blocks();
    let validators = api.get_current_validators();
    Ok(ReplayReport {
        policy,
        steps,
        head: PointerReport {
            number: latest.head.number,
            hash: HexDisplay(&latest.head.hash).to_string(),
        },
        last_finalized: PointerReport {
            number: latest.last_finalized.number,
            hash: HexDisplay(&latest.last_finalized.hash).to_string(),
        },
        validators: validators
            .addresses
            .iter()
            .map(|a| HexDisplay(a).to_string())
            .collect(),
        threshold: validators.threshold,
    })
}

/// Outer error: the file itself is unusable. Inner error: the relay said no.
fn execute(relay: &Relay, step: &Step) -> anyhow::Result<Result<StepStatus, CheckpointError>> {
    let result = match step {
        Step::Receive(headers) => relay.api().receive_header(&decode_batch(headers)?),
        Step::Commit { root, headers } => {
            let Some(api) = relay.commit_api() else {
                bail!("commit steps need a lite or periodic checkpoint");
            };
            api.commit_header(&parse_hash(root)?, &decode_batch(headers)?)
        }
        Step::Replenish { root, headers } => {
            let Some(api) = relay.replenish_api() else {
                bail!("replenish steps need a periodic checkpoint");
            };
            api.replenish_header(&parse_hash(root)?, &decode_batch(headers)?)
        }
        Step::Check(header) => {
            let Some(api) = relay.replenish_api() else {
                bail!("check steps need a periodic checkpoint");
            };
            let valid = api.check_header(&decode_hex(header)?);
            return Ok(Ok(StepStatus::Checked { valid }));
        }
    };
    Ok(result.map(applied))
}

fn applied(outcome: BatchOutcome) -> StepStatus {
    StepStatus::Applied {
        accepted: outcome.accepted,
        duplicates: outcome.duplicates,
        finalized: outcome.finalized.iter().map(|b| b.number).collect(),
    }
}
