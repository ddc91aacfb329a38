// ============================================================
// Failure taxonomy. Every message aborts the call with
// user-error status 4; nothing written before it survives.
// ============================================================

// ── Authorization ──

/// Caller lacks the role the operation needs (administrator or member).
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";

// ── Validation ──

pub const ERR_INVALID_AMOUNT: &str = "InvalidAmount";
pub const ERR_INVALID_DEADLINE: &str = "InvalidDeadline";
/// Payee is the club itself; the release would leave the tracked balance.
pub const ERR_INVALID_TARGET: &str = "InvalidTarget";

// ── State conflicts ──

pub const ERR_PROPOSAL_NOT_FOUND: &str = "ProposalNotFound";
pub const ERR_ALREADY_EXECUTED: &str = "AlreadyExecuted";
pub const ERR_ALREADY_VOTED: &str = "AlreadyVoted";
/// Block time reached the deadline; ballots are no longer accepted.
pub const ERR_VOTING_CLOSED: &str = "VotingClosed";
/// Block time is still before the deadline; execution must wait.
pub const ERR_VOTING_STILL_OPEN: &str = "VotingStillOpen";
/// Tallies do not show a strict majority in favour.
pub const ERR_PROPOSAL_REJECTED: &str = "ProposalRejected";
pub const ERR_INSUFFICIENT_FUNDS: &str = "InsufficientFunds";
